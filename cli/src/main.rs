//! briefdoc CLI - Word brief outline extraction and cover generation
//!
//! Extracts heading outlines from DOCX briefs as Akoma Ntoso XML and fills
//! cover-page templates.

use briefdoc::cover::{CoverGenerator, CoverValues};
use briefdoc::docx::DocxParser;
use briefdoc::render::{AkomaOptions, JsonFormat};
use briefdoc::OutlineBuilder;
use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Word brief outline extraction and cover generation
#[derive(Parser)]
#[command(
    name = "briefdoc",
    author = "iyulab",
    version,
    about = "Extract heading outlines and fill cover pages in Word briefs",
    long_about = "briefdoc - Word brief tooling.\n\n\
                  Converts heading-structured DOCX files to Akoma Ntoso XML and \
                  generates cover pages from a placeholder template."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the heading outline as Akoma Ntoso XML
    #[command(visible_alias = "akn")]
    Outline {
        /// Input DOCX path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the detected heading outline (rank and text)
        #[arg(long)]
        toc: bool,

        /// Emit the outline as JSON instead of XML
        #[arg(long)]
        json: bool,

        /// Compact output (no indentation)
        #[arg(long)]
        compact: bool,

        /// Keep case-number banners and page numbers as body text
        #[arg(long)]
        keep_boilerplate: bool,
    },

    /// Fill the cover-page placeholders of a DOCX template
    Cover {
        /// Path to the DOCX template
        template: PathBuf,

        /// Path for the generated DOCX
        output: PathBuf,

        /// Case number text (e.g., 'No. 1234')
        #[arg(long)]
        case_number: String,

        /// Filing name text (e.g., 'APPELLANT'S BRIEF')
        #[arg(long)]
        filing_name: String,

        /// Judge name text
        #[arg(long)]
        judge: String,

        /// Preview replacements without writing output
        #[arg(long)]
        dry_run: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Outline {
            input,
            output,
            toc,
            json,
            compact,
            keep_boilerplate,
        } => {
            ensure_exists(&input, "Input DOCX")?;
            let pb = create_spinner("Parsing document...");

            let builder = OutlineBuilder::new().with_boilerplate_filter(!keep_boilerplate);
            let outline = DocxParser::open(&input)?.parse_with(&builder)?;
            pb.finish_and_clear();
            log::info!(
                "{} sections, {} paragraphs",
                outline.section_count(),
                outline.paragraph_count()
            );

            if toc {
                print!("{}", briefdoc::render::to_toc(&outline));
                if outline.is_empty() {
                    println!("{} No headings found", "!".yellow().bold());
                }
                // Preview only unless an output file was requested
                if output.is_none() {
                    return Ok(());
                }
            }

            let rendered = if json {
                let format = if compact {
                    JsonFormat::Compact
                } else {
                    JsonFormat::Pretty
                };
                briefdoc::render::to_json(&outline, format)?
            } else {
                let mut options = AkomaOptions::new();
                if compact {
                    options = options.compact();
                }
                briefdoc::render::to_akoma_ntoso(&outline, &options)?
            };

            write_output(output.as_deref(), &rendered)?;

            if let Some(ref path) = output {
                let kind = if json { "JSON" } else { "Akoma Ntoso XML" };
                println!(
                    "{} {} written to {}",
                    "✓".green().bold(),
                    kind,
                    path.display()
                );
            }
        }

        Commands::Cover {
            template,
            output,
            case_number,
            filing_name,
            judge,
            dry_run,
        } => {
            ensure_exists(&template, "Template")?;

            let values = CoverValues::new()
                .with_case_number(case_number)
                .with_filing_name(filing_name)
                .with_judge(judge);
            let generator = CoverGenerator::open(&template)?;

            if dry_run {
                let report = generator.preview(&values)?;
                println!("{}", "Dry run: proposed replacements".cyan().bold());
                for replacement in &report.replacements {
                    println!("- {}", replacement);
                }
                println!("No files were written (dry run).");
                return Ok(());
            }

            generator.write(&values, &output)?;
            println!(
                "{} Generated cover saved to {}",
                "✓".green().bold(),
                output.display()
            );
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "briefdoc".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Word brief outline extraction and cover generation");
    println!();
    println!("Outline output: Akoma Ntoso XML, JSON");
}

fn ensure_exists(path: &Path, what: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("{} not found: {}", what, path.display()).into());
    }
    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            if let Some(parent) = p.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}
