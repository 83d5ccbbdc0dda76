//! pdfdiff CLI - PDF text comparison tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfdiff::{render, Change, DiffReport, ExtractOptions, JsonFormat, TextExtractor};

#[derive(Parser)]
#[command(name = "pdfdiff")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Compare the text content of two PDF files", long_about = None)]
struct Cli {
    /// Old (original) PDF file
    #[arg(value_name = "OLD")]
    old: Option<PathBuf>,

    /// New (modified) PDF file
    #[arg(value_name = "NEW")]
    new: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two PDF files and show the classified diff
    Compare {
        /// Old (original) PDF file
        #[arg(value_name = "OLD")]
        old: PathBuf,

        /// New (modified) PDF file
        #[arg(value_name = "NEW")]
        new: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output JSON instead of a text view
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,

        /// Render a two-column side-by-side view
        #[arg(long, conflicts_with = "json")]
        side_by_side: bool,

        /// Column width for the side-by-side view
        #[arg(long, default_value = "60")]
        width: usize,

        /// Hide unchanged lines
        #[arg(long)]
        changes_only: bool,

        #[command(flatten)]
        extract: ExtractArgs,
    },

    /// Extract the text content of a single PDF file
    Extract {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        extract: ExtractArgs,
    },

    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args)]
struct ExtractArgs {
    /// Disable the OCR fallback for scanned pages
    #[arg(long)]
    no_ocr: bool,

    /// OCR rasterization resolution
    #[arg(long, default_value = "300")]
    dpi: u32,

    /// OCR language code (e.g., eng, deu, kor)
    #[arg(long, default_value = "eng")]
    lang: String,
}

impl ExtractArgs {
    fn to_options(&self) -> ExtractOptions {
        let mut options = ExtractOptions::new()
            .with_ocr_dpi(self.dpi)
            .with_ocr_lang(&self.lang);
        if self.no_ocr {
            options = options.without_ocr();
        }
        options
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Compare {
            old,
            new,
            output,
            json,
            compact,
            side_by_side,
            width,
            changes_only,
            extract,
        }) => cmd_compare(
            &old,
            &new,
            output.as_deref(),
            json,
            compact,
            side_by_side,
            width,
            changes_only,
            &extract,
        ),
        Some(Commands::Extract {
            input,
            output,
            extract,
        }) => cmd_extract(&input, output.as_deref(), &extract),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => match (cli.old, cli.new) {
            // Default behavior: compare when both files are provided
            (Some(old), Some(new)) => {
                let extract = ExtractArgs {
                    no_ocr: false,
                    dpi: 300,
                    lang: "eng".to_string(),
                };
                cmd_compare(&old, &new, None, false, false, false, 60, false, &extract)
            }
            _ => {
                println!("{}", "Usage: pdfdiff <OLD> <NEW>".yellow());
                println!("       pdfdiff --help for more information");
                Ok(())
            }
        },
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_compare(
    old: &Path,
    new: &Path,
    output: Option<&Path>,
    json: bool,
    compact: bool,
    side_by_side: bool,
    width: usize,
    changes_only: bool,
    extract: &ExtractArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!(
        "Comparing {} and {}...",
        old.display(),
        new.display()
    ));

    let report = pdfdiff::compare_files_with_options(old, new, extract.to_options())?;

    pb.finish_and_clear();

    if json {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        let rendered = render::to_json(&report, format)?;
        return write_or_print(output, &rendered);
    }

    if let Some(path) = output {
        let rendered = if side_by_side {
            render::to_text_side_by_side(&report, width)
        } else {
            render::to_text(&report)
        };
        fs::write(path, rendered)?;
        println!("{} {}", "Saved to".green(), path.display());
        print_summary(&report);
        return Ok(());
    }

    if side_by_side {
        println!("{}", render::to_text_side_by_side(&report, width));
    } else {
        print_colored_diff(&report, changes_only);
    }
    print_summary(&report);

    Ok(())
}

/// Print the inline diff view with the frontend color convention:
/// green added, red removed, yellow modified.
fn print_colored_diff(report: &DiffReport, changes_only: bool) {
    for change in &report.changes {
        match change {
            Change::Unchanged { text } => {
                if !changes_only {
                    println!("  {}", text);
                }
            }
            Change::Added { text } => println!("{}", format!("+ {}", text).green()),
            Change::Removed { text } => println!("{}", format!("- {}", text).red()),
            Change::Modified { old, new } => {
                println!("{}", format!("- {}", old).yellow());
                println!("{}", format!("+ {}", new).yellow());
            }
        }
    }
}

fn print_summary(report: &DiffReport) {
    let summary = &report.summary;
    println!();
    println!("{}", "Summary of Changes".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Additions".green(), summary.added);
    println!("{}: {}", "Deletions".red(), summary.removed);
    println!("{}: {}", "Modifications".yellow(), summary.modified);

    if !report.has_changes() {
        println!("{}", "The documents have identical text content.".dimmed());
    }
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    extract: &ExtractArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Extracting {}...", input.display()));

    let data = fs::read(input)?;
    let text = pdfdiff::extract_text_with_options(&data, extract.to_options())?;

    pb.finish_and_clear();

    write_or_print(output, &text)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = TextExtractor::open(input)?;
    let info = extractor.info();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "PDF version".bold(), info.pdf_version);
    println!("{}: {}", "Pages".bold(), info.page_count);

    if let Some(ref title) = info.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = info.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref subject) = info.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref producer) = info.producer {
        println!("{}: {}", "Producer".bold(), producer);
    }
    if let Some(created) = info.created {
        println!("{}: {}", "Created".bold(), created.to_rfc3339());
    }
    if let Some(modified) = info.modified {
        println!("{}: {}", "Modified".bold(), modified.to_rfc3339());
    }

    Ok(())
}

fn cmd_version() {
    println!("pdfdiff {}", env!("CARGO_PKG_VERSION"));
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}
