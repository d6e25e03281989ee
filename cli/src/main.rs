//! pdfoutline CLI - heading outline extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfoutline::render::{self, DebugInfo, JsonFormat, OutlineSummary, TocOptions};
use pdfoutline::text::format_confidence;
use pdfoutline::{extract_outline, load_document, Document, Outline, OutlineResult, Settings};

const DEFAULT_OUTPUT_DIR: &str = "output";
const OUTPUT_SUFFIX: &str = "_outline.json";

#[derive(Parser)]
#[command(name = "pdfoutline")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract heading outlines from PDF text layouts", long_about = None)]
struct Cli {
    /// Layout JSON file or directory of layout files
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Write the full outline report instead of the minimal result
    #[arg(long)]
    report: bool,

    /// Settings file (JSON)
    #[arg(long, global = true, value_name = "FILE", env = "PDFOUTLINE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract outlines from a layout file or directory
    Extract {
        /// Layout JSON file or directory of layout files
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output directory (stdout for a single file if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Write the full outline report instead of the minimal result
        #[arg(long)]
        report: bool,
    },

    /// Show outline statistics, quality and validation issues
    Inspect {
        /// Layout JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print debug information as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the table of contents
    Toc {
        /// Layout JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Deepest heading level to include (1-3)
        #[arg(long, default_value = "3")]
        max_level: u8,

        /// Omit page numbers
        #[arg(long)]
        no_pages: bool,
    },

    /// Show version information
    Version,
}

/// Output options for extraction.
#[derive(Debug, Clone, Copy)]
struct ExtractOptions {
    format: JsonFormat,
    report: bool,
}

impl ExtractOptions {
    fn new(compact: bool, report: bool) -> Self {
        Self {
            format: if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            },
            report,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    let result = load_settings(cli.config.as_deref()).and_then(|settings| match cli.command {
        Some(Commands::Extract {
            input,
            output,
            compact,
            report,
        }) => cmd_extract(
            &input,
            output.as_deref(),
            ExtractOptions::new(compact, report),
            &settings,
        ),
        Some(Commands::Inspect { input, json }) => cmd_inspect(&input, json, &settings),
        Some(Commands::Toc {
            input,
            max_level,
            no_pages,
        }) => cmd_toc(&input, max_level, no_pages, &settings),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: extract if input is provided
            if let Some(input) = cli.input {
                cmd_extract(
                    &input,
                    cli.output.as_deref(),
                    ExtractOptions::new(cli.compact, cli.report),
                    &settings,
                )
            } else {
                println!("{}", "Usage: pdfoutline <INPUT> [OUTPUT]".yellow());
                println!("       pdfoutline --help for more information");
                Ok(())
            }
        }
    });

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings, Box<dyn std::error::Error>> {
    let settings = match path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    settings.validate()?;
    Ok(settings)
}

/// Layout files to process: the file itself, or every `.json` file directly
/// inside a directory, sorted by name.
fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        return Err(format!("Input not found: {}", input.display()).into());
    }

    let mut files: Vec<PathBuf> = fs::read_dir(input)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file() && path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .collect();
    files.sort();
    Ok(files)
}

/// `<stem>_outline.json` inside the output directory.
fn output_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    output_dir.join(format!("{}{}", stem, OUTPUT_SUFFIX))
}

fn render_outline(
    doc: &Document,
    outline: &Outline,
    options: ExtractOptions,
) -> pdfoutline::Result<String> {
    if options.report {
        render::report_to_json(&outline.report(), options.format)
    } else {
        let result = OutlineResult::from_outline(doc.filename(), outline);
        render::result_to_json(&result, options.format)
    }
}

fn extract_file(
    input: &Path,
    settings: &Settings,
    options: ExtractOptions,
) -> pdfoutline::Result<(String, usize)> {
    let doc = load_document(input)?;
    let outline = extract_outline(&doc, settings);
    let json = render_outline(&doc, &outline, options)?;
    Ok((json, outline.total_headings()))
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    options: ExtractOptions,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    // A single file without an output directory goes to stdout
    if input.is_file() && output.is_none() {
        let (json, _) = extract_file(input, settings, options)?;
        println!("{}", json);
        return Ok(());
    }

    let files = collect_inputs(input)?;
    if files.is_empty() {
        println!("{} {}", "No layout files found in".yellow(), input.display());
        return Ok(());
    }

    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut failures = Vec::new();
    let mut total_headings = 0;
    for file in &files {
        let name = file.file_name().unwrap_or_default().to_string_lossy();
        pb.set_message(name.to_string());

        match extract_file(file, settings, options) {
            Ok((json, headings)) => {
                let path = output_path(&output_dir, file);
                if let Err(e) = fs::write(&path, json) {
                    failures.push((name.to_string(), e.to_string()));
                } else {
                    total_headings += headings;
                }
            }
            Err(e) => {
                log::warn!("Skipping {}: {}", file.display(), e);
                failures.push((name.to_string(), e.to_string()));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    let succeeded = files.len() - failures.len();
    println!(
        "\n{} {} of {} files, {} headings -> {}",
        "Processed".green().bold(),
        succeeded,
        files.len(),
        total_headings,
        output_dir.display()
    );
    for (name, error) in &failures {
        eprintln!("  {} {}: {}", "✗".red(), name, error);
    }

    Ok(())
}

fn cmd_inspect(
    input: &Path,
    json: bool,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let outline = extract_outline(&doc, settings);

    if json {
        let info = DebugInfo::collect(&doc, &outline);
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), doc.filename());
    println!("{}: {}", "Language".bold(), doc.language());
    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!("{}: {}", "Text blocks".bold(), doc.text_blocks().len());
    println!("{}: {:.1}pt", "Average font size".bold(), doc.avg_font_size());
    println!("{}: {}", "Primary font".bold(), doc.primary_font());

    println!();
    println!("{}", "Outline Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let summary = OutlineSummary::from_outline(&outline);
    println!("{}: {}", "Headings".bold(), summary.total_headings);
    for (level, count) in &summary.levels {
        println!("  {}: {}", level.to_uppercase(), count);
    }
    println!("{}: {}", "Pages covered".bold(), summary.pages_covered);
    println!(
        "{}: {}",
        "Average confidence".bold(),
        format_confidence(summary.average_confidence)
    );
    println!("{}: {:.2}", "Quality score".bold(), summary.quality_score);

    let metrics = outline.metrics();
    println!(
        "  {} balance {:.2}, coverage {:.2}, consistency {:.2}",
        "└─".dimmed(),
        metrics.hierarchy_balance,
        metrics.page_coverage,
        metrics.consistency
    );

    let issues = outline.validate_structure();
    println!();
    if issues.is_empty() {
        println!("{}", "No validation issues".green());
    } else {
        println!("{}", "Validation Issues".yellow().bold());
        for issue in &issues {
            println!("  {} {}", "!".yellow(), issue);
        }
    }

    Ok(())
}

fn cmd_toc(
    input: &Path,
    max_level: u8,
    no_pages: bool,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let outline = extract_outline(&doc, settings);

    if outline.is_empty() {
        println!("{}", "No headings detected".yellow());
        return Ok(());
    }

    let options = TocOptions::new()
        .with_max_level(max_level)
        .with_page_numbers(!no_pages);
    for line in render::table_of_contents(&outline, &options) {
        println!("{}", line);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfoutline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF heading outline extraction tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/pdfoutline".dimmed()
    );
    println!("License: MIT");
}
