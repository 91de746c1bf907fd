//! pdfoutline CLI - title and outline inference from extracted PDF text

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfoutline::render::{to_json, to_markdown};
use pdfoutline::{
    analyze_many, read_fragments, AnalysisOptions, Error, HeadingLevel, JsonFormat, NoiseLabel,
    StructureAnalyzer,
};

#[derive(Parser)]
#[command(name = "pdfoutline")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Infer a title and H1/H2 outline from extracted PDF text fragments", long_about = None)]
struct Cli {
    #[command(flatten)]
    tuning: TuningArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command.
#[derive(Args)]
struct TuningArgs {
    /// Share of ToC-looking lines that turns a whole page into a ToC page
    #[arg(long, global = true, env = "PDFOUTLINE_TOC_RATIO", default_value_t = 0.5)]
    toc_ratio: f32,

    /// Font sizes within this many points count as equal
    #[arg(long, global = true, env = "PDFOUTLINE_TOLERANCE", default_value_t = 0.05)]
    tolerance: f32,

    /// Maximum words for a bold body-size line to become H2
    #[arg(long, global = true, env = "PDFOUTLINE_MAX_H2_WORDS", default_value_t = 10)]
    max_h2_words: usize,

    /// Process documents one at a time
    #[arg(long, global = true)]
    sequential: bool,
}

impl TuningArgs {
    fn options(&self) -> AnalysisOptions {
        AnalysisOptions::new()
            .with_toc_page_ratio(self.toc_ratio)
            .with_font_size_tolerance(self.tolerance)
            .with_max_h2_words(self.max_h2_words)
            .with_parallel(!self.sequential)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Infer title and outline for one fragment file
    Outline {
        /// Input fragment file (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long, conflicts_with = "markdown")]
        compact: bool,

        /// Output a Markdown outline instead of JSON
        #[arg(short, long)]
        markdown: bool,
    },

    /// Process every fragment file in a directory
    Batch {
        /// Directory with `*.json` fragment files
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Directory for `<name>.json` results
        #[arg(value_name = "OUTPUT_DIR")]
        output: PathBuf,
    },

    /// Show intermediate analysis for one fragment file
    Inspect {
        /// Input fragment file (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = cli.tuning.options();

    let result = match cli.command {
        Commands::Outline {
            input,
            output,
            compact,
            markdown,
        } => cmd_outline(&input, output.as_deref(), compact, markdown, &options),
        Commands::Batch { input, output } => cmd_batch(&input, &output, &options),
        Commands::Inspect { input } => cmd_inspect(&input, &options),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    markdown: bool,
    options: &AnalysisOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let fragments = read_fragments(input)?;
    let result = StructureAnalyzer::with_options(options.clone()).analyze(&fragments);

    let rendered = if markdown {
        to_markdown(&result)
    } else if compact {
        to_json(&result, JsonFormat::Compact)?
    } else {
        to_json(&result, JsonFormat::Pretty)?
    };

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: &Path,
    options: &AnalysisOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = fragment_files(input)?;
    if files.is_empty() {
        return Err(Error::Other(format!("no .json files in {}", input.display())).into());
    }

    let pb = ProgressBar::new(files.len() as u64 * 2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let written = run_batch(&files, output, options, &pb)?;
    pb.finish_with_message("Done!");

    println!(
        "\n{} {} outlines written to {}",
        "Done!".green().bold(),
        written.len(),
        output.display()
    );
    for (i, path) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        println!("  {} {}", branch.dimmed(), name);
    }

    Ok(())
}

/// `*.json` files directly inside `dir`, sorted by name.
fn fragment_files(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read every file, analyze all documents at once and write one result
/// per input. Returns the written paths.
fn run_batch(
    files: &[PathBuf],
    output: &Path,
    options: &AnalysisOptions,
    pb: &ProgressBar,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    fs::create_dir_all(output)?;

    let mut documents = Vec::with_capacity(files.len());
    for path in files {
        pb.set_message(format!("Reading {}", path.display()));
        let fragments =
            read_fragments(path).map_err(|e| format!("{}: {}", path.display(), e))?;
        documents.push(fragments);
        pb.inc(1);
    }

    pb.set_message("Analyzing...");
    let results = analyze_many(&documents, options);

    let mut written = Vec::with_capacity(files.len());
    for (path, result) in files.iter().zip(&results) {
        let stem = path.file_stem().unwrap_or_default().to_string_lossy();
        let target = output.join(format!("{}.json", stem));
        fs::write(&target, to_json(result, JsonFormat::Pretty)?)?;
        log::debug!("Wrote {}", target.display());
        written.push(target);
        pb.inc(1);
    }

    Ok(written)
}

fn cmd_inspect(input: &Path, options: &AnalysisOptions) -> Result<(), Box<dyn std::error::Error>> {
    let fragments = read_fragments(input)?;
    let analysis = StructureAnalyzer::with_options(options.clone()).inspect(&fragments);

    println!("{}", "Font Profile".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    match analysis.profile.paragraph_font_size {
        Some(size) => println!("{}: {:.1}pt", "Paragraph size".bold(), size),
        None => println!("{}: {}", "Paragraph size".bold(), "none (degraded)".yellow()),
    }
    for (size, count) in analysis.profile.sizes() {
        println!("  {:>6.1}pt  {}", size, count);
    }

    println!();
    println!("{}", "Noise Labels".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    let counts = analysis.label_counts();
    for label in NoiseLabel::ALL {
        println!("{}: {}", label.as_str().bold(), counts.get(&label).copied().unwrap_or(0));
    }
    if !analysis.toc_pages.is_empty() {
        let pages: Vec<String> = analysis.toc_pages.iter().map(|p| p.to_string()).collect();
        println!("{}: {}", "ToC pages".bold(), pages.join(", "));
    }

    println!();
    println!("{}", "Outline".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    let result = &analysis.result;
    if result.has_title() {
        println!("{}: {}", "Title".bold(), result.title);
    } else {
        println!("{}: {}", "Title".bold(), "(none)".dimmed());
    }
    println!("{}: {}", "H1".bold(), result.count(HeadingLevel::H1));
    println!("{}: {}", "H2".bold(), result.count(HeadingLevel::H2));

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfoutline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Title and outline inference for extracted PDF text");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOC: &str = r#"[
        {"text": "Budget Overview", "page": 1, "font_size": 22.0},
        {"text": "Spending", "page": 1, "font_size": 14.0},
        {"text": "Spending stayed within plan.", "page": 1, "font_size": 11.0},
        {"text": "Travel was reduced.", "page": 1, "font_size": 11.0}
    ]"#;

    #[test]
    fn test_fragment_files_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.json"), DOC).unwrap();
        fs::write(dir.path().join("a.json"), DOC).unwrap();
        fs::write(dir.path().join("notes.txt"), "skip").unwrap();

        let files = fragment_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_run_batch_writes_results() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("budget.json"), DOC).unwrap();
        fs::write(input.path().join("empty.json"), "[]").unwrap();

        let files = fragment_files(input.path()).unwrap();
        let out_dir = output.path().join("results");
        let written = run_batch(&files, &out_dir, &AnalysisOptions::default(), &ProgressBar::hidden())
            .unwrap();
        assert_eq!(written.len(), 2);

        let json = fs::read_to_string(out_dir.join("budget.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "Budget Overview");
        assert_eq!(value["outline"][0]["text"], "Spending");

        let json = fs::read_to_string(out_dir.join("empty.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "");
    }

    #[test]
    fn test_run_batch_reports_bad_file() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("broken.json"), "{").unwrap();

        let files = fragment_files(input.path()).unwrap();
        let err = run_batch(&files, output.path(), &AnalysisOptions::default(), &ProgressBar::hidden())
            .unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from([
            "pdfoutline",
            "outline",
            "doc.json",
            "--markdown",
            "--toc-ratio",
            "0.7",
            "--sequential",
        ])
        .unwrap();

        let options = cli.tuning.options();
        assert_eq!(options.toc_page_ratio, 0.7);
        assert!(!options.parallel);
        assert!(matches!(cli.command, Commands::Outline { markdown: true, .. }));
    }
}
