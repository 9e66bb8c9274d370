//! circex CLI - paragraph record extraction from circular PDFs

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use circex::{extract_file_with_options, ExtractOptions, Extraction, JsonFormat, PREVIEW_ROWS};

#[derive(Parser)]
#[command(name = "circex")]
#[command(version)]
#[command(about = "Extract paragraph records from regulatory circular PDFs", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output CSV file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Disable the OCR fallback for image-only pages
    #[arg(long, global = true)]
    no_ocr: bool,

    /// OCR rasterization resolution in DPI
    #[arg(long, global = true, default_value = "300", value_name = "DPI")]
    ocr_resolution: u32,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract paragraph records to a CSV file (with console preview)
    Extract {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output CSV file (derived from the input name if omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Number of rows to preview on the console
        #[arg(long, default_value_t = PREVIEW_ROWS, value_name = "N")]
        preview: usize,
    },

    /// Dump the concatenated page text
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Output paragraph rows as JSON
    Json {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show extracted document metadata
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = ExtractOptions::new()
        .with_ocr(!cli.no_ocr)
        .with_ocr_resolution(cli.ocr_resolution);

    let result = match cli.command {
        Some(Commands::Extract {
            input,
            output,
            preview,
        }) => cmd_extract(&input, output.as_deref(), preview, &options),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref(), &options),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact, &options),
        Some(Commands::Info { input }) => cmd_info(&input, &options),
        None => {
            if let Some(input) = cli.input {
                cmd_extract(&input, cli.output.as_deref(), PREVIEW_ROWS, &options)
            } else {
                println!("{}", "Usage: circex <FILE> [OUTPUT]".yellow());
                println!("       circex --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn extract_with_spinner(
    input: &Path,
    options: &ExtractOptions,
) -> Result<Extraction, Box<dyn std::error::Error>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Extracting {}...", input.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let extraction = extract_file_with_options(input, options.clone());
    pb.finish_and_clear();
    Ok(extraction?)
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    preview: usize,
    options: &ExtractOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}.csv", stem))
    });

    let extraction = extract_with_spinner(input, options)?;
    let rows = extraction.rows();

    // Rows are fully built before the output file is created, so a
    // fatal error never leaves a partial artifact behind.
    extraction.to_csv(&output)?;

    println!("{}", "Extracted paragraphs (preview):".green().bold());
    print!("{}", circex::preview(&rows, preview));
    println!(
        "{} {} {} {}",
        "Saved".green(),
        rows.len(),
        "rows to".green(),
        output.display()
    );
    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    options: &ExtractOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    use circex::PageSource;

    let mut source =
        circex::PdfPageSource::open(input)?.with_ocr_resolution(options.ocr_resolution);
    if !options.ocr {
        source = source.without_ocr();
    }
    let pages = source.pages()?;
    let text = circex::model::full_text(&pages);

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: &ExtractOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let extraction = extract_with_spinner(input, options)?;
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = extraction.to_json(format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }
    Ok(())
}

fn cmd_info(input: &Path, options: &ExtractOptions) -> Result<(), Box<dyn std::error::Error>> {
    let extraction = extract_with_spinner(input, options)?;
    let meta = &extraction.metadata;

    println!("{}", "Document information:".green().bold());
    println!("  {:<16} {}", "File:".dimmed(), extraction.file_name);
    println!("  {:<16} {}", "Sheet number:".dimmed(), meta.sheet_number);
    println!(
        "  {:<16} {}",
        "Effective date:".dimmed(),
        meta.effective_date
    );
    if let Some(date) = meta.effective_date_parsed() {
        println!("  {:<16} {}", "Parsed date:".dimmed(), date);
    }
    println!("  {:<16} {}", "Main heading:".dimmed(), meta.main_heading);
    println!(
        "  {:<16} {}",
        "Paragraphs:".dimmed(),
        extraction.paragraph_count()
    );
    Ok(())
}
