use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use purifier_core::imaging::infrastructure::thumbnail::convert_thumbnail;
use purifier_core::layout::domain::region_plan::{Layout, Packing};
use purifier_core::pipeline::batch_purify_use_case::BatchPurifyUseCase;
use purifier_core::pipeline::pipeline_logger::{LogPipelineLogger, PipelineLogger};
use purifier_core::pipeline::purify_image_use_case::PurifyImageUseCase;
use purifier_core::shared::config::PurifierConfig;

/// Binarize rhythm-game result screenshots for OCR.
#[derive(Parser)]
#[command(name = "purifier")]
struct Cli {
    /// Screenshot file, or a directory to process every image in it.
    input: PathBuf,

    /// Directory for the composed `after_<name>` images.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// JSON file with purifier settings; flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Region layout: four or three.
    #[arg(long)]
    layout: Option<String>,

    /// Canvas packing: packed or source.
    #[arg(long)]
    packing: Option<String>,

    /// JPEG quality (1-100).
    #[arg(long)]
    quality: Option<u8>,

    /// Classify regions on the calling thread only.
    #[arg(long)]
    sequential: bool,

    /// Print the base64 JPEG to stdout (single file only).
    #[arg(long)]
    print_base64: bool,

    /// Also write an 80x80 JPEG thumbnail of the input here.
    #[arg(long)]
    thumbnail: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;
    let config = build_config(&cli)?;

    if cli.input.is_dir() {
        run_batch(&cli.input, config)
    } else {
        run_single(&cli, config)
    }
}

fn run_batch(input: &Path, config: PurifierConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut logger = LogPipelineLogger::default();
    let batch = BatchPurifyUseCase::new(PurifyImageUseCase::from_config(config));
    let summary = batch.execute(input, &mut logger)?;
    log::info!(
        "Purified {} images, {} failed",
        summary.processed.len(),
        summary.failed.len()
    );
    for (path, reason) in &summary.failed {
        eprintln!("{}: {reason}", path.display());
    }
    Ok(())
}

fn run_single(cli: &Cli, config: PurifierConfig) -> Result<(), Box<dyn std::error::Error>> {
    let thumbnail_size = config.thumbnail_size;
    let quality = config.jpeg_quality;
    let mut logger = LogPipelineLogger::default();
    let use_case = PurifyImageUseCase::from_config(config);

    let output = use_case.execute(&cli.input, &mut logger)?;
    if let Some(path) = &output.saved_to {
        log::info!("Output written to {}", path.display());
    }
    if cli.print_base64 {
        println!("{}", output.base64);
    }

    if let Some(thumb_path) = &cli.thumbnail {
        let bytes = std::fs::read(&cli.input)?;
        std::fs::write(thumb_path, convert_thumbnail(&bytes, thumbnail_size, quality)?)?;
        log::info!("Thumbnail written to {}", thumb_path.display());
    }
    logger.summary();
    Ok(())
}

fn build_config(cli: &Cli) -> Result<PurifierConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => PurifierConfig::load(path)?,
        None => PurifierConfig::default(),
    };
    if let Some(dir) = &cli.output_dir {
        config.output_dir = Some(dir.clone());
    }
    if let Some(layout) = &cli.layout {
        config.layout = parse_layout(layout)?;
    }
    if let Some(packing) = &cli.packing {
        config.packing = parse_packing(packing)?;
    }
    if let Some(quality) = cli.quality {
        config.jpeg_quality = quality;
    }
    if cli.sequential {
        config.parallel = false;
    }
    Ok(config)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input not found: {}", cli.input.display()).into());
    }
    if let Some(q) = cli.quality {
        if !(1..=100).contains(&q) {
            return Err(format!("Quality must be between 1 and 100, got {q}").into());
        }
    }
    if cli.input.is_dir() && (cli.print_base64 || cli.thumbnail.is_some()) {
        return Err("--print-base64 and --thumbnail need a single input file".into());
    }
    Ok(())
}

fn parse_layout(value: &str) -> Result<Layout, String> {
    match value {
        "four" => Ok(Layout::FourRegion),
        "three" => Ok(Layout::ThreeRegion),
        other => Err(format!("Layout must be 'four' or 'three', got '{other}'")),
    }
}

fn parse_packing(value: &str) -> Result<Packing, String> {
    match value {
        "packed" => Ok(Packing::Packed),
        "source" => Ok(Packing::SourceOffsets),
        other => Err(format!("Packing must be 'packed' or 'source', got '{other}'")),
    }
}
