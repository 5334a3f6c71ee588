use clap::Parser;
use ocr_email_extractor::{runner, Config, EngineKind, ReportFormat};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "ocr-email-extractor")]
#[command(about = "Extract e-mail addresses from an image using OCR")]
#[command(version)]
pub struct Args {
    /// Image to scan
    pub image: PathBuf,

    /// File the addresses are written to, one per line
    #[arg(short, long, default_value = "emails.txt")]
    pub output: PathBuf,

    /// OCR engine backend
    #[arg(long, value_enum, default_value_t = EngineKind::Tesseract)]
    pub engine: EngineKind,

    /// Tesseract executable (tessdata directory for the leptess engine)
    #[arg(long, default_value = "tesseract")]
    pub engine_path: PathBuf,

    /// Recognition language (e.g., "eng", "deu", "fra")
    #[arg(short, long, default_value = "eng")]
    pub language: String,

    /// Tesseract page segmentation mode
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=13))]
    pub psm: Option<u8>,

    /// Path to tessdata directory
    #[arg(long)]
    pub tessdata_dir: Option<PathBuf>,

    /// Also save the binarized image handed to the OCR engine
    #[arg(long)]
    pub save_processed: Option<PathBuf>,

    /// Summary output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            image_path: args.image,
            output_path: args.output,
            engine: args.engine,
            engine_path: args.engine_path,
            language: args.language,
            page_segmentation_mode: args.psm,
            tessdata_path: args.tessdata_dir,
            save_processed: args.save_processed,
            format: args.format,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from(args);

    tracing::info!(
        "Starting ocr-email-extractor v{}",
        env!("CARGO_PKG_VERSION")
    );

    let summary = runner::run_configured(&config).map_err(|e| {
        tracing::error!(code = e.code(), "{}", e);
        e
    })?;

    match config.format {
        ReportFormat::Text => println!("{}", summary.report),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}
