//! EvoMetric - paints a learning roadmap onto the desktop wallpaper
//!
//! Without a subcommand the roadmap is rendered and applied.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use evometric::application::ports::DocumentRepository;
use evometric::application::use_cases::{
    AddPracticeUseCase, CompletePracticeUseCase, ConfigureLayoutUseCase, LayoutChanges,
    RenderReport, RenderWallpaperUseCase, SetBackgroundUseCase,
};
use evometric::domain::entities::RoadmapDocument;
use evometric::domain::value_objects::Rgb;
use evometric::infrastructure::{
    FileCompletionLog, FontSet, ImageLibrary, JsonDocumentStore, RasterCompositor,
};
use evometric::log;
use evometric::platform::SystemDesktop;
use evometric::shared::AppConfig;

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "evometric")]
#[command(about = "Render a learning roadmap checklist as the desktop wallpaper")]
struct Cli {
    /// Configuration file (default: evometric.toml in the config dir, exe dir or cwd)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Roadmap JSON, overrides document_path from the configuration
    #[arg(short, long, global = true)]
    document: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the roadmap and apply it as wallpaper
    Render,
    /// Print overall progress without rendering
    Status,
    /// Add a pending practice, then render
    Add {
        /// Part of the module name, e.g. "Semana 3"
        #[arg(short, long)]
        module: String,

        /// Exact subtopic name
        #[arg(short, long)]
        subtopic: String,

        /// Practice to add
        #[arg(short, long)]
        name: String,
    },
    /// List pending practices with their numbers
    Pending,
    /// Mark the n-th pending practice done, then render
    Complete {
        /// Number shown by `pending`
        index: usize,
    },
    /// Change colors and outline width, then render
    Configure {
        /// Background color as "R, G, B"
        #[arg(long)]
        background_color: Option<Rgb>,

        /// Main text color as "R, G, B"
        #[arg(long)]
        text_color: Option<Rgb>,

        /// Completed text color as "R, G, B"
        #[arg(long)]
        completed_color: Option<Rgb>,

        /// Outline color as "R, G, B"
        #[arg(long)]
        outline_color: Option<Rgb>,

        /// Outline width, 0 to 5
        #[arg(long, allow_negative_numbers = true)]
        outline_width: Option<i32>,
    },
    /// Use an image as the wallpaper background, then render
    Background {
        image: PathBuf,

        /// Accept images smaller than the minimum size
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path),
        None => AppConfig::load(),
    };
    let mut config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };
    if let Some(document) = cli.document {
        config.document_path = document;
    }

    log::init(&config.log_path());
    log!("main() starting, document {:?}", config.document_path);

    match run(cli.command.unwrap_or(Commands::Render), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log!("Error: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: &AppConfig) -> CliResult {
    let store = JsonDocumentStore::new(&config.document_path);

    match command {
        Commands::Render => {
            let report = renderer(config).execute_from(&store)?;
            print_report(&report);
            Ok(())
        }
        Commands::Status => {
            let document = store.load()?;
            let counters = document.counters();
            println!("{}", document.title);
            println!("{}", counters.caption());
            println!("{} pending", counters.total - counters.completed);
            Ok(())
        }
        Commands::Add {
            module,
            subtopic,
            name,
        } => {
            let document = AddPracticeUseCase::new(&store).execute(&module, &subtopic, &name)?;
            println!("Added '{}' to {} > {}", name.trim(), module, subtopic);
            render(config, &document)
        }
        Commands::Pending => {
            let pending = store.load()?.pending_practices();
            if pending.is_empty() {
                println!("No pending practices");
            }
            for (i, practice) in pending.iter().enumerate() {
                println!("{:>3}. {}", i + 1, practice.label);
            }
            Ok(())
        }
        Commands::Complete { index } => {
            let completions = FileCompletionLog::beside(store.path());
            let use_case =
                CompletePracticeUseCase::new(&store, &completions).with_cooldown(config.cooldown());
            let completion = use_case.execute(index, unix_now())?;
            println!("Completed {}", completion.label);
            if let Err(e) = &completion.recorded {
                eprintln!("Warning: cooldown not started, completion time not recorded: {}", e);
            }
            render(config, &completion.document)
        }
        Commands::Configure {
            background_color,
            text_color,
            completed_color,
            outline_color,
            outline_width,
        } => {
            let changes = LayoutChanges {
                background_color,
                text_color,
                completed_color,
                outline_color,
                outline_width,
            };
            if changes.is_empty() {
                println!("Nothing to change");
                return Ok(());
            }
            let document = ConfigureLayoutUseCase::new(&store).execute(changes)?;
            render(config, &document)
        }
        Commands::Background { image, force } => {
            let library = ImageLibrary;
            let document = SetBackgroundUseCase::new(&store, &library)
                .with_minimum(config.min_background())
                .execute(&image, force)?;
            render(config, &document)
        }
    }
}

/// Pipeline with fonts resolved for this run
fn renderer(config: &AppConfig) -> RenderWallpaperUseCase<RasterCompositor, SystemDesktop> {
    let fonts = Arc::new(FontSet::resolve(
        &config.font_family,
        config.fallback_font_size,
    ));
    RenderWallpaperUseCase::new(RasterCompositor::new(fonts), SystemDesktop)
}

/// Render, save and apply an edited `document`, then report the outcome
fn render(config: &AppConfig, document: &RoadmapDocument) -> CliResult {
    let report = renderer(config).execute(document)?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &RenderReport) {
    println!("{}", report.counters.caption());
    println!("Wallpaper saved to {}", report.output_path.display());
    if let Err(e) = &report.applied {
        eprintln!("Warning: {}", e);
    }
}

/// Seconds since the Unix epoch
fn unix_now() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
