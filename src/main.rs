use std::path::Path;
use std::time::Instant;

use clap::Parser;
use dotenv::dotenv;
use log::{error, info};

use gesture_prep::builder::build_bundle;
use gesture_prep::cli::{Cli, Commands};
use gesture_prep::export::to_unity_vector3_list;
use gesture_prep::loader::load_points;
use gesture_prep::logger;
use gesture_prep::utils::format_elapsed;
use gesture_prep::{AppConfig, Normalizer};

fn main() {
    dotenv().ok(); // 加载 .env 文件，便于设置 RUST_LOG

    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            AppConfig::load_from_file(path)?
        }
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Build {
            root,
            output,
            normalize,
            skip_invalid,
        } => {
            normalize.apply_to(&mut config);
            if let Some(root) = root {
                config.dataset.root = root.to_string_lossy().into_owned();
            }
            if let Some(output) = output {
                config.dataset.output = output.to_string_lossy().into_owned();
            }
            if skip_invalid {
                config.dataset.skip_invalid = true;
            }
            config.validate()?;
            build_dataset(&config)
        }
        Commands::Export {
            input,
            output,
            normalize,
        } => {
            normalize.apply_to(&mut config);
            config.validate()?;
            export_gesture(&config, &input, output.as_deref())
        }
        Commands::InitConfig { path } => {
            AppConfig::default().save_to_file(&path)?;
            info!("Wrote default config to {}", path.display());
            Ok(())
        }
    }
}

fn build_dataset(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();
    let summary = build_bundle(config)?;

    for class in &summary.classes {
        info!("  {:<20} label {:>3}  {} examples", class.name, class.label, class.examples);
    }
    info!(
        "Done: {} gestures in {} classes ({})",
        summary.total_examples,
        summary.classes.len(),
        format_elapsed(started.elapsed())
    );
    Ok(())
}

fn export_gesture(
    config: &AppConfig,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let points = load_points(input)?;
    let mut normalizer = Normalizer::new(config.normalize.clone())?;
    let rendered = to_unity_vector3_list(&normalizer.apply(&points)?);

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            info!("Wrote gesture ({} recorded points) to {}", points.len(), path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
