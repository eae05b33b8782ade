extern crate log;
pub mod geofile;
pub mod ortho;
pub mod stats;
use crate::geofile::geojson::{read_features_from_geojson, write_features_to_geojson};
use crate::ortho::options::NormalizeOptions;
use crate::ortho::processor::normalize_features;
use crate::stats::feature_stats::collect_feature_stats;
use anyhow::anyhow;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use std::{fs::read_to_string, path::Path};

/// Normalize building-footprint polygons into grid-aligned shapes for
/// pixel-art map rendering.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input config file.
    #[arg(short, long)]
    config_filepath: String,
}

#[derive(Deserialize, Debug)]
struct Config {
    input_geojson_path: PathBuf,
    output_geojson_path: PathBuf,
    #[serde(default)]
    options: NormalizeOptions,
}

fn try_main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }

    let args = Args::try_parse()?;
    if !Path::new(&args.config_filepath).exists() {
        return Err(anyhow!("Config file {} not found", &args.config_filepath));
    }
    let config_contents = read_to_string(args.config_filepath)?;
    let config: Config = serde_yaml::from_str(&config_contents)?;

    log::info!("Reading features from {:?}", &config.input_geojson_path);
    let features = read_features_from_geojson(&config.input_geojson_path)?;
    log::info!("Read {} features", features.len());
    log::info!("Input statistics: {:?}", collect_feature_stats(&features));

    let normalized = normalize_features(features, &config.options)?;
    log::info!(
        "Normalized {} of {} features with options {:?}",
        normalized.summary.processed_count,
        normalized.summary.original_count,
        normalized.summary.options
    );
    log::info!(
        "Output statistics: {:?}",
        collect_feature_stats(&normalized.features)
    );

    log::info!(
        "Writing normalized features to {:?}",
        &config.output_geojson_path
    );
    write_features_to_geojson(&normalized.features, &config.output_geojson_path)?;
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = try_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1)
    }
}
