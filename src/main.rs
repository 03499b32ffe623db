use grid_splitter::config::{self, RuntimeConfig};
use grid_splitter::image::io::write_json_file;
use grid_splitter::{GridSplitter, SplitError};
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<bool, String> {
    let config = parse_cli()?;
    let splitter = GridSplitter::new(config.split.resolve());

    let outcome = match splitter.split_image_file(&config.input, &config.output_dir) {
        Ok(outcome) => outcome,
        Err(err @ SplitError::Load { .. }) => {
            // Load failure: report, zero images processed.
            eprintln!("{err}");
            return Ok(false);
        }
        Err(err) => return Err(err.to_string()),
    };

    for path in &outcome.saved {
        println!("Saved: {}", path.display());
    }
    for failure in &outcome.failures {
        eprintln!("Export failed: {}: {}", failure.path.display(), failure.reason);
    }
    println!(
        "Saved {} images to {}",
        outcome.saved_count(),
        config.output_dir.display()
    );

    if let Some(path) = &config.report_json {
        write_json_file(path, &outcome.report)?;
        println!("Report written to {}", path.display());
    }

    Ok(outcome.failures.is_empty())
}

fn parse_cli() -> Result<RuntimeConfig, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [config_path] if config_path.ends_with(".json") => {
            config::load_config(Path::new(config_path))
        }
        [input, output_dir] => Ok(RuntimeConfig::from_paths(
            PathBuf::from(input),
            PathBuf::from(output_dir),
        )),
        _ => Err(usage()),
    }
}

fn usage() -> String {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "grid_splitter".to_string());
    format!("Usage: {program} <config.json>\n   or: {program} <input-image> <output-dir>")
}
