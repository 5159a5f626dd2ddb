use palm_reader::config::{self, EngineConfig, RunConfig};
use palm_reader::raster::{load_image, write_json_file};
use palm_reader::reading::Reading;
use palm_reader::{PalmReader, ReaderParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "palm_reader".to_string());
    let run_config: RunConfig = config::parse_cli(&program)?;

    let engine_config = match &run_config.engine_config {
        Some(path) => config::load_engine_config(path)?,
        None => EngineConfig::default(),
    };

    let buffer = load_image(&run_config.input_path)
        .map_err(|e| format!("Failed to load {}: {e}", run_config.input_path.display()))?;

    let reader = PalmReader::with_config(ReaderParams::default(), engine_config);
    let reading = match run_config.seed {
        Some(seed) => reader.read_buffer(&buffer, &mut StdRng::seed_from_u64(seed)),
        None => reader.read_buffer(&buffer, &mut StdRng::from_entropy()),
    };

    print_text_summary(&reading);

    if let Some(path) = &run_config.json_out {
        write_json_file(path, &reading)?;
        println!("\nJSON report written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(reading: &Reading) {
    let analysis = &reading.analysis;
    println!("Reading summary");
    println!(
        "  quality: {:?} (brightness={:.1} contrast={:.1})",
        analysis.quality.class, analysis.quality.brightness, analysis.quality.contrast
    );
    println!(
        "  hand detected: {} (coverage={:.3})",
        analysis.presence.hand_detected, analysis.presence.ratio
    );
    println!(
        "  orientation: {:?} (vertical={} horizontal={})",
        analysis.orientation.class,
        analysis.orientation.vertical_edges,
        analysis.orientation.horizontal_edges
    );
    println!("  confidence: {:.3}", analysis.confidence_score);
    println!(
        "  accuracy: {} method: {:?}",
        reading.accuracy_score, reading.analysis_method
    );
    println!("  latency_ms: {:.3}", reading.latency_ms);

    println!("\nRegions");
    for region in &analysis.regions {
        println!(
            "  {:<14} confidence={:.3} detected={} label={:?}",
            region.region.line_name(),
            region.confidence,
            region.detected,
            region.label
        );
    }

    println!("\nNarrative");
    for narrative in &reading.region_narratives {
        println!("  [{}] {}", narrative.region.line_name(), narrative.text);
    }
    println!("\n  {}", reading.overall_narrative);
}
