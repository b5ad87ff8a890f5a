use gdfmm::config::inpaint::load_config;
use gdfmm::image::io::{load_color_image, load_depth_image, save_depth_u16, write_json_file};
use gdfmm::image::ImageF32;
use gdfmm::Inpainter;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let depth_u16 = load_depth_image(&config.input.depth)?;
    let color = load_color_image(&config.input.color)?;
    let depth = ImageF32::from(&depth_u16);

    let inpainter = Inpainter::new(config.params.clone()).map_err(|e| e.to_string())?;
    let result = inpainter
        .fill_with(&depth, &color, &config.predictor)
        .map_err(|e| e.to_string())?;

    let depth_path = config.output.depth_path();
    save_depth_u16(&result.depth.to_u16(), &depth_path)?;
    println!(
        "Filled {} of {} unknown pixels ({} unreachable) with the {} predictor in {:.1} ms",
        result.report.stats.filled,
        result.report.stats.filled + result.report.stats.unreachable,
        result.report.stats.unreachable,
        result.report.predictor,
        result.report.timing.total_ms
    );
    println!("Saved filled depth to {}", depth_path.display());

    if let Some(report_path) = config.output.report_path() {
        write_json_file(&report_path, &result.report)?;
        println!("Saved report to {}", report_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: gdfmm_inpaint <config.json>".to_string()
}
