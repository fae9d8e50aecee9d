mod bootstrap;
mod report;

use anyhow::Result;
use clap::Parser;
use logstat_core::settings::Settings;
use logstat_data::analysis::analyze_log;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("logstat v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Analysing {}", settings.path.display());

    let analysis = analyze_log(&settings.path)?;

    match settings.format.as_str() {
        "json" => println!("{}", report::render_json(&analysis)?),
        _ => print!("{}", report::render_text(&analysis)),
    }

    Ok(())
}
