use numbench::utils::validation::Validate;
use numbench::{BenchEngine, CliConfig, SubarrayParams, SubarrayWorkload};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse_lenient();

    // 初始化日誌
    config.init_logging();

    tracing::info!("Starting numbench max subarray");

    let params = SubarrayParams::default();
    if let Err(e) = params.validate() {
        tracing::error!("❌ Parameter validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
    tracing::debug!("Subarray parameters: {:?}", params);

    let mut engine =
        BenchEngine::new_with_monitoring(SubarrayWorkload::new(params), config.monitor);
    let stdout = std::io::stdout();
    engine.run_and_report(&mut stdout.lock())?;

    Ok(())
}
