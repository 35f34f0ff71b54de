use numbench::utils::validation::Validate;
use numbench::{BenchEngine, CliConfig, SeriesParams, SeriesWorkload};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse_lenient();

    // 初始化日誌
    config.init_logging();

    tracing::info!("Starting numbench π series");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證參數
    let params = SeriesParams::default();
    if let Err(e) = params.validate() {
        tracing::error!("❌ Parameter validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
    tracing::debug!("Series parameters: {:?}", params);

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let mut engine = BenchEngine::new_with_monitoring(SeriesWorkload::new(params), config.monitor);
    let stdout = std::io::stdout();
    engine.run_and_report(&mut stdout.lock())?;

    Ok(())
}
