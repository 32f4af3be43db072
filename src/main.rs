use clap::Parser;
use mergington_activities::app::server;
use mergington_activities::utils::logger;
use mergington_activities::CliConfig;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();
    let (verbose, log_json) = (cli.verbose, cli.log_json);

    // The config file may change the log format, so the logger waits for it.
    let settings = match cli.into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_logger(verbose, log_json);
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code().max(1));
        }
    };

    logger::init_logger(settings.verbose, settings.log_json);
    tracing::info!("Starting mergington-activities on {}", settings.bind_addr());
    tracing::debug!("Resolved settings: {:?}", settings);

    if let Err(e) = server::run(settings).await {
        tracing::error!("❌ Server failed: {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code().max(1));
    }
}
