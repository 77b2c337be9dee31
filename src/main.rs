use clap::Parser;
use voyage_rating::core::report;
use voyage_rating::utils::{logger, validation::Validate};
use voyage_rating::{CliConfig, RatingBreakdown, RatingEngine, RatingError, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting voyage-rating");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        exit_with(&e);
    }

    let (result, format, explain) = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);

            let mut config = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}'", path);
                    exit_with(&e);
                }
            };

            if let Err(e) = cli.apply_overrides(&mut config) {
                exit_with(&e);
            }

            if let Err(e) = config.validate() {
                exit_with(&e);
            }
            tracing::info!("✅ Configuration loaded and validated successfully");

            let format = config.output_format().to_string();
            let explain = config.explain();
            (RatingEngine::new(config).run(), format, explain)
        }
        None => (
            RatingEngine::new(cli.clone()).run(),
            cli.output_format().to_string(),
            cli.explain,
        ),
    };

    match result {
        Ok(breakdown) => print_breakdown(&breakdown, &format, explain)?,
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn print_breakdown(breakdown: &RatingBreakdown, format: &str, explain: bool) -> anyhow::Result<()> {
    let output = report::render(breakdown, format, explain)?;
    println!("{}", output);
    Ok(())
}

fn exit_with(e: &RatingError) -> ! {
    tracing::error!(
        "❌ Rating failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}
