use anyhow::Context;
use clap::Parser;
use parser_paths::core::ConfigProvider;
use parser_paths::utils::error::{AppError, ErrorSeverity};
use parser_paths::utils::{logger, validation::Validate};
use parser_paths::{CliConfig, EntryPoint, Plan, TomlConfig};
use std::io;

fn main() {
    let config = CliConfig::parse();

    if let Err(err) = run(config) {
        let exit_code = match err.downcast_ref::<AppError>() {
            Some(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());

                // 根據錯誤嚴重程度決定退出碼
                match e.severity() {
                    ErrorSeverity::Low => 0,
                    ErrorSeverity::Medium => 2,
                    ErrorSeverity::High => 1,
                    ErrorSeverity::Critical => 3,
                }
            }
            None => {
                eprintln!("❌ {:#}", err);
                1
            }
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(mut config: CliConfig) -> anyhow::Result<()> {
    if let Some(path) = config.config.clone() {
        let file = TomlConfig::from_file(&path)
            .with_context(|| format!("failed to load config file '{}'", path))?;
        file.validate()?;
        config.merge_file(&file);
    }
    config.validate()?;

    if config.log_format() == "json" {
        logger::init_json_logger(config.verbose());
    } else {
        logger::init_cli_logger(config.verbose());
    }
    tracing::debug!("CLI config: {:?}", config);

    let entry = EntryPoint::new_with_monitoring(Plan::default(), config.monitor());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no callable will be invoked");
        entry.describe(&mut out)?;
        return Ok(());
    }

    // 此處之後 subscriber 已安裝
    entry.run(&mut out).inspect_err(|e| {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
    })?;
    Ok(())
}
