//! `hitlog doctor` - configuration and log diagnostics

use crate::server::config::AppConfig;
use crate::server::{load_config, validate_config};
use hitlog_store::EventLog;

pub async fn run() -> anyhow::Result<()> {
    println!("Hitlog Doctor\n");

    let config = match load_config() {
        Ok(config) => {
            println!("✅ Configuration loaded");
            config
        }
        Err(e) => {
            println!("❌ Configuration failed to load: {e:#}");
            std::process::exit(1);
        }
    };

    let mut all_ok = true;
    all_ok &= check_config(&config);
    all_ok &= check_event_log(&config).await;
    check_api_key(&config);

    println!();
    if all_ok {
        println!("✅ All checks passed! Ready to run Hitlog.");
    } else {
        println!("⚠️  Some checks failed. Please fix the issues above.");
        std::process::exit(1);
    }

    Ok(())
}

fn check_config(config: &AppConfig) -> bool {
    print!("Checking configuration values... ");
    match validate_config(config) {
        Ok(()) => {
            println!("✅ {}:{}", config.server.host, config.server.port);
            true
        }
        Err(e) => {
            println!("❌ {e}");
            false
        }
    }
}

async fn check_event_log(config: &AppConfig) -> bool {
    print!("Checking event log... ");
    let log = EventLog::new(config.log.path.clone());

    match log.read_all().await {
        Ok(rows) => {
            println!("✅ {} ({} rows)", log.path().display(), rows.len());
            true
        }
        Err(e) if e.is_not_found() => {
            println!(
                "⚠️  {} does not exist yet (created on first append)",
                log.path().display()
            );
            true
        }
        Err(e) => {
            println!("❌ {e}");
            false
        }
    }
}

fn check_api_key(config: &AppConfig) {
    print!("Checking WRITER_API_KEY... ");
    if config.provider.api_key.is_some() {
        println!("✅ set");
    } else {
        println!("⚠️  not set (summaries will use the statistics fallback)");
    }
}
