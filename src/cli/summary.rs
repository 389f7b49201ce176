//! `hitlog summary` - one-shot log summary

use crate::api::events::SummaryResponse;
use crate::server::{build_summary_service, load_config, validate_config};
use anyhow::{bail, Context, Result};

pub async fn run() -> Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    validate_config(&config)?;

    let service = build_summary_service(&config)?;

    let summary = match service.summarize_log().await {
        Ok(summary) => summary,
        Err(e) if e.is_not_found() => {
            bail!("No event log at {}", service.log().path().display())
        }
        Err(e) => return Err(e).context("Failed to summarize event log"),
    };

    let response = SummaryResponse::from(summary);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
