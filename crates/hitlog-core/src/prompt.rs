//! Prompt construction

use crate::error::{Error, Result};
use hitlog_store::LogRecord;

/// Build the summarization prompt, embedding every record as JSON
pub fn build_prompt(records: &[LogRecord]) -> Result<String> {
    let json = serde_json::to_string(records).map_err(|e| Error::Serialization(e.to_string()))?;

    Ok(format!(
        "\nCould you summarize this JSON object which represents data about users hitting an endpoint\n\n```json\n{json}\n```\n"
    ))
}
