//! Log record types

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Placeholder stored when a field is unavailable
pub const UNKNOWN: &str = "unknown";

/// Timestamp layout used for captured records (ISO-8601, local time, microseconds)
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One captured endpoint hit
///
/// Field names on disk and over the wire follow the log header
/// (`datetime`, `ip_address`, `user_agent`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Instant of capture
    #[serde(rename = "datetime")]
    pub timestamp: String,
    /// Request origin address
    #[serde(rename = "ip_address")]
    pub client_id: String,
    /// Calling client software
    #[serde(rename = "user_agent")]
    pub agent: String,
}

impl LogRecord {
    /// Create a record, replacing empty fields with [`UNKNOWN`]
    #[must_use]
    pub fn new(
        timestamp: impl Into<String>,
        client_id: impl Into<String>,
        agent: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: or_unknown(timestamp.into()),
            client_id: or_unknown(client_id.into()),
            agent: or_unknown(agent.into()),
        }
    }

    /// Capture a record stamped with the current local time
    #[must_use]
    pub fn capture(client_id: Option<String>, agent: Option<String>) -> Self {
        Self::captured_at(Local::now(), client_id, agent)
    }

    /// Capture a record stamped with the given instant
    #[must_use]
    pub fn captured_at(
        at: DateTime<Local>,
        client_id: Option<String>,
        agent: Option<String>,
    ) -> Self {
        Self::new(
            at.format(TIMESTAMP_FORMAT).to_string(),
            client_id.unwrap_or_default(),
            agent.unwrap_or_default(),
        )
    }

    /// Whether the client address is the placeholder
    #[must_use]
    pub fn has_unknown_client(&self) -> bool {
        self.client_id == UNKNOWN
    }

    /// Whether the agent string is the placeholder
    #[must_use]
    pub fn has_unknown_agent(&self) -> bool {
        self.agent == UNKNOWN
    }
}

fn or_unknown(value: String) -> String {
    if value.trim().is_empty() {
        UNKNOWN.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_empty_fields_become_unknown() {
        let record = LogRecord::new("2025-01-01T00:00:00.000000", "", "   ");
        assert_eq!(record.client_id, UNKNOWN);
        assert_eq!(record.agent, UNKNOWN);
        assert!(record.has_unknown_client());
        assert!(record.has_unknown_agent());
    }

    #[test]
    fn test_agent_kept_verbatim() {
        let record = LogRecord::new("t", "10.0.0.1", " curl/8.0 ");
        assert_eq!(record.agent, " curl/8.0 ");
        assert!(!record.has_unknown_agent());
    }

    #[test]
    fn test_captured_at_format() {
        let at = Local.with_ymd_and_hms(2025, 3, 9, 14, 5, 7).unwrap();
        let record = LogRecord::captured_at(at, Some("127.0.0.1".to_string()), None);
        assert_eq!(record.timestamp, "2025-03-09T14:05:07.000000");
        assert_eq!(record.client_id, "127.0.0.1");
        assert_eq!(record.agent, UNKNOWN);
    }

    #[test]
    fn test_serialization_uses_header_names() {
        let record = LogRecord::new("t", "1.2.3.4", "agent");
        let csv = to_csv(&record);
        assert!(csv.contains("datetime"));
        assert!(csv.contains("ip_address"));
        assert!(csv.contains("user_agent"));
    }

    fn to_csv(record: &LogRecord) -> String {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer.serialize(record).unwrap();
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }
}
