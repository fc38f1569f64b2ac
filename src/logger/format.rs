//! Access log format module
//!
//! Supported formats:
//! - `fixture`: `[19/Oct/2026 17:05:00] "GET /image.png HTTP/1.1" 200 -`
//! - `common` (Common Log Format - CLF)
//! - `combined` (CLF plus user agent)
//! - `json` (one JSON object per line)
//! - Custom patterns with `$variable` substitution

use chrono::{DateTime, Local};

const CLF_TIME: &str = "%d/%b/%Y:%H:%M:%S %z";
const FIXTURE_TIME: &str = "%d/%b/%Y %H:%M:%S";

/// One handled request, as it appears in the access log
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub time: DateTime<Local>,
    pub method: String,
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// "1.0", "1.1", ...
    pub http_version: String,
    pub status: u16,
    /// Bytes of body actually sent (0 for HEAD)
    pub body_bytes: usize,
    pub user_agent: Option<String>,
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Create an entry stamped with the current local time
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            user_agent: None,
            request_time_us: 0,
        }
    }

    /// Render the entry in `format` (named format or custom pattern)
    pub fn format(&self, format: &str) -> String {
        match format {
            "fixture" => format!(
                "[{}] \"{}\" {} -",
                self.time.format(FIXTURE_TIME),
                self.request_line(),
                self.status,
            ),
            "common" => self.format_common(),
            "combined" => format!(
                "{} \"{}\"",
                self.format_common(),
                self.user_agent.as_deref().unwrap_or("-"),
            ),
            "json" => self.format_json(),
            custom => self.format_custom(custom),
        }
    }

    fn request_uri(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{q}", self.path),
            None => self.path.clone(),
        }
    }

    /// `METHOD /path?query HTTP/version`
    pub fn request_line(&self) -> String {
        format!(
            "{} {} HTTP/{}",
            self.method,
            self.request_uri(),
            self.http_version
        )
    }

    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {}",
            self.remote_addr,
            self.time.format(CLF_TIME),
            self.request_line(),
            self.status,
            self.body_bytes,
        )
    }

    fn format_json(&self) -> String {
        let quoted = |v: Option<&str>| {
            v.map_or_else(|| "null".to_string(), |s| format!("\"{}\"", escape_json(s)))
        };

        format!(
            r#"{{"remote_addr":"{}","time":"{}","method":"{}","path":"{}","query":{},"http_version":"{}","status":{},"body_bytes":{},"user_agent":{},"request_time_us":{}}}"#,
            escape_json(&self.remote_addr),
            self.time.to_rfc3339(),
            escape_json(&self.method),
            escape_json(&self.path),
            quoted(self.query.as_deref()),
            escape_json(&self.http_version),
            self.status,
            self.body_bytes,
            quoted(self.user_agent.as_deref()),
            self.request_time_us,
        )
    }

    /// Custom pattern
    ///
    /// Variables: `$remote_addr`, `$time_local`, `$time_iso8601`, `$request`,
    /// `$request_method`, `$request_uri`, `$request_time` (seconds),
    /// `$status`, `$body_bytes_sent`, `$http_user_agent`.
    fn format_custom(&self, pattern: &str) -> String {
        #[allow(clippy::cast_precision_loss)]
        let request_time = self.request_time_us as f64 / 1_000_000.0;

        // $request is a prefix of the other $request_* variables, so it goes last
        pattern
            .replace("$remote_addr", &self.remote_addr)
            .replace("$time_local", &self.time.format(CLF_TIME).to_string())
            .replace("$time_iso8601", &self.time.to_rfc3339())
            .replace("$request_time", &format!("{request_time:.3}"))
            .replace("$request_method", &self.method)
            .replace("$request_uri", &self.request_uri())
            .replace("$request", &self.request_line())
            .replace("$status", &self.status.to_string())
            .replace("$body_bytes_sent", &self.body_bytes.to_string())
            .replace("$http_user_agent", self.user_agent.as_deref().unwrap_or("-"))
    }
}

fn escape_json(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "127.0.0.1".to_string(),
            "GET".to_string(),
            "/image.png".to_string(),
        );
        entry.time = Local.with_ymd_and_hms(2026, 10, 19, 17, 5, 0).unwrap();
        entry.body_bytes = 69;
        entry.user_agent = Some("curl/8.5.0".to_string());
        entry.request_time_us = 12_000;
        entry
    }

    #[test]
    fn test_format_fixture() {
        assert_eq!(
            entry().format("fixture"),
            "[19/Oct/2026 17:05:00] \"GET /image.png HTTP/1.1\" 200 -"
        );
    }

    #[test]
    fn test_format_common_and_combined() {
        let common = entry().format("common");
        assert!(common.starts_with("127.0.0.1 - - [19/Oct/2026:17:05:00 "));
        assert!(common.ends_with("\"GET /image.png HTTP/1.1\" 200 69"));
        assert!(!common.contains("curl"));

        let combined = entry().format("combined");
        assert!(combined.ends_with("200 69 \"curl/8.5.0\""));
    }

    #[test]
    fn test_format_json_escapes() {
        let mut e = entry();
        e.path = "/a\"b".to_string();
        e.query = Some("x=1".to_string());
        let log = e.format("json");
        assert!(log.contains(r#""path":"/a\"b""#));
        assert!(log.contains(r#""query":"x=1""#));
        assert!(log.contains(r#""status":200"#));
        assert!(log.contains(r#""body_bytes":69"#));
    }

    #[test]
    fn test_format_custom() {
        let log = entry().format("$request_method $request_uri -> $status in $request_time ($request)");
        assert_eq!(
            log,
            "GET /image.png -> 200 in 0.012 (GET /image.png HTTP/1.1)"
        );
    }
}
