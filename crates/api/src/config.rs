use campaign_core::audit::AuditActor;
use campaign_core::metrics::MetricPlaceholders;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Whether to load the demo campaigns at startup (default: `true`).
    pub seed_sample_data: bool,
    /// User every audit entry is attributed to.
    pub audit_actor: AuditActor,
    /// Values reported for the metrics that are not computed.
    pub metric_placeholders: MetricPlaceholders,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `3000`                  |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `SEED_SAMPLE_DATA`        | `true`                  |
    /// | `AUDIT_USER_ID`           | `user-1`                |
    /// | `AUDIT_USER_NAME`         | `Sarah Johnson`         |
    /// | `METRICS_CONVERSION_RATE` | `3.2`                   |
    /// | `METRICS_ROI`             | `245`                   |
    ///
    /// Panics on unparseable values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let seed_sample_data = parse_flag(
            &std::env::var("SEED_SAMPLE_DATA").unwrap_or_else(|_| "true".into()),
        )
        .expect("SEED_SAMPLE_DATA must be true/false/1/0");

        let default_actor = AuditActor::default();
        let audit_actor = AuditActor {
            user_id: std::env::var("AUDIT_USER_ID").unwrap_or(default_actor.user_id),
            user_name: std::env::var("AUDIT_USER_NAME").unwrap_or(default_actor.user_name),
        };

        let defaults = MetricPlaceholders::default();
        let metric_placeholders = MetricPlaceholders {
            conversion_rate: std::env::var("METRICS_CONVERSION_RATE")
                .map(|v| {
                    v.parse()
                        .expect("METRICS_CONVERSION_RATE must be a number")
                })
                .unwrap_or(defaults.conversion_rate),
            roi: std::env::var("METRICS_ROI")
                .map(|v| v.parse().expect("METRICS_ROI must be a number"))
                .unwrap_or(defaults.roi),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            seed_sample_data,
            audit_actor,
            metric_placeholders,
        }
    }
}

/// Parse a boolean environment flag.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
