pub const UNKNOWN: &str = "UNKNOWN";
pub const NOT_AVAILABLE: &str = "N/A";

/// Column titles of the sheet, in append order.
pub const COLUMNS: [&str; 7] = [
    "Timestamp",
    "Event",
    "Method",
    "User",
    "Status",
    "Temperature",
    "Humidity",
];

/// Device-reported fields after defaulting. Values are opaque strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFields {
    pub event: String,
    pub method: String,
    pub user: String,
    pub status: String,
    pub temperature: String,
    pub humidity: String,
}

impl EventFields {
    /// Total lookup over decoded query pairs. A repeated name resolves to its
    /// first occurrence; absent or empty parameters take their default.
    pub fn extract(params: &[(String, String)]) -> Self {
        Self {
            event: param_or(params, "event", UNKNOWN),
            method: param_or(params, "method", UNKNOWN),
            user: param_or(params, "user", UNKNOWN),
            status: param_or(params, "status", UNKNOWN),
            temperature: param_or(params, "temp", NOT_AVAILABLE),
            humidity: param_or(params, "humidity", NOT_AVAILABLE),
        }
    }
}

fn param_or(params: &[(String, String)], key: &str, default: &str) -> String {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// One sheet row. Built once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryRecord {
    timestamp: String,
    fields: EventFields,
}

impl TelemetryRecord {
    pub fn new(timestamp: String, fields: EventFields) -> Self {
        Self { timestamp, fields }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn fields(&self) -> &EventFields {
        &self.fields
    }

    /// Cells in sheet order, with the unit suffixes applied.
    pub fn row(&self) -> [String; 7] {
        [
            self.timestamp.clone(),
            self.fields.event.clone(),
            self.fields.method.clone(),
            self.fields.user.clone(),
            self.fields.status.clone(),
            format!("{}°C", self.fields.temperature),
            format!("{}%", self.fields.humidity),
        ]
    }
}
