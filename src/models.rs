use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: i64,
}

/// One chart's series: ordered, labels fixed after initialization.
pub type Dataset = Vec<DataPoint>;

/// Weekly call-volume series shown before a visitor saves their own numbers.
pub fn default_volume() -> Dataset {
    [
        ("Mon", 245),
        ("Tue", 312),
        ("Wed", 289),
        ("Thu", 356),
        ("Fri", 398),
        ("Sat", 178),
        ("Sun", 156),
    ]
    .into_iter()
    .map(|(label, value)| DataPoint {
        label: label.to_string(),
        value,
    })
    .collect()
}

/// The payload kept per email in the record store, replaced on every save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub dataset: Dataset,
}

#[derive(Debug, Deserialize)]
pub struct IdentityRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct FieldEditRequest {
    pub index: usize,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// What the page renders for the volume card: the active series plus the
/// edit-flow phase it should reflect.
#[derive(Debug, Serialize)]
pub struct VolumeView {
    pub phase: &'static str,
    pub points: Dataset,
    pub has_identity: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

#[derive(Debug, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DurationPoint {
    pub time: &'static str,
    pub minutes: f64,
}

#[derive(Debug, Serialize)]
pub struct AgentRate {
    pub agent: &'static str,
    pub rate: u32,
}

#[derive(Debug, Serialize)]
pub struct SentimentSlice {
    pub name: &'static str,
    pub share: u32,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub week: String,
    pub stats: Vec<StatCard>,
    pub duration: Vec<DurationPoint>,
    pub success: Vec<AgentRate>,
    pub sentiment: Vec<SentimentSlice>,
}
