//! DTO ленты алертов, отдаваемой API консоли.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertPriority {
    pub fn label(&self) -> &'static str {
        match self {
            AlertPriority::Low => "низкий",
            AlertPriority::Medium => "средний",
            AlertPriority::High => "высокий",
            AlertPriority::Critical => "критический",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Open,
    Triaged,
    Resolved,
}

/// Один алерт ленты. `events` — строки произвольной формы (сырые данные
/// источника), которые консоль показывает динамической таблицей.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRecord {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub label: String,
    pub priority: AlertPriority,
    pub status: AlertStatus,
    #[serde(default)]
    pub events: Vec<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertListResponse {
    pub items: Vec<AlertRecord>,
    pub total: usize,
}
