//! Alert records produced by the vital-sign evaluator

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of vital-sign alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    HighBloodPressure,
    LowBloodPressure,
    HighHeartRate,
    LowHeartRate,
    RapidWeightGain,
    HighGlucose,
    LowSpo2,
    ReducedFetalMovement,
}

impl AlertType {
    /// Wire name of the alert type
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::HighBloodPressure => "HIGH_BLOOD_PRESSURE",
            AlertType::LowBloodPressure => "LOW_BLOOD_PRESSURE",
            AlertType::HighHeartRate => "HIGH_HEART_RATE",
            AlertType::LowHeartRate => "LOW_HEART_RATE",
            AlertType::RapidWeightGain => "RAPID_WEIGHT_GAIN",
            AlertType::HighGlucose => "HIGH_GLUCOSE",
            AlertType::LowSpo2 => "LOW_SPO2",
            AlertType::ReducedFetalMovement => "REDUCED_FETAL_MOVEMENT",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert severity, ordered `Info < Warning < Critical`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    /// Worth noting, no action required
    Info,
    /// Should be reviewed with the care team
    Warning,
    /// Immediate action required
    Critical,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "INFO",
            AlertSeverity::Warning => "WARNING",
            AlertSeverity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single alert raised for a reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalAlert {
    /// Alert kind
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    /// Severity level
    pub severity: AlertSeverity,
    /// Human-readable message naming the triggering values
    pub message: String,
}

impl VitalAlert {
    pub fn new(alert_type: AlertType, severity: AlertSeverity, message: impl Into<String>) -> Self {
        Self {
            alert_type,
            severity,
            message: message.into(),
        }
    }

    /// Critical alerts need the patient or doctor to act now
    pub fn requires_immediate_attention(&self) -> bool {
        self.severity == AlertSeverity::Critical
    }
}

/// Highest severity among a set of alerts, `None` when there are none
pub fn highest_severity(alerts: &[VitalAlert]) -> Option<AlertSeverity> {
    alerts.iter().map(|a| a.severity).max()
}
