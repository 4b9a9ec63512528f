//! Prenatal Vitals - Alert Rules and Labor Pattern Analysis
//!
//! Pure Rust evaluators for the prenatal care portal. Both are stateless
//! and synchronous; callers fetch the records, invoke an evaluator and
//! decide how to persist or surface the result.
//!
//! # Features
//!
//! - Threshold alerts for blood pressure, heart rate, glucose and SpO2
//! - Weekly weight-gain rate and reduced fetal movement checks
//! - Contraction pattern classification (monitoring, early labor, active labor)
//! - Trailing-window selection for contraction timer sessions
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use prenatal_vitals::{
//!     analyze_contraction_pattern, evaluate_vital_alerts, Contraction,
//!     ContractionIntensity, LaborStatus, VitalReading,
//! };
//!
//! let reading = VitalReading::new()
//!     .with_blood_pressure(150, 98)
//!     .with_spo2(93);
//! let alerts = evaluate_vital_alerts(&reading, None, None);
//! assert_eq!(alerts.len(), 2);
//!
//! let start = Utc::now() - Duration::minutes(20);
//! let contractions: Vec<Contraction> = (0..5)
//!     .map(|i| Contraction::new(start + Duration::minutes(4 * i), 60, ContractionIntensity::Strong))
//!     .collect();
//! let result = analyze_contraction_pattern(&contractions);
//! assert_eq!(result.status, LaborStatus::ActiveLabor);
//! assert!(result.should_alert);
//! ```

pub mod alert;
pub mod config;
pub mod contraction;
pub mod error;
pub mod evaluator;
pub mod reading;
pub mod rules;
pub mod window;

// Re-export commonly used types for convenience
pub use alert::{highest_severity, AlertSeverity, AlertType, VitalAlert};
pub use config::AnalyzerConfig;
pub use contraction::{
    analyze_contraction_pattern, Contraction, ContractionIntensity, ContractionStats, LaborStatus,
    PatternResult,
};
pub use error::{Result, VitalsError};
pub use evaluator::{evaluate_vital_alerts, weekly_weight_gain};
pub use reading::{BloodPressure, PreviousReading, VitalReading};
pub use rules::{rule_tables, RuleDescription};
pub use window::{analyze_recent, ensure_chronological, recent_contractions};
