//! Threshold rule tables for table-driven metrics
//!
//! Each metric owns an ordered slice of rules, most clinically severe first.
//! Evaluation stops at the first rule whose predicate matches, so a reading
//! that satisfies both the critical and the warning range is reported once,
//! as critical.
//!
//! | Metric     | Condition                                   | Type                | Severity |
//! |------------|---------------------------------------------|---------------------|----------|
//! | BP         | systolic ≥ 140 or diastolic ≥ 90            | HIGH_BLOOD_PRESSURE | CRITICAL |
//! | BP         | systolic 130–139 or diastolic 80–89         | HIGH_BLOOD_PRESSURE | WARNING  |
//! | BP         | systolic < 90 or diastolic < 60             | LOW_BLOOD_PRESSURE  | WARNING  |
//! | Heart rate | > 120                                       | HIGH_HEART_RATE     | CRITICAL |
//! | Heart rate | 101–120                                     | HIGH_HEART_RATE     | WARNING  |
//! | Heart rate | < 60                                        | LOW_HEART_RATE      | INFO     |
//! | Glucose    | ≥ 126                                       | HIGH_GLUCOSE        | CRITICAL |
//! | Glucose    | 95 ≤ g < 126                                | HIGH_GLUCOSE        | WARNING  |
//! | SpO2       | < 90                                        | LOW_SPO2            | CRITICAL |
//! | SpO2       | 90–94                                       | LOW_SPO2            | WARNING  |

use crate::alert::{AlertSeverity, AlertType, VitalAlert};
use crate::reading::BloodPressure;
use serde::Serialize;

/// One row of a rule table
#[derive(Debug)]
pub struct Rule<T> {
    /// Alert kind raised when the rule matches
    pub alert_type: AlertType,
    /// Severity of the raised alert
    pub severity: AlertSeverity,
    /// Condition in plain text, for audits
    pub condition: &'static str,
    predicate: fn(T) -> bool,
    message: fn(T) -> String,
}

impl<T: Copy> Rule<T> {
    /// Whether the value falls in this rule's range
    pub fn matches(&self, value: T) -> bool {
        (self.predicate)(value)
    }

    /// Build the alert for a matching value
    pub fn to_alert(&self, value: T) -> VitalAlert {
        VitalAlert::new(self.alert_type, self.severity, (self.message)(value))
    }
}

/// First rule in table order that matches `value`
pub fn first_match<T: Copy>(rules: &[Rule<T>], value: T) -> Option<&Rule<T>> {
    rules.iter().find(|rule| rule.matches(value))
}

/// Run a rule table against a value, producing at most one alert
pub fn apply<T: Copy>(rules: &[Rule<T>], value: T) -> Option<VitalAlert> {
    first_match(rules, value).map(|rule| rule.to_alert(value))
}

// ============================================================================
// Rule Tables
// ============================================================================

pub static BLOOD_PRESSURE_RULES: [Rule<BloodPressure>; 3] = [
    Rule {
        alert_type: AlertType::HighBloodPressure,
        severity: AlertSeverity::Critical,
        condition: "systolic >= 140 or diastolic >= 90",
        predicate: |bp| bp.systolic >= 140 || bp.diastolic >= 90,
        message: |bp| {
            format!(
                "Blood pressure is very high ({} mmHg). Contact your doctor immediately.",
                bp
            )
        },
    },
    Rule {
        alert_type: AlertType::HighBloodPressure,
        severity: AlertSeverity::Warning,
        condition: "systolic in [130, 140) or diastolic in [80, 90)",
        predicate: |bp| (130..140).contains(&bp.systolic) || (80..90).contains(&bp.diastolic),
        message: |bp| {
            format!(
                "Blood pressure is elevated ({} mmHg). Rest and recheck, and mention it at your next visit.",
                bp
            )
        },
    },
    Rule {
        alert_type: AlertType::LowBloodPressure,
        severity: AlertSeverity::Warning,
        condition: "systolic < 90 or diastolic < 60",
        predicate: |bp| bp.systolic < 90 || bp.diastolic < 60,
        message: |bp| {
            format!(
                "Blood pressure is low ({} mmHg). Sit down, drink water and report any dizziness.",
                bp
            )
        },
    },
];

pub static HEART_RATE_RULES: [Rule<i32>; 3] = [
    Rule {
        alert_type: AlertType::HighHeartRate,
        severity: AlertSeverity::Critical,
        condition: "heart rate > 120",
        predicate: |bpm| bpm > 120,
        message: |bpm| format!("Heart rate is very high ({} bpm). Seek medical attention.", bpm),
    },
    Rule {
        alert_type: AlertType::HighHeartRate,
        severity: AlertSeverity::Warning,
        condition: "heart rate in (100, 120]",
        predicate: |bpm| bpm > 100 && bpm <= 120,
        message: |bpm| format!("Heart rate is elevated ({} bpm). Rest and recheck.", bpm),
    },
    Rule {
        alert_type: AlertType::LowHeartRate,
        severity: AlertSeverity::Info,
        condition: "heart rate < 60",
        predicate: |bpm| bpm < 60,
        message: |bpm| format!("Heart rate is low ({} bpm).", bpm),
    },
];

pub static GLUCOSE_RULES: [Rule<f64>; 2] = [
    Rule {
        alert_type: AlertType::HighGlucose,
        severity: AlertSeverity::Critical,
        condition: "glucose >= 126",
        predicate: |mg_dl| mg_dl >= 126.0,
        message: |mg_dl| {
            format!(
                "Blood glucose is high ({} mg/dL). Contact your doctor about gestational diabetes.",
                mg_dl
            )
        },
    },
    Rule {
        alert_type: AlertType::HighGlucose,
        severity: AlertSeverity::Warning,
        condition: "glucose in [95, 126)",
        predicate: |mg_dl| (95.0..126.0).contains(&mg_dl),
        message: |mg_dl| format!("Blood glucose is above target ({} mg/dL).", mg_dl),
    },
];

pub static SPO2_RULES: [Rule<i32>; 2] = [
    Rule {
        alert_type: AlertType::LowSpo2,
        severity: AlertSeverity::Critical,
        condition: "spo2 < 90",
        predicate: |percent| percent < 90,
        message: |percent| {
            format!(
                "Oxygen saturation is critically low ({}%). Seek emergency care.",
                percent
            )
        },
    },
    Rule {
        alert_type: AlertType::LowSpo2,
        severity: AlertSeverity::Warning,
        condition: "spo2 in [90, 95)",
        predicate: |percent| (90..95).contains(&percent),
        message: |percent| format!("Oxygen saturation is below normal ({}%).", percent),
    },
];

// ============================================================================
// Audit View
// ============================================================================

/// Flattened description of one rule, for listing and review
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDescription {
    pub metric: &'static str,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub condition: &'static str,
}

fn describe<T: 'static>(
    metric: &'static str,
    rules: &'static [Rule<T>],
) -> impl Iterator<Item = RuleDescription> {
    rules.iter().map(move |rule| RuleDescription {
        metric,
        alert_type: rule.alert_type,
        severity: rule.severity,
        condition: rule.condition,
    })
}

/// Every check the evaluator runs, in evaluation order.
///
/// Includes the two special-case checks that are not table-driven.
pub fn rule_tables() -> Vec<RuleDescription> {
    let mut rules: Vec<RuleDescription> = describe("blood_pressure", &BLOOD_PRESSURE_RULES)
        .chain(describe("heart_rate", &HEART_RATE_RULES))
        .collect();

    rules.push(RuleDescription {
        metric: "weight_gain",
        alert_type: AlertType::RapidWeightGain,
        severity: AlertSeverity::Warning,
        condition: "weekly gain > 2 kg (needs an earlier weight at least one day old)",
    });

    rules.extend(describe("glucose", &GLUCOSE_RULES));
    rules.extend(describe("spo2", &SPO2_RULES));

    rules.push(RuleDescription {
        metric: "fetal_movement",
        alert_type: AlertType::ReducedFetalMovement,
        severity: AlertSeverity::Critical,
        condition: "week >= 28 and movements per hour < 10",
    });

    rules
}
