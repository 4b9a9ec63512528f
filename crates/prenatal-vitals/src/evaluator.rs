//! Vital-sign alert evaluation
//!
//! Runs every present metric through its check and collects the alerts in a
//! fixed order: blood pressure, heart rate, weight gain, glucose, SpO2, fetal
//! movement. Each check contributes at most one alert.

use crate::alert::{AlertSeverity, AlertType, VitalAlert};
use crate::reading::{PreviousReading, VitalReading};
use crate::rules::{self, BLOOD_PRESSURE_RULES, GLUCOSE_RULES, HEART_RATE_RULES, SPO2_RULES};
use chrono::{DateTime, Utc};
use tracing::{debug, trace};

/// Weekly weight gain above this many kilograms raises an alert
pub const RAPID_WEIGHT_GAIN_KG_PER_WEEK: f64 = 2.0;

/// Fetal movement counts are only interpreted from this gestational week on
pub const FETAL_MOVEMENT_MIN_WEEK: i32 = 28;

/// Fewer movements per hour than this is reported as reduced
pub const FETAL_MOVEMENT_MIN_COUNT: i32 = 10;

/// Evaluate a reading against every alert rule.
///
/// `previous` supplies the earlier weight for the weight-gain check and `now`
/// is the time the current reading was taken (defaults to the current time).
/// Absent fields skip their check; this never fails.
///
/// ```
/// use prenatal_vitals::{evaluate_vital_alerts, AlertSeverity, AlertType, VitalReading};
///
/// let reading = VitalReading::new().with_blood_pressure(145, 95);
/// let alerts = evaluate_vital_alerts(&reading, None, None);
///
/// assert_eq!(alerts.len(), 1);
/// assert_eq!(alerts[0].alert_type, AlertType::HighBloodPressure);
/// assert_eq!(alerts[0].severity, AlertSeverity::Critical);
/// ```
pub fn evaluate_vital_alerts(
    reading: &VitalReading,
    previous: Option<&PreviousReading>,
    now: Option<DateTime<Utc>>,
) -> Vec<VitalAlert> {
    let now = now.unwrap_or_else(Utc::now);

    let checks = [
        reading
            .blood_pressure()
            .and_then(|bp| rules::apply(&BLOOD_PRESSURE_RULES, bp)),
        reading
            .heart_rate
            .and_then(|bpm| rules::apply(&HEART_RATE_RULES, bpm)),
        weight_gain_alert(reading.weight, previous, now),
        reading
            .glucose
            .and_then(|mg_dl| rules::apply(&GLUCOSE_RULES, mg_dl)),
        reading
            .spo2
            .and_then(|percent| rules::apply(&SPO2_RULES, percent)),
        fetal_movement_alert(reading.fetal_movement, reading.week),
    ];

    let alerts: Vec<VitalAlert> = checks.into_iter().flatten().collect();

    debug!(
        alert_count = alerts.len(),
        highest = ?crate::alert::highest_severity(&alerts),
        "evaluated vital reading"
    );

    alerts
}

/// Weight change per week between `previous` and a weight taken at `now`.
///
/// Uses whole elapsed days. Returns `None` when less than one full day has
/// passed or `previous` lies in the future, so the rate is never divided by a
/// zero or negative span.
pub fn weekly_weight_gain(current_kg: f64, previous: &PreviousReading, now: DateTime<Utc>) -> Option<f64> {
    let days_between = (now - previous.recorded_at).num_days();
    if days_between <= 0 {
        trace!(days_between, "weight gain check skipped");
        return None;
    }

    let weeks = days_between as f64 / 7.0;
    Some((current_kg - previous.weight) / weeks)
}

fn weight_gain_alert(
    current_kg: Option<f64>,
    previous: Option<&PreviousReading>,
    now: DateTime<Utc>,
) -> Option<VitalAlert> {
    let weekly_gain = weekly_weight_gain(current_kg?, previous?, now)?;

    (weekly_gain > RAPID_WEIGHT_GAIN_KG_PER_WEEK).then(|| {
        VitalAlert::new(
            AlertType::RapidWeightGain,
            AlertSeverity::Warning,
            format!(
                "Rapid weight gain of {:.1} kg per week. Sudden gain can be a sign of preeclampsia, contact your doctor.",
                weekly_gain
            ),
        )
    })
}

fn fetal_movement_alert(count: Option<i32>, week: Option<i32>) -> Option<VitalAlert> {
    let week = week.filter(|w| *w >= FETAL_MOVEMENT_MIN_WEEK)?;
    let count = count?;

    (count < FETAL_MOVEMENT_MIN_COUNT).then(|| {
        VitalAlert::new(
            AlertType::ReducedFetalMovement,
            AlertSeverity::Critical,
            format!(
                "Reduced fetal movement: {} movements in an hour at week {}. Contact your doctor or go to the hospital now.",
                count, week
            ),
        )
    })
}
