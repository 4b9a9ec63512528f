//! Vital-sign reading records
//!
//! A reading is a set of independently optional measurements. JSON field
//! names follow the portal's camelCase wire format.

use crate::error::{Result, VitalsError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One submitted set of vital signs
///
/// Unknown keys are rejected so a misspelled metric fails to decode instead
/// of silently skipping its check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VitalReading {
    /// Systolic blood pressure (mmHg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub systolic: Option<i32>,
    /// Diastolic blood pressure (mmHg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diastolic: Option<i32>,
    /// Maternal heart rate (bpm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<i32>,
    /// Body weight (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Blood glucose (mg/dL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glucose: Option<f64>,
    /// Oxygen saturation (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spo2: Option<i32>,
    /// Fetal movements counted over one hour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetal_movement: Option<i32>,
    /// Gestational week at the time of the reading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<i32>,
}

impl VitalReading {
    /// Create an empty reading
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blood_pressure(mut self, systolic: i32, diastolic: i32) -> Self {
        self.systolic = Some(systolic);
        self.diastolic = Some(diastolic);
        self
    }

    pub fn with_heart_rate(mut self, bpm: i32) -> Self {
        self.heart_rate = Some(bpm);
        self
    }

    pub fn with_weight(mut self, kg: f64) -> Self {
        self.weight = Some(kg);
        self
    }

    pub fn with_glucose(mut self, mg_dl: f64) -> Self {
        self.glucose = Some(mg_dl);
        self
    }

    pub fn with_spo2(mut self, percent: i32) -> Self {
        self.spo2 = Some(percent);
        self
    }

    pub fn with_fetal_movement(mut self, count: i32) -> Self {
        self.fetal_movement = Some(count);
        self
    }

    pub fn with_week(mut self, week: i32) -> Self {
        self.week = Some(week);
        self
    }

    /// Blood pressure pair, only when both halves are present
    pub fn blood_pressure(&self) -> Option<BloodPressure> {
        match (self.systolic, self.diastolic) {
            (Some(systolic), Some(diastolic)) => Some(BloodPressure { systolic, diastolic }),
            _ => None,
        }
    }

    /// True when no measurement is present at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Caller-side sanity check before a reading is stored.
    ///
    /// Rejects a half-present blood-pressure pair and non-finite decimals.
    /// Implausible but finite values pass; they are evaluated literally.
    pub fn validate(&self) -> Result<()> {
        match (self.systolic, self.diastolic) {
            (Some(_), None) | (None, Some(_)) => {
                return Err(VitalsError::IncompleteBloodPressure {
                    systolic: self.systolic,
                    diastolic: self.diastolic,
                });
            }
            _ => {}
        }

        if self.weight.is_some_and(|w| !w.is_finite()) {
            return Err(VitalsError::NonFiniteValue { field: "weight" });
        }
        if self.glucose.is_some_and(|g| !g.is_finite()) {
            return Err(VitalsError::NonFiniteValue { field: "glucose" });
        }

        Ok(())
    }
}

/// Systolic/diastolic pair in mmHg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: i32,
    pub diastolic: i32,
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

/// Earlier weight measurement used for the weight-gain rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousReading {
    /// Body weight (kg)
    pub weight: f64,
    /// When the weight was recorded
    pub recorded_at: DateTime<Utc>,
}

impl PreviousReading {
    pub fn new(weight: f64, recorded_at: DateTime<Utc>) -> Self {
        Self { weight, recorded_at }
    }

    /// Check that this reading is usable as context for a reading taken at `now`
    pub fn validate_against(&self, now: DateTime<Utc>) -> Result<()> {
        if !self.weight.is_finite() {
            return Err(VitalsError::NonFiniteValue { field: "previous.weight" });
        }
        if self.recorded_at >= now {
            return Err(VitalsError::PreviousReadingNotEarlier {
                recorded_at: self.recorded_at,
                now,
            });
        }
        Ok(())
    }
}
