//! Labor contraction pattern analysis
//!
//! Classifies a run of timed contractions as monitoring, early labor or
//! active labor, following the "5-1-1" guidance (contractions about five
//! minutes apart, lasting about a minute) collapsed into two tiers. The
//! count gates keep a handful of noisy contractions from raising an alert.
//!
//! The analyzer expects contractions already narrowed to the trailing window
//! and sorted by start time. See [`crate::window`] for the helpers that
//! establish those preconditions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum number of contractions before any statistics are computed
pub const MIN_CONTRACTIONS_FOR_PATTERN: usize = 3;

/// Active labor: average interval at most this many minutes
pub const ACTIVE_LABOR_MAX_INTERVAL_MIN: f64 = 5.0;
/// Active labor: average duration at least this many seconds
pub const ACTIVE_LABOR_MIN_DURATION_SEC: f64 = 45.0;
/// Active labor: at least this many contractions
pub const ACTIVE_LABOR_MIN_COUNT: usize = 5;

/// Early labor: average interval at most this many minutes
pub const EARLY_LABOR_MAX_INTERVAL_MIN: f64 = 20.0;
/// Early labor: at least this many contractions
pub const EARLY_LABOR_MIN_COUNT: usize = 4;

const KEEP_TRACKING_MESSAGE: &str = "Keep tracking contractions";
const NO_PATTERN_MESSAGE: &str =
    "No regular labor pattern yet. Keep timing your contractions and rest between them.";
const EARLY_LABOR_MESSAGE: &str =
    "You may be in early labor. Contractions are becoming regular, prepare to go to the hospital.";
const ACTIVE_LABOR_MESSAGE: &str =
    "Contractions are 5 minutes apart or less and lasting 45 seconds or more. Go to the hospital now.";

/// Perceived strength of a contraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractionIntensity {
    Mild,
    Moderate,
    Strong,
}

/// One recorded contraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contraction {
    /// When the contraction started
    pub start_time: DateTime<Utc>,
    /// Length in seconds, taken as recorded
    pub duration: i64,
    /// Informational; not used in classification
    pub intensity: ContractionIntensity,
}

impl Contraction {
    pub fn new(start_time: DateTime<Utc>, duration: i64, intensity: ContractionIntensity) -> Self {
        Self {
            start_time,
            duration,
            intensity,
        }
    }

    /// Build a contraction from timer start and stop instants.
    ///
    /// Duration is truncated to whole seconds; a stop before the start
    /// gives a zero-length contraction.
    pub fn from_bounds(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        intensity: ContractionIntensity,
    ) -> Self {
        Self::new(start, (end - start).num_seconds().max(0), intensity)
    }
}

/// Labor state reached by the analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaborStatus {
    Monitoring,
    EarlyLabor,
    ActiveLabor,
}

impl LaborStatus {
    /// Whether the caller should surface a banner or notification
    pub fn should_alert(&self) -> bool {
        matches!(self, LaborStatus::EarlyLabor | LaborStatus::ActiveLabor)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LaborStatus::Monitoring => "monitoring",
            LaborStatus::EarlyLabor => "early_labor",
            LaborStatus::ActiveLabor => "active_labor",
        }
    }
}

impl std::fmt::Display for LaborStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a pattern analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternResult {
    pub status: LaborStatus,
    pub message: String,
    pub should_alert: bool,
    /// Average minutes between contraction starts, rounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_interval: Option<i64>,
    /// Average contraction length in seconds, rounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_duration: Option<i64>,
    /// Number of contractions analyzed
    #[serde(default)]
    pub contraction_count: usize,
}

impl PatternResult {
    fn keep_tracking(contraction_count: usize) -> Self {
        PatternResult {
            status: LaborStatus::Monitoring,
            message: KEEP_TRACKING_MESSAGE.to_string(),
            should_alert: false,
            avg_interval: None,
            avg_duration: None,
            contraction_count,
        }
    }
}

/// Interval and duration averages over a contraction run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContractionStats {
    /// Mean gap between consecutive starts, in minutes
    pub avg_interval_minutes: f64,
    /// Mean contraction length, in seconds
    pub avg_duration_seconds: f64,
    pub count: usize,
}

impl ContractionStats {
    /// Compute averages; `None` below [`MIN_CONTRACTIONS_FOR_PATTERN`]
    pub fn from_contractions(contractions: &[Contraction]) -> Option<Self> {
        let count = contractions.len();
        if count < MIN_CONTRACTIONS_FOR_PATTERN {
            return None;
        }

        let total_interval_ms: f64 = contractions
            .windows(2)
            .map(|pair| (pair[1].start_time - pair[0].start_time).num_milliseconds() as f64)
            .sum();
        let avg_interval_minutes = total_interval_ms / 60_000.0 / (count - 1) as f64;

        // Summed as f64 so recorded durations of any magnitude cannot overflow
        let total_duration: f64 = contractions.iter().map(|c| c.duration as f64).sum();
        let avg_duration_seconds = total_duration / count as f64;

        Some(ContractionStats {
            avg_interval_minutes,
            avg_duration_seconds,
            count,
        })
    }

    /// Classify the run; first matching tier wins
    pub fn classify(&self) -> LaborStatus {
        if self.avg_interval_minutes <= ACTIVE_LABOR_MAX_INTERVAL_MIN
            && self.avg_duration_seconds >= ACTIVE_LABOR_MIN_DURATION_SEC
            && self.count >= ACTIVE_LABOR_MIN_COUNT
        {
            LaborStatus::ActiveLabor
        } else if self.avg_interval_minutes > ACTIVE_LABOR_MAX_INTERVAL_MIN
            && self.avg_interval_minutes <= EARLY_LABOR_MAX_INTERVAL_MIN
            && self.count >= EARLY_LABOR_MIN_COUNT
        {
            LaborStatus::EarlyLabor
        } else {
            LaborStatus::Monitoring
        }
    }
}

/// Analyze contractions from the trailing window, sorted by start time.
///
/// Fewer than three contractions always yields `monitoring` without
/// averages. Unsorted input is not rejected here; it produces meaningless
/// intervals.
pub fn analyze_contraction_pattern(contractions: &[Contraction]) -> PatternResult {
    let Some(stats) = ContractionStats::from_contractions(contractions) else {
        debug!(count = contractions.len(), "too few contractions for a pattern");
        return PatternResult::keep_tracking(contractions.len());
    };

    let status = stats.classify();
    let message = match status {
        LaborStatus::ActiveLabor => ACTIVE_LABOR_MESSAGE,
        LaborStatus::EarlyLabor => EARLY_LABOR_MESSAGE,
        LaborStatus::Monitoring => NO_PATTERN_MESSAGE,
    };

    debug!(
        %status,
        count = stats.count,
        avg_interval_minutes = stats.avg_interval_minutes,
        avg_duration_seconds = stats.avg_duration_seconds,
        "classified contraction pattern"
    );

    PatternResult {
        status,
        message: message.to_string(),
        should_alert: status.should_alert(),
        avg_interval: Some(stats.avg_interval_minutes.round() as i64),
        avg_duration: Some(stats.avg_duration_seconds.round() as i64),
        contraction_count: stats.count,
    }
}
