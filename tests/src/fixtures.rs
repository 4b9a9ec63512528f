//! Shared builders for scenario tests
//!
//! `PregnancyTimeline` replays readings the way the portal submits them,
//! passing the most recent earlier weight as context. `ContractionTimer`
//! mimics the start/stop timer in the contraction tracker.

use chrono::{DateTime, Duration, TimeZone, Utc};
use prenatal_vitals::{
    analyze_recent, evaluate_vital_alerts, AnalyzerConfig, Contraction, ContractionIntensity,
    PatternResult, PreviousReading, VitalAlert, VitalReading,
};
use serde::Deserialize;

/// Fixed reference instant so scenarios are reproducible
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Readings submitted over the course of a pregnancy, oldest first
#[derive(Debug, Default, Clone)]
pub struct PregnancyTimeline {
    entries: Vec<(DateTime<Utc>, VitalReading)>,
}

impl PregnancyTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reading taken `days` after the reference time
    pub fn on_day(mut self, days: i64, reading: VitalReading) -> Self {
        self.entries
            .push((reference_time() + Duration::days(days), reading));
        self
    }

    /// Evaluate every reading in submission order
    pub fn evaluate_all(&self) -> Vec<Vec<VitalAlert>> {
        let mut last_weight: Option<PreviousReading> = None;
        let mut results = Vec::with_capacity(self.entries.len());

        for (taken_at, reading) in &self.entries {
            results.push(evaluate_vital_alerts(
                reading,
                last_weight.as_ref(),
                Some(*taken_at),
            ));
            if let Some(weight) = reading.weight {
                last_weight = Some(PreviousReading::new(weight, *taken_at));
            }
        }

        results
    }
}

/// One start/stop pair as exported by the contraction tracker
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerEvent {
    pub started_at: DateTime<Utc>,
    pub stopped_at: DateTime<Utc>,
    pub intensity: ContractionIntensity,
}

/// Start/stop contraction timer
#[derive(Debug, Default, Clone)]
pub struct ContractionTimer {
    running: Option<DateTime<Utc>>,
    recorded: Vec<Contraction>,
}

impl ContractionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, at: DateTime<Utc>) {
        self.running = Some(at);
    }

    /// Stop the running timer; `None` when it was not started
    pub fn stop(&mut self, at: DateTime<Utc>, intensity: ContractionIntensity) -> Option<Contraction> {
        let started = self.running.take()?;
        let contraction = Contraction::from_bounds(started, at, intensity);
        self.recorded.push(contraction);
        Some(contraction)
    }

    /// Record `count` contractions `every` apart, each lasting `length`
    pub fn record_series(
        &mut self,
        first: DateTime<Utc>,
        count: usize,
        every: Duration,
        length: Duration,
        intensity: ContractionIntensity,
    ) {
        let mut start = first;
        for _ in 0..count {
            self.start(start);
            self.stop(start + length, intensity);
            start += every;
        }
    }

    /// Replay a tracker export (JSON array of timer events)
    pub fn replay_json(json: &str) -> serde_json::Result<Self> {
        let events: Vec<TimerEvent> = serde_json::from_str(json)?;
        let mut timer = Self::new();
        for event in events {
            timer.start(event.started_at);
            timer.stop(event.stopped_at, event.intensity);
        }
        Ok(timer)
    }

    pub fn contractions(&self) -> &[Contraction] {
        &self.recorded
    }

    /// Analyze the default trailing window ending at the latest start
    pub fn analyze(&self) -> Option<PatternResult> {
        let latest = self.recorded.iter().map(|c| c.start_time).max()?;
        analyze_recent(&self.recorded, latest, &AnalyzerConfig::default()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_stop_without_start() {
        let mut timer = ContractionTimer::new();
        assert!(timer.stop(reference_time(), ContractionIntensity::Mild).is_none());
        assert!(timer.contractions().is_empty());
        assert!(timer.analyze().is_none());
    }

    #[test]
    fn test_timer_records_whole_seconds() {
        let mut timer = ContractionTimer::new();
        timer.start(reference_time());
        let c = timer
            .stop(reference_time() + Duration::milliseconds(47_800), ContractionIntensity::Moderate)
            .unwrap();
        assert_eq!(c.duration, 47);
    }

    #[test]
    fn test_replay_rejects_malformed_export() {
        let missing_stop = r#"[{"startedAt": "2024-01-15T09:00:00Z", "intensity": "MILD"}]"#;
        assert!(ContractionTimer::replay_json(missing_stop).is_err());
    }

    #[test]
    fn test_timeline_passes_previous_weight() {
        let results = PregnancyTimeline::new()
            .on_day(0, VitalReading::new().with_weight(62.0))
            .on_day(7, VitalReading::new().with_weight(65.0))
            .evaluate_all();
        assert!(results[0].is_empty());
        assert_eq!(results[1].len(), 1);
    }
}
