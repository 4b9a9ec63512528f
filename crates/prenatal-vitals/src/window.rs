//! Trailing-window selection for contraction sessions
//!
//! A contraction timer session keeps everything the user recorded. These
//! helpers narrow it to the recent window in start-time order before it is
//! handed to [`analyze_contraction_pattern`].

use crate::config::AnalyzerConfig;
use crate::contraction::{analyze_contraction_pattern, Contraction, PatternResult};
use crate::error::{Result, VitalsError};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Contractions starting within `window` before `now` (inclusive at both
/// ends), sorted ascending by start time.
///
/// Contractions starting after `now` are dropped.
pub fn recent_contractions(
    contractions: &[Contraction],
    now: DateTime<Utc>,
    window: Duration,
) -> Vec<Contraction> {
    let cutoff = now
        .checked_sub_signed(window)
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    let mut recent: Vec<Contraction> = contractions
        .iter()
        .filter(|c| c.start_time >= cutoff && c.start_time <= now)
        .copied()
        .collect();
    recent.sort_by_key(|c| c.start_time);

    debug!(
        total = contractions.len(),
        kept = recent.len(),
        %cutoff,
        "selected recent contractions"
    );
    recent
}

/// Check that contractions are in ascending start-time order.
///
/// Equal start times are accepted. The error names the first contraction
/// that starts before its predecessor.
pub fn ensure_chronological(contractions: &[Contraction]) -> Result<()> {
    match contractions
        .windows(2)
        .position(|pair| pair[1].start_time < pair[0].start_time)
    {
        Some(i) => Err(VitalsError::UnsortedContractions { index: i + 1 }),
        None => Ok(()),
    }
}

/// Select the configured trailing window and analyze it
pub fn analyze_recent(
    contractions: &[Contraction],
    now: DateTime<Utc>,
    config: &AnalyzerConfig,
) -> Result<PatternResult> {
    let window = config.window()?;
    let recent = recent_contractions(contractions, now, window);
    Ok(analyze_contraction_pattern(&recent))
}
