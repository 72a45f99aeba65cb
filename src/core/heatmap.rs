//! Daily activity heatmap over the habit completion log.
//!
//! The window is always anchored to "today" from the application clock,
//! never to the latest record, so idle days still render as zero-count
//! cells instead of disappearing.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::core::aggregate;
use crate::entities::habit_completion;

/// Saturating four-level activity scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    Zero,
    One,
    Two,
    Three,
}

impl Intensity {
    /// Maps a day's completion count onto the scale: 0, 1, 2, then
    /// everything from three up saturates at the top level.
    #[must_use]
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Intensity::Zero,
            1 => Intensity::One,
            2 => Intensity::Two,
            _ => Intensity::Three,
        }
    }

    /// Ordinal level in `0..=3`.
    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            Intensity::Zero => 0,
            Intensity::One => 1,
            Intensity::Two => 2,
            Intensity::Three => 3,
        }
    }
}

/// One heatmap cell: a day, its completion count and bucketed intensity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapDay {
    pub day: NaiveDate,
    pub count: u32,
    pub intensity: Intensity,
}

/// Buckets completion counts per day for `window_days` consecutive days
/// ending at `today`, oldest first. Counts span all habits unless
/// `habit_id` narrows the log to one.
#[must_use]
pub fn build_heatmap(
    completions: &[habit_completion::Model],
    habit_id: Option<i64>,
    window_days: usize,
    today: NaiveDate,
) -> Vec<HeatmapDay> {
    let mut counts: HashMap<NaiveDate, u32> = HashMap::new();
    for completion in completions {
        if habit_id.is_some_and(|id| id != completion.habit_id) {
            continue;
        }
        *counts.entry(completion.completed_at).or_insert(0) += 1;
    }

    aggregate::window(window_days, today)
        .map(|day| {
            let count = counts.get(&day).copied().unwrap_or(0);
            HeatmapDay {
                day,
                count,
                intensity: Intensity::from_count(count),
            }
        })
        .collect()
}
