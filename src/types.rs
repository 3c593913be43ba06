use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::{dates_in_month, format_date};

/// One night's detector summary as stored in `scores.json`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DayScore {
    /// Score per capture, keyed by minutes relative to sunset.
    #[serde(default)]
    pub scores: BTreeMap<i64, f64>,
    #[serde(default)]
    pub max_score: f64,
    #[serde(default)]
    pub best_image_time: String,
    #[serde(default)]
    pub min_to_sunset: i64,
}

impl DayScore {
    /// Offset from sunset, in minutes, of the highest scoring capture.
    pub fn best_offset(&self) -> Option<(i64, f64)> {
        self.scores
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(offset, score)| (*offset, *score))
    }
}

/// The whole `scores.json` file, keyed by `YYYY-MM-DD`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ScoresFile {
    pub days: BTreeMap<String, DayScore>,
}

impl ScoresFile {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn for_date(&self, date: NaiveDate) -> Option<&DayScore> {
        self.days.get(&format_date(date))
    }

    pub fn month_scores(&self, month: u32, year: i32) -> Vec<(NaiveDate, f64)> {
        dates_in_month(month, year)
            .into_iter()
            .filter_map(|date| self.for_date(date).map(|day| (date, day.max_score)))
            .collect()
    }

    pub fn best_day(&self, month: u32, year: i32) -> Option<(NaiveDate, &DayScore)> {
        dates_in_month(month, year)
            .into_iter()
            .filter_map(|date| self.for_date(date).map(|day| (date, day)))
            .max_by(|a, b| a.1.max_score.total_cmp(&b.1.max_score))
    }
}
