use anyhow::{Result, anyhow};
use chrono::NaiveDate;

use crate::calendar::{WEEKDAY_CODES, build_month_grid};
use crate::types::ScoresFile;
use crate::utils::month_title;

const SCORED_MARK: char = '*';

fn format_cell(day: u32, scored: bool) -> String {
    if day == 0 {
        return "   ".to_string();
    }
    let mark = if scored { SCORED_MARK } else { ' ' };
    format!("{:>2}{}", day, mark)
}

/// Plain-text month view: title, weekday header, then six week rows.
/// Days that have an entry in `scores` carry a trailing `*`.
pub fn render_month(month: u32, year: i32, scores: Option<&ScoresFile>) -> Result<String> {
    let title = month_title(month, year)
        .ok_or_else(|| anyhow!("No such month: {}/{}", month, year))?;

    let is_scored = |day: u32| {
        scores.is_some_and(|scores| {
            NaiveDate::from_ymd_opt(year, month, day)
                .and_then(|date| scores.for_date(date))
                .is_some()
        })
    };

    let mut text = String::new();
    text.push_str(&title);
    text.push('\n');

    let header = WEEKDAY_CODES
        .iter()
        .map(|code| format!("{:<3}", code))
        .collect::<Vec<_>>()
        .join(" ");
    text.push_str(header.trim_end());
    text.push('\n');

    for week in build_month_grid(month, year) {
        let line = week
            .iter()
            .map(|&day| format_cell(day, day != 0 && is_scored(day)))
            .collect::<Vec<_>>()
            .join(" ");
        text.push_str(line.trim_end());
        text.push('\n');
    }

    Ok(text)
}
