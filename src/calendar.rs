use chrono::{Datelike, Months, NaiveDate};

pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 7;

/// Sunday-first two-letter weekday codes, one per grid column.
pub const WEEKDAY_CODES: [&str; GRID_COLS] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Weeks as rows, weekdays as columns. Zero marks a cell outside the month.
pub type Grid = [[u32; GRID_COLS]; GRID_ROWS];

pub fn empty_grid() -> Grid {
    [[0; GRID_COLS]; GRID_ROWS]
}

fn first_of_month(month: u32, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Weekday code of day 1, or `None` when the month/year is not a real month.
pub fn first_weekday_code(month: u32, year: i32) -> Option<&'static str> {
    let first = first_of_month(month, year)?;
    Some(WEEKDAY_CODES[first.weekday().num_days_from_sunday() as usize])
}

pub fn last_day_of_month(month: u32, year: i32) -> Option<u32> {
    first_of_month(month, year)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
        .map(|last| last.day())
}

/// Lays out `month` of `year` as a 6x7 date picker grid.
///
/// The counter is set to 1 on the cell whose weekday code matches day 1,
/// written, and then advanced after every write; once it passes the last
/// day the remaining cells stay zero.
///
/// Invalid input is not an error: the grid comes back empty and it is up
/// to the caller to validate month and year beforehand.
pub fn build_month_grid(month: u32, year: i32) -> Grid {
    let (Some(first_code), Some(last_day)) =
        (first_weekday_code(month, year), last_day_of_month(month, year))
    else {
        tracing::warn!("no calendar for month {} of year {}", month, year);
        return empty_grid();
    };

    let (grid, _) = (0..GRID_ROWS)
        .flat_map(|row| (0..GRID_COLS).map(move |col| (row, col)))
        .fold((empty_grid(), 0u32), |(mut grid, day), (row, col)| {
            if day > last_day {
                return (grid, day);
            }

            let started = day > 0 || WEEKDAY_CODES[col] == first_code;
            let day = if started { day.max(1) } else { day };
            grid[row][col] = day;

            (grid, if started { day + 1 } else { day })
        });

    grid
}
