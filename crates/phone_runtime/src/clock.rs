//! Wall-clock snapshot and display formatting for the status bar and clock panel.

const WEEKDAYS_JA: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Local time captured once per tick.
pub struct ClockSnapshot {
    pub year: u32,
    /// 1-based.
    pub month: u32,
    pub day: u32,
    /// 0 = Sunday.
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockSnapshot {
    /// Reads the browser clock; native builds get the Unix epoch.
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                weekday: date.get_day(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1970,
                month: 1,
                day: 1,
                weekday: 4,
                hour: 0,
                minute: 0,
                second: 0,
            }
        }
    }
}

/// `HH:MM` for the status bar.
pub fn format_status_time(snapshot: ClockSnapshot) -> String {
    format!("{:02}:{:02}", snapshot.hour, snapshot.minute)
}

/// `HH:MM:SS` for the clock panel.
pub fn format_clock_time(snapshot: ClockSnapshot) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        snapshot.hour, snapshot.minute, snapshot.second
    )
}

/// `YYYY年M月D日(曜)`.
pub fn format_clock_date(snapshot: ClockSnapshot) -> String {
    format!(
        "{}年{}月{}日({})",
        snapshot.year,
        snapshot.month,
        snapshot.day,
        WEEKDAYS_JA[(snapshot.weekday % 7) as usize]
    )
}

/// Short weekday labels starting on Sunday.
pub fn weekday_labels() -> [&'static str; 7] {
    WEEKDAYS_JA
}

pub fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Month grid cells for the snapshot's month, Sunday first. Leading blanks are `None`.
pub fn month_grid(snapshot: ClockSnapshot) -> Vec<Option<u32>> {
    let offset = (snapshot.weekday + 7 - (snapshot.day.saturating_sub(1) % 7)) % 7;
    let mut cells: Vec<Option<u32>> = vec![None; offset as usize];
    cells.extend((1..=days_in_month(snapshot.year, snapshot.month)).map(Some));
    cells
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn snapshot() -> ClockSnapshot {
        ClockSnapshot {
            year: 2026,
            month: 10,
            day: 19,
            weekday: 1,
            hour: 7,
            minute: 5,
            second: 9,
        }
    }

    #[test]
    fn times_are_zero_padded() {
        assert_eq!(format_status_time(snapshot()), "07:05");
        assert_eq!(format_clock_time(snapshot()), "07:05:09");
    }

    #[test]
    fn date_uses_japanese_weekday() {
        assert_eq!(format_clock_date(snapshot()), "2026年10月19日(月)");
    }

    #[test]
    fn month_lengths_follow_gregorian_rules() {
        assert_eq!(days_in_month(2026, 10), 31);
        assert_eq!(days_in_month(2026, 11), 30);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn month_grid_starts_on_the_right_weekday() {
        // 2026-10-01 is a Thursday.
        let grid = month_grid(snapshot());
        assert_eq!(&grid[..5], &[None, None, None, None, Some(1)]);
        assert_eq!(grid.len(), 4 + 31);
        assert_eq!(grid.last(), Some(&Some(31)));
    }
}
