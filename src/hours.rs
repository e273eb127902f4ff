// SPDX-License-Identifier: MPL-2.0
//! Opening-hours arithmetic for the about screen's status chip.
//!
//! Intervals are end-exclusive: at the closing minute the shop is already
//! closed. The chip is computed from the system clock, refreshed once a
//! minute while the about screen is shown.

use chrono::{Datelike, Local, Timelike, Weekday};

/// Opening interval for one weekday, in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHours {
    pub open: u16,
    pub close: u16,
}

impl DayHours {
    #[must_use]
    pub fn new(open: u16, close: u16) -> Self {
        Self { open, close }
    }

    /// `"10:00 – 17:00"` for the weekly table.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{:02}:{:02} – {:02}:{:02}",
            self.open / 60,
            self.open % 60,
            self.close / 60,
            self.close % 60
        )
    }
}

/// Whether the shop is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopStatus {
    Open,
    Closed,
}

impl ShopStatus {
    /// Text for the status chip.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ShopStatus::Open => "Open now",
            ShopStatus::Closed => "Closed",
        }
    }
}

/// Per-weekday opening hours; `None` means closed all day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: [Option<DayHours>; 7],
}

impl Default for WeeklySchedule {
    /// The shop's schedule: Monday and Wednesday through Saturday
    /// 10:00–17:00, Tuesday and Sunday closed.
    fn default() -> Self {
        let open_day = Some(DayHours::new(10 * 60, 17 * 60));
        Self {
            days: [
                open_day, // Monday
                None,     // Tuesday
                open_day, // Wednesday
                open_day, // Thursday
                open_day, // Friday
                open_day, // Saturday
                None,     // Sunday
            ],
        }
    }
}

impl WeeklySchedule {
    /// Hours for one weekday, `None` when closed all day.
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> Option<DayHours> {
        self.days[weekday.num_days_from_monday() as usize]
    }

    /// Status at a given weekday and minute of the day, end-exclusive.
    #[must_use]
    pub fn status_at(&self, weekday: Weekday, minutes_since_midnight: u16) -> ShopStatus {
        match self.day(weekday) {
            Some(hours)
                if minutes_since_midnight >= hours.open
                    && minutes_since_midnight < hours.close =>
            {
                ShopStatus::Open
            }
            _ => ShopStatus::Closed,
        }
    }

    /// Status at the system clock's current local time.
    #[must_use]
    pub fn status_now(&self) -> ShopStatus {
        let now = Local::now();
        let minutes = (now.hour() * 60 + now.minute()) as u16;
        self.status_at(now.weekday(), minutes)
    }

    /// (weekday name, hours label) rows for the weekly table, Monday first.
    #[must_use]
    pub fn table_rows(&self) -> Vec<(&'static str, String)> {
        const NAMES: [&str; 7] = [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ];

        NAMES
            .iter()
            .zip(self.days.iter())
            .map(|(name, hours)| {
                let label = match hours {
                    Some(h) => h.label(),
                    None => "Closed".to_owned(),
                };
                (*name, label)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_during_business_hours() {
        let schedule = WeeklySchedule::default();
        assert_eq!(schedule.status_at(Weekday::Mon, 10 * 60), ShopStatus::Open);
        assert_eq!(
            schedule.status_at(Weekday::Sat, 12 * 60 + 30),
            ShopStatus::Open
        );
    }

    #[test]
    fn closing_minute_is_exclusive() {
        let schedule = WeeklySchedule::default();
        assert_eq!(
            schedule.status_at(Weekday::Fri, 16 * 60 + 59),
            ShopStatus::Open
        );
        assert_eq!(
            schedule.status_at(Weekday::Fri, 17 * 60),
            ShopStatus::Closed
        );
    }

    #[test]
    fn before_opening_is_closed() {
        let schedule = WeeklySchedule::default();
        assert_eq!(
            schedule.status_at(Weekday::Mon, 9 * 60 + 59),
            ShopStatus::Closed
        );
        assert_eq!(schedule.status_at(Weekday::Mon, 0), ShopStatus::Closed);
    }

    #[test]
    fn tuesday_and_sunday_closed_all_day() {
        let schedule = WeeklySchedule::default();
        for minutes in [0u16, 10 * 60, 12 * 60, 16 * 60 + 59, 23 * 60 + 59] {
            assert_eq!(schedule.status_at(Weekday::Tue, minutes), ShopStatus::Closed);
            assert_eq!(schedule.status_at(Weekday::Sun, minutes), ShopStatus::Closed);
        }
    }

    #[test]
    fn day_hours_label_formats_zero_padded() {
        assert_eq!(DayHours::new(600, 1020).label(), "10:00 – 17:00");
        assert_eq!(DayHours::new(9 * 60 + 5, 17 * 60 + 30).label(), "09:05 – 17:30");
    }

    #[test]
    fn table_has_seven_rows_monday_first() {
        let rows = WeeklySchedule::default().table_rows();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].0, "Monday");
        assert_eq!(rows[1], ("Tuesday", "Closed".to_owned()));
        assert_eq!(rows[6], ("Sunday", "Closed".to_owned()));
    }

    #[test]
    fn status_labels() {
        assert_eq!(ShopStatus::Open.label(), "Open now");
        assert_eq!(ShopStatus::Closed.label(), "Closed");
    }
}
