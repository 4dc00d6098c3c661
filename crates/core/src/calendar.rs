//! Month arithmetic and per-day grouping for the trainer booking calendar.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

/// A calendar month. Months are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

impl CalendarMonth {
    /// Returns `None` for a month outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("month validated on construction")
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day() - Duration::days(1)
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Inclusive UTC range covering the whole month, from midnight on the
    /// first to the last millisecond of the last day.
    pub fn utc_range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.first_day().and_time(NaiveTime::MIN).and_utc();
        let end = self
            .last_day()
            .and_hms_milli_opt(23, 59, 59, 999)
            .expect("valid time of day")
            .and_utc();
        (start, end)
    }

    /// Weeks of the month for a Sunday-first grid. Cells outside the month
    /// are `None`.
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let first = self.first_day();
        let leading = first.weekday().num_days_from_sunday() as usize;
        let total = self.days_in_month() as usize;

        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut cell = leading;
        for offset in 0..total {
            week[cell] = Some(first + Duration::days(offset as i64));
            cell += 1;
            if cell == 7 {
                weeks.push(week);
                week = [None; 7];
                cell = 0;
            }
        }
        if cell > 0 {
            weeks.push(week);
        }
        weeks
    }

    /// Display title, e.g. `March 2025`.
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

/// Group items by the UTC calendar day of the timestamp `key` returns.
/// Items keep their input order within a day.
pub fn group_by_day<T, F>(items: impl IntoIterator<Item = T>, key: F) -> BTreeMap<NaiveDate, Vec<T>>
where
    F: Fn(&T) -> DateTime<Utc>,
{
    let mut days: BTreeMap<NaiveDate, Vec<T>> = BTreeMap::new();
    for item in items {
        let day = key(&item).date_naive();
        days.entry(day).or_default().push(item);
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_invalid_month() {
        assert!(CalendarMonth::new(2025, 0).is_none());
        assert!(CalendarMonth::new(2025, 13).is_none());
    }

    #[test]
    fn navigation_wraps_years() {
        let jan = CalendarMonth::new(2025, 1).unwrap();
        assert_eq!(jan.prev(), CalendarMonth::new(2024, 12).unwrap());
        assert_eq!(jan.prev().next(), jan);
        let dec = CalendarMonth::new(2025, 12).unwrap();
        assert_eq!(dec.next(), CalendarMonth::new(2026, 1).unwrap());
    }

    #[test]
    fn month_lengths() {
        assert_eq!(CalendarMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(CalendarMonth::new(2025, 2).unwrap().days_in_month(), 28);
        assert_eq!(CalendarMonth::new(2025, 4).unwrap().days_in_month(), 30);
        assert_eq!(CalendarMonth::new(2025, 12).unwrap().days_in_month(), 31);
    }

    #[test]
    fn utc_range_spans_whole_month() {
        let (start, end) = CalendarMonth::new(2025, 3).unwrap().utc_range();
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(end.date_naive(), date(2025, 3, 31));
        assert!(end < Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn grid_starts_on_sunday() {
        // 1 March 2025 is a Saturday.
        let weeks = CalendarMonth::new(2025, 3).unwrap().weeks();
        assert_eq!(weeks[0][..6], [None; 6]);
        assert_eq!(weeks[0][6], Some(date(2025, 3, 1)));
        assert_eq!(weeks.len(), 6);
        let cells: usize = weeks.iter().flatten().filter(|c| c.is_some()).count();
        assert_eq!(cells, 31);
    }

    #[test]
    fn title_names_the_month() {
        assert_eq!(CalendarMonth::new(2025, 3).unwrap().title(), "March 2025");
    }

    #[test]
    fn groups_by_utc_day_in_input_order() {
        let items = vec![
            ("a", Utc.with_ymd_and_hms(2025, 3, 7, 9, 0, 0).unwrap()),
            ("b", Utc.with_ymd_and_hms(2025, 3, 8, 9, 0, 0).unwrap()),
            ("c", Utc.with_ymd_and_hms(2025, 3, 7, 15, 0, 0).unwrap()),
        ];
        let days = group_by_day(items, |(_, ts)| *ts);
        assert_eq!(days.len(), 2);
        let names: Vec<_> = days[&date(2025, 3, 7)].iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(days[&date(2025, 3, 8)].len(), 1);
    }
}
