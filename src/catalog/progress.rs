use super::query::rounded_average;
use super::records::CourseCategory;
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::str::FromStr;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Learner's state on a tracked course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressStatus {
    InProgress,
    Completed,
}

impl ProgressStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProgressStatus::InProgress => "in progress",
            ProgressStatus::Completed => "completed",
        }
    }
}

/// One row of the progress dashboard
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProgressEntry {
    pub id: String,
    pub name: String,
    pub category: CourseCategory,
    /// Completion percentage 0-100
    pub progress: u8,
    pub total_hours: f64,
    pub completed_hours: f64,
    /// Last day the learner opened the course (format: YYYY-MM-DD)
    pub last_accessed: NaiveDate,
    pub status: ProgressStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Achievement {
    pub name: String,
    pub date: NaiveDate,
    pub icon: String,
}

/// Everything shown on the progress dashboard
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LearnerProgress {
    /// Consecutive days of activity
    pub streak: u32,
    pub achievements: Vec<Achievement>,
    pub entries: Vec<ProgressEntry>,
}

/// Recency window for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    All,
    Week,
    Month,
    Quarter,
}

impl Period {
    /// Largest number of elapsed days still inside the window
    pub fn max_days(self) -> Option<i64> {
        match self {
            Period::All => None,
            Period::Week => Some(7),
            Period::Month => Some(30),
            Period::Quarter => Some(90),
        }
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Period::All),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "quarter" => Ok(Period::Quarter),
            _ => Err(format!(
                "Invalid period '{}'. Valid options are: all, week, month, quarter",
                s
            )),
        }
    }
}

/// Keep the entries accessed within `period` of `today`, in source order
pub fn filter_by_period(
    entries: &[ProgressEntry],
    period: Period,
    today: NaiveDate,
) -> Vec<&ProgressEntry> {
    match period.max_days() {
        None => entries.iter().collect(),
        Some(max_days) => entries
            .iter()
            .filter(|entry| (today - entry.last_accessed).num_days() <= max_days)
            .collect(),
    }
}

/// Dashboard headline numbers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSummary {
    pub tracked: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub hours_spent: f64,
    pub overall_progress: u32,
    pub streak: u32,
}

impl LearnerProgress {
    /// Summarize the current entries
    pub fn summary(&self) -> ProgressSummary {
        let completed = self
            .entries
            .iter()
            .filter(|e| e.status == ProgressStatus::Completed)
            .count();
        ProgressSummary {
            tracked: self.entries.len(),
            completed,
            in_progress: self.entries.len() - completed,
            hours_spent: self.entries.iter().map(|e| e.completed_hours).sum(),
            overall_progress: rounded_average(self.entries.iter().map(|e| f64::from(e.progress))),
            streak: self.streak,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_parse() {
        assert_eq!("week".parse::<Period>(), Ok(Period::Week));
        assert!("year".parse::<Period>().is_err());
        assert_eq!(Period::default(), Period::All);
    }

    #[test]
    fn test_filter_by_period_windows() {
        let progress = Catalog::seed().unwrap().progress;
        let today = date(2024, 7, 2);

        let ids = |period| -> Vec<String> {
            filter_by_period(&progress.entries, period, today)
                .iter()
                .map(|e| e.id.clone())
                .collect()
        };

        // last accessed 4, 7, 12, 17, 22 days before today
        assert_eq!(ids(Period::Week), vec!["1", "2"]);
        assert_eq!(ids(Period::Month), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(ids(Period::All).len(), 5);
    }

    #[test]
    fn test_filter_by_period_boundary() {
        let progress = Catalog::seed().unwrap().progress;
        // entry "2" was accessed exactly 7 days earlier
        let week = filter_by_period(&progress.entries, Period::Week, date(2024, 7, 2));
        assert!(week.iter().any(|e| e.id == "2"));
        let week = filter_by_period(&progress.entries, Period::Week, date(2024, 7, 3));
        assert!(!week.iter().any(|e| e.id == "2"));
    }

    #[test]
    fn test_summary_seed() {
        let summary = Catalog::seed().unwrap().progress.summary();
        assert_eq!(summary.tracked, 5);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.in_progress, 4);
        assert!((summary.hours_spent - 82.2).abs() < 1e-9);
        // (65 + 85 + 100 + 30 + 45) / 5 = 65
        assert_eq!(summary.overall_progress, 65);
        assert_eq!(summary.streak, 15);
    }

    #[test]
    fn test_summary_empty() {
        let summary = LearnerProgress::default().summary();
        assert_eq!(summary.tracked, 0);
        assert_eq!(summary.overall_progress, 0);
        assert_eq!(summary.hours_spent, 0.0);
    }
}
