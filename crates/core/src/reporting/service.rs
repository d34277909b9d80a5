//! Reporting service - periods, statistics and merged report rows

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeitlog_domain::constants::DEFAULT_TARGET_HOURS;
use zeitlog_domain::utils::time::round2;
use zeitlog_domain::{resolve_range, MergedBlock, Period, PeriodStats, Result};

use super::{aggregate, merge};
use crate::entries::ports::EntryRepository;

/// How a period's average day compares against the configured workday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetComparison {
    pub target_hours: f64,
    pub avg_hours_per_day: f64,
    /// Average as a percentage of the target.
    pub percent_of_target: f64,
}

pub struct ReportingService {
    entries: Arc<dyn EntryRepository>,
    target_hours: f64,
}

impl ReportingService {
    pub fn new(entries: Arc<dyn EntryRepository>) -> Self {
        Self { entries, target_hours: DEFAULT_TARGET_HOURS }
    }

    /// Override the workday used for target comparisons.
    pub fn with_target_hours(mut self, hours: f64) -> Self {
        self.target_hours = hours;
        self
    }

    /// Aggregate statistics for a resolved period.
    pub async fn stats(
        &self,
        period: Period,
        today: NaiveDate,
        custom_from: Option<&str>,
        custom_to: Option<&str>,
        project_filter: Option<&str>,
    ) -> Result<PeriodStats> {
        let range = resolve_range(period, today, custom_from, custom_to);
        let entries = self.entries.find_in_range(&range).await?;
        debug!(start = %range.start, end = %range.end, entries = entries.len(), "aggregating period");
        Ok(aggregate::aggregate(&entries, range, project_filter))
    }

    /// Merged report rows for a resolved period.
    pub async fn merged_blocks(
        &self,
        period: Period,
        today: NaiveDate,
        custom_from: Option<&str>,
        custom_to: Option<&str>,
    ) -> Result<Vec<MergedBlock>> {
        let range = resolve_range(period, today, custom_from, custom_to);
        let entries = self.entries.find_in_range(&range).await?;
        merge::merge_consecutive(&entries)
    }

    /// Compare a period's average day against the configured target.
    pub fn target_comparison(&self, stats: &PeriodStats) -> TargetComparison {
        let percent = if self.target_hours == 0.0 {
            0.0
        } else {
            round2(stats.avg_hours_per_day / self.target_hours * 100.0)
        };
        TargetComparison {
            target_hours: self.target_hours,
            avg_hours_per_day: stats.avg_hours_per_day,
            percent_of_target: percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use zeitlog_domain::NewEntry;

    use super::*;
    use crate::entries::EntryService;
    use crate::testing::MemoryEntryRepository;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn seeded() -> ReportingService {
        let repo = Arc::new(MemoryEntryRepository::default());
        let entries = EntryService::new(repo.clone());
        for (date, start, end, project) in [
            ("2024-03-04", "09:00", "13:00", "Alpha"),
            ("2024-03-04", "13:00", "13:30", "Pause"),
            ("2024-03-04", "13:30", "17:00", "Alpha"),
            ("2024-03-05", "09:00", "17:00", "Beta"),
            ("2024-02-29", "09:00", "17:00", "Alpha"),
        ] {
            entries
                .create(
                    NewEntry {
                        date: date.to_string(),
                        start: start.to_string(),
                        end: end.to_string(),
                        project: project.to_string(),
                        activity: String::new(),
                        remote: false,
                    },
                    false,
                )
                .await
                .unwrap();
        }
        ReportingService::new(repo)
    }

    #[tokio::test]
    async fn week_stats_cover_monday_through_today() {
        let service = seeded().await;
        // 2024-03-05 is a Tuesday; the week starts on the 4th.
        let stats = service
            .stats(Period::Week, date(2024, 3, 5), None, None, None)
            .await
            .unwrap();
        assert_eq!(stats.total_hours, 15.5);
        assert_eq!(stats.active_days, 2);
        assert_eq!(stats.avg_hours_per_day, 7.75);
    }

    #[tokio::test]
    async fn all_period_reaches_every_entry() {
        let service = seeded().await;
        let stats =
            service.stats(Period::All, date(2024, 3, 5), None, None, None).await.unwrap();
        assert_eq!(stats.entry_count, 4);
        assert_eq!(stats.total_hours, 23.5);
    }

    #[tokio::test]
    async fn merged_blocks_split_at_the_break() {
        let service = seeded().await;
        let blocks = service
            .merged_blocks(Period::Today, date(2024, 3, 4), None, None)
            .await
            .unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].hours, 4.0);
        assert!(blocks[1].is_pause);
    }

    #[tokio::test]
    async fn target_comparison_uses_configured_workday() {
        let service = seeded().await.with_target_hours(7.8);
        let stats = service
            .stats(Period::Week, date(2024, 3, 5), None, None, None)
            .await
            .unwrap();
        let target = service.target_comparison(&stats);
        assert_eq!(target.target_hours, 7.8);
        assert_eq!(target.percent_of_target, round2(7.75 / 7.8 * 100.0));
    }
}
