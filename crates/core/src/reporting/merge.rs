//! Coalesce back-to-back entries into printable blocks
//!
//! The entries view stores each activity change as its own row; reports
//! want one row per contiguous sitting. Two entries merge when they share
//! a date, the earlier one ends exactly when the later one starts, and
//! both are on the same side of the work/break divide.

use zeitlog_domain::constants::is_pause_project;
use zeitlog_domain::utils::time::hours_between;
use zeitlog_domain::{MergedBlock, Result, TimeEntry};

pub fn merge_consecutive(entries: &[TimeEntry]) -> Result<Vec<MergedBlock>> {
    let mut sorted: Vec<&TimeEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| (&a.date, &a.start).cmp(&(&b.date, &b.start)));

    let mut blocks: Vec<MergedBlock> = Vec::new();

    for entry in sorted {
        let entry_is_pause = is_pause_project(&entry.project);

        if let Some(open) = blocks.last_mut() {
            let extends =
                open.date == entry.date && open.end == entry.start && open.is_pause == entry_is_pause;
            if extends {
                open.end = entry.end.clone();
                open.hours = hours_between(&open.start, &open.end)?;
                open.entry_count += 1;
                push_distinct(&mut open.projects, &entry.project);
                push_distinct(&mut open.activities, &entry.activity);
                continue;
            }
        }

        blocks.push(MergedBlock {
            date: entry.date.clone(),
            start: entry.start.clone(),
            end: entry.end.clone(),
            hours: entry.hours,
            is_pause: entry_is_pause,
            entry_count: 1,
            projects: vec![entry.project.clone()],
            activities: distinct_seed(&entry.activity),
        });
    }

    Ok(blocks)
}

fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

fn distinct_seed(value: &str) -> Vec<String> {
    if value.is_empty() {
        Vec::new()
    } else {
        vec![value.to_string()]
    }
}
