//! Period statistics over a filtered entry set
//!
//! Break entries (`Pause`) do not count as working time, so they stay out
//! of the totals, the active-day count and the remote split. The one
//! exception is a dashboard filtered to the pause label itself, where the
//! caller is asking about break time and pause hours become the primary
//! series. The per-project breakdown always lists pause under its own label.

use std::collections::BTreeSet;

use zeitlog_domain::constants::is_pause_project;
use zeitlog_domain::utils::time::round2;
use zeitlog_domain::{DateRange, PeriodStats, ProjectShare, TimeEntry};

pub fn aggregate(
    entries: &[TimeEntry],
    range: DateRange,
    project_filter: Option<&str>,
) -> PeriodStats {
    let pause_focus = project_filter.is_some_and(is_pause_project);

    let scoped: Vec<&TimeEntry> = entries
        .iter()
        .filter(|e| range.contains(&e.date))
        .filter(|e| project_filter.is_none_or(|p| e.project == p))
        .collect();

    let mut total_hours = 0.0;
    let mut remote_hours = 0.0;
    let mut onsite_hours = 0.0;
    let mut entry_count = 0;
    let mut active_days: BTreeSet<&str> = BTreeSet::new();
    let mut projects: Vec<ProjectShare> = Vec::new();

    for entry in &scoped {
        let counts = is_pause_project(&entry.project) == pause_focus;
        if counts {
            total_hours += entry.hours;
            entry_count += 1;
            active_days.insert(entry.date.as_str());
            if entry.remote {
                remote_hours += entry.hours;
            } else {
                onsite_hours += entry.hours;
            }
        }

        match projects.iter_mut().find(|p| p.project == entry.project) {
            Some(share) => share.hours += entry.hours,
            None => projects.push(ProjectShare {
                project: entry.project.clone(),
                hours: entry.hours,
                percent: 0.0,
            }),
        }
    }

    total_hours = round2(total_hours);
    remote_hours = round2(remote_hours);
    onsite_hours = round2(onsite_hours);

    for share in &mut projects {
        share.hours = round2(share.hours);
        share.percent = percent_of(share.hours, total_hours);
    }
    projects.sort_by(|a, b| b.hours.partial_cmp(&a.hours).unwrap_or(std::cmp::Ordering::Equal));

    let active = active_days.len();
    PeriodStats {
        range,
        total_hours,
        entry_count,
        active_days: active,
        avg_hours_per_day: if active == 0 { 0.0 } else { round2(total_hours / active as f64) },
        remote_hours,
        onsite_hours,
        remote_percent: percent_of(remote_hours, total_hours),
        onsite_percent: percent_of(onsite_hours, total_hours),
        projects,
    }
}

fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        round2(part / whole * 100.0)
    }
}
