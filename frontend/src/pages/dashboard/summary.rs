//! Client-side aggregation over the stats and today's records.

use crate::api::{AttendanceRecord, AttendanceStat, TimeSlot};
use std::collections::HashSet;

pub const ATTENDANCE_THRESHOLD: f64 = 75.0;
pub const TOP_PERFORMER_LIMIT: usize = 5;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSummary {
    pub total_students: usize,
    pub average_attendance: f64,
    pub present_today: usize,
    pub below_threshold: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TopPerformer {
    pub name: String,
    pub attendance: f64,
}

pub fn summarize(stats: &[AttendanceStat], records: &[AttendanceRecord]) -> DashboardSummary {
    let total_students = stats
        .iter()
        .map(|stat| stat.student.id())
        .collect::<HashSet<_>>()
        .len();
    let average_attendance = if stats.is_empty() {
        0.0
    } else {
        stats.iter().map(|stat| stat.present_percentage).sum::<f64>() / stats.len() as f64
    };
    let below_threshold = stats
        .iter()
        .filter(|stat| stat.present_percentage < ATTENDANCE_THRESHOLD)
        .count();

    DashboardSummary {
        total_students,
        average_attendance,
        present_today: records.len(),
        below_threshold,
    }
}

/// Distinct `start-end` pairs in first-seen order; stats missing either
/// bound are skipped.
pub fn collect_time_slots(stats: &[AttendanceStat]) -> Vec<TimeSlot> {
    let mut seen = HashSet::new();
    stats
        .iter()
        .filter_map(|stat| match (&stat.start_time, &stat.end_time) {
            (Some(start), Some(end)) => Some(TimeSlot::new(start.as_str(), end.as_str())),
            _ => None,
        })
        .filter(|slot| seen.insert(slot.clone()))
        .collect()
}

pub fn top_performers(stats: &[AttendanceStat], limit: usize) -> Vec<TopPerformer> {
    let mut ranked: Vec<&AttendanceStat> = stats.iter().collect();
    ranked.sort_by(|a, b| b.present_percentage.total_cmp(&a.present_percentage));
    ranked
        .into_iter()
        .take(limit)
        .map(|stat| TopPerformer {
            name: stat.display_name(),
            attendance: stat.present_percentage,
        })
        .collect()
}
