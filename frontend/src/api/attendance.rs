use chrono::NaiveDate;

use super::{
    client::ApiClient,
    types::{ApiError, AttendanceRecord, AttendanceStat, TimeSlot},
};

fn slot_params(slot: &TimeSlot) -> [(&'static str, String); 2] {
    [
        ("startTime", slot.start.clone()),
        ("endTime", slot.end.clone()),
    ]
}

impl ApiClient {
    pub async fn get_attendance_stats(
        &self,
        slot: Option<&TimeSlot>,
    ) -> Result<Vec<AttendanceStat>, ApiError> {
        let query = slot.map(|s| slot_params(s).to_vec()).unwrap_or_default();
        self.get_json("/attendance/stats", &query).await
    }

    pub async fn get_attendance_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let path = format!("/attendance/date/{}", date.format("%Y-%m-%d"));
        self.get_json(&path, &[]).await
    }

    pub async fn get_attendance_by_timeslot(
        &self,
        date: NaiveDate,
        slot: &TimeSlot,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let mut query = vec![("date", date.format("%Y-%m-%d").to_string())];
        query.extend(slot_params(slot));
        self.get_json("/attendance/timeslot", &query).await
    }
}
