use crate::{
    api::{ApiClient, ApiError, AttendanceRecord, AttendanceStat},
    pages::dashboard::utils::TimeSlotFilter,
};
use chrono::NaiveDate;
use std::rc::Rc;

/// Stats plus today's records fetched for one filter.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSnapshot {
    pub stats: Vec<AttendanceStat>,
    pub records: Vec<AttendanceRecord>,
}

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_stats(
        &self,
        filter: &TimeSlotFilter,
    ) -> Result<Vec<AttendanceStat>, ApiError> {
        self.client.get_attendance_stats(filter.slot()).await
    }

    pub async fn fetch_today_records(
        &self,
        filter: &TimeSlotFilter,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        match filter {
            TimeSlotFilter::All => self.client.get_attendance_by_date(date).await,
            TimeSlotFilter::Slot(slot) => self.client.get_attendance_by_timeslot(date, slot).await,
        }
    }

    /// Issues both requests concurrently; the first error wins.
    pub async fn fetch_snapshot(
        &self,
        filter: &TimeSlotFilter,
        date: NaiveDate,
    ) -> Result<DashboardSnapshot, ApiError> {
        let (stats, records) = futures::join!(
            self.fetch_stats(filter),
            self.fetch_today_records(filter, date)
        );
        Ok(DashboardSnapshot {
            stats: stats?,
            records: records?,
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::TimeSlot;
    use serde_json::json;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn repository(server: &MockServer) -> DashboardRepository {
        DashboardRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn all_filter_reads_records_by_date() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/stats");
            then.status(200).json_body(json!([
                { "student": "s1", "presentPercentage": 90.0 }
            ]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/date/2026-10-19");
            then.status(200).json_body(json!([]));
        });

        let snapshot = repository(&server)
            .fetch_snapshot(&TimeSlotFilter::All, day())
            .await
            .unwrap();

        assert_eq!(snapshot.stats.len(), 1);
        assert!(snapshot.records.is_empty());
        assert!(server.hits_for("/api/attendance/timeslot").is_empty());
    }

    #[tokio::test]
    async fn slot_filter_reads_records_by_timeslot() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/stats");
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/timeslot");
            then.status(200).json_body(json!([]));
        });

        let filter = TimeSlotFilter::Slot(TimeSlot::new("09:00", "10:00"));
        repository(&server)
            .fetch_snapshot(&filter, day())
            .await
            .unwrap();

        let stats = server.hits_for("/api/attendance/stats");
        assert_eq!(stats[0].query_value("startTime"), Some("09:00"));
        let records = server.hits_for("/api/attendance/timeslot");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].query_value("date"), Some("2026-10-19"));
        assert!(server.hits_for("/api/attendance/date/2026-10-19").is_empty());
    }

    #[tokio::test]
    async fn snapshot_fails_when_either_request_fails() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/stats");
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/date/2026-10-19");
            then.status(503).json_body(json!({ "error": "Service unavailable" }));
        });

        let err = repository(&server)
            .fetch_snapshot(&TimeSlotFilter::All, day())
            .await
            .unwrap_err();

        assert_eq!(err.error, "Service unavailable");
        assert_eq!(server.hits().len(), 2);
    }
}
