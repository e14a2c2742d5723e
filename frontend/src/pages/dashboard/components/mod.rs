pub mod filters;
pub mod quick_actions;
pub mod summary;
pub mod today_table;
pub mod top_performers;

pub use filters::TimeSlotSelect;
pub use quick_actions::QuickActions;
pub use summary::SummarySection;
pub use today_table::TodayAttendanceTable;
pub use top_performers::TopPerformersSection;
