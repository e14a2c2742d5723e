pub mod poll;
pub mod storage;
pub mod time;
