pub mod dashboard;
pub mod report;
pub mod sink;
