pub mod format;
pub mod indicator;
pub mod record;
pub mod year;
