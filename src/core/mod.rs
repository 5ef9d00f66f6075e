pub mod backup;
pub mod calendar;
pub mod employee;
pub mod import;
pub mod log;
pub mod range;
pub mod shift;
