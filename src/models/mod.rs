pub mod calendar;
pub mod employee;
pub mod group;
pub mod shift;
