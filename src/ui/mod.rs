pub mod calendar_view;
pub mod messages;
