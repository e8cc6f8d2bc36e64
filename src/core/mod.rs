pub mod attendance;
pub mod board_feet;
pub mod form;
pub mod ids;
pub mod log;
pub mod nav;
pub mod photo;
pub mod report;
pub mod users;
pub mod worklog;
