pub mod calc;
pub mod config;
pub mod console;
pub mod init;
pub mod nav;
pub mod report;
pub mod roster;
