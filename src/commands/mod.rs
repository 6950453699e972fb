pub mod create;
pub mod list;
pub mod logs;
pub mod restart;
pub mod show;
pub mod switch;
pub mod ui_log;
pub mod zoom;
