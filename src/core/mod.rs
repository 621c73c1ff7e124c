pub mod api;
pub mod catalog;
pub mod format;
pub mod logs;
pub mod profile;
pub mod refresh;
pub mod session;
