pub mod args;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod service;
pub mod shortener;
pub mod ui;
