pub mod app;
pub mod config;
pub mod favorites;
pub mod format;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod page;
pub mod service;
pub mod ui;
