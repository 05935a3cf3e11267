pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod logging;
pub mod selection;
pub mod state;
pub mod table;
