pub mod cli;
pub mod config;
pub mod habits;
pub mod logging;
pub mod mvi;
pub mod store;
pub mod ui;
