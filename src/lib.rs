pub mod config;
pub mod main_module;
pub mod shared;
pub mod tasks;
