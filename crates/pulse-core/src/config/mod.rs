//! Configuration for the monitoring agent.

pub mod defaults;
mod monitor_config;

pub use monitor_config::MonitorConfig;
