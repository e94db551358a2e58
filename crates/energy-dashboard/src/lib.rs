// File: crates/energy-dashboard/src/lib.rs
// Summary: Application layer: orchestration, view models, notifications, export.

pub mod config;
pub mod dashboard;
pub mod export;
pub mod notify;
pub mod sample;
pub mod views;

pub use config::Config;
pub use dashboard::{AnalyticsData, Dashboard, OverviewData, Section};
pub use notify::{LogNotifier, MemoryNotifier, Notice, Notifier, Severity};
