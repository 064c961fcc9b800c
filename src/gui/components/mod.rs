// src/gui/components/mod.rs
pub mod details;
pub mod error_banner;
pub mod export_bar;
pub mod metrics_grid;
pub mod run_bar;
pub mod summary_cards;
pub mod tabs;
