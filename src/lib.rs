// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod audit;
pub mod config;
pub mod export;
pub mod gui;
pub mod ingest;
pub mod progress;
