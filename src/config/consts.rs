// src/config/consts.rs

// Local scratch (log file lives here)
pub const STORE_DIR: &str = ".store";

// Simulated audit timing
pub const ANALYSIS_DELAY_MS: u64 = 2000;

// Summary ranges the simulated provider draws from
pub const OVERALL_SCORE_MIN: u8 = 70;
pub const OVERALL_SCORE_MAX: u8 = 99;
pub const TESTS_PASSED_MIN: u8 = 20;
pub const TESTS_PASSED_MAX: u8 = 24;
pub const TESTS_TOTAL: u8 = 25;
pub const CRITICAL_ISSUES_MIN: u8 = 1;
pub const CRITICAL_ISSUES_MAX: u8 = 3;
pub const BATCH_URLS_MIN: u32 = 2;
pub const BATCH_URLS_MAX: u32 = 11;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_REPORT_STEM: &str = "audit_report";
