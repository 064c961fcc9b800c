// src/progress.rs
/// Lightweight progress reporting used by long-running operations (audits).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of URLs (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one URL's audit completes.
    fn item_done(&mut self, _index: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
