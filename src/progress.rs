// src/progress.rs
/// Lightweight progress reporting for a verb batch.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of verbs.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One verb fetched and extracted.
    fn item_done(&mut self, _verb: &str) {}

    /// One verb failed; the batch goes on.
    fn item_failed(&mut self, _verb: &str, _err: &crate::error::Error) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
