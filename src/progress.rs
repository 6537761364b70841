// src/progress.rs
/// Progress reporting for the solutions runner.
/// Frontends implement this to show status while days run.
pub trait Progress {
    /// Called at the start with the number of days queued.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A day finished, both requested parts answered.
    fn item_done(&mut self, _day: u32) {}

    /// A day could not be run or one of its parts failed.
    fn item_failed(&mut self, _day: u32, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
