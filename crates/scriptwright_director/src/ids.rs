//! Result identifiers.

use scriptwright_core::ScriptMode;
use std::sync::atomic::{AtomicI64, Ordering};

/// Issues `<mode>_<millis>` identifiers.
///
/// The millisecond part is strictly increasing within one generator, so two calls in
/// the same millisecond still get distinct ids.
///
/// # Examples
///
/// ```
/// use scriptwright_core::ScriptMode;
/// use scriptwright_director::IdGenerator;
///
/// let ids = IdGenerator::new();
/// let first = ids.next(ScriptMode::FreshAnalysis);
/// let second = ids.next(ScriptMode::FreshAnalysis);
/// assert!(first.starts_with("analysis_"));
/// assert_ne!(first, second);
/// ```
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_millis: AtomicI64,
}

impl IdGenerator {
    /// Create a new generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Next identifier for the given mode.
    pub fn next(&self, mode: ScriptMode) -> String {
        format!("{}_{}", mode, self.next_millis())
    }

    fn next_millis(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let mut last = self.last_millis.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self.last_millis.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(current) => last = current,
            }
        }
    }
}
