// Metrics hooks for the matcher.
//
// Callers install a global `CheckMetrics` implementation via [`set_check_metrics`];
// every `Matcher::score` call then reports its latency, how many candidate
// sentences it looked at, and how many documents ended up with a non-zero
// score. No metrics backend is linked here.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for candidate checks.
pub trait CheckMetrics: Send + Sync {
    /// `sentences` counts eligible candidate sentences; `matched_documents`
    /// counts documents with a non-zero score in either pass.
    fn record_check(&self, latency: Duration, sentences: usize, matched_documents: usize);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn CheckMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn CheckMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn CheckMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global check metrics recorder.
pub fn set_check_metrics(recorder: Option<Arc<dyn CheckMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
