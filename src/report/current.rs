//! Shared handle to the most recent completed report.

use std::sync::{Arc, RwLock};

use super::Report;

/// The latest published report, shared between a scanning loop and
/// any number of readers.
///
/// A report is only visible once [`publish`](Self::publish) swaps it in
/// whole. Readers get an `Arc` and keep a consistent view even if a newer
/// report is published while they hold it.
#[derive(Debug, Clone, Default)]
pub struct CurrentReport {
    inner: Arc<RwLock<Option<Arc<Report>>>>,
}

impl CurrentReport {
    /// Create an empty handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current report.
    pub fn publish(&self, report: Report) -> Arc<Report> {
        let report = Arc::new(report);
        let mut slot = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(Arc::clone(&report));
        report
    }

    /// The last published report, if any scan has completed.
    pub fn latest(&self) -> Option<Arc<Report>> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
