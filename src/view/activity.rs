//! Busy flags readable from outside the view
//!
//! The view's operations hold `&mut self` across their awaits, so progress
//! has to live in a shared handle for a spinner or another task to see it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle onto the view's in-flight work
#[derive(Debug, Clone, Default)]
pub struct Activity {
    loading: Arc<AtomicBool>,
    translating: Arc<AtomicBool>,
}

impl Activity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advice request in flight
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Translation in flight
    pub fn is_translating(&self) -> bool {
        self.translating.load(Ordering::Acquire)
    }

    pub fn is_busy(&self) -> bool {
        self.is_loading() || self.is_translating()
    }

    /// String-table key describing the current work, if any
    pub fn status_key(&self) -> Option<&'static str> {
        if self.is_translating() {
            Some("translating")
        } else if self.is_loading() {
            Some("loading")
        } else {
            None
        }
    }

    pub(crate) fn begin_loading(&self) -> BusyGuard {
        BusyGuard::set(Arc::clone(&self.loading))
    }

    pub(crate) fn begin_translating(&self) -> BusyGuard {
        BusyGuard::set(Arc::clone(&self.translating))
    }
}

/// Raises a flag for its lifetime; dropping it (including when the owning
/// future is dropped mid-await) clears the flag
#[must_use]
pub(crate) struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl BusyGuard {
    fn set(flag: Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::Release);
        Self { flag }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_by_default() {
        let activity = Activity::new();
        assert!(!activity.is_busy());
        assert_eq!(activity.status_key(), None);
    }

    #[test]
    fn test_guard_clears_on_drop() {
        let activity = Activity::new();
        let observer = activity.clone();

        let guard = activity.begin_translating();
        assert!(observer.is_translating());
        assert_eq!(observer.status_key(), Some("translating"));

        drop(guard);
        assert!(!observer.is_busy());
    }

    #[test]
    fn test_loading_status() {
        let activity = Activity::new();
        let _guard = activity.begin_loading();
        assert!(activity.is_loading());
        assert!(!activity.is_translating());
        assert_eq!(activity.status_key(), Some("loading"));
    }
}
