//! Layout and repaint invalidation tracking.
//!
//! Changes mark a container dirty; the host runs the actual measure/layout
//! pass later (typically before painting) and clears the flags.

/// Pending layout/repaint work for one container.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Invalidation {
    needs_layout: bool,
    needs_repaint: bool,
    /// Total requests accepted, including ones coalesced while already dirty.
    requests: u64,
    /// Nesting depth of `suspend` calls.
    suspended: u32,
    /// A request arrived while suspended.
    deferred: bool,
}

impl Invalidation {
    /// Create a clean record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark that a re-measure, re-layout and repaint are needed.
    ///
    /// Returns `true` when the request was recorded now, `false` when it was
    /// deferred because invalidation is suspended.
    pub fn request_layout(&mut self) -> bool {
        if self.suspended > 0 {
            self.deferred = true;
            return false;
        }
        self.needs_layout = true;
        self.needs_repaint = true;
        self.requests += 1;
        true
    }

    /// Mark that only a repaint is needed.
    pub fn request_repaint(&mut self) {
        self.needs_repaint = true;
    }

    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Number of layout requests recorded so far.
    #[inline]
    pub fn request_count(&self) -> u64 {
        self.requests
    }

    /// Clear the layout flag after a layout pass.
    pub fn layout_done(&mut self) {
        self.needs_layout = false;
    }

    /// Clear the repaint flag after a paint pass.
    pub fn repaint_done(&mut self) {
        self.needs_repaint = false;
    }

    /// Start deferring requests. Calls nest.
    pub fn suspend(&mut self) {
        self.suspended += 1;
    }

    #[inline]
    pub fn is_suspended(&self) -> bool {
        self.suspended > 0
    }

    /// Undo one `suspend`.
    ///
    /// Returns `true` if the outermost suspension ended and a deferred
    /// request was turned into a real one, in which case the caller should
    /// notify as for a fresh request.
    pub fn resume(&mut self) -> bool {
        if self.suspended == 0 {
            return false;
        }
        self.suspended -= 1;
        if self.suspended > 0 {
            return false;
        }
        if std::mem::take(&mut self.deferred) {
            self.request_layout()
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_and_clear() {
        let mut inv = Invalidation::new();
        assert!(!inv.needs_layout());

        assert!(inv.request_layout());
        assert!(inv.needs_layout());
        assert!(inv.needs_repaint());
        assert_eq!(inv.request_count(), 1);

        inv.layout_done();
        assert!(!inv.needs_layout());
        assert!(inv.needs_repaint());
        inv.repaint_done();
        assert!(!inv.needs_repaint());
    }

    #[test]
    fn test_suspend_coalesces() {
        let mut inv = Invalidation::new();
        inv.suspend();
        assert!(!inv.request_layout());
        assert!(!inv.request_layout());
        assert!(!inv.needs_layout());
        assert_eq!(inv.request_count(), 0);

        assert!(inv.resume());
        assert!(inv.needs_layout());
        assert_eq!(inv.request_count(), 1);
    }

    #[test]
    fn test_nested_suspend() {
        let mut inv = Invalidation::new();
        inv.suspend();
        inv.suspend();
        inv.request_layout();
        assert!(!inv.resume());
        assert!(inv.is_suspended());
        assert!(inv.resume());
        assert_eq!(inv.request_count(), 1);
    }

    #[test]
    fn test_resume_without_deferred() {
        let mut inv = Invalidation::new();
        assert!(!inv.resume());
        inv.suspend();
        assert!(!inv.resume());
        assert!(!inv.is_suspended());
    }

    #[test]
    fn test_repaint_only() {
        let mut inv = Invalidation::new();
        inv.request_repaint();
        assert!(inv.needs_repaint());
        assert!(!inv.needs_layout());
    }
}
