/// Running counters for a single search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub(crate) considered: u64,
    pub(crate) skipped: u64,
    pub(crate) matched: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates pulled from the enumeration so far
    pub fn considered(&self) -> u64 {
        self.considered
    }

    /// Candidates that could not be evaluated (division by zero or overflow)
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn matched(&self) -> u64 {
        self.matched
    }
}
