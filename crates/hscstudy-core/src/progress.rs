//! Overall progress indicator.
//!
//! Completion is not computed from interaction state. The only value is a
//! fixed placeholder, and the type says so, so callers cannot mistake it for
//! a measured figure.

/// Percentage shown while real progress tracking does not exist
pub const PLACEHOLDER_PERCENT: u8 = 55;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Fixed value, not derived from what the student has done
    Placeholder { percent: u8 },
}

impl Progress {
    pub fn current() -> Self {
        Progress::Placeholder {
            percent: PLACEHOLDER_PERCENT,
        }
    }

    pub fn percent(&self) -> u8 {
        match self {
            Progress::Placeholder { percent } => *percent,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Progress::Placeholder { .. })
    }

    /// `55% Complete`
    pub fn label(&self) -> String {
        format!("{}% Complete", self.percent())
    }

    /// CSS width for the progress fill
    pub fn width(&self) -> String {
        format!("{}%", self.percent())
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_progress() {
        let progress = Progress::current();
        assert!(progress.is_placeholder());
        assert_eq!(progress.percent(), 55);
        assert_eq!(progress.label(), "55% Complete");
        assert_eq!(progress.width(), "55%");
    }
}
