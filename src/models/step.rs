use std::fmt;

/// Coarse phase of the timer, as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    New,
    Running,
    Stopped,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::New => "new",
            Step::Running => "running",
            Step::Stopped => "stopped",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
