/// Structured feedback from a sync run.
///
/// The orchestrator collects these instead of printing, so callers decide
/// how to present them (the CLI writes to stderr; library consumers can log
/// or ignore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Progress and status messages.
    Info(String),
    /// A non-fatal failure; the run continued.
    Error(String),
}

impl Feedback {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Get the message text.
    pub fn message(&self) -> &str {
        match self {
            Self::Info(msg) | Self::Error(msg) => msg,
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info(msg) => write!(f, "{msg}"),
            Self::Error(msg) => write!(f, "error: {msg}"),
        }
    }
}
