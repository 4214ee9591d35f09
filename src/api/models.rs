use std::fmt;

/// Result of one profile lookup that did not abort the run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LookupOutcome {
    Fetched(String),
    FallbackUsed(FallbackReason),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FallbackReason {
    Transport(String),
    MissingDisplayName,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::Transport(message) => write!(f, "request failed: {message}"),
            FallbackReason::MissingDisplayName => f.write_str("profile page has no display name"),
        }
    }
}

/// One output line: `<identifier> = <display>`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MappingRecord {
    pub identifier: String,
    pub display: String,
}

impl fmt::Display for MappingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.identifier, self.display)
    }
}
