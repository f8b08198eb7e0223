//! Review status and provenance markers for relations

/// Review status of a relation
///
/// The status machine is bounded and monotonic: a relation starts
/// `Pending` and moves exactly once to `Approved` or `Rejected`. The
/// terminal states admit no further transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewStatus {
    /// Awaiting a human decision (initial state)
    Pending,

    /// Confirmed by a reviewer (terminal)
    Approved,

    /// Declined by a reviewer (terminal)
    Rejected,
}

impl ReviewStatus {
    /// Get the wire name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }

    /// Parse a status from its wire name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(ReviewStatus::Pending),
            "approved" => Some(ReviewStatus::Approved),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }

    /// Whether this status admits no further transition
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReviewStatus::Pending)
    }

    /// Whether moving from `self` to `to` is a legal transition
    pub fn can_transition_to(&self, to: ReviewStatus) -> bool {
        *self == ReviewStatus::Pending && to.is_terminal()
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid review status: {}", s))
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a relation came to exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreatedVia {
    /// Created directly by a user
    Manual,

    /// Proposed by the match orchestrator
    Ai,
}

impl CreatedVia {
    /// Get the wire name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CreatedVia::Manual => "manual",
            CreatedVia::Ai => "ai",
        }
    }

    /// Parse a provenance marker from its wire name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "manual" => Some(CreatedVia::Manual),
            "ai" => Some(CreatedVia::Ai),
            _ => None,
        }
    }
}

impl std::fmt::Display for CreatedVia {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in [
            ReviewStatus::Pending,
            ReviewStatus::Approved,
            ReviewStatus::Rejected,
        ] {
            assert_eq!(ReviewStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(!ReviewStatus::Pending.is_terminal());
        assert!(ReviewStatus::Approved.is_terminal());
        assert!(ReviewStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_legal_transitions() {
        assert!(ReviewStatus::Pending.can_transition_to(ReviewStatus::Approved));
        assert!(ReviewStatus::Pending.can_transition_to(ReviewStatus::Rejected));

        // Pending is not a decision
        assert!(!ReviewStatus::Pending.can_transition_to(ReviewStatus::Pending));

        // Terminal states are frozen
        assert!(!ReviewStatus::Approved.can_transition_to(ReviewStatus::Rejected));
        assert!(!ReviewStatus::Rejected.can_transition_to(ReviewStatus::Approved));
        assert!(!ReviewStatus::Approved.can_transition_to(ReviewStatus::Pending));
    }

    #[test]
    fn test_created_via_roundtrip() {
        assert_eq!(CreatedVia::parse("manual"), Some(CreatedVia::Manual));
        assert_eq!(CreatedVia::parse("ai"), Some(CreatedVia::Ai));
        assert_eq!(CreatedVia::parse("import"), None);
    }
}
