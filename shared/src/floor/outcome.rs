//! Seating outcome tags

use serde::{Deserialize, Serialize};

/// How a selection attempt ended, or which preference step was skipped.
///
/// `Seated*` and `NoTableAvailable` are terminal; the rest are advisory tags
/// recorded while the selector falls through its priority chain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SeatingOutcome {
    /// Seated at the explicitly requested table
    SeatedRequested,
    /// Seated adjacent to the named guest
    SeatedNear,
    /// Seated at the first free table that fits the party
    SeatedFallback,
    /// Requested table exists but is occupied
    RequestedOccupied,
    /// Requested table exists but cannot fit the party
    RequestedTooSmall,
    /// No occupied table hosts a guest matching the requested name
    NearGuestNotFound,
    /// Named guest found, but no adjacent table qualifies
    NearGuestNoTable,
    /// No free table fits the party
    NoTableAvailable,
}

impl SeatingOutcome {
    /// True for the tags that accompany an actual assignment.
    pub fn is_seated(self) -> bool {
        matches!(
            self,
            SeatingOutcome::SeatedRequested
                | SeatingOutcome::SeatedNear
                | SeatingOutcome::SeatedFallback
        )
    }
}

impl std::fmt::Display for SeatingOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeatingOutcome::SeatedRequested => write!(f, "seated-requested"),
            SeatingOutcome::SeatedNear => write!(f, "seated-near"),
            SeatingOutcome::SeatedFallback => write!(f, "seated-fallback"),
            SeatingOutcome::RequestedOccupied => write!(f, "requested-occupied"),
            SeatingOutcome::RequestedTooSmall => write!(f, "requested-too-small"),
            SeatingOutcome::NearGuestNotFound => write!(f, "near-guest-not-found"),
            SeatingOutcome::NearGuestNoTable => write!(f, "near-guest-no-table"),
            SeatingOutcome::NoTableAvailable => write!(f, "no-table-available"),
        }
    }
}
