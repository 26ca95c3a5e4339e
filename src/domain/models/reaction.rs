use serde::{Deserialize, Serialize};

/// Outcome of a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReactionState {
    Liked,
    Unliked,
}

impl ReactionState {
    pub fn is_liked(self) -> bool {
        matches!(self, ReactionState::Liked)
    }
}

impl From<bool> for ReactionState {
    fn from(liked: bool) -> Self {
        if liked {
            ReactionState::Liked
        } else {
            ReactionState::Unliked
        }
    }
}
