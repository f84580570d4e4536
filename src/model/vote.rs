//! Vote direction, tallies and the effect of casting a vote.

use std::fmt;

use crate::error::{internal::InternalError, AppError};

/// Direction of a single user's vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteType {
    Up,
    Down,
}

impl VoteType {
    /// Value stored in the `vote_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Parses the stored `vote_type` column.
    ///
    /// # Returns
    /// - `Ok(VoteType)` - `"up"` or `"down"`
    /// - `Err(AppError::InternalErr(UnknownVoteType))` - Any other stored value
    pub fn from_stored(value: &str) -> Result<Self, AppError> {
        match value {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(InternalError::UnknownVoteType(other.to_string()).into()),
        }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Up and down vote counts for one suggestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub upvotes: u64,
    pub downvotes: u64,
}

impl VoteTally {
    pub fn score(&self) -> i64 {
        self.upvotes as i64 - self.downvotes as i64
    }
}

/// What a vote button press did to the voter's ballot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteEffect {
    /// First vote by this user on the suggestion.
    Applied,
    /// Switched from the opposite direction.
    Changed,
    /// Pressed the same direction again, removing the vote.
    Retracted,
}

/// Result of a vote, returned to the caller for the confirmation reply and re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteCast {
    pub vote_type: VoteType,
    pub effect: VoteEffect,
    /// Tally after the vote was applied.
    pub tally: VoteTally,
}

impl VoteCast {
    /// Ephemeral confirmation shown to the voter.
    pub fn confirmation(&self) -> String {
        let stance = match self.vote_type {
            VoteType::Up => "👍 in favour",
            VoteType::Down => "👎 against",
        };

        match self.effect {
            VoteEffect::Applied => format!("You voted {}!", stance),
            VoteEffect::Changed => format!("You changed your vote to {}!", stance),
            VoteEffect::Retracted => "Your vote was removed!".to_string(),
        }
    }
}
