use thiserror::Error;

/// Rejections of user-supplied suggestion content.
///
/// Terminal for the triggering event: the user is told why and nothing is stored.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Message body is empty or whitespace only.
    #[error("Suggestions can't be empty.")]
    EmptyContent,

    /// Edited content is shorter than the minimum after trimming.
    #[error("A suggestion must be at least {min} characters long (yours has {actual}).")]
    TooShort {
        /// Minimum accepted length in characters
        min: usize,
        /// Length of the trimmed submission in characters
        actual: usize,
    },
}
