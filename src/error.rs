use thiserror::Error;

/// Errors originating in the scheduling core.
///
/// Only two kinds ever escape the core: a roster too small for the
/// requested number of courts, and a programmer error in the caller's
/// use of [`crate::separator::separate_pairs`]. Nothing else panics or
/// retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("{available} players are not enough for {courts} court(s): need at least {needed}")]
    InsufficientPlayers {
        available: usize,
        courts: usize,
        needed: usize,
    },

    #[error("range [{start}, {end}] has an odd number of players")]
    OddRangeLength { start: usize, end: usize },

    #[error("range [{start}, {end}] is out of bounds for a slice of length {len}")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
