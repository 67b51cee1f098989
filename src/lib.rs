//! badminton-scheduler
//!
//! Round-scheduling core for a badminton tournament table: given a
//! roster of players with scores, priorities, play counts, and an
//! opponent-history map, produces the next round's match arrangement
//! across a fixed number of courts.
//!
//! The pipeline runs in four stages, each in its own module:
//!
//! 1. [`selector`] picks who sits out and the court mix.
//! 2. [`sort`] orders the playing subset by descending score.
//! 3. [`band`] and [`ranges`] find the skill-band seams that need
//!    rearranging, and [`separator`] rearranges them.
//! 4. [`compose`] splits the result into the round's matches.
//!
//! # Quick start
//!
//! ```
//! use badminton_scheduler::prelude::*;
//!
//! let mut roster: Vec<Player> = (0..8)
//!     .map(|i| Player::new(format!("Player{i}"), i as f32, 0.0))
//!     .collect();
//!
//! let (mut playing, mix) = pick_players(&roster, 2)?;
//! sort_by_score_priority(&mut playing);
//!
//! let all = roster.clone();
//! separate_within_bands(&all, &mut playing, &SchedulerConfig::default());
//!
//! let arrangement = compose_matches(&mut playing, mix.courts(), 42)?;
//! assert_eq!(arrangement.len(), mix.courts());
//! # Ok::<(), SchedulerError>(())
//! ```

pub mod band;
pub mod compose;
pub mod error;
pub mod player;
pub mod ranges;
pub mod schedule;
pub mod selector;
pub mod separator;
pub mod sort;

pub use band::{cluster_by_score, SchedulerConfig};
pub use compose::compose_matches;
pub use error::{Result, SchedulerError};
pub use player::{Match, MatchArrangement, Player, PlayerId, Side};
pub use ranges::{find_band_ranges, BandRange};
pub use schedule::separate_within_bands;
pub use selector::{court_mix, pick_players, CourtMix};
pub use separator::separate_pairs;
pub use sort::sort_by_score_priority;

/// Convenience re-export of the whole public surface.
pub mod prelude {
    pub use crate::band::{cluster_by_score, SchedulerConfig};
    pub use crate::compose::compose_matches;
    pub use crate::error::{Result, SchedulerError};
    pub use crate::player::{Match, MatchArrangement, Player, PlayerId, Side};
    pub use crate::ranges::{find_band_ranges, BandRange};
    pub use crate::schedule::separate_within_bands;
    pub use crate::selector::{court_mix, pick_players, CourtMix};
    pub use crate::separator::separate_pairs;
    pub use crate::sort::sort_by_score_priority;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
