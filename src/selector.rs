//! Picks which players sit out a round and how many courts host
//! doubles vs singles, maximizing doubles first and distributing play
//! time by fewest-matches-first.

use crate::error::{Result, SchedulerError};
use crate::player::Player;

/// How many courts host singles vs doubles, and how many players that
/// implies will play this round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourtMix {
    pub singles: usize,
    pub doubles: usize,
}

impl CourtMix {
    pub fn play_count(&self) -> usize {
        2 * self.singles + 4 * self.doubles
    }

    pub fn courts(&self) -> usize {
        self.singles + self.doubles
    }
}

/// Computes the court mix for `courts` courts and `player_count`
/// available players: doubles is maximized, the remainder falls back
/// to singles.
pub fn court_mix(courts: usize, player_count: usize) -> Result<CourtMix> {
    let needed = 2 * courts;
    if player_count < needed {
        return Err(SchedulerError::InsufficientPlayers {
            available: player_count,
            courts,
            needed,
        });
    }

    let remaining = player_count - needed;
    let doubles = (remaining / 2).min(courts);
    let singles = courts - doubles;

    Ok(CourtMix { singles, doubles })
}

/// Picks the players who will play this round.
///
/// `roster` is the full active roster (players not on break). Returns
/// the prefix that will play, ordered ascending by `matches` with
/// ties broken by descending `priority`, truncated to the court mix's
/// play count. The input roster is left untouched; a new `Vec` is
/// returned.
pub fn pick_players(roster: &[Player], courts: usize) -> Result<(Vec<Player>, CourtMix)> {
    let mix = court_mix(courts, roster.len())?;

    let mut ordered: Vec<Player> = roster.to_vec();
    ordered.sort_by(|a, b| {
        a.matches
            .total_cmp(&b.matches)
            .then_with(|| b.priority.total_cmp(&a.priority))
    });
    ordered.truncate(mix.play_count());

    Ok((ordered, mix))
}
