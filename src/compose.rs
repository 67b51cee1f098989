//! Splits a separated playing slice into the round's match list,
//! deciding which courts host doubles with a seeded shuffle so the
//! result is reproducible.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::Result;
use crate::player::{Match, MatchArrangement, Player, Side};
use crate::selector::court_mix;
use crate::separator::separate_pairs;

/// Builds the round's match list from an already-separated `playing`
/// slice.
///
/// `seed` fully determines which court slots host doubles: the same
/// `(playing, courts, seed)` always yields the same arrangement. The
/// PRNG is local to this call, never a process-global instance, so
/// concurrent scheduling calls cannot perturb each other's output.
pub fn compose_matches(playing: &mut [Player], courts: usize, seed: u64) -> Result<MatchArrangement> {
    let mix = court_mix(courts, playing.len())?;

    let mut slots = vec![false; mix.courts()];
    slots[..mix.doubles].fill(true);
    let mut rng = StdRng::seed_from_u64(seed);
    slots.shuffle(&mut rng);

    let mut arrangement = Vec::with_capacity(mix.courts());
    let mut idx = 0;

    for is_doubles in slots {
        if is_doubles {
            separate_pairs(playing, idx, idx + 3, false)?;
            arrangement.push(Match {
                side1: Side::Doubles(playing[idx].id, playing[idx + 1].id),
                side2: Side::Doubles(playing[idx + 2].id, playing[idx + 3].id),
            });
            idx += 4;
        } else {
            arrangement.push(Match {
                side1: Side::Singles(playing[idx].id),
                side2: Side::Singles(playing[idx + 1].id),
            });
            idx += 2;
        }
    }

    Ok(arrangement)
}
