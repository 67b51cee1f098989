//! Glues the clusterer, range finder, and separator together: bands
//! the full roster, finds the seams in the playing slice, then
//! separates each one in place.

use crate::band::{cluster_by_score, SchedulerConfig};
use crate::player::Player;
use crate::ranges::find_band_ranges;
use crate::separator::separate_pairs;

/// Rearranges `playing` in place to minimize rematches within each
/// skill band, using `all_players` (which may include players
/// currently on a break) to determine band boundaries.
///
/// Ranges never overlap except at an `end_fixed` anchor shared with
/// the following range, so running the separator on them in order is
/// safe. A range the separator rejects (odd length, out of bounds) is
/// a bug in [`find_band_ranges`], not a recoverable condition from the
/// caller's perspective - it is logged and skipped so one bad range
/// does not cost the whole round.
pub fn separate_within_bands(all_players: &[Player], playing: &mut [Player], config: &SchedulerConfig) {
    let bounds = cluster_by_score(all_players, config);
    let ranges = find_band_ranges(playing, &bounds);

    for range in ranges {
        if let Err(err) = separate_pairs(playing, range.start, range.end, range.end_fixed) {
            log::warn!(
                "skipping band range [{}, {}] (end_fixed={}): {err}",
                range.start,
                range.end,
                range.end_fixed
            );
        }
    }
}
