//! Turns a list of band upper bounds into the index ranges the
//! separator should run over: the neighborhoods where two adjacent
//! skill bands meet.

use crate::player::Player;

/// An inclusive `[start, end]` index range into a score-sorted roster,
/// naming one neighborhood for the separator to run over.
///
/// `end_fixed` marks a range whose last slot must not move: it is
/// anchored by the band above it and only exists so the separator can
/// look at it, not rearrange it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandRange {
    pub start: usize,
    pub end: usize,
    pub end_fixed: bool,
}

/// Finds the smallest band bound that is `>= score`, returning its
/// index into the ascending `bounds` slice.
fn band_of(score: f32, bounds: &[f32]) -> usize {
    bounds.partition_point(|&b| b < score)
}

/// Computes the ranges of player slots that straddle a band boundary.
///
/// `roster` must be sorted descending by score (the order
/// [`crate::sort::sort_by_score_priority`] produces); `bounds` must be
/// the ascending band upper bounds [`crate::band::cluster_by_score`]
/// produces for the same players. Each returned range spans from the
/// last player of one band through the first of the next, so the
/// separator can swap players across the seam; ranges that would
/// collapse onto the same pair slot on both sides are skipped, since
/// there is nothing for the separator to rearrange there.
pub fn find_band_ranges(roster: &[Player], bounds: &[f32]) -> Vec<BandRange> {
    let mut ranges = Vec::new();
    if roster.is_empty() || bounds.is_empty() {
        return ranges;
    }

    let bands: Vec<usize> = roster.iter().map(|p| band_of(p.score, bounds)).collect();

    let mut i = 0;
    while i < bands.len() {
        let band = bands[i];
        let mut j = i;
        while j < bands.len() && bands[j] == band {
            j += 1;
        }
        let k = j - 1;

        // `j` leaving the band and `j` reaching the end of the roster
        // are both valid closes for this scan: the playing roster's
        // length is always even (2*singles + 4*doubles), so the last
        // index is always odd and `end_fixed` can never demand an
        // out-of-bounds anchor one past it.
        if i / 2 != k / 2 {
            let start = if i % 2 == 0 { i } else { i - 1 };
            let (end, end_fixed) = if k % 2 == 0 { (k + 1, true) } else { (k, false) };
            ranges.push(BandRange { start, end, end_fixed });
        }

        i = j;
    }

    ranges
}
