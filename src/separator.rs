//! Branch-and-bound pair assignment: the combinatorial heart of the
//! scheduler. Rearranges a range of a score-sorted slice so adjacent
//! pairs minimize rematches, tie-broken by score-inversion.

use crate::error::{Result, SchedulerError};
use crate::player::Player;

struct Best {
    pairs: Vec<(usize, usize)>,
    rematch: u64,
    inversion: f64,
}

/// Rearranges `slice[start..=end]` in place so that indices
/// `start, start+2, …` pair with `start+1, start+3, …`, minimizing the
/// summed rematch count across pairs and, as a tie-breaker, the summed
/// positive score gap at pair boundaries.
///
/// When `end_fixed`, the player at `end` is never moved: every
/// candidate pairing is explored with it held back until the last
/// pair is formed, so it only ever appears as that pair's second
/// member.
///
/// A candidate pairing replaces the current best whenever its rematch
/// sum is smaller **or** its inversion sum is smaller - a disjunction,
/// not a strict lexicographic comparison. This mirrors the original
/// acceptance rule rather than the stricter one its stated objective
/// would suggest, and search order therefore affects which of several
/// tied-looking pairings is kept; callers must not rely on this being
/// fixed by a future change.
pub fn separate_pairs(slice: &mut [Player], start: usize, end: usize, end_fixed: bool) -> Result<()> {
    if start >= end || end >= slice.len() {
        return Err(SchedulerError::RangeOutOfBounds {
            start,
            end,
            len: slice.len(),
        });
    }
    let n = end - start + 1;
    if n % 2 != 0 {
        return Err(SchedulerError::OddRangeLength { start, end });
    }

    let players = slice[start..=end].to_vec();
    let pair_count = n / 2;
    let mut used = vec![false; n];
    let mut current = Vec::with_capacity(pair_count);
    let mut best: Option<Best> = None;

    search(&players, n, pair_count, end_fixed, &mut used, &mut current, 0, &mut best);

    if let Some(best) = best {
        let mut new_order = Vec::with_capacity(n);
        for (a, b) in best.pairs {
            new_order.push(players[a].clone());
            new_order.push(players[b].clone());
        }
        slice[start..=end].clone_from_slice(&new_order);
    }

    Ok(())
}

fn search(
    players: &[Player],
    n: usize,
    pair_count: usize,
    end_fixed: bool,
    used: &mut [bool],
    current: &mut Vec<(usize, usize)>,
    partial_rematch: u64,
    best: &mut Option<Best>,
) {
    if current.len() == pair_count {
        let inversion = inversion_sum(players, current);
        let replace = match best {
            None => true,
            Some(b) => partial_rematch < b.rematch || inversion < b.inversion,
        };
        if replace {
            *best = Some(Best {
                pairs: current.clone(),
                rematch: partial_rematch,
                inversion,
            });
        }
        return;
    }

    if let Some(b) = best {
        if partial_rematch > b.rematch {
            return;
        }
    }

    let i = (0..n).find(|&x| !used[x]).expect("fewer pairs than slots used so far");
    used[i] = true;

    let last_level = current.len() == pair_count - 1;
    let max_j = if end_fixed && !last_level { n - 2 } else { n - 1 };

    for j in (i + 1)..n {
        if j > max_j {
            break;
        }
        if used[j] {
            continue;
        }
        used[j] = true;
        current.push((i, j));
        let pair_rematch = players[i].encounters_with(players[j].id) as u64;
        search(players, n, pair_count, end_fixed, used, current, partial_rematch + pair_rematch, best);
        current.pop();
        used[j] = false;
    }

    used[i] = false;
}

fn inversion_sum(players: &[Player], pairs: &[(usize, usize)]) -> f64 {
    let mut sum = 0.0;
    for k in 1..pairs.len() {
        let prev_second = players[pairs[k - 1].1].score as f64;
        let next_first = players[pairs[k].0].score as f64;
        sum += (next_first - prev_second).max(0.0);
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, score: f32) -> Player {
        Player::new(name, score, 0.0)
    }

    fn set_opponents(a: &mut Player, b: &mut Player, count: u32) {
        a.opponents.insert(b.id, count);
        b.opponents.insert(a.id, count);
    }

    fn names(players: &[Player]) -> Vec<&str> {
        players.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn scenario_s3_no_history_leaves_arrangement_unchanged() {
        let mut players = vec![player("P1", 4.0), player("P2", 3.0), player("P3", 2.0), player("P4", 1.0)];
        separate_pairs(&mut players, 0, 3, false).unwrap();
        assert_eq!(names(&players), vec!["P1", "P2", "P3", "P4"]);
    }

    #[test]
    fn scenario_s4_avoids_the_single_rematch() {
        let mut players = vec![player("P1", 4.0), player("P2", 3.0), player("P3", 2.0), player("P4", 1.0)];
        let (p1, rest) = players.split_at_mut(1);
        set_opponents(&mut p1[0], &mut rest[0], 1);
        separate_pairs(&mut players, 0, 3, false).unwrap();
        assert_eq!(names(&players), vec!["P1", "P3", "P2", "P4"]);
    }

    #[test]
    fn scenario_s5_end_fixed_forces_a_rematch() {
        let mut players = vec![player("P1", 4.0), player("P2", 3.0), player("P3", 2.0), player("P4", 1.0)];
        {
            let (head, tail) = players.split_at_mut(2);
            set_opponents(&mut head[0], &mut head[1], 1);
            set_opponents(&mut head[0], &mut tail[0], 1);
        }
        separate_pairs(&mut players, 0, 3, true).unwrap();
        assert_eq!(names(&players), vec!["P1", "P2", "P3", "P4"]);
    }

    // Reference oracle case: a range that starts partway through a
    // larger slice, rather than at index 0.
    #[test]
    fn oracle_mid_range_within_a_larger_slice() {
        let mut players = vec![
            player("Name1", 6.0),
            player("Name2", 5.0),
            player("Name3", 4.0),
            player("Name4", 3.0),
            player("Name5", 2.0),
            player("Name6", 1.0),
        ];
        let (head, rest) = players.split_at_mut(2);
        set_opponents(&mut head[1], &mut rest[0], 1);
        separate_pairs(&mut players, 1, 4, false).unwrap();
        assert_eq!(
            names(&players),
            vec!["Name1", "Name2", "Name4", "Name3", "Name5", "Name6"]
        );
    }

    // Reference oracle case: a range ending at the last index of a
    // larger slice.
    #[test]
    fn oracle_trailing_range_within_a_larger_slice() {
        let mut players = vec![
            player("Name1", 6.0),
            player("Name2", 5.0),
            player("Name3", 4.0),
            player("Name4", 3.0),
            player("Name5", 2.0),
            player("Name6", 1.0),
        ];
        let (head, rest) = players.split_at_mut(3);
        set_opponents(&mut head[2], &mut rest[0], 1);
        separate_pairs(&mut players, 2, 5, false).unwrap();
        assert_eq!(
            names(&players),
            vec!["Name1", "Name2", "Name3", "Name5", "Name4", "Name6"]
        );
    }

    #[test]
    fn odd_range_length_is_rejected() {
        let mut players = vec![player("P1", 1.0), player("P2", 2.0), player("P3", 3.0)];
        let err = separate_pairs(&mut players, 0, 2, false).unwrap_err();
        assert_eq!(err, SchedulerError::OddRangeLength { start: 0, end: 2 });
    }

    #[test]
    fn out_of_bounds_range_is_rejected() {
        let mut players = vec![player("P1", 1.0), player("P2", 2.0)];
        let err = separate_pairs(&mut players, 0, 5, false).unwrap_err();
        assert_eq!(
            err,
            SchedulerError::RangeOutOfBounds { start: 0, end: 5, len: 2 }
        );
    }

    #[test]
    fn preserves_the_multiset_of_players() {
        let mut players = vec![player("P1", 4.0), player("P2", 3.0), player("P3", 2.0), player("P4", 1.0)];
        let before: std::collections::HashSet<_> = players.iter().map(|p| p.id).collect();
        separate_pairs(&mut players, 0, 3, false).unwrap();
        let after: std::collections::HashSet<_> = players.iter().map(|p| p.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn end_fixed_never_moves_the_anchor() {
        let mut players = vec![player("P1", 4.0), player("P2", 3.0), player("P3", 2.0), player("P4", 1.0)];
        let anchor_id = players[3].id;
        separate_pairs(&mut players, 0, 3, true).unwrap();
        assert_eq!(players[3].id, anchor_id);
    }
}
