//! Score-priority ordering, the precondition the separator assumes.

use crate::player::Player;

/// Orders `slice` by descending `score`, ties broken by descending
/// `priority`. Deterministic for equal inputs; stability is not
/// required.
pub fn sort_by_score_priority(slice: &mut [Player]) {
    slice.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.priority.total_cmp(&a.priority))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, score: f32, priority: f32) -> Player {
        Player::new(name, score, priority)
    }

    #[test]
    fn orders_by_score_then_priority() {
        let mut players = vec![
            player("Name1", 2.0, 1.0),
            player("Name2", 2.0, 2.0),
            player("Name3", 3.0, 0.5),
            player("Name4", 1.0, 4.0),
        ];
        sort_by_score_priority(&mut players);
        let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Name3", "Name2", "Name1", "Name4"]);
    }

    #[test]
    fn is_idempotent() {
        let mut players = vec![
            player("A", 4.0, 1.0),
            player("B", 4.0, 2.0),
            player("C", 1.0, 1.0),
        ];
        sort_by_score_priority(&mut players);
        let once: Vec<_> = players.iter().map(|p| p.id).collect();
        sort_by_score_priority(&mut players);
        let twice: Vec<_> = players.iter().map(|p| p.id).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_slice_is_fine() {
        let mut players: Vec<Player> = Vec::new();
        sort_by_score_priority(&mut players);
        assert!(players.is_empty());
    }
}
