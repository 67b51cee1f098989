//! Hierarchical, distance-threshold clustering of players by score into
//! skill bands, plus the tunables that govern how aggressively bands
//! are split.

use serde::{Deserialize, Serialize};

use crate::player::Player;

/// Tunables for the band clusterer.
///
/// The distance threshold used to decide whether two players belong
/// in the same skill band is `max(min_cluster_distance, (max_score -
/// min_score) / max(min_band_divisor, player_count / 2))`. The
/// defaults reproduce the reference policy: a 0.5-point floor (so that
/// distinct integer scores start in separate bands) and a divisor
/// floor of 6 (capping band count low on small rosters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    pub min_cluster_distance: f64,
    pub min_band_divisor: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            min_cluster_distance: 0.5,
            min_band_divisor: 6.0,
        }
    }
}

fn max_distance(config: &SchedulerConfig, min_score: f64, max_score: f64, player_count: usize) -> f64 {
    let divisor = config.min_band_divisor.max(player_count as f64 / 2.0);
    config
        .min_cluster_distance
        .max((max_score - min_score) / divisor)
}

/// Produces the ascending list of band upper bounds for `players`.
///
/// Complete-linkage hierarchical agglomerative clustering, merging
/// while the farthest-pair distance within a cluster stays within the
/// threshold. Scores are 1-D, so every cluster is a contiguous interval
/// once sorted, and the complete-link distance between two adjacent
/// clusters is simply the span of their union (rightmost max minus
/// leftmost min) - merging any non-adjacent pair would always cross an
/// intervening cluster and produce a larger span, so only adjacent
/// pairs are ever candidates. At each step this merges the adjacent
/// pair with the smallest resulting span, repeating until the smallest
/// remaining span exceeds the threshold. This is a literal AHC
/// simulation, not a single left-to-right scan: a naive scan that only
/// ever compares each new point against the current cluster's start
/// can merge an earlier, wider pair before a later, tighter one, which
/// disagrees with true complete linkage whenever the tightest gap in
/// the data isn't the leftmost one.
pub fn cluster_by_score(players: &[Player], config: &SchedulerConfig) -> Vec<f32> {
    if players.is_empty() {
        return Vec::new();
    }

    let mut scores: Vec<f64> = players.iter().map(|p| p.score as f64).collect();
    scores.sort_by(|a, b| a.total_cmp(b));

    let min_score = scores[0];
    let max_score = *scores.last().unwrap();
    let threshold = max_distance(config, min_score, max_score, players.len());

    // Each cluster is a contiguous (min, max) interval, in ascending order.
    let mut clusters: Vec<(f64, f64)> = scores.into_iter().map(|s| (s, s)).collect();

    while clusters.len() > 1 {
        let (merge_at, span) = (0..clusters.len() - 1)
            .map(|i| (i, clusters[i + 1].1 - clusters[i].0))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .expect("at least one adjacent pair when len > 1");

        if span > threshold {
            break;
        }

        let merged = (clusters[merge_at].0, clusters[merge_at + 1].1);
        clusters.splice(merge_at..=merge_at + 1, [merged]);
    }

    clusters.into_iter().map(|(_, max)| max as f32).collect()
}
