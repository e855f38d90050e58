//! Sector-relative positioning of one instrument.
//!
//! What this module provides:
//! - [`rank_position`]: locate a target instrument inside an
//!   externally-ranked peer snapshot and classify its position and its
//!   independence from the sector average.
//!
//! The snapshot arrives sorted descending by daily return; this module never
//! re-sorts, it only reads positions out of the given order.

use serde::Serialize;

use crate::errors::Error;
use crate::models::peer::PeerQuote;
use crate::temperature::LIMIT_MOVE_PCT;

/// Number of peers quoted in each of the leading/mid/lagging slices.
const SLICE_LEN: usize = 5;

/// Rank-ratio tier inside the sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionTier {
    /// Top 5% of the snapshot.
    Leader,
    /// Top 20%.
    Front,
    /// Top half.
    Mid,
    /// Top 80%.
    Back,
    /// Bottom fifth.
    Laggard,
}

/// How far the target's return sits from the sector average.
///
/// The weak-coupling band (|diff| < 1pp) is checked before any signed band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndependenceTier {
    WeakCoupling,
    StrongIndependentPositive,
    IndependentPositive,
    MildPositive,
    StrongIndependentNegative,
    IndependentNegative,
    MildNegative,
}

/// Positioning report for one (target, snapshot) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorPositionReport {
    /// Sector display name, passed through for the report layer.
    pub sector: String,
    /// 1-based position of the target in the snapshot.
    pub rank: usize,
    /// Snapshot size.
    pub total: usize,
    /// Tier from the rank/total ratio.
    pub position_tier: PositionTier,
    /// The target's own daily return.
    pub target_return: f64,
    /// Mean peer return, excluding exact-zero placeholder entries.
    pub sector_avg_return: f64,
    /// Tier from `target_return - sector_avg_return`.
    pub independence_tier: IndependenceTier,
    /// Peers with a positive return.
    pub up_count: usize,
    /// Peers with a negative return.
    pub down_count: usize,
    /// Peers at or above the limit move.
    pub limit_up_count: usize,
    /// Peers at or below the negated limit move.
    pub limit_down_count: usize,
    /// First peers of the snapshot, strongest first.
    pub leading: Vec<PeerQuote>,
    /// Peers around the middle of the snapshot.
    pub mid: Vec<PeerQuote>,
    /// Last peers of the snapshot, weakest last in snapshot order but listed
    /// closest-to-mid first.
    pub lagging: Vec<PeerQuote>,
}

/// Ranks `target_code` inside `peers` and derives the positioning tiers.
///
/// Errors with [`Error::SymbolNotFound`] when the code is absent from the
/// snapshot. Slices clamp to the snapshot bounds, so small peer sets may
/// produce overlapping slices.
pub fn rank_position(
    target_code: &str,
    sector: &str,
    peers: &[PeerQuote],
) -> Result<SectorPositionReport, Error> {
    let position = peers
        .iter()
        .position(|p| p.code == target_code)
        .ok_or_else(|| Error::SymbolNotFound(target_code.to_string()))?;

    let total = peers.len();
    let rank = position + 1;
    let target_return = peers[position].change_pct;

    // Exact zeros are upstream "no data" placeholders, not flat days.
    let reported: Vec<f64> = peers
        .iter()
        .map(|p| p.change_pct)
        .filter(|&c| c != 0.0)
        .collect();
    let sector_avg_return = if reported.is_empty() {
        0.0
    } else {
        reported.iter().sum::<f64>() / reported.len() as f64
    };

    let mid_start = (total / 2).saturating_sub(2);
    let mid_end = (mid_start + SLICE_LEN).min(total);
    let mut lagging = peers[total - total.min(SLICE_LEN)..].to_vec();
    lagging.reverse();

    Ok(SectorPositionReport {
        sector: sector.to_string(),
        rank,
        total,
        position_tier: classify_position(rank, total),
        target_return,
        sector_avg_return,
        independence_tier: classify_independence(target_return - sector_avg_return),
        up_count: peers.iter().filter(|p| p.change_pct > 0.0).count(),
        down_count: peers.iter().filter(|p| p.change_pct < 0.0).count(),
        limit_up_count: peers
            .iter()
            .filter(|p| p.change_pct >= LIMIT_MOVE_PCT)
            .count(),
        limit_down_count: peers
            .iter()
            .filter(|p| p.change_pct <= -LIMIT_MOVE_PCT)
            .count(),
        leading: peers[..total.min(SLICE_LEN)].to_vec(),
        mid: peers[mid_start..mid_end].to_vec(),
        lagging,
    })
}

/// Inclusive upper bounds checked ascending.
fn classify_position(rank: usize, total: usize) -> PositionTier {
    let ratio = rank as f64 / total as f64;
    if ratio <= 0.05 {
        PositionTier::Leader
    } else if ratio <= 0.20 {
        PositionTier::Front
    } else if ratio <= 0.50 {
        PositionTier::Mid
    } else if ratio <= 0.80 {
        PositionTier::Back
    } else {
        PositionTier::Laggard
    }
}

fn classify_independence(diff: f64) -> IndependenceTier {
    if diff.abs() < 1.0 {
        IndependenceTier::WeakCoupling
    } else if diff > 5.0 {
        IndependenceTier::StrongIndependentPositive
    } else if diff > 2.0 {
        IndependenceTier::IndependentPositive
    } else if diff > 1.0 {
        IndependenceTier::MildPositive
    } else if diff < -5.0 {
        IndependenceTier::StrongIndependentNegative
    } else if diff < -2.0 {
        IndependenceTier::IndependentNegative
    } else {
        IndependenceTier::MildNegative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer(code: &str, change_pct: f64) -> PeerQuote {
        PeerQuote {
            code: code.to_string(),
            name: format!("peer {code}"),
            change_pct,
        }
    }

    /// `n` peers with returns descending from `top` in steps of 0.1.
    fn snapshot(n: usize, top: f64) -> Vec<PeerQuote> {
        (0..n)
            .map(|i| peer(&format!("{:06}", i + 1), top - i as f64 * 0.1))
            .collect()
    }

    #[test]
    fn missing_target_is_an_error() {
        let err = rank_position("999999", "robotics", &snapshot(10, 5.0)).unwrap_err();
        assert!(matches!(err, Error::SymbolNotFound(code) if code == "999999"));
    }

    mod position_tiers {
        use super::*;

        fn tier_at(rank: usize, total: usize) -> PositionTier {
            let peers = snapshot(total, 9.0);
            let code = format!("{rank:06}");
            rank_position(&code, "robotics", &peers)
                .unwrap()
                .position_tier
        }

        #[test]
        fn boundaries_are_inclusive() {
            assert_eq!(tier_at(4, 100), PositionTier::Leader);
            assert_eq!(tier_at(5, 100), PositionTier::Leader);
            assert_eq!(tier_at(6, 100), PositionTier::Front);
            assert_eq!(tier_at(20, 100), PositionTier::Front);
            assert_eq!(tier_at(50, 100), PositionTier::Mid);
            assert_eq!(tier_at(80, 100), PositionTier::Back);
            assert_eq!(tier_at(81, 100), PositionTier::Laggard);
        }
    }

    mod independence {
        use super::*;

        #[test]
        fn bands_in_listed_order() {
            assert_eq!(classify_independence(0.9), IndependenceTier::WeakCoupling);
            assert_eq!(classify_independence(-0.9), IndependenceTier::WeakCoupling);
            assert_eq!(
                classify_independence(6.0),
                IndependenceTier::StrongIndependentPositive,
            );
            assert_eq!(
                classify_independence(3.0),
                IndependenceTier::IndependentPositive,
            );
            assert_eq!(classify_independence(1.5), IndependenceTier::MildPositive);
            assert_eq!(
                classify_independence(-6.0),
                IndependenceTier::StrongIndependentNegative,
            );
            assert_eq!(
                classify_independence(-3.0),
                IndependenceTier::IndependentNegative,
            );
            assert_eq!(classify_independence(-1.5), IndependenceTier::MildNegative);
        }

        #[test]
        fn sector_average_skips_zero_placeholders() {
            let peers = vec![
                peer("000001", 8.0),
                peer("000002", 4.0),
                peer("000003", 0.0),
                peer("000004", 0.0),
            ];
            let report = rank_position("000001", "robotics", &peers).unwrap();
            assert_eq!(report.sector_avg_return, 6.0);
            // diff is exactly 2.0, which the >2 band excludes.
            assert_eq!(report.independence_tier, IndependenceTier::MildPositive);
        }
    }

    mod counts_and_slices {
        use super::*;

        #[test]
        fn up_down_and_limit_counts() {
            let peers = vec![
                peer("000001", 10.0),
                peer("000002", 9.9),
                peer("000003", 2.0),
                peer("000004", 0.0),
                peer("000005", -3.0),
                peer("000006", -9.9),
            ];
            let report = rank_position("000003", "robotics", &peers).unwrap();
            assert_eq!(report.up_count, 3);
            assert_eq!(report.down_count, 2);
            assert_eq!(report.limit_up_count, 2);
            assert_eq!(report.limit_down_count, 1);
        }

        #[test]
        fn slices_of_a_large_snapshot() {
            let peers = snapshot(20, 9.0);
            let report = rank_position("000001", "robotics", &peers).unwrap();

            let codes = |quotes: &[PeerQuote]| {
                quotes.iter().map(|p| p.code.clone()).collect::<Vec<_>>()
            };
            assert_eq!(
                codes(&report.leading),
                vec!["000001", "000002", "000003", "000004", "000005"],
            );
            // total/2 - 2 = 8: peers 9 through 13.
            assert_eq!(
                codes(&report.mid),
                vec!["000009", "000010", "000011", "000012", "000013"],
            );
            assert_eq!(
                codes(&report.lagging),
                vec!["000020", "000019", "000018", "000017", "000016"],
            );
        }

        #[test]
        fn slices_clamp_for_tiny_snapshots() {
            let peers = snapshot(3, 2.0);
            let report = rank_position("000002", "robotics", &peers).unwrap();
            assert_eq!(report.leading.len(), 3);
            assert_eq!(report.mid.len(), 3);
            assert_eq!(report.lagging.len(), 3);
        }
    }
}
