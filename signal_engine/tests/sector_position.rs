mod common;

use common::peer_snapshot;
use signal_engine::errors::Error;
use signal_engine::models::peer::PeerQuote;
use signal_engine::sector::{IndependenceTier, PositionTier, rank_position};

#[test]
fn rank_four_of_one_hundred_is_a_leader() {
    let peers = peer_snapshot(100, 9.0);
    let report = rank_position("000004", "humanoid robotics", &peers).unwrap();
    assert_eq!(report.rank, 4);
    assert_eq!(report.total, 100);
    assert_eq!(report.position_tier, PositionTier::Leader);
    assert_eq!(report.sector, "humanoid robotics");
}

#[test]
fn strong_outperformance_reads_as_independent() {
    // Target up 8.0 against a sector averaging 2.0: diff 6.0.
    let peers = vec![
        PeerQuote {
            code: "002195".into(),
            name: "target".into(),
            change_pct: 8.0,
        },
        PeerQuote {
            code: "000002".into(),
            name: "a".into(),
            change_pct: 1.0,
        },
        PeerQuote {
            code: "000003".into(),
            name: "b".into(),
            change_pct: -3.0,
        },
    ];
    let report = rank_position("002195", "humanoid robotics", &peers).unwrap();
    assert_eq!(report.sector_avg_return, 2.0);
    assert_eq!(
        report.independence_tier,
        IndependenceTier::StrongIndependentPositive,
    );
}

#[test]
fn absent_target_reports_not_found() {
    let peers = peer_snapshot(10, 4.0);
    let err = rank_position("002195", "humanoid robotics", &peers).unwrap_err();
    assert!(matches!(err, Error::SymbolNotFound(code) if code == "002195"));
}

#[test]
fn slices_stay_inside_small_snapshots() {
    for n in 1..=7 {
        let peers = peer_snapshot(n, 3.0);
        let report = rank_position("000001", "humanoid robotics", &peers).unwrap();
        assert!(report.leading.len() <= 5);
        assert!(report.mid.len() <= 5);
        assert!(report.lagging.len() <= 5);
        assert!(report.leading.len() <= n);
        assert!(report.lagging.len() <= n);
    }
}
