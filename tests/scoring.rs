//! Whole-board scoring properties, checked on hand-built positions and on
//! seeded random boards.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use jigo::analysis::{analyze, LocScore};
use jigo::board::{Color, Grid, Position, Symmetry};
use jigo::protocol::diagram::parse_diagram;
use jigo::{area_score, classify, territory_score, Captures, Score};

/// Random stones with a sprinkling of dead marks.
fn random_position(rng: &mut SmallRng, width: usize, height: usize) -> Position {
    let stones: Vec<Vec<u8>> = (0..height)
        .map(|_| (0..width).map(|_| rng.gen_range(0..3)).collect())
        .collect();
    let dead: Vec<Vec<bool>> = (0..height)
        .map(|_| (0..width).map(|_| rng.gen_bool(0.1)).collect())
        .collect();
    Position::from_codes(&stones, &dead).unwrap()
}

fn count(scores: &Grid<LocScore>, f: impl Fn(&LocScore) -> bool) -> usize {
    scores.iter().filter(|s| f(s)).count()
}

#[test]
fn empty_board_is_all_dame() {
    let pos = Position::empty(9, 9).unwrap();
    let scores = classify(&pos, false).unwrap();
    assert_eq!(count(&scores, |s| s.is_dame), 81);
    assert_eq!(count(&scores, |s| s.owner().is_some() || s.seki.is_some()), 0);
    assert_eq!(area_score(&pos, 7.5), Score { black: 0.0, white: 7.5 });
    assert_eq!(
        territory_score(&pos, Captures::default(), 7.5, false).unwrap(),
        Score { black: 0.0, white: 7.5 }
    );
}

#[test]
fn classification_is_idempotent() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..20 {
        let pos = random_position(&mut rng, 7, 6);
        assert_eq!(classify(&pos, false).unwrap(), classify(&pos, false).unwrap());
    }
}

#[test]
fn classification_commutes_with_symmetries() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..20 {
        let pos = random_position(&mut rng, 6, 5);
        let scores = classify(&pos, false).unwrap();
        for sym in Symmetry::ALL {
            let mapped = classify(&pos.map_symmetry(sym), false).unwrap();
            assert_eq!(mapped, scores.map_symmetry(sym), "symmetry {:?}", sym);
        }
    }
}

#[test]
fn random_boards_never_hit_internal_errors() {
    let mut rng = SmallRng::seed_from_u64(1234);
    for _ in 0..100 {
        let (w, h) = (rng.gen_range(1..10), rng.gen_range(1..10));
        let pos = random_position(&mut rng, w, h);
        assert!(analyze(&pos).is_ok());
        let scores = classify(&pos, true).unwrap();
        for s in scores.iter() {
            assert!(s.eye_value <= 2);
            if s.is_unscorable_false_eye && !s.is_false_eye {
                // Only the extra points next to dead stones may be unscorable
                // without being false.
                assert!(s.territory.is_none());
            }
        }
    }
}

#[test]
fn seki_regions_have_no_territory() {
    let pos = parse_diagram(".XO./.XO.").unwrap();
    let scores = classify(&pos, false).unwrap();
    assert_eq!(count(&scores, |s| s.seki.is_some()), 8);
    assert_eq!(count(&scores, |s| s.territory.is_some()), 0);
}

#[test]
fn single_point_eye_is_territory() {
    let pos = parse_diagram(
        "XXX\n\
         X.X\n\
         XXX",
    )
    .unwrap();
    let scores = classify(&pos, false).unwrap();
    let center = &scores[4];
    assert_eq!(center.owner(), Some(Color::Black));
    assert!(center.eye_value >= 1);
}

#[test]
fn many_dead_stones_make_two_eyes() {
    let pos = parse_diagram(
        "........\n\
         .oooooo.\n\
         .oo.....\n\
         XXXXXXXX\n\
         .O.O.O.O",
    )
    .unwrap();
    let analysis = analyze(&pos).unwrap();
    let eye = analysis.eye_ids[pos.stones().loc(1, 1)].unwrap();
    assert_eq!(analysis.eyes[eye].value, 2);
}

#[test]
fn wall_split_has_no_seki_or_false_eyes() {
    let pos = parse_diagram(
        "...X...\n\
         ...X...\n\
         ...X...\n\
         ...X...",
    )
    .unwrap();
    let scores = classify(&pos, false).unwrap();
    assert_eq!(count(&scores, |s| s.seki.is_some() || s.is_false_eye), 0);

    let territory = count(&scores, |s| s.owner() == Some(Color::Black));
    let area = area_score(&pos, 0.0).black as usize;
    assert_eq!(territory, area - pos.stone_count(Color::Black));
    assert_eq!(territory, 24);
}

#[test]
fn facing_one_eyed_groups_score() {
    let pos = parse_diagram(".XO./.XO.").unwrap();
    assert_eq!(area_score(&pos, 0.5), Score { black: 4.0, white: 4.5 });
    assert_eq!(
        territory_score(&pos, Captures::default(), 0.5, false).unwrap(),
        Score { black: 0.0, white: 0.5 }
    );
}
