use std::collections::HashSet;

use peg_solitaire::coord::AXES;
use peg_solitaire::moves::{Move, MOVES, MOVE_COUNT};
use peg_solitaire::position::Position;

#[test]
fn catalog_has_36_distinct_moves() {
    assert_eq!(MOVES.len(), MOVE_COUNT);
    assert_eq!(MOVE_COUNT, 36);
    let set: HashSet<Move> = MOVES.iter().copied().collect();
    assert_eq!(set.len(), 36);
}

#[test]
fn every_move_is_three_adjacent_holes_in_a_line() {
    for mv in &MOVES {
        let (s, j, e) = (mv.start(), mv.jump(), mv.end());
        assert!(s != j && j != e && s != e, "{mv} repeats a hole");

        let step = j.coord() - s.coord();
        assert!(step.is_unit_step(), "{mv} start and jump are not neighbours");
        assert_eq!(e.coord() - j.coord(), step, "{mv} bends");
    }
}

#[test]
fn catalog_matches_the_board_geometry() {
    let mut derived: HashSet<(Position, Position, Position)> = HashSet::new();
    for s in Position::ALL {
        for axis in AXES {
            for step in [axis, -axis] {
                let j = Position::from_coord(s.coord() + step);
                let e = Position::from_coord(s.coord() + step + step);
                if let (Some(j), Some(e)) = (j, e) {
                    derived.insert((s, j, e));
                }
            }
        }
    }

    let catalog: HashSet<(Position, Position, Position)> = MOVES
        .iter()
        .map(|m| (m.start(), m.jump(), m.end()))
        .collect();
    assert_eq!(catalog, derived);
}

#[test]
fn every_move_can_be_reversed() {
    for mv in &MOVES {
        let back = Move::find(mv.end(), mv.start()).expect("reverse jump exists");
        assert_eq!(back.jump(), mv.jump());
    }
}

#[test]
fn catalog_is_sorted_by_start_hole() {
    assert!(MOVES.windows(2).all(|w| w[0].start() <= w[1].start()));
}
