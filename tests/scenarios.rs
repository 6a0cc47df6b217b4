use c4bot::scenarios::{run_scenarios, standard_scenarios};
use c4bot::search::MoveSource;

#[test]
fn scenario_histories_are_legal_and_open() {
    for sc in standard_scenarios() {
        let g = sc.game().unwrap_or_else(|e| panic!("{}: {e}", sc.name));
        assert!(!g.game_over(), "{} is already decided", sc.name);
        if let Some(col) = sc.optimal {
            assert!(g.is_valid_location(col), "{}: optimal column {col} not playable", sc.name);
        }
    }
}

#[test]
fn graded_scenarios_are_solved_at_shallow_depth() {
    let results = run_scenarios(&standard_scenarios(), &[1, 2, 3, 4], 42).unwrap();
    assert_eq!(results.len(), standard_scenarios().len() * 4);
    for r in &results {
        assert!(r.column.is_some(), "{} depth {} gave no move", r.name, r.depth);
        assert!(r.is_optimal, "{} depth {} played {:?}, expected {:?}", r.name, r.depth, r.column, r.expected);
    }
}

#[test]
fn opening_scenarios_come_from_the_book() {
    let results = run_scenarios(&standard_scenarios()[..3], &[3], 1).unwrap();
    assert!(results.iter().all(|r| r.source == MoveSource::Book && r.nodes == 0));
}
