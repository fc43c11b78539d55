//! Property tests for boards and game states.

use noughts_core::{Board, BoardError, Cell, GameState, Mark};
use proptest::prelude::*;

fn mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::Cross), Just(Mark::Naught)]
}

/// Plays `choices` as indices into the legal move list, stopping at game over.
fn play(starting_mark: Mark, choices: &[usize]) -> Vec<GameState> {
    let mut states = vec![GameState::start(starting_mark)];
    for choice in choices {
        let current = states.last().expect("at least the start state");
        let moves = current.possible_moves();
        if moves.is_empty() {
            break;
        }
        let next = moves[choice % moves.len()].clone().into_after_state();
        states.push(next);
    }
    states
}

proptest! {
    #[test]
    fn counts_sum_to_nine(cells in "[XO ]{9}") {
        let board: Board = cells.parse().unwrap();
        prop_assert_eq!(board.x_count() + board.o_count() + board.empty_count(), 9);
        prop_assert_eq!(board.to_string(), cells);
    }

    #[test]
    fn wrong_length_rejected(cells in "[XO ]{0,20}") {
        prop_assume!(cells.len() != 9);
        prop_assert_eq!(cells.parse::<Board>(), Err(BoardError::WrongCellCount(cells.len())));
    }

    #[test]
    fn foreign_symbol_rejected(prefix in "[XO ]{4}", bad in "[a-zA-NP-WYZ0-9#]", suffix in "[XO ]{4}") {
        let cells = format!("{prefix}{bad}{suffix}");
        prop_assert!(matches!(cells.parse::<Board>(), Err(BoardError::InvalidSymbol(_))));
    }

    #[test]
    fn turns_alternate(starting_mark in mark(), choices in prop::collection::vec(0usize..9, 0..9)) {
        let states = play(starting_mark, &choices);
        for pair in states.windows(2) {
            let mover = pair[0].current_mark();
            prop_assert_eq!(pair[1].current_mark(), mover.other());
            prop_assert_eq!(pair[1].starting_mark(), starting_mark);
        }
    }

    #[test]
    fn move_count_matches_empty_cells(starting_mark in mark(), choices in prop::collection::vec(0usize..9, 0..9)) {
        for state in play(starting_mark, &choices) {
            let expected = if state.game_over() { 0 } else { state.board().empty_count() };
            prop_assert_eq!(state.possible_moves().len(), expected);
        }
    }

    #[test]
    fn derived_values_are_stable(starting_mark in mark(), choices in prop::collection::vec(0usize..9, 0..9)) {
        for state in play(starting_mark, &choices) {
            prop_assert_eq!(state.winner(), state.winner());
            prop_assert_eq!(state.game_over(), state.game_over());
            prop_assert_eq!(state.possible_moves(), state.possible_moves());
        }
    }

    #[test]
    fn make_move_to_places_only_target(starting_mark in mark(), choices in prop::collection::vec(0usize..9, 0..8), target in 0usize..9) {
        let states = play(starting_mark, &choices);
        let state = states.last().unwrap();
        prop_assume!(!state.game_over() && state.board().is_empty(target));

        let mv = state.make_move_to(target).unwrap();
        let before = state.board().cells();
        let after = mv.after_state().board().cells();
        for index in 0..9 {
            if index == target {
                prop_assert_eq!(after[index], Cell::Occupied(state.current_mark()));
            } else {
                prop_assert_eq!(after[index], before[index]);
            }
        }
    }

    #[test]
    fn reached_states_revalidate(starting_mark in mark(), choices in prop::collection::vec(0usize..9, 0..9)) {
        for state in play(starting_mark, &choices) {
            let rebuilt = GameState::new(state.board().clone(), starting_mark);
            prop_assert_eq!(rebuilt, Ok(state));
        }
    }
}
