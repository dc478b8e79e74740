//! Property tests over random legal play.

use checkers_core::{Color, Position};
use checkers_engine::{Board, Game, GameError, GameState, Human};
use proptest::prelude::*;

fn new_game() -> Game {
    Game::new(Box::new(Human::new("Bill")), Box::new(Human::new("Ted")))
}

/// Plays the successor picked by each choice until the choices run out or
/// the game ends, calling `check` with the game before every move.
fn random_play(choices: &[usize], mut check: impl FnMut(&Game, &GameState)) -> Game {
    let mut game = new_game();
    for &choice in choices {
        if game.is_over() {
            break;
        }
        let successors = game.current_state().successors();
        assert!(!successors.is_empty(), "an undecided game must offer a move");
        let (_, next) = successors[choice % successors.len()].clone();
        check(&game, &next);
        game.advance_turn(next).unwrap();
    }
    game
}

fn off_board() -> impl Strategy<Value = Position> {
    (-20i8..28, -20i8..28)
        .prop_map(|(row, col)| Position::new(row, col))
        .prop_filter("must be off the board", |p| !p.is_on_board())
}

proptest! {
    #[test]
    fn off_board_positions_are_rejected(p in off_board()) {
        let board = Board::standard();
        prop_assert_eq!(board.piece_at(p), Err(GameError::OutOfBounds(p)));
        prop_assert_eq!(board.available_moves(p), Err(GameError::OutOfBounds(p)));
        prop_assert_eq!(board.jumps_from(p), Err(GameError::OutOfBounds(p)));
        let state = GameState::new();
        prop_assert_eq!(state.available_moves(p), Err(GameError::OutOfBounds(p)));
    }

    #[test]
    fn transitions_are_pure(choices in prop::collection::vec(any::<usize>(), 0..60)) {
        random_play(&choices, |game, _| {
            let state = game.current_state();
            let snapshot = state.clone();
            for m in state.legal_moves() {
                let piece = state.board().piece_at(m.from).unwrap().unwrap();
                let first = state.next(piece, m.from, m.to).unwrap();
                let second = state.next(piece, m.from, m.to).unwrap();
                assert_eq!(first, second);
                let board_first = state.board().apply_move(piece, m.from, m.to).unwrap();
                let board_second = state.board().apply_move(piece, m.from, m.to).unwrap();
                assert_eq!(board_first, board_second);
            }
            assert_eq!(state, &snapshot);
        });
    }

    #[test]
    fn captures_are_mandatory(choices in prop::collection::vec(any::<usize>(), 0..60)) {
        random_play(&choices, |game, _| {
            let board = game.current_state().board();
            for color in Color::ALL {
                if !board.has_capture(color) {
                    continue;
                }
                for (pos, _) in board.pieces(color) {
                    let moves = board.available_moves(pos).unwrap();
                    let jumps = board.jumps_from(pos).unwrap();
                    assert_eq!(moves, jumps);
                }
            }
        });
    }

    #[test]
    fn capture_counts_track_lost_pieces(choices in prop::collection::vec(any::<usize>(), 0..80)) {
        let mut last = (0, 0);
        let game = random_play(&choices, |game, _| {
            let counts = (game.black_captures(), game.red_captures());
            assert!(counts.0 >= last.0 && counts.1 >= last.1);
            last = counts;
        });
        let board = game.current_state().board();
        prop_assert_eq!(game.black_captures() as usize, 12 - board.count(Color::Red));
        prop_assert_eq!(game.red_captures() as usize, 12 - board.count(Color::Black));
    }

    #[test]
    fn kings_never_revert(choices in prop::collection::vec(any::<usize>(), 0..120)) {
        random_play(&choices, |game, next| {
            let before = game.current_state().board();
            let after = next.board();
            for color in Color::ALL {
                let kings = |b: &Board| b.pieces(color).filter(|(_, p)| p.is_king()).count();
                let lost = before.count(color) - after.count(color);
                assert!(kings(after) + lost >= kings(before));
            }
        });
    }

    #[test]
    fn turn_passes_unless_the_chain_continues(choices in prop::collection::vec(any::<usize>(), 0..60)) {
        random_play(&choices, |game, next| {
            let state = game.current_state();
            if next.current_color() == state.current_color() {
                let chain = next.pending_jump().expect("same color implies a chain");
                assert!(!next.board().jumps_from(chain).unwrap().is_empty());
            } else {
                assert_eq!(next.pending_jump(), None);
            }
        });
    }
}
