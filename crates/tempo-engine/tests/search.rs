//! End-to-end search behavior through the public API.

use std::sync::Arc;

use tempo_core::Board;
use tempo_engine::{
    BoardEvaluator, MiniMax, MoveStrategy, StandardEvaluator, spawn_search,
};

#[test]
fn black_finds_fools_mate() {
    // After 1.f3 e5 2.g4, Qh4 mates.
    let board: Board =
        "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq g3 0 2".parse().unwrap();
    let result = MiniMax::new().search(&board, 2);
    assert_eq!(result.best_move.to_uci(), "d8h4");
    assert!(result.score < -1_000_000 + 10_000);
}

#[test]
fn searched_move_is_playable() {
    let board = Board::starting_position();
    let minimax = MiniMax::new();
    let mv = minimax.execute(&board, 2);
    let transition = board.current_player().make_move(&mv);
    assert!(transition.is_done());
}

#[test]
fn evaluator_can_be_shared_by_reference() {
    let evaluator = StandardEvaluator;
    let minimax = MiniMax::with_evaluator(&evaluator);
    let board = Board::starting_position();
    let ranked = minimax.rank_moves(&board, 0);
    assert!(ranked.iter().all(|(mv, score)| {
        let child = board.current_player().make_move(mv).into_board();
        *score == evaluator.evaluate(&child, 0)
    }));
}

#[test]
fn boxed_strategy_runs_in_background() {
    let strategy: Arc<dyn MoveStrategy> = Arc::new(MiniMax::new());
    let board: Board = "4k3/8/8/8/3r4/8/8/3QK3 w - - 0 1".parse().unwrap();
    let result = spawn_search(strategy, board, 1).unwrap().wait().unwrap();
    assert_eq!(result.best_move.to_uci(), "d1d4");
}
