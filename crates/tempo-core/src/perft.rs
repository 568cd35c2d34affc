//! Perft (performance test) for move generation correctness verification.
//!
//! Only queen promotions exist, so counts match the published perft tables
//! only for positions and depths where no promotion occurs.

use crate::board::Board;

/// Count the leaf nodes reachable in `depth` plies through moves that the
/// current player can actually make.
///
/// Depth 0 returns 1 (the current position).
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let player = board.current_player();
    let mut nodes = 0u64;
    for mv in player.legal_moves() {
        let transition = player.make_move(mv);
        if !transition.is_done() {
            continue;
        }
        nodes += if depth == 1 { 1 } else { perft(transition.to_board(), depth - 1) };
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(uci_move, node_count)` pairs sorted alphabetically.
pub fn divide(board: &Board, depth: usize) -> Vec<(String, u64)> {
    let player = board.current_player();
    let mut results: Vec<(String, u64)> = player
        .legal_moves()
        .iter()
        .filter_map(|mv| {
            let transition = player.make_move(mv);
            if !transition.is_done() {
                return None;
            }
            let count = if depth <= 1 { 1 } else { perft(transition.to_board(), depth - 1) };
            Some((mv.to_uci(), count))
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
