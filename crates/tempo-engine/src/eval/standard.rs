//! The default evaluator: material, mobility, check, checkmate and castling.

use tempo_core::{Board, Player};

use super::BoardEvaluator;
use super::material::material;

/// Bonus for giving check.
pub const CHECK_BONUS: i32 = 50;
/// Bonus for delivering checkmate, scaled by [`depth_bonus`].
pub const CHECKMATE_BONUS: i32 = 10_000;
/// Multiplier per remaining ply applied to [`CHECKMATE_BONUS`].
pub const DEPTH_BONUS: i32 = 100;
/// Bonus for having castled.
pub const CASTLE_BONUS: i32 = 60;

/// Scale factor for mates: a mate found with plies still to search is worth
/// more than one found at the horizon. Saturates at `i32::MAX`.
#[inline]
pub const fn depth_bonus(depth: u32) -> i32 {
    if depth == 0 {
        return 1;
    }
    let depth = if depth > i32::MAX as u32 { i32::MAX } else { depth as i32 };
    DEPTH_BONUS.saturating_mul(depth)
}

/// White's score minus Black's, where each side scores
/// material + mobility + check + checkmate + castled.
///
/// Sums saturate, so arbitrarily deep mates never overflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEvaluator;

impl StandardEvaluator {
    fn score_player(player: &Player<'_>, depth: u32) -> i32 {
        let opponent = player.opponent();
        let mobility = player.legal_moves().len() as i32;
        let check = if opponent.is_in_check() { CHECK_BONUS } else { 0 };
        let checkmate = if opponent.is_in_checkmate() {
            CHECKMATE_BONUS.saturating_mul(depth_bonus(depth))
        } else {
            0
        };
        let castled = if player.is_castled() { CASTLE_BONUS } else { 0 };
        (material(player) + mobility + check + castled).saturating_add(checkmate)
    }
}

impl BoardEvaluator for StandardEvaluator {
    fn evaluate(&self, board: &Board, depth: u32) -> i32 {
        Self::score_player(&board.white_player(), depth)
            .saturating_sub(Self::score_player(&board.black_player(), depth))
    }
}
