// Ficheiro: src/moves/queen.rs
// Descrição: Lógica para gerar os lances da Dama (torre + bispo).

use super::sliding::{slide, DIAGONALS, ORTHOGONALS};
use crate::core::{Board, Color, Square};

/// Gera todos os lances pseudo-legais da dama em `from`.
#[inline]
pub fn generate_queen_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut moves = Vec::with_capacity(27);
    slide(board, from, color, &ORTHOGONALS, &mut moves);
    slide(board, from, color, &DIAGONALS, &mut moves);
    moves
}
