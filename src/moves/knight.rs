// Ficheiro: src/moves/knight.rs
// Descrição: Lógica para gerar os lances dos cavalos.

use crate::core::{Board, Color, Square};

/// Deslocamentos (linha, coluna) possíveis do cavalo.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

/// Gera os lances pseudo-legais do cavalo em `from`.
pub fn generate_knight_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut moves = Vec::with_capacity(8);

    for &(dr, dc) in &KNIGHT_OFFSETS {
        if let Some(to) = from.offset(dr, dc, Board::ROWS, Board::COLS) {
            // Não pode cair numa casa com peça nossa
            if !board.piece_at(to).holds(color) {
                moves.push(to);
            }
        }
    }
    moves
}
