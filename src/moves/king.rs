// Ficheiro: src/moves/king.rs
// Descrição: Lógica para gerar os lances do Rei.

use crate::core::{Board, Color, Square};

/// Um passo em cada uma das 8 direções.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Gera os lances pseudo-legais do rei em `from`. Não há roque.
pub fn generate_king_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut moves = Vec::with_capacity(8);

    for &(dr, dc) in &KING_OFFSETS {
        if let Some(to) = from.offset(dr, dc, Board::ROWS, Board::COLS) {
            if !board.piece_at(to).holds(color) {
                moves.push(to);
            }
        }
    }
    moves
}
