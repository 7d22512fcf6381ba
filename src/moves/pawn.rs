// Ficheiro: src/moves/pawn.rs
// Descrição: Lógica para gerar os lances dos peões.
// Sem en passant; a promoção (sempre a dama) é tratada pelo tabuleiro.

use crate::core::{Board, Cell, Color, Square};

/// Direção de avanço: as brancas sobem (linha decresce), as pretas descem.
#[inline]
pub fn forward(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

#[inline]
fn start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Gera os lances pseudo-legais do peão em `from`.
pub fn generate_pawn_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut moves = Vec::with_capacity(4);
    let dir = forward(color);

    // Avanço simples e duplo
    if let Some(one) = from.offset(dir, 0, Board::ROWS, Board::COLS) {
        if board.piece_at(one) == Cell::Empty {
            moves.push(one);
            if from.row == start_row(color) {
                if let Some(two) = one.offset(dir, 0, Board::ROWS, Board::COLS) {
                    if board.piece_at(two) == Cell::Empty {
                        moves.push(two);
                    }
                }
            }
        }
    }

    // Capturas diagonais
    for dc in [-1, 1] {
        if let Some(target) = from.offset(dir, dc, Board::ROWS, Board::COLS) {
            if board.piece_at(target).holds(!color) {
                moves.push(target);
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawn_on_start_row_can_double_step() {
        let board = Board::new();
        let moves = generate_pawn_moves(&board, Square::new(6, 4), Color::White);
        assert_eq!(moves, vec![Square::new(5, 4), Square::new(4, 4)]);
    }

    #[test]
    fn blocked_pawn_only_captures() {
        // Peão branco em e4 bloqueado por peão em e5, com bispo preto em d5
        let board = Board::from_fen("4k3/8/8/3bp3/4P3/8/8/4K3 w").unwrap();
        let moves = generate_pawn_moves(&board, Square::new(4, 4), Color::White);
        assert_eq!(moves, vec![Square::new(3, 3)]);
    }

    #[test]
    fn black_pawn_moves_down() {
        let board = Board::new();
        let moves = generate_pawn_moves(&board, Square::new(1, 0), Color::Black);
        assert_eq!(moves, vec![Square::new(2, 0), Square::new(3, 0)]);
    }
}
