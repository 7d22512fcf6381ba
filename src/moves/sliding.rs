// Ficheiro: src/moves/sliding.rs
// Descrição: Lógica para gerar os lances de peças deslizantes (Torres e Bispos).

use crate::core::{Board, Cell, Color, PieceKind, Square};

pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Percorre cada direção até bater numa peça; inclui a casa da peça inimiga.
pub fn slide(board: &Board, from: Square, color: Color, directions: &[(i8, i8)], moves: &mut Vec<Square>) {
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc, Board::ROWS, Board::COLS) {
            match board.piece_at(next) {
                Cell::Empty => moves.push(next),
                Cell::Occupied(piece) => {
                    if piece.color != color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Função genérica para gerar lances de Torres e Bispos.
pub fn generate_sliding_moves(board: &Board, from: Square, color: Color, piece_kind: PieceKind) -> Vec<Square> {
    let mut moves = Vec::with_capacity(14);
    let directions: &[(i8, i8)] = match piece_kind {
        PieceKind::Bishop => &DIAGONALS,
        PieceKind::Rook => &ORTHOGONALS,
        _ => &[], // Não deve acontecer para esta função
    };
    slide(board, from, color, directions, &mut moves);
    moves
}
