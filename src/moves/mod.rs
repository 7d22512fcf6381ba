// Ficheiro: src/moves/mod.rs
// Descrição: Declara os submódulos para a geração de lances de cada peça.

pub mod pawn;
pub mod knight;
pub mod sliding;
pub mod queen;
pub mod king;

use crate::core::{Board, Piece, PieceKind, Square};

/// Gera os destinos pseudo-legais de uma peça (sem filtrar xeque).
pub fn pseudo_destinations(board: &Board, from: Square, piece: Piece) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(board, from, piece.color),
        PieceKind::Knight => knight::generate_knight_moves(board, from, piece.color),
        PieceKind::Bishop => sliding::generate_sliding_moves(board, from, piece.color, PieceKind::Bishop),
        PieceKind::Rook => sliding::generate_sliding_moves(board, from, piece.color, PieceKind::Rook),
        PieceKind::Queen => queen::generate_queen_moves(board, from, piece.color),
        PieceKind::King => king::generate_king_moves(board, from, piece.color),
    }
}
