// Ficheiro: src/core/fingerprint.rs
// Descrição: Impressão digital canónica da posição, usada como chave da TT.
//
// Ao contrário de um hash Zobrist, a codificação é exata: as dimensões em u32
// little-endian, um byte por casa, a cor do jogador e a cor que joga no nó.
// Posições iguais dão chaves iguais e posições diferentes dão chaves diferentes.

use super::position::Position;
use super::types::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(Box<[u8]>);

impl Fingerprint {
    pub fn of<P: Position + ?Sized>(position: &P, side_to_move: Color) -> Self {
        let (rows, cols) = position.dimensions();
        let mut bytes = Vec::with_capacity(rows * cols + 10);
        bytes.extend_from_slice(&(rows as u32).to_le_bytes());
        bytes.extend_from_slice(&(cols as u32).to_le_bytes());

        for row in 0..rows {
            for col in 0..cols {
                bytes.push(cell_code(position.cell(Square::new(row as u8, col as u8))));
            }
        }

        bytes.push(color_to_index(position.player_color()) as u8);
        bytes.push(color_to_index(side_to_move) as u8);
        Fingerprint(bytes.into_boxed_slice())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Fingerprint {
    fn from(bytes: Vec<u8>) -> Self {
        Fingerprint(bytes.into_boxed_slice())
    }
}

/// 0 para casa vazia, 1..=12 para (cor, tipo).
fn cell_code(cell: Cell) -> u8 {
    match cell {
        Cell::Empty => 0,
        Cell::Occupied(piece) => {
            1 + (color_to_index(piece.color) * 6 + piece_to_index(piece.kind)) as u8
        }
    }
}

pub fn piece_to_index(piece_kind: PieceKind) -> usize {
    match piece_kind {
        PieceKind::Pawn => 0,
        PieceKind::Knight => 1,
        PieceKind::Bishop => 2,
        PieceKind::Rook => 3,
        PieceKind::Queen => 4,
        PieceKind::King => 5,
    }
}

pub fn color_to_index(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => 1,
    }
}
