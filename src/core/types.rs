// Ficheiro: src/core/types.rs
// Descrição: Módulo para as definições de tipos de dados fundamentais do jogo.

use serde::Serialize;

/// Pontuação de uma posição, sempre do ponto de vista do motor.
pub type Score = i32;

/// Sentinela de "infinito" usada como limite inicial de alpha/beta.
/// Fica longe de i32::MAX para que `best - 1` e negações nunca transbordem.
pub const SCORE_INFINITY: Score = 1_000_000;

// Enum para representar a cor de uma peça ou de um jogador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    White,
    Black,
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

// Enum para representar o tipo de uma peça (a sua capacidade de movimento).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn value(&self) -> Score {
        match self {
            PieceKind::Pawn   => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook   => 500,
            PieceKind::Queen  => 900,
            PieceKind::King   => 20000, // Valor alto para evitar trocas
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_symbol(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

// Struct para representar uma peça no tabuleiro, combinando o tipo e a cor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Símbolo unicode da peça (usado no dump da árvore).
    pub fn unicode(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }
}

/// Conteúdo de uma casa: vazia ou ocupada por uma peça.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(*piece),
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    /// Verdadeiro se a casa tem uma peça da cor indicada.
    pub fn holds(&self, color: Color) -> bool {
        matches!(self, Cell::Occupied(piece) if piece.color == color)
    }
}

/// Coordenada (linha, coluna) no tabuleiro. A linha 0 é a oitava fila.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    /// Desloca a casa por (dr, dc); devolve None se sair de um tabuleiro rows x cols.
    pub fn offset(&self, dr: i8, dc: i8, rows: usize, cols: usize) -> Option<Square> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if row < 0 || col < 0 || row >= rows as i16 || col >= cols as i16 {
            return None;
        }
        Some(Square::new(row as u8, col as u8))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Notação algébrica para tabuleiros 8x8 (linha 0 = fila 8)
        let file = (self.col + b'a') as char;
        let rank = 8i16 - self.row as i16;
        write!(f, "{}{}", file, rank)
    }
}

// Struct para representar um lance no jogo.
// A casa de origem identifica a peça que se move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Um lance com a pontuação que a busca lhe atribuiu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: Score,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_offset_stays_inside_board() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(-1, 0, 8, 8), None);
        assert_eq!(corner.offset(0, -1, 8, 8), None);
        assert_eq!(corner.offset(1, 2, 8, 8), Some(Square::new(1, 2)));
        assert_eq!(Square::new(7, 7).offset(1, 1, 8, 8), None);
    }

    #[test]
    fn move_display_uses_algebraic_notation() {
        let mv = Move::new(Square::new(6, 4), Square::new(4, 4));
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn cell_holds_checks_color() {
        let cell = Cell::Occupied(Piece::new(PieceKind::Rook, Color::Black));
        assert!(cell.holds(Color::Black));
        assert!(!cell.holds(Color::White));
        assert!(!Cell::Empty.holds(Color::White));
        assert_eq!(Cell::Empty.piece(), None);
    }
}
