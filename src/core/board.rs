// Ficheiro: src/core/board.rs
// Descrição: Módulo que contém a struct Board (tabuleiro 8x8 em "mailbox")
// e a sua implementação do contrato `Position` usado pela busca.

use super::position::Position;
use super::types::*;
use crate::error::EngineError;
use crate::moves;
use crate::search::evaluation::evaluate_position;

/// Profundidade de busca por omissão declarada pelo tabuleiro.
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

/// Informação necessária para desfazer um lance.
#[derive(Debug, Clone, Copy)]
pub struct UndoInfo {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub captured: Cell,
}

// A struct principal do tabuleiro: uma grelha de casas tipadas.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [[Cell; 8]; 8],

    // Cor do jogador humano; o motor joga com a outra.
    pub player_color: Color,

    // Profundidade máxima de busca para este tabuleiro.
    pub depth: u8,

    // Liga o dump da árvore de busca.
    pub log: bool,

    history: Vec<UndoInfo>,
}

impl Board {
    pub const ROWS: usize = 8;
    pub const COLS: usize = 8;

    /// Cria um tabuleiro vazio.
    pub fn empty(player_color: Color) -> Self {
        Board {
            cells: [[Cell::Empty; 8]; 8],
            player_color,
            depth: DEFAULT_SEARCH_DEPTH,
            log: false,
            history: Vec::new(),
        }
    }

    /// Cria um novo tabuleiro na posição inicial padrão; o jogador tem as brancas.
    pub fn new() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen,
            PieceKind::King, PieceKind::Bishop, PieceKind::Knight, PieceKind::Rook,
        ];

        let mut board = Board::empty(Color::White);
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.cells[0][col] = Cell::Occupied(Piece::new(kind, Color::Black));
            board.cells[1][col] = Cell::Occupied(Piece::new(PieceKind::Pawn, Color::Black));
            board.cells[6][col] = Cell::Occupied(Piece::new(PieceKind::Pawn, Color::White));
            board.cells[7][col] = Cell::Occupied(Piece::new(kind, Color::White));
        }
        board
    }

    /// Cria um tabuleiro a partir de uma string ao estilo FEN:
    /// `<colocação> [w|b] [profundidade]`, onde `w`/`b` é a cor do jogador.
    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() || parts.len() > 3 {
            return Err(EngineError::InvalidFen("wrong number of parts".to_string()));
        }

        let player_color = match parts.get(1).copied() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(EngineError::InvalidFen(format!("invalid color: {}", other))),
        };

        let mut board = Board::empty(player_color);

        if let Some(depth) = parts.get(2) {
            board.depth = depth
                .parse()
                .map_err(|_| EngineError::InvalidFen(format!("invalid depth: {}", depth)))?;
        }

        // Parse da colocação (parts[0]), da oitava fila para a primeira
        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != Self::ROWS {
            return Err(EngineError::InvalidFen("wrong number of rows".to_string()));
        }

        for (row, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for ch in text.chars() {
                if let Some(digit) = ch.to_digit(10) {
                    col += digit as usize; // Casas vazias
                } else {
                    let kind = PieceKind::from_symbol(ch)
                        .ok_or_else(|| EngineError::InvalidFen(format!("invalid piece: {}", ch)))?;
                    let color = if ch.is_uppercase() { Color::White } else { Color::Black };
                    if col >= Self::COLS {
                        return Err(EngineError::InvalidFen(format!("row {} is too long", row + 1)));
                    }
                    board.cells[row][col] = Cell::Occupied(Piece::new(kind, color));
                    col += 1;
                }
            }
            if col != Self::COLS {
                return Err(EngineError::InvalidFen(format!("row {} has {} columns", row + 1, col)));
            }
        }

        Ok(board)
    }

    /// Colocação das peças em notação FEN (sem a cor nem a profundidade).
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for (row, cells) in self.cells.iter().enumerate() {
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Cell::Empty => empty += 1,
                    Cell::Occupied(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        let symbol = piece.kind.symbol();
                        out.push(if piece.color == Color::White { symbol.to_ascii_uppercase() } else { symbol });
                    }
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row + 1 < Self::ROWS {
                out.push('/');
            }
        }
        out
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.cells[sq.row as usize][sq.col as usize]
    }

    pub fn set_piece(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.row as usize][sq.col as usize] = cell;
    }

    /// Número de lances no histórico (útil para verificar restauro).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Casa do rei da cor dada, se ainda estiver no tabuleiro.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Cell::Occupied(Piece::new(PieceKind::King, color));
        for row in 0..Self::ROWS {
            for col in 0..Self::COLS {
                if self.cells[row][col] == king {
                    return Some(Square::new(row as u8, col as u8));
                }
            }
        }
        None
    }

    /// Verifica se o rei da cor especificada está em xeque.
    pub fn is_king_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(sq) => self.is_square_attacked_by(sq, !color),
            None => false,
        }
    }

    /// Verifica se uma casa é atacada por peças da cor especificada.
    pub fn is_square_attacked_by(&self, square: Square, attacking_color: Color) -> bool {
        let holds = |sq: Square, kinds: &[PieceKind]| {
            matches!(self.piece_at(sq), Cell::Occupied(p) if p.color == attacking_color && kinds.contains(&p.kind))
        };

        // Peões: o atacante está uma linha "atrás" da casa, do seu ponto de vista
        let pawn_dir = -moves::pawn::forward(attacking_color);
        for dc in [-1, 1] {
            if let Some(sq) = square.offset(pawn_dir, dc, Self::ROWS, Self::COLS) {
                if holds(sq, &[PieceKind::Pawn]) {
                    return true;
                }
            }
        }

        for &(dr, dc) in &moves::knight::KNIGHT_OFFSETS {
            if let Some(sq) = square.offset(dr, dc, Self::ROWS, Self::COLS) {
                if holds(sq, &[PieceKind::Knight]) {
                    return true;
                }
            }
        }

        for &(dr, dc) in &moves::king::KING_OFFSETS {
            if let Some(sq) = square.offset(dr, dc, Self::ROWS, Self::COLS) {
                if holds(sq, &[PieceKind::King]) {
                    return true;
                }
            }
        }

        // Peças deslizantes (mais lento, verificar por último)
        self.is_attacked_by_sliding_piece(square, &moves::sliding::DIAGONALS, &[PieceKind::Bishop, PieceKind::Queen], attacking_color)
            || self.is_attacked_by_sliding_piece(square, &moves::sliding::ORTHOGONALS, &[PieceKind::Rook, PieceKind::Queen], attacking_color)
    }

    fn is_attacked_by_sliding_piece(&self, square: Square, directions: &[(i8, i8)], kinds: &[PieceKind], attacking_color: Color) -> bool {
        for &(dr, dc) in directions {
            let mut current = square;
            while let Some(next) = current.offset(dr, dc, Self::ROWS, Self::COLS) {
                if let Cell::Occupied(piece) = self.piece_at(next) {
                    if piece.color == attacking_color && kinds.contains(&piece.kind) {
                        return true;
                    }
                    break;
                }
                current = next;
            }
        }
        false
    }

    /// Verdadeiro se a cor tem pelo menos um lance legal.
    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.pieces_of(color)
            .into_iter()
            .any(|(sq, _)| !self.legal_moves(sq).is_empty())
    }

    /// Verifica se há empate por material insuficiente.
    pub fn is_draw_by_insufficient_material(&self) -> bool {
        let mut minors = 0;
        for row in 0..Self::ROWS {
            for col in 0..Self::COLS {
                if let Cell::Occupied(piece) = self.cells[row][col] {
                    match piece.kind {
                        PieceKind::King => {}
                        PieceKind::Knight | PieceKind::Bishop => minors += 1,
                        _ => return false,
                    }
                }
            }
        }
        // Rei contra rei, ou rei + peça menor contra rei
        minors <= 1
    }

    /// Cópia sem histórico, usada para testar a legalidade de um lance.
    fn scratch(&self) -> Board {
        Board {
            cells: self.cells,
            player_color: self.player_color,
            depth: self.depth,
            log: false,
            history: Vec::new(),
        }
    }

    /// Executa um lance, promovendo peões que chegam à última fila.
    fn make_move(&mut self, from: Square, to: Square) -> Option<UndoInfo> {
        let moved = self.piece_at(from).piece()?;
        let captured = self.piece_at(to);

        let last_row = match moved.color {
            Color::White => 0,
            Color::Black => (Self::ROWS - 1) as u8,
        };
        let landed = if moved.kind == PieceKind::Pawn && to.row == last_row {
            Piece::new(PieceKind::Queen, moved.color)
        } else {
            moved
        };

        self.set_piece(to, Cell::Occupied(landed));
        self.set_piece(from, Cell::Empty);
        Some(UndoInfo { from, to, moved, captured })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Position for Board {
    fn dimensions(&self) -> (usize, usize) {
        (Self::ROWS, Self::COLS)
    }

    fn cell(&self, sq: Square) -> Cell {
        self.piece_at(sq)
    }

    fn player_color(&self) -> Color {
        self.player_color
    }

    /// Fim de jogo global: um rei capturado, material insuficiente, ou uma
    /// das cores sem nenhum lance legal (mate ou afogamento).
    fn is_terminal(&self) -> bool {
        let white_king = self.king_square(Color::White);
        let black_king = self.king_square(Color::Black);
        if white_king.is_none() || black_king.is_none() {
            return true;
        }
        if self.is_draw_by_insufficient_material() {
            return true;
        }
        !self.has_legal_moves(Color::White) || !self.has_legal_moves(Color::Black)
    }

    fn evaluate(&self) -> Score {
        evaluate_position(self, self.engine_color())
    }

    /// Gera apenas lances legais (filtra lances que deixam o próprio rei em xeque).
    fn legal_moves(&self, from: Square) -> Vec<Square> {
        let piece = match self.piece_at(from) {
            Cell::Occupied(piece) => piece,
            Cell::Empty => return Vec::new(),
        };

        moves::pseudo_destinations(self, from, piece)
            .into_iter()
            .filter(|&to| {
                let mut temp = self.scratch();
                temp.make_move(from, to);
                !temp.is_king_in_check(piece.color)
            })
            .collect()
    }

    fn apply_move(&mut self, from: Square, to: Square, keep_history: bool) {
        if let Some(undo) = self.make_move(from, to) {
            if keep_history {
                self.history.push(undo);
            }
        }
    }

    fn undo_move(&mut self) {
        if let Some(undo) = self.history.pop() {
            self.set_piece(undo.from, Cell::Occupied(undo.moved));
            self.set_piece(undo.to, undo.captured);
        }
    }

    fn search_depth_hint(&self) -> u8 {
        self.depth
    }

    fn log_enabled(&self) -> bool {
        self.log
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", Self::ROWS - row)?;
            for cell in cells {
                match cell {
                    Cell::Empty => write!(f, " ·")?,
                    Cell::Occupied(piece) => write!(f, " {}", piece.unicode())?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_roundtrips_through_fen() {
        let board = Board::new();
        assert_eq!(board.placement(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
        let parsed = Board::from_fen(&format!("{} w", board.placement())).unwrap();
        assert_eq!(parsed.placement(), board.placement());
        assert_eq!(parsed.player_color, Color::White);
    }

    #[test]
    fn from_fen_reads_color_and_depth() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 b 5").unwrap();
        assert_eq!(board.player_color, Color::Black);
        assert_eq!(board.engine_color(), Color::White);
        assert_eq!(board.search_depth_hint(), 5);
    }

    #[test]
    fn from_fen_rejects_malformed_input() {
        assert!(matches!(Board::from_fen(""), Err(EngineError::InvalidFen(_))));
        assert!(Board::from_fen("4k3/8/8/8/8/8/4K3 w").is_err());
        assert!(Board::from_fen("4k3/8/8/8/8/8/8/4X3 w").is_err());
        assert!(Board::from_fen("4k3/8/8/8/8/8/8/4K4 w").is_err());
        assert!(Board::from_fen("4k3/8/8/8/8/8/8/4K3 g").is_err());
        assert!(Board::from_fen("4k3/8/8/8/8/8/8/4K3 w deep").is_err());
    }

    #[test]
    fn start_position_has_twenty_moves_per_side() {
        let board = Board::new();
        let count = |color| -> usize {
            board.pieces_of(color).iter().map(|(sq, _)| board.legal_moves(*sq).len()).sum()
        };
        assert_eq!(count(Color::White), 20);
        assert_eq!(count(Color::Black), 20);
    }

    #[test]
    fn apply_and_undo_restore_the_board() {
        let mut board = Board::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w").unwrap();
        let before = board.placement();

        board.apply_move(Square::new(4, 4), Square::new(3, 3), true);
        assert_eq!(board.piece_at(Square::new(3, 3)), Cell::Occupied(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(board.history_len(), 1);

        board.undo_move();
        assert_eq!(board.placement(), before);
        assert_eq!(board.history_len(), 0);
    }

    #[test]
    fn pawn_promotes_and_undo_restores_pawn() {
        let mut board = Board::from_fen("k7/4P3/8/8/8/8/8/4K3 w").unwrap();
        board.apply_move(Square::new(1, 4), Square::new(0, 4), true);
        assert_eq!(board.piece_at(Square::new(0, 4)), Cell::Occupied(Piece::new(PieceKind::Queen, Color::White)));
        board.undo_move();
        assert_eq!(board.piece_at(Square::new(1, 4)), Cell::Occupied(Piece::new(PieceKind::Pawn, Color::White)));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        // Torre branca em e2 cravada pela torre preta em e8 contra o rei em e1
        let board = Board::from_fen("4r2k/8/8/8/8/8/4R3/4K3 w").unwrap();
        let moves = board.legal_moves(Square::new(6, 4));
        assert!(moves.iter().all(|sq| sq.col == 4));
        assert!(moves.contains(&Square::new(0, 4)));
    }

    #[test]
    fn checkmate_is_terminal() {
        // Mate do corredor: rei preto em h8, torre branca em a8
        let board = Board::from_fen("R6k/6pp/8/8/8/8/8/6K1 w").unwrap();
        assert!(board.is_king_in_check(Color::Black));
        assert!(!board.has_legal_moves(Color::Black));
        assert!(board.is_terminal());
    }

    #[test]
    fn bare_kings_are_terminal() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w").unwrap();
        assert!(board.is_draw_by_insufficient_material());
        assert!(board.is_terminal());
        assert!(!Board::new().is_terminal());
    }

    #[test]
    fn render_shows_unicode_pieces() {
        let text = Board::new().render();
        assert!(text.contains('♔'));
        assert!(text.contains('♚'));
        assert!(text.lines().count() == 9);
    }
}
