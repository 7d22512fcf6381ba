// Ficheiro: src/search/evaluation.rs
// Descrição: Avaliação estática do tabuleiro de referência.

use crate::core::*;

/// Pontuação de mate: acima de todo o material possível, abaixo do infinito.
pub const MATE_SCORE: Score = 30000;

// Casas centrais: d4, e4, d5, e5
const CENTER: [Square; 4] = [
    Square::new(3, 3),
    Square::new(3, 4),
    Square::new(4, 3),
    Square::new(4, 4),
];
const CENTER_BONUS: Score = 20;

/// Avaliação simples baseada no material das peças e no controlo do centro,
/// do ponto de vista de `perspective`.
pub fn evaluate_position(board: &Board, perspective: Color) -> Score {
    // Mate: o lado em xeque sem lances perde
    for color in [perspective, !perspective] {
        if board.is_king_in_check(color) && !board.has_legal_moves(color) {
            return if color == perspective { -MATE_SCORE } else { MATE_SCORE };
        }
    }

    let mut score = 0;

    for color in [Color::White, Color::Black] {
        let sign = if color == perspective { 1 } else { -1 };
        for (sq, piece) in board.pieces_of(color) {
            score += sign * piece.kind.value();
            if CENTER.contains(&sq) {
                score += sign * CENTER_BONUS;
            }
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_balanced() {
        let board = Board::new();
        assert_eq!(evaluate_position(&board, Color::White), 0);
        assert_eq!(evaluate_position(&board, Color::Black), 0);
    }

    #[test]
    fn material_is_signed_by_perspective() {
        // Brancas com uma torre a mais
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w").unwrap();
        assert_eq!(evaluate_position(&board, Color::White), 500);
        assert_eq!(evaluate_position(&board, Color::Black), -500);
    }

    #[test]
    fn center_occupation_earns_bonus() {
        let board = Board::from_fen("4k3/8/8/8/3N4/8/8/4K3 w").unwrap();
        assert_eq!(evaluate_position(&board, Color::White), 320 + CENTER_BONUS);
    }

    #[test]
    fn checkmated_side_scores_mate() {
        let board = Board::from_fen("R6k/6pp/8/8/8/8/8/6K1 w").unwrap();
        assert_eq!(evaluate_position(&board, Color::White), MATE_SCORE);
        assert_eq!(evaluate_position(&board, Color::Black), -MATE_SCORE);
    }
}
