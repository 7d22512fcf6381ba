// Ficheiro: src/core/position.rs
// Descrição: Contrato entre o motor de busca e o tabuleiro (o "oráculo" da posição).

use super::types::*;

/// Tudo o que a busca precisa de saber sobre uma posição.
///
/// A busca nunca copia a posição: recebe-a emprestada (`&mut`), aplica lances
/// com histórico e desfaz cada um deles pela ordem inversa (pilha).
///
/// A cor devolvida por [`Position::player_color`] é a cor "própria" do
/// tabuleiro, isto é, a do jogador humano. O motor joga sempre com a outra cor.
pub trait Position {
    /// Número de linhas e colunas da grelha.
    fn dimensions(&self) -> (usize, usize);

    fn cell(&self, sq: Square) -> Cell;

    fn player_color(&self) -> Color;

    /// Teste terminal global (fim de jogo para qualquer dos lados).
    fn is_terminal(&self) -> bool;

    /// Avaliação estática, positiva quando favorece o motor.
    fn evaluate(&self) -> Score;

    /// Destinos legais da peça em `from` (já filtrados por xeque e auto-captura).
    fn legal_moves(&self, from: Square) -> Vec<Square>;

    /// Aplica um lance. Com `keep_history` o lance pode ser desfeito por `undo_move`.
    fn apply_move(&mut self, from: Square, to: Square, keep_history: bool);

    /// Desfaz o último lance aplicado com histórico.
    fn undo_move(&mut self);

    /// Profundidade máxima de busca declarada pelo tabuleiro.
    fn search_depth_hint(&self) -> u8;

    /// Liga o dump da árvore de busca.
    fn log_enabled(&self) -> bool {
        false
    }

    /// Representação textual (unicode) usada pelo dump da árvore.
    fn render(&self) -> String {
        String::new()
    }

    /// Cor com que o motor joga.
    fn engine_color(&self) -> Color {
        !self.player_color()
    }

    fn contains(&self, sq: Square) -> bool {
        let (rows, cols) = self.dimensions();
        (sq.row as usize) < rows && (sq.col as usize) < cols
    }

    /// Todas as peças de uma cor, percorridas linha a linha.
    fn pieces_of(&self, color: Color) -> Vec<(Square, Piece)> {
        let (rows, cols) = self.dimensions();
        let mut pieces = Vec::with_capacity(16);
        for row in 0..rows {
            for col in 0..cols {
                let sq = Square::new(row as u8, col as u8);
                if let Cell::Occupied(piece) = self.cell(sq) {
                    if piece.color == color {
                        pieces.push((sq, piece));
                    }
                }
            }
        }
        pieces
    }
}
