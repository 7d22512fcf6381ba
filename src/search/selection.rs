// Ficheiro: src/search/selection.rs
// Descrição: Escolha do lance final entre os empatados e lance aleatório de recurso.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use crate::core::*;
use crate::search::alpha_beta::SearchResult;

/// Escolhe uniformemente um dos lances com a pontuação máxima.
pub fn select<R: Rng + ?Sized>(result: &SearchResult, rng: &mut R) -> Option<ScoredMove> {
    let top = result.best_moves.iter().map(|m| m.score).max()?;
    let tied: Vec<ScoredMove> = result.best_moves.iter().copied().filter(|m| m.score == top).collect();
    tied.choose(rng).copied()
}

/// Aplica o lance escolhido, sem histórico.
///
/// Devolve `false` (sem tocar no tabuleiro) se o lance não puder ser aplicado:
/// origem fora do tabuleiro ou vazia, ou destino fora do tabuleiro.
pub fn apply_choice<P: Position + ?Sized>(position: &mut P, mv: Move) -> bool {
    if !position.contains(mv.from) || !position.contains(mv.to) || !position.cell(mv.from).is_occupied() {
        warn!(%mv, "chosen move cannot be applied");
        return false;
    }
    position.apply_move(mv.from, mv.to, false);
    true
}

/// Joga um lance legal aleatório do motor: primeiro uma peça ao acaso entre as
/// que têm lances, depois um destino ao acaso.
pub fn random_move<P: Position + ?Sized, R: Rng + ?Sized>(position: &mut P, rng: &mut R) -> bool {
    let movable: Vec<(Square, Vec<Square>)> = position
        .pieces_of(position.engine_color())
        .into_iter()
        .map(|(sq, _)| (sq, position.legal_moves(sq)))
        .filter(|(_, moves)| !moves.is_empty())
        .collect();

    let Some((from, moves)) = movable.choose(rng) else {
        return false;
    };
    let Some(&to) = moves.choose(rng) else {
        return false;
    };
    position.apply_move(*from, to, false);
    true
}
