use tracing::debug;

use crate::core::Position;
use crate::search::alpha_beta::{search_root, SearchContext, SearchResult};

/// Aprofundamento progressivo: pesquisa às profundidades 1..=max_depth e
/// retém o resultado da profundidade mais rasa que melhora estritamente a
/// melhor pontuação vista até então. O resultado retido é devolvido tal
/// como foi calculado, sem nova busca.
pub fn deepen<P: Position + ?Sized>(position: &mut P, max_depth: u8, ctx: &mut SearchContext<'_>) -> SearchResult {
    let max_depth = max_depth.max(1);
    let mut best = SearchResult::empty();

    for depth in 1..=max_depth {
        let result = search_root(position, depth, ctx);

        debug!(
            depth,
            score = result.best_score,
            candidates = result.best_moves.len(),
            nodes = ctx.stats.nodes,
            "progressive deepening iteration"
        );

        if result.best_score > best.best_score {
            ctx.stats.depth = depth;
            best = result;
        }
    }

    best
}
