use crate::core::*;
use crate::engine::tt::{Bound, TranspositionTable};
use crate::search::move_ordering::order_moves;
use crate::search::tree_log::TreeLog;

/// Resultado da busca Alpha-Beta
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Todos os lances da raiz que atingem `best_score` (empates incluídos).
    pub best_moves: Vec<ScoredMove>,
    pub best_score: Score,
}

impl SearchResult {
    /// Resultado sem lances, com a sentinela de "nenhuma melhoria".
    pub fn empty() -> Self {
        SearchResult { best_moves: Vec::new(), best_score: -SCORE_INFINITY }
    }

    fn score_only(score: Score) -> Self {
        SearchResult { best_moves: Vec::new(), best_score: score }
    }

    pub fn is_empty(&self) -> bool {
        self.best_moves.is_empty()
    }
}

/// Estatísticas de uma busca de topo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub cutoffs: u64,
    /// Profundidade cujo resultado foi retido pelo aprofundamento progressivo.
    pub depth: u8,
}

/// Estado de uma busca de topo. Pertence só à chamada de topo; as chamadas
/// recursivas devolvem a sua pontuação por valor.
pub struct SearchContext<'a> {
    root_color: Color,
    tt: &'a mut TranspositionTable,
    log: Option<&'a mut TreeLog>,
    pub stats: SearchStats,
}

impl<'a> SearchContext<'a> {
    /// `root_color` é a cor do motor: os nós que maximizam movem as suas peças.
    pub fn new(root_color: Color, tt: &'a mut TranspositionTable) -> Self {
        SearchContext { root_color, tt, log: None, stats: SearchStats::default() }
    }

    pub fn with_log(mut self, log: &'a mut TreeLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn root_color(&self) -> Color {
        self.root_color
    }
}

/// Busca de topo com janela completa.
pub fn search_root<P: Position + ?Sized>(position: &mut P, depth: u8, ctx: &mut SearchContext<'_>) -> SearchResult {
    search(position, depth, -SCORE_INFINITY, SCORE_INFINITY, true, true, ctx)
}

/// Minimax com podas Alpha-Beta (fail-soft).
///
/// Os nós que maximizam enumeram as peças do motor, os que minimizam as do
/// jogador. Só a raiz preenche `best_moves`; nos outros nós interessa apenas
/// `best_score`. Um lado sem lances deixa a dobra na sentinela (±infinito).
pub fn search<P: Position + ?Sized>(
    position: &mut P,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    is_root: bool,
    ctx: &mut SearchContext<'_>,
) -> SearchResult {
    ctx.stats.nodes += 1;

    if let Some(log) = ctx.log.as_deref_mut() {
        log.record(position, depth);
    }

    let side = if maximizing { ctx.root_color } else { !ctx.root_color };
    let fingerprint = Fingerprint::of(position, side);

    // ========== TT PROBE ==========
    // Na raiz só serve uma entrada exata que traga a lista de lances
    let probed = ctx.tt.probe_where(&fingerprint, depth, alpha, beta, |entry| {
        !is_root || (entry.bound == Bound::Exact && !entry.best_moves.is_empty())
    });
    if let Some(entry) = probed {
        ctx.stats.cache_hits += 1;
        if !is_root {
            return SearchResult::score_only(entry.score);
        }
        return SearchResult { best_moves: entry.best_moves, best_score: entry.score };
    }
    ctx.stats.cache_misses += 1;

    if depth == 0 || position.is_terminal() {
        return SearchResult::score_only(position.evaluate());
    }

    let original_alpha = alpha;
    let original_beta = beta;
    let mut best = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };
    let mut best_moves: Vec<ScoredMove> = Vec::new();

    'pieces: for (from, _) in position.pieces_of(side) {
        let mut destinations = position.legal_moves(from);
        order_moves(&*position, &mut destinations);

        for to in destinations {
            position.apply_move(from, to, true);
            let score = search(position, depth - 1, alpha, beta, !maximizing, false, ctx).best_score;
            position.undo_move();

            if is_root {
                if score > best {
                    best_moves.clear();
                    best_moves.push(ScoredMove { mv: Move::new(from, to), score });
                } else if score == best {
                    best_moves.push(ScoredMove { mv: Move::new(from, to), score });
                }
            }

            if maximizing {
                best = best.max(score);
                // Na raiz a janela fica um ponto abaixo do melhor, para que um
                // empate seja pesquisado como valor exato e não como limite.
                alpha = if is_root { alpha.max(best - 1) } else { alpha.max(best) };
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if beta <= alpha {
                ctx.stats.cutoffs += 1;
                break 'pieces; // Alpha-beta cutoff
            }
        }
    }

    // ========== TT STORE ==========
    // A sentinela (nenhum lance) não é uma pontuação, não vai para a TT.
    if best.abs() < SCORE_INFINITY {
        let bound = if best <= original_alpha {
            Bound::Upper
        } else if best >= original_beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        ctx.tt.store(fingerprint, depth, best, bound, best_moves.clone());
    }

    SearchResult { best_moves, best_score: best }
}
