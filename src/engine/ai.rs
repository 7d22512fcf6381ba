// Ficheiro: src/engine/ai.rs
// Descrição: Fachada do motor: resolve a profundidade, corre o aprofundamento
// progressivo, escolhe entre os lances empatados e aplica-o no tabuleiro.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::core::Position;
use crate::engine::config::EngineConfig;
use crate::engine::tt::TranspositionTable;
use crate::search::{apply_choice, deepen, random_move, search_root, select, SearchContext, SearchResult, SearchStats, TreeLog};

/// Motor de jogo. Cada instância tem a sua TT e o seu gerador aleatório,
/// pelo que sessões independentes não partilham estado.
pub struct Engine {
    config: EngineConfig,
    tt: TranspositionTable,
    rng: StdRng,
    tree_log: TreeLog,
    last_stats: SearchStats,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Engine {
            tt: TranspositionTable::with_capacity(config.tt_capacity),
            rng,
            tree_log: TreeLog::new(),
            last_stats: SearchStats::default(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Estatísticas da última busca.
    pub fn stats(&self) -> SearchStats {
        self.last_stats
    }

    pub fn tree_log(&self) -> &TreeLog {
        &self.tree_log
    }

    pub fn cache(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Esvazia a TT (novo jogo).
    pub fn clear_cache(&mut self) {
        self.tt.clear();
    }

    /// Pontua os lances da raiz a uma profundidade fixa, sem aplicar nenhum.
    pub fn best_moves<P: Position + ?Sized>(&mut self, position: &mut P, depth: u8) -> SearchResult {
        let mut ctx = SearchContext::new(position.engine_color(), &mut self.tt);
        let result = search_root(position, depth.max(1), &mut ctx);
        ctx.stats.depth = depth.max(1);
        self.last_stats = ctx.stats;
        result
    }

    /// Calcula e joga o lance do motor. Devolve `true` se um lance foi aplicado.
    pub fn get_ai_move<P: Position + ?Sized>(&mut self, position: &mut P) -> bool {
        let depth = self.config.depth.unwrap_or_else(|| position.search_depth_hint());
        let logging = position.log_enabled();
        if logging {
            self.tree_log.clear();
        }

        let mut ctx = SearchContext::new(position.engine_color(), &mut self.tt);
        if logging {
            ctx = ctx.with_log(&mut self.tree_log);
        }
        let result = deepen(position, depth, &mut ctx);
        self.last_stats = ctx.stats;

        if logging {
            self.flush_tree_log();
        }

        debug!(
            depth = self.last_stats.depth,
            nodes = self.last_stats.nodes,
            cache_hits = self.last_stats.cache_hits,
            cutoffs = self.last_stats.cutoffs,
            candidates = result.best_moves.len(),
            "search finished"
        );

        let Some(choice) = select(&result, &mut self.rng) else {
            info!("no legal move for the engine");
            return false;
        };

        info!(mv = %choice.mv, score = choice.score, "engine move");
        apply_choice(position, choice.mv)
    }

    /// Lance aleatório de recurso.
    pub fn get_random_move<P: Position + ?Sized>(&mut self, position: &mut P) -> bool {
        random_move(position, &mut self.rng)
    }

    fn flush_tree_log(&self) {
        let Some(path) = self.config.tree_log_path.as_deref() else {
            return;
        };
        if let Err(err) = self.tree_log.flush(path) {
            warn!(path = %path.display(), error = %err, "failed to write search tree log");
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
