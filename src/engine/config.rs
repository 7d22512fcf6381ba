use std::path::PathBuf;

pub const DEFAULT_TT_CAPACITY: usize = 200_000;
pub const DEFAULT_TREE_LOG_PATH: &str = "search_tree.json";

/// Configuração do motor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Sobrepõe a profundidade declarada pelo tabuleiro.
    pub depth: Option<u8>,
    pub tt_capacity: usize,
    /// Semente do gerador; sem ela usa-se entropia do sistema.
    pub seed: Option<u64>,
    /// Destino do dump da árvore. `None` desliga a escrita.
    pub tree_log_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: None,
            tt_capacity: DEFAULT_TT_CAPACITY,
            seed: None,
            tree_log_path: Some(PathBuf::from(DEFAULT_TREE_LOG_PATH)),
        }
    }
}

impl EngineConfig {
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_tt_capacity(mut self, capacity: usize) -> Self {
        self.tt_capacity = capacity;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tree_log_path(mut self, path: Option<PathBuf>) -> Self {
        self.tree_log_path = path;
        self
    }
}
