// Ficheiro: src/error.rs
// Descrição: Erros do motor. A busca em si nunca falha; os erros vêm da leitura
// de posições e da escrita do dump da árvore.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
