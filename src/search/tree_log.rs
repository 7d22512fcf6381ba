// Ficheiro: src/search/tree_log.rs
// Descrição: Dump da árvore de busca (tabuleiro, profundidade e avaliação de
// cada nó visitado). Canal lateral: nunca altera o resultado da busca.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::core::{Position, Score};
use crate::error::EngineError;

/// Um nó visitado pela busca.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRecord {
    pub depth: u8,
    pub board: String,
    pub score: Score,
}

#[derive(Debug, Default)]
pub struct TreeLog {
    records: Vec<NodeRecord>,
}

impl TreeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Regista o nó atual com a sua representação e avaliação estática.
    pub fn record<P: Position + ?Sized>(&mut self, position: &P, depth: u8) {
        self.records.push(NodeRecord {
            depth,
            board: position.render(),
            score: position.evaluate(),
        });
    }

    pub fn records(&self) -> &[NodeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Escreve o dump em JSON no caminho indicado.
    pub fn flush(&self, path: &Path) -> Result<(), EngineError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &self.records)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    #[test]
    fn record_captures_render_and_score() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 b").unwrap();
        let mut log = TreeLog::new();
        log.record(&board, 2);

        assert_eq!(log.len(), 1);
        assert_eq!(log.records()[0].depth, 2);
        assert_eq!(log.records()[0].score, board.evaluate());
        assert!(log.records()[0].board.contains('♖'));

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn flush_writes_json_array() {
        let board = Board::new();
        let mut log = TreeLog::new();
        log.record(&board, 1);
        log.record(&board, 0);

        let path = std::env::temp_dir().join(format!("lance_tree_log_{}.json", std::process::id()));
        log.flush(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.as_array().map(|a| a.len()), Some(2));
        assert_eq!(parsed[0]["depth"], 1);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn flush_to_missing_directory_fails() {
        let log = TreeLog::new();
        let path = std::env::temp_dir().join("lance_missing_dir").join("nested").join("tree.json");
        assert!(matches!(log.flush(&path), Err(EngineError::Io(_))));
    }
}
