use std::collections::BTreeMap;

use fxhash::FxHashMap as HashMap;

use crate::core::{Fingerprint, Score, ScoredMove};

/// Tipo de limite guardado com a pontuação.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact, // Score exato
    Lower, // Score >= beta (fail-high)
    Upper, // Score <= alpha (fail-low)
}

/// Entrada da Transposition Table
#[derive(Debug, Clone, PartialEq)]
pub struct TTEntry {
    pub depth: u8,
    pub score: Score,
    pub bound: Bound,
    /// Só a raiz guarda a lista de melhores lances; nos outros nós fica vazia.
    pub best_moves: Vec<ScoredMove>,
}

impl TTEntry {
    /// A entrada pode cortar a busca na janela (alpha, beta)?
    pub fn is_usable(&self, depth: u8, alpha: Score, beta: Score) -> bool {
        if self.depth < depth {
            return false;
        }
        match self.bound {
            Bound::Exact => true,
            Bound::Lower => self.score >= beta,
            Bound::Upper => self.score <= alpha,
        }
    }
}

struct Slot {
    entry: TTEntry,
    stamp: u64,
}

/// Transposition Table com capacidade fixa e substituição LRU.
///
/// Cada acesso (probe ou store) renova a "idade" da entrada; quando a tabela
/// está cheia sai a entrada usada há mais tempo.
pub struct TranspositionTable {
    table: HashMap<Fingerprint, Slot>,
    recency: BTreeMap<u64, Fingerprint>, // stamp -> chave, do mais antigo para o mais recente
    tick: u64,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::with_capacity(200_000)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        TranspositionTable {
            table: HashMap::with_capacity_and_hasher(capacity.min(1 << 16), Default::default()),
            recency: BTreeMap::new(),
            tick: 0,
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    #[inline]
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Busca entrada na TT; devolve-a só se for compatível com a profundidade e a janela.
    pub fn probe(&mut self, key: &Fingerprint, depth: u8, alpha: Score, beta: Score) -> Option<TTEntry> {
        self.probe_where(key, depth, alpha, beta, |_| true)
    }

    /// Como `probe`, mas a entrada só serve se também passar `accept`.
    /// Conta um hit só quando a entrada é devolvida; tudo o resto é miss.
    pub fn probe_where<F>(&mut self, key: &Fingerprint, depth: u8, alpha: Score, beta: Score, accept: F) -> Option<TTEntry>
    where
        F: FnOnce(&TTEntry) -> bool,
    {
        let tick = self.next_tick();
        let Some(slot) = self.table.get_mut(key) else {
            self.misses += 1;
            return None;
        };

        self.recency.remove(&slot.stamp);
        slot.stamp = tick;
        self.recency.insert(tick, key.clone());

        if slot.entry.is_usable(depth, alpha, beta) && accept(&slot.entry) {
            self.hits += 1;
            Some(slot.entry.clone())
        } else {
            self.misses += 1;
            None
        }
    }

    /// Armazena entrada na TT, substituindo sempre a entrada anterior da mesma posição.
    pub fn store(&mut self, key: Fingerprint, depth: u8, score: Score, bound: Bound, best_moves: Vec<ScoredMove>) {
        let tick = self.next_tick();
        let entry = TTEntry { depth, score, bound, best_moves };

        if let Some(slot) = self.table.get_mut(&key) {
            self.recency.remove(&slot.stamp);
            slot.entry = entry;
            slot.stamp = tick;
            self.recency.insert(tick, key);
            return;
        }

        if self.table.len() >= self.capacity {
            self.evict_oldest();
        }

        self.recency.insert(tick, key.clone());
        self.table.insert(key, Slot { entry, stamp: tick });
    }

    /// Remove a entrada usada há mais tempo.
    fn evict_oldest(&mut self) {
        if let Some((_, key)) = self.recency.pop_first() {
            self.table.remove(&key);
        }
    }

    pub fn contains(&self, key: &Fingerprint) -> bool {
        self.table.contains_key(key)
    }

    /// Limpa toda a TT
    pub fn clear(&mut self) {
        self.table.clear();
        self.recency.clear();
        self.tick = 0;
        self.hits = 0;
        self.misses = 0;
    }

    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 { 0.0 }
        else { self.hits as f64 / (self.hits + self.misses) as f64 }
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Hashfull: percentual de ocupação da TT (0-1000)
    pub fn hashfull(&self) -> u64 {
        (self.len() as u64 * 1000) / self.capacity as u64
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(tag: u8) -> Fingerprint {
        Fingerprint::from(vec![tag])
    }

    #[test]
    fn exact_entry_is_returned_at_equal_or_lower_depth() {
        let mut tt = TranspositionTable::with_capacity(8);
        tt.store(key(1), 3, 42, Bound::Exact, Vec::new());

        assert_eq!(tt.probe(&key(1), 3, -100, 100).map(|e| e.score), Some(42));
        assert_eq!(tt.probe(&key(1), 1, -100, 100).map(|e| e.score), Some(42));
        assert!(tt.probe(&key(1), 4, -100, 100).is_none());
        assert!(tt.probe(&key(2), 1, -100, 100).is_none());
        // Entrada presente mas rasa demais conta como miss
        assert_eq!(tt.hits(), 2);
        assert_eq!(tt.misses(), 2);
    }

    #[test]
    fn rejected_entry_counts_as_miss() {
        let mut tt = TranspositionTable::with_capacity(8);
        tt.store(key(1), 3, 42, Bound::Exact, Vec::new());

        assert!(tt.probe_where(&key(1), 1, -100, 100, |e| !e.best_moves.is_empty()).is_none());
        assert!(tt.probe_where(&key(1), 1, -100, 100, |e| e.best_moves.is_empty()).is_some());
        assert_eq!(tt.hits(), 1);
        assert_eq!(tt.misses(), 1);
    }

    #[test]
    fn bounds_only_cut_compatible_windows() {
        let mut tt = TranspositionTable::with_capacity(8);
        tt.store(key(1), 2, 50, Bound::Lower, Vec::new());
        tt.store(key(2), 2, -10, Bound::Upper, Vec::new());

        // Limite inferior: só serve se já passa beta
        assert!(tt.probe(&key(1), 2, 0, 40).is_some());
        assert!(tt.probe(&key(1), 2, 0, 60).is_none());

        // Limite superior: só serve se não chega a alpha
        assert!(tt.probe(&key(2), 2, 0, 100).is_some());
        assert!(tt.probe(&key(2), 2, -20, 100).is_none());
    }

    #[test]
    fn store_overwrites_previous_entry() {
        let mut tt = TranspositionTable::with_capacity(8);
        tt.store(key(1), 5, 10, Bound::Exact, Vec::new());
        tt.store(key(1), 1, 20, Bound::Exact, Vec::new());

        assert_eq!(tt.len(), 1);
        assert!(tt.probe(&key(1), 5, -100, 100).is_none());
        assert_eq!(tt.probe(&key(1), 1, -100, 100).map(|e| e.score), Some(20));
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let mut tt = TranspositionTable::with_capacity(2);
        tt.store(key(1), 1, 1, Bound::Exact, Vec::new());
        tt.store(key(2), 1, 2, Bound::Exact, Vec::new());

        // Renova a entrada 1; a 2 passa a ser a mais antiga
        assert!(tt.probe(&key(1), 1, -100, 100).is_some());
        tt.store(key(3), 1, 3, Bound::Exact, Vec::new());

        assert_eq!(tt.len(), 2);
        assert!(tt.contains(&key(1)));
        assert!(!tt.contains(&key(2)));
        assert!(tt.contains(&key(3)));
        assert_eq!(tt.hashfull(), 1000);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut tt = TranspositionTable::with_capacity(0);
        assert_eq!(tt.capacity(), 1);
        tt.store(key(1), 1, 1, Bound::Exact, Vec::new());
        tt.store(key(2), 1, 2, Bound::Exact, Vec::new());
        assert_eq!(tt.len(), 1);
        assert!(tt.contains(&key(2)));
    }

    #[test]
    fn clear_resets_everything() {
        let mut tt = TranspositionTable::with_capacity(4);
        tt.store(key(1), 1, 1, Bound::Exact, Vec::new());
        let _ = tt.probe(&key(1), 1, -100, 100);
        tt.clear();
        assert!(tt.is_empty());
        assert_eq!(tt.hits(), 0);
        assert_eq!(tt.hit_rate(), 0.0);
    }
}
