use ahash::AHashMap;

use crate::config::CounterConfig;
use crate::error::{Error, Result};
use crate::item_set::ItemSet;
use crate::relation::Relation;

/// Counts the linear extensions of a must-precede relation, modulo `modulus`.
///
/// The search walks the lattice of visited-item sets depth first. Each set is
/// solved once: the number of ways to order the items not yet visited is
/// cached under a snapshot of the set, so different placement orders that
/// reach the same set share the work.
pub struct Counter<'a> {
    relation: &'a Relation,
    /// `succ[i]` as a bitset, for fast posterior unions.
    succ: Vec<ItemSet>,
    modulus: u64,
    cache: AHashMap<ItemSet, u64>,
}

impl<'a> Counter<'a> {
    /// Validates the relation and modulus once; the search itself does no checks.
    pub fn new(relation: &'a Relation, modulus: u64) -> Result<Self> {
        if modulus == 0 {
            return Err(Error::InvalidModulus);
        }
        relation.check_acyclic()?;
        let n = relation.len();
        let succ = (0..n)
            .map(|i| ItemSet::from_items(n, relation.successors(i).iter().copied()))
            .collect();
        Ok(Self { relation, succ, modulus, cache: AHashMap::new() })
    }

    pub fn with_config(relation: &'a Relation, config: &CounterConfig) -> Result<Self> {
        Self::new(relation, config.modulus)
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Number of distinct visited sets solved so far.
    pub fn cached_states(&self) -> usize {
        self.cache.len()
    }

    /// Linear extensions of the whole relation, mod `modulus`.
    pub fn count(&mut self) -> u64 {
        let mut visited = ItemSet::new(self.relation.len());
        let total = self.count_from(&mut visited);
        tracing::debug!(
            items = self.relation.len(),
            states = self.cache.len(),
            modulus = self.modulus,
            total,
            "counted linear extensions"
        );
        total
    }

    /// Unvisited items that no unvisited item has to precede.
    fn admissible(&self, visited: &ItemSet) -> Vec<usize> {
        let n = self.relation.len();
        let mut posterior = ItemSet::new(n);
        for i in (0..n).filter(|&i| !visited.contains(i)) {
            posterior.union_with(&self.succ[i]);
        }
        (0..n).filter(|&i| !visited.contains(i) && !posterior.contains(i)).collect()
    }

    /// `visited` is restored to its entry state before returning.
    fn count_from(&mut self, visited: &mut ItemSet) -> u64 {
        if let Some(&cached) = self.cache.get(&*visited) {
            return cached;
        }

        let next = self.admissible(visited);
        if next.is_empty() {
            let one = 1 % self.modulus;
            self.cache.insert(visited.clone(), one);
            return one;
        }

        let mut total = 0;
        for item in next {
            visited.insert(item);
            let below = self.count_from(visited);
            visited.remove(item);
            total = self.add(total, below);
        }
        self.cache.insert(visited.clone(), total);
        total
    }

    fn add(&self, a: u64, b: u64) -> u64 {
        ((a as u128 + b as u128) % self.modulus as u128) as u64
    }
}
