use ordermap::OrderMap;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::{Error, Result};

/// Must-precede relation over items `0..len`.
///
/// `succ[i]` lists every item that has to come after `i`, sorted and without
/// repeats. All indices are in range once a `Relation` exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relation {
    succ: Vec<Vec<usize>>,
}

impl Relation {
    /// Item `i` must precede item `j` when `seqs[i]` occurs inside `seqs[j]`.
    ///
    /// Equal sequences end up requiring each other in both directions. Such
    /// groups are logged here and left for [`Relation::check_acyclic`] to reject.
    pub fn from_sequences<S: AsRef<[u8]>>(seqs: &[S]) -> Result<Self> {
        if seqs.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mut succ = vec![Vec::new(); seqs.len()];
        for (i, inner) in seqs.iter().enumerate() {
            for (j, outer) in seqs.iter().enumerate() {
                if i != j && contains(outer.as_ref(), inner.as_ref()) {
                    succ[i].push(j);
                }
            }
        }
        for group in duplicate_groups(seqs) {
            tracing::warn!(items = ?group, "identical sequences must precede each other");
        }
        let relation = Self { succ };
        tracing::debug!(items = relation.len(), edges = relation.edge_count(), "built relation");
        Ok(relation)
    }

    /// Build from a raw adjacency structure, rejecting out-of-range successors.
    pub fn from_successors(mut succ: Vec<Vec<usize>>) -> Result<Self> {
        let len = succ.len();
        if len == 0 {
            return Err(Error::EmptyInput);
        }
        for (item, row) in succ.iter_mut().enumerate() {
            if let Some(&successor) = row.iter().find(|&&j| j >= len) {
                return Err(Error::InvalidRelation { item, successor, len });
            }
            row.sort_unstable();
            row.dedup();
        }
        Ok(Self { succ })
    }

    pub fn len(&self) -> usize {
        self.succ.len()
    }

    pub fn is_empty(&self) -> bool {
        self.succ.is_empty()
    }

    pub fn successors(&self, item: usize) -> &[usize] {
        &self.succ[item]
    }

    /// Every `(i, j)` with `i` required before `j`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.succ.iter().enumerate().flat_map(|(i, js)| js.iter().map(move |&j| (i, j)))
    }

    pub fn edge_count(&self) -> usize {
        self.succ.iter().map(Vec::len).sum()
    }

    /// One node per item, node index equal to item index.
    pub fn to_graph(&self) -> DiGraph<(), ()> {
        let mut g: DiGraph<(), ()> = DiGraph::with_capacity(self.len(), self.edge_count());
        let nodes: Vec<NodeIndex> = (0..self.len()).map(|_| g.add_node(())).collect();
        for (u, v) in self.edges() {
            g.add_edge(nodes[u], nodes[v], ());
        }
        g
    }

    /// Fails with the first item found on a cycle. Self-edges count as cycles.
    pub fn check_acyclic(&self) -> Result<()> {
        toposort(&self.to_graph(), None)
            .map(|_| ())
            .map_err(|cycle| Error::CyclicRelation { item: cycle.node_id().index() })
    }
}

/// Whether `needle` occurs as a contiguous run of bytes in `haystack`.
fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}

/// Indices of identical sequences, grouped in order of first appearance.
/// Sequences that occur once are left out.
pub fn duplicate_groups<S: AsRef<[u8]>>(seqs: &[S]) -> Vec<Vec<usize>> {
    let mut groups: OrderMap<&[u8], Vec<usize>> = OrderMap::new();
    for (i, s) in seqs.iter().enumerate() {
        groups.entry(s.as_ref()).or_default().push(i);
    }
    groups.into_values().filter(|g| g.len() > 1).collect()
}
