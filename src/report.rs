use std::borrow::Cow;

use serde::Serialize;

use crate::relation::Relation;

/// Structured result of one run, printed by `--json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub count: u64,
    pub modulus: u64,
    pub cached_states: usize,
    pub items: Vec<ItemReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ItemReport<'a> {
    pub index: usize,
    /// Invalid UTF-8 bytes are shown as U+FFFD.
    pub sequence: Cow<'a, str>,
    /// Items this one must precede.
    pub successors: &'a [usize],
}

impl<'a> Report<'a> {
    pub fn new<S: AsRef<[u8]>>(
        seqs: &'a [S],
        relation: &'a Relation,
        count: u64,
        modulus: u64,
        cached_states: usize,
    ) -> Self {
        let items = seqs
            .iter()
            .enumerate()
            .map(|(index, s)| ItemReport {
                index,
                sequence: String::from_utf8_lossy(s.as_ref()),
                successors: relation.successors(index),
            })
            .collect();
        Self { count, modulus, cached_states, items }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
