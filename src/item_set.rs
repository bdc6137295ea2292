const WORD_BITS: usize = u64::BITS as usize;

/// A set of item indices backed by a fixed number of `u64` words.
///
/// Two sets compare (and hash) equal when they hold the same items, no matter
/// in which order the items were inserted. The word count is fixed at
/// construction, so sets built for the same universe are directly comparable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ItemSet {
    words: Box<[u64]>,
}

impl ItemSet {
    /// An empty set able to hold items `0..universe`.
    pub fn new(universe: usize) -> Self {
        Self { words: vec![0; universe.div_ceil(WORD_BITS)].into_boxed_slice() }
    }

    pub fn from_items(universe: usize, items: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::new(universe);
        for i in items {
            set.insert(i);
        }
        set
    }

    /// Returns `true` if the item was not yet present.
    pub fn insert(&mut self, item: usize) -> bool {
        let (w, mask) = Self::locate(item);
        let absent = self.words[w] & mask == 0;
        self.words[w] |= mask;
        absent
    }

    /// Returns `true` if the item was present.
    pub fn remove(&mut self, item: usize) -> bool {
        let (w, mask) = Self::locate(item);
        let present = self.words[w] & mask != 0;
        self.words[w] &= !mask;
        present
    }

    pub fn contains(&self, item: usize) -> bool {
        let (w, mask) = Self::locate(item);
        self.words.get(w).is_some_and(|word| word & mask != 0)
    }

    pub fn union_with(&mut self, other: &ItemSet) {
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            *a |= b;
        }
    }

    fn locate(item: usize) -> (usize, u64) {
        (item / WORD_BITS, 1u64 << (item % WORD_BITS))
    }
}
