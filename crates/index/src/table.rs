use fxhash::FxBuildHasher;
use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

use hashing::SequenceHash;

use crate::document::DocumentId;

/// Append-only mapping from a sequence hash to the document that first
/// produced it.
///
/// Insertion is first-write-wins: once a hash is present, later inserts of the
/// same hash are ignored, whichever document they come from. Keys are already
/// well-mixed 64-bit values, so the cheap Fx hasher is enough.
#[derive(Debug, Clone, Default)]
pub struct HashIndex {
    entries: HashMap<SequenceHash, DocumentId, FxBuildHasher>,
}

impl HashIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `hash → document` unless `hash` is already present.
    ///
    /// Returns `true` if the entry was inserted.
    pub fn insert_if_absent(&mut self, hash: SequenceHash, document: DocumentId) -> bool {
        match self.entries.entry(hash) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(document);
                true
            }
        }
    }

    pub fn get(&self, hash: SequenceHash) -> Option<DocumentId> {
        self.entries.get(&hash).copied()
    }

    pub fn contains(&self, hash: SequenceHash) -> bool {
        self.entries.contains_key(&hash)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
