//! Hash collections used by the runtime.
//!
//! Index-keyed maps are small and hot, so the Fx hasher is the default. The
//! `std-hash` feature swaps in the SipHash-backed std maps.

#[cfg(feature = "std-hash")]
pub mod map {
    pub use std::collections::hash_map::Entry;
    pub use std::collections::{HashMap, HashSet};
}

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
    pub use std::collections::hash_map::Entry;
}

/// Map keyed by a card's position in the collection.
pub type IndexMap<V> = map::HashMap<usize, V>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_map_upserts_by_position() {
        let mut map: IndexMap<&str> = IndexMap::default();
        map.insert(3, "leaving");
        match map.entry(3) {
            map::Entry::Occupied(mut slot) => {
                slot.insert("incoming");
            }
            map::Entry::Vacant(_) => unreachable!("slot 3 was just inserted"),
        }
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&3), Some(&"incoming"));
    }
}
