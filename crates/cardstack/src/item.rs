use std::fmt::Debug;
use std::hash::Hash;

/// An entry in the deck.
///
/// Identity matches a card against in-flight transitions; equality detects
/// when the host swapped the whole collection.
pub trait CardItem: PartialEq {
    type Id: Eq + Hash + Clone + Debug;

    fn id(&self) -> Self::Id;
}

macro_rules! self_identified {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CardItem for $ty {
                type Id = $ty;

                fn id(&self) -> Self::Id {
                    self.clone()
                }
            }
        )*
    };
}

self_identified!(u8, u16, u32, u64, usize, i32, i64, String, &'static str);
