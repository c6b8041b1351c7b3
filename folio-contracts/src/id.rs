use std::fmt::Debug;
use std::hash::Hash;

/// Identifier a navigator can track across sequence changes.
///
/// Navigators only compare identifiers; they never do arithmetic on them.
pub trait ItemIdLike: Copy + Eq + Hash + Debug {}

impl<T> ItemIdLike for T where T: Copy + Eq + Hash + Debug {}
