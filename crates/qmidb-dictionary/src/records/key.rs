//! Composite keys.

use std::fmt;

/// A key made of an owner id and a sub-id, displayed as `id.sub`.
///
/// Struct fragments are keyed by `(struct id, order)` and enum entries by
/// `(enum id, value)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    pub id: i64,
    pub sub: i64,
}

impl PairKey {
    #[inline]
    pub const fn new(id: i64, sub: i64) -> Self {
        Self { id, sub }
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.id, self.sub)
    }
}
