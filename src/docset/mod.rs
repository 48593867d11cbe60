pub mod bits;
pub mod sorted;

use crate::docset::bits::BitDocSet;
use crate::docset::sorted::SortedDocSet;

/// Document set representation selected from the caller's base format tag
/// Matched once per call; the per-document loops stay monomorphic
pub enum DocSetRef<'a> {
    Bits(BitDocSet<'a>),
    Sorted(SortedDocSet<'a>),
}
