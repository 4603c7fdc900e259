use std::cmp::Ordering;

/// The outcome of comparing a candidate value against a value already stored
/// in the tree.
///
/// A [`ComparisonResult`] is a strict three-way result, deliberately distinct
/// from a numeric delta or [`Ordering`]: the variant alone decides the
/// insertion side, with no magnitude to misinterpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonResult {
    /// The candidate is ordered before the existing value.
    Ordered,

    /// The candidate ranks equal to the existing value.
    Equal,

    /// The candidate is ordered after the existing value.
    Unordered,
}

/// A total, three-way ordering over `T` supplied by the caller.
///
/// The comparator drives the descent direction of every insert: `Ordered` and
/// `Equal` descend left, `Unordered` descends right. Because equal values go
/// left, the tree behaves as an ordered multiset - equal-ranked values chain
/// down the left of the first-inserted equal node rather than replacing it.
///
/// A comparator must be consistent (the same inputs always produce the same
/// result) and correspond to a total preorder. This is a precondition, not a
/// runtime-checked property: an inconsistent comparator yields an unspecified
/// (but still structurally sound) tree shape.
///
/// Implemented for any `Fn(&T, &T) -> ComparisonResult`, so a plain closure
/// or fn item works:
///
/// ```
/// use triavl::{AvlTree, ComparisonResult};
///
/// let mut t = AvlTree::new(|a: &u32, b: &u32| match a.cmp(b) {
///     std::cmp::Ordering::Less => ComparisonResult::Ordered,
///     std::cmp::Ordering::Equal => ComparisonResult::Equal,
///     std::cmp::Ordering::Greater => ComparisonResult::Unordered,
/// });
///
/// t.insert(42);
/// ```
pub trait Comparator<T> {
    /// Rank `candidate` against `existing`, an element already in the tree.
    fn compare(&self, candidate: &T, existing: &T) -> ComparisonResult;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> ComparisonResult,
{
    fn compare(&self, candidate: &T, existing: &T) -> ComparisonResult {
        self(candidate, existing)
    }
}

/// An ascending [`Comparator`] for any [`Ord`] type.
///
/// ```
/// use triavl::{natural_order, AvlTree};
///
/// let mut t = AvlTree::new(natural_order);
/// t.insert("bananas");
/// ```
pub fn natural_order<T>(candidate: &T, existing: &T) -> ComparisonResult
where
    T: Ord,
{
    match candidate.cmp(existing) {
        Ordering::Less => ComparisonResult::Ordered,
        Ordering::Equal => ComparisonResult::Equal,
        Ordering::Greater => ComparisonResult::Unordered,
    }
}
