use crate::{cmp::Comparator, node::Node};

/// A self-balancing (AVL) binary search tree ordered by a caller-supplied
/// three-way [`Comparator`].
///
/// The tree supports insertion and read-only inspection of the root node;
/// there is no lookup, deletion, or iteration surface. Equal-ranked values
/// are kept, not replaced, so the tree behaves as an ordered multiset.
///
/// ```
/// use triavl::{natural_order, AvlTree};
///
/// let mut t = AvlTree::new(natural_order);
/// for v in [1, 2, 3] {
///     t.insert(v);
/// }
///
/// // The ascending run triggered a rotation: 2 is now the root.
/// let root = t.root().unwrap();
/// assert_eq!(*root.value(), 2);
/// assert_eq!(*root.left().unwrap().value(), 1);
/// assert_eq!(*root.right().unwrap().value(), 3);
/// ```
///
/// Inserting a value is a single recursive descent and unwind: O(log n)
/// comparisons, exactly one allocation, and at most two rotations. The tree
/// provides no internal synchronisation; wrap it in a lock for shared
/// mutation.
#[derive(Debug, Clone)]
pub struct AvlTree<T, C> {
    root: Option<Box<Node<T>>>,
    comparator: C,
}

impl<T, C> AvlTree<T, C>
where
    C: Comparator<T>,
{
    /// Construct an empty tree ordered by `comparator`.
    ///
    /// The comparator must be consistent and describe a total preorder for
    /// the lifetime of the tree; see [`Comparator`].
    pub fn new(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
        }
    }

    /// Insert `value` into the tree, rebalancing as needed.
    ///
    /// Values ranked equal by the comparator are retained: the new value is
    /// placed to the left of the existing one.
    pub fn insert(&mut self, value: T) {
        match self.root {
            Some(ref mut v) => v.insert(value, &self.comparator),
            None => self.root = Some(Box::new(Node::new(value))),
        }
    }

    /// The root [`Node`], or [`None`] if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}
