use crate::cmp::{Comparator, ComparisonResult};

/// A single tree node: one stored value plus cached AVL bookkeeping.
///
/// A [`Node`] exclusively owns its children; there is no stored parent
/// back-reference. Metadata propagation towards the root is the natural
/// unwind of the recursive insert, which revalidates every node on the
/// insertion path exactly once, so no back-link (and no reference cycle) is
/// ever needed.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Child node pointers.
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// The node's AVL height.
    ///
    /// A lone leaf has a height of 1; an absent child counts as height 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the
    /// height of a balanced tree of more than 10⁵³ entries.
    height: u8,

    /// The cached balance factor: height of the right subtree minus height
    /// of the left subtree.
    ///
    /// In the range `-1..=1` whenever a public operation has completed; ±2
    /// transiently during an insert unwind, triggering a rotation.
    balance: i8,

    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
            balance: 0,
        }
    }

    /// Insert `value` into the subtree rooted at `self`, restoring the AVL
    /// invariant on unwind.
    ///
    /// The comparator picks the descent direction at every node:
    /// [`ComparisonResult::Ordered`] and [`ComparisonResult::Equal`] descend
    /// left, [`ComparisonResult::Unordered`] descends right. Equal values are
    /// therefore never replaced - they accumulate to the left of the
    /// first-inserted equal node.
    pub(crate) fn insert<C>(self: &mut Box<Self>, value: T, comparator: &C)
    where
        C: Comparator<T>,
    {
        let child = match comparator.compare(&value, &self.value) {
            ComparisonResult::Ordered | ComparisonResult::Equal => &mut self.left,
            ComparisonResult::Unordered => &mut self.right,
        };

        match child {
            Some(v) => v.insert(value, comparator),
            None => {
                // Insert the value as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(value)));

                // Attaching a leaf to an empty slot moves this node at most
                // one step away from level (from level, or from a skew in
                // the opposite direction), so no rebalancing check is needed
                // here.
                self.revalidate();
                return;
            }
        }

        // Recompute this node's cached height and balance factor now that
        // the chosen subtree has changed underneath it.
        self.revalidate();

        // Correct the subtree rooted at self if the absolute difference in
        // height between its branches has grown beyond 1.
        match (self.balance, self.left(), self.right()) {
            // Right-heavy
            (2, _, Some(r)) if r.balance < 0 => {
                // Right-Left: straighten the right child first.
                rotate_right(self.right_mut().unwrap());
                rotate_left(self);
            }
            (2, _, Some(_r)) => {
                // Right-Right.
                rotate_left(self);
            }
            // Left-heavy
            (-2, Some(l), _) if l.balance > 0 => {
                // Left-Right: straighten the left child first.
                rotate_left(self.left_mut().unwrap());
                rotate_right(self);
            }
            (-2, Some(_l), _) => {
                // Left-Left.
                rotate_right(self);
            }
            (-1..=1, _, _) => { /* The tree is well balanced */ }
            _ => unreachable!(),
        }

        // Invariant: the balance factor cannot exceed 1 in magnitude once an
        // insert has returned.
        debug_assert!(self.balance.abs() <= 1);
    }

    /// Replace the left child slot and revalidate this node's metadata.
    pub(crate) fn attach_left(&mut self, child: Option<Box<Self>>) {
        self.left = child;
        self.revalidate();
    }

    /// Replace the right child slot and revalidate this node's metadata.
    pub(crate) fn attach_right(&mut self, child: Option<Box<Self>>) {
        self.right = child;
        self.revalidate();
    }

    /// Recompute the cached height and balance factor from the immediate
    /// children.
    ///
    /// Every structural mutation goes through an attach call (and the insert
    /// unwind revalidates each node on the path), so the cached values are
    /// never stale by the time a public operation returns.
    fn revalidate(&mut self) {
        let left = height(self.left());
        let right = height(self.right());

        self.height = left.max(right) + 1;

        // Correctness: a height is a u8, the maximal value of which fits in
        // an i16 without truncation or sign inversion. The difference never
        // exceeds 2 in magnitude mid-insert, so the narrowing to i8 is
        // lossless.
        self.balance = (right as i16 - left as i16) as i8;
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The height of the subtree rooted at this node.
    ///
    /// A lone leaf has a height of 1.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The balance factor of this node: right subtree height minus left
    /// subtree height.
    ///
    /// Always in the range `-1..=1` by the time a public operation has
    /// returned.
    pub fn balance(&self) -> i8 {
        self.balance
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Box<Self>> {
        self.left.as_mut()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Box<Self>> {
        self.right.as_mut()
    }
}

fn height<T>(n: Option<&Node<T>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// O(1) pointer surgery; child reattachment goes through the attach methods,
/// which keep the cached heights and balance factors of the two rewired
/// nodes exact. No allocation.
///
/// Rotations are only dispatched when the balance factor proves the pivot
/// exists; a missing pivot leaves the subtree untouched and indicates an
/// invariant violation upstream.
fn rotate_left<T>(x: &mut Box<Node<T>>) {
    let Some(mut p) = x.right.take() else {
        debug_assert!(false, "left rotation pivot missing");
        return;
    };
    std::mem::swap(x, &mut p);

    let inner = x.left.take();
    p.attach_right(inner);
    x.attach_left(Some(p));
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// The mirror of [`rotate_left`].
fn rotate_right<T>(y: &mut Box<Node<T>>) {
    let Some(mut p) = y.left.take() else {
        debug_assert!(false, "right rotation pivot missing");
        return;
    };
    std::mem::swap(y, &mut p);

    let inner = y.right.take();
    p.attach_left(inner);
    y.attach_right(Some(p));
}
