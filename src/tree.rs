use std::fmt;

use tracing::instrument;

/// Accumulator used for value sums.
///
/// Every supported value type widens into it, so summing a large tree of
/// `i64` values does not overflow.
pub type Total = i128;

/// Node of a generic (N-ary) tree.
///
/// A node owns its children. Children are only ever appended, so the
/// structure stays acyclic and the insertion order of siblings is stable.
/// Dropping the root drops the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    children: Vec<Node<T>>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Appends `child` as the last child, taking ownership of its subtree.
    pub fn add_child(&mut self, child: Node<T>) {
        self.children.push(child);
    }

    /// Builder-style variant of [`Node::add_child`].
    pub fn with_child(mut self, child: Node<T>) -> Self {
        self.add_child(child);
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Node<T>>,
    {
        self.children.extend(children);
        self
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Number of nodes below and including `root`, post-order via the call stack.
#[instrument(level = "debug", skip_all)]
pub fn count_recursive<T>(root: Option<&Node<T>>) -> usize {
    root.map_or(0, count_node)
}

fn count_node<T>(node: &Node<T>) -> usize {
    1 + node.children.iter().map(count_node).sum::<usize>()
}

/// Sum of all values below and including `root`, post-order via the call stack.
#[instrument(level = "debug", skip_all)]
pub fn sum_recursive<T>(root: Option<&Node<T>>) -> Total
where
    T: Copy + Into<Total>,
{
    root.map_or(0, sum_node)
}

fn sum_node<T>(node: &Node<T>) -> Total
where
    T: Copy + Into<Total>,
{
    node.value.into() + node.children.iter().map(sum_node).sum::<Total>()
}

/// Height of the tree in nodes: 0 for an absent tree, 1 for a leaf.
#[instrument(level = "debug", skip_all)]
pub fn depth_recursive<T>(root: Option<&Node<T>>) -> usize {
    root.map_or(0, depth_node)
}

fn depth_node<T>(node: &Node<T>) -> usize {
    1 + node.children.iter().map(depth_node).max().unwrap_or(0)
}
