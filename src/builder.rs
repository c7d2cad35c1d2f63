use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::tree::Node;

/// Families of generated trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Fixed sample: 10 with children 5 and 20, and 15 below 20
    #[default]
    Example,
    /// `size` nodes, each with exactly one child except the last
    Chain,
    /// Root with `size` leaf children
    Fan,
    /// Full tree of depth `size`, every inner node has `branching` children
    Complete,
}

impl Shape {
    pub fn name(self) -> &'static str {
        match self {
            Shape::Example => "example",
            Shape::Chain => "chain",
            Shape::Fan => "fan",
            Shape::Complete => "complete",
        }
    }
}

/// The fixed sample tree.
///
/// ```text
/// └── 10
///     ├── 5
///     └── 20
///         └── 15
/// ```
pub fn example_tree() -> Node<i64> {
    let mut root = Node::new(10);
    let child1 = Node::new(5);
    let mut child2 = Node::new(20);
    let child3 = Node::new(15);

    child2.add_child(child3);
    root.add_child(child1);
    root.add_child(child2);
    root
}

/// Linked-list shaped tree with values `1..=n` from the root down; `None` for `n == 0`.
///
/// Built bottom-up so no recursion is involved.
pub fn chain(n: usize) -> Option<Node<i64>> {
    (1..=n as i64).rev().fold(None, |below, value| {
        let mut node = Node::new(value);
        if let Some(child) = below {
            node.add_child(child);
        }
        Some(node)
    })
}

/// Root `0` with leaves `1..=n`.
pub fn fan(n: usize) -> Node<i64> {
    Node::new(0).with_children((1..=n as i64).map(Node::new))
}

/// Full tree of the given depth; values are assigned in pre-order starting at 1.
/// `None` for `depth == 0`.
pub fn complete(depth: usize, branching: usize) -> Option<Node<i64>> {
    fn grow(level: usize, depth: usize, branching: usize, next: &mut i64) -> Node<i64> {
        let mut node = Node::new(*next);
        *next += 1;
        if level < depth {
            for _ in 0..branching {
                node.add_child(grow(level + 1, depth, branching, next));
            }
        }
        node
    }

    if depth == 0 {
        return None;
    }
    let mut next = 1;
    Some(grow(1, depth, branching, &mut next))
}

/// Builds trees of a [`Shape`] while enforcing node and depth limits.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    shape: Shape,
    size: usize,
    branching: usize,
    max_nodes: usize,
    max_depth: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(Shape::default())
    }
}

impl TreeBuilder {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            size: 3,
            branching: 2,
            max_nodes: usize::MAX,
            max_depth: usize::MAX,
        }
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn branching(mut self, branching: usize) -> Self {
        self.branching = branching;
        self
    }

    pub fn max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Recursive traversals, `render` and `Drop` use one stack frame per level.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Depth of the tree `build` would create.
    pub fn planned_depth(&self) -> usize {
        match self.shape {
            Shape::Example => 3,
            Shape::Fan if self.size == 0 => 1,
            Shape::Fan => 2,
            Shape::Chain => self.size,
            Shape::Complete if self.branching == 0 => self.size.min(1),
            Shape::Complete => self.size,
        }
    }

    /// Number of nodes `build` would create, `None` on arithmetic overflow.
    pub fn planned_nodes(&self) -> Option<usize> {
        match self.shape {
            Shape::Example => Some(4),
            Shape::Chain => Some(self.size),
            Shape::Fan => self.size.checked_add(1),
            Shape::Complete => {
                // 1 + b + b^2 + ... + b^(depth-1)
                let mut total: usize = 0;
                let mut level: usize = 1;
                for i in 0..self.size {
                    if i > 0 {
                        level = level.checked_mul(self.branching)?;
                    }
                    total = total.checked_add(level)?;
                    if level == 0 {
                        break;
                    }
                }
                Some(total)
            }
        }
    }

    #[instrument(level = "debug", skip(self), fields(shape = self.shape.name(), size = self.size))]
    pub fn build(&self) -> TreeResult<Option<Node<i64>>> {
        let requested = self.planned_nodes().ok_or_else(|| TreeError::SizeOverflow {
            shape: self.shape.name().to_string(),
        })?;
        if requested > self.max_nodes {
            return Err(TreeError::TooLarge {
                requested,
                limit: self.max_nodes,
            });
        }
        let depth = self.planned_depth();
        if depth > self.max_depth {
            return Err(TreeError::TooDeep {
                requested: depth,
                limit: self.max_depth,
            });
        }
        debug!(requested, depth, "building tree");

        let tree = match self.shape {
            Shape::Example => Some(example_tree()),
            Shape::Chain => chain(self.size),
            Shape::Fan => Some(fan(self.size)),
            Shape::Complete => complete(self.size, self.branching),
        };
        Ok(tree)
    }
}
