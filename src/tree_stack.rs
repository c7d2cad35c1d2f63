/*
Stack based traversals.

The call stack of the recursive versions in `tree.rs` is replaced by an explicit `Vec` used as LIFO:
the walk pops one node, handles it and pushes its children. Children pushed last are popped first,
so siblings are visited right-to-left. Summation and maximum do not depend on the visiting order.

For depth, every stack entry carries the depth of its node, which takes over the role of the
recursion level.
 */
use tracing::{debug, instrument};

use crate::tree::{Node, Total};

/// Sum of all values, walking the tree with an explicit stack.
#[instrument(level = "debug", skip_all)]
pub fn sum_iterative<T>(root: Option<&Node<T>>) -> Total
where
    T: Copy + Into<Total>,
{
    let Some(root) = root else {
        return 0;
    };

    let mut sum: Total = 0;
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        sum += (*node.value()).into();
        stack.extend(node.children());
    }

    debug!(%sum, "sum_iterative");
    sum
}

/// Height of the tree, walking it with an explicit stack of `(node, depth)` pairs.
#[instrument(level = "debug", skip_all)]
pub fn depth_iterative<T>(root: Option<&Node<T>>) -> usize {
    let Some(root) = root else {
        return 0;
    };

    let mut max_depth = 0;
    let mut stack = vec![(root, 1)]; // (node, depth)

    while let Some((node, depth)) = stack.pop() {
        if depth > max_depth {
            max_depth = depth;
        }
        for child in node.children() {
            stack.push((child, depth + 1));
        }
    }

    debug!(max_depth, "depth_iterative");
    max_depth
}
