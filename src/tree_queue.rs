use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::tree::Node;

/// Counts the nodes using a breadth-first traversal.
/// The queue is seeded with the root; each node taken from the front is counted and its
/// children are appended at the back.
#[instrument(level = "debug", skip_all)]
pub fn count_iterative<T>(root: Option<&Node<T>>) -> usize {
    let Some(root) = root else {
        return 0;
    };

    let mut count = 0;
    let mut queue = VecDeque::new();
    queue.push_back(root);

    while let Some(node) = queue.pop_front() {
        count += 1;
        queue.extend(node.children());
    }

    debug!(count, "count_iterative");
    count
}
