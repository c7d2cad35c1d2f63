//! Box-drawing tree listing.
//!
//! ```text
//! └── 10
//!     ├── 5
//!     └── 20
//!         └── 15
//! ```
//!
//! Rendering produces lines instead of printing them, so callers decide where the
//! output goes and tests compare against literal strings.

use std::fmt::Display;

use itertools::{Itertools, Position};
use tracing::instrument;

use crate::tree::Node;

/// Connector in front of the last child (and the root).
pub const LAST_BRANCH: &str = "└── ";
/// Connector in front of every other child.
pub const MID_BRANCH: &str = "├── ";
/// Prefix extension below a last child.
pub const LAST_INDENT: &str = "    ";
/// Prefix extension below any other child, continuing the sibling line.
pub const MID_INDENT: &str = "│   ";

/// Renders the tree rooted at `root`, one line per node in pre-order.
#[instrument(level = "debug", skip_all)]
pub fn render<T: Display>(root: &Node<T>) -> Vec<String> {
    render_lines(root, "", true)
}

/// Renders `node` as if it were placed below `prefix`, as last sibling when `is_last`.
pub fn render_lines<T: Display>(node: &Node<T>, prefix: &str, is_last: bool) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(node, prefix, is_last, &mut lines);
    lines
}

fn render_into<T: Display>(node: &Node<T>, prefix: &str, is_last: bool, lines: &mut Vec<String>) {
    let connector = if is_last { LAST_BRANCH } else { MID_BRANCH };
    lines.push(format!("{prefix}{connector}{}", node.value()));

    let child_prefix = format!("{prefix}{}", if is_last { LAST_INDENT } else { MID_INDENT });
    for (position, child) in node.children().iter().with_position() {
        let last = matches!(position, Position::Last | Position::Only);
        render_into(child, &child_prefix, last, lines);
    }
}
