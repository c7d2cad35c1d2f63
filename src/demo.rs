//! Demonstration run on the fixed sample tree.

use crate::builder::example_tree;
use crate::render::render;
use crate::stats::{report_lines, Strategy};

pub const HEADING: &str = "Tree structure:";

/// Full demo output: heading, box-drawing listing, blank line, traversal results.
pub fn demo_lines(strategy: Strategy) -> Vec<String> {
    let root = example_tree();

    let mut lines = vec![HEADING.to_string()];
    lines.extend(render(&root));
    lines.push(String::new());
    lines.extend(report_lines(Some(&root), strategy));
    lines
}
