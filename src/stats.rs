//! Aggregated traversal results and their labeled report lines.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::tree::{count_recursive, depth_recursive, sum_recursive, Node, Total};
use crate::tree_queue::count_iterative;
use crate::tree_stack::{depth_iterative, sum_iterative};

/// Family of algorithms used to walk a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Call-stack recursion
    Recursive,
    /// Explicit queue (count) or stack (sum, depth)
    Iterative,
}

impl Traversal {
    pub fn label(self) -> &'static str {
        match self {
            Traversal::Recursive => "recursive",
            Traversal::Iterative => "iterative",
        }
    }
}

/// Which traversal families a report includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Both,
    Recursive,
    Iterative,
}

impl Strategy {
    pub fn traversals(self) -> &'static [Traversal] {
        match self {
            Strategy::Both => &[Traversal::Recursive, Traversal::Iterative],
            Strategy::Recursive => &[Traversal::Recursive],
            Strategy::Iterative => &[Traversal::Iterative],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub count: usize,
    pub sum: Total,
    pub depth: usize,
}

impl TreeStats {
    #[instrument(level = "debug", skip(root))]
    pub fn collect<T>(root: Option<&Node<T>>, traversal: Traversal) -> Self
    where
        T: Copy + Into<Total>,
    {
        match traversal {
            Traversal::Recursive => Self {
                count: count_recursive(root),
                sum: sum_recursive(root),
                depth: depth_recursive(root),
            },
            Traversal::Iterative => Self {
                count: count_iterative(root),
                sum: sum_iterative(root),
                depth: depth_iterative(root),
            },
        }
    }
}

/// Labeled result lines: node count, value sum, depth; recursive before iterative.
pub fn report_lines<T>(root: Option<&Node<T>>, strategy: Strategy) -> Vec<String>
where
    T: Copy + Into<Total>,
{
    let stats: Vec<(Traversal, TreeStats)> = strategy
        .traversals()
        .iter()
        .map(|&t| (t, TreeStats::collect(root, t)))
        .collect();

    let mut lines = Vec::with_capacity(stats.len() * 3);
    for (t, s) in &stats {
        lines.push(format!("Number of nodes ({}): {}", t.label(), s.count));
    }
    for (t, s) in &stats {
        lines.push(format!("Sum of node values ({}): {}", t.label(), s.sum));
    }
    for (t, s) in &stats {
        lines.push(format!("Tree depth ({}): {}", t.label(), s.depth));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_agrees_across_traversals() {
        let root = Node::new(3u32)
            .with_child(Node::new(4).with_child(Node::new(5)))
            .with_child(Node::new(6));
        let recursive = TreeStats::collect(Some(&root), Traversal::Recursive);
        let iterative = TreeStats::collect(Some(&root), Traversal::Iterative);
        assert_eq!(recursive, iterative);
        assert_eq!(
            recursive,
            TreeStats {
                count: 4,
                sum: 18,
                depth: 3
            }
        );
    }

    #[test]
    fn test_report_lines_single_strategy() {
        let root = Node::new(9i64);
        assert_eq!(
            report_lines(Some(&root), Strategy::Iterative),
            vec![
                "Number of nodes (iterative): 1",
                "Sum of node values (iterative): 9",
                "Tree depth (iterative): 1",
            ]
        );
    }

    #[test]
    fn test_report_lines_absent_tree_are_zero() {
        let lines = report_lines::<i64>(None, Strategy::Both);
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| l.ends_with(": 0")));
    }
}
