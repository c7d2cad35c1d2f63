/*
Conversion into `termtree::Tree` for the compact listing.

Unlike `render`, termtree prints the root without a connector:
10
├── 5
└── 20
    └── 15
 */
use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use crate::tree::Node;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeNodeConvert for Node<T> {
    #[instrument(level = "trace", skip_all)]
    fn to_tree_string(&self) -> Tree<String> {
        // Recursively construct the children
        let leaves: Vec<_> = self.children().iter().map(|c| c.to_tree_string()).collect();

        Tree::new(self.value().to_string()).with_leaves(leaves)
    }
}
