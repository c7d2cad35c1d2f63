//! Generic (N-ary) tree with paired traversals.
//!
//! Node counting, value summation and depth each come twice: once recursive
//! (`tree`), once with an explicit container replacing the call stack
//! (`tree_queue` for counting, `tree_stack` for sum and depth).

pub mod builder;
pub mod cli;
pub mod config;
pub mod demo;
pub mod errors;
pub mod exitcode;
pub mod render;
pub mod stats;
pub mod tree;
mod tree_queue;
mod tree_stack;
pub mod tree_traits;
pub mod util;

pub use render::{render, render_lines};
pub use tree::{count_recursive, depth_recursive, sum_recursive, Node, Total};
pub use tree_queue::count_iterative;
pub use tree_stack::{depth_iterative, sum_iterative};
