//! 图算法模块
//!
//! 包含反节点推导、同频连接和深度/广度优先遍历

mod antinode;
mod linker;
mod traversal;

pub use antinode::{antinode_pair, deduce_antinodes};
pub use linker::link_same_frequency;
pub use traversal::{Traversal, TraversalKind, VisitOrder};
