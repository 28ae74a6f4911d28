//! antennagraph - 天线网格图引擎
//!
//! 把二维网格上的天线建模为图，支持：
//! - 按坐标唯一的顶点存储与去重的边操作
//! - 同频天线镜像推导反节点
//! - 同频天线两两双向连接
//! - 深度优先 / 广度优先遍历及访问次序
//! - 网格文本、顶点列表文本与二进制边列表读写

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod pipeline;
pub mod report;
pub mod storage;
pub mod types;

// 重导出常用类型
pub use algorithm::{Traversal, TraversalKind, VisitOrder};
pub use config::RunConfig;
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex, VertexId};
pub use storage::LoadDirection;
pub use types::{Coord, EdgeSpec, Frequency};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
