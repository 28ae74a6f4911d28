//! 顶点定义
//!
//! 每个顶点是一根天线：唯一坐标、频率字符和出边列表

use crate::graph::edge::Edge;
use crate::types::{Coord, Frequency};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（单调递增，永不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 顶点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 坐标（图内唯一）
    coord: Coord,
    /// 频率
    frequency: Frequency,
    /// 出边，按插入顺序存放；对外以最新在前的顺序暴露
    edges: Vec<Edge>,
}

impl Vertex {
    /// 创建新顶点（无出边）
    pub fn new(id: VertexId, coord: Coord, frequency: Frequency) -> Self {
        Self {
            id,
            coord,
            frequency,
            edges: Vec::new(),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取坐标
    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn x(&self) -> i32 {
        self.coord.x
    }

    pub fn y(&self) -> i32 {
        self.coord.y
    }

    /// 获取频率
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// 出边，最近插入的在前
    pub fn edges(&self) -> impl DoubleEndedIterator<Item = &Edge> + ExactSizeIterator + '_ {
        self.edges.iter().rev()
    }

    /// 出度
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// 是否存在指向 `dst` 的边
    pub fn has_edge_to(&self, dst: VertexId) -> bool {
        self.edges.iter().any(|e| e.dst() == dst)
    }

    /// 在表头插入一条指向 `dst` 的边；已存在时返回 false
    pub(crate) fn insert_edge(&mut self, dst: VertexId) -> bool {
        if self.has_edge_to(dst) {
            return false;
        }
        self.edges.push(Edge::new(dst));
        true
    }

    /// 删除指向 `dst` 的边
    pub(crate) fn remove_edge_to(&mut self, dst: VertexId) -> bool {
        match self.edges.iter().position(|e| e.dst() == dst) {
            Some(pos) => {
                self.edges.remove(pos);
                true
            }
            None => false,
        }
    }
}
