//! 图数据结构
//!
//! 顶点按插入顺序保存在 `IndexMap` 中，对外以最新在前的顺序枚举；
//! 坐标索引保证坐标唯一并让存在性检查为 O(1)。

use super::vertex::{Vertex, VertexId};
use crate::types::{Coord, Frequency};
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::debug;

/// 天线图
#[derive(Debug, Clone)]
pub struct Graph {
    /// 顶点（插入顺序）
    vertices: IndexMap<VertexId, Vertex>,
    /// 坐标到顶点 ID 的映射
    coord_index: HashMap<Coord, VertexId>,
    /// 下一个顶点 ID
    next_vertex_id: u64,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
            coord_index: HashMap::new(),
            next_vertex_id: 1,
        }
    }

    // ==================== 查找 ====================

    /// 按坐标查找顶点
    pub fn find_by_coord(&self, coord: Coord) -> Option<&Vertex> {
        let id = self.coord_index.get(&coord)?;
        self.vertices.get(id)
    }

    /// 按 ID 查找顶点
    pub fn find_by_id(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// 所有顶点，最新插入的在前
    pub fn vertices(&self) -> impl DoubleEndedIterator<Item = &Vertex> + ExactSizeIterator + '_ {
        self.vertices.values().rev()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取边数量（有向）
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::out_degree).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 是否存在 src -> dst 的有向边
    pub fn has_edge(&self, src: Coord, dst: Coord) -> bool {
        match (self.find_by_coord(src), self.find_by_coord(dst)) {
            (Some(s), Some(d)) => s.has_edge_to(d.id()),
            _ => false,
        }
    }

    /// 顶点的邻居（出边指向的顶点），最近插入的边在前
    pub fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        self.find_by_id(id)
            .map(|v| v.edges().map(|e| e.dst()).collect())
            .unwrap_or_default()
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 坐标已被占用时返回已有顶点的 ID 和 `false`，图不变。
    pub fn add_vertex(&mut self, coord: Coord, frequency: impl Into<Frequency>) -> (VertexId, bool) {
        if let Some(&existing) = self.coord_index.get(&coord) {
            return (existing, false);
        }

        let frequency = frequency.into();
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;

        self.coord_index.insert(coord, id);
        self.vertices.insert(id, Vertex::new(id, coord, frequency));
        debug!(id = id.as_u64(), x = coord.x, y = coord.y, freq = %frequency, "添加顶点");

        (id, true)
    }

    /// 删除顶点及所有与之相连的边（两个方向）
    pub fn remove_vertex(&mut self, coord: Coord) -> bool {
        let Some(id) = self.coord_index.remove(&coord) else {
            return false;
        };

        let mut incoming = 0usize;
        for v in self.vertices.values_mut() {
            if v.remove_edge_to(id) {
                incoming += 1;
            }
        }

        // shift_remove 保持其余顶点的相对顺序
        let outgoing = self
            .vertices
            .shift_remove(&id)
            .map(|v| v.out_degree())
            .unwrap_or(0);

        debug!(id = id.as_u64(), x = coord.x, y = coord.y, incoming, outgoing, "删除顶点");
        true
    }

    /// 清空所有顶点和边；ID 计数器不回退
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.coord_index.clear();
    }

    // ==================== 边操作 ====================

    /// 添加有向边 src -> dst
    ///
    /// 任一端点不存在或边已存在时返回 `false`，图不变。
    pub fn add_edge(&mut self, src: Coord, dst: Coord) -> bool {
        let (Some(&src_id), Some(&dst_id)) = (self.coord_index.get(&src), self.coord_index.get(&dst))
        else {
            return false;
        };
        self.add_edge_by_id(src_id, dst_id)
    }

    /// 按 ID 添加有向边
    pub fn add_edge_by_id(&mut self, src: VertexId, dst: VertexId) -> bool {
        if !self.vertices.contains_key(&dst) {
            return false;
        }
        let Some(source) = self.vertices.get_mut(&src) else {
            return false;
        };
        let inserted = source.insert_edge(dst);
        if inserted {
            debug!(src = src.as_u64(), dst = dst.as_u64(), "添加边");
        }
        inserted
    }

    /// 删除 src 与 dst 之间的边（两个方向）
    ///
    /// 至少删除一个方向时返回 `true`。
    pub fn remove_edge(&mut self, src: Coord, dst: Coord) -> bool {
        let (Some(&src_id), Some(&dst_id)) = (self.coord_index.get(&src), self.coord_index.get(&dst))
        else {
            return false;
        };

        let forward = self
            .vertices
            .get_mut(&src_id)
            .map_or(false, |v| v.remove_edge_to(dst_id));
        let backward = self
            .vertices
            .get_mut(&dst_id)
            .map_or(false, |v| v.remove_edge_to(src_id));

        if forward || backward {
            debug!(src = %src, dst = %dst, forward, backward, "删除边");
        }
        forward || backward
    }
}
