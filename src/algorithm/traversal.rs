//! 图遍历
//!
//! 深度优先与广度优先遍历。每次遍历都创建新的 [`VisitOrder`]，
//! 时钟从 1 开始，为每个可达顶点记录被发现的次序。

use crate::error::Error;
use crate::graph::{Graph, VertexId};
use crate::types::Coord;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// 遍历方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraversalKind {
    /// 深度优先
    #[serde(rename = "dfs")]
    DepthFirst,
    /// 广度优先
    #[serde(rename = "bfs")]
    BreadthFirst,
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalKind::DepthFirst => write!(f, "dfs"),
            TraversalKind::BreadthFirst => write!(f, "bfs"),
        }
    }
}

impl FromStr for TraversalKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dfs" | "depth" | "depth-first" => Ok(TraversalKind::DepthFirst),
            "bfs" | "breadth" | "breadth-first" => Ok(TraversalKind::BreadthFirst),
            other => Err(Error::ParseError(format!("未知的遍历方式: {}", other))),
        }
    }
}

/// 一次遍历的访问次序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitOrder {
    /// 下一个要分配的次序
    clock: u32,
    /// 顶点 -> 次序（从 1 开始）
    stamps: HashMap<VertexId, u32>,
}

impl Default for VisitOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl VisitOrder {
    pub fn new() -> Self {
        Self {
            clock: 1,
            stamps: HashMap::new(),
        }
    }

    fn stamp(&mut self, id: VertexId) -> u32 {
        let rank = self.clock;
        self.stamps.insert(id, rank);
        self.clock += 1;
        rank
    }

    /// 顶点的访问次序；未访问时为 `None`
    pub fn rank(&self, id: VertexId) -> Option<u32> {
        self.stamps.get(&id).copied()
    }

    pub fn is_visited(&self, id: VertexId) -> bool {
        self.stamps.contains_key(&id)
    }

    /// 已访问顶点数
    pub fn visited_count(&self) -> usize {
        self.stamps.len()
    }

    /// 按访问次序排列的顶点
    pub fn sequence(&self) -> Vec<VertexId> {
        let mut seq: Vec<(u32, VertexId)> = self.stamps.iter().map(|(&id, &r)| (r, id)).collect();
        seq.sort_unstable();
        seq.into_iter().map(|(_, id)| id).collect()
    }
}

/// 遍历器
pub struct Traversal<'g> {
    graph: &'g Graph,
}

impl<'g> Traversal<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// 按指定方式从 `start` 开始遍历；起点不存在时返回 `None`
    pub fn run(&self, kind: TraversalKind, start: Coord) -> Option<VisitOrder> {
        let order = match kind {
            TraversalKind::DepthFirst => self.depth_first(start),
            TraversalKind::BreadthFirst => self.breadth_first(start),
        }?;
        info!(kind = %kind, start = %start, visited = order.visited_count(), "遍历完成");
        Some(order)
    }

    /// 深度优先遍历
    ///
    /// 使用显式栈，访问顺序与递归前序一致：最近插入的边先走。
    pub fn depth_first(&self, start: Coord) -> Option<VisitOrder> {
        let seed = self.graph.find_by_coord(start)?;
        let mut order = VisitOrder::new();
        let mut stack = vec![seed.id()];

        while let Some(id) = stack.pop() {
            if order.is_visited(id) {
                continue;
            }
            order.stamp(id);
            if let Some(vertex) = self.graph.find_by_id(id) {
                // 按插入顺序压栈，表头的边最后入栈、最先弹出
                stack.extend(
                    vertex
                        .edges()
                        .rev()
                        .map(|e| e.dst())
                        .filter(|dst| !order.is_visited(*dst)),
                );
            }
        }

        Some(order)
    }

    /// 广度优先遍历
    pub fn breadth_first(&self, start: Coord) -> Option<VisitOrder> {
        let seed = self.graph.find_by_coord(start)?;
        let mut order = VisitOrder::new();
        let mut queue = VecDeque::new();

        order.stamp(seed.id());
        queue.push_back(seed.id());

        while let Some(current) = queue.pop_front() {
            for neighbor in self.graph.neighbors(current) {
                if !order.is_visited(neighbor) {
                    order.stamp(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }

        Some(order)
    }
}
