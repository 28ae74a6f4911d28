//! 报表
//!
//! 天线列表（含邻接表）和遍历访问次序，均按顶点列表顺序输出

use crate::algorithm::{TraversalKind, VisitOrder};
use crate::graph::Graph;
use crate::types::{Coord, Frequency};
use serde::Serialize;

/// 邻接表中的一个目标
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborRef {
    pub coord: Coord,
    pub frequency: Frequency,
}

/// 天线列表中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AntennaRow {
    pub coord: Coord,
    pub frequency: Frequency,
    /// 出边目标，最近插入的在前
    pub neighbors: Vec<NeighborRef>,
}

/// 访问次序中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitRow {
    pub coord: Coord,
    pub frequency: Frequency,
    pub order: u32,
}

/// 一次遍历的报表；起点不存在时 `visits` 为 `None`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalReport {
    pub kind: TraversalKind,
    pub start: Coord,
    pub visits: Option<Vec<VisitRow>>,
}

/// 矩阵渲染结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixReport {
    Rendered(String),
    /// 坐标范围过大，未渲染
    Omitted,
}

impl From<Option<String>> for MatrixReport {
    fn from(rendered: Option<String>) -> Self {
        rendered.map_or(MatrixReport::Omitted, MatrixReport::Rendered)
    }
}

/// 一次完整运行的报表
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub vertices: usize,
    pub edges: usize,
    pub antinodes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antennas: Option<Vec<AntennaRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<MatrixReport>,
    pub traversals: Vec<TraversalReport>,
}

/// 所有天线及其连接；行数即天线总数
pub fn antenna_report(graph: &Graph) -> Vec<AntennaRow> {
    graph
        .vertices()
        .map(|v| AntennaRow {
            coord: v.coord(),
            frequency: v.frequency(),
            neighbors: v
                .edges()
                .filter_map(|e| graph.find_by_id(e.dst()))
                .map(|d| NeighborRef {
                    coord: d.coord(),
                    frequency: d.frequency(),
                })
                .collect(),
        })
        .collect()
}

/// 被访问过的顶点及其次序（列表顺序，不按次序排序）
pub fn visit_report(graph: &Graph, order: &VisitOrder) -> Vec<VisitRow> {
    graph
        .vertices()
        .filter_map(|v| {
            order.rank(v.id()).map(|rank| VisitRow {
                coord: v.coord(),
                frequency: v.frequency(),
                order: rank,
            })
        })
        .collect()
}
