//! 运行流程
//!
//! 按 [`RunConfig`] 依次执行：读取网格 → 推导反节点 → 同频连接 →
//! 读取边列表 → 删除指定的边 → 保存边列表 → 遍历 → 保存顶点列表。

use crate::algorithm::{deduce_antinodes, link_same_frequency, Traversal, TraversalKind, VisitOrder};
use crate::config::RunConfig;
use crate::error::Result;
use crate::graph::Graph;
use crate::report::{antenna_report, visit_report, MatrixReport, RunReport, TraversalReport};
use crate::storage::{
    read_edge_list, read_grid, render_matrix, write_edge_list, write_vertex_list, LoadStats,
};
use tracing::{info, warn};

/// 一次遍历的结果；起点不存在时 `order` 为 `None`
#[derive(Debug, Clone)]
pub struct TraversalOutcome {
    pub kind: TraversalKind,
    pub order: Option<VisitOrder>,
}

/// 运行结果
#[derive(Debug)]
pub struct RunOutcome {
    pub graph: Graph,
    /// 读取网格后的顶点数
    pub antennas: usize,
    /// 新建的反节点数
    pub antinodes: usize,
    /// 同频连接是否新建了边
    pub linked: bool,
    pub loaded: Option<LoadStats>,
    /// 实际删除的边对数
    pub removed_edges: usize,
    /// 写出的边记录数
    pub edges_written: Option<usize>,
    pub traversals: Vec<TraversalOutcome>,
}

/// 执行完整流程
pub fn run(config: &RunConfig) -> Result<RunOutcome> {
    let mut graph = read_grid(&config.grid)?;
    let antennas = graph.vertex_count();

    let mut antinodes = 0;
    if config.deduce {
        deduce_antinodes(&mut graph);
        antinodes = graph.vertex_count() - antennas;
    }

    let linked = config.link && link_same_frequency(&mut graph);

    let loaded = match &config.edges_in {
        Some(path) => Some(read_edge_list(&mut graph, path, config.load_direction)?),
        None => None,
    };

    let mut removed_edges = 0;
    for spec in &config.remove_edges {
        if graph.remove_edge(spec.src, spec.dst) {
            removed_edges += 1;
        } else {
            warn!(src = %spec.src, dst = %spec.dst, "要删除的边不存在");
        }
    }

    let edges_written = match &config.edges_out {
        Some(path) => Some(write_edge_list(&graph, path)?),
        None => None,
    };

    let traversal = Traversal::new(&graph);
    let traversals = config
        .traversals
        .iter()
        .map(|&kind| {
            let order = traversal.run(kind, config.start);
            if order.is_none() {
                warn!(kind = %kind, start = %config.start, "遍历起点不存在");
            }
            TraversalOutcome { kind, order }
        })
        .collect();

    if let Some(path) = &config.output {
        write_vertex_list(&graph, path)?;
    }

    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "运行完成"
    );

    Ok(RunOutcome {
        graph,
        antennas,
        antinodes,
        linked,
        loaded,
        removed_edges,
        edges_written,
        traversals,
    })
}

/// 根据运行结果生成报表
pub fn build_report(outcome: &RunOutcome, config: &RunConfig) -> RunReport {
    let graph = &outcome.graph;
    RunReport {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        antinodes: outcome.antinodes,
        antennas: config.list_antennas.then(|| antenna_report(graph)),
        matrix: config
            .show_matrix
            .then(|| MatrixReport::from(render_matrix(graph))),
        traversals: outcome
            .traversals
            .iter()
            .map(|t| TraversalReport {
                kind: t.kind,
                start: config.start,
                visits: t.order.as_ref().map(|order| visit_report(graph, order)),
            })
            .collect(),
    }
}
