//! 同频连接
//!
//! 频率相同的天线两两之间建立双向边

use crate::graph::{Graph, VertexId};
use crate::types::Frequency;
use tracing::info;

/// 连接所有同频天线（跳过标记和空格）
///
/// 按顶点列表顺序处理每个无序对，先插入 v1 -> v2 再插入 v2 -> v1。
/// 已存在的边保持不变。返回是否新建了至少一条边。
pub fn link_same_frequency(graph: &mut Graph) -> bool {
    let antennas: Vec<(VertexId, Frequency)> = graph
        .vertices()
        .filter(|v| v.frequency().is_linkable())
        .map(|v| (v.id(), v.frequency()))
        .collect();

    let mut created = 0usize;
    for (i, &(a, freq_a)) in antennas.iter().enumerate() {
        for &(b, freq_b) in &antennas[i + 1..] {
            if freq_a != freq_b {
                continue;
            }
            if graph.add_edge_by_id(a, b) {
                created += 1;
            }
            if graph.add_edge_by_id(b, a) {
                created += 1;
            }
        }
    }

    info!(antennas = antennas.len(), created, "同频连接完成");
    created > 0
}
