//! 反节点推导
//!
//! 对每一对同频天线，把其中一根以另一根为中心做镜像，
//! 镜像点落在非负坐标上时放置一个标记顶点（`#`）。

use crate::graph::Graph;
use crate::types::{Coord, Frequency};
use tracing::info;

/// 推导反节点并写入图中
///
/// 只扫描调用时已存在的非标记顶点，不迭代到不动点：
/// 本次新建的标记顶点不会再参与配对。返回是否至少新建了一个顶点。
pub fn deduce_antinodes(graph: &mut Graph) -> bool {
    let antennas: Vec<(Coord, Frequency)> = graph
        .vertices()
        .filter(|v| !v.frequency().is_marker())
        .map(|v| (v.coord(), v.frequency()))
        .collect();

    let mut created = 0usize;
    for (i, &(a, freq_a)) in antennas.iter().enumerate() {
        for (j, &(b, freq_b)) in antennas.iter().enumerate() {
            if i == j || freq_a != freq_b {
                continue;
            }
            for candidate in antinode_pair(a, b).into_iter().flatten() {
                if !candidate.is_non_negative() {
                    continue;
                }
                let (_, inserted) = graph.add_vertex(candidate, Frequency::MARKER);
                if inserted {
                    created += 1;
                }
            }
        }
    }

    info!(antennas = antennas.len(), created, "反节点推导完成");
    created > 0
}

/// 一对天线的两个镜像点：b 关于 a 的镜像，a 关于 b 的镜像
pub fn antinode_pair(a: Coord, b: Coord) -> [Option<Coord>; 2] {
    [b.reflect_across(a), a.reflect_across(b)]
}
