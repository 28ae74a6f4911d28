//! 边定义
//!
//! 有向、无权、无标签；由源顶点持有，只记录目标顶点

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};

/// 边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// 目标顶点 ID
    dst: VertexId,
}

impl Edge {
    /// 创建新边
    pub fn new(dst: VertexId) -> Self {
        Self { dst }
    }

    /// 获取目标顶点 ID
    pub fn dst(&self) -> VertexId {
        self.dst
    }
}
