//! 运行配置
//!
//! 描述命令行工具的一次完整运行：读取网格、推导、连接、
//! 读写边列表、遍历以及输出。可从 JSON 文件加载，命令行参数覆盖其中的字段。

use crate::algorithm::TraversalKind;
use crate::error::{Error, Result};
use crate::storage::LoadDirection;
use crate::types::{Coord, EdgeSpec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 运行配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// 网格文本文件
    pub grid: PathBuf,
    /// 是否推导反节点
    pub deduce: bool,
    /// 是否连接同频天线
    pub link: bool,
    /// 连接后要读取的二进制边列表
    pub edges_in: Option<PathBuf>,
    /// 读取边列表时的插入方向
    pub load_direction: LoadDirection,
    /// 连接/读取之后要删除的边
    pub remove_edges: Vec<EdgeSpec>,
    /// 输出的二进制边列表
    pub edges_out: Option<PathBuf>,
    /// 输出的顶点列表文本
    pub output: Option<PathBuf>,
    /// 遍历起点
    pub start: Coord,
    /// 依次执行的遍历
    pub traversals: Vec<TraversalKind>,
    /// 打印字符矩阵
    pub show_matrix: bool,
    /// 打印天线列表
    pub list_antennas: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            grid: PathBuf::from("exemplo.txt"),
            deduce: true,
            link: true,
            edges_in: None,
            load_direction: LoadDirection::Bidirectional,
            remove_edges: vec![EdgeSpec::new((4, 4), (5, 2))],
            edges_out: Some(PathBuf::from("arestas.bin")),
            output: Some(PathBuf::from("resultado.txt")),
            start: Coord::new(5, 2),
            traversals: vec![TraversalKind::BreadthFirst, TraversalKind::DepthFirst],
            show_matrix: true,
            list_antennas: true,
        }
    }
}

impl RunConfig {
    /// 从 JSON 文件加载；缺省字段取默认值
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// 从 JSON 文本解析
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::ConfigError(e.to_string()))
    }
}
