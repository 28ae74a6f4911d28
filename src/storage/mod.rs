//! 文件格式模块
//!
//! - 网格文本（输入）、顶点列表文本（输出）和矩阵渲染
//! - 二进制边列表

pub mod edge_list;
pub mod grid;

pub use edge_list::{
    read_edge_list, read_edges, write_edge_list, write_edges, EdgeRecord, LoadDirection, LoadStats,
    RECORD_SIZE,
};
pub use grid::{
    format_vertex_list, load_grid_bytes, load_grid_into, parse_grid, read_grid, render_matrix, write_vertex_list,
};
