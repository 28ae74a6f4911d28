//! 网格文本格式
//!
//! - 输入：每行是一行网格，每个字符是一列，`.` 为空格
//! - 输出：每个顶点一行 `"<x> <y> <freq>"`，最新顶点在前
//! - 矩阵渲染：`[0, maxX] × [0, maxY]` 的字符矩阵

use crate::error::Result;
use crate::graph::Graph;
use crate::types::{Coord, Frequency};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// 从网格文件构建新图
///
/// 按字节读取，每个字节就是一个标签，不要求 UTF-8。
pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let mut graph = Graph::new();
    load_grid_bytes(&mut graph, &bytes);
    info!(path = %path.display(), vertices = graph.vertex_count(), "网格已读取");
    Ok(graph)
}

/// 解析网格文本
pub fn parse_grid(text: &str) -> Graph {
    let mut graph = Graph::new();
    load_grid_into(&mut graph, text);
    graph
}

/// 把网格文本中的天线加入已有的图，返回新建顶点数
///
/// 行以 `\n` 分隔，行尾的 `\r` 去掉。已被占用的坐标保持原样。
pub fn load_grid_into(graph: &mut Graph, text: &str) -> usize {
    let rows = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().map(Frequency));
    load_rows(graph, rows)
}

/// 按字节加入网格，每个字节映射为同值的 `char`
pub fn load_grid_bytes(graph: &mut Graph, bytes: &[u8]) -> usize {
    let rows = bytes.split(|&b| b == b'\n').map(|line| {
        line.strip_suffix(b"\r")
            .unwrap_or(line)
            .iter()
            .map(|&b| Frequency(char::from(b)))
    });
    load_rows(graph, rows)
}

fn load_rows<I, R>(graph: &mut Graph, rows: I) -> usize
where
    I: Iterator<Item = R>,
    R: Iterator<Item = Frequency>,
{
    let mut inserted = 0usize;
    for (y, row) in rows.enumerate() {
        for (x, freq) in row.enumerate() {
            if freq.is_empty_cell() {
                continue;
            }
            let (_, added) = graph.add_vertex(Coord::new(x as i32, y as i32), freq);
            if added {
                inserted += 1;
            }
        }
    }
    inserted
}

/// 顶点列表文本，每行 `"<x> <y> <freq>\n"`
pub fn format_vertex_list(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.vertex_count() * 8);
    for v in graph.vertices() {
        // 写入 String 不会失败
        let _ = writeln!(out, "{} {} {}", v.x(), v.y(), v.frequency());
    }
    out
}

/// 把顶点列表写入文件
pub fn write_vertex_list<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, format_vertex_list(graph))?;
    info!(path = %path.display(), vertices = graph.vertex_count(), "顶点列表已保存");
    Ok(())
}

/// 渲染字符矩阵
///
/// 空图渲染为单个空格 `".\n"`；含负坐标的顶点不绘制。
/// 坐标范围大到无法分配缓冲区时返回 `None`。
pub fn render_matrix(graph: &Graph) -> Option<String> {
    let (max_x, max_y) = graph
        .vertices()
        .map(|v| v.coord())
        .filter(Coord::is_non_negative)
        .fold((0i32, 0i32), |(mx, my), c| (mx.max(c.x), my.max(c.y)));

    let Some(len) = matrix_len(max_x, max_y) else {
        warn!(max_x, max_y, "矩阵尺寸溢出");
        return None;
    };
    let cols = max_x as usize + 1;
    let stride = cols + 1;

    let mut cells: Vec<char> = Vec::new();
    if cells.try_reserve_exact(len).is_err() {
        warn!(max_x, max_y, cells = len, "矩阵缓冲区分配失败");
        return None;
    }
    cells.resize(len, Frequency::EMPTY.as_char());
    for row in 0..len / stride {
        cells[row * stride + cols] = '\n';
    }
    for v in graph.vertices() {
        let c = v.coord();
        if c.is_non_negative() {
            cells[c.y as usize * stride + c.x as usize] = v.frequency().as_char();
        }
    }

    let mut out = String::new();
    if out.try_reserve(len).is_err() {
        warn!(max_x, max_y, cells = len, "矩阵缓冲区分配失败");
        return None;
    }
    out.extend(cells);
    Some(out)
}

/// `(max_y + 1) * (max_x + 2)`，含每行的换行符
fn matrix_len(max_x: i32, max_y: i32) -> Option<usize> {
    let cols = usize::try_from(max_x).ok()?.checked_add(1)?;
    let rows = usize::try_from(max_y).ok()?.checked_add(1)?;
    rows.checked_mul(cols.checked_add(1)?)
}
