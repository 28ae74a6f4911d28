//! 结果打印器
//!
//! 提供表格和 JSON 格式的报表输出

use crate::error::Result;
use crate::report::{AntennaRow, MatrixReport, RunReport, VisitRow};
use prettytable::{format, row, Cell, Row, Table};
use serde::Serialize;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// JSON 模式
    Json,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 打印完整运行报表
    pub fn print_run(&self, report: &RunReport) -> Result<String> {
        if self.mode == PrintMode::Json {
            return to_json(report);
        }

        let mut out = self.print_stats(report.vertices, report.edges);
        out.push_str(&format!("反节点: {}\n", report.antinodes));

        if let Some(antennas) = &report.antennas {
            out.push_str("\n天线列表:\n");
            out.push_str(&self.print_antennas(antennas)?);
        }
        match &report.matrix {
            Some(MatrixReport::Rendered(matrix)) => {
                out.push_str("\n矩阵:\n");
                out.push_str(matrix);
            }
            Some(MatrixReport::Omitted) => out.push_str("\n矩阵:\n警告: 坐标范围过大，矩阵未渲染\n"),
            None => {}
        }
        for t in &report.traversals {
            out.push_str(&format!("\n[{}] 访问次序 (起点 {}):\n", t.kind, t.start));
            match &t.visits {
                Some(rows) => out.push_str(&self.print_visits(rows)?),
                None => out.push_str("起点不存在\n"),
            }
        }

        Ok(out)
    }

    /// 打印天线列表
    pub fn print_antennas(&self, rows: &[AntennaRow]) -> Result<String> {
        if self.mode == PrintMode::Json {
            return to_json(rows);
        }

        let mut table = new_table();
        table.set_titles(row!["Antenna", "Freq", "Links"]);
        for r in rows {
            let neighbors = r
                .neighbors
                .iter()
                .map(|n| format!("{}{}", n.frequency, n.coord))
                .collect::<Vec<_>>()
                .join(" ");
            table.add_row(Row::new(vec![
                Cell::new(&r.coord.to_string()),
                Cell::new(&r.frequency.to_string()),
                Cell::new(&neighbors),
            ]));
        }

        Ok(format!("{}{} antenna(s)\n", table, rows.len()))
    }

    /// 打印访问次序
    pub fn print_visits(&self, rows: &[VisitRow]) -> Result<String> {
        if self.mode == PrintMode::Json {
            return to_json(rows);
        }
        if rows.is_empty() {
            return Ok("Empty set\n".to_string());
        }

        let mut table = new_table();
        table.set_titles(row!["Antenna", "Freq", "Order"]);
        for r in rows {
            table.add_row(row![r.coord, r.frequency, r.order]);
        }
        Ok(table.to_string())
    }

    /// 打印统计信息
    pub fn print_stats(&self, vertex_count: usize, edge_count: usize) -> String {
        let mut table = new_table();
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", vertex_count]);
        table.add_row(row!["Edge Count", edge_count]);
        table.to_string()
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
