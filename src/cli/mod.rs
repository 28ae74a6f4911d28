//! 命令行支持模块
//!
//! 报表的表格/JSON 输出

mod printer;

pub use printer::{PrintMode, Printer};
