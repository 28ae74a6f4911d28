//! 通用类型定义：网格坐标与天线频率

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 网格坐标（x 为列，y 为行）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// 以 `pivot` 为中心的镜像点：`(2·pivot − self)`
    ///
    /// 溢出 `i32` 时返回 `None`。
    pub fn reflect_across(&self, pivot: Coord) -> Option<Coord> {
        let x = pivot.x.checked_mul(2)?.checked_sub(self.x)?;
        let y = pivot.y.checked_mul(2)?.checked_sub(self.y)?;
        Some(Coord::new(x, y))
    }

    /// 两个分量都非负
    pub fn is_non_negative(&self) -> bool {
        self.x >= 0 && self.y >= 0
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 解析 `"x,y"` 形式的坐标
impl FromStr for Coord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| Error::ParseError(format!("坐标格式应为 x,y: {}", s)))?;
        let x = x
            .trim()
            .parse::<i32>()
            .map_err(|e| Error::ParseError(format!("无效的 x 坐标 {:?}: {}", x, e)))?;
        let y = y
            .trim()
            .parse::<i32>()
            .map_err(|e| Error::ParseError(format!("无效的 y 坐标 {:?}: {}", y, e)))?;
        Ok(Coord::new(x, y))
    }
}

/// 天线频率（顶点标签，单个字符）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frequency(pub char);

impl Frequency {
    /// 推导出的反节点使用的保留标签
    pub const MARKER: Frequency = Frequency('#');
    /// 网格中的空单元格
    pub const EMPTY: Frequency = Frequency('.');

    pub fn as_char(&self) -> char {
        self.0
    }

    pub fn is_marker(&self) -> bool {
        *self == Self::MARKER
    }

    pub fn is_empty_cell(&self) -> bool {
        *self == Self::EMPTY
    }

    /// 能否参与同频连接（既不是标记也不是空格）
    pub fn is_linkable(&self) -> bool {
        !self.is_marker() && !self.is_empty_cell()
    }
}

impl From<char> for Frequency {
    fn from(c: char) -> Self {
        Frequency(c)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 一条边的两个端点坐标，解析 `"x1,y1,x2,y2"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub src: Coord,
    pub dst: Coord,
}

impl EdgeSpec {
    pub fn new(src: impl Into<Coord>, dst: impl Into<Coord>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
        }
    }
}

impl FromStr for EdgeSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(Error::ParseError(format!(
                "边格式应为 x1,y1,x2,y2: {}",
                s
            )));
        }
        let src = format!("{},{}", parts[0], parts[1]).parse()?;
        let dst = format!("{},{}", parts[2], parts[3]).parse()?;
        Ok(EdgeSpec { src, dst })
    }
}
