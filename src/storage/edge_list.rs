//! 二进制边列表
//!
//! 记录格式（本机字节序，每条 16 字节）：
//! ```text
//! +-----------+-----------+-----------+-----------+
//! | x_src i32 | y_src i32 | x_dst i32 | y_dst i32 |
//! +-----------+-----------+-----------+-----------+
//! ```
//! 写入时只输出 `src.id < dst.id` 的边，每条无向连接恰好一条记录。

use crate::error::Result;
use crate::graph::Graph;
use crate::types::Coord;
use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// 每条记录的字节数
pub const RECORD_SIZE: usize = 4 * std::mem::size_of::<i32>();

/// 一条边记录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord {
    pub src: Coord,
    pub dst: Coord,
}

/// 读取时插入边的方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadDirection {
    /// 只插入 src -> dst
    Directed,
    /// 同时插入 src -> dst 与 dst -> src
    #[default]
    Bidirectional,
}

/// 读取统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadStats {
    /// 读到的完整记录数
    pub records: usize,
    /// 新插入的有向边数
    pub inserted: usize,
    /// 端点无法解析而跳过的记录数
    pub skipped: usize,
}

/// 把边列表写入 `writer`，返回写入的记录数
pub fn write_edges<W: Write>(graph: &Graph, writer: &mut W) -> Result<usize> {
    let mut written = 0usize;
    for v in graph.vertices() {
        for e in v.edges() {
            if v.id() >= e.dst() {
                continue;
            }
            let Some(dst) = graph.find_by_id(e.dst()) else {
                continue;
            };
            write_record(
                writer,
                EdgeRecord {
                    src: v.coord(),
                    dst: dst.coord(),
                },
            )?;
            written += 1;
        }
    }
    Ok(written)
}

/// 把边列表写入文件
pub fn write_edge_list<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<usize> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    let written = write_edges(graph, &mut writer)?;
    writer.flush()?;
    info!(path = %path.display(), records = written, "边列表已保存");
    Ok(written)
}

/// 从 `reader` 读取边列表并插入图中
///
/// 端点不存在的记录被跳过；末尾不完整的记录被忽略。
pub fn read_edges<R: Read>(
    graph: &mut Graph,
    mut reader: R,
    direction: LoadDirection,
) -> Result<LoadStats> {
    let mut stats = LoadStats::default();

    while let Some(record) = read_record(&mut reader)? {
        stats.records += 1;

        if graph.find_by_coord(record.src).is_none() || graph.find_by_coord(record.dst).is_none() {
            debug!(src = %record.src, dst = %record.dst, "跳过无法解析的边记录");
            stats.skipped += 1;
            continue;
        }

        if graph.add_edge(record.src, record.dst) {
            stats.inserted += 1;
        }
        if direction == LoadDirection::Bidirectional && graph.add_edge(record.dst, record.src) {
            stats.inserted += 1;
        }
    }

    Ok(stats)
}

/// 从文件读取边列表
pub fn read_edge_list<P: AsRef<Path>>(
    graph: &mut Graph,
    path: P,
    direction: LoadDirection,
) -> Result<LoadStats> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let stats = read_edges(graph, reader, direction)?;
    info!(
        path = %path.display(),
        records = stats.records,
        inserted = stats.inserted,
        skipped = stats.skipped,
        "边列表已读取"
    );
    Ok(stats)
}

fn write_record<W: Write>(writer: &mut W, record: EdgeRecord) -> io::Result<()> {
    writer.write_i32::<NativeEndian>(record.src.x)?;
    writer.write_i32::<NativeEndian>(record.src.y)?;
    writer.write_i32::<NativeEndian>(record.dst.x)?;
    writer.write_i32::<NativeEndian>(record.dst.y)?;
    Ok(())
}

/// 读取一条记录；流结束（含不完整记录）时返回 `None`
fn read_record<R: Read>(reader: &mut R) -> Result<Option<EdgeRecord>> {
    let mut fields = [0i32; 4];
    for field in fields.iter_mut() {
        match reader.read_i32::<NativeEndian>() {
            Ok(v) => *field = v,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(Some(EdgeRecord {
        src: Coord::new(fields[0], fields[1]),
        dst: Coord::new(fields[2], fields[3]),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::link_same_frequency;
    use crate::storage::grid::parse_grid;
    use std::io::Cursor;
    use tempfile::tempdir;

    const GRID: &str = "A..B\n..A.\nB...\n";

    fn linked_graph() -> Graph {
        let mut graph = parse_grid(GRID);
        link_same_frequency(&mut graph);
        graph
    }

    #[test]
    fn test_write_once_per_connection() {
        let graph = linked_graph();
        assert_eq!(graph.edge_count(), 4);

        let mut buf = Vec::new();
        let written = write_edges(&graph, &mut buf).unwrap();
        assert_eq!(written, 2);
        assert_eq!(buf.len(), 2 * RECORD_SIZE);
    }

    #[test]
    fn test_native_endian_layout() {
        let mut graph = Graph::new();
        graph.add_vertex(Coord::new(1, 2), 'A');
        graph.add_vertex(Coord::new(3, 4), 'A');
        graph.add_edge(Coord::new(1, 2), Coord::new(3, 4));

        let mut buf = Vec::new();
        write_edges(&graph, &mut buf).unwrap();

        let expected: Vec<u8> = [1i32, 2, 3, 4].iter().flat_map(|v| v.to_ne_bytes()).collect();
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_round_trip_bidirectional() {
        let graph = linked_graph();
        let mut buf = Vec::new();
        write_edges(&graph, &mut buf).unwrap();

        let mut fresh = parse_grid(GRID);
        let stats = read_edges(&mut fresh, Cursor::new(&buf), LoadDirection::Bidirectional).unwrap();

        assert_eq!(stats.records, 2);
        assert_eq!(stats.inserted, 4);
        assert_eq!(stats.skipped, 0);
        for v in graph.vertices() {
            for e in v.edges() {
                let dst = graph.find_by_id(e.dst()).unwrap().coord();
                assert!(fresh.has_edge(v.coord(), dst));
            }
        }
    }

    #[test]
    fn test_round_trip_directed() {
        let graph = linked_graph();
        let mut buf = Vec::new();
        write_edges(&graph, &mut buf).unwrap();

        let mut fresh = parse_grid(GRID);
        let stats = read_edges(&mut fresh, Cursor::new(&buf), LoadDirection::Directed).unwrap();
        assert_eq!(stats.inserted, 2);

        let mut cursor = Cursor::new(&buf);
        while let Some(record) = read_record(&mut cursor).unwrap() {
            let src = fresh.find_by_coord(record.src).unwrap().id();
            let dst = fresh.find_by_coord(record.dst).unwrap().id();
            assert!(src < dst);
            assert!(fresh.has_edge(record.src, record.dst));
            assert!(!fresh.has_edge(record.dst, record.src));
        }
    }

    #[test]
    fn test_unresolvable_and_truncated_records() {
        let mut buf = Vec::new();
        write_record(&mut buf, EdgeRecord { src: Coord::new(0, 0), dst: Coord::new(9, 9) }).unwrap();
        write_record(&mut buf, EdgeRecord { src: Coord::new(0, 0), dst: Coord::new(2, 1) }).unwrap();
        buf.extend_from_slice(&7i32.to_ne_bytes());

        let mut graph = parse_grid(GRID);
        let stats = read_edges(&mut graph, Cursor::new(&buf), LoadDirection::Directed).unwrap();

        assert_eq!(stats, LoadStats { records: 2, inserted: 1, skipped: 1 });
        assert!(graph.has_edge(Coord::new(0, 0), Coord::new(2, 1)));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("arestas.bin");

        let graph = linked_graph();
        assert_eq!(write_edge_list(&graph, &path).unwrap(), 2);

        let mut fresh = parse_grid(GRID);
        let stats = read_edge_list(&mut fresh, &path, LoadDirection::default()).unwrap();
        assert_eq!(stats.inserted, 4);
        assert_eq!(fresh.edge_count(), graph.edge_count());

        assert!(read_edge_list(&mut fresh, dir.path().join("missing.bin"), LoadDirection::Directed).is_err());
    }
}
