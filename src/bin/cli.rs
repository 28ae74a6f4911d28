//! antennagraph 命令行工具
//!
//! 读取天线网格，推导反节点、连接同频天线、读写边列表并输出遍历次序

use anyhow::Context;
use antennagraph::cli::{PrintMode, Printer};
use antennagraph::pipeline;
use antennagraph::{Coord, EdgeSpec, LoadDirection, RunConfig, TraversalKind};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "antennagraph-cli")]
#[command(version, about = "天线网格图工具")]
struct Args {
    /// JSON 配置文件（命令行参数优先）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 网格文本文件
    #[arg(short, long)]
    grid: Option<PathBuf>,

    /// 遍历起点
    #[arg(short, long, value_name = "X,Y")]
    start: Option<Coord>,

    /// 遍历方式，可重复: dfs, bfs
    #[arg(short, long = "traversal", value_name = "KIND")]
    traversals: Vec<TraversalKind>,

    /// 连接后读取的二进制边列表
    #[arg(long)]
    edges_in: Option<PathBuf>,

    /// 读取边列表时只插入单向边
    #[arg(long)]
    directed: bool,

    /// 删除两点之间的边，可重复
    #[arg(long = "remove-edge", value_name = "X1,Y1,X2,Y2")]
    remove_edges: Vec<EdgeSpec>,

    /// 不删除默认的边，只删除 --remove-edge 指定的
    #[arg(long)]
    keep_edges: bool,

    /// 输出的二进制边列表
    #[arg(long)]
    edges_out: Option<PathBuf>,

    /// 不写二进制边列表
    #[arg(long, conflicts_with = "edges_out")]
    no_edges_out: bool,

    /// 输出的顶点列表文本
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 不写顶点列表文本
    #[arg(long, conflicts_with = "output")]
    no_output: bool,

    /// 跳过反节点推导
    #[arg(long)]
    no_deduce: bool,

    /// 跳过同频连接
    #[arg(long)]
    no_link: bool,

    /// 不打印矩阵
    #[arg(long)]
    no_matrix: bool,

    /// 不打印天线列表
    #[arg(long)]
    no_list: bool,

    /// 以 JSON 输出报表
    #[arg(long)]
    json: bool,
}

impl Args {
    /// 合并配置文件与命令行参数
    fn into_config(self) -> anyhow::Result<(RunConfig, PrintMode)> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_file(path)
                .with_context(|| format!("无法加载配置文件 {}", path.display()))?,
            None => RunConfig::default(),
        };

        if let Some(grid) = self.grid {
            config.grid = grid;
        }
        if let Some(start) = self.start {
            config.start = start;
        }
        if !self.traversals.is_empty() {
            config.traversals = self.traversals;
        }
        if self.edges_in.is_some() {
            config.edges_in = self.edges_in;
        }
        if self.directed {
            config.load_direction = LoadDirection::Directed;
        }
        if self.keep_edges {
            config.remove_edges.clear();
        }
        config.remove_edges.extend(self.remove_edges);
        if self.edges_out.is_some() {
            config.edges_out = self.edges_out;
        }
        if self.no_edges_out {
            config.edges_out = None;
        }
        if self.output.is_some() {
            config.output = self.output;
        }
        if self.no_output {
            config.output = None;
        }
        config.deduce &= !self.no_deduce;
        config.link &= !self.no_link;
        config.show_matrix &= !self.no_matrix;
        config.list_antennas &= !self.no_list;

        let mode = if self.json {
            PrintMode::Json
        } else {
            PrintMode::Table
        };
        Ok((config, mode))
    }
}

fn main() -> anyhow::Result<()> {
    // 日志写到 stderr，stdout 只输出报表
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let (config, mode) = Args::parse().into_config()?;

    let outcome = pipeline::run(&config)
        .with_context(|| format!("处理网格 {} 失败", config.grid.display()))?;

    let report = pipeline::build_report(&outcome, &config);
    print!("{}", Printer::new(mode).print_run(&report)?);

    if mode == PrintMode::Table {
        println!("\n天线: {}  同频连接: {}", outcome.antennas, outcome.linked);
        if let Some(stats) = &outcome.loaded {
            println!(
                "边列表已读取: {} 条记录, 新增 {} 条边, 跳过 {} 条",
                stats.records, stats.inserted, stats.skipped
            );
        }
        if !config.remove_edges.is_empty() {
            println!("已删除边: {}/{}", outcome.removed_edges, config.remove_edges.len());
        }
        if let Some(written) = outcome.edges_written {
            println!("边列表已保存: {} 条记录", written);
        }
        if let Some(path) = &config.output {
            println!("顶点列表已保存: {}", path.display());
        }
    }

    Ok(())
}
