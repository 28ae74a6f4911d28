//! 端到端测试：网格 → 推导 → 连接 → 边列表 → 遍历 → 输出

use antennagraph::algorithm::{deduce_antinodes, link_same_frequency, Traversal, TraversalKind};
use antennagraph::pipeline::{build_report, run};
use antennagraph::report::MatrixReport;
use antennagraph::storage::{parse_grid, read_edge_list, render_matrix, write_edge_list};
use antennagraph::{Coord, EdgeSpec, Frequency, Graph, LoadDirection, RunConfig};
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

#[test]
fn test_two_antenna_grid() {
    let mut graph = parse_grid("A.\n.A\n");
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.find_by_coord(Coord::new(0, 0)).unwrap().frequency(), Frequency('A'));
    assert_eq!(graph.find_by_coord(Coord::new(1, 1)).unwrap().frequency(), Frequency('A'));

    assert!(link_same_frequency(&mut graph));
    assert!(graph.has_edge(Coord::new(0, 0), Coord::new(1, 1)));
    assert!(graph.has_edge(Coord::new(1, 1), Coord::new(0, 0)));

    assert!(deduce_antinodes(&mut graph));
    assert_eq!(graph.vertex_count(), 3);
    assert!(graph.find_by_coord(Coord::new(2, 2)).unwrap().frequency().is_marker());
    assert!(graph.find_by_coord(Coord::new(-1, -1)).is_none());

    assert_eq!(render_matrix(&graph).unwrap(), "A..\n.A.\n..#\n");
}

#[test]
fn test_sample_grid_antinodes() {
    let mut graph = parse_grid(SAMPLE);
    assert_eq!(graph.vertex_count(), 7);

    assert!(deduce_antinodes(&mut graph));
    let markers: Vec<Coord> = graph
        .vertices()
        .filter(|v| v.frequency().is_marker())
        .map(|v| v.coord())
        .collect();

    // 每个标记都是某对同频天线的镜像点
    let antennas: Vec<(Coord, Frequency)> = graph
        .vertices()
        .filter(|v| !v.frequency().is_marker())
        .map(|v| (v.coord(), v.frequency()))
        .collect();
    for m in &markers {
        assert!(m.x >= 0 && m.y >= 0);
        let explained = antennas.iter().any(|&(a, fa)| {
            antennas
                .iter()
                .any(|&(b, fb)| a != b && fa == fb && b.reflect_across(a) == Some(*m))
        });
        assert!(explained, "标记 {} 没有对应的天线对", m);
    }
    assert!(markers.contains(&Coord::new(3, 1)));
    assert!(markers.contains(&Coord::new(10, 11)));

    // 标记不参与连接
    link_same_frequency(&mut graph);
    for m in &markers {
        assert_eq!(graph.find_by_coord(*m).unwrap().out_degree(), 0);
    }
    // 4 个 '0' 和 3 个 'A'：4·3 + 3·2
    assert_eq!(graph.edge_count(), 18);
}

#[test]
fn test_traversal_stays_within_frequency() {
    let mut graph = parse_grid(SAMPLE);
    link_same_frequency(&mut graph);

    let traversal = Traversal::new(&graph);
    for kind in [TraversalKind::DepthFirst, TraversalKind::BreadthFirst] {
        let order = traversal.run(kind, Coord::new(6, 5)).unwrap();
        assert_eq!(order.visited_count(), 3);
        for id in order.sequence() {
            assert_eq!(graph.find_by_id(id).unwrap().frequency(), Frequency('A'));
        }
    }
}

#[test]
fn test_edge_list_reload_preserves_reachability() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("arestas.bin");

    let mut graph = parse_grid(SAMPLE);
    link_same_frequency(&mut graph);
    graph.remove_edge(Coord::new(8, 1), Coord::new(5, 2));
    write_edge_list(&graph, &path).unwrap();

    let mut fresh = parse_grid(SAMPLE);
    read_edge_list(&mut fresh, &path, LoadDirection::Bidirectional).unwrap();
    assert_eq!(fresh.edge_count(), graph.edge_count());

    let start = Coord::new(8, 1);
    let before = Traversal::new(&graph).breadth_first(start).unwrap();
    let after = Traversal::new(&fresh).breadth_first(start).unwrap();
    assert_eq!(before.visited_count(), after.visited_count());
}

#[test]
fn test_full_run() {
    let dir = tempdir().unwrap();
    let grid = dir.path().join("exemplo.txt");
    let edges = dir.path().join("arestas.bin");
    let output = dir.path().join("resultado.txt");
    fs::write(&grid, SAMPLE).unwrap();

    let config = RunConfig {
        grid: grid.clone(),
        edges_out: Some(edges.clone()),
        output: Some(output.clone()),
        start: Coord::new(8, 1),
        remove_edges: vec![
            "8,1,5,2".parse::<EdgeSpec>().unwrap(),
            "0,0,1,1".parse::<EdgeSpec>().unwrap(),
        ],
        ..RunConfig::default()
    };

    let outcome = run(&config).unwrap();
    assert_eq!(outcome.antennas, 7);
    assert!(outcome.antinodes > 0);
    assert!(outcome.linked);
    assert_eq!(outcome.removed_edges, 1);
    assert_eq!(outcome.edges_written, Some(8));
    assert_eq!(outcome.traversals.len(), 2);
    assert!(outcome.traversals.iter().all(|t| t.order.is_some()));

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), outcome.graph.vertex_count());
    let first = outcome.graph.vertices().next().unwrap();
    assert_eq!(
        text.lines().next().unwrap(),
        format!("{} {} {}", first.x(), first.y(), first.frequency())
    );
    assert_eq!(fs::metadata(&edges).unwrap().len(), 8 * 16);

    let report = build_report(&outcome, &config);
    assert_eq!(report.vertices, outcome.graph.vertex_count());
    assert_eq!(report.antennas.as_ref().unwrap().len(), report.vertices);
    let bfs = &report.traversals[0];
    assert_eq!(bfs.kind, TraversalKind::BreadthFirst);
    assert_eq!(bfs.visits.as_ref().unwrap().len(), 4);

    // 第二次运行读取上次写出的边列表
    let reload = RunConfig {
        grid,
        deduce: false,
        link: false,
        edges_in: Some(edges),
        edges_out: None,
        output: None,
        remove_edges: Vec::new(),
        start: Coord::new(8, 1),
        traversals: vec![TraversalKind::DepthFirst],
        ..RunConfig::default()
    };
    let outcome = run(&reload).unwrap();
    let loaded = outcome.loaded.as_ref().unwrap();
    assert_eq!(loaded.records, 8);
    assert_eq!(loaded.skipped, 0);
    assert_eq!(outcome.graph.edge_count(), 16);
}

#[test]
fn test_default_run_removes_fixed_edge() {
    let dir = tempdir().unwrap();
    let grid = dir.path().join("exemplo.txt");
    fs::write(&grid, SAMPLE).unwrap();

    let config = RunConfig {
        grid,
        edges_out: None,
        output: None,
        ..RunConfig::default()
    };
    let mut outcome = run(&config).unwrap();
    assert_eq!(outcome.removed_edges, 1);
    assert!(!outcome.graph.has_edge(Coord::new(4, 4), Coord::new(5, 2)));
    assert!(!outcome.graph.has_edge(Coord::new(5, 2), Coord::new(4, 4)));
    assert_eq!(outcome.graph.edge_count(), 16);

    let report = build_report(&outcome, &config);
    assert!(matches!(report.matrix, Some(MatrixReport::Rendered(_))));

    // 超大坐标只让矩阵缺席，不影响其余报表
    outcome.graph.add_vertex(Coord::new(i32::MAX, i32::MAX), 'Z');
    let report = build_report(&outcome, &config);
    assert_eq!(report.matrix, Some(MatrixReport::Omitted));
    assert_eq!(report.vertices, outcome.graph.vertex_count());
}

#[test]
fn test_run_missing_seed_and_grid() {
    let dir = tempdir().unwrap();
    let grid = dir.path().join("g.txt");
    fs::write(&grid, "a.a\n").unwrap();

    let config = RunConfig {
        grid,
        edges_out: None,
        output: None,
        start: Coord::new(7, 7),
        ..RunConfig::default()
    };
    let outcome = run(&config).unwrap();
    assert!(outcome.traversals.iter().all(|t| t.order.is_none()));

    let report = build_report(&outcome, &config);
    assert!(report.traversals.iter().all(|t| t.visits.is_none()));

    let missing = RunConfig {
        grid: dir.path().join("nope.txt"),
        ..config
    };
    assert!(run(&missing).is_err());
}

#[test]
fn test_clear_releases_everything() {
    let mut graph = Graph::new();
    for x in 0..50 {
        graph.add_vertex(Coord::new(x, 0), 'A');
    }
    link_same_frequency(&mut graph);
    assert_eq!(graph.edge_count(), 50 * 49);

    graph.clear();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}
