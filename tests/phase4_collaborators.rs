//! Phase 4 tests: progress, profiling and colors, plus CLI end-to-end flows.

use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tempfile::NamedTempFile;

use adjgraph::format::GraphReader;
use adjgraph::graph::{Graph, UnGraph};
use adjgraph::profiling::{format_line, DurationUnit, Profiler};
use adjgraph::progress::{
    LogProgressBar, LogProgressFactory, ProgressBar, ProgressBarFactory, ProgressPool,
};
use adjgraph::types::{Bidirectional, Simple, Undirected};
use adjgraph::vis::{component_palette, rgb_jet, uniform_hues_rgb, Hsv, Rgb};

// ==================== Progress Tests ====================

/// Factory counting how many bars it created and removed.
#[derive(Default)]
struct CountingFactory {
    created: AtomicUsize,
    removed: AtomicUsize,
}

impl ProgressBarFactory for CountingFactory {
    fn create_bar(&self, label: &str, steps: u32) -> Box<dyn ProgressBar> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Box::new(LogProgressBar::new(label, steps))
    }

    fn remove_bar(&self, _index: usize) {
        self.removed.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_pool_create_and_remove() {
    let pool = ProgressPool::new(CountingFactory::default());
    let last_count = Arc::new(AtomicUsize::new(usize::MAX));
    let observed = Arc::clone(&last_count);
    pool.set_count_change_callback(move |count| observed.store(count, Ordering::SeqCst));

    let first = pool.create("load", 10);
    pool.create("search", 4);
    assert_eq!(pool.count(), 2);
    assert_eq!(last_count.load(Ordering::SeqCst), 2);

    first.lock().poll(0.5);
    assert_eq!(first.lock().label(), "load");

    assert!(pool.remove(0));
    assert!(!pool.remove(5));
    assert_eq!(pool.count(), 1);
    assert_eq!(last_count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_pool_shared_across_threads() {
    let pool = Arc::new(ProgressPool::new(LogProgressFactory));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let pool = Arc::clone(&pool);
            std::thread::spawn(move || {
                let bar = pool.create(&format!("worker {}", i), 5);
                for step in 0..=5 {
                    bar.lock().poll_steps(step, 5);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(pool.count(), 4);
}

#[test]
fn test_log_bar_steps() {
    let mut bar = LogProgressBar::new("scan", 0);
    assert_eq!(bar.steps(), 1);
    bar.set_steps(5);
    bar.poll_steps(2, 5);
    assert_eq!(bar.last_reported_step(), Some(2));
}

// ==================== Profiling Tests ====================

#[test]
fn test_profiler_summary_shape() {
    let mut profiler = Profiler::new();
    profiler.start("build");
    profiler.end("build");
    profiler.profile("search");
    profiler.profile("search");

    let mut lines = Vec::new();
    profiler.summarize(DurationUnit::Nanos, |line| lines.push(line.to_string()));

    if Profiler::enabled() {
        assert!(lines.contains(&"Profiling summary".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("  Summed: ")));
        assert_eq!(lines.last().map(String::as_str), Some("Finished summary"));
    } else {
        assert!(lines.is_empty());
    }

    // A second summary has nothing left to report.
    let mut again = Vec::new();
    profiler.summarize(DurationUnit::Nanos, |line| again.push(line.to_string()));
    assert!(again.is_empty());
}

#[test]
fn test_format_line_alignment() {
    let line = format_line("search", 1234, DurationUnit::Micros);
    assert_eq!(line.len(), 2 + 25 + 11 + 2);
    assert!(line.starts_with("  search"));
    assert!(line.ends_with("1234us"));
}

// ==================== Color Tests ====================

#[test]
fn test_hsv_rgb_conversion() {
    let red: Rgb = Hsv::new(0.0, 1.0, 1.0).into();
    assert_eq!(red.to_hex(), "#ff0000");
    let back: Hsv = red.into();
    assert!(back.h.abs() < 1e-4);
    assert!((back.s - 1.0).abs() < 1e-4);
}

#[test]
fn test_palette_one_color_per_component() {
    let mut g: UnGraph = Graph::new();
    let a = g.add_node();
    let b = g.add_node();
    g.add_node();
    g.add_edge(a, b);

    let coloring = g.connected_components();
    let palette = component_palette(&coloring);
    assert_eq!(palette.len(), 2);
    assert_ne!(palette[0], palette[1]);
    assert_eq!(uniform_hues_rgb(0).len(), 0);
}

#[test]
fn test_jet_endpoints() {
    let map = rgb_jet();
    let low = map(0.0);
    let high = map(1.0);
    assert!(low.b > low.r);
    assert!(high.r > high.b);
}

// ==================== CLI Helpers ====================

/// Locate the `adjg` binary built alongside test binaries.
fn adjg_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_adjg"))
}

/// Run the `adjg` CLI with the given arguments and return the output.
fn run_adjg(args: &[&str]) -> Output {
    Command::new(adjg_bin())
        .args(args)
        .output()
        .expect("Failed to run adjg")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "adjg failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_create_and_info() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();

    let output = run_adjg(&["create", path, "--direction", "undirected", "--simple"]);
    assert_success(&output);

    let graph: Graph<Undirected, Simple, String, String> =
        GraphReader::read_from_file(tmp.path()).unwrap();
    assert_eq!(graph.node_count(), 0);

    let output = run_adjg(&["info", path]);
    assert_success(&output);
    let info = stdout_str(&output);
    assert!(
        info.contains("Configuration: undirected/simple"),
        "Expected configuration in info output: {}",
        info
    );
    assert!(info.contains("Nodes: 0"), "Expected 'Nodes: 0' in: {}", info);
}

#[test]
fn test_cli_build_and_components() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();

    assert_success(&run_adjg(&["create", path, "--direction", "undirected"]));
    for label in ["one", "two", "three", "four"] {
        assert_success(&run_adjg(&["add-node", path, "--label", label]));
    }
    assert_success(&run_adjg(&["link", path, "0", "1"]));
    assert_success(&run_adjg(&["link", path, "2", "3", "--label", "pair"]));

    let output = run_adjg(&["components", path]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("Components: 2"), "Expected two components: {}", out);
    assert!(out.contains("0:one 1:two"), "Expected first component: {}", out);

    let output = run_adjg(&["--format", "json", "components", path, "--colors"]);
    assert_success(&output);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 2);
    assert_eq!(json["components"][1]["nodes"], serde_json::json!([2, 3]));
    assert!(json["components"][0]["color"].is_string());
}

#[test]
fn test_cli_bfs_with_blocked_step() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();

    assert_success(&run_adjg(&["create", path]));
    for _ in 0..3 {
        assert_success(&run_adjg(&["add-node", path]));
    }
    assert_success(&run_adjg(&["link", path, "0", "1"]));
    assert_success(&run_adjg(&["link", path, "1", "2"]));

    let output = run_adjg(&["--format", "json", "bfs", path, "0"]);
    assert_success(&output);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["visited"], serde_json::json!([0, 1, 2]));

    let output = run_adjg(&["--format", "json", "bfs", path, "0", "--block", "0:1"]);
    assert_success(&output);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["visited"], serde_json::json!([0]));
    assert_eq!(json["pruned"], serde_json::json!([1]));
}

#[test]
fn test_cli_prune_and_export() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();

    assert_success(&run_adjg(&["create", path, "--direction", "bidirectional"]));
    for _ in 0..3 {
        assert_success(&run_adjg(&["add-node", path]));
    }
    assert_success(&run_adjg(&["link", path, "0", "1", "--label", "keep"]));
    assert_success(&run_adjg(&["link", path, "1", "2", "--label", "drop"]));
    assert_success(&run_adjg(&["link", path, "2", "0", "--label", "drop"]));

    let output = run_adjg(&["prune", path, "--label", "drop"]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("Removed 2 edges, 1 remaining"), "Unexpected prune output: {}", out);

    let graph: Graph<Bidirectional, adjgraph::Multi, String, String> =
        GraphReader::read_from_file(tmp.path()).unwrap();
    assert_eq!(graph.edge_count(), 1);

    let output = run_adjg(&["export", path]);
    assert_success(&output);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"], "bidirectional/multi");
    assert_eq!(json["edges"][0]["label"], "keep");
}

#[test]
fn test_cli_unknown_node_exit_code() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();

    assert_success(&run_adjg(&["create", path]));
    let output = run_adjg(&["link", path, "0", "7"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_cli_bad_file_exit_code() {
    let tmp = NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), vec![0u8; 128]).unwrap();
    let output = run_adjg(&["info", tmp.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}
