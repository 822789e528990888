//! CLI command implementations.
//!
//! Files store labelled graphs (`String` node and edge properties). The
//! direction and multiplicity recorded in a file's header select the graph
//! type a command runs against.

use std::path::Path;

use crate::format::{GraphReader, GraphWriter, MmapReader};
use crate::graph::Graph;
use crate::profiling::{DurationUnit, Profiler};
use crate::progress::{LogProgressBar, ProgressBar};
use crate::types::{
    describe_config, Bidirectional, Directed, Direction, DirectionKind, GraphError, GraphResult,
    Multi, Multiplicity, NodeHandle, Simple, Undirected,
};
use crate::vis::component_palette;

/// The graph type stored in .adjg files written by the CLI.
pub type LabelGraph<D, M> = Graph<D, M, String, String>;

/// A command that runs against a concrete graph configuration.
pub trait GraphCommand {
    /// Run with the configuration given by `D` and `M`.
    fn run<D: Direction, M: Multiplicity>(self, path: &Path) -> GraphResult<()>;
}

/// Run `command` with the type-level configuration named by `direction` and `multi`.
pub fn dispatch_config<C: GraphCommand>(
    direction: DirectionKind,
    multi: bool,
    path: &Path,
    command: C,
) -> GraphResult<()> {
    match (direction, multi) {
        (DirectionKind::Directed, true) => command.run::<Directed, Multi>(path),
        (DirectionKind::Directed, false) => command.run::<Directed, Simple>(path),
        (DirectionKind::Undirected, true) => command.run::<Undirected, Multi>(path),
        (DirectionKind::Undirected, false) => command.run::<Undirected, Simple>(path),
        (DirectionKind::Bidirectional, true) => command.run::<Bidirectional, Multi>(path),
        (DirectionKind::Bidirectional, false) => command.run::<Bidirectional, Simple>(path),
    }
}

/// Run `command` with the configuration stored in the file at `path`.
pub fn dispatch_file<C: GraphCommand>(path: &Path, command: C) -> GraphResult<()> {
    let header = GraphReader::read_header_from_file(path)?;
    dispatch_config(header.direction, header.multi, path, command)
}

fn load<D: Direction, M: Multiplicity>(path: &Path) -> GraphResult<LabelGraph<D, M>> {
    GraphReader::read_from_file(path)
}

fn save<D: Direction, M: Multiplicity>(graph: &LabelGraph<D, M>, path: &Path) -> GraphResult<()> {
    GraphWriter::new().write_to_file(graph, path)
}

fn node_handle<D: Direction, M: Multiplicity>(
    graph: &LabelGraph<D, M>,
    id: u64,
) -> GraphResult<NodeHandle> {
    let node = NodeHandle::from_index(id as usize);
    if id > u32::MAX as u64 || !graph.contains_node(node) {
        return Err(GraphError::NodeNotFound(id));
    }
    Ok(node)
}

fn print_json(value: &serde_json::Value, pretty: bool) {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    println!("{}", text.unwrap_or_default());
}

/// Create a new empty .adjg file.
pub fn cmd_create(path: &Path, direction: DirectionKind, multi: bool, json: bool) -> GraphResult<()> {
    dispatch_config(direction, multi, path, Create)?;
    let config = describe_config(direction, multi);
    if json {
        print_json(
            &serde_json::json!({"file": path.display().to_string(), "config": config}),
            false,
        );
    } else {
        println!("Created {} ({})", path.display(), config);
    }
    Ok(())
}

struct Create;

impl GraphCommand for Create {
    fn run<D: Direction, M: Multiplicity>(self, path: &Path) -> GraphResult<()> {
        save(&LabelGraph::<D, M>::new(), path)
    }
}

/// Display information about an .adjg file without loading properties.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let reader = MmapReader::open(path)?;
    let header = *reader.header();
    let stats = reader.degree_stats()?;

    if json {
        print_json(
            &serde_json::json!({
                "file": path.display().to_string(),
                "version": header.version,
                "config": header.config_name(),
                "nodes": header.node_count,
                "edges": header.edge_count,
                "created_at": header.created_at,
                "file_size": reader.file_size(),
                "max_out_degree": stats.max_out_degree,
                "max_in_degree": stats.max_in_degree,
                "isolated_nodes": stats.isolated,
                "self_loops": stats.self_loops,
            }),
            true,
        );
    } else {
        println!("File: {}", path.display());
        println!("Version: {}", header.version);
        println!("Configuration: {}", header.config_name());
        println!("Nodes: {}", header.node_count);
        println!("Edges: {}", header.edge_count);
        println!("Written: {}", format_timestamp(header.created_at));
        println!("File size: {}", format_size(reader.file_size()));
        println!("Max out-degree: {}", stats.max_out_degree);
        println!("Max in-degree: {}", stats.max_in_degree);
        println!("Isolated nodes: {}", stats.isolated);
        println!("Self-loops: {}", stats.self_loops);
    }
    Ok(())
}

/// Add a node to the graph.
pub fn cmd_add_node(path: &Path, label: &str, json: bool) -> GraphResult<()> {
    dispatch_file(
        path,
        AddNode {
            label: label.to_string(),
            json,
        },
    )
}

struct AddNode {
    label: String,
    json: bool,
}

impl GraphCommand for AddNode {
    fn run<D: Direction, M: Multiplicity>(self, path: &Path) -> GraphResult<()> {
        let mut graph = load::<D, M>(path)?;
        let node = graph.add_node_with(self.label.clone());
        save(&graph, path)?;

        if self.json {
            print_json(
                &serde_json::json!({"id": node.index(), "label": self.label}),
                false,
            );
        } else {
            println!("Added node {} ({:?})", node.index(), self.label);
        }
        Ok(())
    }
}

/// Add an edge between two nodes.
pub fn cmd_link(path: &Path, source: u64, target: u64, label: &str, json: bool) -> GraphResult<()> {
    dispatch_file(
        path,
        Link {
            source,
            target,
            label: label.to_string(),
            json,
        },
    )
}

struct Link {
    source: u64,
    target: u64,
    label: String,
    json: bool,
}

impl GraphCommand for Link {
    fn run<D: Direction, M: Multiplicity>(self, path: &Path) -> GraphResult<()> {
        let mut graph = load::<D, M>(path)?;
        let source = node_handle(&graph, self.source)?;
        let target = node_handle(&graph, self.target)?;
        let (edge, inserted) = graph.try_add_edge(source, target, self.label.clone())?;
        if inserted {
            save(&graph, path)?;
        }

        if self.json {
            print_json(
                &serde_json::json!({
                    "edge": edge.index(),
                    "source": self.source,
                    "target": self.target,
                    "inserted": inserted,
                }),
                false,
            );
        } else if inserted {
            println!(
                "Linked {} --{}--> {} (edge {})",
                self.source,
                self.label,
                self.target,
                edge.index()
            );
        } else {
            println!(
                "Edge {} -> {} already exists (edge {})",
                self.source,
                self.target,
                edge.index()
            );
        }
        Ok(())
    }
}

/// Remove edges touching `node` and/or carrying `label`. With neither filter nothing is removed.
pub fn cmd_prune(path: &Path, node: Option<u64>, label: Option<String>, json: bool) -> GraphResult<()> {
    dispatch_file(path, Prune { node, label, json })
}

struct Prune {
    node: Option<u64>,
    label: Option<String>,
    json: bool,
}

impl GraphCommand for Prune {
    fn run<D: Direction, M: Multiplicity>(self, path: &Path) -> GraphResult<()> {
        let mut graph = load::<D, M>(path)?;
        let node = self.node.map(|id| node_handle(&graph, id)).transpose()?;

        let removed = if node.is_none() && self.label.is_none() {
            0
        } else {
            graph.prune_edges(|g, edge| {
                let (source, target) = g.endpoints(edge);
                let touches = node.map_or(true, |n| source == n || target == n);
                let labelled = self
                    .label
                    .as_deref()
                    .map_or(true, |l| g.edge_property(edge).map(String::as_str) == Some(l));
                touches && labelled
            })
        };
        if removed > 0 {
            save(&graph, path)?;
        }

        if self.json {
            print_json(
                &serde_json::json!({"removed": removed, "remaining": graph.edge_count()}),
                false,
            );
        } else {
            println!(
                "Removed {} edges, {} remaining",
                removed,
                graph.edge_count()
            );
        }
        Ok(())
    }
}

/// List connected components.
pub fn cmd_components(path: &Path, colors: bool, json: bool) -> GraphResult<()> {
    dispatch_file(path, Components { colors, json })
}

struct Components {
    colors: bool,
    json: bool,
}

impl GraphCommand for Components {
    fn run<D: Direction, M: Multiplicity>(self, path: &Path) -> GraphResult<()> {
        let graph = load::<D, M>(path)?;
        let coloring = graph.connected_components();
        let palette = component_palette(&coloring);
        let partition = coloring.partition();

        if self.json {
            let components: Vec<serde_json::Value> = partition
                .iter()
                .enumerate()
                .map(|(id, nodes)| {
                    let mut entry = serde_json::json!({
                        "id": id,
                        "nodes": nodes.iter().map(|n| n.index()).collect::<Vec<_>>(),
                        "edges": graph.component_edges(nodes).len(),
                    });
                    if self.colors {
                        entry["color"] = serde_json::json!(palette[id].to_hex());
                    }
                    entry
                })
                .collect();
            print_json(
                &serde_json::json!({"count": coloring.count(), "components": components}),
                true,
            );
        } else {
            println!("Components: {}", coloring.count());
            for (id, nodes) in partition.iter().enumerate() {
                let labels: Vec<String> = nodes
                    .iter()
                    .map(|&n| match graph.node_property(n) {
                        Some(label) if !label.is_empty() => format!("{}:{}", n.index(), label),
                        _ => n.index().to_string(),
                    })
                    .collect();
                let color = if self.colors {
                    format!(" {}", palette[id].to_hex())
                } else {
                    String::new()
                };
                println!(
                    "  [{}]{} {} nodes, {} edges: {}",
                    id,
                    color,
                    nodes.len(),
                    graph.component_edges(nodes).len(),
                    labels.join(" ")
                );
            }
        }
        Ok(())
    }
}

/// Breadth-first search from `start`, refusing the listed `(source, target)` steps.
pub fn cmd_bfs(path: &Path, start: u64, blocked: Vec<(u64, u64)>, json: bool) -> GraphResult<()> {
    dispatch_file(
        path,
        Bfs {
            start,
            blocked,
            json,
        },
    )
}

struct Bfs {
    start: u64,
    blocked: Vec<(u64, u64)>,
    json: bool,
}

impl GraphCommand for Bfs {
    fn run<D: Direction, M: Multiplicity>(self, path: &Path) -> GraphResult<()> {
        let mut profiler = Profiler::new();
        profiler.start("load");
        let graph = load::<D, M>(path)?;
        profiler.end("load");
        let start = node_handle(&graph, self.start)?;

        let total = graph.node_count() as u32;
        let mut progress = LogProgressBar::new("bfs", 10);
        let mut seen = 0u32;

        profiler.start("search");
        let outcome = graph.bfs_search(
            start,
            |_, _| {
                seen += 1;
                progress.poll_steps(seen, total);
            },
            |_, u, v| {
                let (u, v) = (u.index() as u64, v.index() as u64);
                !self
                    .blocked
                    .iter()
                    .any(|&(s, t)| (s, t) == (u, v) || (D::SYMMETRIC && (t, s) == (u, v)))
            },
        );
        profiler.end("search");
        profiler.summarize_to_log(DurationUnit::Micros);

        let visited: Vec<usize> = outcome.visited.iter().map(|n| n.index()).collect();
        let pruned: Vec<usize> = outcome.pruned.iter().map(|n| n.index()).collect();
        if self.json {
            print_json(
                &serde_json::json!({"start": self.start, "visited": visited, "pruned": pruned}),
                false,
            );
        } else {
            println!("Visited {} nodes from {}:", visited.len(), self.start);
            for node in &outcome.visited {
                match graph.node_property(*node) {
                    Some(label) if !label.is_empty() => println!("  {} {:?}", node.index(), label),
                    _ => println!("  {}", node.index()),
                }
            }
            if !pruned.is_empty() {
                println!("Pruned: {:?}", pruned);
            }
        }
        Ok(())
    }
}

/// Export the graph as JSON.
pub fn cmd_export(path: &Path, pretty: bool) -> GraphResult<()> {
    dispatch_file(path, Export { pretty })
}

struct Export {
    pretty: bool,
}

impl GraphCommand for Export {
    fn run<D: Direction, M: Multiplicity>(self, path: &Path) -> GraphResult<()> {
        let graph = load::<D, M>(path)?;
        let nodes: Vec<serde_json::Value> = graph
            .nodes()
            .map(|n| {
                serde_json::json!({
                    "id": n.index(),
                    "label": graph.node_property(n),
                })
            })
            .collect();
        let edges: Vec<serde_json::Value> = graph
            .edges()
            .map(|e| {
                let (source, target) = graph.endpoints(e);
                serde_json::json!({
                    "source": source.index(),
                    "target": target.index(),
                    "label": graph.edge_property(e),
                })
            })
            .collect();
        print_json(
            &serde_json::json!({
                "config": describe_config(D::KIND, M::ALLOWS_PARALLEL),
                "nodes": nodes,
                "edges": edges,
            }),
            self.pretty,
        );
        Ok(())
    }
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

fn format_timestamp(micros: u64) -> String {
    let secs = (micros / 1_000_000) as i64;
    let dt = chrono::DateTime::from_timestamp(secs, 0);
    match dt {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{} us", micros),
    }
}
