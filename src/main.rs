use clap::{Parser, Subcommand};
use graph_navigator::{
    breadth_first_search, depth_first_search, least_spanning_tree, shortest_path_between_vertices,
    shortest_paths_between_all_vertices, solve_traveling_salesman_problem_with, AntColonyParams,
    Graph, Result, TsmResult,
};
use ndarray::prelude::*;
use rand::{rngs::StdRng, thread_rng, SeedableRng};
use serde::Serialize;
use std::{env, fs::File, io::BufReader, path::PathBuf, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Opt {
    /// Adjacency matrix file: a header line holding N, then N² whitespace separated weights
    graph: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Breadth first traversal
    Bfs { start: usize },
    /// Depth first traversal
    Dfs { start: usize },
    /// Distance between two vertices, 0 when there is no path
    ShortestPath { from: usize, to: usize },
    /// Distances between every pair of vertices
    AllPairs,
    /// Minimum spanning tree as an adjacency matrix
    SpanningTree {
        /// Also write the tree as a DOT file
        #[arg(long)]
        dot: Option<PathBuf>,
    },
    /// Approximate the traveling salesman tour with an ant colony
    Tsp {
        /// JSON file overriding ant colony parameters
        #[arg(long)]
        params: Option<PathBuf>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Write the graph as a DOT file
    Export { path: PathBuf },
    /// Print the adjacency matrix
    Show,
}

fn main() -> ExitCode {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "graph_navigator=info")
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let opt = Opt::parse();

    match run(opt) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(opt: Opt) -> Result<String> {
    let graph = Graph::load_from_file(&opt.graph)?;
    info!(vertices = graph.size(), "Loaded graph");
    let json = opt.json;

    match opt.command {
        Command::Bfs { start } => render_path(&breadth_first_search(&graph, start), json),
        Command::Dfs { start } => render_path(&depth_first_search(&graph, start), json),
        Command::ShortestPath { from, to } => {
            let distance = shortest_path_between_vertices(&graph, from, to);
            if json {
                render_json(&distance)
            } else {
                Ok(distance.to_string())
            }
        }
        Command::AllPairs => {
            render_matrix(shortest_paths_between_all_vertices(&graph).view(), json, |cell| {
                match cell {
                    Some(distance) => distance.to_string(),
                    None => "inf".to_owned(),
                }
            })
        }
        Command::SpanningTree { dot } => {
            let tree = least_spanning_tree(&graph)?;
            if let Some(dot) = dot {
                let written = Graph::from_matrix(tree.clone())?.export_to_dot(dot)?;
                info!("Wrote spanning tree to {}", written.display());
            }
            render_matrix(tree.view(), json, ToString::to_string)
        }
        Command::Tsp { params, seed } => {
            let params: AntColonyParams = match params {
                Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))
                    .map_err(std::io::Error::from)?,
                None => AntColonyParams::default(),
            };
            let result = match seed {
                Some(seed) => solve_traveling_salesman_problem_with(
                    &graph,
                    &params,
                    &mut StdRng::seed_from_u64(seed),
                )?,
                None => solve_traveling_salesman_problem_with(&graph, &params, &mut thread_rng())?,
            };
            render_tour(&result, json)
        }
        Command::Export { path } => {
            let written = graph.export_to_dot(path)?;
            Ok(format!("Wrote graph to {}", written.display()))
        }
        Command::Show => render_matrix(graph.matrix(), json, ToString::to_string),
    }
}

/// `1->3->6`
fn join_path(vertices: &[usize]) -> String {
    vertices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("->")
}

fn render_path(vertices: &[usize], json: bool) -> Result<String> {
    if json {
        render_json(vertices)
    } else {
        Ok(join_path(vertices))
    }
}

fn render_tour(result: &TsmResult, json: bool) -> Result<String> {
    if json {
        render_json(result)
    } else {
        Ok(format!("{}\n{}", join_path(&result.vertices), result.distance))
    }
}

/// Space separated rows as text, an array of rows as JSON.
fn render_matrix<T: Serialize + Clone>(
    matrix: ArrayView2<T>,
    json: bool,
    render: impl Fn(&T) -> String,
) -> Result<String> {
    if json {
        let rows = matrix
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect::<Vec<_>>();
        return render_json(&rows);
    }
    Ok(matrix
        .rows()
        .into_iter()
        .map(|row| row.iter().map(&render).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value).map_err(std::io::Error::from)?)
}
