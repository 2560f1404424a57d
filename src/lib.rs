// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod export;
pub mod logging;
pub mod report;
pub mod task;

use anyhow::{Result, anyhow};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, default_config_path, load_from_path, load_or_default};
use crate::dag::{
    build_layered_dag, build_linear_chain, compute_layers, find_cycle_node, generate_random_dag,
    resolve_seed, seeded_rng, topological_sort,
};
use crate::errors::DagError;
use crate::export::{
    DotOptions, GraphvizRenderer, NoopRenderer, Renderer, prepare_output_dir, save_dag,
};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (file + CLI overrides)
/// - random DAG generation
/// - topological order and execution layers
/// - linear / layered rebuilds
/// - diagram export for all three graphs
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_config(&args)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let seed = resolve_seed(cfg.generate.seed);
    info!(
        nodes = cfg.generate.nodes,
        p = cfg.generate.probability,
        seed,
        "generating random DAG"
    );
    let mut rng = seeded_rng(seed);
    let g = generate_random_dag(cfg.generate.nodes, cfg.generate.probability, &mut rng);

    let opts = DotOptions {
        rankdir: cfg.output.rankdir.clone(),
        names: cfg.output.names,
    };
    let mut renderer: Box<dyn Renderer> = if cfg.output.render {
        Box::new(GraphvizRenderer::new(
            cfg.output.renderer.clone(),
            cfg.output.format.clone(),
        ))
    } else {
        Box::new(NoopRenderer)
    };

    let out_dir = cfg.output.dir.clone();
    prepare_output_dir(&out_dir, cfg.output.clean).await?;

    if args.print {
        println!("Edges (initial DAG):");
        for line in report::edge_lines(&g, &opts) {
            println!("{line}");
        }
    }

    // 1) initial
    save_dag(&g, &out_dir.join("dag_initial"), None, &opts, renderer.as_mut()).await?;

    let order = match topological_sort(&g) {
        Ok(order) => order,
        Err(err @ DagError::Cycle { .. }) => {
            let culprit = find_cycle_node(&g)
                .map(|id| id.short())
                .unwrap_or_else(|| "?".to_string());
            return Err(anyhow!(err).context(format!(
                "generated graph is not a DAG (cycle through node {culprit})"
            )));
        }
        Err(err) => return Err(err.into()),
    };
    println!();
    println!("Topological order:");
    println!("{}", report::format_order(&order, &opts));

    let layers = compute_layers(&g);
    println!();
    println!("Execution layers:");
    for line in report::layer_lines(&layers, &opts) {
        println!("{line}");
    }

    // 2) final (linear)
    let linear = build_linear_chain(&order);
    save_dag(
        &linear,
        &out_dir.join("dag_final_linear"),
        None,
        &opts,
        renderer.as_mut(),
    )
    .await?;

    // 3) final (parallel)
    let parallel = build_layered_dag(&layers);
    save_dag(
        &parallel,
        &out_dir.join("dag_final_parallel"),
        Some(layers.as_slice()),
        &opts,
        renderer.as_mut(),
    )
    .await?;

    debug!(layers = layers.len(), "pipeline complete");
    Ok(())
}

/// Resolve the effective config: file (explicit or default path), then CLI
/// overrides, then validation.
pub fn load_config(args: &CliArgs) -> errors::Result<ConfigFile> {
    let mut raw = match &args.config {
        Some(path) => load_from_path(path)?,
        None => load_or_default(default_config_path())?,
    };
    args.overrides().apply(&mut raw);
    ConfigFile::try_from(raw)
}

/// Simple dry-run output: print the effective configuration.
fn print_dry_run(cfg: &ConfigFile) {
    println!("workflow-dag dry-run");
    println!("  generate.nodes = {}", cfg.generate.nodes);
    println!("  generate.probability = {}", cfg.generate.probability);
    if cfg.generate.seed == 0 {
        println!("  generate.seed = 0 (time-based)");
    } else {
        println!("  generate.seed = {}", cfg.generate.seed);
    }
    println!();
    println!("  output.dir = {}", cfg.output.dir.display());
    println!("  output.clean = {}", cfg.output.clean);
    println!("  output.names = {}", cfg.output.names);
    println!("  output.rankdir = {}", cfg.output.rankdir);
    if cfg.output.render {
        println!(
            "  output.render = {} -T{}",
            cfg.output.renderer, cfg.output.format
        );
    } else {
        println!("  output.render = false");
    }

    debug!("dry-run complete (nothing generated)");
}
