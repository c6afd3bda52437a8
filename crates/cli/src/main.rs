use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use visgraph::api::{
    check_simple, draw_star_polygon, draw_two_opt_polygon, F64Kernel, I64Kernel, Kernel, KernelCfg, PolygonReplay,
    RandomPolygonCfg, VertexCount, VisibilityGraph,
};

mod io;
mod provenance;

use io::{read_polygon, write_json, EdgesOut, PolygonInput};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "visgraph-cli")]
#[command(about = "Visibility graphs of simple polygons")]
struct Cmd {
    /// Collinear band for the floating-point kernel
    #[arg(long, global = true, default_value_t = 0.0)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the visibility graph of a JSON polygon `[[x, y], ...]`
    Build {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Skip the simple-polygon precondition check
        #[arg(long)]
        no_check: bool,
    },
    /// Write a random simple polygon on the integer grid
    Random {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        /// Half-width of the coordinate box
        #[arg(long, default_value_t = 20)]
        grid: i64,
        /// `star` or `two-opt`
        #[arg(long, default_value = "star")]
        shape: String,
    },
    /// Build and cross-check against brute force
    Check {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = KernelCfg { eps_orient: cmd.eps };
    match cmd.action {
        Action::Build {
            input,
            out,
            no_check,
        } => build(&input, &out, cfg, !no_check).map(|_| ()),
        Action::Random {
            out,
            seed,
            index,
            vertices,
            grid,
            shape,
        } => random(&out, seed, index, vertices, grid, &shape),
        Action::Check { input } => check(&input, cfg),
        Action::Report => report(),
    }
}

fn build_checked<K: Kernel>(
    kernel: K,
    polygon: &[K::Point],
    precheck: bool,
) -> Result<VisibilityGraph<K>> {
    if precheck {
        check_simple(&kernel, polygon).context("input is not a ccw simple polygon")?;
    }
    Ok(VisibilityGraph::from_polygon(kernel, polygon))
}

/// Returns the number of edges written.
fn build(input: &Path, out: &Path, cfg: KernelCfg, precheck: bool) -> Result<usize> {
    let polygon = read_polygon(input)?;
    let n = polygon.len();
    tracing::info!(input = %input.display(), vertices = n, "build");
    let edges = match &polygon {
        PolygonInput::Int(poly) => {
            let g = build_checked(I64Kernel, poly, precheck)?;
            write_json(out, &EdgesOut::from_graph(&g, n, |p| *p))?;
            g.len()
        }
        PolygonInput::Float(_) => {
            let poly = polygon.to_f64();
            let g = build_checked(F64Kernel::new(cfg), &poly, precheck)?;
            write_json(out, &EdgesOut::from_graph(&g, n, |p| [p.x, p.y]))?;
            g.len()
        }
    };
    tracing::info!(edges, out = %out.display(), "build done");
    write_sidecar(
        out,
        Payload::new(
            "build",
            json!({
                "input": input.to_string_lossy(),
                "vertices": n,
                "edges": edges,
                "eps_orient": cfg.eps_orient,
                "precheck": precheck,
            }),
        ),
    )?;
    Ok(edges)
}

fn random(
    out: &Path,
    seed: u64,
    index: u64,
    vertices: usize,
    grid: i64,
    shape: &str,
) -> Result<()> {
    let cfg = RandomPolygonCfg {
        vertex_count: VertexCount::Fixed(vertices),
        grid,
        ..RandomPolygonCfg::default()
    };
    let tok = PolygonReplay { seed, index };
    let drawn = match shape {
        "star" => draw_star_polygon(cfg, tok),
        "two-opt" => draw_two_opt_polygon(cfg, tok),
        other => bail!("unknown shape {other:?}, expected star or two-opt"),
    };
    let Some(polygon) = drawn else {
        bail!("no {shape} polygon with {vertices} vertices on grid {grid} (seed {seed}, index {index})");
    };
    tracing::info!(seed, index, shape, vertices = polygon.len(), "random");
    write_json(out, &polygon)?;
    write_sidecar(
        out,
        Payload::new(
            "random",
            json!({
                "seed": seed,
                "index": index,
                "vertices": vertices,
                "grid": grid,
                "shape": shape,
            }),
        ),
    )?;
    Ok(())
}

fn validate_with<K: Kernel>(kernel: K, polygon: &[K::Point]) -> Result<usize> {
    let g = build_checked(kernel, polygon, true)?;
    g.validate(polygon)
        .map_err(|e| anyhow::anyhow!("sweep disagrees with brute force: {e}"))?;
    Ok(g.len())
}

fn check(input: &Path, cfg: KernelCfg) -> Result<()> {
    let polygon = read_polygon(input)?;
    let edges = match &polygon {
        PolygonInput::Int(poly) => validate_with(I64Kernel, poly)?,
        PolygonInput::Float(_) => validate_with(F64Kernel::new(cfg), &polygon.to_f64())?,
    };
    tracing::info!(vertices = polygon.len(), edges, "check ok");
    println!("ok: {} vertices, {edges} edges", polygon.len());
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document("report", json!({}), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn build_writes_edges_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("notch.json");
        let out = dir.path().join("out/edges.json");
        fs::write(&input, "[[0,0],[4,0],[4,4],[2,2],[0,4]]").unwrap();
        let n = build(&input, &out, KernelCfg::default(), true).unwrap();
        assert_eq!(n, 7);
        let edges: EdgesOut<i64> = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(edges.vertices, 5);
        assert_eq!(edges.edges.len(), 7);
        assert_eq!(edges.edges[0], [[0, 0], [0, 4]]);
        let side: Value =
            serde_json::from_slice(&fs::read(dir.path().join("out/edges.provenance.json")).unwrap())
                .unwrap();
        assert_eq!(side["params"]["edges"], 7);
    }

    #[test]
    fn build_accepts_float_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sq.json");
        let out = dir.path().join("edges.json");
        fs::write(&input, "[[0.5,0],[4,0],[4,4],[0,4]]").unwrap();
        assert_eq!(build(&input, &out, KernelCfg::default(), true).unwrap(), 6);
        let edges: EdgesOut<f64> = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(edges.edges[0], [[0.0, 4.0], [0.5, 0.0]]);
    }

    #[test]
    fn build_rejects_clockwise_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("cw.json");
        fs::write(&input, "[[0,0],[0,4],[4,4],[4,0]]").unwrap();
        let err = build(&input, &dir.path().join("e.json"), KernelCfg::default(), true)
            .unwrap_err();
        assert!(format!("{err:#}").contains("counter-clockwise"));
    }

    #[test]
    fn random_then_check_round_trips() {
        let dir = tempdir().unwrap();
        let poly = dir.path().join("poly.json");
        random(&poly, 3, 0, 10, 8, "star").unwrap();
        assert!(dir.path().join("poly.provenance.json").exists());
        check(&poly, KernelCfg::default()).unwrap();
        random(&poly, 3, 0, 25, 8, "two-opt").unwrap();
        check(&poly, KernelCfg::default()).unwrap();
        assert!(random(&poly, 3, 0, 10, 8, "spiral").is_err());
    }

    #[test]
    fn random_rejects_huge_grid() {
        let dir = tempdir().unwrap();
        let err = random(&dir.path().join("p.json"), 0, 0, 10, i64::MAX, "star").unwrap_err();
        assert!(format!("{err:#}").contains("no star polygon"));
    }

    #[test]
    fn build_rejects_out_of_range_coordinates() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("far.json");
        fs::write(&input, "[[0,0],[9223372036854775807,0],[0,4]]").unwrap();
        let err = build(&input, &dir.path().join("e.json"), KernelCfg::default(), false)
            .unwrap_err();
        assert!(format!("{err:#}").contains("2^62"));
    }
}
