use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use planar::prelude::*;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Inspect, combine and separate 2D polygons")]
struct Cmd {
    /// Optional run tag; propagated to logs and provenance sidecars
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

/// Polygons are JSON arrays of `[x, y]` pairs, inline or `@path/to/file.json`.
#[derive(Subcommand)]
enum Action {
    /// Validate a polygon and print its clockwise contour, bounds, middle and area
    Check { polygon: String },
    /// Strict interior test for a point
    Contains {
        polygon: String,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Do the interiors of two polygons intersect?
    Overlap { a: String, b: String },
    /// Union contour of two overlapping polygons
    Merge {
        a: String,
        b: String,
        /// Write the result here, with a provenance sidecar next to it
        #[arg(long)]
        out: Option<PathBuf>,
        /// Keep vertices lying on a straight run of the contour
        #[arg(long)]
        keep_collinear: bool,
    },
    /// Offset every edge outward
    Swell {
        polygon: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: f64,
    },
    /// Push the first polygon off the second along a direction
    Separate {
        polygon: String,
        other: String,
        #[arg(long, allow_hyphen_values = true)]
        dx: f64,
        #[arg(long, allow_hyphen_values = true)]
        dy: f64,
    },
    /// Draw reproducible random convex polygons
    Random {
        #[arg(long, default_value_t = 8)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        count: u64,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct Summary {
    vertices: Vec<[f64; 2]>,
    bounds: [f64; 4],
    middle: [f64; 2],
    area: f64,
}

impl Summary {
    fn of(p: &Polygon) -> Self {
        let b = p.get_bounds();
        let m = p.middle();
        Self {
            vertices: coords(p),
            bounds: [b.x, b.y, b.width, b.height],
            middle: [m.x, m.y],
            area: p.area(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let out = run(cmd.action, cmd.tag)?;
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn run(action: Action, tag: Option<String>) -> Result<Value> {
    match action {
        Action::Check { polygon } => {
            let p = load_polygon(&polygon)?;
            tracing::info!(vertices = p.len(), "check");
            Ok(serde_json::to_value(Summary::of(&p))?)
        }
        Action::Contains { polygon, x, y } => {
            let p = load_polygon(&polygon)?;
            let q = Point2::new(x, y);
            tracing::info!(x, y, "contains");
            Ok(json!({
                "inside": p.contains_point(q),
                "on_boundary": p.on_boundary(q),
            }))
        }
        Action::Overlap { a, b } => {
            let (pa, pb) = (load_polygon(&a)?, load_polygon(&b)?);
            let overlap = pa.overlap(&pb);
            tracing::info!(overlap, "overlap");
            Ok(json!({ "overlap": overlap }))
        }
        Action::Merge {
            a,
            b,
            out,
            keep_collinear,
        } => merge(&a, &b, out.as_deref(), keep_collinear, tag),
        Action::Swell { polygon, amount } => {
            let p = load_polygon(&polygon)?;
            tracing::info!(amount, "swell");
            let big = p
                .swell(amount)
                .with_context(|| format!("swelling by {amount}"))?;
            Ok(serde_json::to_value(Summary::of(&big))?)
        }
        Action::Separate {
            polygon,
            other,
            dx,
            dy,
        } => {
            let (p, q) = (load_polygon(&polygon)?, load_polygon(&other)?);
            tracing::info!(dx, dy, "separate");
            let moved = p.separate_from(&q, Vector2::new(dx, dy))?;
            let shift = moved.line_segments()[0].p1 - p.line_segments()[0].p1;
            Ok(json!({
                "shift": [shift.x, shift.y],
                "polygon": coords(&moved),
            }))
        }
        Action::Random {
            vertices,
            seed,
            count,
            radius,
        } => random(vertices, seed, count, radius),
        Action::Report => Ok(json!({
            "code_rev": provenance::current_git_rev(),
            "planar_version": planar::VERSION,
            "tag": tag,
        })),
    }
}

fn merge(
    a: &str,
    b: &str,
    out: Option<&Path>,
    keep_collinear: bool,
    tag: Option<String>,
) -> Result<Value> {
    let (pa, pb) = (load_polygon(a)?, load_polygon(b)?);
    let cfg = MergeCfg {
        simplify_collinear: !keep_collinear,
        ..MergeCfg::default()
    };
    let merged = pa.merge_with(&pb, cfg).context("merging polygons")?;
    tracing::info!(vertices = merged.len(), tag = ?tag, "merge");
    let summary = serde_json::to_value(Summary::of(&merged))?;
    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        std::fs::write(out, serde_json::to_vec_pretty(&coords(&merged))?)
            .with_context(|| format!("writing {}", out.display()))?;
        let params = json!({
            "a": a,
            "b": b,
            "simplify_collinear": cfg.simplify_collinear,
        });
        provenance::write_sidecar(out, "merge", &params, tag.as_deref())?;
    }
    Ok(summary)
}

fn random(vertices: usize, seed: u64, count: u64, radius: f64) -> Result<Value> {
    if vertices < 3 {
        bail!("need at least 3 vertices, got {vertices}");
    }
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(vertices),
        base_radius: radius,
        ..RadialCfg::default()
    };
    let drawn: Vec<Value> = (0..count)
        .map(|index| {
            let tok = ReplayToken { seed, index };
            match draw_polygon_radial(cfg, tok) {
                Some(p) => json!({ "index": index, "polygon": coords(&p) }),
                None => json!({ "index": index, "polygon": null }),
            }
        })
        .collect();
    tracing::info!(seed, count, vertices, "random");
    Ok(Value::Array(drawn))
}

/// Parse `[[x, y], ...]` from `arg`, or from the file named after a leading `@`.
fn load_polygon(arg: &str) -> Result<Polygon> {
    let text = match arg.strip_prefix('@') {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading polygon {path}"))?
        }
        None => arg.to_string(),
    };
    let pairs: Vec<[f64; 2]> =
        serde_json::from_str(&text).with_context(|| format!("parsing polygon JSON {arg}"))?;
    Polygon::from_coords(&pairs).with_context(|| format!("building polygon from {arg}"))
}

fn coords(p: &Polygon) -> Vec<[f64; 2]> {
    p.vertices().map(|v| [v.x, v.y]).collect()
}
