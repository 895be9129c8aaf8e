use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dchull::cloud::{draw_cloud, CloudCfg, CloudFamily, ReplayToken};
use dchull::hull::{sort_points, validate_input, HullSnapshot, NoObserver, SnapshotRecorder};
use dchull::reference::monotone_chain;
use dchull::{build_hull_with, HullCfg, HullLinks, PointId, Vec2};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Divide-and-conquer convex hull runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the hull of a point file and write it as JSON
    Hull(HullArgs),
    /// Write a random point file
    Gen(GenArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(clap::Args, Debug)]
struct HullArgs {
    /// Point file, one `x y` pair per line
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Include every intermediate hull of the recursion
    #[arg(long)]
    snapshots: bool,
    /// Cross-check against the monotone chain hull
    #[arg(long)]
    verify: bool,
    /// Collinearity band for the orientation determinant
    #[arg(long, default_value_t = 0.0)]
    eps_det: f64,
}

#[derive(clap::Args, Debug)]
struct GenArgs {
    #[arg(long, value_enum, default_value_t = Family::Disk)]
    family: Family,
    #[arg(long, default_value_t = 100)]
    count: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Family {
    #[value(name = "box")]
    UniformBox,
    Disk,
    Clusters,
    Circle,
}

impl Family {
    fn to_cloud(self) -> CloudFamily {
        match self {
            Family::UniformBox => CloudFamily::UniformBox { half_width: 1.0 },
            Family::Disk => CloudFamily::UniformDisk { radius: 1.0 },
            Family::Clusters => CloudFamily::Clusters {
                count: 3,
                spread: 1.0,
            },
            Family::Circle => CloudFamily::Circle { radius: 1.0 },
        }
    }
}

/// JSON document written by `hull`. Indices refer to `points`, which is the
/// input in sorted `(x, y)` order.
#[derive(Serialize)]
struct HullDoc {
    points: Vec<[f64; 2]>,
    hull_cw: Vec<usize>,
    links: Vec<LinkRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshots: Option<Vec<SnapshotRow>>,
}

#[derive(Serialize)]
struct LinkRow {
    cw: Option<usize>,
    ccw: Option<usize>,
}

#[derive(Serialize)]
struct SnapshotRow {
    start: usize,
    end: usize,
    cycle_cw: Vec<usize>,
    upper: Option<[usize; 2]>,
    lower: Option<[usize; 2]>,
}

impl From<&HullSnapshot> for SnapshotRow {
    fn from(s: &HullSnapshot) -> Self {
        Self {
            start: s.range.start,
            end: s.range.end,
            cycle_cw: s.cycle_cw.iter().map(|p| p.0).collect(),
            upper: s.bridges.map(|(u, _)| [u.l.0, u.r.0]),
            lower: s.bridges.map(|(_, l)| [l.l.0, l.r.0]),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull(args) => hull(&args),
        Action::Gen(args) => gen(&args),
        Action::Report => report(),
    }
}

fn hull(args: &HullArgs) -> Result<()> {
    tracing::info!(input = %args.input.display(), out = %args.out.display(), "hull");
    let mut points = points_io::read_points(&args.input)?;
    sort_points(&mut points);
    validate_input(&points)
        .with_context(|| format!("invalid point set in {}", args.input.display()))?;

    let cfg = HullCfg::with_eps_det(args.eps_det);
    let mut recorder = SnapshotRecorder::new();
    let links = if args.snapshots {
        build_hull_with(&points, cfg, &mut recorder)
    } else {
        build_hull_with(&points, cfg, &mut NoObserver)
    };
    let hull_cw: Vec<usize> = links
        .start()
        .map(|s| links.cycle_cw(s))
        .unwrap_or_default()
        .into_iter()
        .map(|p| p.0)
        .collect();
    tracing::info!(
        points = points.len(),
        hull = hull_cw.len(),
        interior = points.len() - links.hull_len(),
        "built"
    );
    if args.verify {
        // Three distinct collinear points are the one non-cyclic result.
        if !links.is_consistent() && points.len() != 3 {
            bail!("hull links do not form a single mutual cycle");
        }
        verify(&points, &hull_cw)?;
    }

    let doc = HullDoc {
        points: points.iter().map(|p| [p.x, p.y]).collect(),
        hull_cw,
        links: link_rows(&links),
        snapshots: args
            .snapshots
            .then(|| recorder.snapshots.iter().map(SnapshotRow::from).collect()),
    };
    write_json(&args.out, &doc)?;
    provenance::write_sidecar(
        &args.out,
        Payload::new(serde_json::json!({
            "cmd": "hull",
            "snapshots": args.snapshots,
            "verify": args.verify,
            "eps_det": cfg.eps_det,
        }))
        .with_input(&args.input),
    )?;
    Ok(())
}

fn link_rows(links: &HullLinks) -> Vec<LinkRow> {
    (0..links.len())
        .map(PointId)
        .map(|p| LinkRow {
            cw: links.cw(p).map(|q| q.0),
            ccw: links.ccw(p).map(|q| q.0),
        })
        .collect()
}

/// Every extreme point of the monotone chain hull must be on our hull; extra
/// non-extreme points (degenerate inputs, `eps_det` bands) are only reported.
fn verify(points: &[Vec2<f64>], hull_cw: &[usize]) -> Result<()> {
    let key = |i: usize| (points[i].x.to_bits(), points[i].y.to_bits());
    let got: BTreeSet<_> = hull_cw.iter().map(|&i| key(i)).collect();
    let want: BTreeSet<_> = monotone_chain(points).into_iter().map(key).collect();
    let missing = want.difference(&got).count();
    if missing > 0 {
        bail!(
            "hull is missing {missing} of {} extreme points",
            want.len()
        );
    }
    let extra = got.difference(&want).count();
    if extra > 0 {
        tracing::warn!(extra, "hull keeps points that are not strictly extreme");
    }
    tracing::info!(extreme = want.len(), "verified against monotone chain");
    Ok(())
}

fn gen(args: &GenArgs) -> Result<()> {
    tracing::info!(family = ?args.family, count = args.count, seed = args.seed, "gen");
    let cfg = CloudCfg {
        family: args.family.to_cloud(),
        count: args.count,
    };
    let points = draw_cloud(cfg, ReplayToken::new(args.seed, 0));
    points_io::write_points(&args.out, &points)?;
    provenance::write_sidecar(
        &args.out,
        Payload::new(serde_json::json!({
            "cmd": "gen",
            "family": format!("{:?}", args.family),
            "count": points.len(),
            "seed": args.seed,
        })),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::block(serde_json::json!({}), &[], &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
