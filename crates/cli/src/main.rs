use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dchull::hull2::rand::{draw_points, PointDist, ReplayToken, SampleCfg};
use dchull::hull2::validate::first_outside;
use dchull::{brute_force_hull, compute_hull_with, HullCfg, Vec2};
use serde::Serialize;
use serde_json::json;
use std::hint::black_box;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

#[derive(Parser)]
#[command(name = "dchull")]
#[command(about = "Divide-and-conquer convex hulls of planar point sets")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Hull of a point file; JSON to stdout or --out (with a provenance sidecar)
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = f64::EPSILON)]
        eps: f64,
        #[arg(long, default_value_t = 10)]
        threshold: usize,
        /// Recurse in parallel on sub-problems with at least this many points
        #[arg(long)]
        parallel: Option<usize>,
        /// Verify containment and orientation before writing
        #[arg(long)]
        check: bool,
    },
    /// Write a random point file
    Gen {
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = Dist::Square)]
        dist: Dist,
        #[arg(long, default_value_t = 100.0)]
        half_width: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Time the hull over several sizes
    Bench {
        /// Comma-separated sizes
        #[arg(long, value_delimiter = ',', default_values_t = [1_000usize, 10_000, 100_000])]
        sizes: Vec<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Also time the brute-force hull for sizes up to this bound
        #[arg(long, default_value_t = 0)]
        brute_max: usize,
        #[arg(long, default_value_t = 3)]
        reps: usize,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Dist {
    Square,
    Disk,
    Circle,
    Lattice,
}

impl From<Dist> for PointDist {
    fn from(d: Dist) -> Self {
        match d {
            Dist::Square => PointDist::Square,
            Dist::Disk => PointDist::Disk,
            Dist::Circle => PointDist::Circle,
            Dist::Lattice => PointDist::Lattice,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            eps,
            threshold,
            parallel,
            check,
        } => {
            let mut cfg = HullCfg::default().with_eps(eps).with_threshold(threshold);
            if let Some(cutoff) = parallel {
                cfg = cfg.with_parallel_cutoff(cutoff);
            }
            hull(&input, out.as_deref(), cfg, check)
        }
        Action::Gen {
            n,
            seed,
            dist,
            half_width,
            out,
        } => gen(n, seed, dist, half_width, &out),
        Action::Bench {
            sizes,
            seed,
            brute_max,
            reps,
        } => bench(&sizes, seed, brute_max, reps),
        Action::Report => report(),
    }
}

#[derive(Debug, Serialize)]
struct HullOut {
    hull: Vec<[f64; 2]>,
    n_input: usize,
    n_hull: usize,
    millis: f64,
}

fn run_hull(points: &[Vec2<f64>], cfg: HullCfg, check: bool) -> Result<HullOut> {
    let t0 = Instant::now();
    let h = compute_hull_with(points, cfg)?;
    let millis = t0.elapsed().as_secs_f64() * 1e3;
    if check {
        let slack = cfg.eps.max(1e-9);
        if let Some(i) = first_outside(h.vertices(), points, slack) {
            bail!("check failed: point {i} lies outside the hull");
        }
        if !h.is_clockwise_eps(slack) {
            bail!("check failed: hull is not clockwise");
        }
    }
    Ok(HullOut {
        hull: h.vertices().iter().map(|p| [p.x, p.y]).collect(),
        n_input: points.len(),
        n_hull: h.len(),
        millis,
    })
}

fn hull(input: &Path, out: Option<&Path>, cfg: HullCfg, check: bool) -> Result<()> {
    let points = io::read_points(input)?;
    let res = run_hull(&points, cfg, check)?;
    tracing::info!(
        input = %input.display(),
        n_input = res.n_input,
        n_hull = res.n_hull,
        millis = res.millis,
        "hull"
    );
    let body = serde_json::to_vec_pretty(&res)?;
    match out {
        Some(out) => {
            io::ensure_parent(out)?;
            std::fs::write(out, &body).with_context(|| format!("writing {}", out.display()))?;
            let payload = provenance::Payload::new(
                "hull",
                json!({
                    "input": input.to_string_lossy(),
                    "eps": cfg.eps,
                    "threshold": cfg.brute_force_threshold,
                    "parallel_cutoff": cfg.parallel_cutoff,
                    "check": check,
                }),
            );
            provenance::write_sidecar(out, payload)?;
        }
        None => println!("{}", String::from_utf8_lossy(&body)),
    }
    Ok(())
}

fn gen(n: usize, seed: u64, dist: Dist, half_width: f64, out: &Path) -> Result<()> {
    let cfg = SampleCfg {
        n,
        dist: dist.into(),
        half_width,
    };
    let points = draw_points(cfg, ReplayToken::new(seed, 0));
    let header = format!("n={n} seed={seed} dist={dist:?} half_width={half_width}");
    io::write_points(out, &points, &header)?;
    tracing::info!(n, seed, dist = ?dist, out = %out.display(), "gen");
    Ok(())
}

#[derive(Debug, Serialize)]
struct BenchRow {
    n: usize,
    n_hull: usize,
    dc_millis: f64,
    /// Divide-and-conquer nanoseconds per `n ln n`; flat across sizes when scaling holds.
    dc_ns_per_nlogn: f64,
    brute_millis: Option<f64>,
}

/// Fastest of `reps` runs of `f`, in milliseconds; results go through `black_box`.
fn best_millis<T, F: FnMut() -> T>(reps: usize, mut f: F) -> f64 {
    (0..reps.max(1))
        .map(|_| {
            let t0 = Instant::now();
            black_box(f());
            t0.elapsed().as_secs_f64() * 1e3
        })
        .fold(f64::INFINITY, f64::min)
}

fn bench(sizes: &[usize], seed: u64, brute_max: usize, reps: usize) -> Result<()> {
    let cfg = HullCfg::default();
    let mut rows = Vec::with_capacity(sizes.len());
    for (k, &n) in sizes.iter().enumerate() {
        let pts = draw_points(
            SampleCfg {
                n,
                dist: PointDist::Disk,
                half_width: 1000.0,
            },
            ReplayToken::new(seed, k as u64),
        );
        let n_hull = compute_hull_with(&pts, cfg)?.len();
        let dc_millis = best_millis(reps, || compute_hull_with(&pts, cfg));
        let brute_millis =
            (n <= brute_max).then(|| best_millis(reps, || brute_force_hull(&pts, cfg.eps)));
        let nlogn = (n.max(2) as f64) * (n.max(2) as f64).ln();
        let row = BenchRow {
            n,
            n_hull,
            dc_millis,
            dc_ns_per_nlogn: dc_millis * 1e6 / nlogn,
            brute_millis,
        };
        tracing::info!(
            n,
            n_hull,
            dc_millis,
            dc_ns_per_nlogn = row.dc_ns_per_nlogn,
            brute_millis = ?brute_millis,
            "bench"
        );
        rows.push(row);
    }
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::header())?);
    Ok(())
}
