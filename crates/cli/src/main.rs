use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use zigzag::field::Zp;
use zigzag::{
    classify, lift, ClassifyCfg, ConeFiltration, StandardReduction, Zigzag, ZigzagDiagrams,
    ZigzagInput,
};

mod provenance;
mod table;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Zigzag diagrams and apex representatives")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify a zigzag into diagrams and write them as CSV or Parquet
    Diagrams {
        /// JSON file `{"simplices": [[..]], "times": [[..]]}`
        #[arg(long)]
        input: PathBuf,
        /// Output table; `.csv` or `.parquet`
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 2)]
        prime: u32,
        /// Omit zero-length points
        #[arg(long)]
        drop_diagonal: bool,
    },
    /// Print the apex representative of one point at one time as JSON
    Represent {
        #[arg(long)]
        input: PathBuf,
        /// Positive cone index of the point (the `origin` column)
        #[arg(long)]
        origin: usize,
        #[arg(long)]
        time: f64,
        #[arg(long, default_value_t = 2)]
        prime: u32,
    },
    /// Print version and code revision
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Diagrams {
            input,
            out,
            prime,
            drop_diagonal,
        } => diagrams(&input, &out, prime, drop_diagonal),
        Action::Represent {
            input,
            origin,
            time,
            prime,
        } => represent(&input, origin, time, prime),
        Action::Report => report(),
    }
}

fn load(input: &Path) -> Result<Zigzag> {
    let bytes = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let raw: ZigzagInput = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing zigzag JSON {}", input.display()))?;
    Ok(Zigzag::try_from(raw)?)
}

struct Computed {
    cone: ConeFiltration,
    red: StandardReduction<Zp>,
    dgms: ZigzagDiagrams,
}

fn compute(zz: &Zigzag, prime: u32, cfg: ClassifyCfg) -> Result<Computed> {
    let field = Zp::new(prime)?;
    let cone = ConeFiltration::build(zz);
    let red = StandardReduction::reduce(&cone, field)?;
    let dgms = classify(&red, &cone, cfg)?;
    Ok(Computed { cone, red, dgms })
}

fn diagrams(input: &Path, out: &Path, prime: u32, drop_diagonal: bool) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), prime, drop_diagonal, "diagrams");
    let zz = load(input)?;
    let cfg = ClassifyCfg {
        include_diagonal: !drop_diagonal,
    };
    let Computed { cone, dgms, .. } = compute(&zz, prime, cfg)?;
    let mut df = table::diagrams_frame(&dgms)?;
    table::write_frame(&mut df, out)?;
    tracing::info!(points = dgms.len(), cone_entries = cone.len(), "wrote diagrams");

    let payload = provenance::Payload::new(
        "diagrams",
        serde_json::json!({
            "input": input.to_string_lossy(),
            "prime": prime,
            "drop_diagonal": drop_diagonal,
            "simplices": zz.len(),
            "points": dgms.len(),
        }),
    );
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

#[derive(Serialize)]
struct Term {
    index: usize,
    simplex: String,
    coeff: u32,
}

#[derive(Serialize)]
struct Representation {
    origin: usize,
    dim: usize,
    kind: &'static str,
    birth: f64,
    death: f64,
    time: f64,
    terms: Vec<Term>,
}

fn representation(c: &Computed, origin: usize, time: f64) -> Result<Representation> {
    let point = c
        .dgms
        .iter()
        .find(|p| p.origin == origin)
        .ok_or_else(|| anyhow!("no diagram point with origin {origin}"))?;
    let rep = lift(point, &c.red, &c.cone)?;
    let terms = rep
        .representative(time)
        .into_iter()
        .map(|(index, coeff)| Term {
            index,
            simplex: c.cone[index].simplex.to_string(),
            coeff,
        })
        .collect();
    Ok(Representation {
        origin,
        dim: point.dim,
        kind: point.kind.label(),
        birth: point.birth,
        death: point.death,
        time,
        terms,
    })
}

fn represent(input: &Path, origin: usize, time: f64, prime: u32) -> Result<()> {
    tracing::info!(input = %input.display(), origin, time, prime, "represent");
    let zz = load(input)?;
    let computed = compute(&zz, prime, ClassifyCfg::default())?;
    let out = representation(&computed, origin, time)?;
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "zigzag_version": zigzag::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
