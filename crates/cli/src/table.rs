//! Diagram tables: one row per point, written as CSV or Parquet.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use zigzag::ZigzagDiagrams;

/// Columns `dim, kind, birth, death, origin`, ordered by dimension then type.
pub fn diagrams_frame(dgms: &ZigzagDiagrams) -> Result<DataFrame> {
    let points: Vec<_> = dgms.iter().collect();
    let dim: Vec<u32> = points.iter().map(|p| p.dim as u32).collect();
    let kind: Vec<&str> = points.iter().map(|p| p.kind.label()).collect();
    let birth: Vec<f64> = points.iter().map(|p| p.birth).collect();
    let death: Vec<f64> = points.iter().map(|p| p.death).collect();
    let origin: Vec<u64> = points.iter().map(|p| p.origin as u64).collect();
    let df = DataFrame::new(vec![
        Series::new("dim".into(), dim),
        Series::new("kind".into(), kind),
        Series::new("birth".into(), birth),
        Series::new("death".into(), death),
        Series::new("origin".into(), origin),
    ])?;
    Ok(df)
}

/// Write `df` to `out`, choosing the format from the extension.
pub fn write_frame(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let ext = out.extension().and_then(|e| e.to_str()).unwrap_or("");
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match ext {
        "csv" => {
            let mut file = file;
            CsvWriter::new(&mut file).include_header(true).finish(df)?;
        }
        "parquet" => {
            ParquetWriter::new(file).finish(df)?;
        }
        other => bail!("unsupported output extension {other:?} (use .csv or .parquet)"),
    }
    Ok(())
}
