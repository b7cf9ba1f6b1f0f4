//! Walk through the three-vertex zigzag: diagrams, then the representative
//! of every point at the middle of its lifetime.
//!
//! Run with `cargo run -p zigzag --example scenario_apex`.

use zigzag::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let zz = Zigzag::from_parts(
        vec![vec![0], vec![1], vec![0, 1], vec![2], vec![0, 2], vec![1, 2]],
        vec![
            vec![0.4, 0.6, 0.7, 1.0],
            vec![0.1, 0.2, 0.3, 1.0],
            vec![0.8, 0.95],
            vec![0.5],
            vec![0.8, 1.0],
            vec![0.9, 1.0],
        ],
    )?;
    let cone = ConeFiltration::build(&zz);
    let red = StandardReduction::reduce(&cone, Zp::new(3)?)?;
    let dgms = classify(&red, &cone, ClassifyCfg { include_diagonal: false })?;

    for (p, rep) in lift_all(&dgms, &red, &cone)? {
        let t = if p.death.is_finite() {
            (p.birth + p.death) / 2.0
        } else {
            p.birth + 0.1
        };
        let terms: Vec<String> = rep
            .representative(t)
            .into_iter()
            .map(|(idx, c)| format!("{c}*{}", cone[idx].simplex))
            .collect();
        println!(
            "dim {} {} [{}, {}] at {t:.3}: {}",
            p.dim,
            p.kind.label(),
            p.birth,
            p.death,
            terms.join(" + ")
        );
    }
    Ok(())
}
