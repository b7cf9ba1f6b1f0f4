//! Cone construction: insertions become plain entries, removals become
//! entries joined with the cone vertex.

use tracing::debug;

use crate::error::Result;
use crate::simplex::{ConeSimplex, Simplex, Vertex};
use crate::zigzag::Zigzag;

use super::types::{ConeEntry, ConeFiltration};

impl ConeFiltration {
    /// Build the cone filtration of a zigzag.
    ///
    /// Appends the cone vertex, then per simplex one plain entry per
    /// insertion and one coned entry per removal (a final removal at +∞ if
    /// the time list has odd length), and sorts by `ConeEntry::cone_cmp`.
    /// Input validity is established by `Zigzag`, so this cannot fail.
    pub fn build(zigzag: &Zigzag) -> ConeFiltration {
        let mut entries: Vec<ConeEntry> = Vec::with_capacity(1 + 2 * zigzag.len());
        entries.push(ConeEntry {
            simplex: ConeSimplex::cone_vertex(),
            time: 0.0,
            link: 0,
        });

        for zz in zigzag.entries() {
            for (k, &t) in zz.times.iter().enumerate() {
                if k % 2 == 0 {
                    push_plain(&mut entries, &zz.simplex, t);
                } else {
                    push_coned(&mut entries, &zz.simplex, t);
                }
            }
            if zz.times.len() % 2 == 1 {
                push_coned(&mut entries, &zz.simplex, f64::INFINITY);
            }
        }

        let cone = sort_and_relink(entries);
        debug!(
            simplices = zigzag.len(),
            entries = cone.len(),
            "cone filtration built"
        );
        cone
    }

    /// Validate parallel simplex/time lists and build in one step.
    pub fn from_parts(simplices: Vec<Vec<Vertex>>, times: Vec<Vec<f64>>) -> Result<ConeFiltration> {
        Ok(Self::build(&Zigzag::from_parts(simplices, times)?))
    }
}

fn push_plain(entries: &mut Vec<ConeEntry>, s: &Simplex, time: f64) {
    let link = entries.len();
    entries.push(ConeEntry {
        simplex: ConeSimplex::plain(s.clone()),
        time,
        link,
    });
}

/// Linked to the previous appearance, which is the matching insertion.
fn push_coned(entries: &mut Vec<ConeEntry>, s: &Simplex, time: f64) {
    let link = entries.len() - 1;
    entries.push(ConeEntry {
        simplex: s.join_cone(),
        time,
        link,
    });
}

fn sort_and_relink(entries: Vec<ConeEntry>) -> ConeFiltration {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| entries[a].cone_cmp(&entries[b]).then(a.cmp(&b)));

    // new position of every old position
    let mut landed = vec![0usize; entries.len()];
    for (new, &old) in order.iter().enumerate() {
        landed[old] = new;
    }

    let sorted = order
        .iter()
        .map(|&old| {
            let e = &entries[old];
            ConeEntry {
                simplex: e.simplex.clone(),
                time: e.time,
                link: landed[e.link],
            }
        })
        .collect();
    ConeFiltration::from_sorted(sorted)
}
