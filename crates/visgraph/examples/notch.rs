//! Print the visibility graph of a small notched polygon and every pair the
//! sweep rejected.
//!
//! Usage:
//!   cargo run -p visgraph --example notch
//!   cargo run -p visgraph --example notch -- 7   # random polygon, seed 7

use visgraph::api::{
    check_simple, draw_star_polygon, EdgeObserver, I64Kernel, PolygonReplay, RandomPolygonCfg,
    Rejection, VisibilityGraph,
};

struct Print;

impl EdgeObserver<[i64; 2]> for Print {
    fn edge_rejected(&mut self, a: &[i64; 2], b: &[i64; 2], reason: Rejection) {
        println!("  reject {a:?} - {b:?}: {reason}");
    }
}

fn main() {
    let poly = match std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => {
            match draw_star_polygon(RandomPolygonCfg::default(), PolygonReplay { seed, index: 0 }) {
                Some(p) => p,
                None => {
                    eprintln!("no simple polygon for seed {seed}");
                    return;
                }
            }
        }
        None => vec![[0, 0], [4, 0], [4, 4], [2, 2], [0, 4]],
    };
    if let Err(e) = check_simple(&I64Kernel, &poly) {
        eprintln!("bad polygon: {e}");
        return;
    }
    println!("polygon: {poly:?}");
    let mut g = VisibilityGraph::new(I64Kernel);
    g.build_with_observer(&poly, &mut Print);
    println!("{} edges:", g.len());
    for (a, b) in g.iter() {
        println!("  {a:?} - {b:?}");
    }
    println!("valid: {}", g.is_valid(&poly));
}
