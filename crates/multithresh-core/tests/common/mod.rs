#![allow(dead_code)]

use ndarray::Array2;

use multithresh_core::frame::Frame;
use multithresh_core::histogram::ProbabilityDistribution;
use multithresh_core::tables::MomentTables;

/// Build a single-row 8-bit frame from raw pixel values.
pub fn row_frame(pixels: &[u8]) -> Frame {
    Frame::new(Array2::from_shape_vec((1, pixels.len()), pixels.to_vec()).unwrap())
}

/// Build an `h x w` frame whose pixels cycle through `values` in row-major order.
pub fn cycling_frame(h: usize, w: usize, values: &[u8]) -> Frame {
    Frame::new(Array2::from_shape_fn((h, w), |(r, c)| values[(r * w + c) % values.len()]))
}

/// Deterministic pseudo-random distribution over `levels` gray levels.
///
/// Roughly a third of the levels get zero mass so empty intervals show up.
pub fn lcg_distribution(levels: usize, seed: u64) -> ProbabilityDistribution {
    let mut state = seed;
    let mut weights = Vec::with_capacity(levels);
    for _ in 0..levels {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let r = (state >> 33) % 100;
        weights.push(if r < 33 { 0.0 } else { r as f64 });
    }
    if weights.iter().all(|&w| w == 0.0) {
        weights[0] = 1.0;
    }
    let total: f64 = weights.iter().sum();
    let prob = weights.into_iter().map(|w| w / total).collect();
    ProbabilityDistribution::from_probabilities(prob).unwrap()
}

/// Reference search: plain nested loops per threshold count, first strict maximum wins.
pub fn brute_force(tables: &MomentTables, k: usize) -> (Vec<usize>, f64) {
    let g = tables.levels();
    let last = g - 1;
    let v = |i: usize, j: usize| tables.variance(i, j);
    let mut best: Option<(Vec<usize>, f64)> = None;
    let mut offer = |t: Vec<usize>, s: f64| {
        if best.as_ref().map_or(true, |(_, b)| s > *b) {
            best = Some((t, s));
        }
    };

    match k {
        1 => {
            for a in 0..g - 1 {
                offer(vec![a], v(0, a) + v(a + 1, last));
            }
        }
        2 => {
            for a in 0..g - 2 {
                for b in a + 1..g - 1 {
                    offer(vec![a, b], v(0, a) + v(a + 1, b) + v(b + 1, last));
                }
            }
        }
        3 => {
            for a in 0..g - 3 {
                for b in a + 1..g - 2 {
                    for c in b + 1..g - 1 {
                        offer(
                            vec![a, b, c],
                            v(0, a) + v(a + 1, b) + v(b + 1, c) + v(c + 1, last),
                        );
                    }
                }
            }
        }
        _ => panic!("brute force reference only covers 1..=3 thresholds"),
    }
    best.unwrap()
}
