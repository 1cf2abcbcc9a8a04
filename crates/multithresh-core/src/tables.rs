use tracing::debug;

use crate::histogram::ProbabilityDistribution;

/// Packed upper-triangular matrix of `f64`, indexed by `(i, j)` with `i <= j < n`.
///
/// Row `i` holds the `n - i` entries `(i, i) ..= (i, n - 1)` back to back,
/// so the whole matrix takes `n(n+1)/2` slots.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangularMatrix {
    n: usize,
    data: Vec<f64>,
}

impl TriangularMatrix {
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * (n + 1) / 2],
        }
    }

    /// Side length of the matrix.
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(i <= j && j < self.n, "({i}, {j}) outside triangle of size {}", self.n);
        // rows 0..i hold n + (n-1) + ... + (n-i+1) entries
        i * (2 * self.n - i + 1) / 2 + (j - i)
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.offset(i, j)]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.offset(i, j);
        self.data[idx] = value;
    }
}

/// Interval statistics for every `[i, j]` of the gray-level range.
///
/// - `mass(i, j)` is the probability mass of levels `i..=j`
/// - `first_moment(i, j)` is `sum(k * p[k])` over the same levels
/// - `variance(i, j)` is `first_moment^2 / mass`, or 0 for a massless interval
///
/// Every lookup is O(1), which is what makes the exhaustive search affordable.
#[derive(Clone, Debug)]
pub struct MomentTables {
    mass: TriangularMatrix,
    first_moment: TriangularMatrix,
    variance: TriangularMatrix,
}

impl MomentTables {
    /// Build all three tables in O(G^2) time and space.
    pub fn build(dist: &ProbabilityDistribution) -> Self {
        let prob = dist.as_slice();
        let n = prob.len();
        let mut mass = TriangularMatrix::zeros(n);
        let mut first_moment = TriangularMatrix::zeros(n);
        let mut variance = TriangularMatrix::zeros(n);

        for (i, &p) in prob.iter().enumerate() {
            mass.set(i, i, p);
            first_moment.set(i, i, i as f64 * p);
        }

        // Row 0 holds prefix sums.
        for i in 0..n.saturating_sub(1) {
            mass.set(0, i + 1, mass.get(0, i) + prob[i + 1]);
            first_moment.set(0, i + 1, first_moment.get(0, i) + (i + 1) as f64 * prob[i + 1]);
        }

        // Every other interval is a difference of two prefix sums.
        for i in 1..n {
            let mass_before = mass.get(0, i - 1);
            let moment_before = first_moment.get(0, i - 1);
            for j in i + 1..n {
                mass.set(i, j, mass.get(0, j) - mass_before);
                first_moment.set(i, j, first_moment.get(0, j) - moment_before);
            }
        }

        for i in 0..n {
            for j in i..n {
                let w = mass.get(i, j);
                if w != 0.0 {
                    let mu = first_moment.get(i, j);
                    variance.set(i, j, mu * mu / w);
                }
            }
        }

        debug!(levels = n, entries = n * (n + 1) / 2, "Moment tables built");

        Self {
            mass,
            first_moment,
            variance,
        }
    }

    /// Number of gray levels the tables cover.
    pub fn levels(&self) -> usize {
        self.mass.size()
    }

    #[inline]
    pub fn mass(&self, i: usize, j: usize) -> f64 {
        self.mass.get(i, j)
    }

    #[inline]
    pub fn first_moment(&self, i: usize, j: usize) -> f64 {
        self.first_moment.get(i, j)
    }

    #[inline]
    pub fn variance(&self, i: usize, j: usize) -> f64 {
        self.variance.get(i, j)
    }
}
