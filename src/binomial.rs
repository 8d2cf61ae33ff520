// Pascal's triangle, built once at startup.
// The curve evaluator reads row R of it every time it weights the control points.

/// Binomial coefficients C(n,k) for 0 <= k <= n <= degree.
/// Stored as a square (degree+1)^2 table; cells with k > n stay 0 and are never read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinomialTable {
    degree: usize,
    rows: Vec<Vec<u64>>,
}

impl BinomialTable {
    /// Additive recurrence only, no factorials, so nothing goes through floats.
    /// u64 holds every row up to 67; callers keep the degree below that.
    pub fn new(degree: usize) -> Self {
        let mut rows = vec![vec![0u64; degree + 1]; degree + 1];

        // Edges of the triangle are all 1
        for (n, row) in rows.iter_mut().enumerate() {
            row[0] = 1;
            row[n] = 1;
        }

        // Interior: C(n,k) = C(n-1,k-1) + C(n-1,k)
        for n in 2..=degree {
            for k in 1..n {
                rows[n][k] = rows[n - 1][k - 1] + rows[n - 1][k];
            }
        }

        Self { degree, rows }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    #[inline]
    pub fn get(&self, n: usize, k: usize) -> u64 {
        self.rows[n][k]
    }

    /// Row n without the unused zero tail.
    pub fn row(&self, n: usize) -> &[u64] {
        &self.rows[n][..=n]
    }
}
