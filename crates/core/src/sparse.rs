use sprs::{CsMat, TriMat};

/// A constant sparse linear map between a flattened output and a flattened
/// input.
///
/// Entries are stored as parallel (row, col, value) triple vectors against
/// row-major flattenings of the two arrays. Duplicate (row, col) pairs are
/// allowed and sum, matching triplet-format convention.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMap {
    nrows: usize,
    ncols: usize,
    rows: Vec<usize>,
    cols: Vec<usize>,
    vals: Vec<f64>,
}

impl SparseMap {
    /// Creates an empty map with the given dense shape and entry capacity.
    #[must_use]
    pub fn with_capacity(nrows: usize, ncols: usize, nnz: usize) -> Self {
        Self {
            nrows,
            ncols,
            rows: Vec::with_capacity(nnz),
            cols: Vec::with_capacity(nnz),
            vals: Vec::with_capacity(nnz),
        }
    }

    /// Appends one (row, col, value) entry.
    ///
    /// # Panics
    ///
    /// Panics if the entry lies outside the dense shape.
    pub fn push(&mut self, row: usize, col: usize, val: f64) {
        assert!(row < self.nrows && col < self.ncols, "entry out of bounds");
        self.rows.push(row);
        self.cols.push(col);
        self.vals.push(val);
    }

    /// Returns the dense row count.
    #[must_use]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Returns the dense column count.
    #[must_use]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.vals.len()
    }

    /// Iterates over the stored (row, col, value) triples in insertion order.
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.rows
            .iter()
            .zip(&self.cols)
            .zip(&self.vals)
            .map(|((&r, &c), &v)| (r, c, v))
    }

    /// Converts the map to compressed sparse row format.
    #[must_use]
    pub fn to_csr(&self) -> CsMat<f64> {
        let mut tri = TriMat::with_capacity((self.nrows, self.ncols), self.nnz());
        for (r, c, v) in self.triplets() {
            tri.add_triplet(r, c, v);
        }
        tri.to_csr()
    }

    /// Applies the map to a flattened input vector.
    ///
    /// # Panics
    ///
    /// Panics if `x.len()` differs from the dense column count.
    #[must_use]
    pub fn apply(&self, x: &[f64]) -> Vec<f64> {
        assert_eq!(x.len(), self.ncols, "input length mismatch");
        let mut y = vec![0.0; self.nrows];
        for (r, c, v) in self.triplets() {
            y[r] += v * x[c];
        }
        y
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn apply_matches_dense_matvec() {
        // [[2, 0, 1], [0, 3, 0]]
        let mut map = SparseMap::with_capacity(2, 3, 3);
        map.push(0, 0, 2.0);
        map.push(0, 2, 1.0);
        map.push(1, 1, 3.0);

        let y = map.apply(&[1.0, 2.0, 3.0]);

        assert_relative_eq!(y[0], 5.0);
        assert_relative_eq!(y[1], 6.0);
    }

    #[test]
    fn duplicate_entries_sum() {
        let mut map = SparseMap::with_capacity(1, 1, 2);
        map.push(0, 0, 1.5);
        map.push(0, 0, 0.5);

        let y = map.apply(&[2.0]);
        assert_relative_eq!(y[0], 4.0);

        let csr = map.to_csr();
        assert_relative_eq!(*csr.get(0, 0).unwrap(), 2.0);
    }

    #[test]
    fn csr_preserves_structure() {
        let mut map = SparseMap::with_capacity(3, 3, 2);
        map.push(2, 0, -1.0);
        map.push(0, 1, 4.0);

        let csr = map.to_csr();
        assert_eq!(csr.rows(), 3);
        assert_eq!(csr.cols(), 3);
        assert_eq!(csr.nnz(), 2);
        assert_relative_eq!(*csr.get(2, 0).unwrap(), -1.0);
        assert_relative_eq!(*csr.get(0, 1).unwrap(), 4.0);
    }

    #[test]
    #[should_panic(expected = "entry out of bounds")]
    fn push_rejects_out_of_bounds() {
        let mut map = SparseMap::with_capacity(1, 1, 1);
        map.push(1, 0, 1.0);
    }
}
