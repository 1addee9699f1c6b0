//! Compressed sparse row matrices assembled from triplets.

use crate::error::{Result, SamplingError};
use crate::vtx::Attribute;

use cgmath::{BaseFloat, Zero};

/// Immutable matrix in compressed sparse row layout.
///
/// Entries of a row are sorted by column and every column occurs at most once
/// per row. Use `TripletBuilder` to create one.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<S> {
    rows: usize,
    cols: usize,
    /// `row_ptr[i]..row_ptr[i + 1]` indexes the entries of row `i`
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<S>,
}

/// Collects `(row, col, value)` triplets and finalizes them into a
/// `SparseMatrix` once. Triplets sharing a cell are summed up.
#[derive(Debug, Clone)]
pub struct TripletBuilder<S> {
    rows: usize,
    cols: usize,
    triplets: Vec<(usize, usize, S)>,
}

impl<S: BaseFloat> TripletBuilder<S> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_capacity(rows, cols, 0)
    }

    pub fn with_capacity(rows: usize, cols: usize, capacity: usize) -> Self {
        TripletBuilder {
            rows,
            cols,
            triplets: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, row: usize, col: usize, value: S) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(SamplingError::InvalidArgument(format!(
                "Entry ({}, {}) lies outside of a {}x{} matrix", row, col, self.rows, self.cols
            )));
        }

        self.triplets.push((row, col, value));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.triplets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triplets.is_empty()
    }

    pub fn build(mut self) -> SparseMatrix<S> {
        // stable sort keeps the summation order of duplicates deterministic
        self.triplets.sort_by_key(|&(r, c, _)| (r, c));

        let mut row_ptr = vec![0usize; self.rows + 1];
        let mut col_idx: Vec<usize> = Vec::with_capacity(self.triplets.len());
        let mut values: Vec<S> = Vec::with_capacity(self.triplets.len());
        let mut last_cell = None;

        for (r, c, v) in self.triplets {
            if last_cell == Some((r, c)) {
                if let Some(sum) = values.last_mut() {
                    *sum = *sum + v;
                }
            } else {
                col_idx.push(c);
                values.push(v);
                row_ptr[r + 1] += 1;
                last_cell = Some((r, c));
            }
        }

        for i in 0..self.rows {
            row_ptr[i + 1] += row_ptr[i];
        }

        SparseMatrix {
            rows: self.rows,
            cols: self.cols,
            row_ptr,
            col_idx,
            values,
        }
    }
}

impl<S: BaseFloat> SparseMatrix<S> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Stored `(column, value)` pairs of one row, sorted by column.
    ///
    /// # Panics
    /// If `row` is not smaller than `rows()`.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, S)> + '_ {
        let range = self.row_ptr[row]..self.row_ptr[row + 1];
        self.col_idx[range.clone()].iter()
            .cloned()
            .zip(self.values[range].iter().cloned())
    }

    /// Value at the given cell, zero if nothing is stored there.
    ///
    /// # Panics
    /// If `row` is not smaller than `rows()`. A column outside of the matrix
    /// reads as zero.
    pub fn get(&self, row: usize, col: usize) -> S {
        self.row(row)
            .find(|&(c, _)| c == col)
            .map(|(_, v)| v)
            .unwrap_or_else(S::zero)
    }

    /// Multiplies the matrix with one attribute per column, yielding one
    /// blended attribute per row.
    ///
    /// Rows without stored entries yield zero.
    pub fn apply<A>(&self, attributes: &[A]) -> Result<Vec<A>>
        where A: Attribute<S> + Zero
    {
        if attributes.len() != self.cols {
            return Err(SamplingError::InvalidArgument(format!(
                "Expected {} attributes, one per column, got {}", self.cols, attributes.len()
            )));
        }

        Ok((0..self.rows)
            .map(|row| {
                self.row(row)
                    .map(|(col, weight)| attributes[col].clone() * weight)
                    .fold(A::zero(), |acc, weighted| acc + weighted)
            })
            .collect())
    }

    /// Keeps only the diagonal, replacing each entry `d` with `1 / d`.
    ///
    /// Zero diagonal entries stay zero and are not stored. For a diagonal
    /// matrix this is its inverse, e.g. the inverse of a lumped mass matrix.
    pub fn invert_diag(&self) -> SparseMatrix<S> {
        let mut builder = TripletBuilder::with_capacity(self.rows, self.cols, self.rows.min(self.cols));

        for i in 0..self.rows.min(self.cols) {
            let d = self.get(i, i);
            if d != S::zero() {
                builder.triplets.push((i, i, d.recip()));
            }
        }

        builder.build()
    }
}
