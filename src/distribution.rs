use crate::error::{Result, SamplingError};

use cgmath::BaseFloat;

/// Running sums over non-negative weights, used to pick an index with
/// probability proportional to its weight.
///
/// The sums are computed once from the complete weight array. If weights
/// change, build a new distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeDistribution<S> {
    cumulative: Vec<S>,
    /// Index of the last entry with a non-zero weight. Used to keep a draw
    /// that rounded up to the total inside the distribution.
    last_weighted: usize,
}

impl<S: BaseFloat> CumulativeDistribution<S> {
    pub fn from_weights(weights: &[S]) -> Result<Self> {
        let mut cumulative = Vec::with_capacity(weights.len());
        let mut sum = S::zero();
        let mut last_weighted = 0;

        for (idx, &weight) in weights.iter().enumerate() {
            if !weight.is_finite() || weight < S::zero() {
                return Err(SamplingError::InvalidArgument(format!(
                    "Weight {} must be finite and non-negative, got {:?}", idx, weight
                )));
            }

            if weight > S::zero() {
                last_weighted = idx;
            }

            sum = sum + weight;
            cumulative.push(sum);
        }

        if !sum.is_finite() {
            return Err(SamplingError::InvalidArgument(format!(
                "Sum of {} weights is not representable", weights.len()
            )));
        }

        Ok(CumulativeDistribution { cumulative, last_weighted })
    }

    /// Sum of all weights.
    pub fn total(&self) -> S {
        self.cumulative.last()
            .cloned()
            .unwrap_or_else(S::zero)
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// No index can be drawn because there is no weight at all.
    pub fn is_degenerate(&self) -> bool {
        self.total() <= S::zero()
    }

    pub fn cumulative(&self) -> &[S] {
        &self.cumulative
    }

    /// Probability of drawing the given index.
    ///
    /// # Panics
    /// If `idx` is not smaller than `len()`.
    pub fn probability(&self, idx: usize) -> S {
        let before = if idx == 0 { S::zero() } else { self.cumulative[idx - 1] };
        let weight = self.cumulative[idx] - before;

        if self.is_degenerate() {
            S::zero()
        } else {
            weight / self.total()
        }
    }

    /// Smallest index whose running sum exceeds `r`, for `r` in `[0, total)`.
    ///
    /// Zero-weight entries are never returned for such an `r`. Values at or
    /// above the total map to the last index carrying weight.
    pub fn sample_index(&self, r: S) -> usize {
        let idx = self.cumulative.partition_point(|&sum| sum <= r);
        idx.min(self.last_weighted)
    }
}
