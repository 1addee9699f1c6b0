use crate::area::face_areas;
use crate::distribution::CumulativeDistribution;
use crate::error::{Result, SamplingError};
use crate::mesh::Mesh;
use crate::source::UniformSource;
use crate::tri::sample_bary;
use crate::vtx::Position;

use cgmath::BaseFloat;
use log::{debug, trace, warn};

use std::slice;
use std::vec;

/// A point on the surface, given as barycentric coordinates in one triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<S> {
    pub face: usize,
    pub bary: [S; 3],
}

/// Samples in the order they were drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBatch<S> {
    samples: Vec<Sample<S>>,
}

impl<S: Copy> SampleBatch<S> {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Sample<S>> {
        self.samples.iter()
    }

    pub fn samples(&self) -> &[Sample<S>] {
        &self.samples
    }

    /// Splits the batch into face indices and barycentric coordinates,
    /// both in draw order.
    pub fn into_raw(self) -> (Vec<usize>, Vec<[S; 3]>) {
        self.samples.into_iter()
            .map(|s| (s.face, s.bary))
            .unzip()
    }
}

impl<S> IntoIterator for SampleBatch<S> {
    type Item = Sample<S>;
    type IntoIter = vec::IntoIter<Sample<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a SampleBatch<S> {
    type Item = &'a Sample<S>;
    type IntoIter = slice::Iter<'a, Sample<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// What to do when samples are requested from a mesh without any area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroAreaPolicy {
    /// Report `SamplingError::DegenerateDistribution`.
    Fail,
    /// Ignore areas and pick every triangle with equal probability.
    UniformByCount,
}

impl Default for ZeroAreaPolicy {
    fn default() -> Self {
        ZeroAreaPolicy::Fail
    }
}

/// Draws points on triangles with probability proportional to triangle area.
///
/// Building the sampler computes all areas and their running sums once.
/// Afterwards it is immutable, so one sampler can serve any number of
/// batches, also from multiple threads as long as each brings its own source.
#[derive(Debug, Clone)]
pub struct MeshSampler<S> {
    distribution: CumulativeDistribution<S>,
    policy: ZeroAreaPolicy,
}

impl<S: BaseFloat> MeshSampler<S> {
    pub fn new<V>(mesh: &Mesh<V>) -> Result<Self>
        where V: Position<S>
    {
        Self::with_policy(mesh, ZeroAreaPolicy::default())
    }

    /// Fails only if a vertex has non-finite coordinates, which leaves the
    /// area of its triangles undefined.
    pub fn with_policy<V>(mesh: &Mesh<V>, policy: ZeroAreaPolicy) -> Result<Self>
        where V: Position<S>
    {
        let areas = face_areas(mesh);

        let zero_area_count = areas.iter()
            .filter(|&&a| a == S::zero())
            .count();
        if zero_area_count > 0 {
            warn!("{} of {} triangles have an area of zero and will not be sampled", zero_area_count, areas.len());
        }

        Self::from_weights(&areas, policy)
    }

    /// Builds a sampler from arbitrary non-negative per-triangle weights
    /// instead of areas.
    pub fn from_weights(weights: &[S], policy: ZeroAreaPolicy) -> Result<Self> {
        let mut distribution = CumulativeDistribution::from_weights(weights)?;

        if distribution.is_degenerate() && !distribution.is_empty() && policy == ZeroAreaPolicy::UniformByCount {
            warn!("Total weight of {} triangles is zero, falling back to uniform selection by count", weights.len());
            let ones = vec![S::one(); weights.len()];
            distribution = CumulativeDistribution::from_weights(&ones)?;
        }

        debug!("Built distribution over {} triangles with total weight {:?}", distribution.len(), distribution.total());

        Ok(MeshSampler { distribution, policy })
    }

    pub fn distribution(&self) -> &CumulativeDistribution<S> {
        &self.distribution
    }

    pub fn policy(&self) -> ZeroAreaPolicy {
        self.policy
    }

    pub fn face_count(&self) -> usize {
        self.distribution.len()
    }

    /// Draws `n` independent samples, with replacement.
    ///
    /// Every sample consumes three values from the source: one to pick the
    /// triangle, two for the position inside it. Drawing zero samples never
    /// touches the source.
    pub fn sample<U>(&self, n: usize, source: &mut U) -> Result<SampleBatch<S>>
        where U: UniformSource<S> + ?Sized
    {
        if n == 0 {
            return Ok(SampleBatch { samples: Vec::new() });
        }

        if self.distribution.is_degenerate() {
            return Err(SamplingError::DegenerateDistribution { faces: self.face_count() });
        }

        let total = self.distribution.total();
        let samples: Vec<_> = (0..n)
            .map(|_| {
                let r: S = source.next_uniform();
                let face = self.distribution.sample_index(r * total);
                let bary = sample_bary(&mut *source);
                Sample { face, bary }
            })
            .collect();

        trace!("Drew {} samples from {} triangles", samples.len(), self.face_count());

        Ok(SampleBatch { samples })
    }
}

/// Converts a signed sample count as accepted by the public entry points.
pub fn sample_count(n: isize) -> Result<usize> {
    if n < 0 {
        Err(SamplingError::InvalidArgument(format!("Sample count must not be negative, got {}", n)))
    } else {
        Ok(n as usize)
    }
}
