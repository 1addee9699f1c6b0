//! Entry points and the representations a batch of samples can be turned into.

use crate::error::{Result, SamplingError};
use crate::mesh::Mesh;
use crate::sampler::{sample_count, MeshSampler, SampleBatch};
use crate::source::{SeededSource, UniformSource};
use crate::sparse::{SparseMatrix, TripletBuilder};
use crate::tri::interpolate_bary;
use crate::vtx::Position;

use cgmath::BaseFloat;

/// Sampled positions together with the draws they were computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSamples<S, V> {
    pub faces: Vec<usize>,
    pub bary: Vec<[S; 3]>,
    pub points: Vec<V>,
}

/// A `samples x vertices` matrix that maps per-vertex data to the sampled
/// points, plus the face every row was drawn on.
///
/// Applying the operator to vertex positions yields the sampled positions.
/// Applying it to normals, colors or texture coordinates samples them at the
/// very same surface points without drawing again.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingOperator<S> {
    pub faces: Vec<usize>,
    pub operator: SparseMatrix<S>,
}

impl<S: BaseFloat> SampleBatch<S> {
    /// Interpolates the corner positions of each sampled triangle.
    pub fn to_points<V>(&self, mesh: &Mesh<V>) -> Result<Vec<V>>
        where V: Position<S>
    {
        self.check_faces(mesh)?;

        Ok(self.iter()
            .map(|s| {
                let (a, b, c) = mesh.corners(s.face);
                interpolate_bary(s.bary, a, b, c)
            })
            .collect())
    }

    /// One row per sample with the barycentric weights placed in the columns
    /// of the corners of its triangle.
    pub fn to_operator<V>(&self, mesh: &Mesh<V>) -> Result<SparseMatrix<S>> {
        self.check_faces(mesh)?;

        let mut builder = TripletBuilder::with_capacity(self.len(), mesh.vertex_count(), 3 * self.len());
        for (row, sample) in self.iter().enumerate() {
            let corners = mesh.faces()[sample.face];
            for (&col, &weight) in corners.iter().zip(sample.bary.iter()) {
                builder.push(row, col, weight)?;
            }
        }

        Ok(builder.build())
    }

    fn check_faces<V>(&self, mesh: &Mesh<V>) -> Result<()> {
        match self.iter().find(|s| s.face >= mesh.face_count()) {
            Some(s) => Err(SamplingError::InvalidArgument(format!(
                "Sample on face {} does not belong to a mesh with {} faces", s.face, mesh.face_count()
            ))),
            None => Ok(()),
        }
    }
}

fn draw<S, V, U>(source: &mut U, mesh: &Mesh<V>, n: isize) -> Result<SampleBatch<S>>
    where S: BaseFloat,
        V: Position<S>,
        U: UniformSource<S> + ?Sized
{
    let n = sample_count(n)?;
    MeshSampler::new(mesh)?.sample(n, source)
}

/// Draws `n` area-uniform samples and returns their face indices and
/// barycentric coordinates, using a source with the default seed.
pub fn sample_barycentric<S, V>(mesh: &Mesh<V>, n: isize) -> Result<(Vec<usize>, Vec<[S; 3]>)>
    where S: BaseFloat + rand::Rand,
        V: Position<S>
{
    sample_barycentric_with(&mut SeededSource::default(), mesh, n)
}

pub fn sample_barycentric_with<S, V, U>(source: &mut U, mesh: &Mesh<V>, n: isize) -> Result<(Vec<usize>, Vec<[S; 3]>)>
    where S: BaseFloat,
        V: Position<S>,
        U: UniformSource<S> + ?Sized
{
    Ok(draw(source, mesh, n)?.into_raw())
}

/// Draws `n` area-uniform points on the surface, using a source with the
/// default seed.
pub fn sample_points<S, V>(mesh: &Mesh<V>, n: isize) -> Result<PointSamples<S, V>>
    where S: BaseFloat + rand::Rand,
        V: Position<S>
{
    sample_points_with(&mut SeededSource::default(), mesh, n)
}

pub fn sample_points_with<S, V, U>(source: &mut U, mesh: &Mesh<V>, n: isize) -> Result<PointSamples<S, V>>
    where S: BaseFloat,
        V: Position<S>,
        U: UniformSource<S> + ?Sized
{
    let batch = draw(source, mesh, n)?;
    let points = batch.to_points(mesh)?;
    let (faces, bary) = batch.into_raw();

    Ok(PointSamples { faces, bary, points })
}

/// Draws `n` area-uniform samples and returns them as a sparse operator,
/// using a source with the default seed.
pub fn sample_operator<S, V>(mesh: &Mesh<V>, n: isize) -> Result<SamplingOperator<S>>
    where S: BaseFloat + rand::Rand,
        V: Position<S>
{
    sample_operator_with(&mut SeededSource::default(), mesh, n)
}

pub fn sample_operator_with<S, V, U>(source: &mut U, mesh: &Mesh<V>, n: isize) -> Result<SamplingOperator<S>>
    where S: BaseFloat,
        V: Position<S>,
        U: UniformSource<S> + ?Sized
{
    let batch = draw(source, mesh, n)?;
    let operator = batch.to_operator(mesh)?;
    let (faces, _) = batch.into_raw();

    Ok(SamplingOperator { faces, operator })
}
