//! Provides area-weighted sampling of points on triangle meshes, for instance:
//! * drawing points uniformly distributed over the surface of a [`Mesh`](struct.Mesh.html) with [`sample_points`](fn.sample_points.html),
//! * only the triangle indices and barycentric coordinates of such points with [`sample_barycentric`](fn.sample_barycentric.html),
//! * a [`SparseMatrix`](struct.SparseMatrix.html) from [`sample_operator`](fn.sample_operator.html) that interpolates any per-vertex data at the sampled points,
//! * reusing the area distribution of a mesh for many batches with [`MeshSampler`](struct.MeshSampler.html).
//!
//! Without an explicit source, all entry points draw from a [`SeededSource`](struct.SeededSource.html)
//! with a fixed seed, so results are reproducible. Bring any `rand::Rng` with the `*_with` variants.
//!
//! ```
//! use aitios_mesh_sampling::{Mesh, sample_points};
//! use cgmath::Vector3;
//!
//! let vertices = [
//!     Vector3::new(0.0_f32, 0.0, 0.0),
//!     Vector3::new(1.0, 0.0, 0.0),
//!     Vector3::new(0.0, 1.0, 0.0),
//! ];
//! let faces = [[0, 1, 2]];
//!
//! let mesh = Mesh::new(&vertices, &faces).unwrap();
//! let samples = sample_points(&mesh, 10).unwrap();
//! assert_eq!(10, samples.points.len());
//! ```

mod area;
mod distribution;
mod error;
mod mesh;
mod output;
mod sampler;
mod source;
mod sparse;
mod tri;
mod vtx;

pub use self::area::{face_areas, triangle_area};
pub use self::distribution::CumulativeDistribution;
pub use self::error::{Result, SamplingError};
pub use self::mesh::Mesh;
pub use self::output::{
    sample_barycentric, sample_barycentric_with, sample_operator, sample_operator_with, sample_points,
    sample_points_with, PointSamples, SamplingOperator,
};
pub use self::sampler::{MeshSampler, Sample, SampleBatch, ZeroAreaPolicy};
pub use self::source::{SeededSource, UniformSource, DEFAULT_SEED};
pub use self::sparse::{SparseMatrix, TripletBuilder};
pub use self::tri::{bary_from_uniform, interpolate_bary, sample_bary};
pub use self::vtx::{Attribute, Position};
