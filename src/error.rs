use thiserror::Error;

/// Errors reported before any sample is drawn.
#[derive(Debug, Error, PartialEq)]
pub enum SamplingError {
    /// A triangle references a missing vertex, or the vertices disagree on
    /// their dimension.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// A sample count, weight or attribute buffer is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Samples were requested from a surface without any area.
    #[error("Cannot sample {faces} triangles with a total area of zero")]
    DegenerateDistribution { faces: usize },
}

pub type Result<T> = ::std::result::Result<T, SamplingError>;
