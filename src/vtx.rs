use cgmath::{BaseFloat, Vector2, Vector3, Vector4};

use std::ops::{Add, Mul};

/// Per-vertex data that can be blended with barycentric weights, e.g.
/// positions, normals, colors or plain scalars.
pub trait Attribute<S>: Clone + Add<Output = Self> + Mul<S, Output = Self> {}

impl<S, A> Attribute<S> for A
    where A: Clone + Add<Output = A> + Mul<S, Output = A>
{}

/// A vertex position with a fixed number of coordinates.
pub trait Position<S>: Attribute<S>
    where S: BaseFloat
{
    /// Number of coordinates, at least two for anything a triangle can live in.
    fn dimension(&self) -> usize;

    fn coordinate(&self, axis: usize) -> S;
}

macro_rules! impl_position {
    ($VectorN:ident, $n:expr) => {
        impl<S: BaseFloat> Position<S> for $VectorN<S> {
            fn dimension(&self) -> usize {
                $n
            }

            fn coordinate(&self, axis: usize) -> S {
                self[axis]
            }
        }
    };
}

impl_position!(Vector2, 2);
impl_position!(Vector3, 3);
impl_position!(Vector4, 4);
