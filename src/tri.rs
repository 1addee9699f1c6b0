use crate::source::UniformSource;
use crate::vtx::Attribute;

use cgmath::BaseFloat;

/// Draws barycentric coordinates of a point uniformly distributed over the
/// area of a triangle, consuming two values from the source.
pub fn sample_bary<S, U>(source: &mut U) -> [S; 3]
    where S: BaseFloat,
        U: UniformSource<S> + ?Sized
{
    let u = source.next_uniform();
    let v = source.next_uniform();

    bary_from_uniform(u, v)
}

/// Maps two uniform values in `[0, 1)` to area-uniform barycentric coordinates.
///
/// Taking the square root of the first value compensates for the triangle
/// getting narrower towards the first corner.
pub fn bary_from_uniform<S: BaseFloat>(u: S, v: S) -> [S; 3] {
    let sqrt_u = u.sqrt();

    [S::one() - sqrt_u, sqrt_u * (S::one() - v), sqrt_u * v]
}

/// Blends the three corner attributes with the given barycentric weights.
pub fn interpolate_bary<S, A>(bary: [S; 3], a: &A, b: &A, c: &A) -> A
    where S: Copy,
        A: Attribute<S>
{
    a.clone() * bary[0] + b.clone() * bary[1] + c.clone() * bary[2]
}
