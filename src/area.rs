use crate::mesh::Mesh;
use crate::vtx::Position;

use cgmath::BaseFloat;

/// Area of every triangle of the mesh, in face order.
pub fn face_areas<S, V>(mesh: &Mesh<V>) -> Vec<S>
    where S: BaseFloat,
        V: Position<S>
{
    (0..mesh.face_count())
        .map(|face| {
            let (a, b, c) = mesh.corners(face);
            triangle_area(a, b, c)
        })
        .collect()
}

/// Calculates the area of the triangle as half the magnitude of the cross
/// product of two edges.
///
/// The squared magnitude is summed up from all 2x2 minors of the edge vectors,
/// which works in any dimension and is exactly zero for triangles with a
/// repeated corner. Edges are scaled to unit length of their largest
/// coordinate first, so squaring cannot overflow for any triangle whose area
/// is representable.
pub fn triangle_area<S, V>(a: &V, b: &V, c: &V) -> S
    where S: BaseFloat,
        V: Position<S>
{
    let dimension = a.dimension();
    let mut u: Vec<S> = (0..dimension).map(|i| b.coordinate(i) - a.coordinate(i)).collect();
    let mut v: Vec<S> = (0..dimension).map(|i| c.coordinate(i) - a.coordinate(i)).collect();

    let scale = u.iter()
        .chain(v.iter())
        .fold(S::zero(), |max, &x| max.max(x.abs()));

    // zero and non-finite edges go through unscaled and yield zero or a
    // non-finite area
    if scale > S::zero() && scale.is_finite() {
        for x in u.iter_mut().chain(v.iter_mut()) {
            *x = *x / scale;
        }
        half_cross_norm(&u, &v) * scale * scale
    } else {
        half_cross_norm(&u, &v)
    }
}

fn half_cross_norm<S: BaseFloat>(u: &[S], v: &[S]) -> S {
    let mut cross_sqr = S::zero();
    for i in 0..u.len() {
        for j in (i + 1)..u.len() {
            let minor = u[i] * v[j] - u[j] * v[i];
            cross_sqr = cross_sqr + minor * minor;
        }
    }

    let two = S::one() + S::one();
    cross_sqr.sqrt() / two
}
