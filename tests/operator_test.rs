mod common;

use aitios_mesh_sampling::{
    interpolate_bary, sample_operator_with, sample_points_with, Mesh, MeshSampler, SeededSource,
};
use approx::assert_relative_eq;
use cgmath::{Vector2, Vector3};
use rand::{SeedableRng, XorShiftRng};

use std::thread;

#[test]
fn operator_reproduces_sampled_points() {
    common::init_logging();

    let (vertices, faces) = common::cube();
    let mesh = Mesh::new(&vertices, &faces).unwrap();

    let points = sample_points_with(&mut SeededSource::new(404), &mesh, 300).unwrap();
    let sampling = sample_operator_with(&mut SeededSource::new(404), &mesh, 300).unwrap();

    let applied = sampling.operator.apply(&vertices).unwrap();

    assert_eq!(points.faces, sampling.faces);
    assert_eq!(points.points.len(), applied.len());
    for (expected, actual) in points.points.iter().zip(&applied) {
        assert_relative_eq!(*expected, *actual, epsilon = 1e-12);
    }
}

#[test]
fn operator_samples_other_attributes_at_same_points() {
    common::init_logging();

    let (vertices, faces) = common::cube();
    let mesh = Mesh::new(&vertices, &faces).unwrap();

    // per-vertex colors and texture coordinates unrelated to the positions
    let colors: Vec<Vector3<f64>> = (0..vertices.len())
        .map(|i| Vector3::new(i as f64 / 7.0, 1.0 - i as f64 / 7.0, 0.5))
        .collect();
    let texcoords: Vec<Vector2<f64>> = vertices.iter()
        .map(|v| Vector2::new(v.x + 0.5 * v.z, v.y))
        .collect();
    let heat: Vec<f64> = (0..vertices.len()).map(|i| (i * i) as f64).collect();

    let sampler = MeshSampler::new(&mesh).unwrap();
    let batch = sampler.sample(200, &mut SeededSource::new(12)).unwrap();
    let operator = batch.to_operator(&mesh).unwrap();

    let sampled_colors = operator.apply(&colors).unwrap();
    let sampled_texcoords = operator.apply(&texcoords).unwrap();
    let sampled_heat = operator.apply(&heat).unwrap();

    for (row, sample) in batch.iter().enumerate() {
        let [a, b, c] = faces[sample.face];
        assert_relative_eq!(
            interpolate_bary(sample.bary, &colors[a], &colors[b], &colors[c]),
            sampled_colors[row],
            epsilon = 1e-12
        );
        assert_relative_eq!(
            interpolate_bary(sample.bary, &texcoords[a], &texcoords[b], &texcoords[c]),
            sampled_texcoords[row],
            epsilon = 1e-12
        );
        assert_relative_eq!(
            interpolate_bary(sample.bary, &heat[a], &heat[b], &heat[c]),
            sampled_heat[row],
            epsilon = 1e-9
        );
    }
}

#[test]
fn operator_rejects_attribute_count_mismatch() {
    let (vertices, faces) = common::cube();
    let mesh = Mesh::new(&vertices, &faces).unwrap();

    let sampling = sample_operator_with(&mut SeededSource::default(), &mesh, 10).unwrap();

    assert!(sampling.operator.apply(&vertices[1..]).is_err());
}

#[test]
fn any_rng_can_drive_sampling() {
    let (vertices, faces) = common::cube();
    let mesh = Mesh::new(&vertices, &faces).unwrap();

    let mut first = XorShiftRng::from_seed([1, 2, 3, 4]);
    let mut second = XorShiftRng::from_seed([1, 2, 3, 4]);

    let a = sample_points_with(&mut first, &mesh, 64).unwrap();
    let b = sample_points_with(&mut second, &mesh, 64).unwrap();

    assert_eq!(a, b);
}

#[test]
fn sampler_is_shared_by_threads_with_own_sources() {
    common::init_logging();

    let (vertices, faces) = common::cube();
    let mesh = Mesh::new(&vertices, &faces).unwrap();
    let sampler = MeshSampler::new(&mesh).unwrap();
    let seeds = [1_u64, 2, 3, 4];

    let parallel: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = seeds.iter()
            .map(|&seed| {
                let sampler = &sampler;
                scope.spawn(move || sampler.sample(250, &mut SeededSource::new(seed)).unwrap())
            })
            .collect();

        handles.into_iter()
            .map(|h| h.join().unwrap())
            .collect()
    });

    let sequential: Vec<_> = seeds.iter()
        .map(|&seed| sampler.sample(250, &mut SeededSource::new(seed)).unwrap())
        .collect();

    assert_eq!(sequential, parallel);
}
