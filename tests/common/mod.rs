use cgmath::Vector3;

use simplelog::{Config, LevelFilter, TestLogger};

/// Routes log output of the sampler into the captured test output.
///
/// Safe to call from every test, only the first call installs the logger.
pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// Two triangles in the z=0 plane, the second one three times as large as
/// the first.
#[allow(dead_code)]
pub fn uneven_pair() -> (Vec<Vector3<f64>>, Vec<[usize; 3]>) {
    let vertices = vec![
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(2.0, 0.0, 0.0),
        Vector3::new(5.0, 0.0, 0.0),
        Vector3::new(2.0, 1.0, 0.0),
    ];
    let faces = vec![[0, 1, 2], [3, 4, 5]];
    (vertices, faces)
}

/// Unit cube made of twelve triangles.
#[allow(dead_code)]
pub fn cube() -> (Vec<Vector3<f64>>, Vec<[usize; 3]>) {
    let vertices = vec![
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(1.0, 1.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(1.0, 0.0, 1.0),
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(0.0, 1.0, 1.0),
    ];
    let faces = vec![
        [0, 2, 1], [0, 3, 2],
        [4, 5, 6], [4, 6, 7],
        [0, 1, 5], [0, 5, 4],
        [1, 2, 6], [1, 6, 5],
        [2, 3, 7], [2, 7, 6],
        [3, 0, 4], [3, 4, 7],
    ];
    (vertices, faces)
}
