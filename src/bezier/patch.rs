use glam::DVec3;

use crate::bezier::basis::bernstein_row;

/// A rectangular grid of control points, row-major. Parsing always
/// produces 4x4 grids; evaluation accepts any rows x cols >= 2x2 and
/// derives the degree per axis.
#[derive(Debug)]
pub struct PatchGrid {
    points: Vec<DVec3>,
    rows: usize,
    cols: usize,
}

impl PatchGrid {
    pub fn new(points: Vec<DVec3>, rows: usize, cols: usize) -> Self {
        assert_eq!(points.len(), rows * cols, "control point count mismatch");
        assert!(rows >= 2 && cols >= 2, "grid must be at least 2x2");
        Self { points, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn point(&self, i: usize, j: usize) -> DVec3 {
        self.points[i * self.cols + j]
    }
}

/// Sampled surface positions, a `resolution` x `resolution` row-major grid.
pub struct SampledSurface {
    pub positions: Vec<DVec3>,
    pub resolution: usize,
}

impl SampledSurface {
    pub fn position(&self, ui: usize, vi: usize) -> DVec3 {
        self.positions[ui * self.resolution + vi]
    }
}

/// Evaluates the tensor-product Bezier surface over `grid` at `resolution`
/// uniform parameter steps per axis, endpoints included. A resolution of 1
/// collapses to the single sample at u = v = 0.
pub fn sample_surface(grid: &PatchGrid, resolution: usize) -> SampledSurface {
    assert!(resolution >= 1, "resolution must be positive");

    let n = grid.rows() - 1;
    let m = grid.cols() - 1;

    let params: Vec<f64> = if resolution == 1 {
        vec![0.0]
    } else {
        (0..resolution)
            .map(|k| k as f64 / (resolution - 1) as f64)
            .collect()
    };

    // Basis values depend only on the 1D parameter, so one row per sample
    // covers the whole 2D grid.
    let basis_u: Vec<Vec<f64>> = params.iter().map(|&u| bernstein_row(n, u)).collect();
    let basis_v: Vec<Vec<f64>> = params.iter().map(|&v| bernstein_row(m, v)).collect();

    let mut positions = Vec::with_capacity(resolution * resolution);
    for bu in &basis_u {
        for bv in &basis_v {
            let mut p = DVec3::ZERO;
            for i in 0..=n {
                for j in 0..=m {
                    p += bu[i] * bv[j] * grid.point(i, j);
                }
            }
            positions.push(p);
        }
    }

    SampledSurface {
        positions,
        resolution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_grid(z: f64) -> PatchGrid {
        let mut points = Vec::new();
        for i in 0..4 {
            for j in 0..4 {
                points.push(DVec3::new(i as f64 / 3.0, j as f64 / 3.0, z));
            }
        }
        PatchGrid::new(points, 4, 4)
    }

    #[test]
    fn flat_grid_keeps_constant_z() {
        let surface = sample_surface(&flat_grid(1.25), 7);
        assert_eq!(surface.positions.len(), 49);
        for p in &surface.positions {
            assert!((p.z - 1.25).abs() < 1e-12);
        }
    }

    #[test]
    fn degenerate_grid_collapses_to_point() {
        let p = DVec3::new(0.5, -2.0, 3.0);
        let grid = PatchGrid::new(vec![p; 16], 4, 4);
        let surface = sample_surface(&grid, 5);
        for q in &surface.positions {
            assert!((*q - p).length() < 1e-12);
        }
    }

    #[test]
    fn corners_interpolate_control_points() {
        let mut points = Vec::new();
        for i in 0..4 {
            for j in 0..4 {
                points.push(DVec3::new(i as f64, j as f64, (i * j) as f64));
            }
        }
        let grid = PatchGrid::new(points, 4, 4);
        let surface = sample_surface(&grid, 5);

        let r = surface.resolution;
        assert_eq!(surface.position(0, 0), grid.point(0, 0));
        assert_eq!(surface.position(r - 1, r - 1), grid.point(3, 3));
        assert_eq!(surface.position(0, r - 1), grid.point(0, 3));
        assert_eq!(surface.position(r - 1, 0), grid.point(3, 0));
    }

    #[test]
    fn resolution_one_is_a_single_sample() {
        let surface = sample_surface(&flat_grid(0.0), 1);
        assert_eq!(surface.positions.len(), 1);
        assert_eq!(surface.position(0, 0), DVec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn rectangular_grid_uses_per_axis_degree() {
        // 4x3 grid: cubic along rows, quadratic along columns.
        let mut points = Vec::new();
        for i in 0..4 {
            for j in 0..3 {
                points.push(DVec3::new(i as f64, j as f64, 0.0));
            }
        }
        let grid = PatchGrid::new(points, 4, 3);
        let surface = sample_surface(&grid, 3);
        assert_eq!(surface.position(0, 0), grid.point(0, 0));
        assert_eq!(surface.position(2, 2), grid.point(3, 2));
        // midpoint of a linear-in-x ramp stays on the ramp
        let mid = surface.position(1, 1);
        assert!((mid.x - 1.5).abs() < 1e-12);
        assert!((mid.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn flat_unit_grid_spans_at_default_resolution() {
        let surface = sample_surface(&flat_grid(0.0), 5);
        assert_eq!(surface.positions.len(), 25);
        for p in &surface.positions {
            assert!(p.z.abs() < 1e-12);
        }
        let last = surface.resolution - 1;
        assert!((surface.position(0, 0).x).abs() < 1e-12);
        assert!((surface.position(last, last).x - 1.0).abs() < 1e-12);
        assert!((surface.position(last, last).y - 1.0).abs() < 1e-12);
    }
}
