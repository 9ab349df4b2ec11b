use glam::DVec3;

use crate::bezier::patch::SampledSurface;

pub struct TriangleMesh {
    pub vertices: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
}

/// GPU-ready geometry for one patch collection: all patch meshes share one
/// buffer set, with a per-vertex patch id so the shader can tint patches
/// individually.
pub struct SceneMesh {
    pub vertices: Vec<f32>,
    pub normals: Vec<f32>,
    pub patch_ids: Vec<f32>,
    pub indices: Vec<u32>,
    pub patch_count: usize,
}

impl SceneMesh {
    pub fn build(surfaces: &[SampledSurface]) -> Self {
        let mut vertices = Vec::new();
        let mut normals = Vec::new();
        let mut patch_ids = Vec::new();
        let mut indices = Vec::new();

        for (patch, surface) in surfaces.iter().enumerate() {
            let mesh = triangulate(surface);
            let base = (vertices.len() / 3) as u32;

            patch_ids.extend(std::iter::repeat(patch as f32).take(mesh.vertices.len() / 3));
            vertices.extend_from_slice(&mesh.vertices);
            normals.extend_from_slice(&mesh.normals);
            indices.extend(mesh.indices.iter().map(|&i| base + i));
        }

        Self {
            vertices,
            normals,
            patch_ids,
            indices,
            patch_count: surfaces.len(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Triangulates one sampled surface grid: two triangles per quad cell,
/// vertex normals from finite differences of neighboring samples. A
/// single-sample surface yields one vertex and no triangles.
pub fn triangulate(surface: &SampledSurface) -> TriangleMesh {
    let r = surface.resolution;

    let mut vertices = Vec::with_capacity(r * r * 3);
    let mut normals = Vec::with_capacity(r * r * 3);

    for i in 0..r {
        for j in 0..r {
            let p = surface.position(i, j);

            let tangent_u = difference(surface, i, j, r, true);
            let tangent_v = difference(surface, i, j, r, false);

            let normal = tangent_u.cross(tangent_v);
            let normal = if normal.length() > 1e-12 {
                normal.normalize()
            } else {
                DVec3::Y
            };

            vertices.push(p.x as f32);
            vertices.push(p.y as f32);
            vertices.push(p.z as f32);

            normals.push(normal.x as f32);
            normals.push(normal.y as f32);
            normals.push(normal.z as f32);
        }
    }

    let mut indices = Vec::new();
    for i in 0..r.saturating_sub(1) {
        for j in 0..r - 1 {
            let tl = (i * r + j) as u32;
            let tr = (i * r + j + 1) as u32;
            let bl = ((i + 1) * r + j) as u32;
            let br = ((i + 1) * r + j + 1) as u32;

            indices.push(tl);
            indices.push(bl);
            indices.push(tr);

            indices.push(tr);
            indices.push(bl);
            indices.push(br);
        }
    }

    TriangleMesh {
        vertices,
        normals,
        indices,
    }
}

fn difference(surface: &SampledSurface, i: usize, j: usize, r: usize, along_u: bool) -> DVec3 {
    let at = |i: usize, j: usize| surface.position(i, j);
    let idx = if along_u { i } else { j };

    let (a, b) = if r == 1 {
        return if along_u { DVec3::X } else { DVec3::Z };
    } else if idx == 0 {
        (step(i, j, 1, along_u), (i, j))
    } else if idx == r - 1 {
        ((i, j), step(i, j, -1, along_u))
    } else {
        (step(i, j, 1, along_u), step(i, j, -1, along_u))
    };

    at(a.0, a.1) - at(b.0, b.1)
}

fn step(i: usize, j: usize, by: isize, along_u: bool) -> (usize, usize) {
    if along_u {
        ((i as isize + by) as usize, j)
    } else {
        (i, (j as isize + by) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bezier::patch::{PatchGrid, sample_surface};
    use glam::DVec3;

    fn flat_surface(resolution: usize) -> SampledSurface {
        let mut points = Vec::new();
        for i in 0..4 {
            for j in 0..4 {
                points.push(DVec3::new(i as f64, 0.0, j as f64));
            }
        }
        sample_surface(&PatchGrid::new(points, 4, 4), resolution)
    }

    #[test]
    fn triangulation_counts() {
        let mesh = triangulate(&flat_surface(5));
        assert_eq!(mesh.vertices.len(), 25 * 3);
        assert_eq!(mesh.normals.len(), 25 * 3);
        assert_eq!(mesh.indices.len(), 4 * 4 * 6);
    }

    #[test]
    fn flat_surface_normals_point_up() {
        let mesh = triangulate(&flat_surface(5));
        for n in mesh.normals.chunks(3) {
            assert!(n[1].abs() > 0.999, "normal {n:?} not vertical");
        }
    }

    #[test]
    fn single_sample_has_no_triangles() {
        let mesh = triangulate(&flat_surface(1));
        assert_eq!(mesh.vertices.len(), 3);
        assert!(mesh.indices.is_empty());
    }

    #[test]
    fn scene_mesh_offsets_indices_and_tags_patches() {
        let scene = SceneMesh::build(&[flat_surface(3), flat_surface(3)]);
        assert_eq!(scene.patch_count, 2);
        assert_eq!(scene.vertex_count(), 18);
        assert_eq!(scene.triangle_count(), 16);
        assert_eq!(scene.patch_ids.len(), 18);
        assert_eq!(scene.patch_ids[0], 0.0);
        assert_eq!(scene.patch_ids[9], 1.0);
        // second patch indices all land in the second vertex block
        assert!(scene.indices[24..].iter().all(|&i| (9..18).contains(&i)));
    }
}
