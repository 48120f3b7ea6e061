use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

/// Unindexed triangle list with optional per-vertex normals and colors.
///
/// Generators push whole triangles; `into_mesh` computes flat normals when none were given.
#[derive(Debug, Clone, Default)]
pub struct TriangleSoup {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
}

impl TriangleSoup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn push_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        self.positions.extend([a.to_array(), b.to_array(), c.to_array()]);
    }

    pub fn push_normals(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        self.normals.extend([a.to_array(), b.to_array(), c.to_array()]);
    }

    pub fn push_colors(&mut self, color: [f32; 3], count: usize) {
        let rgba = [color[0], color[1], color[2], 1.0];
        self.colors.extend(std::iter::repeat(rgba).take(count));
    }

    pub fn into_mesh(self) -> Mesh {
        let has_normals = !self.normals.is_empty() && self.normals.len() == self.positions.len();
        let has_colors = !self.colors.is_empty() && self.colors.len() == self.positions.len();

        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.positions);
        if has_colors {
            mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, self.colors);
        }
        if has_normals {
            mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals);
        } else {
            mesh.compute_flat_normals();
        }
        mesh
    }
}

/// Indexed grid mesh; positions laid out row-major.
pub fn indexed_mesh(positions: Vec<[f32; 3]>, indices: Vec<u32>) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_indices(Indices::U32(indices));
    mesh.compute_normals();
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_gets_flat_normals_without_explicit_ones() {
        let mut soup = TriangleSoup::new();
        soup.push_triangle(Vec3::ZERO, Vec3::Z, Vec3::X);
        soup.push_colors([1.0, 0.0, 0.0], 3);
        let mesh = soup.into_mesh();
        assert_eq!(mesh.count_vertices(), 3);
        assert!(mesh.attribute(Mesh::ATTRIBUTE_NORMAL).is_some());
        assert!(mesh.attribute(Mesh::ATTRIBUTE_COLOR).is_some());
    }
}
