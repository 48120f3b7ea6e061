use bevy::prelude::*;
use bevy::math::Vec3Swizzles;
use rand::Rng;
use crate::geometry::triangle_soup::indexed_mesh;

pub const GROUND_SIZE: f32 = 500.0;
pub const GROUND_SEGMENTS: u32 = 15;
// Height a downward probe starts from when sampling the ground
pub const PROBE_HEIGHT: f32 = 50.0;

/// Rolling ground: a jittered grid that is flat near the origin and hilly towards the rim.
#[derive(Debug, Clone)]
pub struct Terrain {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl Terrain {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let (mut positions, indices) = flat_grid(GROUND_SIZE, GROUND_SEGMENTS);

        for p in positions.iter_mut() {
            let mut vertex = Vec3::from_array(*p);
            vertex.x += rng.gen::<f32>() * 10.0 - 5.0;
            vertex.z += rng.gen::<f32>() * 10.0 - 5.0;

            let distance = vertex.length() / 5.0 - 25.0;
            vertex.y = rng.gen::<f32>() * distance.max(0.0);

            *p = vertex.to_array();
        }

        Terrain { positions, indices }
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                Vec3::from_array(self.positions[tri[0] as usize]),
                Vec3::from_array(self.positions[tri[1] as usize]),
                Vec3::from_array(self.positions[tri[2] as usize]),
            ]
        })
    }

    /// Height of the first surface hit by a ray cast straight down from `PROBE_HEIGHT`.
    pub fn height_at(&self, x: f32, z: f32) -> Option<f32> {
        self.triangles()
            .filter_map(|[a, b, c]| vertical_hit(a, b, c, x, z))
            .filter(|y| *y <= PROBE_HEIGHT)
            .fold(None, |best: Option<f32>, y| Some(best.map_or(y, |b| b.max(y))))
    }

    pub fn to_mesh(&self) -> Mesh {
        indexed_mesh(self.positions.clone(), self.indices.clone())
    }
}

// Grid in the XZ plane centred on the origin; rows advance along +Z.
fn flat_grid(size: f32, segments: u32) -> (Vec<[f32; 3]>, Vec<u32>) {
    let row = segments + 1;
    let step = size / segments as f32;
    let half = size / 2.0;

    let positions = (0..row)
        .flat_map(|iz| (0..row).map(move |ix| [ix as f32 * step - half, 0.0, iz as f32 * step - half]))
        .collect();

    let mut indices = Vec::with_capacity((segments * segments * 6) as usize);
    for iz in 0..segments {
        for ix in 0..segments {
            let a = ix + row * iz;
            let b = ix + row * (iz + 1);
            let c = ix + 1 + row * (iz + 1);
            let d = ix + 1 + row * iz;
            indices.extend([a, b, d, b, c, d]);
        }
    }

    (positions, indices)
}

// Where a vertical line through (x, z) meets triangle abc, if it does.
fn vertical_hit(a: Vec3, b: Vec3, c: Vec3, x: f32, z: f32) -> Option<f32> {
    let (v0, v1) = (b.xz() - a.xz(), c.xz() - a.xz());
    let v2 = Vec2::new(x, z) - a.xz();

    let denom = v0.x * v1.y - v1.x * v0.y;
    if denom.abs() <= f32::EPSILON {
        return None;
    }
    let u = (v2.x * v1.y - v1.x * v2.y) / denom;
    let v = (v0.x * v2.y - v2.x * v0.y) / denom;
    if u < 0.0 || v < 0.0 || u + v > 1.0 {
        return None;
    }

    Some(a.y + u * (b.y - a.y) + v * (c.y - a.y))
}
