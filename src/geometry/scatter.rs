use std::f32::consts::{PI, TAU};
use bevy::prelude::*;
use rand::Rng;
use crate::geometry::terrain::Terrain;
use crate::geometry::triangle_soup::TriangleSoup;

/// Crossed-billboard trees dropped onto the terrain.
///
/// Each attempt picks a spot in the ground's footprint and probes straight down;
/// spots off the ground are skipped.
pub fn trees(terrain: &Terrain, attempts: usize, rng: &mut impl Rng) -> TriangleSoup {
    let mut soup = TriangleSoup::new();

    for _ in 0..attempts {
        let x = rng.gen::<f32>() * 500.0 - 250.0;
        let z = rng.gen::<f32>() * 500.0 - 250.0;

        let Some(y) = terrain.height_at(x, z) else {
            continue;
        };

        let height = rng.gen::<f32>() * 5.0 + 0.5;
        let mut angle = rng.gen::<f32>() * TAU;

        for _ in 0..2 {
            soup.push_triangle(
                Vec3::new(x + angle.sin(), y, z + angle.cos()),
                Vec3::new(x, y + height, z),
                Vec3::new(x + (angle + PI).sin(), y, z + (angle + PI).cos()),
            );
            angle += PI / 2.0;
        }

        let tint = rng.gen::<f32>() * 0.1;
        soup.push_colors([0.2 + tint, 0.4 + tint, 0.0], 6);
    }

    soup
}

/// Flat cloud quads hanging between 50 and 100 units up.
pub fn clouds(count: usize, rng: &mut impl Rng) -> TriangleSoup {
    let mut soup = TriangleSoup::new();

    for _ in 0..count {
        let x = rng.gen::<f32>() * 800.0 - 400.0;
        let y = rng.gen::<f32>() * 50.0 + 50.0;
        let z = rng.gen::<f32>() * 800.0 - 400.0;
        let size = rng.gen::<f32>() * 40.0 + 20.0;

        soup.push_triangle(
            Vec3::new(x - size, y, z - size),
            Vec3::new(x + size, y, z - size),
            Vec3::new(x - size, y, z + size),
        );
        soup.push_triangle(
            Vec3::new(x + size, y, z - size),
            Vec3::new(x + size, y, z + size),
            Vec3::new(x - size, y, z + size),
        );
    }

    soup
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_prng::WyRand;
    use rand::SeedableRng;

    #[test]
    fn trees_stand_on_the_ground() {
        let mut rng = WyRand::seed_from_u64(4);
        let terrain = Terrain::generate(&mut rng);
        let soup = trees(&terrain, 200, &mut rng);

        assert_eq!(soup.vertex_count() % 6, 0);
        assert_eq!(soup.colors.len(), soup.vertex_count());
        for tree in soup.positions.chunks_exact(6) {
            let base = Vec3::from_array(tree[0]);
            let ground = terrain.height_at(tree[1][0], tree[1][2]).unwrap();
            assert!((base.y - ground).abs() < 1e-3);
            let top = Vec3::from_array(tree[1]);
            assert!(top.y - base.y >= 0.5 && top.y - base.y < 5.5);
        }
    }

    #[test]
    fn inside_footprint_every_attempt_lands() {
        // The jittered rim may pull back up to 5 units, so a handful of misses are allowed
        let mut rng = WyRand::seed_from_u64(5);
        let terrain = Terrain::generate(&mut rng);
        let soup = trees(&terrain, 500, &mut rng);
        assert!(soup.vertex_count() / 6 > 450);
    }

    #[test]
    fn clouds_stay_in_their_band() {
        let soup = clouds(100, &mut WyRand::seed_from_u64(6));
        assert_eq!(soup.triangle_count(), 200);
        for p in &soup.positions {
            assert!((50.0..100.0).contains(&p[1]));
            assert!(p[0].abs() <= 460.0 && p[2].abs() <= 460.0);
        }
    }
}
