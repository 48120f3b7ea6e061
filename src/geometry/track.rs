use std::f32::consts::{FRAC_PI_2, TAU};
use bevy::prelude::*;
use crate::core::path_curve::PathCurve;
use crate::geometry::triangle_soup::TriangleSoup;

const RAIL_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
const SPINE_COLOR: [f32; 3] = [1.0, 1.0, 0.0];

// Cross tie drawn between the rails, two triangles in the profile plane
const STEP: [Vec3; 6] = [
    Vec3::new(-0.225, 0.0, 0.0),
    Vec3::new(0.0, -0.050, 0.0),
    Vec3::new(0.0, -0.175, 0.0),
    Vec3::new(0.0, -0.050, 0.0),
    Vec3::new(0.225, 0.0, 0.0),
    Vec3::new(0.0, -0.175, 0.0),
];

// Triangular beam profiles for the supports
const BEAM: [Vec3; 3] = [Vec3::new(0.0, 0.05, -0.05), Vec3::new(0.0, 0.05, 0.05), Vec3::new(0.0, -0.05, 0.0)];
const LEFT_LEG: [Vec3; 3] = [Vec3::new(-0.05, 0.0, 0.05), Vec3::new(-0.05, 0.0, -0.05), Vec3::new(0.05, 0.0, 0.0)];
const RIGHT_LEG: [Vec3; 3] = [Vec3::new(0.05, 0.0, -0.05), Vec3::new(0.05, 0.0, 0.05), Vec3::new(-0.05, 0.0, 0.0)];

// Track points above this height get a two-legged trestle instead of a single post
pub const TRESTLE_HEIGHT: f32 = 10.0;

/// Regular polygon in the XY plane, first vertex at +Y.
pub fn tube_profile(sides: usize, radius: f32) -> Vec<Vec3> {
    (0..sides)
        .map(|i| {
            let angle = i as f32 / sides as f32 * TAU;
            Vec3::new(angle.sin() * radius, angle.cos() * radius, 0.0)
        })
        .collect()
}

// Position and heading of one ring of the extrusion
#[derive(Debug, Clone, Copy)]
struct Ring {
    point: Vec3,
    rotation: Quat,
}

impl Ring {
    fn place(&self, local: Vec3) -> Vec3 {
        self.rotation * local + self.point
    }
}

/// Rails, spine and cross ties extruded along the curve.
pub fn rails(curve: &dyn PathCurve, divisions: usize) -> TriangleSoup {
    let spine = tube_profile(5, 0.06);
    let rail = tube_profile(6, 0.025);

    let mut soup = TriangleSoup::new();
    let mut prev = Ring {
        point: curve.position(0.0).as_vec3(),
        rotation: Quat::from_axis_angle(Vec3::Y, FRAC_PI_2),
    };

    for i in 1..=divisions {
        let point = curve.position(i as f64 / divisions as f64).as_vec3();

        let forward = (point - prev.point).normalize_or_zero();
        let right = Vec3::Y.cross(forward).normalize_or_zero();
        let up = forward.cross(right).try_normalize().unwrap_or(Vec3::Y);
        let angle = forward.x.atan2(forward.z);
        let ring = Ring { point, rotation: Quat::from_axis_angle(up, angle) };

        if i % 2 == 0 {
            draw_shape(&mut soup, &STEP, &ring, SPINE_COLOR);
        }
        extrude_ring(&mut soup, &spine, Vec3::new(0.0, -0.125, 0.0), &ring, &prev, SPINE_COLOR);
        extrude_ring(&mut soup, &rail, Vec3::new(0.2, 0.0, 0.0), &ring, &prev, RAIL_COLOR);
        extrude_ring(&mut soup, &rail, Vec3::new(-0.2, 0.0, 0.0), &ring, &prev, RAIL_COLOR);

        prev = ring;
    }

    soup
}

fn extrude_ring(soup: &mut TriangleSoup, shape: &[Vec3], offset: Vec3, ring: &Ring, prev: &Ring, color: [f32; 3]) {
    for j in 0..shape.len() {
        let p1 = shape[j];
        let p2 = shape[(j + 1) % shape.len()];

        let v1 = ring.place(p1 + offset);
        let v2 = ring.place(p2 + offset);
        let v3 = prev.place(p2 + offset);
        let v4 = prev.place(p1 + offset);

        soup.push_triangle(v1, v2, v4);
        soup.push_triangle(v2, v3, v4);

        let n1 = (ring.rotation * p1).normalize_or_zero();
        let n2 = (ring.rotation * p2).normalize_or_zero();
        let n3 = (prev.rotation * p2).normalize_or_zero();
        let n4 = (prev.rotation * p1).normalize_or_zero();
        soup.push_normals(n1, n2, n4);
        soup.push_normals(n2, n3, n4);

        soup.push_colors(color, 6);
    }
}

// Both faces of a flat shape, front then reversed back
fn draw_shape(soup: &mut TriangleSoup, shape: &[Vec3], ring: &Ring, color: [f32; 3]) {
    let front = ring.rotation * Vec3::NEG_Z;
    for tri in shape.chunks_exact(3) {
        soup.push_triangle(ring.place(tri[0]), ring.place(tri[1]), ring.place(tri[2]));
        soup.push_normals(front, front, front);
    }

    let back = ring.rotation * Vec3::Z;
    let reversed: Vec<Vec3> = shape.iter().rev().copied().collect();
    for tri in reversed.chunks_exact(3) {
        soup.push_triangle(ring.place(tri[0]), ring.place(tri[1]), ring.place(tri[2]));
        soup.push_normals(back, back, back);
    }

    soup.push_colors(color, shape.len() * 2);
}

/// Support posts from the track down to the ground.
pub fn lifters(curve: &dyn PathCurve, divisions: usize) -> TriangleSoup {
    let mut soup = TriangleSoup::new();

    for i in 1..=divisions {
        let t = i as f64 / divisions as f64;
        let point = curve.position(t).as_vec3();
        let tangent = curve.tangent(t).as_vec3();

        let rotation = Quat::from_axis_angle(Vec3::Y, tangent.x.atan2(tangent.z));
        let at = |local: Vec3| rotation * local + point;

        if point.y > TRESTLE_HEIGHT {
            extrude_between(&mut soup, &BEAM, rotation, at(Vec3::new(-0.75, -0.35, 0.0)), at(Vec3::new(0.75, -0.35, 0.0)));
            extrude_between(&mut soup, &LEFT_LEG, rotation, at(Vec3::new(-0.7, -0.3, 0.0)), at(Vec3::new(-0.7, -point.y, 0.0)));
            extrude_between(&mut soup, &RIGHT_LEG, rotation, at(Vec3::new(0.7, -0.3, 0.0)), at(Vec3::new(0.7, -point.y, 0.0)));
        } else {
            extrude_between(&mut soup, &RIGHT_LEG, rotation, at(Vec3::new(0.0, -0.2, 0.0)), at(Vec3::new(0.0, -point.y, 0.0)));
        }
    }

    soup
}

fn extrude_between(soup: &mut TriangleSoup, shape: &[Vec3], rotation: Quat, from: Vec3, to: Vec3) {
    for j in 0..shape.len() {
        let p1 = rotation * shape[j];
        let p2 = rotation * shape[(j + 1) % shape.len()];

        let (v1, v2, v3, v4) = (p1 + from, p2 + from, p2 + to, p1 + to);
        soup.push_triangle(v1, v2, v4);
        soup.push_triangle(v2, v3, v4);

        let (n1, n2) = (p1.normalize_or_zero(), p2.normalize_or_zero());
        soup.push_normals(n1, n2, n1);
        soup.push_normals(n2, n2, n1);
    }
}

/// Flat strip under the track, projected onto y = 0.
pub fn shadow(curve: &dyn PathCurve, divisions: usize) -> TriangleSoup {
    let mut soup = TriangleSoup::new();

    let mut prev_point = curve.position(0.0).as_vec3();
    let mut prev_rotation = Quat::from_axis_angle(Vec3::Y, FRAC_PI_2);

    for i in 1..=divisions {
        let point = curve.position(i as f64 / divisions as f64).as_vec3();
        let forward = point - prev_point;
        let rotation = Quat::from_axis_angle(Vec3::Y, forward.x.atan2(forward.z));

        let flat = |v: Vec3| Vec3::new(v.x, 0.0, v.z);
        let v1 = flat(rotation * Vec3::new(-0.3, 0.0, 0.0) + point);
        let v2 = flat(rotation * Vec3::new(0.3, 0.0, 0.0) + point);
        let v3 = flat(prev_rotation * Vec3::new(0.3, 0.0, 0.0) + prev_point);
        let v4 = flat(prev_rotation * Vec3::new(-0.3, 0.0, 0.0) + prev_point);

        soup.push_triangle(v1, v2, v4);
        soup.push_triangle(v2, v3, v4);

        prev_point = point;
        prev_rotation = rotation;
    }

    soup
}
