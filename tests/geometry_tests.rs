// Host-side tests for the picture quad and tunnel meshes.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod geometry {
    include!("../src/core/geometry.rs");
}

use geometry::*;
use glam::Vec3;

const SPEC: TunnelSpec = TunnelSpec {
    half_width: 5.0,
    floor_y: -3.0,
    ceiling_y: 4.0,
    z_near: 2.0,
    z_far: -30.0,
};

fn pos(v: &Vertex) -> Vec3 {
    Vec3::from_array(v.position)
}

/// Every triangle's winding normal agrees with the stored vertex normal.
fn assert_front_faces_match_normals(mesh: &Mesh) {
    for tri in mesh.indices.chunks_exact(3) {
        let [a, b, c] = [
            &mesh.vertices[tri[0] as usize],
            &mesh.vertices[tri[1] as usize],
            &mesh.vertices[tri[2] as usize],
        ];
        let face = (pos(b) - pos(a)).cross(pos(c) - pos(a));
        assert!(
            face.dot(Vec3::from_array(a.normal)) > 0.0,
            "triangle {:?} winds against its normal",
            tri
        );
    }
}

#[test]
fn unit_quad_is_centered_and_faces_forward() {
    let quad = unit_quad();
    assert_eq!(quad.vertices.len(), 4);
    assert_eq!(quad.triangle_count(), 2);
    let center: Vec3 = quad.vertices.iter().map(pos).sum::<Vec3>() / 4.0;
    assert!(center.length() < 1e-6);
    for v in &quad.vertices {
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
        assert!(v.position[0].abs() <= 0.5 && v.position[1].abs() <= 0.5);
    }
    assert_front_faces_match_normals(&quad);
}

#[test]
fn quad_uv_origin_is_top_left() {
    let quad = unit_quad();
    let top_left = quad
        .vertices
        .iter()
        .find(|v| v.position[0] < 0.0 && v.position[1] > 0.0)
        .unwrap();
    assert_eq!(top_left.uv, [0.0, 0.0]);
}

#[test]
fn tunnel_has_five_inward_faces() {
    let mesh = tunnel(&SPEC);
    assert_eq!(mesh.vertices.len(), 20);
    assert_eq!(mesh.triangle_count(), 10);
    assert_front_faces_match_normals(&mesh);

    // normals point toward the corridor axis
    let inside = Vec3::new(0.0, 0.0, -10.0);
    for v in &mesh.vertices {
        let to_inside = inside - pos(v);
        assert!(to_inside.dot(Vec3::from_array(v.normal)) > 0.0);
    }
}

#[test]
fn tunnel_stays_within_bounds() {
    let mesh = tunnel(&SPEC);
    for v in &mesh.vertices {
        let p = pos(v);
        assert!(p.x.abs() <= SPEC.half_width + 1e-5);
        assert!(p.y >= SPEC.floor_y - 1e-5 && p.y <= SPEC.ceiling_y + 1e-5);
        assert!(p.z <= SPEC.z_near + 1e-5 && p.z >= SPEC.z_far - 1e-5);
    }
}

#[test]
fn vertex_layout_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<Vertex>(), 32);
    let quad = unit_quad();
    let bytes: &[u8] = bytemuck::cast_slice(&quad.vertices);
    assert_eq!(bytes.len(), 4 * 32);
}
