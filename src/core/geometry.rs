// CPU-side meshes: the unit picture quad and the procedural tunnel.

use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    /// Append a rectangle spanning `origin + s*u + t*v` for s, t in [0, 1].
    ///
    /// Winding is chosen so the front face points along `normal`.
    pub fn push_quad(&mut self, origin: Vec3, u: Vec3, v: Vec3, normal: Vec3) {
        let base = self.vertices.len() as u16;
        let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        for (s, t) in corners {
            let p = origin + u * s + v * t;
            self.vertices.push(Vertex {
                position: p.to_array(),
                normal: normal.to_array(),
                uv: [s, 1.0 - t],
            });
        }
        if u.cross(v).dot(normal) >= 0.0 {
            self.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        } else {
            self.indices
                .extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Unit quad centered at the origin in the XY plane, facing +Z.
pub fn unit_quad() -> Mesh {
    let mut mesh = Mesh::default();
    mesh.push_quad(Vec3::new(-0.5, -0.5, 0.0), Vec3::X, Vec3::Y, Vec3::Z);
    mesh
}

/// Dimensions of the corridor the slides hang in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TunnelSpec {
    pub half_width: f32,
    pub floor_y: f32,
    pub ceiling_y: f32,
    pub z_near: f32,
    pub z_far: f32,
}

/// Open box corridor (floor, ceiling, side walls, back wall) with inward normals.
pub fn tunnel(spec: &TunnelSpec) -> Mesh {
    let mut mesh = Mesh::default();
    let w = spec.half_width;
    let height = spec.ceiling_y - spec.floor_y;
    let depth = spec.z_far - spec.z_near; // negative: the corridor runs toward -Z
    let along = Vec3::new(0.0, 0.0, depth);
    let across = Vec3::new(2.0 * w, 0.0, 0.0);
    let up = Vec3::new(0.0, height, 0.0);

    // floor and ceiling
    mesh.push_quad(Vec3::new(-w, spec.floor_y, spec.z_near), across, along, Vec3::Y);
    mesh.push_quad(Vec3::new(-w, spec.ceiling_y, spec.z_near), across, along, -Vec3::Y);
    // side walls
    mesh.push_quad(Vec3::new(-w, spec.floor_y, spec.z_near), along, up, Vec3::X);
    mesh.push_quad(Vec3::new(w, spec.floor_y, spec.z_near), along, up, -Vec3::X);
    // back wall
    mesh.push_quad(Vec3::new(-w, spec.floor_y, spec.z_far), across, up, Vec3::Z);
    mesh
}
