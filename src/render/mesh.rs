use glam::Vec3;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Indexed triangle list.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

/// Torus lying in the XZ plane, centred on the origin.
///
/// `radial` segments go around the ring, `tubular` around the tube.
pub fn torus(major_radius: f32, minor_radius: f32, radial: u16, tubular: u16) -> MeshData {
    let radial = radial.max(3);
    let tubular = tubular.max(3);
    let mut mesh = MeshData::default();
    for i in 0..=radial {
        let u = i as f32 / radial as f32 * TAU;
        let ring_center = Vec3::new(u.cos() * major_radius, 0.0, u.sin() * major_radius);
        let outward = Vec3::new(u.cos(), 0.0, u.sin());
        for j in 0..=tubular {
            let v = j as f32 / tubular as f32 * TAU;
            let normal = outward * v.cos() + Vec3::Y * v.sin();
            let position = ring_center + normal * minor_radius;
            mesh.vertices.push(Vertex {
                position: position.to_array(),
                normal: normal.to_array(),
            });
        }
    }
    let stride = tubular + 1;
    for i in 0..radial {
        for j in 0..tubular {
            let a = i * stride + j;
            let b = (i + 1) * stride + j;
            mesh.indices
                .extend_from_slice(&[a, a + 1, b, b, a + 1, b + 1]);
        }
    }
    mesh
}

/// Axis-aligned box centred on the origin with flat per-face normals.
pub fn cuboid(half_extents: Vec3) -> MeshData {
    const FACES: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Y, Vec3::NEG_Z),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::NEG_Z, Vec3::X),
        (Vec3::Z, Vec3::Y, Vec3::NEG_X),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    let mut mesh = MeshData::default();
    for (normal, up, side) in FACES {
        let base = mesh.vertices.len() as u16;
        for (su, ss) in [(-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (1.0, -1.0)] {
            let p = (normal + up * su + side * ss) * half_extents;
            mesh.vertices.push(Vertex {
                position: p.to_array(),
                normal: normal.to_array(),
            });
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}
