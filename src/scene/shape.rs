//! Rotating wireframe icosahedron with a floating wobble.

use std::collections::BTreeSet;

use glam::{EulerRot, Mat4, Vec3};

use crate::params::{FloatParams, ShapeParams};

/// Triangles of a unit icosahedron (indices into `icosahedron_vertices`)
const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Icosahedron vertices scaled to the given circumscribed radius
pub fn icosahedron_vertices(radius: f32) -> Vec<Vec3> {
    let t = (1.0 + 5.0f32.sqrt()) / 2.0;
    let raw = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];

    raw.iter()
        .map(|v| Vec3::from_array(*v).normalize() * radius)
        .collect()
}

/// Unique undirected edges of the icosahedron, sorted
pub fn icosahedron_edges() -> Vec<[u32; 2]> {
    let mut edges = BTreeSet::new();
    for face in ICOSAHEDRON_FACES {
        for e in 0..3 {
            let a = face[e];
            let b = face[(e + 1) % 3];
            edges.insert([a.min(b), a.max(b)]);
        }
    }
    edges.into_iter().collect()
}

/// Gentle hover: small wobble rotation and vertical drift
#[derive(Debug, Clone)]
pub struct FloatEffect {
    params: FloatParams,
    /// Phase offset so separate floats drift out of sync
    offset: f32,
    rotation: [f32; 3],
    lift: f32,
}

impl FloatEffect {
    pub fn new(params: FloatParams, offset: f32) -> Self {
        Self {
            params,
            offset,
            rotation: [0.0; 3],
            lift: 0.0,
        }
    }

    pub fn update(&mut self, elapsed_s: f32) {
        let p = &self.params;
        let u = (self.offset + elapsed_s) / 4.0 * p.speed;

        self.rotation = [
            u.cos() / 8.0 * p.rotation_intensity,
            u.sin() / 8.0 * p.rotation_intensity,
            u.sin() / 20.0 * p.rotation_intensity,
        ];

        let raw = u.sin() / 10.0;
        let (lo, hi) = p.floating_range;
        let mapped = lo + (raw + 0.1) * (hi - lo) / 0.2;
        self.lift = mapped * p.float_intensity;
    }

    pub fn rotation(&self) -> [f32; 3] {
        self.rotation
    }

    pub fn lift(&self) -> f32 {
        self.lift
    }

    pub fn matrix(&self) -> Mat4 {
        let [x, y, z] = self.rotation;
        Mat4::from_translation(Vec3::new(0.0, self.lift, 0.0))
            * Mat4::from_euler(EulerRot::XYZ, x, y, z)
    }
}

/// Decorative wireframe solid
pub struct CyberShape {
    /// Line-list vertex positions (two triples per edge)
    line_positions: Box<[f32]>,
    vertex_count: usize,
    edge_count: usize,
    /// Mesh rotation about X and Y (radians)
    rotation: [f32; 2],
    /// Mesh vertical position (world units)
    bob: f32,
    float: FloatEffect,
    params: ShapeParams,
}

impl CyberShape {
    pub fn new(params: ShapeParams, float_offset: f32) -> Self {
        let vertices = icosahedron_vertices(params.radius);
        let edges = icosahedron_edges();

        let line_positions: Box<[f32]> = edges
            .iter()
            .flat_map(|[a, b]| {
                let va = vertices[*a as usize];
                let vb = vertices[*b as usize];
                [va.x, va.y, va.z, vb.x, vb.y, vb.z]
            })
            .collect();

        Self {
            line_positions,
            vertex_count: vertices.len(),
            edge_count: edges.len(),
            rotation: [0.0, 0.0],
            bob: params.position[1],
            float: FloatEffect::new(params.float.clone(), float_offset),
            params,
        }
    }

    /// Line-list positions for the wireframe
    pub fn line_positions(&self) -> &[f32] {
        &self.line_positions
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn rotation(&self) -> [f32; 2] {
        self.rotation
    }

    pub fn bob(&self) -> f32 {
        self.bob
    }

    pub fn params(&self) -> &ShapeParams {
        &self.params
    }

    /// Set rotation and bob directly from elapsed time (seconds)
    pub fn update(&mut self, elapsed_s: f32) {
        self.rotation = [
            elapsed_s * self.params.spin_x,
            elapsed_s * self.params.spin_y,
        ];
        self.bob = elapsed_s.sin() * self.params.bob_amplitude;
        self.float.update(elapsed_s);
    }

    /// Float wrapper transform applied around the mesh transform
    pub fn model_matrix(&self) -> Mat4 {
        let [x, _, z] = self.params.position;
        let mesh = Mat4::from_translation(Vec3::new(x, self.bob, z))
            * Mat4::from_euler(EulerRot::XYZ, self.rotation[0], self.rotation[1], 0.0);

        self.float.matrix() * mesh
    }
}
