//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for table elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.043, 0.071, 0.125, 1.0];
    pub const PLAYFIELD: [f32; 4] = [0.063, 0.102, 0.2, 1.0];
    pub const BALL: [f32; 4] = [0.341, 0.839, 1.0, 1.0];
    pub const PADDLE: [f32; 4] = [1.0, 0.784, 0.341, 1.0];
    pub const PLUNGER_HOUSING: [f32; 4] = [0.122, 0.165, 0.267, 1.0];
    pub const PLUNGER_HANDLE: [f32; 4] = [0.478, 0.898, 0.51, 1.0];
    pub const BUMPER: [f32; 4] = [1.0, 0.42, 0.42, 1.0];
    pub const LANE: [f32; 4] = [0.184, 0.231, 0.322, 1.0];
}
