//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
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

/// Colors for game elements (placeholders for the named images)
pub mod colors {
    use crate::assets;

    pub const SKY: [f32; 4] = [0.45, 0.75, 0.95, 1.0];
    pub const GROUND: [f32; 4] = [0.25, 0.55, 0.2, 1.0];
    pub const STAR: [f32; 4] = [1.0, 0.85, 0.2, 1.0];
    pub const BOMB: [f32; 4] = [0.15, 0.15, 0.18, 1.0];
    pub const PLAYER: [f32; 4] = [0.55, 0.35, 0.75, 1.0];
    pub const PLAYER_FACE: [f32; 4] = [1.0, 0.9, 0.8, 1.0];
    pub const DEBUG_OUTLINE: [f32; 4] = [1.0, 0.0, 1.0, 0.8];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    /// Placeholder color for an asset name
    pub fn for_asset(name: &str) -> [f32; 4] {
        match name {
            assets::SKY => SKY,
            assets::GROUND => GROUND,
            assets::STAR => STAR,
            assets::BOMB => BOMB,
            assets::DUDE => PLAYER,
            _ => DEBUG_OUTLINE,
        }
    }
}
