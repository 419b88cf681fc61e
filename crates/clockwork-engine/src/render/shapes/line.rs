use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::LineCmd;

use super::common::InstancedPipeline;

/// Instances for `DrawCmd::Line`.
///
/// Segments are drawn as oriented quads with butt caps and an analytic AA edge.
pub(crate) struct LineRenderer {
    pipeline: InstancedPipeline,
    instances: Vec<LineInstance>,
}

impl LineRenderer {
    pub(crate) fn new() -> Self {
        Self {
            pipeline: InstancedPipeline::new(
                "clockwork line",
                include_str!("shaders/line.wgsl"),
                LineInstance::layout(),
            ),
            instances: Vec::new(),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.instances.clear();
    }

    pub(crate) fn len(&self) -> u32 {
        self.instances.len() as u32
    }

    pub(crate) fn push(&mut self, cmd: &LineCmd) {
        self.instances.extend(LineInstance::from_cmd(cmd));
    }

    pub(crate) fn upload(&mut self, ctx: &RenderCtx<'_>) {
        self.pipeline.upload(ctx, &self.instances);
    }

    pub(crate) fn draw(&self, target: &mut RenderTarget<'_>, instances: Range<u32>) {
        self.pipeline.draw_range(target, instances);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (40 bytes):
///
///  offset  0  start   [f32; 2]   loc 1
///  offset  8  end     [f32; 2]   loc 2
///  offset 16  width   [f32; 2]   loc 3  (.x = stroke width, .y unused)
///  offset 24  color   [f32; 4]   loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct LineInstance {
    start: [f32; 2],
    end: [f32; 2],
    width: [f32; 2],
    color: [f32; 4],
}

impl LineInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // start
        2 => Float32x2, // end
        3 => Float32x2, // width
        4 => Float32x4  // color
    ];

    fn from_cmd(cmd: &LineCmd) -> Option<Self> {
        if cmd.is_degenerate() {
            return None;
        }
        Some(Self {
            start: [cmd.start.x, cmd.start.y],
            end: [cmd.end.x, cmd.end.y],
            width: [cmd.width, 0.0],
            color: cmd.color.to_array(),
        })
    }

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
