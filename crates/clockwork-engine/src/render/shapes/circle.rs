use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::CircleCmd;

use super::common::InstancedPipeline;

/// Instances for `DrawCmd::Circle`.
///
/// The border is a ring centered on the radius, half inside and half outside.
/// A shadow is emitted as its own soft-edged instance, directly before the
/// circle that casts it.
pub(crate) struct CircleRenderer {
    pipeline: InstancedPipeline,
    instances: Vec<CircleInstance>,
}

impl CircleRenderer {
    pub(crate) fn new() -> Self {
        Self {
            pipeline: InstancedPipeline::new(
                "clockwork circle",
                include_str!("shaders/circle.wgsl"),
                CircleInstance::layout(),
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

    pub(crate) fn push(&mut self, cmd: &CircleCmd) {
        push_instances(&mut self.instances, cmd);
    }

    pub(crate) fn upload(&mut self, ctx: &RenderCtx<'_>) {
        self.pipeline.upload(ctx, &self.instances);
    }

    pub(crate) fn draw(&self, target: &mut RenderTarget<'_>, instances: Range<u32>) {
        self.pipeline.draw_range(target, instances);
    }
}

fn push_instances(out: &mut Vec<CircleInstance>, cmd: &CircleCmd) {
    if cmd.radius <= 0.0 {
        return;
    }

    if let Some(shadow) = &cmd.shadow
        && shadow.color.a > 0.0
    {
        let center = cmd.center + shadow.offset;
        out.push(CircleInstance {
            center: [center.x, center.y],
            radii: [cmd.radius, cmd.radius],
            fill: shadow.color.to_array(),
            border_color: [0.0; 4],
            softness: [shadow.blur.max(0.0), 0.0],
        });
    }

    let (half_width, border_color) = match &cmd.border {
        Some(b) => (b.width.max(0.0) * 0.5, b.color.to_array()),
        None => (0.0, [0.0f32; 4]),
    };

    out.push(CircleInstance {
        center: [cmd.center.x, cmd.center.y],
        radii: [(cmd.radius - half_width).max(0.0), cmd.radius + half_width],
        fill: cmd.fill.to_array(),
        border_color,
        softness: [0.0, 0.0],
    });
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (56 bytes):
///
///  offset  0  center       [f32; 2]   loc 1
///  offset  8  radii        [f32; 2]   loc 2  (.x = fill edge, .y = outer border edge)
///  offset 16  fill         [f32; 4]   loc 3
///  offset 32  border_color [f32; 4]   loc 4
///  offset 48  softness     [f32; 2]   loc 5  (.x = shadow blur, 0 = hard edge)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct CircleInstance {
    center: [f32; 2],
    radii: [f32; 2],
    fill: [f32; 4],
    border_color: [f32; 4],
    softness: [f32; 2],
}

impl CircleInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // center
        2 => Float32x2, // radii
        3 => Float32x4, // fill
        4 => Float32x4, // border_color
        5 => Float32x2  // softness
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::{Border, Shadow};

    fn instances_for(cmd: CircleCmd) -> Vec<CircleInstance> {
        let mut out = Vec::new();
        push_instances(&mut out, &cmd);
        out
    }

    #[test]
    fn instance_is_56_bytes() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 56);
    }

    #[test]
    fn non_positive_radius_is_skipped() {
        let cmd = CircleCmd::new(Vec2::zero(), 0.0, Color::BLACK, None, None);
        assert!(instances_for(cmd).is_empty());
    }

    #[test]
    fn shadow_precedes_its_circle() {
        let shadow = Shadow::new(100.0, Vec2::new(0.0, 4.0), Color::from_srgb_u8(0, 0, 0, 80));
        let cmd = CircleCmd::new(
            Vec2::new(50.0, 50.0),
            100.0,
            Color::WHITE,
            Some(Border::new(2.0, Color::WHITE)),
            Some(shadow),
        );
        let out = instances_for(cmd);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].center, [50.0, 54.0]);
        assert_eq!(out[0].softness[0], 100.0);
        assert_eq!(out[0].radii, [100.0, 100.0]);
        assert_eq!(out[1].softness[0], 0.0);
    }

    // ── border ring ───────────────────────────────────────────────────────

    #[test]
    fn border_straddles_the_radius() {
        let cmd = CircleCmd::new(
            Vec2::zero(),
            100.0,
            Color::WHITE,
            Some(Border::new(2.0, Color::WHITE)),
            None,
        );
        assert_eq!(instances_for(cmd)[0].radii, [99.0, 101.0]);
    }

    #[test]
    fn no_border_means_a_single_edge() {
        let cmd = CircleCmd::new(Vec2::zero(), 5.0, Color::BLACK, None, None);
        assert_eq!(instances_for(cmd)[0].radii, [5.0, 5.0]);
    }

    #[test]
    fn negative_border_width_clamps_to_zero() {
        let cmd = CircleCmd::new(
            Vec2::zero(),
            5.0,
            Color::BLACK,
            Some(Border::new(-3.0, Color::RED)),
            None,
        );
        assert_eq!(instances_for(cmd)[0].radii, [5.0, 5.0]);
    }

    #[test]
    fn border_wider_than_the_circle_keeps_a_non_negative_fill_edge() {
        let cmd = CircleCmd::new(
            Vec2::zero(),
            1.0,
            Color::BLACK,
            Some(Border::new(6.0, Color::RED)),
            None,
        );
        assert_eq!(instances_for(cmd)[0].radii, [0.0, 4.0]);
    }
}
