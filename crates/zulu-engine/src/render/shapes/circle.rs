use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::common::{
    begin_load_pass, create_instanced_pipeline, create_viewport_ubo, viewport_ubo_layout_entry,
    InstanceBuffer, LayerRanges, QuadBuffers, ViewportUniform,
};

/// Renderer for `DrawCmd::Circle`.
///
/// Fills and borders share one instance. The border stroke is centered on the
/// circle's edge, half inside and half outside the radius.
#[derive(Default)]
pub struct CircleRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    quad: Option<QuadBuffers>,
    instances: InstanceBuffer,
    layers: LayerRanges,
}

impl CircleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects and uploads every circle in `draw_list` for this frame.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, draw_list: &mut DrawList) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        if self.quad.is_none() {
            self.quad = Some(QuadBuffers::new(ctx, "zulu circle"));
        }

        self.layers.clear();
        let mut instances: Vec<CircleInstance> = Vec::new();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Circle(cmd) = &item.cmd else { continue };

            if cmd.radius <= 0.0 || !cmd.radius.is_finite() || !cmd.center.is_finite() {
                continue;
            }

            let fill = cmd.fill.map(|c| c.to_array()).unwrap_or([0.0; 4]);
            let (border_width, border_color) = match &cmd.border {
                Some(b) => (b.width.max(0.0), b.color.to_array()),
                None => (0.0, [0.0f32; 4]),
            };

            if cmd.fill.is_none() && border_width == 0.0 {
                continue;
            }

            self.layers.record(item.key.z, instances.len() as u32);
            instances.push(CircleInstance {
                center: [cmd.center.x, cmd.center.y],
                radius_bw: [cmd.radius, border_width],
                fill,
                border_color,
            });
        }

        if instances.is_empty() {
            return;
        }

        if let Some(ubo) = self.viewport_ubo.as_ref() {
            ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&ViewportUniform::from_ctx(ctx)));
        }
        self.instances.upload(ctx, "zulu circle instance vbo", &instances);
    }

    /// Draws the circles prepared for layer `z`, if any.
    pub fn draw_layer(&self, target: &mut RenderTarget<'_>, z: ZIndex) {
        let Some(range) = self.layers.range(z) else { return };

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad) = self.quad.as_ref() else { return };
        let Some(instance_vbo) = self.instances.buffer() else { return };

        let mut rpass = begin_load_pass(target, "zulu circle pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad.vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..6, 0, range);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("zulu circle bgl"),
                entries: &[viewport_ubo_layout_entry()],
            });

        let pipeline = create_instanced_pipeline(
            ctx,
            "zulu circle",
            include_str!("shaders/circle.wgsl"),
            &bind_group_layout,
            CircleInstance::layout(),
        );

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = create_viewport_ubo(ctx, "zulu circle viewport ubo");

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("zulu circle bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (48 bytes):
///
///  offset  0  center      [f32; 2]   loc 1
///  offset  8  radius_bw   [f32; 2]   loc 2  (.x = radius, .y = border_width)
///  offset 16  fill        [f32; 4]   loc 3
///  offset 32  border_color[f32; 4]   loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct CircleInstance {
    center: [f32; 2],
    radius_bw: [f32; 2],
    fill: [f32; 4],
    border_color: [f32; 4],
}

impl CircleInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // center
        2 => Float32x2, // radius_bw
        3 => Float32x4, // fill
        4 => Float32x4  // border_color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
