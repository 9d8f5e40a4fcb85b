use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::common::{
    begin_load_pass, create_instanced_pipeline, create_viewport_ubo, viewport_ubo_layout_entry,
    InstanceBuffer, LayerRanges, QuadBuffers, ViewportUniform,
};

/// Renderer for `DrawCmd::Line`.
///
/// Each segment is an oriented quad with butt caps; the fragment shader
/// antialiases the long edges and both ends.
#[derive(Default)]
pub struct LineRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    quad: Option<QuadBuffers>,
    instances: InstanceBuffer,
    layers: LayerRanges,
}

impl LineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects and uploads every line in `draw_list` for this frame.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, draw_list: &mut DrawList) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        if self.quad.is_none() {
            self.quad = Some(QuadBuffers::new(ctx, "zulu line"));
        }

        self.layers.clear();
        let mut instances: Vec<LineInstance> = Vec::new();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Line(cmd) = &item.cmd else { continue };

            if cmd.width <= 0.0 || !cmd.from.is_finite() || !cmd.to.is_finite() {
                continue;
            }
            // Zero-length segments with butt caps cover nothing.
            if cmd.length() <= f32::EPSILON {
                continue;
            }

            self.layers.record(item.key.z, instances.len() as u32);
            instances.push(LineInstance {
                from: [cmd.from.x, cmd.from.y],
                to: [cmd.to.x, cmd.to.y],
                color: cmd.color.to_array(),
                width: [cmd.width, 0.0],
                _pad: [0.0; 2],
            });
        }

        if instances.is_empty() {
            return;
        }

        if let Some(ubo) = self.viewport_ubo.as_ref() {
            ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&ViewportUniform::from_ctx(ctx)));
        }
        self.instances.upload(ctx, "zulu line instance vbo", &instances);
    }

    /// Draws the lines prepared for layer `z`, if any.
    pub fn draw_layer(&self, target: &mut RenderTarget<'_>, z: ZIndex) {
        let Some(range) = self.layers.range(z) else { return };

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad) = self.quad.as_ref() else { return };
        let Some(instance_vbo) = self.instances.buffer() else { return };

        let mut rpass = begin_load_pass(target, "zulu line pass");
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
                label: Some("zulu line bgl"),
                entries: &[viewport_ubo_layout_entry()],
            });

        let pipeline = create_instanced_pipeline(
            ctx,
            "zulu line",
            include_str!("shaders/line.wgsl"),
            &bind_group_layout,
            LineInstance::layout(),
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

        let viewport_ubo = create_viewport_ubo(ctx, "zulu line viewport ubo");

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("zulu line bind group"),
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
///  offset  0  from   [f32; 2]   loc 1
///  offset  8  to     [f32; 2]   loc 2
///  offset 16  color  [f32; 4]   loc 3
///  offset 32  width  [f32; 2]   loc 4  (.x = stroke width)
///  offset 40  _pad   [f32; 2]
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct LineInstance {
    from: [f32; 2],
    to: [f32; 2],
    color: [f32; 4],
    width: [f32; 2],
    _pad: [f32; 2],
}

impl LineInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // from
        2 => Float32x2, // to
        3 => Float32x4, // color
        4 => Float32x2  // width
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_layout_matches_struct_size() {
        assert_eq!(std::mem::size_of::<LineInstance>(), 48);
        assert_eq!(LineInstance::layout().array_stride, 48);
    }
}
