use crate::render::shapes::{circle::CircleRenderer, line::LineRenderer, text::TextRenderer};
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::DrawList;
use crate::text::FontSystem;

/// Draws a whole [`DrawList`] with every shape renderer, layer by layer.
///
/// Within one layer circles go first, then lines, then text.
#[derive(Default)]
pub struct SceneRenderer {
    circles: CircleRenderer,
    lines: LineRenderer,
    text: TextRenderer,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        fonts: &FontSystem,
    ) {
        if draw_list.is_empty() {
            return;
        }

        self.circles.prepare(ctx, draw_list);
        self.lines.prepare(ctx, draw_list);
        self.text.prepare(ctx, draw_list, fonts);

        for z in draw_list.layers() {
            self.circles.draw_layer(target, z);
            self.lines.draw_layer(target, z);
            self.text.draw_layer(target, z);
        }
    }
}
