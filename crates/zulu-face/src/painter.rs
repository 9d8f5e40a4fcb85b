//! Math-space drawing helper over the engine draw list.

use zulu_engine::coords::Vec2;
use zulu_engine::paint::Color;
use zulu_engine::scene::{DrawList, ZIndex};
use zulu_engine::text::FontId;

use crate::mapper::CanvasMapper;

/// Ascent of a line box as a fraction of the font size.
///
/// The engine places text by the top-left of its line box; baseline-anchored
/// labels subtract this from their baseline.
pub const ASCENT_RATIO: f32 = 0.8;

/// Drawing surface for the clock renderers.
///
/// Wraps the engine's `DrawList` with a math-space API: points and radii are
/// in clock units and pass through the [`CanvasMapper`]; pixel offsets and
/// stroke widths are in logical pixels.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    mapper: CanvasMapper,
    font: FontId,
    layer: ZIndex,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, mapper: CanvasMapper, font: FontId) -> Self {
        Self { draw_list, mapper, font, layer: ZIndex::new(0) }
    }

    /// Layer for everything recorded after this call.
    #[inline]
    pub fn set_layer(&mut self, layer: ZIndex) {
        self.layer = layer;
    }

    #[inline]
    pub fn layer(&self) -> ZIndex {
        self.layer
    }

    // ── math space ────────────────────────────────────────────────────────

    /// Circle outline around a math-space center.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        let c = self.mapper.to_drawing_space(center);
        let r = self.mapper.scale_radius(radius);
        self.draw_list.push_ring(self.layer, c, r, width, color);
    }

    /// Filled circle around a math-space center.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let c = self.mapper.to_drawing_space(center);
        let r = self.mapper.scale_radius(radius);
        self.draw_list.push_solid_circle(self.layer, c, r, color);
    }

    /// Line segment between two math-space points.
    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let a = self.mapper.to_drawing_space(from);
        let b = self.mapper.to_drawing_space(to);
        self.draw_list.push_line(self.layer, a, b, width, color);
    }

    /// Text whose baseline starts at the mapped `anchor` plus a pixel `offset`.
    pub fn text_at(
        &mut self,
        text: impl Into<String>,
        size: f32,
        color: Color,
        anchor: Vec2,
        offset: Vec2,
    ) {
        let baseline = self.mapper.to_drawing_space(anchor) + offset;
        self.text_px(text, size, color, baseline - Vec2::new(0.0, ASCENT_RATIO * size));
    }

    // ── drawing space ─────────────────────────────────────────────────────

    /// Text with its line box's top-left at `origin` (logical pixels).
    pub fn text_px(&mut self, text: impl Into<String>, size: f32, color: Color, origin: Vec2) {
        self.draw_list.push_text(self.layer, text, self.font, size, color, origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zulu_engine::scene::DrawCmd;

    // ── mapping ───────────────────────────────────────────────────────────

    #[test]
    fn circle_is_mapped_and_scaled() {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, CanvasMapper::default(), FontId::default());
        p.stroke_circle(Vec2::zero(), 17.0, 0.5, Color::white());

        let DrawCmd::Circle(c) = &list.items()[0].cmd else { panic!("expected circle") };
        assert_eq!(c.center, Vec2::new(260.0, 260.0));
        assert_eq!(c.radius, 255.0);
        assert!(c.fill.is_none());
        assert_eq!(c.border.as_ref().map(|b| b.width), Some(0.5));
    }

    #[test]
    fn baseline_text_is_lifted_by_ascent() {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, CanvasMapper::default(), FontId::default());
        p.text_at("12", 10.0, Color::white(), Vec2::zero(), Vec2::new(-5.0, 3.0));

        let DrawCmd::Text(t) = &list.items()[0].cmd else { panic!("expected text") };
        assert_eq!(t.origin, Vec2::new(255.0, 255.0));
        assert_eq!(t.text, "12");
    }

    // ── layers ────────────────────────────────────────────────────────────

    #[test]
    fn commands_use_the_current_layer() {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, CanvasMapper::default(), FontId::default());
        p.line(Vec2::zero(), Vec2::new(0.0, 1.0), 1.0, Color::white());
        p.set_layer(ZIndex::new(2));
        p.fill_circle(Vec2::zero(), 0.75, Color::black());

        assert_eq!(list.items()[0].key.z, ZIndex::new(0));
        assert_eq!(list.items()[1].key.z, ZIndex::new(2));
    }
}
