//! Window application: owns the controller and turns its frames into pixels.

use zulu_engine::core::{App, AppControl, FrameCtx, InputCtx, TickCtx, WindowCtx};
use zulu_engine::input::{Key, Modifiers};
use zulu_engine::render::SceneRenderer;
use zulu_engine::scene::{DrawList, ZIndex};
use zulu_engine::text::FontSystem;
use zulu_face::mapper::CANVAS_SIZE;
use zulu_face::{ClockController, Frame, StatusStrip, WallClock};

/// Zones skipped by PageUp/PageDown.
const PAGE: isize = 10;

/// Layer of the status strip; above the face, hands and lid.
const STATUS_LAYER: ZIndex = ZIndex::new(10);

/// What a key press does.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyAction {
    Step(isize),
    Local,
    Quit,
}

/// Shift turns the arrow keys into page steps.
pub fn key_action(key: Key, modifiers: Modifiers) -> Option<KeyAction> {
    let arrow = if modifiers.shift { PAGE } else { 1 };
    match key {
        Key::ArrowRight | Key::ArrowDown => Some(KeyAction::Step(arrow)),
        Key::ArrowLeft | Key::ArrowUp => Some(KeyAction::Step(-arrow)),
        Key::PageDown => Some(KeyAction::Step(PAGE)),
        Key::PageUp => Some(KeyAction::Step(-PAGE)),
        Key::Home => Some(KeyAction::Local),
        Key::Escape => Some(KeyAction::Quit),
        _ => None,
    }
}

/// Zoom that fits the canvas and the status strip into a `width × height` window.
pub fn fit_zoom(width: f32, height: f32, strip: &StatusStrip) -> f32 {
    let zoom = (width / CANVAS_SIZE).min(height / (strip.top + strip.height));
    if zoom.is_finite() && zoom > 0.0 { zoom } else { 1.0 }
}

pub struct ClockApp<C: WallClock> {
    controller: ClockController<C>,
    frame: Frame,

    fonts: FontSystem,
    renderer: SceneRenderer,
    strip: StatusStrip,
    scene: DrawList,
}

impl<C: WallClock> ClockApp<C> {
    pub fn new(controller: ClockController<C>, fonts: FontSystem) -> Self {
        let frame = controller.redraw(controller.now());
        Self {
            controller,
            frame,
            fonts,
            renderer: SceneRenderer::new(),
            strip: StatusStrip::default(),
            scene: DrawList::new(),
        }
    }

    /// Redraws at the current time without ticking.
    fn refresh(&mut self, window: &WindowCtx<'_>) {
        self.frame = self.controller.redraw(self.controller.now());
        window.set_title(&self.frame.status.title());
        window.request_redraw();
    }
}

impl<C: WallClock> App for ClockApp<C> {
    fn on_input(&mut self, ctx: &mut InputCtx<'_>) -> AppControl {
        let mut changed = false;
        for &key in &ctx.input_frame.keys_pressed {
            match key_action(key, ctx.input.modifiers) {
                Some(KeyAction::Step(delta)) => changed |= self.controller.step(delta),
                Some(KeyAction::Local) => {
                    self.controller.select_local();
                    changed = true;
                }
                Some(KeyAction::Quit) => return AppControl::Exit,
                None => {}
            }
        }
        if changed {
            self.refresh(&ctx.window);
        }
        AppControl::Continue
    }

    fn on_tick(&mut self, ctx: &mut TickCtx<'_>) -> AppControl {
        self.frame = self.controller.tick();
        if ctx.tick.index == 0 {
            log::info!("{}", self.frame.status.everywhere);
        }
        ctx.window.set_title(&self.frame.status.title());
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        let zoom = fit_zoom(w, h, &self.strip);

        self.scene.clear();
        self.scene.extend_from(&self.frame.draw_list);
        self.strip.paint(&self.frame.status, &self.fonts, STATUS_LAYER, &mut self.scene);

        let clear = self.controller.style().background;
        let renderer = &mut self.renderer;
        let scene = &mut self.scene;
        let fonts = &self.fonts;
        ctx.render_scaled(zoom, clear, |rctx, target| {
            renderer.render(rctx, target, scene, fonts);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── keys ──────────────────────────────────────────────────────────────

    fn plain(key: Key) -> Option<KeyAction> {
        key_action(key, Modifiers::default())
    }

    #[test]
    fn arrows_step_by_one() {
        assert_eq!(plain(Key::ArrowRight), Some(KeyAction::Step(1)));
        assert_eq!(plain(Key::ArrowDown), Some(KeyAction::Step(1)));
        assert_eq!(plain(Key::ArrowLeft), Some(KeyAction::Step(-1)));
        assert_eq!(plain(Key::ArrowUp), Some(KeyAction::Step(-1)));
    }

    #[test]
    fn shift_arrows_step_by_a_page() {
        let shift = Modifiers { shift: true, ..Modifiers::default() };
        assert_eq!(key_action(Key::ArrowRight, shift), Some(KeyAction::Step(PAGE)));
        assert_eq!(key_action(Key::ArrowUp, shift), Some(KeyAction::Step(-PAGE)));
        assert_eq!(key_action(Key::Home, shift), Some(KeyAction::Local));
    }

    #[test]
    fn paging_home_and_quit() {
        assert_eq!(plain(Key::PageDown), Some(KeyAction::Step(PAGE)));
        assert_eq!(plain(Key::PageUp), Some(KeyAction::Step(-PAGE)));
        assert_eq!(plain(Key::Home), Some(KeyAction::Local));
        assert_eq!(plain(Key::Escape), Some(KeyAction::Quit));
        assert_eq!(plain(Key::Space), None);
    }

    // ── zoom ──────────────────────────────────────────────────────────────

    #[test]
    fn default_window_is_unzoomed() {
        let strip = StatusStrip::default();
        assert_eq!(fit_zoom(520.0, 580.0, &strip), 1.0);
    }

    #[test]
    fn zoom_follows_the_tighter_axis() {
        let strip = StatusStrip::default();
        assert_eq!(fit_zoom(1040.0, 580.0, &strip), 1.0);
        assert_eq!(fit_zoom(1040.0, 1160.0, &strip), 2.0);
        assert_eq!(fit_zoom(260.0, 1160.0, &strip), 0.5);
        assert_eq!(fit_zoom(0.0, 0.0, &strip), 1.0);
    }
}
