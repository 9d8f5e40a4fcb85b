//! Clock state and the per-tick redraw.

use std::f32::consts::PI;

use chrono::{DateTime, Timelike, Utc};
use zulu_engine::coords::Vec2;
use zulu_engine::scene::{DrawList, ZIndex};

use crate::face::{FaceRenderer, FaceStyle};
use crate::hands::{HandAngles, HandRenderer};
use crate::mapper::CanvasMapper;
use crate::painter::Painter;
use crate::status::{everywhere_text, StatusLine};
use crate::wall_clock::WallClock;
use crate::zones::{offset_label, zone_options, ZoneDirectory, ZoneError, ZoneOption};

/// Layer of the static face.
pub const FACE_LAYER: ZIndex = ZIndex::new(0);
/// Layer of the hands; the lid goes one above.
pub const HANDS_LAYER: ZIndex = ZIndex::new(1);

/// Zone used when the host zone cannot be determined.
pub const FALLBACK_ZONE: &str = "UTC";

/// Rotation of the decorative vector per tick.
pub const DECORATIVE_STEP: f32 = PI / 30.0;

/// Output of one redraw.
#[derive(Debug, Default)]
pub struct Frame {
    pub draw_list: DrawList,
    pub status: StatusLine,
}

/// Owns the zone selection and renders frames from the wall clock.
pub struct ClockController<C: WallClock> {
    clock: C,

    mapper: CanvasMapper,
    face: FaceRenderer,
    hands: HandRenderer,

    options: Vec<ZoneOption>,
    selected: Option<usize>,
    local: ZoneOption,

    timezone: String,
    offset_hours: f32,
    decorative: Vec2,
}

impl<C: WallClock> ClockController<C> {
    /// Starts in the host's zone, or UTC when the host zone is unknown.
    pub fn new<D: ZoneDirectory + ?Sized>(directory: &D, clock: C) -> Self {
        let now = clock.now();
        let guess = directory.guess_local();

        let local = match guess.as_deref().map(|name| (name, directory.offset_hours(name, now))) {
            Some((name, Ok(offset))) => ZoneOption::new(name, offset),
            Some((name, Err(e))) => {
                log::warn!("host zone {name:?} not usable ({e}); falling back to {FALLBACK_ZONE}");
                ZoneOption::new(FALLBACK_ZONE, 0.0)
            }
            None => {
                log::warn!("no host zone reported; falling back to {FALLBACK_ZONE}");
                ZoneOption::new(FALLBACK_ZONE, 0.0)
            }
        };

        Self::start(directory, clock, local, now)
    }

    /// Starts in the zone `name`; unknown names are an error.
    pub fn with_zone<D: ZoneDirectory + ?Sized>(
        directory: &D,
        clock: C,
        name: &str,
    ) -> Result<Self, ZoneError> {
        let now = clock.now();
        let offset = directory.offset_hours(name, now)?;
        Ok(Self::start(directory, clock, ZoneOption::new(name, offset), now))
    }

    fn start<D: ZoneDirectory + ?Sized>(
        directory: &D,
        clock: C,
        local: ZoneOption,
        now: DateTime<Utc>,
    ) -> Self {
        let options = zone_options(directory, now);
        let selected = options.iter().position(|o| o.name == local.name);

        log::info!(
            "starting in {} ({}), {} zones available",
            local.name,
            local.offset_label(),
            options.len()
        );

        Self {
            clock,
            mapper: CanvasMapper::default(),
            face: FaceRenderer::default(),
            hands: HandRenderer::default(),
            options,
            selected,
            timezone: local.name.clone(),
            offset_hours: local.offset_hours,
            local,
            decorative: Vec2::new(0.0, 1.0),
        }
    }

    pub fn with_style(mut self, style: FaceStyle) -> Self {
        self.face = FaceRenderer::new(style.clone());
        self.hands = HandRenderer::new(style);
        self
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    #[inline]
    pub fn offset_hours(&self) -> f32 {
        self.offset_hours
    }

    #[inline]
    pub fn options(&self) -> &[ZoneOption] {
        &self.options
    }

    #[inline]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn style(&self) -> &FaceStyle {
        &self.face.style
    }

    /// The cosmetic vector advanced on every tick. Not drawn.
    #[inline]
    pub fn decorative_angle(&self) -> Vec2 {
        self.decorative
    }

    // ── selection ─────────────────────────────────────────────────────────

    /// Uses the option's stored offset as-is.
    pub fn select(&mut self, option: &ZoneOption) {
        self.timezone = option.name.clone();
        self.offset_hours = option.offset_hours;
        self.selected = self.options.iter().position(|o| o.name == option.name);
        log::info!("zone selected: {} ({})", option.name, option.offset_label());
    }

    /// Selects option `index`; returns `false` when out of range.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.options.get(index).cloned() {
            Some(option) => {
                self.select(&option);
                true
            }
            None => false,
        }
    }

    /// Moves the selection by `delta` options, wrapping at both ends.
    pub fn step(&mut self, delta: isize) -> bool {
        let len = self.options.len();
        if len == 0 {
            return false;
        }
        let index = match self.selected {
            Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
            None if delta < 0 => len - 1,
            None => 0,
        };
        self.select_index(index)
    }

    pub fn select_next(&mut self) -> bool {
        self.step(1)
    }

    pub fn select_previous(&mut self) -> bool {
        self.step(-1)
    }

    /// Back to the zone the controller started in.
    pub fn select_local(&mut self) {
        let local = self.local.clone();
        self.select(&local);
    }

    // ── frames ────────────────────────────────────────────────────────────

    /// Advances the decorative vector and redraws at the wall clock's time.
    pub fn tick(&mut self) -> Frame {
        self.decorative = self.decorative.rotate_clockwise(DECORATIVE_STEP);
        let now = self.clock.now();
        log::debug!("tick at {now}");
        self.redraw(now)
    }

    /// Face, hands and status for `now`; does not change any state.
    pub fn redraw(&self, now: DateTime<Utc>) -> Frame {
        let mut draw_list = DrawList::new();
        {
            let mut painter = Painter::new(&mut draw_list, self.mapper, self.face.style.font);

            painter.set_layer(FACE_LAYER);
            self.face.paint(self.offset_hours, now.hour(), &mut painter);

            painter.set_layer(HANDS_LAYER);
            self.hands.paint(HandAngles::at(now, self.offset_hours), &mut painter);
        }

        Frame { draw_list, status: self.status(now) }
    }

    pub fn status(&self, now: DateTime<Utc>) -> StatusLine {
        StatusLine {
            zone: self.timezone.clone(),
            offset: offset_label(self.offset_hours),
            everywhere: everywhere_text(now),
        }
    }

    /// Current wall-clock time.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wall_clock::FixedClock;
    use crate::zones::tests::StaticZones;
    use chrono::TimeZone;
    use zulu_engine::scene::DrawCmd;

    fn utc(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, h, m, s).single().expect("valid time")
    }

    fn zones(guess: Option<&str>) -> StaticZones {
        StaticZones::new(
            guess,
            &[("UTC", 0), ("Europe/Paris", 60), ("Asia/Kolkata", 330), ("America/Denver", -420)],
        )
    }

    fn controller(guess: Option<&str>) -> ClockController<FixedClock> {
        ClockController::new(&zones(guess), FixedClock(utc(14, 5, 0)))
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    // ── init ──────────────────────────────────────────────────────────────

    #[test]
    fn starts_in_guessed_zone() {
        let c = controller(Some("Asia/Kolkata"));
        assert_eq!(c.timezone(), "Asia/Kolkata");
        assert_eq!(c.offset_hours(), 5.5);
        assert_eq!(c.selected_index(), Some(2));
        assert_eq!(c.options().len(), 4);
    }

    #[test]
    fn unknown_guess_falls_back_to_utc() {
        let c = controller(Some("Atlantis/Capital"));
        assert_eq!(c.timezone(), "UTC");
        assert_eq!(c.offset_hours(), 0.0);

        let c = controller(None);
        assert_eq!(c.timezone(), "UTC");
    }

    #[test]
    fn explicit_zone_must_exist() {
        let clock = FixedClock(utc(0, 0, 0));
        let c = ClockController::with_zone(&zones(None), clock, "America/Denver");
        assert_eq!(c.map(|c| c.offset_hours()).ok(), Some(-7.0));

        let err = ClockController::with_zone(&zones(None), clock, "Nowhere").err();
        assert_eq!(err, Some(ZoneError::Unknown("Nowhere".to_string())));
    }

    // ── selection ─────────────────────────────────────────────────────────

    #[test]
    fn selection_uses_the_stored_offset() {
        let mut c = controller(None);
        c.select(&ZoneOption::new("Europe/Paris", 2.0));
        assert_eq!(c.timezone(), "Europe/Paris");
        assert_eq!(c.offset_hours(), 2.0);
        assert_eq!(c.selected_index(), Some(1));
    }

    #[test]
    fn stepping_wraps_around() {
        let mut c = controller(Some("UTC"));
        assert!(c.select_previous());
        assert_eq!(c.timezone(), "America/Denver");
        assert!(c.select_next());
        assert_eq!(c.timezone(), "UTC");
        assert!(c.step(10));
        assert_eq!(c.selected_index(), Some(2));
        assert!(!c.select_index(99));
    }

    #[test]
    fn local_zone_can_be_restored() {
        let mut c = controller(Some("Europe/Paris"));
        c.select_index(3);
        c.select_local();
        assert_eq!(c.timezone(), "Europe/Paris");
        assert_eq!(c.offset_hours(), 1.0);
    }

    // ── tick ──────────────────────────────────────────────────────────────

    #[test]
    fn tick_rotates_the_decorative_vector() {
        let mut c = controller(None);
        assert_eq!(c.decorative_angle(), Vec2::new(0.0, 1.0));
        let _ = c.tick();
        let v = c.decorative_angle();
        assert!(close(v.x, DECORATIVE_STEP.sin()));
        assert!(close(v.y, DECORATIVE_STEP.cos()));

        for _ in 0..59 {
            let _ = c.tick();
        }
        let v = c.decorative_angle();
        assert!(close(v.x, 0.0) && close(v.y, 1.0));
    }

    #[test]
    fn tick_publishes_status() {
        let mut c = controller(Some("Asia/Kolkata"));
        let frame = c.tick();
        assert_eq!(frame.status.zone, "Asia/Kolkata");
        assert_eq!(frame.status.offset, "UTC+05:30");
        assert_eq!(frame.status.everywhere, "It's Q:5 everywhere.");
    }

    #[test]
    fn frame_layers_face_hands_lid() {
        let mut c = controller(None);
        let mut frame = c.tick();
        assert_eq!(frame.draw_list.layers(), vec![FACE_LAYER, HANDS_LAYER, HANDS_LAYER.above()]);

        let hands: Vec<_> = frame
            .draw_list
            .items()
            .iter()
            .filter(|i| i.key.z == HANDS_LAYER)
            .collect();
        assert_eq!(hands.len(), 3);
        assert!(hands.iter().all(|i| matches!(i.cmd, DrawCmd::Line(_))));
    }

    #[test]
    fn custom_style_reaches_the_hands() {
        let blue = zulu_engine::paint::Color::from_rgb_hex(0x0000ff);
        let style = FaceStyle { second_hand: blue, ..FaceStyle::default() };
        let c = controller(None).with_style(style);
        let frame = c.redraw(utc(1, 2, 3));
        let second = frame
            .draw_list
            .items()
            .iter()
            .filter(|i| i.key.z == HANDS_LAYER)
            .nth(2)
            .map(|i| i.cmd.clone());
        assert!(matches!(second, Some(DrawCmd::Line(l)) if l.color == blue));
    }

    #[test]
    fn redraw_does_not_touch_state() {
        let c = controller(None);
        let before = c.decorative_angle();
        let a = c.redraw(utc(1, 2, 3));
        let b = c.redraw(utc(1, 2, 3));
        assert_eq!(a.draw_list.items(), b.draw_list.items());
        assert_eq!(c.decorative_angle(), before);
    }

    #[test]
    fn hour_hand_includes_the_offset() {
        let c = ClockController::with_zone(&zones(None), FixedClock(utc(0, 0, 0)), "Europe/Paris")
            .expect("known zone");
        let frame = c.redraw(utc(0, 0, 0));
        let hour_hand = frame
            .draw_list
            .items()
            .iter()
            .find_map(|i| match &i.cmd {
                DrawCmd::Line(l) if i.key.z == HANDS_LAYER => Some(l.clone()),
                _ => None,
            })
            .expect("hour hand");
        let expected = HandAngles::from_parts(0, 0, 0, 1.0).hour;
        let mapper = CanvasMapper::default();
        let tip = mapper.polar(expected, crate::hands::HOUR_HAND_LENGTH);
        assert!(close(hour_hand.to.x, tip.x) && close(hour_hand.to.y, tip.y));
    }
}
