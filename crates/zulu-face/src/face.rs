//! Static face: rings, numerals, world letters and tick marks.

use std::f32::consts::{FRAC_PI_2, PI};

use zulu_engine::coords::Vec2;
use zulu_engine::paint::Color;
use zulu_engine::text::FontId;

use crate::letters::LETTERS;
use crate::painter::Painter;

pub const CLOCK_RADIUS: f32 = 17.0;
pub const LETTERS_RADIUS: f32 = 5.0;
pub const LETTERS_OUTER_RADIUS: f32 = 8.0;

pub const LETTERS_DISTANCE: f32 = 6.5;
pub const HOURS_DISTANCE: f32 = 9.5;
pub const MINUTES_DISTANCE: f32 = 15.0;

/// `(count, distance, length)` of the three tick rings, in drawing order.
pub const TICK_RINGS: [(u32, f32, f32); 3] = [(24, 10.5, 1.5), (12, 16.0, 0.5), (60, 16.5, 0.5)];

// ── geometry ──────────────────────────────────────────────────────────────

/// Angle of hour numeral `hour` (1..=24); the 24-hour dial starts at the bottom.
#[inline]
pub fn hour_numeral_angle(hour: u32) -> f32 {
    -(hour as f32) * (PI / 12.0) - FRAC_PI_2
}

/// Angle of the `step`-th minute numeral (1..=12, labelled `5·step`).
#[inline]
pub fn minute_numeral_angle(step: u32) -> f32 {
    -(step as f32) * (PI / 6.0) + FRAC_PI_2
}

/// Angle of the letter for `hour`, shifted by the zone offset so the local
/// hour's letter sits next to its numeral.
#[inline]
pub fn letter_angle(hour: u32, offset_hours: f32) -> f32 {
    -(hour as f32 + offset_hours) * (PI / 12.0) - FRAC_PI_2
}

/// One radial tick mark in math space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickSegment {
    pub angle: f32,
    pub inner: Vec2,
    pub outer: Vec2,
}

/// `count` radial segments from radius `distance` to `distance + length`, at
/// angle `tick · π/(count/2)` for `tick` in `1..=count`.
pub fn tick_segments(count: u32, distance: f32, length: f32) -> Vec<TickSegment> {
    if count == 0 {
        return Vec::new();
    }
    let step = PI / (count as f32 / 2.0);
    (1..=count)
        .map(|tick| {
            let angle = tick as f32 * step;
            let dir = Vec2::from_angle(angle);
            TickSegment {
                angle,
                inner: dir.scalar_mul(distance),
                outer: dir.scalar_mul(distance + length),
            }
        })
        .collect()
}

// ── style ─────────────────────────────────────────────────────────────────

/// Colors, font and sizes of the face and hands.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceStyle {
    pub background: Color,
    pub ring: Color,
    pub tick: Color,
    pub numeral: Color,
    pub letter: Color,
    pub current_letter: Color,
    pub hour_hand: Color,
    pub minute_hand: Color,
    pub second_hand: Color,
    pub lid: Color,

    pub font: FontId,
    /// Stroke width of rings and ticks, in logical px.
    pub line_width: f32,
    pub numeral_size: f32,
    pub letter_size: f32,

    /// Baseline offsets (logical px) that center each label on its anchor.
    pub hour_offset: Vec2,
    pub minute_offset: Vec2,
    pub letter_offset: Vec2,
}

impl Default for FaceStyle {
    fn default() -> Self {
        let red = Color::from_rgb_hex(0xff0000);
        let dark = Color::from_rgb_hex(0x333333);
        let s = crate::mapper::SCALE;
        Self {
            background: Color::black(),
            ring: Color::white(),
            tick: Color::white(),
            numeral: Color::white(),
            letter: Color::white(),
            current_letter: red,
            hour_hand: red,
            minute_hand: red,
            second_hand: dark,
            lid: dark,
            font: FontId::default(),
            line_width: 0.5,
            numeral_size: 12.0,
            letter_size: 15.0,
            hour_offset: Vec2::new(-0.5 * s, 0.3 * s),
            minute_offset: Vec2::new(-0.6 * s, 0.3 * s),
            letter_offset: Vec2::new(-0.3 * s, 0.3 * s),
        }
    }
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Records the static parts of the face.
#[derive(Debug, Clone, Default)]
pub struct FaceRenderer {
    pub style: FaceStyle,
}

impl FaceRenderer {
    pub fn new(style: FaceStyle) -> Self {
        Self { style }
    }

    /// Rings, hour numerals, letters, ticks, then minute numerals.
    ///
    /// `utc_hour` selects the highlighted letter; `offset_hours` rotates the
    /// letter ring.
    pub fn paint(&self, offset_hours: f32, utc_hour: u32, painter: &mut Painter<'_>) {
        self.paint_rings(painter);
        self.paint_hours(painter);
        self.paint_letters(offset_hours, utc_hour, painter);
        for (count, distance, length) in TICK_RINGS {
            self.paint_ticks(count, distance, length, painter);
        }
        self.paint_minutes(painter);
    }

    fn paint_rings(&self, painter: &mut Painter<'_>) {
        let s = &self.style;
        for radius in [CLOCK_RADIUS, LETTERS_RADIUS, LETTERS_OUTER_RADIUS] {
            painter.stroke_circle(Vec2::zero(), radius, s.line_width, s.ring);
        }
    }

    fn paint_hours(&self, painter: &mut Painter<'_>) {
        let s = &self.style;
        for hour in 1..=24u32 {
            let anchor = Vec2::from_angle(hour_numeral_angle(hour)).scalar_mul(HOURS_DISTANCE);
            painter.text_at(hour.to_string(), s.numeral_size, s.numeral, anchor, s.hour_offset);
        }
    }

    fn paint_letters(&self, offset_hours: f32, utc_hour: u32, painter: &mut Painter<'_>) {
        let s = &self.style;
        let current = LETTERS[(utc_hour % 24) as usize];
        for hour in 1..=24u32 {
            let letter = LETTERS[hour as usize];
            let color = if letter == current { s.current_letter } else { s.letter };
            let anchor =
                Vec2::from_angle(letter_angle(hour, offset_hours)).scalar_mul(LETTERS_DISTANCE);
            painter.text_at(letter.to_string(), s.letter_size, color, anchor, s.letter_offset);
        }
    }

    fn paint_ticks(&self, count: u32, distance: f32, length: f32, painter: &mut Painter<'_>) {
        let s = &self.style;
        for seg in tick_segments(count, distance, length) {
            painter.line(seg.inner, seg.outer, s.line_width, s.tick);
        }
    }

    fn paint_minutes(&self, painter: &mut Painter<'_>) {
        let s = &self.style;
        for step in 1..=12u32 {
            let anchor =
                Vec2::from_angle(minute_numeral_angle(step)).scalar_mul(MINUTES_DISTANCE);
            painter.text_at((5 * step).to_string(), s.numeral_size, s.numeral, anchor, s.minute_offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::CanvasMapper;
    use zulu_engine::scene::{DrawCmd, DrawList};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn painted(offset_hours: f32, utc_hour: u32) -> DrawList {
        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list, CanvasMapper::default(), FontId::default());
        FaceRenderer::default().paint(offset_hours, utc_hour, &mut painter);
        list
    }

    fn texts(list: &DrawList) -> Vec<(String, Color)> {
        list.items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Text(t) => Some((t.text.clone(), t.color)),
                _ => None,
            })
            .collect()
    }

    // ── angles ────────────────────────────────────────────────────────────

    #[test]
    fn hour_zero_points_down() {
        assert!(close(hour_numeral_angle(0), -FRAC_PI_2));
        assert!(close(letter_angle(0, 0.0), -FRAC_PI_2));
    }

    #[test]
    fn minute_numerals_start_at_top_and_go_clockwise() {
        assert!(close(minute_numeral_angle(0), FRAC_PI_2));
        assert!(close(minute_numeral_angle(3), 0.0));
        assert!(close(minute_numeral_angle(12), FRAC_PI_2 - 2.0 * PI));
    }

    #[test]
    fn offset_rotates_letters_by_the_offset() {
        assert!(close(letter_angle(3, 2.0), letter_angle(5, 0.0)));
        assert!(close(letter_angle(1, -0.5) - letter_angle(1, 0.0), PI / 24.0));
    }

    // ── ticks ─────────────────────────────────────────────────────────────

    #[test]
    fn hour_ticks_start_one_step_past_zero() {
        let ticks = tick_segments(24, 10.5, 1.5);
        assert_eq!(ticks.len(), 24);
        assert!(close(ticks[0].angle, PI / 12.0));
        assert!(close(ticks[23].angle, 2.0 * PI));
    }

    #[test]
    fn tick_spans_distance_to_distance_plus_length() {
        for seg in tick_segments(60, 16.5, 0.5) {
            assert!(close(seg.inner.length(), 16.5));
            assert!(close(seg.outer.length(), 17.0));
        }
        assert!(tick_segments(0, 1.0, 1.0).is_empty());
    }

    // ── painting ──────────────────────────────────────────────────────────

    #[test]
    fn face_records_every_element() {
        let list = painted(0.0, 14);
        let circles = list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Circle(_))).count();
        let lines = list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Line(_))).count();
        assert_eq!(circles, 3);
        assert_eq!(lines, 24 + 12 + 60);
        // 24 hour numerals, 24 letters, 12 minute numerals.
        assert_eq!(texts(&list).len(), 60);
    }

    #[test]
    fn labels_follow_drawing_order() {
        let labels: Vec<String> = texts(&painted(0.0, 0)).into_iter().map(|(t, _)| t).collect();
        assert_eq!(labels[0], "1");
        assert_eq!(labels[23], "24");
        assert_eq!(labels[24], "B");
        assert_eq!(labels[47], "A");
        assert_eq!(labels[48], "5");
        assert_eq!(labels[59], "60");
    }

    #[test]
    fn current_utc_hour_letter_is_highlighted() {
        let style = FaceStyle::default();
        let list = painted(0.0, 14);
        let red: Vec<String> = texts(&list)
            .into_iter()
            .filter(|(_, c)| *c == style.current_letter && *c != style.numeral)
            .map(|(t, _)| t)
            .collect();
        assert_eq!(red, vec!["Q".to_string()]);
    }

    #[test]
    fn midnight_highlights_the_twenty_fourth_letter() {
        let style = FaceStyle::default();
        let letters: Vec<(String, Color)> = texts(&painted(0.0, 0))[24..48].to_vec();
        let highlighted: Vec<&str> = letters
            .iter()
            .filter(|(_, c)| *c == style.current_letter)
            .map(|(t, _)| t.as_str())
            .collect();
        assert_eq!(highlighted, vec!["A"]);
    }

    // ── label placement ───────────────────────────────────────────────────

    /// Text origins in drawing order.
    fn origins(list: &DrawList) -> Vec<(String, Vec2)> {
        list.items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Text(t) => Some((t.text.clone(), t.origin)),
                _ => None,
            })
            .collect()
    }

    /// Undoes the baseline shift and mapping: the math-space anchor of a label.
    fn anchor_of(origin: Vec2, offset: Vec2, size: f32) -> Vec2 {
        let baseline = origin - offset + Vec2::new(0.0, crate::painter::ASCENT_RATIO * size);
        let m = CanvasMapper::default();
        let c = m.center();
        Vec2::new((baseline.x - c.x) / m.scale, -(baseline.y - c.y) / m.scale)
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        close(a.x, b.x) && close(a.y, b.y)
    }

    #[test]
    fn hour_numeral_sits_on_its_ring() {
        let style = FaceStyle::default();
        let labels = origins(&painted(0.0, 0));
        let (text, origin) = &labels[23];
        assert_eq!(text, "24");

        let angle = -24.0 * PI / 12.0 - FRAC_PI_2;
        let expected = CanvasMapper::default().polar(angle, HOURS_DISTANCE) + style.hour_offset
            - Vec2::new(0.0, crate::painter::ASCENT_RATIO * style.numeral_size);
        let diff = *origin - expected;
        assert!(diff.length() < 1e-2, "{origin:?} != {expected:?}");
    }

    #[test]
    fn letter_ring_turns_with_the_offset() {
        let style = FaceStyle::default();
        let find_b = |offset: f32| {
            let labels = origins(&painted(offset, 0));
            let (text, origin) = labels[24].clone();
            assert_eq!(text, "B");
            anchor_of(origin, style.letter_offset, style.letter_size)
        };

        let base = find_b(0.0);
        let turned = find_b(2.0);
        assert!(close(base.length(), LETTERS_DISTANCE));
        assert!(close(turned.length(), LETTERS_DISTANCE));

        let delta = turned.y.atan2(turned.x) - base.y.atan2(base.x);
        assert!(close(delta, -2.0 * PI / 12.0), "delta {delta}");
        assert!(approx(turned, Vec2::from_angle(-3.0 * PI / 12.0 - FRAC_PI_2).scalar_mul(6.5)));
    }

    #[test]
    fn quarter_hour_numeral_points_right() {
        let style = FaceStyle::default();
        let labels = origins(&painted(0.0, 0));
        let (text, origin) = &labels[48 + 2];
        assert_eq!(text, "15");

        let anchor = anchor_of(*origin, style.minute_offset, style.numeral_size);
        assert!(approx(anchor, Vec2::new(MINUTES_DISTANCE, 0.0)), "{anchor:?}");
    }

    #[test]
    fn everything_stays_on_the_canvas() {
        let list = painted(5.5, 3);
        for item in list.items() {
            if let DrawCmd::Line(l) = &item.cmd {
                for p in [l.from, l.to] {
                    assert!((0.0..=520.0).contains(&p.x) && (0.0..=520.0).contains(&p.y));
                }
            }
        }
    }
}
