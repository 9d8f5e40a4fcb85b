//! Status strip under the face: current zone and the "everywhere" time.

use chrono::{DateTime, Timelike, Utc};
use zulu_engine::coords::Vec2;
use zulu_engine::paint::Color;
use zulu_engine::scene::{DrawList, ZIndex};
use zulu_engine::text::{FontId, FontSystem};

use crate::letters::letter_for_hour;
use crate::mapper::CANVAS_SIZE;

/// `It's <letter>:<minute> everywhere.` for the UTC hour's letter.
///
/// The minute is not zero-padded.
pub fn everywhere_text(utc: DateTime<Utc>) -> String {
    format!("It's {}:{} everywhere.", letter_for_hour(utc.hour() as i64), utc.minute())
}

/// The two display texts published on every tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusLine {
    pub zone: String,
    /// e.g. `UTC+05:30`.
    pub offset: String,
    pub everywhere: String,
}

impl StatusLine {
    /// Window title text.
    pub fn title(&self) -> String {
        format!("{} · zulu", self.zone)
    }
}

/// Layout of the strip below the face.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusStrip {
    /// Top edge in logical px.
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub zone_size: f32,
    pub everywhere_size: f32,
    pub text: Color,
    pub hint: Color,
    pub font: FontId,
}

impl Default for StatusStrip {
    fn default() -> Self {
        Self {
            top: CANVAS_SIZE,
            width: CANVAS_SIZE,
            height: 60.0,
            zone_size: 16.0,
            everywhere_size: 14.0,
            text: Color::white(),
            hint: Color::from_rgb_hex(0x808080),
            font: FontId::default(),
        }
    }
}

impl StatusStrip {
    /// Records both lines, horizontally centered.
    pub fn paint(&self, status: &StatusLine, fonts: &FontSystem, z: ZIndex, draw_list: &mut DrawList) {
        let line_h = self.height / 2.0;
        let lines = [
            (format!("{} ({})", status.zone, status.offset), self.zone_size, self.text),
            (status.everywhere.clone(), self.everywhere_size, self.hint),
        ];

        for (row, (text, size, color)) in lines.into_iter().enumerate() {
            let measured = fonts.measure_text(&text, self.font, size);
            let x = ((self.width - measured.x) / 2.0).max(0.0);
            let y = self.top + row as f32 * line_h + ((line_h - measured.y) / 2.0).max(0.0);
            draw_list.push_text(z, text, self.font, size, color, Vec2::new(x, y));
        }
    }
}
