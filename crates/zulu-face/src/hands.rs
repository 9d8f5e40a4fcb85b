//! Hour, minute and second hands plus the center lid.

use std::f32::consts::{FRAC_PI_2, PI};

use chrono::{DateTime, Timelike, Utc};
use zulu_engine::coords::Vec2;

use crate::face::FaceStyle;
use crate::painter::Painter;

pub const HOUR_HAND_LENGTH: f32 = 5.5;
pub const MINUTE_HAND_LENGTH: f32 = 15.0;
pub const SECOND_HAND_LENGTH: f32 = 16.5;

pub const HOUR_HAND_WIDTH: f32 = 3.0;
pub const MINUTE_HAND_WIDTH: f32 = 3.0;
pub const SECOND_HAND_WIDTH: f32 = 1.0;

pub const LID_RADIUS: f32 = 0.75;

/// Hand angles in math space (radians, counter-clockwise from +X).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    /// Angles for whole UTC hour/minute/second values.
    ///
    /// The hour hand runs on the 24-hour dial and includes the zone offset;
    /// minute and second hands do not depend on the zone.
    pub fn from_parts(utc_hour: u32, minute: u32, second: u32, offset_hours: f32) -> Self {
        Self {
            hour: -(utc_hour as f32 + offset_hours) * (PI / 12.0) - FRAC_PI_2,
            minute: -(minute as f32) * (PI / 30.0) + FRAC_PI_2,
            second: -(second as f32) * (PI / 30.0) + FRAC_PI_2,
        }
    }

    pub fn at(utc: DateTime<Utc>, offset_hours: f32) -> Self {
        // Leap seconds report 60; clamp onto the dial.
        Self::from_parts(utc.hour(), utc.minute(), utc.second().min(59), offset_hours)
    }
}

/// Records the three hands and the lid.
#[derive(Debug, Clone, Default)]
pub struct HandRenderer {
    pub style: FaceStyle,
}

impl HandRenderer {
    pub fn new(style: FaceStyle) -> Self {
        Self { style }
    }

    /// Hour, minute and second hands, then the lid on the painter's next layer.
    pub fn paint(&self, angles: HandAngles, painter: &mut Painter<'_>) {
        let s = &self.style;
        self.dial(angles.hour, HOUR_HAND_LENGTH, HOUR_HAND_WIDTH, s.hour_hand, painter);
        self.dial(angles.minute, MINUTE_HAND_LENGTH, MINUTE_HAND_WIDTH, s.minute_hand, painter);
        self.dial(angles.second, SECOND_HAND_LENGTH, SECOND_HAND_WIDTH, s.second_hand, painter);

        let hands_layer = painter.layer();
        painter.set_layer(hands_layer.above());
        painter.fill_circle(Vec2::zero(), LID_RADIUS, s.lid);
        painter.set_layer(hands_layer);
    }

    fn dial(
        &self,
        angle: f32,
        length: f32,
        width: f32,
        color: zulu_engine::paint::Color,
        painter: &mut Painter<'_>,
    ) {
        let tip = Vec2::from_angle(angle).scalar_mul(length);
        painter.line(Vec2::zero(), tip, width, color);
    }
}
