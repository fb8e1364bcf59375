//! Viewport transform between simulation space and canvas pixels.
//!
//! screen = canvas center + sim × zoom + pan

use glam::DVec2;

use crate::registry::BodyId;

pub const ZOOM_MIN: f64 = 0.1;
pub const ZOOM_MAX: f64 = 5.0;
/// Multiplicative zoom per wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;
/// Pointer travel in pixels before a press becomes a drag.
pub const DRAG_THRESHOLD: f64 = 5.0;
/// Fraction of the pan that the deepest stars follow.
const PARALLAX: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    zoom: f64,
    /// Pan offset in screen pixels.
    pan: DVec2,
    center: DVec2,
    /// Body whose stats panel is populated.
    pub focus: Option<BodyId>,
}

impl Camera {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan: DVec2::ZERO,
            center: DVec2::new(width, height) / 2.0,
            focus: None,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> DVec2 {
        self.pan
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Where the sun lands on screen.
    pub fn origin(&self) -> DVec2 {
        self.center + self.pan
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.center = DVec2::new(width, height) / 2.0;
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        }
    }

    /// Change zoom while the simulation point under `screen` stays put.
    pub fn zoom_toward(&mut self, screen: DVec2, zoom: f64) {
        let anchor = self.to_simulation(screen);
        self.set_zoom(zoom);
        self.pan = screen - self.center - anchor * self.zoom;
    }

    pub fn pan_by(&mut self, delta: DVec2) {
        self.pan += delta;
    }

    /// Zoom 1, no pan, nothing focused.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = DVec2::ZERO;
        self.focus = None;
    }

    pub fn to_screen(&self, sim: DVec2) -> DVec2 {
        self.center + sim * self.zoom + self.pan
    }

    pub fn to_simulation(&self, screen: DVec2) -> DVec2 {
        (screen - self.center - self.pan) / self.zoom
    }

    /// Scale a simulation-space length to pixels.
    pub fn scale(&self, length: f64) -> f64 {
        length * self.zoom
    }

    /// Screen position of a background star at depth `z` under the current pan.
    pub fn parallax(&self, star: DVec2, z: f64) -> DVec2 {
        star - self.pan * z * PARALLAX
    }
}

/// Distinguishes a click from a drag on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gesture {
    press: Option<DVec2>,
    last: DVec2,
    dragging: bool,
}

impl Gesture {
    pub fn press(&mut self, at: DVec2) {
        self.press = Some(at);
        self.last = at;
        self.dragging = false;
    }

    /// Pointer moved. Returns the pan delta once the press has become a drag.
    pub fn move_to(&mut self, at: DVec2) -> Option<DVec2> {
        let start = self.press?;
        if !self.dragging {
            if at.distance(start) <= DRAG_THRESHOLD {
                return None;
            }
            self.dragging = true;
        }
        let delta = at - self.last;
        self.last = at;
        Some(delta)
    }

    /// Pointer released. Returns true if the press never turned into a drag.
    pub fn release(&mut self) -> bool {
        let clicked = self.press.is_some() && !self.dragging;
        self.press = None;
        self.dragging = false;
        clicked
    }
}
