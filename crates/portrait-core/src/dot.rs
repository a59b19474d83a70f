//! Input dot samples and the dot-map loader.
//!
//! A dot map is the JSON array produced by sampling the portrait image on a
//! fixed grid: `[{ "x": 100, "y": 40, "color": "rgb(12,34,56)", "radius": 1.5 }, ...]`.

use crate::config::FilterBounds;
use crate::error::DotMapError;
use glam::Vec2;
use serde::Deserialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

impl Rgb {
    pub const fn new(r: u32, g: u32, b: u32) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `factor`, flooring the result. Channels are not
    /// clamped to 255; the canvas clamps out-of-range values when it fills.
    pub fn darken(self, factor: f32) -> Self {
        let scale = |c: u32| (c as f32 * factor).floor() as u32;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Dot color as found in the dot map.
///
/// Strings that are not of the form `rgb(r,g,b)` are carried through verbatim
/// so the canvas can still interpret them; they are never darkened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DotColor {
    Rgb(Rgb),
    Css(String),
}

impl DotColor {
    pub fn parse(s: &str) -> Self {
        match parse_rgb(s) {
            Some(rgb) => DotColor::Rgb(rgb),
            None => DotColor::Css(s.to_string()),
        }
    }

    pub fn rgb(&self) -> Option<Rgb> {
        match self {
            DotColor::Rgb(c) => Some(*c),
            DotColor::Css(_) => None,
        }
    }

    /// Darkened copy for the background layer; unparsed colors pass through.
    pub fn darken(&self, factor: f32) -> Self {
        match self {
            DotColor::Rgb(c) => DotColor::Rgb(c.darken(factor)),
            DotColor::Css(s) => DotColor::Css(s.clone()),
        }
    }

    /// CSS string suitable for a canvas fill style.
    pub fn css(&self) -> String {
        match self {
            DotColor::Rgb(c) => c.to_string(),
            DotColor::Css(s) => s.clone(),
        }
    }
}

/// Parse `rgb(r,g,b)`; whitespace is only allowed after the commas. Channels
/// are unbounded digit runs and saturate at `u32::MAX`.
pub fn parse_rgb(s: &str) -> Option<Rgb> {
    let inner = s.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut parts = inner.split(',');
    let mut channel = |leading_ws: bool| -> Option<u32> {
        let raw = parts.next()?;
        let digits = if leading_ws { raw.trim_start() } else { raw };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(digits.parse().unwrap_or(u32::MAX))
    };
    let r = channel(false)?;
    let g = channel(true)?;
    let b = channel(true)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Rgb::new(r, g, b))
}

/// One sample of the portrait in design-space coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    pub position: Vec2,
    pub color: DotColor,
    pub radius: f32,
}

#[derive(Deserialize)]
struct DotRecord {
    x: f32,
    y: f32,
    color: String,
    radius: f32,
}

/// Parse a dot-map JSON document.
pub fn parse_dot_map(json: &str) -> Result<Vec<Dot>, DotMapError> {
    let records: Vec<DotRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, rec)| {
            for (field, v) in [("x", rec.x), ("y", rec.y), ("radius", rec.radius)] {
                if !v.is_finite() {
                    return Err(DotMapError::NonFinite { index, field });
                }
            }
            Ok(Dot {
                position: Vec2::new(rec.x, rec.y),
                color: DotColor::parse(&rec.color),
                radius: rec.radius,
            })
        })
        .collect()
}

/// Keep only the dots whose x lies strictly inside `bounds`.
pub fn filter_dots(dots: Vec<Dot>, bounds: &FilterBounds) -> Vec<Dot> {
    dots.into_iter()
        .filter(|d| bounds.contains(d.position.x))
        .collect()
}

/// Parse and filter in one step, logging how many samples survived.
pub fn load_dot_map(json: &str, bounds: &FilterBounds) -> Result<Vec<Dot>, DotMapError> {
    let raw = parse_dot_map(json)?;
    let total = raw.len();
    let kept = filter_dots(raw, bounds);
    log::info!("[loader] dot map: {} samples, {} kept", total, kept.len());
    Ok(kept)
}
