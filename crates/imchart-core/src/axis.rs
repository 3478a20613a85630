//! Axis system for chart frames
//!
//! Provides tick calculation for categorical and linear scales, label
//! formatting, and layout of an axis (domain line, tick lines, labels) as a
//! group of scene marks.

use serde::{Deserialize, Serialize};

use crate::colormap::Color;
use crate::export::fmt_coord;
use crate::scale::{BandScale, LinearScale, PointScale};
use crate::scene::{Font, Group, Line, Mark, Path, Text, TextAnchor, Transform};

/// Approximate advance of one label character at the default 10px font
const CHAR_WIDTH: f64 = 6.0;

/// Rotation applied to crowded categorical labels
pub const CROWDED_LABEL_ROTATION: f64 = -45.0;

/// Axis orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisPosition {
    Left,
    Bottom,
}

/// How tick labels are rotated
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum LabelRotation {
    /// Upright labels
    None,
    /// Rotate only when labels are wider than the spacing between ticks
    Auto,
    /// Always rotate by the given angle in degrees
    Fixed(f64),
}

/// Configuration for an axis
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Axis position
    pub position: AxisPosition,

    /// Length of the tick lines in pixels
    pub tick_size_inner: f64,

    /// Length of the end caps on the domain line
    pub tick_size_outer: f64,

    /// Gap between a tick line and its label
    pub tick_padding: f64,

    /// Tick label rotation
    pub rotation: LabelRotation,
}

impl AxisConfig {
    /// Create a new axis configuration
    pub fn new(position: AxisPosition) -> Self {
        Self {
            position,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
            rotation: LabelRotation::None,
        }
    }

    pub fn bottom() -> Self {
        Self::new(AxisPosition::Bottom)
    }

    pub fn left() -> Self {
        Self::new(AxisPosition::Left)
    }

    /// Set the label rotation
    pub fn with_rotation(mut self, rotation: LabelRotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Distance from the axis line to the label anchor
    pub fn label_offset(&self) -> f64 {
        self.tick_size_inner.max(0.0) + self.tick_padding
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self::bottom()
    }
}

/// A tick mark on an axis
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position in pixels along the axis
    pub position: f64,

    /// Label text
    pub label: String,
}

/// A scale that can be drawn as an axis
pub trait AxisScale {
    /// Ticks in drawing order
    fn ticks(&self) -> Vec<Tick>;

    /// Pixel extent of the axis line
    fn extent(&self) -> (f64, f64);

    /// Room available to each label along the axis, if the ticks are categorical
    fn label_room(&self) -> Option<f64> {
        None
    }
}

fn categorical_ticks(domain: &[String], position: impl Fn(&str) -> Option<f64>) -> Vec<Tick> {
    domain
        .iter()
        .filter_map(|key| {
            position(key).map(|p| Tick {
                position: p,
                label: key.clone(),
            })
        })
        .collect()
}

impl AxisScale for BandScale {
    fn ticks(&self) -> Vec<Tick> {
        categorical_ticks(self.domain(), |k| self.center(k))
    }

    fn extent(&self) -> (f64, f64) {
        self.range()
    }

    fn label_room(&self) -> Option<f64> {
        Some(self.step())
    }
}

impl AxisScale for PointScale {
    fn ticks(&self) -> Vec<Tick> {
        categorical_ticks(self.domain(), |k| self.position(k))
    }

    fn extent(&self) -> (f64, f64) {
        self.range()
    }

    fn label_room(&self) -> Option<f64> {
        Some(self.step())
    }
}

impl AxisScale for LinearScale {
    fn ticks(&self) -> Vec<Tick> {
        let (d0, d1) = self.domain();
        let (values, step) = nice_ticks(d0, d1, 10);
        values
            .into_iter()
            .map(|v| Tick {
                position: self.map(v),
                label: format_tick(v, step),
            })
            .collect()
    }

    fn extent(&self) -> (f64, f64) {
        self.range()
    }
}

/// Step between "nice" ticks over `[lo, hi]`: 1, 2 or 5 times a power of ten
///
/// Returned as `mul / div` so that sub-unit steps divide exactly.
fn increment(lo: f64, hi: f64, count: usize) -> Option<(f64, f64)> {
    if count == 0 || !(hi > lo) || !lo.is_finite() || !hi.is_finite() {
        return None;
    }
    let raw = (hi - lo) / count as f64;
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        Some((factor * 10f64.powf(power), 1.0))
    } else {
        Some((1.0, 10f64.powf(-power) / factor))
    }
}

/// Nice tick values within `[start, stop]` and the step between them
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> (Vec<f64>, f64) {
    if start == stop && start.is_finite() && count > 0 {
        return (vec![start], 0.0);
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some((mul, div)) = increment(lo, hi, count) else {
        return (Vec::new(), 0.0);
    };

    let mut values: Vec<f64> = if div == 1.0 {
        let i0 = (lo / mul).ceil() as i64;
        let i1 = (hi / mul).floor() as i64;
        (i0..=i1).map(|i| i as f64 * mul).collect()
    } else {
        let i0 = (lo * div).ceil() as i64;
        let i1 = (hi * div).floor() as i64;
        (i0..=i1).map(|i| i as f64 / div).collect()
    };
    if reverse {
        values.reverse();
    }
    (values, mul / div)
}

/// Format a tick value with the precision implied by the tick step
///
/// Integer parts get thousands separators: `format_tick(1500.0, 500.0)` is `"1,500"`.
pub fn format_tick(value: f64, step: f64) -> String {
    let precision = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let text = format!("{:.prec$}", value.abs(), prec = precision);
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let mut out = String::new();
    let is_zero = text.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn resolve_rotation(config: &AxisConfig, ticks: &[Tick], room: Option<f64>) -> Option<f64> {
    match config.rotation {
        LabelRotation::None => None,
        LabelRotation::Fixed(angle) => Some(angle),
        LabelRotation::Auto => {
            let room = room?;
            let widest = ticks
                .iter()
                .map(|t| t.label.chars().count())
                .max()
                .unwrap_or(0);
            (widest as f64 * CHAR_WIDTH > room).then_some(CROWDED_LABEL_ROTATION)
        }
    }
}

/// Lay out an axis for `scale` as a group of marks
///
/// Bottom axes are placed at `offset` pixels down; left axes sit at the origin.
pub fn render_axis<S: AxisScale + ?Sized>(config: &AxisConfig, scale: &S, offset: f64) -> Group {
    let (r0, r1) = scale.extent();
    let outer = config.tick_size_outer;
    let inner = config.tick_size_inner;
    let label_offset = config.label_offset();
    let ticks = scale.ticks();
    let rotation = resolve_rotation(config, &ticks, scale.label_room());

    let (transform, anchor, domain) = match config.position {
        AxisPosition::Bottom => (
            Some(Transform::Translate(0.0, offset)),
            TextAnchor::Middle,
            format!(
                "M{},{}V0H{}V{}",
                fmt_coord(r0),
                fmt_coord(outer),
                fmt_coord(r1),
                fmt_coord(outer)
            ),
        ),
        AxisPosition::Left => (
            None,
            TextAnchor::End,
            format!(
                "M{},{}H0V{}H{}",
                fmt_coord(-outer),
                fmt_coord(r0),
                fmt_coord(r1),
                fmt_coord(-outer)
            ),
        ),
    };

    let mut group = Group {
        transform,
        class: Some("axis".to_string()),
        font: Some(Font::default()),
        anchor: Some(anchor),
        children: Vec::with_capacity(ticks.len() + 1),
    };
    group.push(Path {
        d: domain,
        fill: None,
        stroke: Some(Color::black()),
        stroke_width: None,
    });

    for tick in ticks {
        let (tick_group, line, text) = match config.position {
            AxisPosition::Bottom => (
                Group::translated(tick.position, 0.0),
                Line::new(0.0, 0.0, 0.0, inner, Color::black()),
                Text::new(0.0, label_offset, tick.label).with_dy("0.71em"),
            ),
            AxisPosition::Left => (
                Group::translated(0.0, tick.position),
                Line::new(0.0, 0.0, -inner, 0.0, Color::black()),
                Text::new(-label_offset, 0.0, tick.label).with_dy("0.32em"),
            ),
        };
        let text = match rotation {
            Some(angle) => text.rotated(angle).anchored(TextAnchor::End),
            None => text,
        };
        group.push(
            tick_group
                .with_class("tick")
                .with_children(vec![Mark::Line(line), Mark::Text(text)]),
        );
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ticks_unit_range() {
        let (ticks, step) = nice_ticks(0.0, 10.0, 10);
        assert_eq!(step, 1.0);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(ticks[10], 10.0);
    }

    #[test]
    fn test_nice_ticks_uneven_max() {
        // 0..=87 with ~10 ticks steps by 10 and stops below the max
        let (ticks, step) = nice_ticks(0.0, 87.0, 10);
        assert_eq!(step, 10.0);
        assert_eq!(ticks.last(), Some(&80.0));
    }

    #[test]
    fn test_nice_ticks_fractional_step_is_exact() {
        let (ticks, step) = nice_ticks(0.0, 1.0, 10);
        assert!((step - 0.1).abs() < 1e-12);
        assert_eq!(ticks[3], 0.3);
    }

    #[test]
    fn test_nice_ticks_degenerate() {
        assert_eq!(nice_ticks(5.0, 5.0, 10).0, vec![5.0]);
        assert!(nice_ticks(0.0, 1.0, 0).0.is_empty());
        assert!(nice_ticks(0.0, f64::NAN, 10).0.is_empty());
    }

    #[test]
    fn test_nice_ticks_reversed() {
        let (ticks, _) = nice_ticks(10.0, 0.0, 5);
        assert_eq!(ticks.first(), Some(&10.0));
        assert_eq!(ticks.last(), Some(&0.0));
    }

    #[test]
    fn test_tick_step_thresholds() {
        assert_eq!(nice_ticks(0.0, 100.0, 10).1, 10.0);
        assert_eq!(nice_ticks(0.0, 250.0, 10).1, 20.0);
        assert_eq!(nice_ticks(0.0, 450.0, 10).1, 50.0);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.0, 10.0), "0");
        assert_eq!(format_tick(1500.0, 500.0), "1,500");
        assert_eq!(format_tick(1234567.0, 1.0), "1,234,567");
        assert_eq!(format_tick(0.5, 0.1), "0.5");
        assert_eq!(format_tick(2.0, 0.5), "2.0");
        assert_eq!(format_tick(-20.0, 10.0), "-20");
        assert_eq!(format_tick(-0.0, 1.0), "0");
    }

    #[test]
    fn test_linear_axis_ticks_follow_inverted_range() {
        let scale = LinearScale::from_zero(100.0, 300.0, 0.0);
        let ticks = scale.ticks();
        assert_eq!(ticks.first().unwrap().position, 300.0);
        assert_eq!(ticks.last().unwrap().position, 0.0);
        assert_eq!(ticks.last().unwrap().label, "100");
    }

    #[test]
    fn test_band_ticks_at_centers() {
        let scale = BandScale::new(["a", "b"], (0.0, 100.0));
        let ticks = scale.ticks();
        assert_eq!(ticks[0].position, 25.0);
        assert_eq!(ticks[1].label, "b");
    }

    #[test]
    fn test_bottom_axis_layout() {
        let scale = BandScale::new(["Teen", "Adult"], (0.0, 500.0));
        let axis = render_axis(&AxisConfig::bottom(), &scale, 300.0);
        assert_eq!(axis.transform, Some(Transform::Translate(0.0, 300.0)));
        match &axis.children[0] {
            Mark::Path(p) => assert_eq!(p.d, "M0,6V0H500V6"),
            other => panic!("expected domain path, got {:?}", other),
        }
        // Domain path plus one group per tick
        assert_eq!(axis.children.len(), 3);
        let Mark::Group(tick) = &axis.children[1] else {
            panic!("expected tick group");
        };
        let Mark::Text(label) = &tick.children[1] else {
            panic!("expected tick label");
        };
        assert_eq!(label.y, 9.0);
        assert_eq!(label.dy.as_deref(), Some("0.71em"));
        assert_eq!(label.transform, None);
    }

    #[test]
    fn test_left_axis_domain() {
        let scale = LinearScale::from_zero(50.0, 300.0, 0.0);
        let axis = render_axis(&AxisConfig::left(), &scale, 0.0);
        assert_eq!(axis.anchor, Some(TextAnchor::End));
        match &axis.children[0] {
            Mark::Path(p) => assert_eq!(p.d, "M-6,300H0V0H-6"),
            other => panic!("expected domain path, got {:?}", other),
        }
    }

    #[test]
    fn test_fixed_rotation() {
        let scale = PointScale::new(["2024-01-01", "2024-01-02"], (0.0, 500.0)).with_padding(0.5);
        let config = AxisConfig::bottom().with_rotation(LabelRotation::Fixed(-25.0));
        let axis = render_axis(&config, &scale, 300.0);
        let Mark::Group(tick) = &axis.children[1] else {
            panic!("expected tick group");
        };
        let Mark::Text(label) = &tick.children[1] else {
            panic!("expected tick label");
        };
        assert_eq!(label.transform, Some(Transform::Rotate(-25.0)));
        assert_eq!(label.anchor, Some(TextAnchor::End));
    }

    #[test]
    fn test_auto_rotation_only_when_crowded() {
        let config = AxisConfig::bottom().with_rotation(LabelRotation::Auto);
        let roomy = BandScale::new(["a", "b"], (0.0, 500.0));
        assert_eq!(resolve_rotation(&config, &roomy.ticks(), roomy.label_room()), None);

        let names: Vec<String> = (0..20).map(|i| format!("category-{}", i)).collect();
        let crowded = BandScale::new(names, (0.0, 500.0));
        assert_eq!(
            resolve_rotation(&config, &crowded.ticks(), crowded.label_room()),
            Some(CROWDED_LABEL_ROTATION)
        );
    }
}
