//! Declarative chart scenes
//!
//! A scene is a renderer's complete output: marks, axes, labels and legend
//! with every coordinate already resolved, but no knowledge of the UI host
//! that will draw it. The dashboard commits scenes to SVG; tests inspect
//! them directly.

use serde::Serialize;

/// A complete, self-contained chart description.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    /// viewBox width
    pub width: f64,
    /// viewBox height
    pub height: f64,
    pub axes: Vec<Axis>,
    pub marks: Vec<Mark>,
    pub labels: Vec<Label>,
    pub legend: Vec<LegendEntry>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Scene {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

/// One datum's visual, with its hover tooltip lines attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Mark {
    Bar {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
        /// Corner radius
        rx: f64,
        /// Entry-animation stagger for this mark
        enter_delay_ms: u32,
        tooltip: Vec<String>,
    },
    Slice {
        /// SVG path of the donut slice
        path: String,
        fill: String,
        stroke: String,
        stroke_width: f64,
        /// In-slice percentage label; absent below the display threshold
        label: Option<SliceLabel>,
        tooltip: Vec<String>,
    },
    Dot {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
        opacity: f64,
        enter_delay_ms: u32,
        tooltip: Vec<String>,
    },
}

/// Percentage label centered inside a donut slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliceLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Bottom,
    Left,
}

/// An axis: domain line plus ticks, positioned by `offset` inside the
/// scene. The host draws tick marks perpendicular to the domain line and
/// rotates bottom labels -45° when `rotate_labels` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub orientation: Orientation,
    /// Translation of the axis group within the scene
    pub offset: (f64, f64),
    /// Pixel extent of the domain line
    pub length: f64,
    pub ticks: Vec<Tick>,
    pub rotate_labels: bool,
}

/// One axis tick: position along the domain line plus its label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Free-standing text: chart titles and axis captions. Visual styling is
/// keyed off `class` in the host stylesheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: Anchor,
    /// Rotation in degrees around (x, y); 0 for horizontal text
    pub rotate: f64,
    pub class: &'static str,
}

impl Label {
    /// Chart title, centered above the plot area.
    pub fn title(x: f64, y: f64, text: &str) -> Label {
        Self {
            x,
            y,
            text: text.to_string(),
            anchor: Anchor::Middle,
            rotate: 0.0,
            class: "chart-title",
        }
    }

    /// Horizontal axis caption.
    pub fn caption(x: f64, y: f64, text: &str) -> Label {
        Self {
            x,
            y,
            text: text.to_string(),
            anchor: Anchor::Middle,
            rotate: 0.0,
            class: "axis-caption",
        }
    }

    /// Vertical axis caption, read bottom-to-top.
    pub fn caption_rotated(x: f64, y: f64, text: &str) -> Label {
        Self {
            x,
            y,
            text: text.to_string(),
            anchor: Anchor::Middle,
            rotate: -90.0,
            class: "axis-caption",
        }
    }
}

/// Legend swatch shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Swatch {
    Rect,
    Dot,
}

/// One legend row: a colored swatch and its text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub swatch: Swatch,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub text: String,
}
