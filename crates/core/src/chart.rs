//! The four dashboard chart builders
//!
//! Each builder is a pure function from one aggregate (plus the shared
//! [`Theme`]) to a [`Scene`]. Layout is fixed: viewBox sizes, margins,
//! palette rules and entry-animation staggers are constants, not
//! configuration. An empty aggregate yields an empty chart shell (axes
//! with a degenerate domain, no marks), never an error.

use std::f64::consts::PI;
use std::f64::consts::TAU;

use crate::aggregate::{BrandBucket, SizeBucket, TechBreakdown};
use crate::data::TelevisionRecord;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Axis, Label, LegendEntry, Mark, Orientation, Scene, SliceLabel, Swatch, Tick};
use crate::theme::Theme;

struct Margin {
    top: f64,
    right: f64,
    bottom: f64,
    left: f64,
}

/// Bar chart of model counts per screen size.
pub fn size_chart(buckets: &[SizeBucket], theme: &Theme) -> Scene {
    let margin = Margin {
        top: 40.0,
        right: 30.0,
        bottom: 60.0,
        left: 70.0,
    };
    let (outer_width, outer_height) = (750.0, 320.0);
    let width = outer_width - margin.left - margin.right;
    let height = outer_height - margin.top - margin.bottom;

    let x = BandScale::new(buckets.len(), (0.0, width), 0.2);
    let max_count = buckets.iter().map(|b| b.count).max().unwrap_or(0);
    let y = LinearScale::new((0.0, max_count as f64), (height, 0.0)).nice(10);

    let mut scene = Scene::new(outer_width, outer_height);

    scene.labels.push(Label::title(
        margin.left + width / 2.0,
        margin.top - 15.0,
        "Number of TV Models by Screen Size",
    ));

    // Every second size gets a tick, or the labels collide
    let ticks = buckets
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 2 == 0)
        .map(|(i, bucket)| Tick {
            position: x.center(i),
            label: bucket.size.to_string(),
        })
        .collect();
    scene.axes.push(Axis {
        orientation: Orientation::Bottom,
        offset: (margin.left, margin.top + height),
        length: width,
        ticks,
        rotate_labels: true,
    });
    scene.axes.push(left_axis(&y, &margin, height));

    scene.labels.push(Label::caption(
        margin.left + width / 2.0,
        margin.top + height + 50.0,
        "Screen Size (Inches)",
    ));
    scene.labels.push(Label::caption_rotated(
        margin.left - 50.0,
        margin.top + height / 2.0,
        "Number of Models",
    ));

    for (i, bucket) in buckets.iter().enumerate() {
        let fill = match bucket.size {
            55 | 65 => theme.accent,
            75 | 85 => theme.secondary,
            _ => theme.primary,
        };
        let top = margin.top + y.scale(bucket.count as f64);
        scene.marks.push(Mark::Bar {
            x: margin.left + x.position(i),
            y: top,
            width: x.bandwidth(),
            height: margin.top + height - top,
            fill: fill.to_string(),
            rx: 4.0,
            enter_delay_ms: i as u32 * 30,
            tooltip: vec![
                format!("{}\" Screen", bucket.size),
                format!("{} models", bucket.count),
            ],
        });
    }

    scene
}

/// Donut chart of model counts per screen technology.
pub fn tech_chart(breakdown: &TechBreakdown, theme: &Theme) -> Scene {
    let (width, height): (f64, f64) = (700.0, 320.0);
    let radius = width.min(height) / 2.0 - 60.0;
    let (cx, cy) = (width / 2.0, height / 2.0);
    let palette = theme.tech_palette();

    let mut scene = Scene::new(width, height);
    let total = breakdown.total as f64;

    let mut angle = 0.0;
    for (i, bucket) in breakdown.buckets.iter().enumerate() {
        let fraction = if breakdown.total == 0 {
            0.0
        } else {
            bucket.count as f64 / total
        };
        let start = angle;
        let end = angle + fraction * TAU;
        angle = end;

        let percent = fraction * 100.0;
        let label = if percent.round() > 5.0 {
            let (lx, ly) = arc_centroid(cx, cy, radius * 0.75, start, end);
            Some(SliceLabel {
                x: lx,
                y: ly,
                text: format!("{}%", percent.round()),
            })
        } else {
            None
        };

        scene.marks.push(Mark::Slice {
            path: donut_slice_path(cx, cy, radius * 0.5, radius, start, end),
            fill: palette[i % palette.len()].to_string(),
            stroke: theme.slice_stroke.to_string(),
            stroke_width: 2.0,
            label,
            tooltip: vec![
                bucket.technology.clone(),
                format!("{} models ({:.1}%)", bucket.count, percent),
            ],
        });
    }

    let legend_x = cx + radius + 30.0;
    let legend_top = cy - breakdown.buckets.len() as f64 * 12.0;
    for (i, bucket) in breakdown.buckets.iter().enumerate() {
        scene.legend.push(LegendEntry {
            swatch: Swatch::Rect,
            x: legend_x,
            y: legend_top + i as f64 * 25.0,
            color: palette[i % palette.len()].to_string(),
            text: bucket.technology.clone(),
        });
    }

    scene
}

/// Scatter of power draw against screen size for the sampled records.
pub fn power_chart(points: &[&TelevisionRecord], theme: &Theme) -> Scene {
    let margin = Margin {
        top: 40.0,
        right: 30.0,
        bottom: 60.0,
        left: 70.0,
    };
    let (outer_width, outer_height) = (750.0, 350.0);
    let width = outer_width - margin.left - margin.right;
    let height = outer_height - margin.top - margin.bottom;

    let max_size = points
        .iter()
        .map(|p| p.screen_size)
        .fold(f64::NEG_INFINITY, f64::max);
    let max_power = points
        .iter()
        .map(|p| p.avg_mode_power)
        .fold(f64::NEG_INFINITY, f64::max);

    // Degenerate shell when there is nothing to plot
    let x_hi = if max_size.is_finite() {
        max_size + 5.0
    } else {
        25.0
    };
    let y_hi = if max_power.is_finite() {
        max_power * 1.1
    } else {
        0.0
    };

    let x = LinearScale::new((20.0, x_hi), (0.0, width));
    let y = LinearScale::new((0.0, y_hi), (height, 0.0));

    let mut scene = Scene::new(outer_width, outer_height);

    scene.labels.push(Label::title(
        margin.left + width / 2.0,
        margin.top - 15.0,
        "Screen Size vs Power Consumption",
    ));

    scene.axes.push(Axis {
        orientation: Orientation::Bottom,
        offset: (margin.left, margin.top + height),
        length: width,
        ticks: linear_ticks(&x),
        rotate_labels: false,
    });
    scene.axes.push(left_axis(&y, &margin, height));

    scene.labels.push(Label::caption(
        margin.left + width / 2.0,
        margin.top + height + 45.0,
        "Screen Size (Inches)",
    ));
    scene.labels.push(Label::caption_rotated(
        margin.left - 50.0,
        margin.top + height / 2.0,
        "Power Consumption (Watts)",
    ));

    for (i, point) in points.iter().enumerate() {
        let fill = if point.screen_tech.contains("OLED") {
            theme.oled
        } else {
            theme.lcd
        };
        scene.marks.push(Mark::Dot {
            cx: margin.left + x.scale(point.screen_size),
            cy: margin.top + y.scale(point.avg_mode_power),
            r: 5.0,
            fill: fill.to_string(),
            opacity: 0.6,
            enter_delay_ms: i as u32 * 2,
            tooltip: vec![
                point.brand.clone(),
                format!("{}\" {}", point.screen_size, point.screen_tech),
                format!("Power: {:.1}W", point.avg_mode_power),
                format!("Star Rating: {}", point.star_rating),
            ],
        });
    }

    let legend_x = margin.left + width - 100.0;
    let legend_y = margin.top + 10.0;
    for (i, (text, color)) in [("LCD/LED", theme.lcd), ("OLED", theme.oled)]
        .into_iter()
        .enumerate()
    {
        scene.legend.push(LegendEntry {
            swatch: Swatch::Dot,
            x: legend_x,
            y: legend_y + i as f64 * 22.0,
            color: color.to_string(),
            text: text.to_string(),
        });
    }

    scene
}

/// Bar chart of the twelve most-registered brands.
pub fn brand_chart(buckets: &[BrandBucket], theme: &Theme) -> Scene {
    let margin = Margin {
        top: 40.0,
        right: 30.0,
        bottom: 100.0,
        left: 70.0,
    };
    let (outer_width, outer_height) = (750.0, 350.0);
    let width = outer_width - margin.left - margin.right;
    let height = outer_height - margin.top - margin.bottom;

    let x = BandScale::new(buckets.len(), (0.0, width), 0.25);
    let max_count = buckets.iter().map(|b| b.count).max().unwrap_or(0);
    let y = LinearScale::new((0.0, max_count as f64), (height, 0.0)).nice(10);

    let mut scene = Scene::new(outer_width, outer_height);

    scene.labels.push(Label::title(
        margin.left + width / 2.0,
        margin.top - 15.0,
        "Top 12 TV Brands by Number of Models",
    ));

    let ticks = buckets
        .iter()
        .enumerate()
        .map(|(i, bucket)| Tick {
            position: x.center(i),
            label: bucket.brand.clone(),
        })
        .collect();
    scene.axes.push(Axis {
        orientation: Orientation::Bottom,
        offset: (margin.left, margin.top + height),
        length: width,
        ticks,
        rotate_labels: true,
    });
    scene.axes.push(left_axis(&y, &margin, height));

    scene.labels.push(Label::caption_rotated(
        margin.left - 50.0,
        margin.top + height / 2.0,
        "Number of Models",
    ));

    for (i, bucket) in buckets.iter().enumerate() {
        let top = margin.top + y.scale(bucket.count as f64);
        scene.marks.push(Mark::Bar {
            x: margin.left + x.position(i),
            y: top,
            width: x.bandwidth(),
            height: margin.top + height - top,
            fill: theme.brand_color(i).to_string(),
            rx: 4.0,
            enter_delay_ms: i as u32 * 60,
            tooltip: vec![
                bucket.brand.clone(),
                format!("{} models registered", bucket.count),
            ],
        });
    }

    scene
}

fn left_axis(scale: &LinearScale, margin: &Margin, height: f64) -> Axis {
    Axis {
        orientation: Orientation::Left,
        offset: (margin.left, margin.top),
        length: height,
        ticks: linear_ticks(scale),
        rotate_labels: false,
    }
}

fn linear_ticks(scale: &LinearScale) -> Vec<Tick> {
    scale
        .ticks(10)
        .into_iter()
        .map(|value| Tick {
            position: scale.scale(value),
            label: format_tick(value),
        })
        .collect()
}

/// Tick label without float noise: `20` rather than `20.000000000000004`.
fn format_tick(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

/// Point on a circle, angles measured clockwise from 12 o'clock.
fn ray(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.sin(), cy - radius * angle.cos())
}

/// Midpoint of a slice at the label radius.
fn arc_centroid(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> (f64, f64) {
    ray(cx, cy, radius, (start + end) / 2.0)
}

/// SVG path for one donut slice between `start` and `end` angles.
fn donut_slice_path(
    cx: f64,
    cy: f64,
    inner: f64,
    outer: f64,
    start: f64,
    end: f64,
) -> String {
    let sweep = end - start;
    if sweep <= 0.0 {
        return String::new();
    }

    // A lone slice covering the whole ring has coincident endpoints, so it
    // is drawn as two concentric circles with opposite winding instead.
    if sweep >= TAU - 1e-9 {
        let (ox, oy0) = ray(cx, cy, outer, 0.0);
        let (_, oy1) = ray(cx, cy, outer, PI);
        let (ix, iy0) = ray(cx, cy, inner, 0.0);
        let (_, iy1) = ray(cx, cy, inner, PI);
        return format!(
            "M{ox:.3},{oy0:.3}\
             A{outer:.3},{outer:.3} 0 1 1 {ox:.3},{oy1:.3}\
             A{outer:.3},{outer:.3} 0 1 1 {ox:.3},{oy0:.3}\
             M{ix:.3},{iy0:.3}\
             A{inner:.3},{inner:.3} 0 1 0 {ix:.3},{iy1:.3}\
             A{inner:.3},{inner:.3} 0 1 0 {ix:.3},{iy0:.3}Z"
        );
    }

    let (x0, y0) = ray(cx, cy, outer, start);
    let (x1, y1) = ray(cx, cy, outer, end);
    let (x2, y2) = ray(cx, cy, inner, end);
    let (x3, y3) = ray(cx, cy, inner, start);
    let large = if sweep > PI { 1 } else { 0 };

    format!(
        "M{x0:.3},{y0:.3}\
         A{outer:.3},{outer:.3} 0 {large} 1 {x1:.3},{y1:.3}\
         L{x2:.3},{y2:.3}\
         A{inner:.3},{inner:.3} 0 {large} 0 {x3:.3},{y3:.3}Z"
    )
}
