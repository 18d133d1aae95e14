//! Committing chart scenes to SVG
//!
//! The scene types in powersmart-core are host-agnostic; this module is
//! the one place that turns them into SVG elements, wires mark hover
//! handlers to the shared tooltip overlay and applies the entry-animation
//! classes.

use dioxus::prelude::*;
use powersmart_core::scene::{Anchor, Axis, Label, LegendEntry, Mark, Orientation, Scene, Swatch};

/// Offset between the pointer and the tooltip corner
const TOOLTIP_OFFSET: (f64, f64) = (10.0, -28.0);

/// Shared tooltip overlay state, provided at the app root
#[derive(Clone, Copy)]
pub struct TooltipCtx(pub Signal<Option<TooltipState>>);

/// Absolute page position plus content of the tooltip
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipState {
    pub x: f64,
    pub y: f64,
    pub lines: Vec<String>,
}

impl TooltipState {
    fn at(evt: &MouseEvent, lines: &[String]) -> TooltipState {
        let point = evt.page_coordinates();
        Self {
            x: point.x + TOOLTIP_OFFSET.0,
            y: point.y + TOOLTIP_OFFSET.1,
            lines: lines.to_vec(),
        }
    }
}

/// The single tooltip element reused by all four charts. Rendered once at
/// the app root, positioned near the pointer while a mark is hovered.
#[component]
pub fn TooltipOverlay() -> Element {
    let TooltipCtx(tooltip) = use_context::<TooltipCtx>();

    rsx! {
        if let Some(tip) = tooltip.read().as_ref() {
            div {
                class: "tooltip",
                style: "left: {tip.x}px; top: {tip.y}px;",
                for (i, line) in tip.lines.iter().enumerate() {
                    if i == 0 {
                        strong { "{line}" }
                    } else {
                        div { "{line}" }
                    }
                }
            }
        }
    }
}

/// Draw one scene into an `<svg>` element.
#[component]
pub fn SvgScene(scene: Scene) -> Element {
    rsx! {
        svg {
            class: "chart",
            view_box: "0 0 {scene.width} {scene.height}",
            "preserveAspectRatio": "xMidYMid meet",

            for axis in scene.axes.iter() {
                {axis_group(axis)}
            }
            for label in scene.labels.iter() {
                {label_text(label)}
            }
            for mark in scene.marks.iter() {
                MarkView { mark: mark.clone() }
            }
            for entry in scene.legend.iter() {
                {legend_entry(entry)}
            }
        }
    }
}

fn axis_group(axis: &Axis) -> Element {
    let (tx, ty) = axis.offset;
    let length = axis.length;

    match axis.orientation {
        Orientation::Bottom => rsx! {
            g { class: "axis", transform: "translate({tx},{ty})",
                line { class: "domain", x2: "{length}" }
                for tick in axis.ticks.iter() {
                    g { class: "tick", transform: "translate({tick.position},0)",
                        line { y2: "6" }
                        if axis.rotate_labels {
                            text {
                                y: "9",
                                dx: "-0.5em",
                                dy: "0.5em",
                                text_anchor: "end",
                                transform: "rotate(-45)",
                                "{tick.label}"
                            }
                        } else {
                            text { y: "9", dy: "0.71em", text_anchor: "middle", "{tick.label}" }
                        }
                    }
                }
            }
        },
        Orientation::Left => rsx! {
            g { class: "axis", transform: "translate({tx},{ty})",
                line { class: "domain", y2: "{length}" }
                for tick in axis.ticks.iter() {
                    g { class: "tick", transform: "translate(0,{tick.position})",
                        line { x2: "-6" }
                        text { x: "-9", dy: "0.32em", text_anchor: "end", "{tick.label}" }
                    }
                }
            }
        },
    }
}

fn label_text(label: &Label) -> Element {
    let anchor = match label.anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    };
    let transform = if label.rotate == 0.0 {
        format!("translate({},{})", label.x, label.y)
    } else {
        format!("translate({},{}) rotate({})", label.x, label.y, label.rotate)
    };

    rsx! {
        text {
            class: "{label.class}",
            transform: "{transform}",
            text_anchor: "{anchor}",
            "{label.text}"
        }
    }
}

fn legend_entry(entry: &LegendEntry) -> Element {
    match entry.swatch {
        Swatch::Rect => rsx! {
            g { class: "legend-item", transform: "translate({entry.x},{entry.y})",
                rect { width: "18", height: "18", rx: "4", fill: "{entry.color}" }
                text { x: "25", y: "14", "{entry.text}" }
            }
        },
        Swatch::Dot => rsx! {
            g { class: "legend-item", transform: "translate({entry.x},{entry.y})",
                circle { r: "6", fill: "{entry.color}" }
                text { x: "15", y: "4", "{entry.text}" }
            }
        },
    }
}

/// One mark with its hover highlight and tooltip wiring.
#[component]
fn MarkView(mark: Mark) -> Element {
    let TooltipCtx(mut tooltip) = use_context::<TooltipCtx>();
    let mut hovered = use_signal(|| false);

    let move_tooltip = move |evt: MouseEvent| {
        if let Some(tip) = tooltip.write().as_mut() {
            let point = evt.page_coordinates();
            tip.x = point.x + TOOLTIP_OFFSET.0;
            tip.y = point.y + TOOLTIP_OFFSET.1;
        }
    };

    match mark {
        Mark::Bar {
            x,
            y,
            width,
            height,
            fill,
            rx,
            enter_delay_ms,
            tooltip: lines,
        } => rsx! {
            rect {
                class: "bar mark-enter",
                x: "{x}",
                y: "{y}",
                width: "{width}",
                height: "{height}",
                rx: "{rx}",
                fill: "{fill}",
                opacity: if hovered() { "0.8" } else { "1" },
                style: "animation-delay: {enter_delay_ms}ms;",
                onmouseenter: move |evt| {
                    hovered.set(true);
                    tooltip.set(Some(TooltipState::at(&evt, &lines)));
                },
                onmousemove: move_tooltip,
                onmouseleave: move |_| {
                    hovered.set(false);
                    tooltip.set(None);
                },
            }
        },
        Mark::Slice {
            path,
            fill,
            stroke,
            stroke_width,
            label,
            tooltip: lines,
        } => rsx! {
            g { class: "slice",
                path {
                    class: "mark-enter",
                    d: "{path}",
                    fill: "{fill}",
                    stroke: "{stroke}",
                    stroke_width: "{stroke_width}",
                    opacity: if hovered() { "0.8" } else { "1" },
                    onmouseenter: move |evt| {
                        hovered.set(true);
                        tooltip.set(Some(TooltipState::at(&evt, &lines)));
                    },
                    onmousemove: move_tooltip,
                    onmouseleave: move |_| {
                        hovered.set(false);
                        tooltip.set(None);
                    },
                }
                if let Some(slice_label) = label {
                    text {
                        class: "slice-label",
                        x: "{slice_label.x}",
                        y: "{slice_label.y}",
                        dy: "0.35em",
                        text_anchor: "middle",
                        "{slice_label.text}"
                    }
                }
            }
        },
        Mark::Dot {
            cx,
            cy,
            r,
            fill,
            opacity,
            enter_delay_ms,
            tooltip: lines,
        } => {
            // hover swells the dot and makes it opaque
            let (radius, alpha) = if hovered() { (8.0, 1.0) } else { (r, opacity) };
            rsx! {
                circle {
                    class: "dot mark-enter",
                    cx: "{cx}",
                    cy: "{cy}",
                    r: "{radius}",
                    fill: "{fill}",
                    opacity: "{alpha}",
                    style: "animation-delay: {enter_delay_ms}ms;",
                    onmouseenter: move |evt| {
                        hovered.set(true);
                        tooltip.set(Some(TooltipState::at(&evt, &lines)));
                    },
                    onmousemove: move_tooltip,
                    onmouseleave: move |_| {
                        hovered.set(false);
                        tooltip.set(None);
                    },
                }
            }
        }
    }
}
