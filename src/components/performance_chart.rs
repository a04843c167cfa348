//! Performance Chart
//!
//! Radar chart of the performance categories on HTML5 Canvas. Vertex
//! placement is a pure function of category index and scaled value.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::format::PerformanceSample;

const WIDTH: f64 = 258.0;
const HEIGHT: f64 = 263.0;
const OUTER_RADIUS: f64 = 80.0;
const RING_FRACTIONS: [f64; 5] = [0.125, 0.25, 0.5, 0.75, 1.0];

/// Performance radar chart component
#[component]
pub fn PerformanceChart(data: Vec<PerformanceSample>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let samples = store_value(data);

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            samples.with_value(|samples| draw(&canvas, samples));
        }
    });

    view! {
        <section class="performance-chart">
            <canvas node_ref=canvas_ref width="258" height="263" />
        </section>
    }
}

/// Offset from the center for a category vertex, starting at the top and
/// proceeding clockwise
pub(crate) fn radar_vertex(radius: f64, index: usize, count: usize) -> (f64, f64) {
    let angle =
        -std::f64::consts::FRAC_PI_2 + index as f64 * std::f64::consts::TAU / count as f64;
    (radius * angle.cos(), radius * angle.sin())
}

/// Value scaled against the best category, clamped to the grid
pub(crate) fn value_fraction(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max).clamp(0.0, 1.0)
    }
}

/// Largest category value, the outer edge of the grid
pub(crate) fn max_value(samples: &[PerformanceSample]) -> f64 {
    samples.iter().map(|sample| sample.value).fold(0.0, f64::max)
}

/// Pixel nudges keeping each category label clear of the grid
pub(crate) fn label_offset(label: &str) -> (f64, f64) {
    match label {
        "Cardio" => (0.0, -10.0),
        "Force" => (0.0, 16.0),
        "Intensité" => (5.0, -2.0),
        "Énergie" => (-5.0, -2.0),
        "Vitesse" => (0.0, 14.0),
        "Endurance" => (-15.0, 16.0),
        _ => (0.0, 0.0),
    }
}

fn draw(canvas: &HtmlCanvasElement, samples: &[PerformanceSample]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    ctx.set_fill_style(&"#282D30".into());
    ctx.fill_rect(0.0, 0.0, WIDTH, HEIGHT);

    if samples.is_empty() {
        return;
    }

    let cx = WIDTH / 2.0;
    let cy = HEIGHT / 2.0;
    let count = samples.len();

    // Concentric grid polygons, no radial lines
    ctx.set_stroke_style(&"#FFFFFF".into());
    ctx.set_line_width(1.0);
    for fraction in RING_FRACTIONS {
        ctx.begin_path();
        for index in 0..=count {
            let (dx, dy) = radar_vertex(OUTER_RADIUS * fraction, index % count, count);
            if index == 0 {
                ctx.move_to(cx + dx, cy + dy);
            } else {
                ctx.line_to(cx + dx, cy + dy);
            }
        }
        ctx.stroke();
    }

    // Filled value polygon
    let max = max_value(samples);
    ctx.set_fill_style(&"rgba(255, 1, 5, 0.7)".into());
    ctx.begin_path();
    for (index, sample) in samples.iter().enumerate() {
        let radius = OUTER_RADIUS * value_fraction(sample.value, max);
        let (dx, dy) = radar_vertex(radius, index, count);
        if index == 0 {
            ctx.move_to(cx + dx, cy + dy);
        } else {
            ctx.line_to(cx + dx, cy + dy);
        }
    }
    ctx.close_path();
    ctx.fill();

    // Category labels around the grid
    ctx.set_fill_style(&"#FFFFFF".into());
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    for (index, sample) in samples.iter().enumerate() {
        let (dx, dy) = radar_vertex(OUTER_RADIUS + 14.0, index, count);
        let (nx, ny) = label_offset(&sample.label);
        let _ = ctx.fill_text(&sample.label, cx + dx + nx, cy + dy + ny + 4.0);
    }
    ctx.set_text_align("start");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_first_vertex_sits_at_the_top() {
        let (x, y) = radar_vertex(80.0, 0, 6);
        assert!(x.abs() < 1e-9);
        assert!((y + 80.0).abs() < 1e-9);
    }

    #[test]
    fn vertices_are_evenly_spread() {
        // Opposite corner of a hexagon points straight down.
        let (x, y) = radar_vertex(80.0, 3, 6);
        assert!(x.abs() < 1e-9);
        assert!((y - 80.0).abs() < 1e-9);
    }

    #[test]
    fn values_scale_against_the_best_category() {
        assert_eq!(value_fraction(120.0, 240.0), 0.5);
        assert_eq!(value_fraction(300.0, 240.0), 1.0);
        assert_eq!(value_fraction(50.0, 0.0), 0.0);
    }

    #[test]
    fn max_value_spans_the_grid() {
        let samples = vec![
            PerformanceSample {
                label: "Cardio".to_string(),
                value: 80.0,
            },
            PerformanceSample {
                label: "Vitesse".to_string(),
                value: 200.0,
            },
        ];
        assert_eq!(max_value(&samples), 200.0);
    }

    #[test]
    fn known_labels_get_their_nudges() {
        assert_eq!(label_offset("Cardio"), (0.0, -10.0));
        assert_eq!(label_offset("Endurance"), (-15.0, 16.0));
        assert_eq!(label_offset("Autre"), (0.0, 0.0));
    }
}
