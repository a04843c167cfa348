//! Average Sessions Chart
//!
//! Session duration curve over the week, drawn on HTML5 Canvas. Hover
//! behavior is computed by pure functions from the cursor position:
//! nearest sample, tooltip text and the dimming overlay geometry.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::format::SessionSample;

const WIDTH: f64 = 258.0;
const HEIGHT: f64 = 263.0;
const CURVE_TOP: f64 = 90.0;
const CURVE_BOTTOM: f64 = 50.0;
const CURSOR_HALF_WIDTH: f64 = 15.0;

/// Average session duration chart component
#[component]
pub fn SessionsChart(data: Vec<SessionSample>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (hover, set_hover) = create_signal(None::<f64>);
    let samples = store_value(data);

    create_effect(move |_| {
        let hover_x = hover.get();
        if let Some(canvas) = canvas_ref.get() {
            samples.with_value(|samples| draw(&canvas, samples, hover_x));
        }
    });

    view! {
        <section class="sessions-chart">
            <canvas
                node_ref=canvas_ref
                width="258"
                height="263"
                on:mousemove=move |ev: web_sys::MouseEvent| {
                    set_hover.set(Some(ev.offset_x() as f64))
                }
                on:mouseleave=move |_| set_hover.set(None)
            />
        </section>
    }
}

/// Horizontal position of a sample point across the full chart width
pub(crate) fn point_x(index: usize, len: usize, width: f64) -> f64 {
    if len <= 1 {
        return 0.0;
    }
    index as f64 / (len - 1) as f64 * width
}

/// Sample nearest to the cursor
pub(crate) fn nearest_index(x: f64, width: f64, len: usize) -> Option<usize> {
    if len == 0 || width <= 0.0 {
        return None;
    }
    let ratio = (x / width).clamp(0.0, 1.0);
    Some((ratio * (len - 1) as f64).round() as usize)
}

/// Tooltip text for a hovered sample
pub(crate) fn tooltip_label(sample: &SessionSample) -> String {
    format!("{} min", sample.session_length)
}

/// Left edge of the dimming overlay, centered on the hovered point and
/// extending to the right edge of the chart
pub(crate) fn cursor_origin(point_x: f64) -> f64 {
    point_x - CURSOR_HALF_WIDTH
}

/// Vertical bounds of the duration scale, with headroom so the curve
/// stays clear of the title and the weekday labels
pub(crate) fn session_range(samples: &[SessionSample]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for sample in samples {
        min = min.min(sample.session_length);
        max = max.max(sample.session_length);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    (min - 15.0, max + 35.0)
}

fn draw(canvas: &HtmlCanvasElement, samples: &[SessionSample], hover_x: Option<f64>) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    ctx.set_fill_style(&"#FF0000".into());
    ctx.fill_rect(0.0, 0.0, WIDTH, HEIGHT);

    ctx.set_fill_style(&"rgba(255, 255, 255, 0.6)".into());
    ctx.set_font("15px sans-serif");
    let _ = ctx.fill_text("Durée moyenne des", 25.0, 40.0);
    let _ = ctx.fill_text("sessions", 25.0, 62.0);

    if samples.is_empty() {
        return;
    }

    let (min, max) = session_range(samples);
    let scale_y =
        |value: f64| CURVE_TOP + (max - value) / (max - min) * (HEIGHT - CURVE_TOP - CURVE_BOTTOM);

    let points: Vec<(f64, f64)> = samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            (
                point_x(index, samples.len(), WIDTH),
                scale_y(sample.session_length),
            )
        })
        .collect();

    let hovered = hover_x.and_then(|x| nearest_index(x, WIDTH, samples.len()));

    // Dim everything right of the hovered point
    if let Some(index) = hovered {
        let left = cursor_origin(points[index].0).max(0.0);
        ctx.set_fill_style(&"rgba(0, 0, 0, 0.1)".into());
        ctx.fill_rect(left, 0.0, WIDTH - left, HEIGHT);
    }

    // Smooth curve through midpoints
    ctx.set_stroke_style(&"rgba(255, 255, 255, 0.8)".into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (index, point) in points.iter().enumerate() {
        if index == 0 {
            ctx.move_to(point.0, point.1);
            continue;
        }
        let previous = points[index - 1];
        let mid = ((previous.0 + point.0) / 2.0, (previous.1 + point.1) / 2.0);
        ctx.quadratic_curve_to(previous.0, previous.1, mid.0, mid.1);
    }
    if let Some(last) = points.last() {
        ctx.line_to(last.0, last.1);
    }
    ctx.stroke();

    // Weekday labels along the bottom
    ctx.set_fill_style(&"rgba(255, 255, 255, 0.6)".into());
    ctx.set_font("12px sans-serif");
    for (index, sample) in samples.iter().enumerate() {
        let x = point_x(index, samples.len(), WIDTH).clamp(8.0, WIDTH - 12.0);
        let _ = ctx.fill_text(sample.day, x - 4.0, HEIGHT - 16.0);
    }

    // Active point halo and tooltip
    if let Some(index) = hovered {
        let (px, py) = points[index];

        ctx.set_fill_style(&"rgba(255, 255, 255, 0.2)".into());
        ctx.begin_path();
        let _ = ctx.arc(px, py, 10.0, 0.0, std::f64::consts::TAU);
        ctx.fill();

        ctx.set_fill_style(&"#FFFFFF".into());
        ctx.begin_path();
        let _ = ctx.arc(px, py, 4.5, 0.0, std::f64::consts::TAU);
        ctx.fill();

        let label = tooltip_label(&samples[index]);
        let left = px.clamp(0.0, WIDTH - 50.0);
        let top = (py - 35.0).max(5.0);
        ctx.fill_rect(left, top, 50.0, 25.0);
        ctx.set_fill_style(&"#000000".into());
        ctx.set_font("10px sans-serif");
        let _ = ctx.fill_text(&label, left + 8.0, top + 16.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(session_length: f64) -> SessionSample {
        SessionSample {
            day: "L",
            session_length,
        }
    }

    #[test]
    fn points_span_the_full_width() {
        assert_eq!(point_x(0, 7, 258.0), 0.0);
        assert_eq!(point_x(6, 7, 258.0), 258.0);
        assert_eq!(point_x(3, 7, 258.0), 129.0);
    }

    #[test]
    fn the_nearest_point_wins_the_hover() {
        assert_eq!(nearest_index(0.0, 258.0, 7), Some(0));
        assert_eq!(nearest_index(258.0, 258.0, 7), Some(6));
        assert_eq!(nearest_index(129.0, 258.0, 7), Some(3));
        // Positions outside the canvas clamp to the edge samples.
        assert_eq!(nearest_index(-20.0, 258.0, 7), Some(0));
        assert_eq!(nearest_index(400.0, 258.0, 7), Some(6));
    }

    #[test]
    fn hover_needs_at_least_one_sample() {
        assert_eq!(nearest_index(100.0, 258.0, 0), None);
    }

    #[test]
    fn tooltip_shows_minutes() {
        assert_eq!(tooltip_label(&sample(30.0)), "30 min");
    }

    #[test]
    fn the_overlay_is_centered_on_the_point() {
        assert_eq!(cursor_origin(100.0), 85.0);
    }

    #[test]
    fn duration_scale_keeps_headroom() {
        let samples = [sample(23.0), sample(60.0)];
        assert_eq!(session_range(&samples), (8.0, 95.0));
    }
}
