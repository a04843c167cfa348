//! Daily Activity Chart
//!
//! Double bar chart (weight and burned calories) drawn on HTML5 Canvas.
//! Axis bounds and tick positions are pure functions of the samples.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::format::ActivitySample;

const WIDTH: f64 = 702.0;
const HEIGHT: f64 = 200.0;
const MARGIN_LEFT: f64 = 10.0;
const MARGIN_RIGHT: f64 = 45.0;
const MARGIN_TOP: f64 = 25.0;
const MARGIN_BOTTOM: f64 = 25.0;

const BAR_WIDTH: f64 = 7.0;
const BAR_GAP: f64 = 8.0;

const WEIGHT_COLOR: &str = "#282D30";
const CALORIES_COLOR: &str = "#E60000";
const AXIS_COLOR: &str = "#9B9EAC";
const GRID_COLOR: &str = "#DEDEDE";

/// Daily activity chart component
#[component]
pub fn ActivityChart(data: Vec<ActivitySample>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (hover, set_hover) = create_signal(None::<f64>);
    let samples = store_value(data);

    // Redraw when the canvas mounts or the cursor moves
    create_effect(move |_| {
        let hover_x = hover.get();
        if let Some(canvas) = canvas_ref.get() {
            samples.with_value(|samples| draw(&canvas, samples, hover_x));
        }
    });

    view! {
        <section class="activity-chart">
            <div class="activity-chart__header">
                <h2>"Activité quotidienne"</h2>
                <div class="activity-chart__legend">
                    <LegendItem color=WEIGHT_COLOR label="Poids (kg)" />
                    <LegendItem color=CALORIES_COLOR label="Calories brûlées (kCal)" />
                </div>
            </div>
            <canvas
                node_ref=canvas_ref
                width="702"
                height="200"
                on:mousemove=move |ev: web_sys::MouseEvent| {
                    set_hover.set(Some(ev.offset_x() as f64))
                }
                on:mouseleave=move |_| set_hover.set(None)
            />
        </section>
    }
}

/// Legend entry with a colored dot
#[component]
fn LegendItem(color: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="activity-chart__legend-item">
            <span
                class="activity-chart__legend-dot"
                style=format!("background-color: {}", color)
            />
            <span>{label}</span>
        </div>
    }
}

/// Weight axis bounds: one unit of headroom on each side, snapped to
/// whole kilograms so every bar stays visible.
pub(crate) fn weight_range(samples: &[ActivitySample]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for sample in samples {
        min = min.min(sample.kilogram);
        max = max.max(sample.kilogram);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    ((min - 1.0).floor(), (max + 1.0).ceil())
}

/// Three horizontal grid positions: bottom, middle and top of the weight
/// axis. A degenerate range is forced open by one unit.
pub(crate) fn axis_ticks(min: f64, max: f64) -> [f64; 3] {
    let max = if max - min < 1.0 { min + 1.0 } else { max };
    [min, ((min + max) / 2.0).round(), max]
}

/// Calorie scale bounds with ±50 kcal of headroom
pub(crate) fn calorie_range(samples: &[ActivitySample]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for sample in samples {
        min = min.min(sample.calories);
        max = max.max(sample.calories);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    (min - 50.0, max + 50.0)
}

/// Index of the day band under the cursor, if any
pub(crate) fn hover_index(x: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let chart_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    if x < MARGIN_LEFT || x >= MARGIN_LEFT + chart_width {
        return None;
    }
    let band = chart_width / len as f64;
    let index = ((x - MARGIN_LEFT) / band) as usize;
    (index < len).then_some(index)
}

/// Tooltip lines for one hovered day
pub(crate) fn tooltip_lines(sample: &ActivitySample) -> [String; 2] {
    [
        format!("{}kg", sample.kilogram),
        format!("{}Kcal", sample.calories),
    ]
}

fn draw(canvas: &HtmlCanvasElement, samples: &[ActivitySample], hover_x: Option<f64>) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    ctx.set_fill_style(&"#FBFBFB".into());
    ctx.fill_rect(0.0, 0.0, WIDTH, HEIGHT);

    if samples.is_empty() {
        return;
    }

    let chart_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let band = chart_width / samples.len() as f64;

    let (weight_min, weight_max) = weight_range(samples);
    let ticks = axis_ticks(weight_min, weight_max);
    let (cal_min, cal_max) = calorie_range(samples);

    let weight_y =
        |value: f64| MARGIN_TOP + (ticks[2] - value) / (ticks[2] - ticks[0]) * chart_height;
    let calorie_y = |value: f64| MARGIN_TOP + (cal_max - value) / (cal_max - cal_min) * chart_height;

    let hovered = hover_x.and_then(|x| hover_index(x, samples.len()));

    // Highlight the hovered day band behind the bars
    if let Some(index) = hovered {
        ctx.set_fill_style(&"rgba(196, 196, 196, 0.3)".into());
        ctx.fill_rect(
            MARGIN_LEFT + index as f64 * band,
            MARGIN_TOP,
            band,
            chart_height,
        );
    }

    // Grid lines with weight labels on the right
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for tick in ticks {
        let y = weight_y(tick);
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(MARGIN_LEFT + chart_width, y);
        ctx.stroke();

        ctx.set_fill_style(&AXIS_COLOR.into());
        let _ = ctx.fill_text(&format!("{}", tick), WIDTH - MARGIN_RIGHT + 12.0, y + 4.0);
    }

    // One weight and one calorie bar per day, day label underneath
    let baseline = MARGIN_TOP + chart_height;
    for (index, sample) in samples.iter().enumerate() {
        let center = MARGIN_LEFT + index as f64 * band + band / 2.0;

        ctx.set_fill_style(&WEIGHT_COLOR.into());
        rounded_bar(
            &ctx,
            center - BAR_GAP / 2.0 - BAR_WIDTH,
            weight_y(sample.kilogram),
            baseline,
        );

        ctx.set_fill_style(&CALORIES_COLOR.into());
        rounded_bar(&ctx, center + BAR_GAP / 2.0, calorie_y(sample.calories), baseline);

        ctx.set_fill_style(&AXIS_COLOR.into());
        let _ = ctx.fill_text(&sample.day, center - 4.0, HEIGHT - 8.0);
    }

    // Tooltip beside the hovered band
    if let Some(index) = hovered {
        let lines = tooltip_lines(&samples[index]);
        let left = (MARGIN_LEFT + index as f64 * band + band).min(WIDTH - 60.0);

        ctx.set_fill_style(&CALORIES_COLOR.into());
        ctx.fill_rect(left, MARGIN_TOP, 52.0, 44.0);
        ctx.set_fill_style(&"#FFFFFF".into());
        ctx.set_font("10px sans-serif");
        let _ = ctx.fill_text(&lines[0], left + 8.0, MARGIN_TOP + 18.0);
        let _ = ctx.fill_text(&lines[1], left + 8.0, MARGIN_TOP + 34.0);
    }
}

/// Bar with a rounded cap, drawn from `top` down to `baseline`
fn rounded_bar(ctx: &CanvasRenderingContext2d, x: f64, top: f64, baseline: f64) {
    let radius = BAR_WIDTH / 2.0;
    let top = top.min(baseline - radius);
    ctx.begin_path();
    let _ = ctx.arc(x + radius, top + radius, radius, std::f64::consts::PI, 0.0);
    ctx.fill();
    ctx.fill_rect(x, top + radius, BAR_WIDTH, baseline - top - radius);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kilogram: f64, calories: f64) -> ActivitySample {
        ActivitySample {
            day: "1".to_string(),
            kilogram,
            calories,
        }
    }

    #[test]
    fn weight_range_adds_one_unit_of_headroom() {
        let samples = [sample(79.0, 0.0), sample(80.0, 0.0), sample(81.0, 0.0)];
        assert_eq!(weight_range(&samples), (78.0, 82.0));
    }

    #[test]
    fn weight_range_handles_an_empty_series() {
        assert_eq!(weight_range(&[]), (0.0, 1.0));
    }

    #[test]
    fn ticks_are_bottom_middle_top() {
        assert_eq!(axis_ticks(78.0, 82.0), [78.0, 80.0, 82.0]);
    }

    #[test]
    fn ticks_force_open_a_degenerate_range() {
        assert_eq!(axis_ticks(5.0, 5.0), [5.0, 6.0, 6.0]);
    }

    #[test]
    fn calorie_range_adds_fifty_kcal_of_headroom() {
        let samples = [sample(0.0, 160.0), sample(0.0, 390.0)];
        assert_eq!(calorie_range(&samples), (110.0, 440.0));
    }

    #[test]
    fn hover_maps_into_day_bands() {
        // Chart area spans [10, 657) split into 7 bands of ~92.4px.
        assert_eq!(hover_index(10.0, 7), Some(0));
        assert_eq!(hover_index(150.0, 7), Some(1));
        assert_eq!(hover_index(656.0, 7), Some(6));
    }

    #[test]
    fn hover_outside_the_chart_area_is_ignored() {
        assert_eq!(hover_index(5.0, 7), None);
        assert_eq!(hover_index(690.0, 7), None);
        assert_eq!(hover_index(100.0, 0), None);
    }

    #[test]
    fn tooltip_shows_weight_then_calories() {
        let lines = tooltip_lines(&sample(80.0, 240.0));
        assert_eq!(lines[0], "80kg");
        assert_eq!(lines[1], "240Kcal");
    }
}
