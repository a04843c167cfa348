//! Score Chart
//!
//! Radial goal-completion gauge with the percentage in the center. The
//! arc is anchored at the top and sweeps proportionally to the score.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const WIDTH: f64 = 258.0;
const HEIGHT: f64 = 263.0;
const RADIUS: f64 = 80.0;
const ARC_WIDTH: f64 = 12.0;

/// Goal score gauge component
#[component]
pub fn ScoreChart(score: f64) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw(&canvas, score);
        }
    });

    view! {
        <section class="score-chart">
            <canvas node_ref=canvas_ref width="258" height="263" />
        </section>
    }
}

/// Displayed percentage: the clamped score times 100
pub(crate) fn score_percent(score: f64) -> String {
    format!("{:.0}%", score.clamp(0.0, 1.0) * 100.0)
}

/// Arc sweep in radians for a goal-completion fraction
pub(crate) fn arc_sweep(score: f64) -> f64 {
    score.clamp(0.0, 1.0) * std::f64::consts::TAU
}

fn draw(canvas: &HtmlCanvasElement, score: f64) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    ctx.set_fill_style(&"#FBFBFB".into());
    ctx.fill_rect(0.0, 0.0, WIDTH, HEIGHT);

    ctx.set_fill_style(&"#20253A".into());
    ctx.set_font("15px sans-serif");
    let _ = ctx.fill_text("Score", 20.0, 30.0);

    let cx = WIDTH / 2.0;
    let cy = HEIGHT / 2.0 + 10.0;

    // White inner disc behind the center text
    ctx.set_fill_style(&"#FFFFFF".into());
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, RADIUS - ARC_WIDTH / 2.0, 0.0, std::f64::consts::TAU);
    ctx.fill();

    // Progression arc, anchored at the top
    let start = -std::f64::consts::FRAC_PI_2;
    ctx.set_stroke_style(&"#FF0000".into());
    ctx.set_line_width(ARC_WIDTH);
    ctx.set_line_cap("round");
    ctx.begin_path();
    let _ = ctx.arc_with_anticlockwise(cx, cy, RADIUS, start, start - arc_sweep(score), true);
    ctx.stroke();

    // Centered percentage and caption
    ctx.set_text_align("center");
    ctx.set_fill_style(&"#282D30".into());
    ctx.set_font("bold 26px sans-serif");
    let _ = ctx.fill_text(&score_percent(score), cx, cy - 10.0);
    ctx.set_fill_style(&"#74798C".into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text("de votre", cx, cy + 14.0);
    let _ = ctx.fill_text("objectif", cx, cy + 34.0);
    ctx.set_text_align("start");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_percentage_is_the_score_times_one_hundred() {
        assert_eq!(score_percent(0.12), "12%");
        assert_eq!(score_percent(0.3), "30%");
        assert_eq!(score_percent(1.0), "100%");
    }

    #[test]
    fn out_of_range_scores_are_clamped_before_display() {
        assert_eq!(score_percent(1.5), "100%");
        assert_eq!(score_percent(-0.4), "0%");
    }

    #[test]
    fn the_sweep_is_proportional_to_the_score() {
        assert_eq!(arc_sweep(0.0), 0.0);
        assert_eq!(arc_sweep(0.5), std::f64::consts::PI);
        assert_eq!(arc_sweep(1.0), std::f64::consts::TAU);
        assert_eq!(arc_sweep(2.0), std::f64::consts::TAU);
    }
}
