// demos/plot_price_curves.rs

//! Plots Black-Scholes call and put prices against spot for a fixed strike,
//! together with the undiscounted intrinsic values, and writes the chart to
//! price_curves.svg in the working directory.
//!
//! Usage:
//!     cargo run --example plot_price_curves

use std::error::Error;

use blackscholes_lib::{bs_call_price, bs_put_price};
use plotters::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    let strike = 100.0;
    let r = 0.02;
    let sigma = 0.25;
    let q = 0.0;
    let t = 0.5;

    // Sample spots from deep OTM to deep ITM
    let steps = 400;
    let spot_min = 40.0;
    let spot_max = 160.0;

    let mut call_line = Vec::with_capacity(steps + 1);
    let mut put_line = Vec::with_capacity(steps + 1);
    let mut call_intrinsic = Vec::with_capacity(steps + 1);
    let mut put_intrinsic = Vec::with_capacity(steps + 1);

    for i in 0..=steps {
        let spot = spot_min + (spot_max - spot_min) * (i as f64) / (steps as f64);
        call_line.push((spot, bs_call_price(spot, strike, r, sigma, q, t)));
        put_line.push((spot, bs_put_price(spot, strike, r, sigma, q, t)));
        call_intrinsic.push((spot, (spot - strike).max(0.0)));
        put_intrinsic.push((spot, (strike - spot).max(0.0)));
    }

    let max_price = call_line
        .iter()
        .chain(put_line.iter())
        .map(|&(_, p)| p)
        .fold(f64::NEG_INFINITY, f64::max);

    let root = SVGBackend::new("price_curves.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "Black-Scholes prices vs spot | K={:.0}, sigma={:.0}%, r={:.0}%, t={:.2}y",
                strike,
                sigma * 100.0,
                r * 100.0,
                t
            ),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(spot_min..spot_max, 0.0..max_price * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("Spot ($)")
        .y_desc("Option Price ($)")
        .draw()?;

    chart
        .draw_series(vec![PathElement::new(call_line, RED.stroke_width(2))])?
        .label("Call")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .draw_series(vec![PathElement::new(put_line, BLUE.stroke_width(2))])?
        .label("Put")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    // Intrinsic values as thin reference lines
    chart.draw_series(vec![PathElement::new(call_intrinsic, RED.mix(0.3))])?;
    chart.draw_series(vec![PathElement::new(put_intrinsic, BLUE.mix(0.3))])?;

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    println!("Chart saved to price_curves.svg");
    Ok(())
}
