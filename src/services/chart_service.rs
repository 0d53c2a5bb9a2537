use std::path::Path;

use plotters::prelude::*;

use crate::models::{DerivedPoint, PriceHistory, TripQuote};

/// Generate a PNG point chart of the price history
pub fn generate_chart(
    history: &PriceHistory<TripQuote>,
    title: &str,
    output: &Path,
    width: u32,
    height: u32,
) -> Result<(), String> {
    let points: Vec<DerivedPoint> = history.derive_series().collect();

    if points.len() < 2 {
        return Err(
            "❌ Not enough price data to generate chart (minimum 2 searches required).".to_string(),
        );
    }

    let backend = BitMapBackend::new(output, (width, height));
    let root = backend.into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| format!("Failed to fill canvas: {}", e))?;

    // Find price range
    let min_price = points.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
    let max_price = points
        .iter()
        .map(|p| p.price)
        .fold(f64::NEG_INFINITY, f64::max);

    // Add some padding to the price range
    let price_range = (max_price - min_price).max(1e-8); // Avoid division by zero
    let padding = price_range * 0.1;
    let y_min = (min_price - padding).max(0.0);
    let y_max = max_price + padding;

    // Get time range
    let x_min = points[0].date;
    let x_max = points[points.len() - 1].date;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| format!("Failed to build chart: {}", e))?;

    chart
        .configure_mesh()
        .y_desc("Total flight cost")
        .x_desc("Search time")
        .draw()
        .map_err(|e| format!("Failed to draw mesh: {}", e))?;

    // Draw price points as circles connected by lines
    for i in 0..points.len() {
        if i > 0 {
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![
                        (points[i - 1].date, points[i - 1].price),
                        (points[i].date, points[i].price),
                    ],
                    &BLUE,
                )))
                .map_err(|e| format!("Failed to draw line: {}", e))?;
        }
        chart
            .draw_series(std::iter::once(Circle::new(
                (points[i].date, points[i].price),
                3,
                BLUE.filled(),
            )))
            .map_err(|e| format!("Failed to draw point: {}", e))?;
    }

    root.present()
        .map_err(|e| format!("Failed to render chart: {}", e))?;

    Ok(())
}
