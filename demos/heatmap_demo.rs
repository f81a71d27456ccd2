// demos/heatmap_demo.rs
// Builds the call/put sensitivity grids for a scenario and renders them as
// two annotated heatmaps (spot on x, volatility on y) in heatmap.svg, plus
// CSV exports of both matrices.
//
// Usage:
//     cargo run --example heatmap_demo [-- <scenario.toml>]
//
// Without an argument the reference scenario is used (spot 100, strike 95,
// vol 20%, 6 months, r 5%, d 1%). The TOML file may override any subset of
// the scenario fields and heatmap bounds.

use std::env;
use std::error::Error;
use std::fs;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use heatmap_lib::{build_sensitivity_grid, price, OptionType, ScenarioConfig, SensitivityGrid};

/// Linear ramp between the viridis endpoints, dark purple to yellow.
fn cell_color(t: f64) -> RGBColor {
    let lerp = |a: f64, b: f64| (a + (b - a) * t).round() as u8;
    RGBColor(lerp(68.0, 253.0), lerp(1.0, 231.0), lerp(84.0, 37.0))
}

fn draw_heatmap(
    area: &DrawingArea<SVGBackend, plotters::coord::Shift>,
    title: &str,
    grid: &SensitivityGrid,
    values: &[Vec<f64>],
) -> Result<(), Box<dyn Error>> {
    let n = grid.x_labels.len();

    let min_value = values
        .iter()
        .flatten()
        .fold(f64::INFINITY, |a, &b| a.min(b));
    let max_value = values
        .iter()
        .flatten()
        .fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let span = (max_value - min_value).max(f64::EPSILON);

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .caption(title, ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), -0.5f64..(n as f64 - 0.5))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_desc("Spot Price")
        .y_desc("Volatility")
        .x_label_formatter(&|v| {
            let i = v.round() as usize;
            grid.x_labels
                .get(i)
                .map(|l| format!("{:.2}", l))
                .unwrap_or_default()
        })
        .y_label_formatter(&|v| {
            let i = v.round() as usize;
            grid.y_labels
                .get(i)
                .map(|l| format!("{:.2}", l))
                .unwrap_or_default()
        })
        .draw()?;

    // Cell rectangles, centered on integer coordinates
    chart.draw_series(values.iter().enumerate().flat_map(|(y, row)| {
        row.iter().enumerate().map(move |(x, &v)| {
            let t = (v - min_value) / span;
            Rectangle::new(
                [
                    (x as f64 - 0.5, y as f64 - 0.5),
                    (x as f64 + 0.5, y as f64 + 0.5),
                ],
                cell_color(t).filled(),
            )
        })
    }))?;

    // Per-cell price annotations, dark text on bright cells and vice versa
    chart.draw_series(values.iter().enumerate().flat_map(|(y, row)| {
        row.iter().enumerate().map(move |(x, &v)| {
            let t = (v - min_value) / span;
            let text_color = if t < 0.5 { &WHITE } else { &BLACK };
            let style = ("sans-serif", 11)
                .into_font()
                .color(text_color)
                .pos(Pos::new(HPos::Center, VPos::Center));
            Text::new(format!("{:.2}", v), (x as f64, y as f64), style)
        })
    }))?;

    Ok(())
}

fn export_csv(path: &str, grid: &SensitivityGrid, values: &[Vec<f64>]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["volatility/spot".to_string()];
    header.extend(grid.x_labels.iter().map(|l| format!("{:.2}", l)));
    writer.write_record(&header)?;

    for (y_label, row) in grid.y_labels.iter().zip(values) {
        let mut record = vec![format!("{:.2}", y_label)];
        record.extend(row.iter().map(|v| format!("{:.2}", v)));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)?;
            let config = ScenarioConfig::from_toml_str(&text)?;
            println!("Loaded scenario from {}", path);
            config
        }
        None => {
            println!("No scenario file given, using the reference scenario");
            ScenarioConfig::default()
        }
    };

    let params = config.params();
    println!("Call Price: ${:.2}", price(OptionType::Call, &params)?);
    println!("Put Price:  ${:.2}", price(OptionType::Put, &params)?);

    let bounds = config.grid_bounds();
    let grid = build_sensitivity_grid(&bounds, &config.scenario_params())?;
    println!(
        "Grid: spot [{:.2}, {:.2}] x volatility [{:.2}, {:.2}], {} x {} cells",
        bounds.min_spot,
        bounds.max_spot,
        bounds.min_volatility,
        bounds.max_volatility,
        grid.y_labels.len(),
        grid.x_labels.len()
    );

    let root = SVGBackend::new("heatmap.svg", (1500, 760)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    draw_heatmap(&panels[0], "CALL", &grid, &grid.call_values)?;
    draw_heatmap(&panels[1], "PUT", &grid, &grid.put_values)?;
    root.present()?;
    println!("Heatmaps saved to heatmap.svg");

    export_csv("heatmap_call.csv", &grid, &grid.call_values)?;
    export_csv("heatmap_put.csv", &grid, &grid.put_values)?;
    println!("Matrices exported to heatmap_call.csv / heatmap_put.csv");

    Ok(())
}
