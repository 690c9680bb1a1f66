//! Writes `sample_weather.csv`: a small mixed-type table for trying out the viewer.
//!
//! Usage: `cargo run --bin generate_sample [OUTPUT]`

use std::f64::consts::PI;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

const DAYS: usize = 120;
const CITIES: &[(&str, f64)] = &[("Oslo", 6.0), ("Madrid", 16.0), ("Cairo", 23.0)];

#[derive(Debug, Serialize)]
struct Row {
    date: String,
    city: &'static str,
    day: usize,
    temperature: f64,
    humidity: i64,
    /// Left empty on some days so the column loads with gaps.
    rainfall: Option<f64>,
    sunny: bool,
}

/// Deterministic pseudo-noise in [-1, 1] without pulling in an RNG.
fn wobble(seed: usize) -> f64 {
    let x = (seed as f64 * 12.9898).sin() * 43758.5453;
    (x - x.floor()) * 2.0 - 1.0
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn rows() -> Vec<Row> {
    let mut out = Vec::with_capacity(DAYS * CITIES.len());
    for day in 0..DAYS {
        let season = (2.0 * PI * day as f64 / 365.0).sin();
        let month = 1 + day / 30;
        let dom = 1 + day % 30;
        for (c, &(city, base)) in CITIES.iter().enumerate() {
            let seed = day * CITIES.len() + c;
            let temperature = round1(base + 8.0 * season + 3.0 * wobble(seed));
            let humidity = (60.0 + 25.0 * wobble(seed + 7919)).round() as i64;
            let rain = 4.0 + 6.0 * wobble(seed + 104_729);
            let rainfall = (seed % 11 != 0).then(|| round1(rain.max(0.0)));
            out.push(Row {
                date: format!("2024-{month:02}-{dom:02}"),
                city,
                day: day + 1,
                temperature,
                humidity,
                rainfall,
                sunny: rain <= 0.0,
            });
        }
    }
    out
}

fn main() -> Result<()> {
    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_weather.csv"));

    let mut writer = csv::WriterBuilder::new()
        .from_path(&output)
        .with_context(|| format!("creating {}", output.display()))?;

    let rows = rows();
    for row in &rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {} rows to {}", rows.len(), output.display());
    Ok(())
}
