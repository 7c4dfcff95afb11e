//! Terminal output helpers — dual-mode: styled text for humans, structured JSON for machines.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for grids
//! - `indicatif` for build progress

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{Cell, CellAlignment, Color, Table, presets::UTF8_FULL_CONDENSED};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use needle_core::{IntensityBand, IntensityGrid, NeedleGrid};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn emit_json(level: &str, message: &str, data: Option<&JsonValue>) {
    let msg = Msg {
        level,
        message,
        data,
    };
    let json = serde_json::to_string(&msg).unwrap_or_else(|_| {
        format!("{{\"level\":\"{level}\",\"message\":\"{message}\"}}")
    });
    println!("{json}");
}

// ── Public helpers ─────────────────────────────────────────────────

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn success(text: &str) {
    if is_json() {
        emit_json("success", text, None);
    } else {
        println!("{} {}", style("✓").green(), style(text).bright());
    }
}

pub fn error(text: &str) {
    if is_json() {
        let msg = Msg {
            level: "error",
            message: text,
            data: None,
        };
        let json = serde_json::to_string(&msg).unwrap_or_default();
        eprintln!("{json}");
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        emit_json("warning", text, None);
    } else {
        println!("{} {}", style("!").yellow(), style(text).bright());
    }
}

/// Print a key-value pair with styled key.
pub fn kv(key: &str, value: &str) {
    if is_json() {
        let data = serde_json::json!({ key: value });
        emit_json("info", key, Some(&data));
    } else {
        println!("  {} {}", style(key).cyan().bold(), value);
    }
}

/// Emit a serializable value. Text mode prints nothing; callers render their own view.
pub fn data<T: Serialize>(label: &str, value: &T) {
    if is_json() {
        let json_val = serde_json::to_value(value).unwrap_or(JsonValue::Null);
        emit_json("data", label, Some(&json_val));
    }
}

// ── Grids ──────────────────────────────────────────────────────────

fn grid_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table
}

fn band_color(band: IntensityBand) -> Color {
    match band {
        IntensityBand::High => Color::Green,
        IntensityBand::Medium => Color::Yellow,
        IntensityBand::Low => Color::DarkGrey,
    }
}

/// Gray values, colored by intensity band.
pub fn gray_grid(grid: &IntensityGrid) {
    if is_json() {
        return;
    }
    let mut table = grid_table();
    for row in grid {
        table.add_row(row.iter().map(|&v| {
            Cell::new(v)
                .fg(band_color(IntensityBand::classify(v)))
                .set_alignment(CellAlignment::Right)
        }));
    }
    println!("{table}");
}

/// Needle angle pairs, in radians.
pub fn needle_grid(grid: &NeedleGrid, gray: &IntensityGrid) {
    if is_json() {
        return;
    }
    let mut table = grid_table();
    for (row, values) in grid.iter().zip(gray) {
        table.add_row(row.iter().zip(values).map(|(angles, &v)| {
            Cell::new(format!("{:.3},{:.3}", angles.0, angles.1))
                .fg(band_color(IntensityBand::classify(v)))
        }));
    }
    println!("{table}");
}

// ── Progress ───────────────────────────────────────────────────────

/// Progress bar over `total` glyphs. Hidden in JSON mode.
pub fn progress(total: usize) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(total as u64);
    if let Ok(bar_style) =
        ProgressStyle::default_bar().template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
    {
        bar.set_style(bar_style.progress_chars("=> "));
    }
    bar
}
