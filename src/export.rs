use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use rust_xlsxwriter::{Chart, ChartType, Format, Workbook};

use crate::forecast::MatchForecast;

/// Create (if needed) and return today's run directory under `base`.
pub fn run_dir(base: &Path) -> io::Result<PathBuf> {
    let dir = base.join(Local::now().format("%Y-%m-%d").to_string());
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Write the forecast to an xlsx report in `dir`.
///
/// One sheet holds the outcome split and the headline prediction, another
/// the total-points distribution with a column chart over it. Returns the
/// path of the written file.
pub fn write_report(
    dir: &Path,
    home_name: &str,
    away_name: &str,
    forecast: &MatchForecast,
) -> Result<PathBuf> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet().set_name("Outcomes")?;
    sheet.write_string_with_format(0, 0, "Outcome", &bold)?;
    sheet.write_string_with_format(0, 1, "Probability (%)", &bold)?;
    let rows = [
        ("Home Win", forecast.outcomes.home_win),
        ("Away Win", forecast.outcomes.away_win),
        ("Draw", forecast.outcomes.draw),
    ];
    for (i, (label, pct)) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, *label)?;
        sheet.write_number(row, 1, *pct)?;
    }
    sheet.write_string(
        5,
        0,
        format!(
            "Predicted outcome: {} ({:.2}%)",
            forecast.best_outcome, forecast.best_outcome_pct
        ),
    )?;

    let sheet = workbook.add_worksheet().set_name("Total Points")?;
    sheet.write_string_with_format(0, 0, "Total Points", &bold)?;
    sheet.write_string_with_format(0, 1, "Probability (%)", &bold)?;
    for (i, (points, pct)) in forecast.total_points.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_number(row, 0, *points as f64)?;
        sheet.write_number(row, 1, *pct)?;
    }

    let last_row = forecast.total_points.len() as u32;
    let mut chart = Chart::new(ChartType::Column);
    chart
        .add_series()
        .set_categories(("Total Points", 1, 0, last_row, 0))
        .set_values(("Total Points", 1, 1, last_row, 1))
        .set_name("Probability (%)");
    sheet.insert_chart(1, 3, &chart)?;

    let path = dir.join(format!("{home_name}_vs_{away_name}.xlsx"));
    workbook
        .save(&path)
        .with_context(|| format!("failed to write report {}", path.display()))?;
    Ok(path)
}
