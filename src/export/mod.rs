//! CSV export for the summary and detail tables.
//!
//! Plain comma-separated text: one header row, one row per record, fields
//! quoted only when they contain a separator, quote, or line break.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::models::market::MarketReport;
use crate::models::serp::SerpDetailRow;

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row, escaping embedded quotes by doubling them.
fn write_row<W: Write>(w: &mut W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for field in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(field) {
            let escaped = field.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", field)?;
        }
    }
    writeln!(w)
}

/// Summary table: `Rank, Domain, Estimated Traffic, Share of Voice (%)`.
pub fn write_summary_csv<W: Write>(w: &mut W, report: &MarketReport) -> io::Result<()> {
    write_row(
        w,
        &[
            "Rank".to_string(),
            "Domain".to_string(),
            "Estimated Traffic".to_string(),
            "Share of Voice (%)".to_string(),
        ],
    )?;
    for row in &report.rows {
        write_row(
            w,
            &[
                row.rank.to_string(),
                row.domain.clone(),
                row.estimated_traffic.to_string(),
                row.share_of_voice_pct.to_string(),
            ],
        )?;
    }
    Ok(())
}

/// Detail table: one row per sampled SERP item, zero-CTR positions
/// included.
pub fn write_detail_csv<W: Write>(w: &mut W, rows: &[SerpDetailRow]) -> io::Result<()> {
    write_row(
        w,
        &[
            "keyword".to_string(),
            "search_volume".to_string(),
            "domain".to_string(),
            "url".to_string(),
            "title".to_string(),
            "position".to_string(),
            "ctr".to_string(),
            "estimated_traffic".to_string(),
        ],
    )?;
    for row in rows {
        write_row(
            w,
            &[
                row.keyword.clone(),
                row.search_volume.to_string(),
                row.domain.clone(),
                row.url.clone(),
                row.title.clone(),
                row.position.to_string(),
                row.ctr.to_string(),
                row.estimated_traffic.to_string(),
            ],
        )?;
    }
    Ok(())
}

/// Write the summary table to a file path.
pub fn export_summary(path: &Path, report: &MarketReport) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_summary_csv(&mut writer, report)?;
    writer.flush()
}

/// Write the detail table to a file path.
pub fn export_detail(path: &Path, rows: &[SerpDetailRow]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_detail_csv(&mut writer, rows)?;
    writer.flush()
}
