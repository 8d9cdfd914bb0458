//! Output formatting for CLI commands.
//!
//! Renderers build the whole output as a `String` so that commands decide
//! where it goes and tests can inspect it.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, RankerArgs};
use crate::error::{RankerError, Result};
use crate::model::Entity;
use crate::ranker::{Batch, ScoreResult};

/// What the model sees in a single résumé.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inspection {
    /// Original filename.
    pub filename: String,
    /// Number of characters of extracted text.
    pub characters: usize,
    /// Distinct normalized lemmas, sorted.
    pub lemmas: Vec<String>,
    /// Recognized entities in document order.
    pub entities: Vec<Entity>,
    /// Extracted candidate name.
    pub name: String,
    /// Extracted candidate email.
    pub email: String,
}

const LEADERBOARD_HEADERS: [&str; 6] = [
    "Rank",
    "Name",
    "Match Score",
    "Keyword Match",
    "Email",
    "Filename",
];

/// Render a ranked batch in the requested format.
pub fn render_batch(batch: &Batch, args: &RankerArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(render_batch_human(batch)),
        OutputFormat::Json => render_json(batch, args.pretty),
        OutputFormat::Csv => Ok(render_batch_csv(batch)),
    }
}

/// Render an inspection report in the requested format.
pub fn render_inspection(inspection: &Inspection, args: &RankerArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(render_inspection_human(inspection)),
        OutputFormat::Json => render_json(inspection, args.pretty),
        OutputFormat::Csv => Ok(render_inspection_csv(inspection)),
    }
}

/// Best-match summary followed by the leaderboard table.
pub fn render_batch_human(batch: &Batch) -> String {
    let mut out = String::new();

    if let Some(best) = batch.first() {
        let _ = writeln!(out, "Best Match: {}", best.name);
        let _ = writeln!(out, "══════════");
        let _ = writeln!(out, "Overall score:       {}", format_match_score(best));
        let _ = writeln!(out, "Semantic similarity: {:.2}", best.semantic_similarity);
        let _ = writeln!(out, "Keyword match:       {}", format_keyword_match(best));
        let _ = writeln!(out, "Email:               {}", best.email);
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Leaderboard:");
    let _ = writeln!(out, "════════════");

    let rows: Vec<[String; 6]> = batch
        .iter()
        .map(|result| {
            [
                result.rank.to_string(),
                result.name.clone(),
                format_match_score(result),
                format_keyword_match(result),
                result.email.clone(),
                result.filename.clone(),
            ]
        })
        .collect();

    let mut widths = LEADERBOARD_HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let headers = LEADERBOARD_HEADERS.map(String::from);
    push_row(&mut out, &headers, &widths);
    let rule = widths.map(|width| "─".repeat(width));
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    out
}

fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{cell}{}", " ".repeat(fill))
}

fn format_match_score(result: &ScoreResult) -> String {
    format!("{:.1}%", result.match_score)
}

fn format_keyword_match(result: &ScoreResult) -> String {
    format!("{:.0}%", result.keyword_match * 100.0)
}

/// One header line and one row per result.
pub fn render_batch_csv(batch: &Batch) -> String {
    let mut out = String::from(
        "rank,name,email,match_score,semantic_similarity,keyword_match,filename\n",
    );

    for result in batch {
        let _ = writeln!(
            out,
            "{},{},{},{:.2},{:.4},{:.4},{}",
            result.rank,
            csv_field(&result.name),
            csv_field(&result.email),
            result.match_score,
            result.semantic_similarity,
            result.keyword_match,
            csv_field(&result.filename)
        );
    }

    out
}

fn render_inspection_human(inspection: &Inspection) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Inspection: {}", inspection.filename);
    let _ = writeln!(out, "═══════════");
    let _ = writeln!(out, "Characters: {}", inspection.characters);
    let _ = writeln!(out, "Name:       {}", inspection.name);
    let _ = writeln!(out, "Email:      {}", inspection.email);
    let _ = writeln!(out);

    let _ = writeln!(out, "Entities:");
    let _ = writeln!(out, "─────────");
    if inspection.entities.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for entity in &inspection.entities {
        let _ = writeln!(
            out,
            "  {} [{}] {}..{}",
            entity.text, entity.label, entity.start, entity.end
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Lemmas ({}):", inspection.lemmas.len());
    let _ = writeln!(out, "──────");
    let _ = writeln!(out, "  {}", inspection.lemmas.join(" "));

    out
}

fn render_inspection_csv(inspection: &Inspection) -> String {
    let mut out = String::from("key,value\n");
    let _ = writeln!(out, "filename,{}", csv_field(&inspection.filename));
    let _ = writeln!(out, "characters,{}", inspection.characters);
    let _ = writeln!(out, "name,{}", csv_field(&inspection.name));
    let _ = writeln!(out, "email,{}", csv_field(&inspection.email));
    let _ = writeln!(out, "lemmas,{}", csv_field(&inspection.lemmas.join(" ")));
    let entities = inspection
        .entities
        .iter()
        .map(|e| format!("{}:{}", e.label, e.text))
        .collect::<Vec<_>>()
        .join("; ");
    let _ = writeln!(out, "entities,{}", csv_field(&entities));
    out
}

fn render_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json + "\n")
}

/// Quote a CSV field when it contains a separator, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

/// Print rendered output to stdout.
pub fn emit(rendered: &str) -> Result<()> {
    use std::io::Write as _;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .map_err(|e| RankerError::other(format!("failed to write output: {e}")))
}
