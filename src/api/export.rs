use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Series;
use crate::error::{PlotError, PlotResult};

/// One table row handed to the document collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub index: usize,
    pub x: String,
    pub y: String,
}

/// Tabular document describing one sampled function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub title: String,
    pub description: String,
    pub rows: Vec<ExportRow>,
}

impl ExportDocument {
    pub const DEFAULT_TITLE: &'static str = "Function value table";

    /// Rows carry the index and both coordinates with 3 decimals.
    #[must_use]
    pub fn from_series(series: &Series, description: impl Into<String>) -> Self {
        let rows = series
            .iter()
            .enumerate()
            .map(|(index, sample)| ExportRow {
                index,
                x: format!("{:.3}", sample.x),
                y: format!("{:.3}", sample.y),
            })
            .collect();

        Self {
            title: Self::DEFAULT_TITLE.to_owned(),
            description: description.into(),
            rows,
        }
    }

    /// Self-contained A4 HTML page: description paragraph, then the table
    /// with an empty/`x`/`y` header row.
    #[must_use]
    pub fn to_html(&self) -> String {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    row.index, row.x, row.y
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "<!DOCTYPE html>
<html>
<head>
<meta charset=\"utf-8\">
<title>{title}</title>
<style>
@page {{ size: a4; margin: 1.5cm; }}
body {{ font-family: sans-serif; font-size: 11pt; }}
table {{ border-collapse: collapse; }}
th, td {{ padding: 2pt 10pt; border: 0.5pt solid #454349; }}
tr:nth-child(2n+1) {{ background-color: #f8f5fb; }}
tr:first-child {{ background-color: #f2f1f7; }}
th {{ text-align: center; }}
td {{ text-align: right; }}
</style>
</head>
<body>
<p>{description}</p>
<table>
<tr><th></th><th>x</th><th>y</th></tr>
{rows}
</table>
</body>
</html>
",
            title = escape_html(&self.title),
            description = escape_html(&self.description),
        )
    }
}

/// Seam to the external document generator (for example an HTML-to-PDF
/// converter).
pub trait DocumentBackend {
    fn write_document(&mut self, document: &ExportDocument, path: &Path) -> PlotResult<()>;
}

/// Writes the HTML form of the document as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFileBackend;

impl DocumentBackend for HtmlFileBackend {
    fn write_document(&mut self, document: &ExportDocument, path: &Path) -> PlotResult<()> {
        fs::write(path, document.to_html()).map_err(|err| {
            PlotError::Persistence(format!("failed to write `{}`: {err}", path.display()))
        })?;
        debug!(path = %path.display(), rows = document.rows.len(), "exported document");
        Ok(())
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
