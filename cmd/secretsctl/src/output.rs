use chrono::Local;
use clap::ValueEnum;
use pkg_types::SecretRequest;
use pkg_types::table::{HEADERS, RequestRow, rows};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

pub fn print_requests(requests: &[SecretRequest], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print!("{}", render_table(&rows(requests, &Local))),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(requests)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(requests)?),
    }
    Ok(())
}

/// Left-aligned columns sized to the widest cell, header first.
pub fn render_table(rows: &[RequestRow]) -> String {
    let headers = HEADERS.map(|h| h.to_uppercase());
    let mut widths = headers.clone().map(|h| h.chars().count());
    for row in rows {
        for (i, cell) in row.cells().iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, headers.iter().map(String::as_str), &widths);
    for row in rows {
        push_line(&mut out, row.cells().into_iter(), &widths);
    }
    if rows.is_empty() {
        out.push_str("(no secret requests)\n");
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 5]) {
    let line = cells
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
        .collect::<Vec<_>>()
        .join("   ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str) -> RequestRow {
        RequestRow {
            id: id.to_string(),
            secret_name: name.to_string(),
            secret_type: "database".to_string(),
            status: "pending".to_string(),
            created: "2024-01-01 00:00:00".to_string(),
        }
    }

    #[test]
    fn empty_table_is_header_only() {
        let out = render_table(&[]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "ID   SECRET NAME   TYPE   STATUS   CREATED");
        assert_eq!(lines[1], "(no secret requests)");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn one_line_per_row() {
        let out = render_table(&[row("1", "db-prod"), row("12", "ci")]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "1    db-prod       database   pending   2024-01-01 00:00:00"
        );
        assert!(lines[2].starts_with("12   ci "));
    }
}
