//! Box-drawn terminal report.

use crate::models::{ReportRow, SubnetReport, SECTION_IP_INFO};
use colored::Colorize;

/// Lay out report rows as text lines, one `[Section]` header per section.
///
/// Keeps the classic layout: a leading blank line, an extra blank after the
/// first header and blank lines around sections.
pub fn report_lines(rows: &[ReportRow]) -> Vec<String> {
    let mut lines = vec![String::new()];
    let mut current_section: Option<&str> = None;

    for row in rows {
        if current_section != Some(row.section) {
            if current_section.is_some() {
                lines.push(String::new());
            }
            lines.push(format!("[{}]", row.section));
            if row.section == SECTION_IP_INFO {
                lines.push(String::new());
            }
            current_section = Some(row.section);
        }
        lines.push(format!("{}: {}", row.field, row.value));
    }

    lines.push(String::new());
    lines.push(String::new());
    lines
}

/// Draw `lines` centered inside a `+---+` / `| |` box.
///
/// Widths are measured on the plain text. With `color` set, section
/// headers are colored after padding so the borders stay aligned.
pub fn create_box(lines: &[String], color: bool) -> String {
    let lines: Vec<String> = lines.iter().map(|l| l.replace('\t', "    ")).collect();
    let max_len = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let border = format!("+{}+", "-".repeat(max_len + 2));

    let mut out = vec![border.clone()];
    for line in &lines {
        let len = line.chars().count();
        let padding_left = (max_len - len) / 2;
        let padding_right = max_len - len - padding_left;
        let text = if color && line.starts_with('[') {
            line.bold().cyan().to_string()
        } else {
            line.to_string()
        };
        out.push(format!(
            "| {}{}{} |",
            " ".repeat(padding_left),
            text,
            " ".repeat(padding_right)
        ));
    }
    out.push(border);
    out.join("\n")
}

/// Render the full boxed report.
pub fn render_box(report: &SubnetReport, color: bool) -> String {
    create_box(&report_lines(&report.rows()), color)
}
