//! Aligned plain-text tables for `--format table`.

const MIN_COLUMN_WIDTH: usize = 6;
const COLUMN_GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render a simple aligned table for string rows.
///
/// Numeric cells are right-aligned. When `max_width` is set the widest
/// columns are shrunk (never below their header) and overlong cells end in
/// `…`.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.len(), MIN_COLUMN_WIDTH])
                .max()
                .unwrap_or(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| pad(&truncate_text(header, width), width, false, false))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push("-".repeat(header_line.chars().count()));
    lines.insert(0, header_line);

    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let cell = truncate_text(row.get(index).map_or("-", String::as_str), width);
                let numeric = looks_numeric(&cell);
                let cell = if options.color {
                    colorize_status(&cell)
                } else {
                    cell
                };
                pad(&cell, width, numeric, options.color)
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        lines.push(line);
    }

    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let gaps = widths.len().saturating_sub(1) * COLUMN_GAP.len();

    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(idx, width)| (**width, std::cmp::Reverse(*idx)))
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ',' | '%'))
}

fn pad(value: &str, width: usize, right_align: bool, has_ansi: bool) -> String {
    let visible = if has_ansi {
        strip_ansi(value).chars().count()
    } else {
        value.chars().count()
    };
    let fill = " ".repeat(width.saturating_sub(visible));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn colorize_status(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "ok" | "true" | "pass" | "passed" | "declared" => "32",
        "warn" | "warning" | "advisory" | "undeclared" => "33",
        "fail" | "failed" | "false" | "blocking" | "missing" => "31",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}

fn strip_ansi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn numbers_are_right_aligned() {
        let table = render_entity_table(
            &["goal", "checks"],
            &[vec!["ftp".into(), "9".into()], vec!["climbing".into(), "12".into()]],
            PLAIN,
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "ftp            9");
        assert_eq!(lines[3], "climbing      12");
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let options = TableOptions {
            max_width: Some(30),
            color: false,
        };
        let table = render_entity_table(
            &["check", "message"],
            &[vec!["ftp/easy/A/short".into(), "details have no 'Main:' section".into()]],
            options,
        );
        assert!(table.lines().all(|line| line.chars().count() <= 30));
        assert!(table.contains('…'));
    }

    #[test]
    fn status_words_are_colored_and_stripped_back() {
        let colored = colorize_status("failed");
        assert!(colored.starts_with("\u{1b}[31m"));
        assert_eq!(strip_ansi(&colored), "failed");
        assert_eq!(colorize_status("ftp"), "ftp");
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let table = render_entity_table(&["a", "b"], &[vec!["x".into()]], PLAIN);
        assert!(table.lines().nth(2).is_some_and(|line| line.trim_end().ends_with('-')));
    }
}
