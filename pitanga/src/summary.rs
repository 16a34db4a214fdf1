//! Fixed-format text summary of a loaded table.
//!
//! The line layout is relied on by people comparing reports, so every list is
//! capped the same way: at most [`LIST_LIMIT`] items, with `...` glued to the
//! end when more exist.

use crate::loader::{LoadedSource, SourceKind};
use crate::table::{Column, Table};

/// Most items listed in any comma-joined line.
pub const LIST_LIMIT: usize = 8;

/// Most numeric columns given a statistics line.
pub const NUMERIC_LIMIT: usize = 5;

/// Appended to a capped list that had more items.
pub const MORE_MARKER: &str = "...";

/// Printed instead of the missing list when nothing is missing.
pub const NO_MISSING_LINE: &str = "no missing values.";

/// Separator between thousands groups in counts.
const THOUSANDS_SEPARATOR: char = '.';

/// Ordered report lines, built once per analysis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryReport {
    lines: Vec<String>,
}

impl SummaryReport {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// A report made of one line, used for prompts and errors.
    pub fn single(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

/// min, mean, median and max of a numeric column's present values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub min: f64,
    pub mean: f64,
    pub median: f64,
    pub max: f64,
}

impl ColumnStats {
    /// Stats over `values`; all NaN when there are none.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                min: f64::NAN,
                mean: f64::NAN,
                median: f64::NAN,
                max: f64::NAN,
            };
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Self {
            min,
            mean,
            median: median(values),
            max,
        }
    }
}

/// Median of the values; NaN when empty. Even counts average the two middles.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Report for a whole source: origin lines, then the table summary.
pub fn summarize_source(source: &LoadedSource) -> SummaryReport {
    let mut lines = Vec::new();
    match &source.kind {
        SourceKind::Workbook { extension } => {
            lines.push(format!("type: excel ({})", extension));
            lines.push(format!(
                "sheets: {} -> {}",
                source.sheet_names.len(),
                capped_list(&source.sheet_names)
            ));
        }
        SourceKind::Delimited => {
            lines.push("type: csv".to_string());
            let rows = group_thousands(source.table.row_count());
            if source.truncated {
                lines.push(format!("rows read (sample of first {}): {}", rows, rows));
            } else {
                lines.push(format!("rows read (total): {}", rows));
            }
        }
    }
    lines.extend(summarize_table(&source.table, source.sheet.as_deref()));
    SummaryReport::new(lines)
}

/// Summary lines for a table, optionally naming the sheet it came from.
pub fn summarize_table(table: &Table, sheet: Option<&str>) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(sheet) = sheet {
        lines.push(format!("sheet analysed: {}", sheet));
    }

    lines.push(format!(
        "dimensions: {} rows x {} columns",
        group_thousands(table.row_count()),
        group_thousands(table.column_count())
    ));

    let names: Vec<&str> = table.column_names().collect();
    lines.push(format!("columns: {}", capped_list(&names)));

    let types: Vec<String> = table
        .columns()
        .iter()
        .map(|c| format!("{}:{}", c.name(), c.column_type()))
        .collect();
    lines.push(format!("types (sample): {}", capped_list(&types)));

    lines.push(missing_line(table));
    lines.extend(numeric_lines(table));
    lines
}

fn missing_line(table: &Table) -> String {
    let mut counts: Vec<(&str, usize)> = table
        .columns()
        .iter()
        .map(|c| (c.name(), c.missing_count()))
        .filter(|(_, n)| *n > 0)
        .collect();
    if counts.is_empty() {
        return NO_MISSING_LINE.to_string();
    }
    // stable: ties keep column order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    let top: Vec<String> = counts
        .iter()
        .take(LIST_LIMIT)
        .map(|(name, n)| format!("{}:{}", name, n))
        .collect();
    format!("missing (top {}): {}", LIST_LIMIT, top.join(", "))
}

fn numeric_lines(table: &Table) -> Vec<String> {
    let numeric: Vec<&Column> = table
        .columns()
        .iter()
        .filter(|c| c.column_type().is_numeric())
        .collect();
    if numeric.is_empty() {
        return Vec::new();
    }
    let mut lines = vec!["numeric (sample):".to_string()];
    for column in numeric.into_iter().take(NUMERIC_LIMIT) {
        let stats = ColumnStats::from_values(&column.numeric_values());
        lines.push(format!(
            "  • {} -> min:{}, mean:{}, median:{}, max:{}",
            column.name(),
            format_rounded(stats.min),
            format_rounded(stats.mean),
            format_fixed2(stats.median),
            format_rounded(stats.max)
        ));
    }
    lines
}

/// Comma-join at most [`LIST_LIMIT`] items, appending [`MORE_MARKER`] if
/// any were left out.
pub fn capped_list<S: AsRef<str>>(items: &[S]) -> String {
    let shown: Vec<&str> = items.iter().take(LIST_LIMIT).map(AsRef::<str>::as_ref).collect();
    let mut out = shown.join(", ");
    if items.len() > LIST_LIMIT {
        out.push_str(MORE_MARKER);
    }
    out
}

/// `1234567` -> `1.234.567`.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Values at or above this magnitude print in exponent form, `1e+16`.
const EXPONENT_FROM: f64 = 1e16;

/// Round to 2 decimals, ties to even, and print the shortest form keeping at
/// least one fractional digit: `3.0`, `2.46`, `-0.5`, `1e+16`.
pub fn format_rounded(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let scaled = v * 100.0;
    let rounded = if scaled.is_finite() {
        scaled.round_ties_even() / 100.0
    } else {
        v
    };
    // avoid "-0.0" for tiny negatives
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    if rounded.abs() >= EXPONENT_FROM {
        return format_exponent(rounded);
    }
    let s = rounded.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{}.0", s)
    }
}

/// `1.5e16` -> `1.5e+16`, `1e-5` -> `1e-05`.
fn format_exponent(v: f64) -> String {
    let s = format!("{:e}", v);
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => s,
    }
}

/// Exactly two decimals: `2.50`.
pub fn format_fixed2(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    format!("{:.2}", v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Cell;

    fn table(names: &[&str], rows: Vec<Vec<Cell>>) -> Table {
        Table::from_rows(names.iter().map(|s| s.to_string()).collect(), rows)
    }

    fn wide_table(columns: usize, with_missing: bool) -> Table {
        let names: Vec<String> = (0..columns).map(|i| format!("c{}", i)).collect();
        let mut rows = vec![(0..columns).map(|i| Cell::Int(i as i64)).collect::<Vec<_>>()];
        let second = (0..columns)
            .map(|i| if with_missing { Cell::Missing } else { Cell::Int(i as i64 + 1) })
            .collect();
        rows.push(second);
        Table::from_rows(names, rows)
    }

    fn line_starting<'a>(lines: &'a [String], prefix: &str) -> &'a str {
        lines
            .iter()
            .find(|l| l.starts_with(prefix))
            .unwrap_or_else(|| panic!("no line starting with {:?} in {:?}", prefix, lines))
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1.000");
        assert_eq!(group_thousands(50_000), "50.000");
        assert_eq!(group_thousands(1_234_567), "1.234.567");
    }

    #[test]
    fn test_format_rounded() {
        assert_eq!(format_rounded(3.0), "3.0");
        assert_eq!(format_rounded(2.456), "2.46");
        assert_eq!(format_rounded(2.5), "2.5");
        assert_eq!(format_rounded(-0.001), "0.0");
        assert_eq!(format_rounded(1234.0), "1234.0");
        assert_eq!(format_rounded(f64::NAN), "nan");
    }

    #[test]
    fn test_format_rounded_ties_to_even() {
        assert_eq!(format_rounded(1.125), "1.12");
        assert_eq!(format_rounded(1.375), "1.38");
        assert_eq!(format_rounded(-1.125), "-1.12");
    }

    #[test]
    fn test_format_rounded_large_values_use_exponent() {
        assert_eq!(format_rounded(1e16), "1e+16");
        assert_eq!(format_rounded(-2.5e20), "-2.5e+20");
        assert_eq!(format_rounded(1e15), "1000000000000000.0");
    }

    #[test]
    fn test_tied_mean_and_median_agree() {
        let t = table(&["preco"], vec![vec![Cell::Float(1.0)], vec![Cell::Float(1.25)]]);
        let lines = summarize_table(&t, None);
        assert_eq!(
            lines.last().unwrap(),
            "  • preco -> min:1.0, mean:1.12, median:1.12, max:1.25"
        );
    }

    #[test]
    fn test_format_fixed2() {
        assert_eq!(format_fixed2(2.5), "2.50");
        assert_eq!(format_fixed2(10.0), "10.00");
        assert_eq!(format_fixed2(f64::NAN), "nan");
    }

    #[test]
    fn test_median() {
        assert!(median(&[]).is_nan());
        assert_eq!(median(&[5.0]), 5.0);
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn test_median_uses_raw_values_not_rounded_stats() {
        let values = [1.004, 1.006, 1.001, 1.009];
        let stats = ColumnStats::from_values(&values);
        let direct = (1.004 + 1.006) / 2.0;
        assert_eq!(stats.median, direct);
        assert_eq!(format_fixed2(stats.median), format!("{:.2}", direct));
    }

    #[test]
    fn test_capped_list_marker_only_when_more() {
        let eight: Vec<String> = (0..8).map(|i| i.to_string()).collect();
        assert_eq!(capped_list(&eight), "0, 1, 2, 3, 4, 5, 6, 7");
        let nine: Vec<String> = (0..9).map(|i| i.to_string()).collect();
        assert_eq!(capped_list(&nine), "0, 1, 2, 3, 4, 5, 6, 7...");
        let none: Vec<String> = Vec::new();
        assert_eq!(capped_list(&none), "");
    }

    #[test]
    fn test_dimension_line_matches_shape() {
        for (cols, rows) in [(1usize, 0usize), (3, 2), (12, 1500)] {
            let names: Vec<String> = (0..cols).map(|i| format!("c{}", i)).collect();
            let body = (0..rows).map(|r| vec![Cell::Int(r as i64); cols]).collect();
            let t = Table::from_rows(names, body);
            let lines = summarize_table(&t, None);
            assert_eq!(
                lines[0],
                format!("dimensions: {} rows x {} columns", group_thousands(rows), cols)
            );
        }
    }

    #[test]
    fn test_lists_capped_at_eight() {
        let lines = summarize_table(&wide_table(8, true), None);
        assert!(!line_starting(&lines, "columns: ").ends_with(MORE_MARKER));
        assert!(!line_starting(&lines, "types (sample): ").ends_with(MORE_MARKER));
        let missing = line_starting(&lines, "missing (top 8): ");
        assert_eq!(missing.matches(':').count(), 1 + 8);

        let lines = summarize_table(&wide_table(9, true), None);
        let columns = line_starting(&lines, "columns: ");
        assert!(columns.ends_with("c7..."));
        assert!(!columns.contains("c8"));
        let types = line_starting(&lines, "types (sample): ");
        assert!(types.ends_with("c7:float64..."));
        let missing = line_starting(&lines, "missing (top 8): ");
        assert_eq!(missing.split(", ").count(), 8);
        assert!(!missing.contains("c8"));
    }

    #[test]
    fn test_no_missing_line_alone() {
        let lines = summarize_table(&wide_table(3, false), None);
        assert!(lines.iter().any(|l| l == NO_MISSING_LINE));
        assert!(!lines.iter().any(|l| l.starts_with("missing")));
    }

    #[test]
    fn test_missing_sorted_descending_stable() {
        let t = table(
            &["a", "b", "c", "d"],
            vec![
                vec![Cell::Missing, Cell::Missing, Cell::Int(1), Cell::Missing],
                vec![Cell::Int(1), Cell::Missing, Cell::Int(1), Cell::Missing],
                vec![Cell::Int(1), Cell::Int(1), Cell::Int(1), Cell::Missing],
            ],
        );
        let lines = summarize_table(&t, None);
        assert_eq!(line_starting(&lines, "missing"), "missing (top 8): d:3, b:2, a:1");
    }

    #[test]
    fn test_numeric_lines_only_numeric_and_capped() {
        let mut names = vec!["txt".to_string(), "flag".to_string()];
        names.extend((0..7).map(|i| format!("n{}", i)));
        let mut row = vec![Cell::Text("x".into()), Cell::Bool(true)];
        row.extend((0..7).map(|i| Cell::Int(i)));
        let t = Table::from_rows(names, vec![row.clone(), row]);

        let lines = summarize_table(&t, None);
        let stats: Vec<&String> = lines.iter().filter(|l| l.starts_with("  • ")).collect();
        assert_eq!(stats.len(), NUMERIC_LIMIT);
        assert!(stats[0].starts_with("  • n0 -> "));
        assert!(stats.iter().all(|l| !l.contains("txt") && !l.contains("flag")));
    }

    #[test]
    fn test_numeric_line_format() {
        let t = table(
            &["preco"],
            vec![
                vec![Cell::Float(1.0)],
                vec![Cell::Float(2.25)],
                vec![Cell::Missing],
                vec![Cell::Int(4)],
            ],
        );
        let lines = summarize_table(&t, None);
        assert_eq!(lines[lines.len() - 2], "numeric (sample):");
        assert_eq!(
            lines.last().unwrap(),
            "  • preco -> min:1.0, mean:2.42, median:2.25, max:4.0"
        );
    }

    #[test]
    fn test_no_numeric_section_without_numeric_columns() {
        let t = table(&["sabor"], vec![vec![Cell::Text("acai".into())]]);
        let lines = summarize_table(&t, None);
        assert!(!lines.iter().any(|l| l.starts_with("numeric")));
    }

    #[test]
    fn test_all_missing_numeric_column_prints_nan() {
        let t = table(&["vazio"], vec![vec![Cell::Missing], vec![Cell::Missing]]);
        let lines = summarize_table(&t, None);
        assert_eq!(
            lines.last().unwrap(),
            "  • vazio -> min:nan, mean:nan, median:nan, max:nan"
        );
    }

    #[test]
    fn test_summarize_table_does_not_mutate() {
        let t = wide_table(4, true);
        let before = t.clone();
        let _ = summarize_table(&t, Some("Plan1"));
        assert_eq!(t, before);
    }

    #[test]
    fn test_summarize_workbook_source() {
        let sheet_names: Vec<String> = (1..=10).map(|i| format!("Plan{}", i)).collect();
        let source = LoadedSource {
            kind: SourceKind::Workbook {
                extension: ".xlsx".into(),
            },
            sheet_names,
            sheet: Some("Plan1".into()),
            table: table(&["a"], vec![vec![Cell::Int(1)]]),
            truncated: false,
        };
        let report = summarize_source(&source);
        let lines = report.lines();
        assert_eq!(lines[0], "type: excel (.xlsx)");
        assert_eq!(
            lines[1],
            "sheets: 10 -> Plan1, Plan2, Plan3, Plan4, Plan5, Plan6, Plan7, Plan8..."
        );
        assert_eq!(lines[2], "sheet analysed: Plan1");
        assert_eq!(lines[3], "dimensions: 1 rows x 1 columns");
    }

    #[test]
    fn test_summarize_csv_source() {
        let source = LoadedSource {
            kind: SourceKind::Delimited,
            sheet_names: Vec::new(),
            sheet: None,
            table: table(&["a"], vec![vec![Cell::Int(1)]; 1200]),
            truncated: false,
        };
        let report = summarize_source(&source);
        assert_eq!(report.lines()[0], "type: csv");
        assert_eq!(report.lines()[1], "rows read (total): 1.200");
        assert_eq!(report.lines()[2], "dimensions: 1.200 rows x 1 columns");

        let sampled = LoadedSource {
            truncated: true,
            ..source
        };
        assert_eq!(
            summarize_source(&sampled).lines()[1],
            "rows read (sample of first 1.200): 1.200"
        );
    }
}
