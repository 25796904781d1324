//! Terminal rendering of catalog records

use std::collections::BTreeSet;
use std::fmt::Write;

use wfc_faults_core::{FaultCategoryCatalog, FaultCategoryDocument, FaultCategoryRecord};

/// Wrap width for descriptions in `show`
const WRAP_WIDTH: usize = 80;

/// One line per record, grouped by code range.
pub fn table(records: &[&FaultCategoryRecord]) -> String {
    let label_width = records
        .iter()
        .map(|r| r.test_case_label.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let mut current = None;
    for r in records {
        if current != Some(r.group()) {
            if current.is_some() {
                out.push('\n');
            }
            current = Some(r.group());
            let _ = writeln!(out, "{}", r.group().title());
        }
        let _ = writeln!(
            out,
            "  {:>3}  {:<label_width$}  {}",
            r.code, r.test_case_label, r.name
        );
    }
    out
}

pub fn detail(record: &FaultCategoryRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", record.code, record.name);
    let _ = writeln!(out, "  group: {}", record.group());
    let _ = writeln!(out, "  label: {}", record.test_case_label);
    out.push('\n');
    for line in wrap(&record.description, WRAP_WIDTH - 2) {
        let _ = writeln!(out, "  {line}");
    }
    out
}

/// Which codes differ between the catalog and a parsed artifact.
///
/// Empty when the records agree and only formatting drifted.
pub fn code_changes(catalog: &FaultCategoryCatalog, document: &FaultCategoryDocument) -> String {
    let live: BTreeSet<u16> = catalog.iter().map(|r| r.code).collect();
    let stored: BTreeSet<u16> = document.0.iter().map(|r| r.code).collect();

    let added: Vec<u16> = live.difference(&stored).copied().collect();
    let removed: Vec<u16> = stored.difference(&live).copied().collect();
    let changed: Vec<u16> = document
        .0
        .iter()
        .filter(|r| catalog.lookup_by_code(r.code).is_some_and(|live| live != *r))
        .map(|r| r.code)
        .collect();

    let mut parts = Vec::new();
    for (label, codes) in [("added", added), ("removed", removed), ("changed", changed)] {
        if !codes.is_empty() {
            let list: Vec<String> = codes.iter().map(u16::to_string).collect();
            parts.push(format!("{label}: {}", list.join(", ")));
        }
    }
    parts.join("; ")
}

/// Greedy word wrap; words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: u16, label: &str) -> FaultCategoryRecord {
        FaultCategoryRecord::new(code, format!("Fault {code}"), label, "Some description.").unwrap()
    }

    #[test]
    fn table_groups_by_range() {
        let a = record(100, "short");
        let b = record(200, "muchLongerLabel");
        let out = table(&[&a, &b]);

        assert_eq!(
            out,
            "Base faults (1xx)\n  100  short            Fault 100\n\nSecurity faults (2xx)\n  200  muchLongerLabel  Fault 200\n"
        );
    }

    #[test]
    fn table_empty() {
        assert_eq!(table(&[]), "");
    }

    #[test]
    fn detail_wraps_description() {
        let mut r = record(100, "causes500");
        r.description = "word ".repeat(40).trim_end().to_string();
        let out = detail(&r);

        assert!(out.starts_with("100 Fault 100\n  group: base\n  label: causes500\n\n"));
        assert!(out.lines().all(|l| l.len() <= WRAP_WIDTH));
    }

    #[test]
    fn wrap_keeps_every_word() {
        let text = "a bb ccc dddd eeeee";
        let lines = wrap(text, 6);
        assert_eq!(lines, vec!["a bb", "ccc", "dddd", "eeeee"]);
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn wrap_overlong_word() {
        assert_eq!(wrap("x supercalifragilistic y", 5), vec!["x", "supercalifragilistic", "y"]);
    }

    #[test]
    fn code_changes_reports_each_kind() {
        let catalog =
            FaultCategoryCatalog::new(vec![record(100, "a"), record(101, "b"), record(200, "c")])
                .unwrap();

        let mut edited = record(101, "b");
        edited.name = "Old name".into();
        let document = FaultCategoryDocument(vec![record(100, "a"), edited, record(102, "d")]);

        assert_eq!(
            code_changes(&catalog, &document),
            "added: 200; removed: 102; changed: 101"
        );
    }

    #[test]
    fn code_changes_empty_when_records_match() {
        let catalog = FaultCategoryCatalog::defined().unwrap();
        let document = FaultCategoryDocument::from_catalog(&catalog);
        assert_eq!(code_changes(&catalog, &document), "");
    }
}
