//! Output rendering - JSON and human-readable text

use crate::core::GraphEntry;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Output format for the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// Write `entries` to `out` in the chosen format
pub fn render<W: Write>(entries: &[GraphEntry], format: OutputFormat, out: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(entries, out),
        OutputFormat::Json => render_json(entries, out),
    }
}

/// Pretty-printed JSON array (2-space indent) followed by a newline
pub fn render_json<W: Write>(entries: &[GraphEntry], out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, entries)?;
    writeln!(out)
}

/// One block per task, blank line between blocks. Nothing at all for no tasks.
pub fn render_text<W: Write>(entries: &[GraphEntry], out: &mut W) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{}", entry.name)?;

        let categories = [
            ("task_dep", &entry.required),
            ("setup", &entry.setup),
            ("calc_dep", &entry.calculated),
        ];
        for (label, deps) in categories {
            if !deps.is_empty() {
                writeln!(out, "  {}: {}", label, deps.join(", "))?;
            }
        }
        if entry.is_leaf() {
            writeln!(out, "  (no dependencies)")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, required: &[&str], setup: &[&str], calculated: &[&str]) -> GraphEntry {
        fn owned(names: &[&str]) -> Vec<String> {
            names.iter().map(|n| n.to_string()).collect()
        }
        GraphEntry {
            name: name.to_string(),
            required: owned(required),
            setup: owned(setup),
            calculated: owned(calculated),
        }
    }

    fn text(entries: &[GraphEntry]) -> String {
        let mut out = Vec::new();
        render_text(entries, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_layout() {
        let entries = vec![
            entry("g1", &["g1.a", "g1.b"], &[], &[]),
            entry("main", &["a"], &["init"], &["dep"]),
            entry("t1", &[], &[], &[]),
        ];

        assert_eq!(
            text(&entries),
            "g1\n  task_dep: g1.a, g1.b\n\n\
             main\n  task_dep: a\n  setup: init\n  calc_dep: dep\n\n\
             t1\n  (no dependencies)\n\n"
        );
    }

    #[test]
    fn test_empty_text_is_empty() {
        assert_eq!(text(&[]), "");
    }

    #[test]
    fn test_json_layout() {
        let mut out = Vec::new();
        render_json(&[entry("t1", &[], &[], &["x"])], &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[\n  {\n    \"name\": \"t1\",\n    \"task_dep\": [],\n    \"setup\": [],\n    \"calc_dep\": [\n      \"x\"\n    ]\n  }\n]\n"
        );
    }

    #[test]
    fn test_empty_json_is_empty_array() {
        let mut out = Vec::new();
        render(&[], OutputFormat::Json, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }

    #[test]
    fn test_json_round_trip() {
        let entries = vec![entry("a", &["b"], &["c"], &["d"]), entry("b", &[], &[], &[])];
        let mut out = Vec::new();
        render_json(&entries, &mut out).unwrap();

        let parsed: Vec<GraphEntry> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, entries);
    }
}
