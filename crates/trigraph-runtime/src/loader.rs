//! Reading triple lists from JSON documents.
//!
//! Two layouts are accepted: a single JSON array of records, or JSON Lines
//! with one record per line. Records go through
//! [`canonicalize_all`](trigraph_core::record::canonicalize_all), so a
//! malformed record aborts the load and reports its position.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use trigraph_core::error::{Result, TrigraphError};
use trigraph_core::record::{canonicalize_all, RawRecord};
use trigraph_core::types::Triple;

/// On-disk layout of a triple file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripleFormat {
    /// A top-level JSON array of records.
    #[default]
    Json,
    /// One JSON record per non-blank line.
    #[serde(alias = "ndjson")]
    Jsonl,
}

impl TripleFormat {
    /// Guess the layout from a file extension.
    ///
    /// `.jsonl` and `.ndjson` map to [`TripleFormat::Jsonl`]; anything else
    /// is treated as a plain JSON array.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("ndjson") => {
                TripleFormat::Jsonl
            }
            _ => TripleFormat::Json,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TripleFormat::Json => "json",
            TripleFormat::Jsonl => "jsonl",
        }
    }
}

impl std::str::FromStr for TripleFormat {
    type Err = TrigraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(TripleFormat::Json),
            "jsonl" | "ndjson" => Ok(TripleFormat::Jsonl),
            other => Err(TrigraphError::invalid_config(
                "format",
                format!("unknown triple format '{other}' (expected json or jsonl)"),
            )),
        }
    }
}

/// Parse triples from an in-memory document.
pub fn parse_triples(text: &str, format: TripleFormat) -> Result<Vec<Triple>> {
    let records = match format {
        TripleFormat::Json => serde_json::from_str::<Vec<RawRecord>>(text)?,
        TripleFormat::Jsonl => parse_lines(text)?,
    };
    let count = records.len();
    let triples = canonicalize_all(records)?;
    debug!(records = count, format = format.as_str(), "parsed triple records");
    Ok(triples)
}

fn parse_lines(text: &str) -> Result<Vec<RawRecord>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            serde_json::from_str(line)
                .map_err(|e| TrigraphError::Serialization(format!("line {}: {e}", n + 1)))
        })
        .collect()
}

/// Read and canonicalize the triples stored at `path`.
pub fn load_triples(path: &Path, format: TripleFormat) -> Result<Vec<Triple>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| TrigraphError::Io(format!("{}: {e}", path.display())))?;
    let triples = parse_triples(&text, format)?;
    debug!(path = %path.display(), triples = triples.len(), "loaded triples");
    Ok(triples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trigraph_core::error::MalformedRecordKind;

    #[test]
    fn format_from_extension() {
        assert_eq!(TripleFormat::from_path(Path::new("a.jsonl")), TripleFormat::Jsonl);
        assert_eq!(TripleFormat::from_path(Path::new("a.NDJSON")), TripleFormat::Jsonl);
        assert_eq!(TripleFormat::from_path(Path::new("a.json")), TripleFormat::Json);
        assert_eq!(TripleFormat::from_path(Path::new("triples")), TripleFormat::Json);
    }

    #[test]
    fn format_from_str() {
        assert_eq!("JSON".parse::<TripleFormat>().unwrap(), TripleFormat::Json);
        assert_eq!("ndjson".parse::<TripleFormat>().unwrap(), TripleFormat::Jsonl);
        assert!("csv".parse::<TripleFormat>().is_err());
    }

    #[test]
    fn parses_json_array() {
        let text = r#"[["A", "p", "B"], ["A", "p", ["B", "C"]], {"subject": "X", "predicate": "q", "object": "Y"}]"#;
        let triples = parse_triples(text, TripleFormat::Json).unwrap();
        assert_eq!(
            triples,
            vec![
                Triple::new("A", "p", "B"),
                Triple::many("A", "p", ["B", "C"]),
                Triple::new("X", "q", "Y"),
            ]
        );
    }

    #[test]
    fn parses_json_lines_skipping_blanks() {
        let text = "[\"A\", \"p\", \"B\"]\n\n  \n[\"B\", \"p\", \"C\"]\n";
        let triples = parse_triples(text, TripleFormat::Jsonl).unwrap();
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[1], Triple::new("B", "p", "C"));
    }

    #[test]
    fn malformed_record_reports_index() {
        let text = r#"[["A", "p", "B"], ["A", "p"]]"#;
        let err = parse_triples(text, TripleFormat::Json).unwrap_err();
        assert_eq!(
            err,
            TrigraphError::MalformedRecord {
                index: Some(1),
                kind: MalformedRecordKind::WrongArity { found: 2 },
            }
        );
    }

    #[test]
    fn bad_json_line_names_the_line() {
        let text = "[\"A\", \"p\", \"B\"]\nnot json\n";
        let err = parse_triples(text, TripleFormat::Jsonl).unwrap_err();
        assert!(err.to_string().contains("line 2"), "got: {err}");
    }

    #[test]
    fn empty_document() {
        assert!(parse_triples("[]", TripleFormat::Json).unwrap().is_empty());
        assert!(parse_triples("", TripleFormat::Jsonl).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_triples(Path::new("/nonexistent/triples.json"), TripleFormat::Json)
            .unwrap_err();
        assert!(matches!(err, TrigraphError::Io(_)));
    }
}
