//! End-to-end tests: triple files on disk through loading, analysis and
//! JSON output.

use std::io::Write;
use trigraph_runtime::prelude::*;

fn write_temp(suffix: &str, body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(body.as_bytes()).expect("write temp file");
    file
}

const TAXONOMY: &str = r#"[
    ["ex:cell", "label", "cell"],
    ["ex:cell", "partOf", "ex:tissue"],
    ["ex:tissue", "partOf", "ex:organ"],
    ["ex:neuron", "subClassOf", "ex:cell"],
    {"subject": "ex:atom", "predicate": "partOf", "object": ["ex:molecule", "ex:ion"]}
]"#;

#[test]
fn load_json_file_and_analyse() {
    let file = write_temp(".json", TAXONOMY);
    let format = TripleFormat::from_path(file.path());
    assert_eq!(format, TripleFormat::Json);

    let edges = load_triples(file.path(), format).expect("load");
    assert_eq!(edges.len(), 5);

    let components = connected_components(&edges);
    assert_eq!(components.len(), 2);
    assert_eq!(components[0].len(), 4);
    assert_eq!(biggest_component(&edges), components[0]);

    let stats = graph_stats(&edges);
    assert_eq!(stats.components, 2);
    assert_eq!(stats.largest_component, 4);
    assert_eq!(stats.predicates, 3);
}

#[test]
fn json_lines_file_matches_array_file() {
    let lines = TAXONOMY
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .lines()
        .map(|l| l.trim().trim_end_matches(','))
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    let jsonl = write_temp(".jsonl", &lines);
    let json = write_temp(".json", TAXONOMY);

    let from_lines = load_triples(jsonl.path(), TripleFormat::from_path(jsonl.path())).unwrap();
    let from_array = load_triples(json.path(), TripleFormat::Json).unwrap();
    assert_eq!(from_lines, from_array);
}

#[test]
fn malformed_file_reports_record_position() {
    let file = write_temp(".json", r#"[["A", "p", "B"], ["A", ["p", "q"], "B"]]"#);
    let err = load_triples(file.path(), TripleFormat::Json).unwrap_err();
    assert!(err.is_malformed_record());
    assert!(err.to_string().contains("#1"), "got: {err}");
}

#[test]
fn components_written_as_json_read_back() {
    let file = write_temp(".json", TAXONOMY);
    let edges = load_triples(file.path(), TripleFormat::Json).unwrap();
    let components = connected_components(&edges);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("components.json");
    write_json(&out, &components, true).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    let back: Vec<Vec<Triple>> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, components);

    // The biggest component can itself be re-loaded as a triple file.
    let biggest = dir.path().join("biggest.json");
    write_json(&biggest, &components[0], false).unwrap();
    let reloaded = load_triples(&biggest, TripleFormat::Json).unwrap();
    assert_eq!(reloaded, components[0]);
}

#[test]
fn centrality_on_loaded_file() {
    let file = write_temp(".json", TAXONOMY);
    let edges = load_triples(file.path(), TripleFormat::Json).unwrap();
    let scores = betweenness_centrality(&edges);
    let top = top_central(&scores, 2);
    // 8 nodes, scale 1/(7*6). ex:cell carries ex:neuron's paths to "cell",
    // ex:tissue and ex:organ; ex:tissue only the two paths into ex:organ.
    assert_eq!(top[0].0, NodeId::from("ex:cell"));
    assert!((top[0].1 - 3.0 / 42.0).abs() < 1e-12);
    assert_eq!(top[1].0, NodeId::from("ex:tissue"));
    assert!((top[1].1 - 2.0 / 42.0).abs() < 1e-12);
    assert!(top[0].1 > top[1].1, "ex:cell must win on score, not on tie order");
    assert!(scores.values().all(|&s| (0.0..=1.0).contains(&s)));
}
