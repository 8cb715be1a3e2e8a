// src/io/edges_json.rs
//
// Edge dataset format:
// [
//   { "z": 6, "symbol": "C", "edges": { "K": 284.2 } },
//   { "z": 26, "symbol": "Fe", "edges": { "L3": 706.8, "L2": 719.9, ... } },
//   ...
// ]

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::CatalogLoadError;
use crate::model::EdgeRecord;

#[derive(Debug, Deserialize)]
struct RawRecord {
    z: i64,
    symbol: String,
    #[serde(default)]
    edges: Map<String, Value>,
}

pub fn parse_str(text: &str, origin: &str) -> Result<Vec<EdgeRecord>, CatalogLoadError> {
    let raw: Vec<RawRecord> = serde_json::from_str(text).map_err(|e| parse_error(origin, e))?;
    convert(raw, origin)
}

pub fn read_file(path: &Path) -> Result<Vec<EdgeRecord>, CatalogLoadError> {
    let file = File::open(path).map_err(|e| CatalogLoadError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let origin = path.display().to_string();
    let raw: Vec<RawRecord> =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| parse_error(&origin, e))?;
    convert(raw, &origin)
}

fn parse_error(origin: &str, e: serde_json::Error) -> CatalogLoadError {
    CatalogLoadError::Parse {
        origin: origin.to_string(),
        message: e.to_string(),
    }
}

fn convert(raw: Vec<RawRecord>, origin: &str) -> Result<Vec<EdgeRecord>, CatalogLoadError> {
    let mut records = Vec::with_capacity(raw.len());
    for item in raw {
        let atomic_number = u32::try_from(item.z)
            .ok()
            .filter(|&z| z >= 1)
            .ok_or(CatalogLoadError::InvalidAtomicNumber(item.z))?;

        // Keeps file order (serde_json preserve_order)
        let mut edges = Vec::with_capacity(item.edges.len());
        for (notation, value) in item.edges {
            let energy = value.as_f64().ok_or_else(|| CatalogLoadError::Parse {
                origin: origin.to_string(),
                message: format!("edge {} of Z={} is not a number", notation, atomic_number),
            })?;
            edges.push((notation, energy));
        }

        records.push(EdgeRecord {
            atomic_number,
            symbol: item.symbol,
            edges,
        });
    }
    log::debug!("Read {} edge records from {}", records.len(), origin);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_edge_order() {
        let text = r#"[{"z": 26, "symbol": "Fe", "edges": {"L3": 706.8, "L2": 719.9, "K": 7112}}]"#;
        let records = parse_str(text, "test").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].atomic_number, 26);
        assert_eq!(records[0].symbol, "Fe");
        let keys: Vec<&str> = records[0].edges.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["L3", "L2", "K"]);
        assert!((records[0].edges[2].1 - 7112.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_edges_is_empty() {
        let records = parse_str(r#"[{"z": 1, "symbol": "H"}]"#, "test").unwrap();
        assert!(records[0].edges.is_empty());
    }

    #[test]
    fn test_schema_errors() {
        assert!(matches!(
            parse_str("{ not json", "test"),
            Err(CatalogLoadError::Parse { .. })
        ));
        assert!(matches!(
            parse_str(r#"[{"symbol": "C"}]"#, "test"),
            Err(CatalogLoadError::Parse { .. })
        ));
        assert!(matches!(
            parse_str(r#"[{"z": 6, "symbol": "C", "edges": {"K": "high"}}]"#, "test"),
            Err(CatalogLoadError::Parse { .. })
        ));
        assert_eq!(
            parse_str(r#"[{"z": 0, "symbol": "X"}]"#, "test"),
            Err(CatalogLoadError::InvalidAtomicNumber(0))
        );
    }

    #[test]
    fn test_missing_file() {
        let err = read_file(Path::new("/nonexistent/edges.json")).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
    }
}
