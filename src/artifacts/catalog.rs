use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    artifacts::read_artifact,
    error::{AppError, AppResult},
    models::MovieRecord,
};

/// A catalog row as exported, before indices are settled
#[derive(Debug, Deserialize)]
struct RawMovie {
    #[serde(default)]
    index: Option<usize>,
    #[serde(default)]
    title: Option<Value>,
    #[serde(flatten)]
    metadata: Map<String, Value>,
}

/// Loads the movie catalog from a JSON (optionally gzipped) file
pub async fn load_catalog(path: &Path) -> AppResult<Vec<MovieRecord>> {
    let bytes = read_artifact(path).await?;
    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::Artifact(format!("{}: {}", path.display(), e)))?;

    let records = parse_catalog(value)
        .map_err(|e| AppError::Artifact(format!("{}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), movies = records.len(), "Catalog artifact loaded");
    Ok(records)
}

/// Accepts either a list of records or a column-oriented `{column: {row: value}}` table
fn parse_catalog(value: Value) -> Result<Vec<MovieRecord>, String> {
    match value {
        Value::Array(rows) => rows
            .into_iter()
            .enumerate()
            .map(|(position, row)| {
                let raw: RawMovie = serde_json::from_value(row)
                    .map_err(|e| format!("record {}: {}", position, e))?;
                Ok(MovieRecord {
                    index: raw.index.unwrap_or(position),
                    title: title_from(raw.title),
                    metadata: raw.metadata,
                })
            })
            .collect(),
        Value::Object(columns) => from_columns(columns),
        _ => Err("expected an array of records or an object of columns".to_string()),
    }
}

fn from_columns(columns: Map<String, Value>) -> Result<Vec<MovieRecord>, String> {
    let mut rows: BTreeMap<usize, Map<String, Value>> = BTreeMap::new();

    for (column, cells) in columns {
        let Value::Object(cells) = cells else {
            return Err(format!("column '{}' is not an object of rows", column));
        };
        for (row, cell) in cells {
            let index: usize = row
                .parse()
                .map_err(|_| format!("column '{}' has non-integer row key '{}'", column, row))?;
            rows.entry(index).or_default().insert(column.clone(), cell);
        }
    }

    let records = rows
        .into_iter()
        .map(|(index, mut fields)| {
            let title = title_from(fields.remove("title"));
            fields.remove("index");
            MovieRecord {
                index,
                title,
                metadata: fields,
            }
        })
        .collect();

    Ok(records)
}

/// Non-string titles (null, NaN exported as null, numbers) count as missing
fn title_from(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(title)) => Some(title),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_record_list() {
        let records = parse_catalog(json!([
            { "title": "Avatar", "movie_id": 19995 },
            { "title": null },
            { "index": 2, "title": "Spectre" }
        ]))
        .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].index, 0);
        assert_eq!(records[0].title.as_deref(), Some("Avatar"));
        assert_eq!(records[0].metadata["movie_id"], 19995);
        assert_eq!(records[1].title, None);
        assert_eq!(records[2].index, 2);
    }

    #[test]
    fn test_parse_column_table() {
        let records = parse_catalog(json!({
            "movie_id": { "0": 19995, "1": 285, "10": 1 },
            "title": { "0": "Avatar", "1": "Pirates of the Caribbean", "10": null },
            "tags": { "0": "space", "1": "sea" }
        }))
        .unwrap();

        let indices: Vec<usize> = records.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 10]);
        assert_eq!(records[1].title.as_deref(), Some("Pirates of the Caribbean"));
        assert_eq!(records[1].metadata["tags"], "sea");
        assert_eq!(records[2].title, None);
        assert!(!records[2].metadata.contains_key("tags"));
    }

    #[test]
    fn test_non_string_title_is_missing() {
        let records = parse_catalog(json!([{ "title": 42 }])).unwrap();
        assert_eq!(records[0].title, None);
    }

    #[test]
    fn test_bad_row_key() {
        let err = parse_catalog(json!({ "title": { "first": "Avatar" } })).unwrap_err();
        assert!(err.contains("first"));
    }

    #[test]
    fn test_scalar_rejected() {
        assert!(parse_catalog(json!("movies")).is_err());
    }

    #[tokio::test]
    async fn test_load_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.json");
        std::fs::write(&path, r#"[{"title": "Heat"}, {"title": "Up"}]"#).unwrap();

        let records = load_catalog(&path).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].title.as_deref(), Some("Up"));
    }
}
