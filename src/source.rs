use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::ResultsError;
use crate::model::{FlatRecord, RosterPlayer, RoundRecord};

fn flatten_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn flatten(raw: BTreeMap<String, Value>) -> FlatRecord {
    raw.into_iter()
        .filter_map(|(k, v)| flatten_value(v).map(|v| (k, v)))
        .collect()
}

/// Parses a JSON array of flat row objects. Numbers are kept as their text,
/// `null` columns are dropped.
///
/// # Errors
/// Returns an error if the text is not a JSON array of objects.
pub fn records_from_json(json: &str) -> Result<Vec<RoundRecord>, ResultsError> {
    let rows: Vec<BTreeMap<String, Value>> = serde_json::from_str(json)?;
    Ok(rows
        .into_iter()
        .map(|row| RoundRecord::from_flat(&flatten(row)))
        .collect())
}

/// Reads a round file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a JSON array of objects.
pub fn load_records(path: &Path) -> Result<Vec<RoundRecord>, ResultsError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ResultsError::Io(format!("read {}: {e}", path.display())))?;
    records_from_json(&contents)
        .map_err(|e| ResultsError::Parse(format!("{}: {e}", path.display())))
}

/// Reads a par reference: either a single row object, or an array whose
/// `PAR` row (or first row) is used.
///
/// # Errors
/// Returns an error if the file cannot be read, does not parse, or holds no row.
pub fn load_par(path: &Path) -> Result<RoundRecord, ResultsError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ResultsError::Io(format!("read {}: {e}", path.display())))?;
    let value: Value = serde_json::from_str(&contents)?;
    let rows: Vec<RoundRecord> = match value {
        Value::Array(_) => records_from_json(&contents)?,
        Value::Object(map) => {
            let row: BTreeMap<String, Value> = map.into_iter().collect();
            vec![RoundRecord::from_flat(&flatten(row))]
        }
        _ => {
            return Err(ResultsError::Parse(format!(
                "{}: expected an object or an array",
                path.display()
            )));
        }
    };
    let position = rows.iter().position(RoundRecord::is_par).unwrap_or(0);
    rows.into_iter()
        .nth(position)
        .ok_or_else(|| ResultsError::NotFound(format!("no par row in {}", path.display())))
}

/// Reads the roster export (`[{ "id", "name", "affiliation" }]`).
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_roster(path: &Path) -> Result<Vec<RosterPlayer>, ResultsError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ResultsError::Io(format!("read {}: {e}", path.display())))?;
    let players: Vec<RosterPlayer> = serde_json::from_str(&contents)
        .map_err(|e| ResultsError::Parse(format!("{}: {e}", path.display())))?;
    Ok(players)
}
