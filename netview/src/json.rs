use crate::error::LoadError;
use crate::geometry::limits;
use crate::model::GraphDoc;
use serde_json::Value;

pub fn parse_doc_str(s: &str) -> Result<GraphDoc, LoadError> {
    if s.len() > limits::MAX_JSON_BYTES {
        return Err(LoadError::TooLarge {
            kind: "bytes",
            got: s.len(),
            max: limits::MAX_JSON_BYTES,
        });
    }
    Ok(serde_json::from_str(s)?)
}

pub fn parse_doc_value(v: Value) -> Result<GraphDoc, LoadError> {
    Ok(serde_json::from_value(v)?)
}
