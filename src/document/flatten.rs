use crate::error::SheetError;
use crate::sheet::{NamePath, Record};
use serde_json::{Map, Value};

/// Walk a nested document depth-first and emit one record per leaf, in each
/// object's own key order.
///
/// String leaves and array leaves both terminate the walk: a bare string
/// becomes a scalar record, an array becomes an array record without being
/// recursed into. Only object values recurse. Anything else (numbers,
/// booleans, nulls, non-string array elements) has no sheet representation
/// and fails with the offending path.
pub fn flatten_document(doc: &Map<String, Value>) -> Result<Vec<Record>, SheetError> {
    let mut records = Vec::new();
    collect_records(doc, &NamePath::root(), &mut records)?;
    Ok(records)
}

fn collect_records(
    obj: &Map<String, Value>,
    prefix: &NamePath,
    out: &mut Vec<Record>,
) -> Result<(), SheetError> {
    for (key, value) in obj {
        let path = prefix.child(key);
        match value {
            Value::Object(nested) => collect_records(nested, &path, out)?,
            Value::String(s) => out.push(Record::scalar(path, s.clone())),
            Value::Array(items) => {
                let values = array_values(&path, items)?;
                out.push(Record::array(path, values));
            }
            other => {
                return Err(SheetError::UnexpectedValue {
                    path: path.render(),
                    found: other.to_string(),
                })
            }
        }
    }
    Ok(())
}

fn array_values(path: &NamePath, items: &[Value]) -> Result<Vec<String>, SheetError> {
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(SheetError::UnexpectedValue {
                path: path.render(),
                found: other.to_string(),
            }),
        })
        .collect()
}
