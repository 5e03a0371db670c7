use crate::sheet::Record;
use serde_json::{Map, Value};

/// Rebuild a nested document from records, in order.
///
/// Intermediate objects are created on demand while walking each record's
/// path; the final segment is set to the record's value. Key order in the
/// output follows first insertion. Collisions are not validated: the last
/// write wins, and an intermediate segment that already holds a leaf is
/// replaced by a fresh object.
pub fn build_document<I>(records: I) -> Map<String, Value>
where
    I: IntoIterator<Item = Record>,
{
    let mut root = Map::new();
    for record in records {
        include_record(&mut root, record);
    }
    root
}

fn include_record(root: &mut Map<String, Value>, record: Record) {
    let Record { path, value } = record;
    let Some((leaf, parents)) = path.segments().split_last() else {
        return;
    };
    let target = nested_object(root, parents);
    target.insert(leaf.clone(), value.into_json());
}

/// Get-or-create walk along `keys`, vivifying missing intermediate objects.
fn nested_object<'a>(root: &'a mut Map<String, Value>, keys: &[String]) -> &'a mut Map<String, Value> {
    let mut target = root;
    for key in keys {
        let slot = target
            .entry(key.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        let Value::Object(next) = slot else {
            unreachable!()
        };
        target = next;
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::NamePath;
    use serde_json::json;

    #[test]
    fn builds_nested_objects_from_paths() {
        let doc = build_document([
            Record::scalar(NamePath::parse("Cards::Strike::NAME"), "Strike"),
            Record::scalar(NamePath::parse("Cards::Defend::NAME"), "Defend"),
        ]);
        assert_eq!(
            Value::Object(doc),
            json!({
                "Cards": {
                    "Strike": {"NAME": "Strike"},
                    "Defend": {"NAME": "Defend"}
                }
            })
        );
    }

    #[test]
    fn keeps_first_insertion_order() {
        let doc = build_document([
            Record::scalar(NamePath::parse("Zebra"), "z"),
            Record::scalar(NamePath::parse("Alpha"), "a"),
        ]);
        let keys: Vec<_> = doc.keys().cloned().collect();
        assert_eq!(keys, ["Zebra", "Alpha"]);
    }

    #[test]
    fn array_values_become_json_arrays() {
        let doc = build_document([Record::array(
            NamePath::parse("Keywords::LIST"),
            vec!["a".to_string(), "b".to_string()],
        )]);
        assert_eq!(
            Value::Object(doc),
            json!({"Keywords": {"LIST": ["a", "b"]}})
        );
    }

    #[test]
    fn last_write_wins_on_leaf_collisions() {
        let doc = build_document([
            Record::scalar(NamePath::parse("A::B"), "first"),
            Record::scalar(NamePath::parse("A::B"), "second"),
        ]);
        assert_eq!(Value::Object(doc), json!({"A": {"B": "second"}}));
    }

    #[test]
    fn leaf_turned_interior_is_replaced_by_an_object() {
        let doc = build_document([
            Record::scalar(NamePath::parse("A"), "leaf"),
            Record::scalar(NamePath::parse("A::B"), "nested"),
        ]);
        assert_eq!(Value::Object(doc), json!({"A": {"B": "nested"}}));
    }

    #[test]
    fn no_records_build_an_empty_document() {
        assert!(build_document([]).is_empty());
    }
}
