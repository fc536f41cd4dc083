use serde_yaml::Value;

/// Resolve a dotted key path such as `data_ingestion.folders.0`.
///
/// Segments match mapping keys that are strings, numbers or booleans by
/// their text; a numeric segment on a sequence is used as an index. An empty
/// path returns the root, and an empty segment (`a..b`) matches nothing.
pub fn value_at<'a>(root: &'a Value, key_path: &str) -> Option<&'a Value> {
    if key_path.is_empty() {
        return Some(root);
    }
    key_path.split('.').try_fold(root, |node, segment| {
        if segment.is_empty() {
            return None;
        }
        match node {
            Value::Sequence(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            Value::Mapping(map) => map.get(segment).or_else(|| {
                map.iter()
                    .find(|(k, _)| key_matches(k, segment))
                    .map(|(_, v)| v)
            }),
            _ => None,
        }
    })
}

fn key_matches(key: &Value, segment: &str) -> bool {
    match key {
        Value::Number(n) => n.to_string() == segment,
        Value::Bool(b) => b.to_string() == segment,
        _ => false,
    }
}
