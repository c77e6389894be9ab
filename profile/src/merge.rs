use serde_json::Value;

/// Merge `source` into `target`, recursing where both sides hold objects.
///
/// Any other value in `source` replaces the one in `target`; keys missing
/// from `source` keep their `target` value.
pub fn merge_deep(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, source_value) in source {
                match target.get_mut(key) {
                    Some(target_value) if target_value.is_object() && source_value.is_object() => {
                        merge_deep(target_value, source_value);
                    }
                    Some(target_value) => *target_value = source_value.clone(),
                    None => {
                        target.insert(key.clone(), source_value.clone());
                    }
                }
            }
        }
        (target, source) => *target = source.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_keys_keep_defaults() {
        let mut target = json!({"mode": "classic", "stats": {"gamesPlayed": 0, "totalScore": 0}});
        merge_deep(&mut target, &json!({"stats": {"gamesPlayed": 4}}));
        assert_eq!(
            target,
            json!({"mode": "classic", "stats": {"gamesPlayed": 4, "totalScore": 0}})
        );
    }

    #[test]
    fn test_non_objects_replace() {
        let mut target = json!({"theme": "default", "list": [1, 2], "nested": {"a": 1}});
        merge_deep(
            &mut target,
            &json!({"theme": "dark", "list": [3], "nested": 5}),
        );
        assert_eq!(target, json!({"theme": "dark", "list": [3], "nested": 5}));
    }

    #[test]
    fn test_unknown_keys_are_carried() {
        let mut target = json!({"a": 1});
        merge_deep(&mut target, &json!({"b": {"c": true}}));
        assert_eq!(target, json!({"a": 1, "b": {"c": true}}));
    }

    #[test]
    fn test_non_object_source_replaces_root() {
        let mut target = json!({"a": 1});
        merge_deep(&mut target, &json!(null));
        assert_eq!(target, json!(null));
    }
}
