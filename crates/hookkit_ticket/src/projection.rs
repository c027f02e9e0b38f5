//! Projections of tracker documents onto the fields the gate checks.
//!
//! Tracker documents have no fixed schema. Every lookup is a safe
//! navigation that yields `None` when the shape does not fit.

use serde_json::Value;

/// The single fix version of a ticket.
///
/// `None` unless `fields.fixVersions` is an array with exactly one entry
/// whose `name` is a string.
pub fn project_fix_version(document: &Value) -> Option<String> {
    let versions = document.get("fields")?.get("fixVersions")?.as_array()?;
    match versions.as_slice() {
        [only] => only.get("name")?.as_str().map(str::to_string),
        _ => None,
    }
}

/// The status category key of a ticket (`fields.status.statusCategory.key`).
///
/// An empty key is returned as `Some("")`. A missing path or a key that is
/// not a string is `None`.
pub fn project_status_category(document: &Value) -> Option<String> {
    document
        .pointer("/fields/status/statusCategory/key")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_fix_version() {
        let doc = json!({"fields": {"fixVersions": [{"name": "v1", "id": "10"}]}});
        assert_eq!(project_fix_version(&doc), Some("v1".to_string()));
    }

    #[test]
    fn test_fix_version_count_must_be_one() {
        let none = json!({"fields": {"fixVersions": []}});
        let two = json!({"fields": {"fixVersions": [{"name": "v1"}, {"name": "v2"}]}});
        assert_eq!(project_fix_version(&none), None);
        assert_eq!(project_fix_version(&two), None);
    }

    #[test]
    fn test_fix_version_shape_mismatch() {
        for doc in [
            json!({}),
            json!(null),
            json!([1, 2]),
            json!({"fields": null}),
            json!({"fields": {"fixVersions": "v1"}}),
            json!({"fields": {"fixVersions": [{"id": "10"}]}}),
            json!({"fields": {"fixVersions": ["v1"]}}),
            json!({"fields": {"fixVersions": [{"name": 1}]}}),
        ] {
            assert_eq!(project_fix_version(&doc), None, "{}", doc);
        }
    }

    #[test]
    fn test_status_category() {
        let doc = json!({"fields": {"status": {"statusCategory": {"key": "done"}}}});
        assert_eq!(project_status_category(&doc), Some("done".to_string()));
    }

    #[test]
    fn test_status_category_empty_is_not_missing() {
        let doc = json!({"fields": {"status": {"statusCategory": {"key": ""}}}});
        assert_eq!(project_status_category(&doc), Some(String::new()));
    }

    #[test]
    fn test_status_category_shape_mismatch() {
        for doc in [
            json!({}),
            json!("done"),
            json!({"fields": {"status": "done"}}),
            json!({"fields": {"status": {"statusCategory": {}}}}),
            json!({"fields": {"status": {"statusCategory": {"key": 3}}}}),
            json!({"fields": {"status": {"statusCategory": ["key"]}}}),
        ] {
            assert_eq!(project_status_category(&doc), None, "{}", doc);
        }
    }
}
