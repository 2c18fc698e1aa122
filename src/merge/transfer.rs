//! Import file validation and export

use serde_json::Value;

use crate::domain::{Category, DomainError, DomainResult};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("invalid file format: {0}")]
    InvalidFormat(String),
    #[error("invalid file format: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ImportError> for DomainError {
    fn from(err: ImportError) -> Self {
        DomainError::InvalidInput(err.to_string())
    }
}

/// Parse an import file: a JSON array of categories, each with a non-empty
/// string `id` and `title` and an `items` array. The whole file is rejected
/// if any element is malformed.
pub fn parse_import(text: &str) -> Result<Vec<Category>, ImportError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(elements) = &value else {
        return Err(ImportError::InvalidFormat("expected an array of categories".into()));
    };

    for (i, element) in elements.iter().enumerate() {
        validate_category(i, element)?;
    }

    Ok(serde_json::from_value(value)?)
}

fn validate_category(index: usize, element: &Value) -> Result<(), ImportError> {
    let Value::Object(fields) = element else {
        return Err(ImportError::InvalidFormat(format!("category #{} is not an object", index)));
    };

    for key in ["id", "title"] {
        match fields.get(key) {
            Some(Value::String(s)) if !s.is_empty() => {}
            _ => {
                return Err(ImportError::InvalidFormat(format!(
                    "category #{} has no valid '{}'",
                    index, key
                )))
            }
        }
    }

    if !matches!(fields.get("items"), Some(Value::Array(_))) {
        return Err(ImportError::InvalidFormat(format!("category #{} has no 'items' array", index)));
    }
    Ok(())
}

/// Whole document as pretty JSON, in the same shape `parse_import` accepts
pub fn export_document(categories: &[Category]) -> DomainResult<String> {
    serde_json::to_string_pretty(categories).map_err(|e| DomainError::Internal(e.to_string()))
}

/// `categories-YYYY-MM-DD.json` for the UTC date of `now`
pub fn export_file_name(now: i64) -> String {
    let date = chrono::DateTime::from_timestamp_millis(now).unwrap_or_else(chrono::Utc::now);
    format!("categories-{}.json", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;

    const SAMPLE: &str = r#"[
        {
            "id": "c1",
            "title": "Travel",
            "createdAt": 10,
            "modifiedAt": 20,
            "items": [
                { "id": "g1", "title": "Beach", "type": "GROUP", "createdAt": 11,
                  "items": [ { "id": "o1", "title": "Hawaii", "type": "OPTION", "createdAt": 12 } ] },
                { "id": "o2", "title": "Rome", "type": "OPTION", "createdAt": 13 }
            ]
        }
    ]"#;

    #[test]
    fn test_parse_valid_file() {
        let cats = parse_import(SAMPLE).unwrap();
        assert_eq!(cats.len(), 1);
        assert_eq!(cats[0].items.len(), 2);
        assert!(matches!(&cats[0].items[0], Item::Group(g) if g.items[0].title == "Hawaii"));
    }

    #[test]
    fn test_rejects_non_array() {
        let err = parse_import(r#"{"id": "c1"}"#).unwrap_err();
        assert!(matches!(err, ImportError::InvalidFormat(_)));
    }

    #[test]
    fn test_rejects_whole_file_on_one_bad_element() {
        let text = r#"[
            {"id": "c1", "title": "ok", "items": []},
            {"id": "c2", "title": "", "items": []}
        ]"#;
        assert!(parse_import(text).is_err());

        let text = r#"[{"id": "c1", "title": "no items"}]"#;
        assert!(parse_import(text).is_err());

        let text = r#"[{"id": 5, "title": "numeric id", "items": []}]"#;
        assert!(parse_import(text).is_err());
    }

    #[test]
    fn test_rejects_broken_json() {
        let err = parse_import("[{").unwrap_err();
        assert!(err.to_string().starts_with("invalid file format"));
        let domain: DomainError = err.into();
        assert!(matches!(domain, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_missing_timestamps_default_to_zero() {
        let cats = parse_import(r#"[{"id": "c1", "title": "t", "items": []}]"#).unwrap();
        assert_eq!(cats[0].created_at, 0);
    }

    #[test]
    fn test_date_string_timestamps_are_accepted() {
        let text = r#"[{
            "id": "c1", "title": "Travel",
            "createdAt": "2024-01-01T00:00:00.000Z", "modifiedAt": "soon",
            "items": [
                { "id": "g1", "title": "Beach", "type": "GROUP", "createdAt": "2024-01-01T00:00:00.000Z",
                  "items": [ { "id": "o1", "title": "Hawaii", "type": "OPTION", "createdAt": "1704067200000" } ] },
                { "id": "o2", "title": "Rome", "type": "OPTION", "createdAt": null }
            ]
        }]"#;
        let cats = parse_import(text).unwrap();
        assert_eq!(cats[0].created_at, 1_704_067_200_000);
        assert_eq!(cats[0].modified_at, 0);
        let Item::Group(beach) = &cats[0].items[0] else { panic!("expected a group") };
        assert_eq!(beach.created_at, 1_704_067_200_000);
        assert_eq!(beach.items[0].created_at, 1_704_067_200_000);
        assert!(matches!(&cats[0].items[1], Item::Option(o) if o.created_at == 0));
    }

    #[test]
    fn test_unreadable_timestamps_are_stamped_on_merge() {
        use crate::domain::SequentialIdGenerator;
        use crate::merge::{merge_categories, MergePolicy};

        let text = r#"[{"id": "c1", "title": "Travel", "createdAt": "last week", "items": [
            { "id": "o1", "title": "Rome", "type": "OPTION", "createdAt": {"seconds": 1} }
        ]}]"#;
        let imported = parse_import(text).unwrap();
        let ids = SequentialIdGenerator::new("n");
        let merged = merge_categories(&[], imported, MergePolicy::Identity, &ids, 500);
        assert_eq!(merged[0].created_at, 500);
        assert_eq!(merged[0].items[0].created_at(), 500);
    }

    #[test]
    fn test_export_parses_back() {
        let cats = parse_import(SAMPLE).unwrap();
        let text = export_document(&cats).unwrap();
        assert!(text.contains("\"type\": \"GROUP\""));
        assert!(text.contains("\"createdAt\""));
        assert_eq!(parse_import(&text).unwrap(), cats);
    }

    #[test]
    fn test_export_file_name() {
        // 2024-03-05T12:00:00Z
        assert_eq!(export_file_name(1_709_640_000_000), "categories-2024-03-05.json");
    }
}
