use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One stored résumé document.
///
/// Entry shapes are deliberately open: `personal_info` must be an object and
/// the list sections must be arrays, but their contents are kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeRecord {
    pub personal_info: Map<String, Value>,
    pub experience: Vec<Value>,
    pub education: Vec<Value>,
    pub skills: Vec<Value>,
    pub summary: String,
    /// Ignored on input; stamped by the store on save.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_timestamps_optional_on_input() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "personal_info": {"fullName": "Ada"},
            "experience": [],
            "education": [],
            "skills": [],
            "summary": ""
        }))
        .unwrap();
        assert!(record.created_at.is_none());
        assert!(record.updated_at.is_none());
    }

    #[test]
    fn test_entries_keep_arbitrary_shapes() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "personal_info": {"fullName": "Ada", "age": 36, "links": ["a", "b"], "remote": true},
            "experience": [{"title": "Engineer", "current": true}, "free text", 42, null],
            "education": [],
            "skills": [{"name": "Rust", "proficiency": "expert"}],
            "summary": "Engineer",
            "unknown_field": "dropped"
        }))
        .unwrap();
        assert_eq!(record.experience.len(), 4);
        assert_eq!(record.personal_info["age"], json!(36));
    }

    #[test]
    fn test_personal_info_must_be_object() {
        let result = serde_json::from_value::<ResumeRecord>(json!({
            "personal_info": ["not", "a", "map"],
            "experience": [],
            "education": [],
            "skills": [],
            "summary": ""
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_summary_required() {
        let result = serde_json::from_value::<ResumeRecord>(json!({
            "personal_info": {},
            "experience": [],
            "education": [],
            "skills": []
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unset_timestamps_serialize_as_null() {
        let record = ResumeRecord {
            personal_info: Map::new(),
            experience: vec![],
            education: vec![],
            skills: vec![],
            summary: String::new(),
            created_at: None,
            updated_at: None,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["created_at"], Value::Null);
    }
}
