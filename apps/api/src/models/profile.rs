//! Profile — structured attributes extracted from a JD or resume by the model.

use serde::{Deserialize, Serialize};

/// Attributes extracted from free text. Fields the model omits default to
/// empty, so absent data degrades to a zero score contribution instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

impl Profile {
    /// Deduplicates skills case-sensitively, keeping first-seen order.
    /// Applied once at the parse boundary.
    pub fn normalized(mut self) -> Self {
        let mut seen = std::collections::HashSet::new();
        self.skills.retain(|s| seen.insert(s.clone()));
        self
    }
}

/// Derives a human-readable candidate name from an uploaded resume filename:
/// drops the extension and replaces underscores/hyphens with spaces.
pub fn display_name(filename: &str) -> String {
    let stem = std::path::Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    let name = stem.replace(['_', '-'], " ").trim().to_string();
    if name.is_empty() {
        filename.to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults_missing_fields() {
        let json = r#"{"skills": ["Python", "AWS"]}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.experience, "");
        assert_eq!(profile.education, "");
        assert!(profile.job_title.is_none());
        assert!(profile.company_name.is_none());
        assert_eq!(profile.skills, vec!["Python", "AWS"]);
    }

    #[test]
    fn test_normalized_dedups_skills_keeping_first_seen_order() {
        let profile = Profile {
            skills: vec![
                "Python".to_string(),
                "AWS".to_string(),
                "Python".to_string(),
                "Docker".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(profile.normalized().skills, vec!["Python", "AWS", "Docker"]);
    }

    #[test]
    fn test_normalized_is_case_sensitive() {
        let profile = Profile {
            skills: vec!["python".to_string(), "Python".to_string()],
            ..Default::default()
        };
        assert_eq!(profile.normalized().skills.len(), 2);
    }

    #[test]
    fn test_display_name_strips_extension_and_separators() {
        assert_eq!(display_name("john_doe-resume.pdf"), "john doe resume");
        assert_eq!(display_name("JaneSmith.docx"), "JaneSmith");
    }

    #[test]
    fn test_display_name_falls_back_to_filename() {
        assert_eq!(display_name(".pdf"), ".pdf");
    }
}
