//! Gap analyzer — reports JD skills a candidate lacks, plus remark sentences.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::profile::Profile;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapReport {
    /// JD skills absent from the candidate, sorted lexicographically so the
    /// output is stable across runs.
    pub missing_skills: Vec<String>,
    pub remarks: Vec<String>,
}

/// `missing_skills = main.skills − other.skills`, with remark sentences.
///
/// The experience comparison is an exact string match: "3+ years" vs
/// "3-5 years" counts as a mismatch.
pub fn analyze_gap(main: &Profile, other: &Profile) -> GapReport {
    let other_skills: HashSet<&str> = other.skills.iter().map(String::as_str).collect();

    let mut missing_skills: Vec<String> = main
        .skills
        .iter()
        .filter(|s| !other_skills.contains(s.as_str()))
        .cloned()
        .collect();
    missing_skills.sort();
    missing_skills.dedup();

    let mut remarks = Vec::new();

    if missing_skills.is_empty() {
        remarks.push("All required skills are covered.".to_string());
    } else {
        remarks.push(format!("Lacks skills: {}", missing_skills.join(", ")));
    }

    if main.experience != other.experience {
        remarks.push(format!(
            "Experience mismatch: Expected {} but found {}.",
            main.experience, other.experience
        ));
    }

    GapReport {
        missing_skills,
        remarks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(skills: &[&str], experience: &str) -> Profile {
        Profile {
            experience: experience.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_skills_is_set_difference() {
        let main = profile(&["Python", "AWS", "Docker"], "");
        let other = profile(&["Python"], "");
        let report = analyze_gap(&main, &other);
        assert_eq!(report.missing_skills, vec!["AWS", "Docker"]);
    }

    #[test]
    fn test_identical_skill_sets_have_no_gap() {
        let main = profile(&["Python", "AWS"], "5+ years");
        let report = analyze_gap(&main, &main);
        assert!(report.missing_skills.is_empty());
        assert_eq!(report.remarks, vec!["All required skills are covered."]);
    }

    #[test]
    fn test_missing_skills_are_sorted() {
        let main = profile(&["Zig", "Ada", "Moss"], "");
        let other = profile(&[], "");
        let report = analyze_gap(&main, &other);
        assert_eq!(report.missing_skills, vec!["Ada", "Moss", "Zig"]);
    }

    #[test]
    fn test_experience_mismatch_is_exact_string_comparison() {
        let main = profile(&["Python"], "3+ years");
        let other = profile(&["Python"], "3-5 years");
        let report = analyze_gap(&main, &other);
        assert_eq!(
            report.remarks,
            vec![
                "All required skills are covered.".to_string(),
                "Experience mismatch: Expected 3+ years but found 3-5 years.".to_string(),
            ]
        );
    }

    #[test]
    fn test_lacks_skills_remark_lists_missing() {
        let main = profile(&["Python", "AWS"], "");
        let other = profile(&["Python"], "");
        let report = analyze_gap(&main, &other);
        assert_eq!(report.remarks, vec!["Lacks skills: AWS"]);
    }
}
