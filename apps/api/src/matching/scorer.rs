//! Match scorer — weighted similarity between a JD profile and a candidate
//! profile. Skills dominate at 70%, experience 20%, education 10%.

use std::collections::HashSet;

use crate::models::profile::Profile;

/// Computes the weighted match score, rounded to 2 decimal places.
///
/// Asymmetric by design: skill overlap is divided by the size of `main`'s
/// skill set, so `main` is always the JD side. Result is within [0, 100].
pub fn match_score(main: &Profile, other: &Profile) -> f64 {
    let skill_score = skill_overlap_score(&main.skills, &other.skills);
    let exp_score = text_similarity(&main.experience, &other.experience);
    let edu_score = text_similarity(&main.education, &other.education);

    let total = 0.7 * skill_score + 0.2 * exp_score + 0.1 * edu_score;
    round2(total)
}

/// `|main ∩ other| / |main| * 100`, over case-sensitive set semantics.
/// Zero if either side is empty.
fn skill_overlap_score(main: &[String], other: &[String]) -> f64 {
    if main.is_empty() || other.is_empty() {
        return 0.0;
    }
    let main_set: HashSet<&str> = main.iter().map(String::as_str).collect();
    let other_set: HashSet<&str> = other.iter().map(String::as_str).collect();
    let overlap = main_set.intersection(&other_set).count();
    (overlap as f64 / main_set.len() as f64) * 100.0
}

/// Character-level similarity ratio, case-insensitive, scaled to 0–100.
/// Zero if either string is empty.
fn text_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase()) * 100.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(skills: &[&str], experience: &str, education: &str) -> Profile {
        Profile {
            experience: experience.to_string(),
            education: education.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            job_title: None,
            company_name: None,
        }
    }

    #[test]
    fn test_identical_profiles_score_100() {
        let p = profile(&["Python", "AWS"], "5+ years", "Bachelor's degree");
        assert_eq!(match_score(&p, &p), 100.0);
    }

    #[test]
    fn test_half_skill_overlap_with_empty_text_fields() {
        let main = profile(&["Python", "AWS"], "", "");
        let other = profile(&["Python"], "", "");
        // 0.7 * 50 + 0 + 0
        assert_eq!(match_score(&main, &other), 35.0);
    }

    #[test]
    fn test_half_skill_overlap_with_matching_experience() {
        let main = profile(&["Python", "AWS"], "3+ years", "");
        let other = profile(&["Python"], "3+ years", "");
        // 0.7 * 50 + 0.2 * 100 + 0
        assert_eq!(match_score(&main, &other), 55.0);
    }

    #[test]
    fn test_empty_skill_set_on_either_side_scores_zero_overlap() {
        let main = profile(&[], "", "");
        let other = profile(&["Python"], "", "");
        assert_eq!(match_score(&main, &other), 0.0);
        assert_eq!(match_score(&other, &main), 0.0);
    }

    #[test]
    fn test_score_is_asymmetric_in_skill_denominator() {
        let main = profile(&["Python", "AWS"], "", "");
        let other = profile(&["Python", "AWS", "Docker", "K8s"], "", "");
        // main→other: 2/2 overlap; other→main: 2/4 overlap
        assert_eq!(match_score(&main, &other), 70.0);
        assert_eq!(match_score(&other, &main), 35.0);
    }

    #[test]
    fn test_text_similarity_is_case_insensitive() {
        assert_eq!(text_similarity("BACHELOR", "bachelor"), 100.0);
    }

    #[test]
    fn test_score_stays_within_bounds() {
        let main = profile(&["Rust", "Go", "C"], "10+ years", "PhD");
        let other = profile(&["Rust", "Go", "C"], "10+ years", "PhD");
        let score = match_score(&main, &other);
        assert!((0.0..=100.0).contains(&score));

        let unrelated = profile(&["Cobol"], "none", "none");
        let score = match_score(&main, &unrelated);
        assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn test_score_rounds_to_two_decimals() {
        let main = profile(&["A", "B", "C"], "", "");
        let other = profile(&["A"], "", "");
        // 0.7 * 33.333… = 23.333… → 23.33
        assert_eq!(match_score(&main, &other), 23.33);
    }
}
