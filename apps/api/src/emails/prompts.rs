// All LLM prompt constants for the email drafting module.

/// Interview-invitation prompt. Replace `{candidate_name}`, `{job_title}`,
/// `{company_name}`, `{match_score}`, `{candidate_skills}`, `{missing_skills}`.
pub const INTERVIEW_EMAIL_PROMPT_TEMPLATE: &str = r#"Generate a professional, personalized interview invitation email for the best-matched candidate.

**Context:**
- Candidate: {candidate_name}
- Position: {job_title}
- Company: {company_name}
- Match Score: {match_score}/100
- Strong Skills: {candidate_skills}
- Missing Skills: {missing_skills}

**Email Requirements:**
1. Professional and personalized tone
2. Mention specific skills that impressed us
3. Express genuine interest in their candidacy
4. Include clear next steps for interview scheduling
5. Keep it concise but warm
6. Don't mention the exact match score number

**Structure:**
- Subject line (separate)
- Greeting
- Why we're impressed (specific skills/experience)
- Interview invitation
- Next steps
- Professional closing

Format as:
Subject: [subject line]

[email body]
"#;

/// Rejection prompt. Replace `{candidate_name}`, `{job_title}`,
/// `{company_name}`, `{match_score}`, `{candidate_skills}`.
pub const REJECTION_EMAIL_PROMPT_TEMPLATE: &str = r#"Generate a polite, respectful rejection email for a candidate who wasn't selected.

**Context:**
- Candidate: {candidate_name}
- Position: {job_title}
- Company: {company_name}
- Match Score: {match_score}/100
- Candidate Skills: {candidate_skills}

**Email Requirements:**
1. Respectful and appreciative tone
2. Thank them for their interest and time
3. Briefly mention something positive about their profile
4. Inform them we've moved forward with another candidate
5. Encourage future applications
6. Keep it brief but warm
7. Don't mention specific reasons for rejection or match scores

**Structure:**
- Subject line (separate)
- Greeting
- Thank them for applying
- Mention something positive
- Inform about decision
- Encourage future applications
- Professional closing

Format as:
Subject: [subject line]

[email body]
"#;
