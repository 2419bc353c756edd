// All LLM prompt constants for the JD module.

/// Rephrase/format prompt for JDs extracted from uploaded files.
/// Replace `{jd_text}` before sending.
pub const UPLOAD_REFINE_PROMPT_TEMPLATE: &str = r#"Please rephrase and format this job description:

{jd_text}

### STRICT RULES:
    1. **ONLY keep sections explicitly mentioned in the input text.**
    - If a section (e.g., "Compensation & Benefits") is **not** in the input, **omit it entirely**.
    - **DO NOT** add placeholder text like "Not specified" or "Information not provided."

    2. **Preserve the original meaning** while improving clarity and conciseness.
    3. **Standardize formatting** (use bullet points, headings, and consistent spacing).
"#;

/// Rewrite prompt for manually pasted JD text. Replace `{jd_text}` before sending.
pub const MANUAL_REFINE_PROMPT_TEMPLATE: &str = r#"Please professionally format and rewrite the following job description:

{jd_text}

### STRICT RULES:
    1. **ONLY keep sections explicitly mentioned in the input text.**
    - If a section (e.g., "Compensation & Benefits") is **not** in the input, **omit it entirely**.
    - **DO NOT** add placeholder text like "Not specified" or "Information not provided."

    2. **Preserve the original meaning** while improving clarity and conciseness.
    3. **Standardize formatting** (use bullet points, headings, and consistent spacing).
"#;

/// Templated JD generation prompt. Replace the seven form-field placeholders
/// before sending.
pub const GENERATE_JD_PROMPT_TEMPLATE: &str = r#"Write a professional job description using the following details:

- Job Title: {job_title}
- Experience: {experience} years
- Must-have Skills: {skills}
- Company: {company}
- Employment Type: {employment_type}
- Industry: {industry}
- Location: {location}

### STRICT INSTRUCTIONS:
1. DO NOT include any "To Apply" section.
2. DO NOT include any "About the Company" or company introduction paragraph.
3. Focus only on role-specific responsibilities, qualifications, skills, and compensation (if applicable).
4. Keep the tone professional and concise.
"#;

/// Structured extraction prompt — instructs the model to emit a JSON object
/// matching the `Profile` schema. Replace `{jd_text}` before sending.
pub const JD_PARSE_PROMPT_TEMPLATE: &str = r#"Analyze this job description and return JSON with ONLY explicitly mentioned keywords:

{
    "experience": "X+ years",
    "education": "highest degree required",
    "skills": [list of skills like languages, frameworks, cloud, databases],
    "job_title": "extracted job title",
    "company_name": "company name if mentioned"
}

Job Description:
{jd_text}

### STRICT RULES:
1. Extract ONLY exact words/phrases that appear in the text
2. NEVER add:
- Explanations
- Placeholder text (e.g., "Nice to have", "Preferred")
- Implied requirements
- Any text not verbatim from the job description
3. If a field has no explicit mention in the text, omit it entirely
4. For skills:
- Only include specific technologies/tools (e.g., "Python", "AWS")
- Exclude generic terms (e.g., "teamwork", "communication")
5. For experience:
- Only include exact phrases like "5+ years"
- Don't interpret ranges
"#;
