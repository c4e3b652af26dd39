// src/prompts.rs
//! Fixed natural-language templates sent to the model. Placeholders use
//! `{name}` markers substituted with `str::replace`; the templates carry
//! worked JSON examples because the smaller models drift off-schema
//! without them.

use crate::job_posting::JobPosting;

const JOB_EXTRACTION_TEMPLATE: &str = r#"### SCRAPED TEXT FROM WEBSITE:
{page_data}

### INSTRUCTION:
Analyze the scraped text from the job posting page.
Extract and return ONLY the following information as a single, valid JSON object:
  - "role": The specific job title or role being advertised.
  - "skills": A list of key skills, technologies, or qualifications required for the job. If listed as a string, try to parse into a list. If not found, use an empty list [].
  - "description": A concise summary of the job description, responsibilities, or role overview.
Ensure the output is ONLY the JSON object, with no introductory text, explanations, or markdown formatting like ```json ... ```.
If you cannot reliably extract a field, use a suitable default like "Not specified" for strings or an empty list for skills.

### VALID JSON OUTPUT EXAMPLE:
{
  "role": "Software Engineer",
  "skills": ["Python", "React", "AWS", "SQL"],
  "description": "Develop and maintain web applications using Python and React..."
}

### GENERATE JSON:"#;

const RESUME_TEMPLATE: &str = r#"### JOB POSTING DETAILS:
Role: {job_role}
Skills Required: {job_skills}
Job Description: {job_desc_text}

### RESUME CONTENT:
{resume_text}

### INSTRUCTION:
1. Analyze the resume content against the job posting details.
2. Compare the skills, experience, and qualifications mentioned in the resume with the required skills and job description.
3. Calculate the percentage of required skills explicitly mentioned or strongly implied in the resume.
4. Based only on the analysis of the resume against the job requirements:
   - If the match (skills and relevant experience) is 80% or higher: Set Suitability to "Yes". Generate at least 5 relevant technical interview questions with concise answers based on the job requirements and the candidate's resume. Generate at least 2 behavioral questions related to experiences described in the resume. List the matched skills and the calculated percentage.
   - If the match is less than 80%: Set Suitability to "No". Provide detailed reasons for unsuitability focusing on specific skill gaps or missing experience highlighted in the job description but absent in the resume. Offer 3-4 specific, actionable suggestions for improvement tailored to bridge the gap. List the matched skills and the calculated percentage.
5. Structure the entire output as a single, valid JSON object with keys "Suitability", "Skill Match Percentage", "Matched Skills", "Interview Questions" (list of objects with "Question" and "Answer"), "Behavioral Questions" (list of strings), "Reasons for Unsuitability" (list of strings), "Suggestions" (list of strings). Only include keys relevant to the suitability outcome.
6. Ensure the JSON is valid and contains no preamble or commentary outside the JSON structure.

### VALID JSON OUTPUT EXAMPLE (Suitability: Yes):
{
  "Suitability": "Yes",
  "Skill Match Percentage": 90,
  "Matched Skills": ["Java", "Spring Boot", "SQL", "Microservices", "AWS"],
  "Interview Questions": [
    {"Question": "Explain the difference between @Component, @Service, and @Repository in Spring.", "Answer": "@Component is a generic stereotype. @Service is for business logic, @Repository is for data access layers."},
    {"Question": "How would you implement security in a Spring Boot application?", "Answer": "Using Spring Security, configure authentication (e.g., JWT, OAuth2) and authorization."}
  ],
  "Behavioral Questions": [
    "Your resume mentions leading a project migration; can you elaborate on the challenges and your role?"
  ]
}

### VALID JSON OUTPUT EXAMPLE (Suitability: No):
{
  "Suitability": "No",
  "Skill Match Percentage": 50,
  "Matched Skills": ["Java", "SQL"],
  "Reasons for Unsuitability": [
    "Lacks required experience with Spring Boot framework.",
    "Missing experience with cloud platforms like AWS, which is listed as required."
  ],
  "Suggestions": [
    "Focus on learning Spring Boot through tutorials and building small projects.",
    "Gain hands-on experience with core AWS services via the AWS Free Tier."
  ]
}

### GENERATE JSON:"#;

const PORTFOLIO_TEMPLATE: &str = r#"### JOB POSTING DETAILS:
Role: {job_role}
Skills Required: {job_skills}
Job Description: {job_desc_text}

### CANDIDATE PORTFOLIO SKILLS:
{candidate_skills}

### INSTRUCTION:
1. Compare the candidate's portfolio skills with the required job skills.
2. Calculate the percentage of required skills matched by the candidate's portfolio.
3. If the candidate's skills match at least 80% of the required skills:
   - Set Suitability to "Yes".
   - Provide 5-10 technical interview questions with answers that would be relevant for this role.
   - Include 2-3 behavioral questions about their portfolio projects.
   - List the matched skills and the percentage of required skills matched.
4. If the candidate's skills match less than 80%:
   - Set Suitability to "No".
   - Provide detailed reasons for unsuitability and identify specific skill gaps.
   - Offer 3-4 tailored suggestions for improvement.
   - Always list the matched skills and the percentage of required skills matched.
5. Structure the entire output as a single, valid JSON object with keys "Suitability", "Skill Match Percentage", "Matched Skills", "Interview Questions" (list of objects with "Question" and "Answer"), "Behavioral Questions" (list of strings), "Reasons for Unsuitability" (list of strings), "Suggestions" (list of strings). Only include keys relevant to the suitability outcome.
6. Only return valid JSON with no additional commentary.

### GENERATE JSON:"#;

const COMBINED_TEMPLATE: &str = r#"### JOB POSTING DETAILS:
Role: {job_role}
Skills Required: {job_skills}
Job Description: {job_desc_text}

### RESUME CONTENT:
{resume_text}

### PORTFOLIO SKILLS:
{candidate_skills}

### INSTRUCTION:
1. Analyze the candidate's resume and portfolio skills together.
2. Compare the candidate's combined skills with the required job skills and calculate the percentage of required skills matched.
3. If the candidate's skills match at least 80% of the required skills:
   - Set Suitability to "Yes".
   - Return 5-10 technical interview questions with their answers that are relevant for the role.
   - Include 2-3 behavioral questions regarding the candidate's projects.
   - List the matched skills and the percentage of required skills matched.
4. If the candidate's skills match less than 80%:
   - Set Suitability to "No".
   - Provide detailed reasons for unsuitability and identify specific skill gaps.
   - Offer 3-4 tailored suggestions for improvement.
   - Always list the matched skills and the percentage of required skills matched.
5. Structure the entire output as a single, valid JSON object with keys "Suitability", "Skill Match Percentage", "Matched Skills", "Interview Questions" (list of objects with "Question" and "Answer"), "Behavioral Questions" (list of strings), "Reasons for Unsuitability" (list of strings), "Suggestions" (list of strings). Only include keys relevant to the suitability outcome.
6. Only return valid JSON with no additional commentary.

### GENERATE JSON:"#;

pub fn job_extraction_prompt(page_text: &str) -> String {
    JOB_EXTRACTION_TEMPLATE.replace("{page_data}", page_text)
}

pub fn resume_analysis_prompt(job: &JobPosting, resume_text: &str) -> String {
    fill_job_fields(RESUME_TEMPLATE, job).replace("{resume_text}", resume_text)
}

pub fn portfolio_analysis_prompt(job: &JobPosting, skills: &[String]) -> String {
    fill_job_fields(PORTFOLIO_TEMPLATE, job).replace("{candidate_skills}", &skills.join(", "))
}

pub fn combined_analysis_prompt(job: &JobPosting, resume_text: &str, skills: &[String]) -> String {
    fill_job_fields(COMBINED_TEMPLATE, job)
        .replace("{resume_text}", resume_text)
        .replace("{candidate_skills}", &skills.join(", "))
}

fn fill_job_fields(template: &str, job: &JobPosting) -> String {
    template
        .replace("{job_role}", &job.role)
        .replace("{job_skills}", &job.skills_joined())
        .replace("{job_desc_text}", &job.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> JobPosting {
        JobPosting {
            role: "Backend Engineer".to_string(),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            description: "Build APIs.".to_string(),
        }
    }

    #[test]
    fn test_job_extraction_prompt_substitutes_page_text() {
        let prompt = job_extraction_prompt("We are hiring a plumber.");
        assert!(prompt.contains("We are hiring a plumber."));
        assert!(!prompt.contains("{page_data}"));
    }

    #[test]
    fn test_resume_prompt_fills_all_placeholders() {
        let prompt = resume_analysis_prompt(&sample_job(), "10 years of Rust.");
        assert!(prompt.contains("Role: Backend Engineer"));
        assert!(prompt.contains("Skills Required: Rust, SQL"));
        assert!(prompt.contains("10 years of Rust."));
        assert!(!prompt.contains("{job_role}"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_combined_prompt_includes_both_inputs() {
        let skills = vec!["Docker".to_string(), "Kubernetes".to_string()];
        let prompt = combined_analysis_prompt(&sample_job(), "Resume here.", &skills);
        assert!(prompt.contains("Resume here."));
        assert!(prompt.contains("Docker, Kubernetes"));
    }

    #[test]
    fn test_portfolio_prompt_joins_skills() {
        let skills = vec!["Rust".to_string()];
        let prompt = portfolio_analysis_prompt(&sample_job(), &skills);
        assert!(prompt.contains("### CANDIDATE PORTFOLIO SKILLS:\nRust"));
    }
}
