// src/render.rs
//! Turns a normalized analysis report into the HTML fragment returned to the
//! caller. All user- and model-supplied strings are escaped before
//! interpolation; the model writes prose, not markup.

use crate::analysis::{AnalysisReport, QuestionAnswer};
use crate::job_posting::JobPosting;

const MIN_INTERVIEW_QUESTIONS: usize = 5;

/// Static filler pairs used when the model returns a "Yes" verdict with
/// fewer interview questions than the minimum.
fn default_interview_questions() -> Vec<QuestionAnswer> {
    [
        (
            "Can you walk us through your most challenging project?",
            "This project involved [brief description] where I overcame [specific challenge] by [solution].",
        ),
        (
            "How do you stay updated with the latest developments in your field?",
            "I regularly engage with industry news, attend webinars, and follow key influencers.",
        ),
        (
            "What strategies do you use to overcome technical challenges?",
            "I analyze the problem, research solutions, and consult with colleagues when necessary.",
        ),
        (
            "Can you describe a time when you had to learn a new skill quickly?",
            "I took an online course and applied the knowledge immediately on a real-world project.",
        ),
        (
            "How do you manage deadlines when multiple projects overlap?",
            "I prioritize tasks, set clear milestones, and maintain regular communication with my team.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| QuestionAnswer {
        question: question.to_string(),
        answer: answer.to_string(),
    })
    .collect()
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Renders the analysis result as an HTML fragment.
pub fn render_fragment(report: &AnalysisReport, job: &JobPosting) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"analysis-result\">\n");
    html.push_str(&format!(
        "<h2>Suitability: {}</h2>\n",
        escape_html(&report.suitability)
    ));

    html.push_str("<h3>Job Details</h3>\n");
    html.push_str(&format!(
        "<p><strong>Role:</strong> {}</p>\n",
        escape_html(&job.role)
    ));
    html.push_str(&format!(
        "<p><strong>Description:</strong> {}</p>\n",
        escape_html(&job.description)
    ));
    html.push_str(&format!(
        "<p><strong>Skills Required:</strong> {}</p>\n",
        escape_html(&job.skills_joined())
    ));

    html.push_str("<h3>Matched Skills</h3>\n");
    html.push_str(&format!(
        "<p><strong>Percentage:</strong> {}%</p>\n",
        escape_html(&report.skill_match_percentage)
    ));
    html.push_str(&render_list(&report.matched_skills));

    if report.is_suitable() {
        let mut questions = report.interview_questions.clone();
        if questions.len() < MIN_INTERVIEW_QUESTIONS {
            let needed = MIN_INTERVIEW_QUESTIONS - questions.len();
            questions.extend(default_interview_questions().into_iter().take(needed));
        }

        html.push_str("<h3>Interview Questions</h3>\n<ul>\n");
        for qa in &questions {
            html.push_str(&format!(
                "<li><strong>Q:</strong> {}<br><strong>A:</strong> {}</li>\n",
                escape_html(&qa.question),
                escape_html(&qa.answer)
            ));
        }
        html.push_str("</ul>\n");

        if !report.behavioral_questions.is_empty() {
            html.push_str("<h3>Behavioral Questions</h3>\n");
            html.push_str(&render_list(&report.behavioral_questions));
        }
    } else {
        html.push_str("<h3>Reasons for Unsuitability</h3>\n");
        html.push_str(&render_list(&report.unsuitability_reasons));
        html.push_str("<h3>Suggestions for Improvement</h3>\n");
        html.push_str(&render_list(&report.suggestions));
    }

    html.push_str("</div>");
    html
}

fn render_list(items: &[String]) -> String {
    let mut out = String::from("<ul>\n");
    for item in items {
        out.push_str(&format!("<li>{}</li>\n", escape_html(item)));
    }
    out.push_str("</ul>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> JobPosting {
        JobPosting {
            role: "Backend Engineer".to_string(),
            skills: vec!["Rust".to_string()],
            description: "Build APIs.".to_string(),
        }
    }

    fn suitable_report() -> AnalysisReport {
        AnalysisReport {
            suitability: "Yes".to_string(),
            skill_match_percentage: "90".to_string(),
            matched_skills: vec!["Rust".to_string()],
            interview_questions: vec![QuestionAnswer {
                question: "What is ownership?".to_string(),
                answer: "Move semantics.".to_string(),
            }],
            behavioral_questions: vec!["Tell me about a project.".to_string()],
            unsuitability_reasons: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    #[test]
    fn test_suitable_fragment_pads_questions_to_minimum() {
        let html = render_fragment(&suitable_report(), &sample_job());
        assert!(html.contains("Suitability: Yes"));
        assert!(html.contains("What is ownership?"));
        // One model question plus four fillers.
        assert_eq!(html.matches("<strong>Q:</strong>").count(), 5);
        assert!(html.contains("most challenging project"));
    }

    #[test]
    fn test_no_padding_when_enough_questions() {
        let mut report = suitable_report();
        report.interview_questions = (0..6)
            .map(|i| QuestionAnswer {
                question: format!("Q{}", i),
                answer: format!("A{}", i),
            })
            .collect();
        let html = render_fragment(&report, &sample_job());
        assert_eq!(html.matches("<strong>Q:</strong>").count(), 6);
        assert!(!html.contains("most challenging project"));
    }

    #[test]
    fn test_unsuitable_fragment_shows_reasons_and_suggestions() {
        let report = AnalysisReport {
            suitability: "No".to_string(),
            skill_match_percentage: "40".to_string(),
            matched_skills: vec!["SQL".to_string()],
            interview_questions: Vec::new(),
            behavioral_questions: Vec::new(),
            unsuitability_reasons: vec!["No Rust experience.".to_string()],
            suggestions: vec!["Learn Rust.".to_string()],
        };
        let html = render_fragment(&report, &sample_job());
        assert!(html.contains("Reasons for Unsuitability"));
        assert!(html.contains("No Rust experience."));
        assert!(html.contains("Learn Rust."));
        assert!(!html.contains("Interview Questions"));
    }

    #[test]
    fn test_untrusted_content_is_escaped() {
        let mut job = sample_job();
        job.role = "<script>alert(1)</script>".to_string();
        let html = render_fragment(&suitable_report(), &job);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_escape_html_entities() {
        assert_eq!(escape_html(r#"a & b < c > "d" 'e'"#), "a &amp; b &lt; c &gt; &quot;d&quot; &#39;e&#39;");
    }
}
