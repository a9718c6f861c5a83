//! Message templates for generated outreach.
//!
//! `{name}` is left in the email body so the recipient's name can be
//! merged at send time.

/// Email subject line
pub fn format_email_subject(company: &str, industry: &str) -> String {
    format!("Scaling {industry} operations: Capital solutions for {company}")
}

/// Email body opening
pub fn format_email_body(company: &str, industry: &str) -> String {
    format!("Hi {{name}},\n\nI've been following {company}'s growth in the {industry} space...")
}

/// LinkedIn connection message
pub fn format_linkedin_message(company: &str) -> String {
    format!("Impressive growth at {company}! Would love to discuss capital solutions...")
}
