use askama::Template;
use serde::Deserialize;

use super::{footer_links, EmailTemplate, FooterLink, DEFAULT_COLOR, DEFAULT_USERNAME};
use crate::clock::Clock;
use crate::domain::{or_default, present, required_text, Variant};
use crate::error::TemplateError;

/// Request for feedback on a recent experience.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEmail {
    #[serde(default)]
    pub variant: Variant,
    pub color: Option<String>,
    pub username: Option<String>,
    /// Also read from `feedbacklink`. Sending both spellings is a malformed payload.
    #[serde(alias = "feedbacklink")]
    pub feedback_link: Option<String>,
    pub company_name: Option<String>,
    pub logo_url: Option<String>,
    pub company_website: Option<String>,
}

#[derive(Template)]
#[template(path = "emails/feedback.html", escape = "none")]
struct FeedbackEmailHtml<'a> {
    compact: bool,
    color: &'a str,
    username: &'a str,
    feedback_link: &'a str,
    company_name: &'a str,
    logo_url: &'a str,
    footer_links: Vec<FooterLink>,
    year: i32,
}

impl EmailTemplate for FeedbackEmail {
    fn render_with(&self, clock: &dyn Clock) -> Result<String, TemplateError> {
        let feedback_link = required_text(&self.feedback_link, "feedbackLink")?;
        let company_name = required_text(&self.company_name, "companyName")?;
        let logo_url = required_text(&self.logo_url, "logoUrl")?;

        let html = FeedbackEmailHtml {
            compact: self.variant == Variant::Compact,
            color: or_default(&self.color, DEFAULT_COLOR),
            username: or_default(&self.username, DEFAULT_USERNAME),
            feedback_link,
            company_name,
            logo_url,
            footer_links: footer_links(None, present(&self.company_website)),
            year: clock.current_year(),
        };

        Ok(html.render()?)
    }
}
