use std::collections::BTreeMap;

use askama::Template;
use serde::Deserialize;

use super::{EmailTemplate, DEFAULT_COLOR};
use crate::clock::Clock;
use crate::domain::{or_default, required_text, social_icons, SocialIcon};
use crate::error::TemplateError;

pub const DEFAULT_WELCOME_USERNAME: &str = "User";
pub const DEFAULT_WELCOME_CTA_TEXT: &str = "Get Started";

/// Onboarding email with a call to action and optional social icons.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeEmail {
    pub color: Option<String>,
    pub username: Option<String>,
    pub company_name: Option<String>,
    pub logo_url: Option<String>,
    pub cta_link: Option<String>,
    pub cta_text: Option<String>,
    /// Platform name to profile URL. Unknown platforms are ignored.
    #[serde(default)]
    pub social_links: BTreeMap<String, String>,
}

#[derive(Template)]
#[template(path = "emails/welcome.html", escape = "none")]
struct WelcomeEmailHtml<'a> {
    color: &'a str,
    username: &'a str,
    company_name: &'a str,
    logo_url: &'a str,
    cta_link: &'a str,
    cta_text: &'a str,
    social_icons: Vec<SocialIcon>,
    year: i32,
}

impl EmailTemplate for WelcomeEmail {
    fn render_with(&self, clock: &dyn Clock) -> Result<String, TemplateError> {
        let company_name = required_text(&self.company_name, "companyName")?;
        let logo_url = required_text(&self.logo_url, "logoUrl")?;
        let cta_link = required_text(&self.cta_link, "ctaLink")?;

        let html = WelcomeEmailHtml {
            color: or_default(&self.color, DEFAULT_COLOR),
            username: or_default(&self.username, DEFAULT_WELCOME_USERNAME),
            company_name,
            logo_url,
            cta_link,
            cta_text: or_default(&self.cta_text, DEFAULT_WELCOME_CTA_TEXT),
            social_icons: social_icons(&self.social_links),
            year: clock.current_year(),
        };

        Ok(html.render()?)
    }
}
