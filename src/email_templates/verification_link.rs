use askama::Template;
use serde::Deserialize;

use super::{footer_links, EmailTemplate, FooterLink, DEFAULT_COLOR, DEFAULT_USERNAME};
use crate::clock::Clock;
use crate::domain::{or_default, present, required_scalar, required_text, Scalar, Variant};
use crate::error::TemplateError;

/// Email verification by confirmation link.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationLinkEmail {
    #[serde(default)]
    pub variant: Variant,
    pub color: Option<String>,
    pub username: Option<String>,
    pub verification_link: Option<String>,
    pub expiration_time: Option<Scalar>,
    pub company_name: Option<String>,
    pub support_email: Option<String>,
    pub logo_url: Option<String>,
    pub company_website: Option<String>,
}

#[derive(Template)]
#[template(path = "emails/verification_link.html", escape = "none")]
struct VerificationLinkEmailHtml<'a> {
    compact: bool,
    color: &'a str,
    username: &'a str,
    verification_link: &'a str,
    expiration_time: &'a Scalar,
    company_name: &'a str,
    logo_url: &'a str,
    support_email: Option<&'a str>,
    footer_links: Vec<FooterLink>,
    year: i32,
}

impl EmailTemplate for VerificationLinkEmail {
    fn render_with(&self, clock: &dyn Clock) -> Result<String, TemplateError> {
        let verification_link = required_text(&self.verification_link, "verificationLink")?;
        let expiration_time = required_scalar(&self.expiration_time, "expirationTime")?;
        let company_name = required_text(&self.company_name, "companyName")?;
        let logo_url = required_text(&self.logo_url, "logoUrl")?;

        let html = VerificationLinkEmailHtml {
            compact: self.variant == Variant::Compact,
            color: or_default(&self.color, DEFAULT_COLOR),
            username: or_default(&self.username, DEFAULT_USERNAME),
            verification_link,
            expiration_time,
            company_name,
            logo_url,
            support_email: present(&self.support_email),
            footer_links: footer_links(None, present(&self.company_website)),
            year: clock.current_year(),
        };

        Ok(html.render()?)
    }
}
