use askama::Template;
use serde::Deserialize;

use super::{footer_links, EmailTemplate, FooterLink, DEFAULT_COLOR, DEFAULT_USERNAME};
use crate::clock::Clock;
use crate::domain::{or_default, present, required_scalar, required_text, Scalar, Variant};
use crate::error::TemplateError;

/// Email verification by one-time code.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationCodeEmail {
    #[serde(default)]
    pub variant: Variant,
    pub color: Option<String>,
    pub username: Option<String>,
    pub verification_code: Option<Scalar>,
    /// Minutes until the code expires.
    pub expiration_time: Option<Scalar>,
    pub company_name: Option<String>,
    pub support_email: Option<String>,
    pub logo_url: Option<String>,
    pub company_website: Option<String>,
}

#[derive(Template)]
#[template(path = "emails/verification_code.html", escape = "none")]
struct VerificationCodeEmailHtml<'a> {
    compact: bool,
    color: &'a str,
    username: &'a str,
    verification_code: &'a Scalar,
    expiration_time: &'a Scalar,
    company_name: &'a str,
    logo_url: &'a str,
    support_email: Option<&'a str>,
    footer_links: Vec<FooterLink>,
    year: i32,
}

impl EmailTemplate for VerificationCodeEmail {
    fn render_with(&self, clock: &dyn Clock) -> Result<String, TemplateError> {
        let verification_code = required_scalar(&self.verification_code, "verificationCode")?;
        let expiration_time = required_scalar(&self.expiration_time, "expirationTime")?;
        let company_name = required_text(&self.company_name, "companyName")?;
        let logo_url = required_text(&self.logo_url, "logoUrl")?;

        let support_email = present(&self.support_email);
        let html = VerificationCodeEmailHtml {
            compact: self.variant == Variant::Compact,
            color: or_default(&self.color, DEFAULT_COLOR),
            username: or_default(&self.username, DEFAULT_USERNAME),
            verification_code,
            expiration_time,
            company_name,
            logo_url,
            support_email,
            footer_links: footer_links(support_email, present(&self.company_website)),
            year: clock.current_year(),
        };

        Ok(html.render()?)
    }
}
