use askama::Template;
use serde::Deserialize;

use super::EmailTemplate;
use crate::clock::Clock;
use crate::domain::{or_default, present, required_text};
use crate::error::TemplateError;

pub const DEFAULT_OFFER_CTA_TEXT: &str = "Redeem My Offer";
pub const DEFAULT_CTA_COLOR: &str = "#DC143C";
pub const DEFAULT_OFFER_BACKGROUND: &str =
    "https://res.cloudinary.com/ddo15zw7d/image/upload/v1759215440/uploads/offer_p4rhtm.png";

/// Promotional offer with an optional promo code and expiry notice.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialOfferEmail {
    pub logo_url: Option<String>,
    pub company_name: Option<String>,
    pub offer_title: Option<String>,
    pub offer_subtitle: Option<String>,
    pub offer_details: Option<String>,
    pub offer_code: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub cta_color: Option<String>,
    pub bg_image_url: Option<String>,
    /// Completes "Hurry! This exclusive offer ...", e.g. "ends Sunday".
    pub expiry_text: Option<String>,
}

#[derive(Template)]
#[template(path = "emails/special_offer.html", escape = "none")]
struct SpecialOfferEmailHtml<'a> {
    logo_url: &'a str,
    company_name: &'a str,
    offer_title: &'a str,
    offer_subtitle: &'a str,
    offer_details: &'a str,
    offer_code: Option<&'a str>,
    cta_text: &'a str,
    cta_link: &'a str,
    cta_color: &'a str,
    banner_image: &'a str,
    expiry_text: Option<&'a str>,
    year: i32,
}

impl EmailTemplate for SpecialOfferEmail {
    fn render_with(&self, clock: &dyn Clock) -> Result<String, TemplateError> {
        let logo_url = required_text(&self.logo_url, "logoUrl")?;
        let company_name = required_text(&self.company_name, "companyName")?;
        let offer_title = required_text(&self.offer_title, "offerTitle")?;
        let offer_subtitle = required_text(&self.offer_subtitle, "offerSubtitle")?;
        let offer_details = required_text(&self.offer_details, "offerDetails")?;
        let cta_link = required_text(&self.cta_link, "ctaLink")?;

        let html = SpecialOfferEmailHtml {
            logo_url,
            company_name,
            offer_title,
            offer_subtitle,
            offer_details,
            offer_code: present(&self.offer_code),
            cta_text: or_default(&self.cta_text, DEFAULT_OFFER_CTA_TEXT),
            cta_link,
            cta_color: or_default(&self.cta_color, DEFAULT_CTA_COLOR),
            banner_image: present(&self.bg_image_url).unwrap_or(DEFAULT_OFFER_BACKGROUND),
            expiry_text: present(&self.expiry_text),
            year: clock.current_year(),
        };

        Ok(html.render()?)
    }
}
