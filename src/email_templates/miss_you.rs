use askama::Template;
use serde::Deserialize;

use super::{EmailTemplate, DEFAULT_COLOR};
use crate::clock::Clock;
use crate::domain::{or_default, present, required_text};
use crate::error::TemplateError;

pub const DEFAULT_MISS_YOU_BACKGROUND: &str = "https://media.istockphoto.com/id/623368750/photo/sacred-birma-cat-in-interior.jpg?s=612x612&w=0&k=20&c=KfNi_sRwTCtXTnnUvEYVBnRg9arrA3JBC7SppRtSRzs=";

/// Re-engagement email for users who have not visited in a while.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeMissYouEmail {
    pub logo_url: Option<String>,
    pub color: Option<String>,
    pub nav_link: Option<String>,
    /// Hero image. Empty falls back to the stock image as well.
    pub bg_image_url: Option<String>,
    pub company_name: Option<String>,
}

#[derive(Template)]
#[template(path = "emails/miss_you.html", escape = "none")]
struct WeMissYouEmailHtml<'a> {
    color: &'a str,
    logo_url: &'a str,
    nav_link: &'a str,
    background_image: &'a str,
    company_name: &'a str,
    year: i32,
}

impl EmailTemplate for WeMissYouEmail {
    fn render_with(&self, clock: &dyn Clock) -> Result<String, TemplateError> {
        let logo_url = required_text(&self.logo_url, "logoUrl")?;
        let nav_link = required_text(&self.nav_link, "navLink")?;
        let company_name = required_text(&self.company_name, "companyName")?;

        let html = WeMissYouEmailHtml {
            color: or_default(&self.color, DEFAULT_COLOR),
            logo_url,
            nav_link,
            background_image: present(&self.bg_image_url).unwrap_or(DEFAULT_MISS_YOU_BACKGROUND),
            company_name,
            year: clock.current_year(),
        };

        Ok(html.render()?)
    }
}
