use askama::Template;
use serde::Deserialize;

use super::{EmailTemplate, DEFAULT_COLOR};
use crate::clock::Clock;
use crate::domain::{or_default, required_scalar, required_text, Scalar};
use crate::error::TemplateError;

pub const DEFAULT_DELIVERY_ICON_URL: &str =
    "https://img.icons8.com/ios-filled/50/000000/delivery--v1.png";

/// "Out for delivery" notice with a tracking link.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryNotificationEmail {
    pub company_name: Option<String>,
    pub logo_url: Option<String>,
    pub order_number: Option<Scalar>,
    pub delivery_time: Option<String>,
    pub shipping_address: Option<String>,
    pub track_link: Option<String>,
    pub primary_color: Option<String>,
    pub delivery_icon_url: Option<String>,
}

#[derive(Template)]
#[template(path = "emails/delivery.html", escape = "none")]
struct DeliveryNotificationEmailHtml<'a> {
    company_name: &'a str,
    logo_url: &'a str,
    order_number: &'a Scalar,
    delivery_time: &'a str,
    shipping_address: &'a str,
    track_link: &'a str,
    primary_color: &'a str,
    delivery_icon_url: &'a str,
    year: i32,
}

impl EmailTemplate for DeliveryNotificationEmail {
    fn render_with(&self, clock: &dyn Clock) -> Result<String, TemplateError> {
        let company_name = required_text(&self.company_name, "companyName")?;
        let logo_url = required_text(&self.logo_url, "logoUrl")?;
        let order_number = required_scalar(&self.order_number, "orderNumber")?;
        let delivery_time = required_text(&self.delivery_time, "deliveryTime")?;
        let shipping_address = required_text(&self.shipping_address, "shippingAddress")?;
        let track_link = required_text(&self.track_link, "trackLink")?;

        let html = DeliveryNotificationEmailHtml {
            company_name,
            logo_url,
            order_number,
            delivery_time,
            shipping_address,
            track_link,
            primary_color: or_default(&self.primary_color, DEFAULT_COLOR),
            delivery_icon_url: or_default(&self.delivery_icon_url, DEFAULT_DELIVERY_ICON_URL),
            year: clock.current_year(),
        };

        Ok(html.render()?)
    }
}
