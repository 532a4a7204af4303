use askama::Template;
use serde::Deserialize;

use super::{EmailTemplate, DEFAULT_CURRENCY};
use crate::clock::Clock;
use crate::domain::{
    or_default, required_items, required_scalar, required_text, LineItem, OrderSummary, Scalar,
};
use crate::error::TemplateError;

pub const DEFAULT_ORDER_COLOR: &str = "#4a90e2";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmationEmail {
    pub company_name: Option<String>,
    pub logo_url: Option<String>,
    pub order_number: Option<Scalar>,
    pub order_date: Option<String>,
    pub items: Option<Vec<LineItem>>,
    /// Shown exactly as supplied; only the computed amounts are normalised.
    pub subtotal: Option<Scalar>,
    pub shipping: Option<Scalar>,
    pub tax: Option<Scalar>,
    pub discount: Option<Scalar>,
    pub currency: Option<String>,
    pub primary_color: Option<String>,
    pub view_order_link: Option<String>,
}

#[derive(Template)]
#[template(path = "emails/order_confirmation.html", escape = "none")]
struct OrderConfirmationEmailHtml<'a> {
    company_name: &'a str,
    logo_url: &'a str,
    order_number: &'a Scalar,
    order_date: &'a str,
    summary: OrderSummary,
    currency: &'a str,
    primary_color: &'a str,
    view_order_link: &'a str,
    year: i32,
}

impl EmailTemplate for OrderConfirmationEmail {
    fn render_with(&self, clock: &dyn Clock) -> Result<String, TemplateError> {
        let company_name = required_text(&self.company_name, "companyName")?;
        let logo_url = required_text(&self.logo_url, "logoUrl")?;
        let order_number = required_scalar(&self.order_number, "orderNumber")?;
        let order_date = required_text(&self.order_date, "orderDate")?;
        let items = required_items(&self.items, "items")?;
        let subtotal = required_scalar(&self.subtotal, "subtotal")?;
        let view_order_link = required_text(&self.view_order_link, "viewOrderLink")?;

        let summary = OrderSummary::compute(
            items,
            subtotal,
            self.shipping.as_ref(),
            self.tax.as_ref(),
            self.discount.as_ref(),
        )?;

        let html = OrderConfirmationEmailHtml {
            company_name,
            logo_url,
            order_number,
            order_date,
            summary,
            currency: or_default(&self.currency, DEFAULT_CURRENCY),
            primary_color: or_default(&self.primary_color, DEFAULT_ORDER_COLOR),
            view_order_link,
            year: clock.current_year(),
        };

        Ok(html.render()?)
    }
}
