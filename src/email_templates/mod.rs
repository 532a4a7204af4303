//! One renderer per email kind.
//!
//! Every request type follows the same contract: required fields are checked
//! first (the first one missing is reported), optional fields fall back to
//! their default only when absent, and gating fields drop their fragment when
//! absent or empty. Caller values are interpolated as-is, without escaping.

mod delivery;
mod feedback;
mod miss_you;
mod order_confirmation;
mod otp;
mod payment_receipt;
mod reset_password;
mod special_offer;
mod verification_code;
mod verification_link;
mod welcome;

pub use delivery::{DeliveryNotificationEmail, DEFAULT_DELIVERY_ICON_URL};
pub use feedback::FeedbackEmail;
pub use miss_you::{WeMissYouEmail, DEFAULT_MISS_YOU_BACKGROUND};
pub use order_confirmation::{OrderConfirmationEmail, DEFAULT_ORDER_COLOR};
pub use otp::OtpEmail;
pub use payment_receipt::PaymentReceiptEmail;
pub use reset_password::ResetPasswordEmail;
pub use special_offer::{
    SpecialOfferEmail, DEFAULT_CTA_COLOR, DEFAULT_OFFER_BACKGROUND, DEFAULT_OFFER_CTA_TEXT,
};
pub use verification_code::VerificationCodeEmail;
pub use verification_link::VerificationLinkEmail;
pub use welcome::{WelcomeEmail, DEFAULT_WELCOME_CTA_TEXT, DEFAULT_WELCOME_USERNAME};

use crate::clock::{Clock, SystemClock};
use crate::error::TemplateError;

pub const DEFAULT_COLOR: &str = "#000000";
pub const DEFAULT_USERNAME: &str = "user";
pub const DEFAULT_CURRENCY: &str = "$";

const FOOTER_SUPPORT_LABEL: &str = "Contact Support";
const FOOTER_WEBSITE_LABEL: &str = "Visit our website";

pub trait EmailTemplate {
    /// Validates the request and renders the full HTML document.
    fn render_with(&self, clock: &dyn Clock) -> Result<String, TemplateError>;

    fn render(&self) -> Result<String, TemplateError> {
        self.render_with(&SystemClock)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterLink {
    pub href: String,
    pub label: &'static str,
}

/// Footer links in display order, skipping the ones the caller left out.
fn footer_links(support_email: Option<&str>, company_website: Option<&str>) -> Vec<FooterLink> {
    let support = support_email.map(|email| FooterLink {
        href: format!("mailto:{}", email),
        label: FOOTER_SUPPORT_LABEL,
    });
    let website = company_website.map(|url| FooterLink {
        href: url.to_string(),
        label: FOOTER_WEBSITE_LABEL,
    });

    support.into_iter().chain(website).collect()
}
