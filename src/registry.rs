use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::clock::Clock;
use crate::domain::Variant;
use crate::email_templates::{
    DeliveryNotificationEmail, EmailTemplate, FeedbackEmail, OrderConfirmationEmail, OtpEmail,
    PaymentReceiptEmail, ResetPasswordEmail, SpecialOfferEmail, VerificationCodeEmail,
    VerificationLinkEmail, WeMissYouEmail, WelcomeEmail,
};
use crate::error::TemplateError;

/// Stable keys callers use to pick a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    VerificationEmailWithCodeV1,
    VerificationEmailWithCodeV2,
    VerificationEmailWithLinkV1,
    VerificationEmailWithLinkV2,
    ResetPasswordEmailV1,
    ResetPasswordEmailV2,
    OtpEmailV1,
    OtpEmailV2,
    FeedbackEmailV1,
    FeedbackEmailV2,
    WeMissYouEmail,
    SpecialOfferEmail,
    WelcomeEmail,
    OrderConfirmationEmail,
    DeliveryNotificationEmail,
    PaymentReceiptEmail,
}

impl TemplateName {
    pub const ALL: [TemplateName; 16] = [
        TemplateName::VerificationEmailWithCodeV1,
        TemplateName::VerificationEmailWithCodeV2,
        TemplateName::VerificationEmailWithLinkV1,
        TemplateName::VerificationEmailWithLinkV2,
        TemplateName::ResetPasswordEmailV1,
        TemplateName::ResetPasswordEmailV2,
        TemplateName::OtpEmailV1,
        TemplateName::OtpEmailV2,
        TemplateName::FeedbackEmailV1,
        TemplateName::FeedbackEmailV2,
        TemplateName::WeMissYouEmail,
        TemplateName::SpecialOfferEmail,
        TemplateName::WelcomeEmail,
        TemplateName::OrderConfirmationEmail,
        TemplateName::DeliveryNotificationEmail,
        TemplateName::PaymentReceiptEmail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateName::VerificationEmailWithCodeV1 => "verificationEmailWithCodeV1",
            TemplateName::VerificationEmailWithCodeV2 => "verificationEmailWithCodeV2",
            TemplateName::VerificationEmailWithLinkV1 => "verificationEmailWithLinkV1",
            TemplateName::VerificationEmailWithLinkV2 => "verificationEmailWithLinkV2",
            TemplateName::ResetPasswordEmailV1 => "resetPasswordEmailV1",
            TemplateName::ResetPasswordEmailV2 => "resetPasswordEmailV2",
            TemplateName::OtpEmailV1 => "otpEmailV1",
            TemplateName::OtpEmailV2 => "otpEmailV2",
            TemplateName::FeedbackEmailV1 => "feedbackEmailV1",
            TemplateName::FeedbackEmailV2 => "feedbackEmailV2",
            TemplateName::WeMissYouEmail => "weMissYouEmail",
            TemplateName::SpecialOfferEmail => "specialOfferEmail",
            TemplateName::WelcomeEmail => "welcomeEmail",
            TemplateName::OrderConfirmationEmail => "orderConfirmationEmail",
            TemplateName::DeliveryNotificationEmail => "deliveryNotificationEmail",
            TemplateName::PaymentReceiptEmail => "paymentReceiptEmail",
        }
    }

    /// The layout a `...V1`/`...V2` key stands for. `None` for single-layout kinds.
    pub fn variant(&self) -> Option<Variant> {
        match self {
            TemplateName::VerificationEmailWithCodeV1
            | TemplateName::VerificationEmailWithLinkV1
            | TemplateName::ResetPasswordEmailV1
            | TemplateName::OtpEmailV1
            | TemplateName::FeedbackEmailV1 => Some(Variant::Classic),
            TemplateName::VerificationEmailWithCodeV2
            | TemplateName::VerificationEmailWithLinkV2
            | TemplateName::ResetPasswordEmailV2
            | TemplateName::OtpEmailV2
            | TemplateName::FeedbackEmailV2 => Some(Variant::Compact),
            _ => None,
        }
    }

    /// Payload key holding the brand colour, if the template has one.
    pub fn brand_color_key(&self) -> Option<&'static str> {
        match self {
            TemplateName::SpecialOfferEmail => Some("ctaColor"),
            TemplateName::OrderConfirmationEmail | TemplateName::DeliveryNotificationEmail => {
                Some("primaryColor")
            }
            TemplateName::PaymentReceiptEmail => None,
            _ => Some("color"),
        }
    }

    pub fn accepts_support_email(&self) -> bool {
        matches!(
            self,
            TemplateName::VerificationEmailWithCodeV1
                | TemplateName::VerificationEmailWithCodeV2
                | TemplateName::VerificationEmailWithLinkV1
                | TemplateName::VerificationEmailWithLinkV2
                | TemplateName::ResetPasswordEmailV1
                | TemplateName::ResetPasswordEmailV2
                | TemplateName::OtpEmailV1
                | TemplateName::OtpEmailV2
        )
    }

    pub fn accepts_company_website(&self) -> bool {
        self.accepts_support_email()
            || matches!(
                self,
                TemplateName::FeedbackEmailV1 | TemplateName::FeedbackEmailV2
            )
    }

    /// Renders `payload`, whose keys are the template's camelCase field names.
    ///
    /// The key decides the layout; a `variant` inside the payload is ignored.
    #[tracing::instrument(
        name = "Rendering email template",
        skip(self, payload, clock),
        fields(template = %self)
    )]
    pub fn render(
        &self,
        payload: serde_json::Value,
        clock: &dyn Clock,
    ) -> Result<String, TemplateError> {
        let variant = self.variant().unwrap_or_default();
        match self {
            TemplateName::VerificationEmailWithCodeV1 | TemplateName::VerificationEmailWithCodeV2 => {
                render_payload(payload, clock, |r: &mut VerificationCodeEmail| r.variant = variant)
            }
            TemplateName::VerificationEmailWithLinkV1 | TemplateName::VerificationEmailWithLinkV2 => {
                render_payload(payload, clock, |r: &mut VerificationLinkEmail| r.variant = variant)
            }
            TemplateName::ResetPasswordEmailV1 | TemplateName::ResetPasswordEmailV2 => {
                render_payload(payload, clock, |r: &mut ResetPasswordEmail| r.variant = variant)
            }
            TemplateName::OtpEmailV1 | TemplateName::OtpEmailV2 => {
                render_payload(payload, clock, |r: &mut OtpEmail| r.variant = variant)
            }
            TemplateName::FeedbackEmailV1 | TemplateName::FeedbackEmailV2 => {
                render_payload(payload, clock, |r: &mut FeedbackEmail| r.variant = variant)
            }
            TemplateName::WeMissYouEmail => {
                render_payload(payload, clock, |_: &mut WeMissYouEmail| {})
            }
            TemplateName::SpecialOfferEmail => {
                render_payload(payload, clock, |_: &mut SpecialOfferEmail| {})
            }
            TemplateName::WelcomeEmail => render_payload(payload, clock, |_: &mut WelcomeEmail| {}),
            TemplateName::OrderConfirmationEmail => {
                render_payload(payload, clock, |_: &mut OrderConfirmationEmail| {})
            }
            TemplateName::DeliveryNotificationEmail => {
                render_payload(payload, clock, |_: &mut DeliveryNotificationEmail| {})
            }
            TemplateName::PaymentReceiptEmail => {
                render_payload(payload, clock, |_: &mut PaymentReceiptEmail| {})
            }
        }
    }
}

impl std::fmt::Display for TemplateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateName {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| TemplateError::UnknownTemplate(s.to_string()))
    }
}

fn render_payload<T>(
    payload: serde_json::Value,
    clock: &dyn Clock,
    configure: impl FnOnce(&mut T),
) -> Result<String, TemplateError>
where
    T: DeserializeOwned + EmailTemplate,
{
    let mut request: T =
        serde_json::from_value(payload).map_err(TemplateError::MalformedPayload)?;
    configure(&mut request);
    request.render_with(clock)
}

/// Looks up `name` and renders `payload` with it.
pub fn render_template(
    name: &str,
    payload: serde_json::Value,
    clock: &dyn Clock,
) -> Result<String, TemplateError> {
    let outcome = name
        .parse::<TemplateName>()
        .and_then(|template| template.render(payload, clock));

    if let Err(e) = &outcome {
        tracing::warn!(
            error.cause_chain = ?e,
            error.message = %e,
            "Failed to render the '{}' email template",
            name,
        );
    }

    outcome
}
