use once_cell::sync::Lazy;
use paigam::telemetry::{get_subscriber, init_subscriber};
use paigam::{FixedClock, TemplateError, TemplateName};
use serde_json::{json, Value};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to initialise tracing");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to initialise tracing");
    };
});

pub const YEAR: i32 = 2025;

pub fn render(name: TemplateName, payload: Value) -> Result<String, TemplateError> {
    Lazy::force(&TRACING);
    name.render(payload, &FixedClock(YEAR))
}

/// Required fields in the order the template checks them.
pub fn required_fields(name: TemplateName) -> &'static [&'static str] {
    match name {
        TemplateName::VerificationEmailWithCodeV1 | TemplateName::VerificationEmailWithCodeV2 => {
            &["verificationCode", "expirationTime", "companyName", "logoUrl"]
        }
        TemplateName::VerificationEmailWithLinkV1 | TemplateName::VerificationEmailWithLinkV2 => {
            &["verificationLink", "expirationTime", "companyName", "logoUrl"]
        }
        TemplateName::ResetPasswordEmailV1 | TemplateName::ResetPasswordEmailV2 => {
            &["resetPasswordLink", "expirationTime", "companyName", "logoUrl"]
        }
        TemplateName::OtpEmailV1 | TemplateName::OtpEmailV2 => {
            &["otp", "expirationTime", "companyName", "logoUrl"]
        }
        TemplateName::FeedbackEmailV1 | TemplateName::FeedbackEmailV2 => {
            &["feedbackLink", "companyName", "logoUrl"]
        }
        TemplateName::WeMissYouEmail => &["logoUrl", "navLink", "companyName"],
        TemplateName::SpecialOfferEmail => &[
            "logoUrl",
            "companyName",
            "offerTitle",
            "offerSubtitle",
            "offerDetails",
            "ctaLink",
        ],
        TemplateName::WelcomeEmail => &["companyName", "logoUrl", "ctaLink"],
        TemplateName::OrderConfirmationEmail => &[
            "companyName",
            "logoUrl",
            "orderNumber",
            "orderDate",
            "items",
            "subtotal",
            "viewOrderLink",
        ],
        TemplateName::DeliveryNotificationEmail => &[
            "companyName",
            "logoUrl",
            "orderNumber",
            "deliveryTime",
            "shippingAddress",
            "trackLink",
        ],
        TemplateName::PaymentReceiptEmail => &[
            "companyName",
            "logoUrl",
            "orderNumber",
            "orderDate",
            "items",
            "subtotal",
            "billingAddress",
            "shippingAddress",
        ],
    }
}

pub fn sample_value(field: &str) -> Value {
    match field {
        "expirationTime" => json!(10),
        "items" => json!([
            { "name": "A", "price": 10, "quantity": 2 },
            { "name": "B", "price": 5 }
        ]),
        "subtotal" => json!(20),
        "companyName" => json!("Acme"),
        "logoUrl" => json!("https://x/logo.png"),
        "verificationCode" | "otp" => json!("482913"),
        other => json!(format!("sample-{}", other)),
    }
}

/// Every required field and nothing else.
pub fn minimal_payload(name: TemplateName) -> Value {
    let fields = required_fields(name)
        .iter()
        .map(|field| (field.to_string(), sample_value(field)))
        .collect::<serde_json::Map<_, _>>();
    Value::Object(fields)
}

pub fn with_field(mut payload: Value, field: &str, value: Value) -> Value {
    payload[field] = value;
    payload
}

pub fn without_field(mut payload: Value, field: &str) -> Value {
    if let Value::Object(fields) = &mut payload {
        fields.remove(field);
    }
    payload
}

/// Optional fields and the value used when they are absent.
pub fn documented_defaults(name: TemplateName) -> Vec<(&'static str, Value)> {
    match name {
        TemplateName::WeMissYouEmail => vec![
            ("color", json!("#000000")),
            (
                "bgImageUrl",
                json!(paigam::email_templates::DEFAULT_MISS_YOU_BACKGROUND),
            ),
        ],
        TemplateName::SpecialOfferEmail => vec![
            ("ctaText", json!("Redeem My Offer")),
            ("ctaColor", json!("#DC143C")),
            (
                "bgImageUrl",
                json!(paigam::email_templates::DEFAULT_OFFER_BACKGROUND),
            ),
        ],
        TemplateName::WelcomeEmail => vec![
            ("color", json!("#000000")),
            ("username", json!("User")),
            ("ctaText", json!("Get Started")),
            ("socialLinks", json!({})),
        ],
        TemplateName::OrderConfirmationEmail => vec![
            ("shipping", json!(0)),
            ("tax", json!(0)),
            ("discount", json!(0)),
            ("currency", json!("$")),
            ("primaryColor", json!("#4a90e2")),
        ],
        TemplateName::DeliveryNotificationEmail => vec![
            ("primaryColor", json!("#000000")),
            (
                "deliveryIconUrl",
                json!(paigam::email_templates::DEFAULT_DELIVERY_ICON_URL),
            ),
        ],
        TemplateName::PaymentReceiptEmail => vec![
            ("shipping", json!(0)),
            ("tax", json!(0)),
            ("discount", json!(0)),
            ("currency", json!("$")),
        ],
        _ => vec![("color", json!("#000000")), ("username", json!("user"))],
    }
}

/// Gating fields: (field, value to supply, text that only appears when supplied).
pub fn gated_fragments(name: TemplateName) -> Vec<(&'static str, Value, &'static str)> {
    let support = ("supportEmail", json!("help@acme.io"), "mailto:help@acme.io");
    let website = ("companyWebsite", json!("https://acme.io"), "Visit our website");

    match name {
        TemplateName::VerificationEmailWithCodeV1 | TemplateName::VerificationEmailWithCodeV2 => {
            vec![
                ("supportEmail", json!("help@acme.io"), "Contact Support"),
                website,
            ]
        }
        TemplateName::VerificationEmailWithLinkV1
        | TemplateName::VerificationEmailWithLinkV2
        | TemplateName::ResetPasswordEmailV1
        | TemplateName::ResetPasswordEmailV2
        | TemplateName::OtpEmailV1
        | TemplateName::OtpEmailV2 => vec![support, website],
        TemplateName::FeedbackEmailV1 | TemplateName::FeedbackEmailV2 => vec![website],
        TemplateName::SpecialOfferEmail => vec![
            ("offerCode", json!("FALL40"), "Use code:"),
            ("expiryText", json!("ends Sunday"), "Hurry!"),
        ],
        TemplateName::WelcomeEmail => vec![(
            "socialLinks",
            json!({ "github": "https://github.com/acme" }),
            "Stay Connected",
        )],
        _ => vec![],
    }
}
