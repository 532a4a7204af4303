use crate::helpers::{minimal_payload, render, with_field, YEAR};
use claim::{assert_err, assert_ok};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::Fake;
use paigam::configuration::get_configuration;
use paigam::{render_template, FixedClock, TemplateError, TemplateName};
use serde_json::json;

#[test]
fn otp_email_end_to_end() {
    let payload = json!({
        "otp": "482913",
        "expirationTime": 10,
        "companyName": "Acme",
        "logoUrl": "https://x/logo.png",
    });

    let html = assert_ok!(render(TemplateName::OtpEmailV1, payload));

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("482913"));
    assert!(html.contains("10 minutes"));
    assert!(html.contains("Hello <strong>user</strong>"));
    assert!(html.contains("#000000"));
    assert!(html.contains(&format!("© {} Acme. All rights reserved.", YEAR)));
    assert!(!html.contains("mailto:"));
    assert!(!html.contains("Visit our website"));
}

#[test]
fn otp_without_a_code_is_rejected() {
    let payload = json!({
        "expirationTime": 10,
        "companyName": "Acme",
        "logoUrl": "https://x/logo.png",
    });

    let e = assert_err!(render_template("otpEmailV1", payload, &FixedClock(YEAR)));
    assert!(matches!(e, TemplateError::MissingField("otp")));
}

#[test]
fn configured_brand_completes_a_sparse_payload() {
    let settings = assert_ok!(get_configuration());
    let name = TemplateName::OtpEmailV2;
    let mut payload = json!({ "otp": "482913", "expirationTime": 5 });
    settings.brand.fill(name, &mut payload);

    let html = assert_ok!(render(name, payload));
    assert!(html.contains(&settings.brand.company_name));
    assert!(html.contains(&settings.brand.logo_url));
}

#[test]
fn order_lines_are_totalled_with_two_decimals() {
    let payload = json!({
        "companyName": "Acme",
        "logoUrl": "https://x/logo.png",
        "orderNumber": 1001,
        "orderDate": "March 14, 2025",
        "items": [
            { "name": "A", "price": 10, "quantity": 2 },
            { "name": "B", "price": 5 }
        ],
        "subtotal": 20,
        "shipping": 0,
        "tax": 0,
        "discount": 0,
        "viewOrderLink": "https://acme.io/orders/1001",
    });

    for name in [
        TemplateName::OrderConfirmationEmail,
        TemplateName::PaymentReceiptEmail,
    ] {
        let mut payload = payload.clone();
        payload["billingAddress"] = json!("1 Main St");
        payload["shippingAddress"] = json!("1 Main St");

        let html = assert_ok!(render(name, payload));
        assert!(html.contains("$5.00"), "{} line B", name);
        // Line A and the grand total.
        assert_eq!(html.matches("$20.00").count(), 2, "{}", name);
        assert!(html.contains("$0.00"), "{} adjustments", name);
    }
}

#[test]
fn string_amounts_are_accepted() {
    let name = TemplateName::OrderConfirmationEmail;
    let payload = with_field(minimal_payload(name), "shipping", json!("4.5"));
    let html = assert_ok!(render(name, payload));
    assert!(html.contains("$4.50"));
    assert!(html.contains("$24.50"));
}

#[test]
fn non_numeric_price_is_an_invalid_amount() {
    let name = TemplateName::PaymentReceiptEmail;
    let payload = with_field(
        minimal_payload(name),
        "items",
        json!([{ "name": "A", "price": "ten" }]),
    );
    let e = assert_err!(render(name, payload));
    assert!(matches!(e, TemplateError::InvalidAmount { .. }));
}

#[test]
fn text_and_fractional_quantities_are_totalled() {
    let name = TemplateName::OrderConfirmationEmail;
    let payload = with_field(
        minimal_payload(name),
        "items",
        json!([
            { "name": "A", "price": 10, "quantity": "2" },
            { "name": "B", "price": 10, "quantity": 1.5 }
        ]),
    );

    let html = assert_ok!(render(name, payload));
    assert!(html.contains("$20.00"));
    assert!(html.contains("$15.00"));
    assert!(html.contains(">1.5</td>"));
}

#[test]
fn non_numeric_quantity_is_an_invalid_amount() {
    let name = TemplateName::PaymentReceiptEmail;
    let payload = with_field(
        minimal_payload(name),
        "items",
        json!([{ "name": "A", "price": 10, "quantity": "a few" }]),
    );
    let e = assert_err!(render(name, payload));
    assert!(matches!(e, TemplateError::InvalidAmount { ref field, .. } if field == "items.quantity"));
}

#[test]
fn whole_float_subtotal_is_shown_without_decimals() {
    let name = TemplateName::OrderConfirmationEmail;
    let payload = with_field(minimal_payload(name), "subtotal", json!(20.0));
    let html = assert_ok!(render(name, payload));
    assert!(html.contains(">$20</td>"));
    assert!(!html.contains("$20.0<"));
}

#[test]
fn both_feedback_link_spellings_are_rejected() {
    let payload = json!({
        "feedbackLink": "https://acme.io/feedback",
        "feedbacklink": "https://acme.io/other",
        "companyName": "Acme",
        "logoUrl": "https://x/logo.png",
    });
    let e = assert_err!(render(TemplateName::FeedbackEmailV2, payload));
    assert!(matches!(e, TemplateError::MalformedPayload(_)));
}

#[test]
fn welcome_email_ignores_unknown_social_platforms() {
    let name = TemplateName::WelcomeEmail;
    let payload = with_field(
        minimal_payload(name),
        "socialLinks",
        json!({
            "myspace": "https://myspace.com/acme",
            "GitHub": "https://github.com/acme",
        }),
    );

    let html = assert_ok!(render(name, payload));
    assert!(html.contains("https://github.com/acme"));
    assert!(!html.contains("myspace"));
}

#[test]
fn welcome_email_with_only_unknown_platforms_has_no_social_row() {
    let name = TemplateName::WelcomeEmail;
    let payload = with_field(
        minimal_payload(name),
        "socialLinks",
        json!({ "myspace": "https://myspace.com/acme" }),
    );

    let html = assert_ok!(render(name, payload));
    assert!(!html.contains("Stay Connected"));
}

#[test]
fn feedback_link_accepts_the_lowercase_alias() {
    let payload = json!({
        "feedbacklink": "https://acme.io/feedback",
        "companyName": "Acme",
        "logoUrl": "https://x/logo.png",
    });
    let html = assert_ok!(render(TemplateName::FeedbackEmailV1, payload));
    assert!(html.contains("https://acme.io/feedback"));
}

#[test]
fn reset_password_logo_links_to_the_website() {
    let name = TemplateName::ResetPasswordEmailV1;
    let payload = with_field(minimal_payload(name), "companyWebsite", json!("https://acme.io"));
    let html = assert_ok!(render(name, payload));
    assert!(html.contains("<a href=\"https://acme.io\" target=\"_blank\""));
}

#[test]
fn explicit_empty_optional_text_is_kept() {
    // Defaults apply to absent fields only.
    let name = TemplateName::SpecialOfferEmail;
    let payload = with_field(minimal_payload(name), "ctaText", json!(""));
    let html = assert_ok!(render(name, payload));
    assert!(!html.contains("Redeem My Offer"));
}

#[test]
fn caller_identity_flows_into_every_template() {
    for name in TemplateName::ALL {
        let company: String = CompanyName().fake();
        let email: String = SafeEmail().fake();

        let payload = with_field(minimal_payload(name), "companyName", json!(company));
        let payload = with_field(payload, "supportEmail", json!(email));

        let html = assert_ok!(render(name, payload));
        assert!(
            html.contains(&format!("© {} {}. All rights reserved.", YEAR, company)),
            "{} footer lost `{}`",
            name,
            company
        );
        if name.accepts_support_email() {
            assert!(html.contains(&format!("mailto:{}", email)), "{}", name);
        }
    }
}

#[derive(Debug, Clone)]
struct ValidCompanyName(pub String);

impl quickcheck::Arbitrary for ValidCompanyName {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Self {
        let name = CompanyName().fake_with_rng(g);
        Self(name)
    }
}

#[quickcheck_macros::quickcheck]
fn any_company_name_renders_every_template(company: ValidCompanyName) -> bool {
    TemplateName::ALL.iter().all(|name| {
        let payload = with_field(minimal_payload(*name), "companyName", json!(company.0));
        render(*name, payload)
            .map(|html| html.contains(&company.0))
            .unwrap_or(false)
    })
}
