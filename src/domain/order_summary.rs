use serde::{Deserialize, Serialize};

use crate::domain::{Money, Scalar};
use crate::error::TemplateError;

/// One purchased product as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Scalar,
    #[serde(default)]
    pub quantity: Option<Scalar>,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: impl Into<Scalar>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            quantity: None,
        }
    }

    pub fn with_quantity(mut self, quantity: impl Into<Scalar>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    /// The quantity to show and the factor to multiply by.
    ///
    /// A missing, blank or zero quantity counts as one unit.
    pub fn effective_quantity(&self) -> Result<(Scalar, f64), TemplateError> {
        let quantity = match &self.quantity {
            Some(q) if !q.is_blank() => q,
            _ => return Ok((Scalar::from(1), 1.0)),
        };

        let factor = quantity.to_f64("items.quantity")?;
        if factor == 0.0 {
            return Ok((Scalar::from(1), 1.0));
        }
        Ok((quantity.clone(), factor))
    }

    pub fn line_total(&self) -> Result<Money, TemplateError> {
        let price = self.price.to_f64("items.price")?;
        let (_, quantity) = self.effective_quantity()?;
        Ok(Money::new(price * quantity))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricedLine {
    pub name: String,
    /// Shown as the caller supplied it.
    pub quantity: Scalar,
    pub total: Money,
}

/// Per-line totals plus the figures shown under the item table.
///
/// `subtotal` is echoed exactly as the caller gave it, while every other
/// amount is a [`Money`] with two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub lines: Vec<PricedLine>,
    pub subtotal: Scalar,
    pub shipping: Money,
    pub tax: Money,
    pub discount: Money,
    pub grand_total: Money,
}

impl OrderSummary {
    pub fn compute(
        items: &[LineItem],
        subtotal: &Scalar,
        shipping: Option<&Scalar>,
        tax: Option<&Scalar>,
        discount: Option<&Scalar>,
    ) -> Result<Self, TemplateError> {
        let lines = items
            .iter()
            .map(|item| {
                let (quantity, _) = item.effective_quantity()?;
                Ok(PricedLine {
                    name: item.name.clone(),
                    quantity,
                    total: item.line_total()?,
                })
            })
            .collect::<Result<Vec<_>, TemplateError>>()?;

        let shipping = optional_amount(shipping, "shipping")?;
        let tax = optional_amount(tax, "tax")?;
        let discount = optional_amount(discount, "discount")?;
        let grand_total = Money::new(subtotal.to_f64("subtotal")?) + shipping + tax - discount;

        Ok(Self {
            lines,
            subtotal: subtotal.clone(),
            shipping,
            tax,
            discount,
            grand_total,
        })
    }
}

fn optional_amount(value: Option<&Scalar>, field: &str) -> Result<Money, TemplateError> {
    match value {
        Some(v) => Ok(Money::new(v.to_f64(field)?)),
        None => Ok(Money::default()),
    }
}
