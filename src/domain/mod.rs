mod money;
mod order_summary;
mod required;
mod scalar;
mod social;
mod variant;

pub use money::Money;
pub use order_summary::{LineItem, OrderSummary, PricedLine};
pub use required::{or_default, present, required_items, required_scalar, required_text};
pub use scalar::Scalar;
pub use social::{social_icons, SocialIcon, SocialPlatform};
pub use variant::Variant;
