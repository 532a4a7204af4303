pub mod clock;
pub mod configuration;
pub mod domain;
pub mod email_templates;
pub mod error;
pub mod registry;
pub mod telemetry;

pub use clock::{Clock, FixedClock, SystemClock};
pub use email_templates::EmailTemplate;
pub use error::TemplateError;
pub use registry::{render_template, TemplateName};
