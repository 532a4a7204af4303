use serde_json::Value;

use crate::registry::TemplateName;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub brand: BrandSettings,
}

/// Company identity shared by every email a caller sends.
#[derive(serde::Deserialize, Clone, Debug, Default)]
pub struct BrandSettings {
    pub company_name: String,
    pub logo_url: String,
    pub color: Option<String>,
    pub support_email: Option<String>,
    pub company_website: Option<String>,
}

impl BrandSettings {
    /// Adds brand fields the payload does not already carry.
    ///
    /// Only keys the template accepts are added, and caller values always win.
    pub fn fill(&self, template: TemplateName, payload: &mut Value) {
        let Value::Object(fields) = payload else {
            return;
        };

        let mut insert = |key: &str, value: &str| {
            if !fields.contains_key(key) {
                fields.insert(key.to_string(), Value::String(value.to_string()));
            }
        };

        insert("companyName", &self.company_name);
        insert("logoUrl", &self.logo_url);
        if let (Some(key), Some(color)) = (template.brand_color_key(), &self.color) {
            insert(key, color);
        }
        if let (true, Some(email)) = (template.accepts_support_email(), &self.support_email) {
            insert("supportEmail", email);
        }
        if let (true, Some(website)) = (template.accepts_company_website(), &self.company_website)
        {
            insert("companyWebsite", website);
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
