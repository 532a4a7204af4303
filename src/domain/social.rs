use std::collections::BTreeMap;
use std::str::FromStr;

/// Platforms the welcome email knows an icon for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    X,
    Linkedin,
    Github,
    Discord,
    Youtube,
    Reddit,
    Whatsapp,
    Telegram,
}

impl SocialPlatform {
    pub fn icon_url(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "https://cdn-icons-png.flaticon.com/24/733/733547.png",
            SocialPlatform::Instagram => "https://cdn-icons-png.flaticon.com/24/2111/2111463.png",
            SocialPlatform::X => "https://cdn-icons-png.flaticon.com/24/733/733579.png",
            SocialPlatform::Linkedin => "https://cdn-icons-png.flaticon.com/24/145/145807.png",
            SocialPlatform::Github => "https://cdn-icons-png.flaticon.com/24/733/733553.png",
            SocialPlatform::Discord => "https://cdn-icons-png.flaticon.com/24/2111/2111370.png",
            SocialPlatform::Youtube => "https://cdn-icons-png.flaticon.com/24/1384/1384060.png",
            SocialPlatform::Reddit => "https://cdn-icons-png.flaticon.com/24/2111/2111589.png",
            SocialPlatform::Whatsapp => "https://cdn-icons-png.flaticon.com/24/733/733585.png",
            SocialPlatform::Telegram => "https://cdn-icons-png.flaticon.com/24/2111/2111646.png",
        }
    }
}

impl FromStr for SocialPlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "facebook" => Ok(SocialPlatform::Facebook),
            "instagram" => Ok(SocialPlatform::Instagram),
            "x" => Ok(SocialPlatform::X),
            "linkedin" => Ok(SocialPlatform::Linkedin),
            "github" => Ok(SocialPlatform::Github),
            "discord" => Ok(SocialPlatform::Discord),
            "youtube" => Ok(SocialPlatform::Youtube),
            "reddit" => Ok(SocialPlatform::Reddit),
            "whatsapp" => Ok(SocialPlatform::Whatsapp),
            "telegram" => Ok(SocialPlatform::Telegram),
            other => Err(format!("{} is not a supported social platform", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialIcon {
    /// The platform name as the caller spelled it, used as alt text.
    pub label: String,
    pub href: String,
    pub icon_url: &'static str,
}

/// Maps caller-supplied platform links to icons, dropping unknown platforms.
///
/// Icons come out in the platform order above, whatever the caller's order.
pub fn social_icons(links: &BTreeMap<String, String>) -> Vec<SocialIcon> {
    let mut icons: Vec<(SocialPlatform, SocialIcon)> = links
        .iter()
        .filter_map(|(name, href)| match name.parse::<SocialPlatform>() {
            Ok(platform) => Some((
                platform,
                SocialIcon {
                    label: name.clone(),
                    href: href.clone(),
                    icon_url: platform.icon_url(),
                },
            )),
            Err(e) => {
                tracing::debug!("Dropping social link: {}", e);
                None
            }
        })
        .collect();

    icons.sort_by_key(|(platform, _)| *platform);
    icons.into_iter().map(|(_, icon)| icon).collect()
}
