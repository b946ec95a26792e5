use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// Placeholder in `Person::headline` that is replaced by `Person::name`.
pub const NAME_TOKEN: &str = "{{name}}";

/// Ids of the sections the page renders as scroll anchors.
pub const SECTION_IDS: [&str; 3] = ["about", "projects", "contact"];

const CONTENT_FILE: &str = "site.json";

pub static SITE_CONTENT: LazyLock<SiteContent> = LazyLock::new(|| {
    SiteContent::load().unwrap_or_else(|e| panic!("embedded site content is invalid: {e}"))
});

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content asset not found: {0}")]
    MissingAsset(String),
    #[error("Couldn't parse site content: {0}")]
    Parse(String),
    #[error("Person name must not be empty")]
    EmptyName,
    #[error("Headline must contain exactly one {{{{name}}}} token, found {found}")]
    HeadlinePlaceholder { found: usize },
    #[error("Nav href is not an in-page anchor: {0}")]
    NavHref(String),
    #[error("Nav href doesn't match any section: {0}")]
    UnknownAnchor(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub site_name: String,
    pub person: Person,
    pub nav: Vec<NavLink>,
    pub about: About,
    pub projects: Vec<Project>,
    pub contact: Contact,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub footer_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub tagline: String,
    pub headline: String,
    pub sub: String,
    pub hero_image: String,
    pub primary_cta: Cta,
    pub secondary_cta: Cta,
}

/// Call-to-action link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cta {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub download: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub desc: String,
    pub tags: Vec<String>,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub github_url: String,
    pub linkedin_url: String,
}

/// Animated surface drawn behind the hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Background {
    LiquidEther(LiquidEtherConfig),
    PixelBlast(PixelBlastConfig),
}

impl Default for Background {
    fn default() -> Self {
        Self::LiquidEther(LiquidEtherConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquidEtherConfig {
    pub colors: Vec<String>,
    pub mouse_force: f64,
    pub cursor_size: f64,
    pub is_viscous: bool,
    pub viscous: f64,
    pub iterations_viscous: u32,
    pub iterations_poisson: u32,
    pub resolution: f64,
    pub is_bounce: bool,
    pub auto_demo: bool,
    pub auto_speed: f64,
    pub auto_intensity: f64,
    /// Seconds.
    pub takeover_duration: f64,
    /// Milliseconds.
    pub auto_resume_delay: u32,
    /// Seconds.
    pub auto_ramp_duration: f64,
}

impl Default for LiquidEtherConfig {
    fn default() -> Self {
        Self {
            colors: vec![
                "#5227FF".to_string(),
                "#FF9FFC".to_string(),
                "#B19EEF".to_string(),
            ],
            mouse_force: 20.0,
            cursor_size: 100.0,
            is_viscous: false,
            viscous: 30.0,
            iterations_viscous: 16,
            iterations_poisson: 16,
            resolution: 0.4,
            is_bounce: false,
            auto_demo: true,
            auto_speed: 0.5,
            auto_intensity: 1.5,
            takeover_duration: 0.25,
            auto_resume_delay: 3000,
            auto_ramp_duration: 0.6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelShape {
    Square,
    Circle,
    Triangle,
    Diamond,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PixelBlastConfig {
    pub variant: PixelShape,
    pub pixel_size: u32,
    pub color: String,
    pub pattern_scale: f64,
    pub pattern_density: f64,
    pub enable_ripples: bool,
    pub ripple_speed: f64,
    pub speed: f64,
    pub edge_fade: f64,
    pub transparent: bool,
}

impl Default for PixelBlastConfig {
    fn default() -> Self {
        Self {
            variant: PixelShape::Square,
            pixel_size: 4,
            color: "#B19EEF".to_string(),
            pattern_scale: 2.0,
            pattern_density: 1.0,
            enable_ripples: true,
            ripple_speed: 0.4,
            speed: 0.5,
            edge_fade: 0.25,
            transparent: true,
        }
    }
}

impl SiteContent {
    /// Reads and validates the content document bundled into the binary.
    pub fn load() -> Result<Self, ContentError> {
        let file = ContentAssets::get(CONTENT_FILE)
            .ok_or_else(|| ContentError::MissingAsset(CONTENT_FILE.to_string()))?;
        let raw = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
        Self::from_json(raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent =
            serde_json::from_str(raw).map_err(|e| ContentError::Parse(e.to_string()))?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.person.name.trim().is_empty() {
            return Err(ContentError::EmptyName);
        }
        let found = self.person.headline.matches(NAME_TOKEN).count();
        if found != 1 {
            return Err(ContentError::HeadlinePlaceholder { found });
        }
        for link in self.nav.iter() {
            let id = match link.href.strip_prefix('#') {
                Some(id) if !id.is_empty() => id,
                _ => return Err(ContentError::NavHref(link.href.clone())),
            };
            if !SECTION_IDS.contains(&id) {
                return Err(ContentError::UnknownAnchor(link.href.clone()));
            }
        }
        Ok(())
    }
}
