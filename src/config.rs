use anyhow::{bail, Result};
use serde::Deserialize;
use std::collections::HashSet;

use navfold::measure::NavStyle;
use navfold::model::{SecondaryLink, Section};
use navfold::GlyphSet;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_items")]
    pub items: Vec<Section>,
    #[serde(default = "default_secondary")]
    pub secondary: Option<SecondaryLink>,
    #[serde(default)]
    pub nav: NavConfig,
}

#[derive(Debug, Deserialize)]
pub struct NavConfig {
    #[serde(default = "default_gap")]
    pub gap: u16,
    #[serde(flatten)]
    pub style: NavStyle,
    /// Fixed glyph set; detected from the locale when absent
    #[serde(default)]
    pub glyphs: Option<GlyphSet>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            gap: default_gap(),
            style: NavStyle::default(),
            glyphs: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            items: default_items(),
            secondary: default_secondary(),
            nav: NavConfig::default(),
        }
    }
}

impl Config {
    /// Reject configs the bar cannot key on
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if item.id.trim().is_empty() {
                bail!("Nav item '{}' has an empty id", item.label);
            }
            if !seen.insert(item.id.as_str()) {
                bail!("Duplicate nav item id: {}", item.id);
            }
        }
        Ok(())
    }
}

fn default_title() -> String {
    "portfolio".to_string()
}

fn default_gap() -> u16 {
    1
}

fn default_secondary() -> Option<SecondaryLink> {
    Some(SecondaryLink {
        href: "https://example.com/resume.pdf".to_string(),
        label: "Resume".to_string(),
    })
}

fn default_items() -> Vec<Section> {
    let section = |id: &str, label: &str, body: &str| Section {
        id: id.to_string(),
        label: label.to_string(),
        body: body.to_string(),
    };

    vec![
        section(
            "about",
            "About",
            "Engineer, occasional writer and home cook. I build tools for people who \
             live in their terminals.",
        ),
        section(
            "experience",
            "Experience",
            "Ten years across infrastructure, developer tooling and data platforms.\n\
             Currently leading a small team working on build systems.",
        ),
        section(
            "projects",
            "Projects",
            "A sync client, a static site generator and a handful of tiny CLIs.\n\
             Most of them started as weekend experiments.",
        ),
        section(
            "personality",
            "Personality",
            "Enneagram, ProScan and I-D results, with a side-by-side comparison \
             against your own answers.",
        ),
        section(
            "recipes",
            "Recipes",
            "Weeknight dinners, sourdough notes and a long-running chili experiment.",
        ),
        section(
            "writing",
            "Writing",
            "Essays on tooling, teams and the occasional post-mortem.",
        ),
        section(
            "contact",
            "Contact",
            "Email works best. I read everything, and I answer most of it.",
        ),
    ]
}
