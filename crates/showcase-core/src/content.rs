//! Page content model.
//!
//! Everything the page shows besides colors: brand, hero copy, section
//! headings, the pipeline steps, feature cards and footer. A built-in default
//! is always available; a JSON file with the same shape can replace it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ShowcaseError, ShowcaseResult};

/// Top-of-page headline block
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub tagline: String,
    /// Label of the primary call-to-action button
    pub call_to_action: String,
    /// Label of the outlined second button; hidden when empty
    #[serde(default)]
    pub secondary_action: String,
}

/// Title and one-line subtitle above a page section
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SectionHeading {
    pub title: String,
    pub subtitle: String,
}

impl SectionHeading {
    fn new(title: &str, subtitle: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

/// Headings for the palette, pipeline and features sections.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Sections {
    pub palette: SectionHeading,
    pub pipeline: SectionHeading,
    pub features: SectionHeading,
}

impl Default for Sections {
    fn default() -> Self {
        Self {
            palette: SectionHeading::new(
                "Dual-Mode Color System",
                "One unified palette that inverts brightness while preserving hue and saturation",
            ),
            pipeline: SectionHeading::new(
                "3D Interactive Statue Pipeline",
                "From high-resolution sculpt to interactive experience",
            ),
            features: SectionHeading::new(
                "Micro-UX Flourishes",
                "Thoughtful interactions that enhance the user experience",
            ),
        }
    }
}

/// One stage of the pipeline list
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PipelineStep {
    pub title: String,
    pub description: String,
    /// Highlighted with the primary color
    #[serde(default)]
    pub active: bool,
}

/// A feature card
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Feature {
    /// Single glyph shown above the title
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

fn default_brand() -> String {
    "Dual-Mode System".to_string()
}

/// All static page content.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SiteContent {
    /// Name shown in the header logo and footer
    #[serde(default = "default_brand")]
    pub brand: String,
    pub hero: Hero,
    #[serde(default)]
    pub sections: Sections,
    pub pipeline: Vec<PipelineStep>,
    pub features: Vec<Feature>,
    pub footer_text: String,
    #[serde(default)]
    pub footer_links: Vec<FooterLink>,
}

impl SiteContent {
    /// Parse and validate content from JSON.
    pub fn from_json_str(json: &str) -> ShowcaseResult<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Read, parse and validate a JSON content file.
    pub fn load(path: &Path) -> ShowcaseResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let content = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            steps = content.pipeline.len(),
            features = content.features.len(),
            "Loaded site content"
        );
        Ok(content)
    }

    /// Reject content whose sections would render empty.
    pub fn validate(&self) -> ShowcaseResult<()> {
        if self.hero.title.trim().is_empty() {
            return Err(ShowcaseError::EmptySection("hero.title"));
        }
        if self.pipeline.is_empty() {
            return Err(ShowcaseError::EmptySection("pipeline"));
        }
        if self.features.is_empty() {
            return Err(ShowcaseError::EmptySection("features"));
        }
        Ok(())
    }

    /// Footer copyright line for `year`.
    pub fn copyright(&self, year: i32) -> String {
        format!("\u{00A9} {} {}. All rights reserved.", year, self.brand)
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        fn step(title: &str, description: &str, active: bool) -> PipelineStep {
            PipelineStep {
                title: title.to_string(),
                description: description.to_string(),
                active,
            }
        }

        fn feature(icon: &str, title: &str, description: &str) -> Feature {
            Feature {
                icon: icon.to_string(),
                title: title.to_string(),
                description: description.to_string(),
            }
        }

        fn link(label: &str) -> FooterLink {
            FooterLink {
                label: label.to_string(),
                href: "#".to_string(),
            }
        }

        Self {
            brand: default_brand(),
            hero: Hero {
                title: "The Art of Dual-Mode Design".to_string(),
                tagline: "Experience a revolutionary approach to digital design where one palette \
                          seamlessly transforms between light and dark modes while maintaining \
                          visual harmony."
                    .to_string(),
                call_to_action: "Explore Experience".to_string(),
                secondary_action: "View Implementation".to_string(),
            },
            sections: Sections::default(),
            pipeline: vec![
                step(
                    "High-Res Sculpting",
                    "Starting with detailed digital sculpting in industry-standard tools, we create \
                     intricate models with millions of polygons to capture every nuance and detail.",
                    true,
                ),
                step(
                    "Mesh Optimization",
                    "We optimize the high-poly model into a clean, efficient topology suitable for \
                     real-time rendering while preserving the artistic details.",
                    false,
                ),
                step(
                    "PBR Texturing",
                    "Using advanced texturing techniques, we create physically-based rendering \
                     materials that respond realistically to lighting conditions.",
                    false,
                ),
                step(
                    "Dynamic Lighting",
                    "We implement advanced lighting techniques including global illumination, \
                     reflections, and shadows to bring the statue to life in any environment.",
                    false,
                ),
                step(
                    "Interactive Experience",
                    "Finally, we add interactive elements like orbit controls, hover effects, and \
                     responsive design to create an engaging user experience.",
                    false,
                ),
            ],
            features: vec![
                feature(
                    "\u{2139}",
                    "Scroll-Triggered Animations",
                    "Elements fade in smoothly as you scroll through the page, creating a natural \
                     and engaging flow.",
                ),
                feature(
                    "\u{26A1}",
                    "Tilt Parallax",
                    "Interactive elements respond to mouse movement with subtle parallax effects \
                     for added depth.",
                ),
                feature(
                    "\u{1F3A8}",
                    "Seamless Dark Mode",
                    "A carefully crafted dual-mode color system that preserves visual harmony \
                     across light and dark themes.",
                ),
                feature(
                    "\u{2728}",
                    "Smooth Transitions",
                    "Thoughtful easing functions create fluid animations between states and \
                     interactions.",
                ),
            ],
            footer_text: "A showcase of advanced React development with Framer Motion".to_string(),
            footer_links: vec![link("Documentation"), link("GitHub"), link("License")],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_is_valid() {
        let content = SiteContent::default();
        content.validate().unwrap();
        assert_eq!(content.pipeline.len(), 5);
        assert_eq!(content.features.len(), 4);
        assert_eq!(content.hero.title, "The Art of Dual-Mode Design");
        assert_eq!(content.hero.secondary_action, "View Implementation");
    }

    #[test]
    fn test_default_pipeline_first_step_active() {
        let content = SiteContent::default();
        let titles: Vec<&str> = content.pipeline.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "High-Res Sculpting",
                "Mesh Optimization",
                "PBR Texturing",
                "Dynamic Lighting",
                "Interactive Experience",
            ]
        );

        let active: Vec<usize> = content
            .pipeline
            .iter()
            .enumerate()
            .filter(|(_, step)| step.active)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, vec![0]);
    }

    #[test]
    fn test_default_feature_titles() {
        let content = SiteContent::default();
        let titles: Vec<&str> = content.features.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Scroll-Triggered Animations",
                "Tilt Parallax",
                "Seamless Dark Mode",
                "Smooth Transitions",
            ]
        );
    }

    #[test]
    fn test_default_sections_and_footer() {
        let content = SiteContent::default();
        assert_eq!(content.sections.palette.title, "Dual-Mode Color System");
        assert_eq!(content.sections.pipeline.title, "3D Interactive Statue Pipeline");
        assert_eq!(content.sections.features.title, "Micro-UX Flourishes");

        let labels: Vec<&str> = content.footer_links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Documentation", "GitHub", "License"]);
    }

    #[test]
    fn test_copyright_line() {
        let content = SiteContent::default();
        assert_eq!(
            content.copyright(2026),
            "\u{00A9} 2026 Dual-Mode System. All rights reserved."
        );
    }

    #[test]
    fn test_json_roundtrip_of_default() {
        let json = serde_json::to_string(&SiteContent::default()).unwrap();
        let parsed = SiteContent::from_json_str(&json).unwrap();
        assert_eq!(parsed, SiteContent::default());
    }

    #[test]
    fn test_footer_links_optional() {
        let json = r#"{
            "hero": { "title": "T", "tagline": "", "call_to_action": "Go" },
            "pipeline": [{ "title": "One", "description": "first" }],
            "features": [{ "icon": "*", "title": "F", "description": "d" }],
            "footer_text": "bye"
        }"#;
        let content = SiteContent::from_json_str(json).unwrap();
        assert!(content.footer_links.is_empty());
        assert!(content.hero.secondary_action.is_empty());
        assert!(!content.pipeline[0].active);
        assert_eq!(content.brand, "Dual-Mode System");
        assert_eq!(content.sections, Sections::default());
    }

    #[test]
    fn test_empty_sections_rejected() {
        let mut content = SiteContent::default();
        content.features.clear();
        assert!(matches!(
            content.validate(),
            Err(ShowcaseError::EmptySection("features"))
        ));

        let mut content = SiteContent::default();
        content.pipeline.clear();
        assert!(matches!(
            content.validate(),
            Err(ShowcaseError::EmptySection("pipeline"))
        ));

        let mut content = SiteContent::default();
        content.hero.title = "  ".to_string();
        assert!(matches!(
            content.validate(),
            Err(ShowcaseError::EmptySection("hero.title"))
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = SiteContent::from_json_str("{ \"hero\": 3 }");
        assert!(matches!(result, Err(ShowcaseError::ContentFormat(_))));
    }
}
