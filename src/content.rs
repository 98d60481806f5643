//! Page content: slides, FAQ entries, services and partners.
//!
//! The host page can embed its own content as JSON in
//! `<script type="application/json" id="page-content">`. Sections it leaves
//! out keep the built-in defaults.

use log::{info, warn};
use serde::Deserialize;

pub const CONTENT_ELEMENT_ID: &str = "page-content";

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Slide {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub title: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Partner {
    pub name: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PageContent {
    pub slides: Vec<Slide>,
    pub faq: Vec<FaqEntry>,
    pub services: Vec<Service>,
    pub partners: Vec<Partner>,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            slides: default_slides(),
            faq: default_faq(),
            services: default_services(),
            partners: default_partners(),
        }
    }
}

impl PageContent {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the embedded content block, falling back to the defaults when it
    /// is missing or unreadable.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONTENT_ELEMENT_ID))
            .and_then(|element| element.text_content());

        match raw {
            Some(raw) => match Self::from_json(&raw) {
                Ok(content) => {
                    info!("Loaded page content: {} slides, {} questions", content.slides.len(), content.faq.len());
                    content
                }
                Err(err) => {
                    warn!("Ignoring malformed #{}: {}", CONTENT_ELEMENT_ID, err);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}

fn slide(image: &str, title: &str, description: &str) -> Slide {
    Slide {
        image: Some(format!("/assets/{}", image)),
        alt: title.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
    }
}

fn default_slides() -> Vec<Slide> {
    vec![
        slide("projeto-casa-lago.jpg", "Casa do Lago", "Residential project with open living spaces facing the water."),
        slide("projeto-loft.jpg", "Loft Centro", "Industrial loft renovation keeping the original brick and steel."),
        slide("projeto-escritorio.jpg", "Escritório Vila", "Office interiors designed around natural light and quiet zones."),
        slide("projeto-cafe.jpg", "Café Aurora", "Small café fit-out with custom joinery and a long shared table."),
        slide("projeto-jardim.jpg", "Jardim Interno", "Courtyard garden connecting the two wings of a family house."),
        slide("projeto-cobertura.jpg", "Cobertura Mar", "Penthouse terrace with a pergola and outdoor kitchen."),
    ]
}

fn default_faq() -> Vec<FaqEntry> {
    let entry = |question: &str, answer: &str| FaqEntry {
        question: question.to_string(),
        answer: answer.to_string(),
    };
    vec![
        entry("How does a project start?", "With a free first meeting where we listen to what you need and visit the space."),
        entry("Do you work outside the city?", "Yes. Remote projects are done with video calls and one or two site visits."),
        entry("How long does a typical project take?", "Most residential projects take between eight and sixteen weeks from brief to delivery."),
        entry("Can you manage the construction too?", "We can follow the works and coordinate the contractors you choose, or recommend ours."),
    ]
}

fn default_services() -> Vec<Service> {
    let service = |title: &str, text: &str| Service {
        title: title.to_string(),
        text: text.to_string(),
    };
    vec![
        service("Architecture", "New builds and extensions, from first sketch to permits."),
        service("Interiors", "Layouts, materials, lighting and custom furniture."),
        service("Consulting", "Focused sessions to unblock a renovation or a purchase decision."),
    ]
}

fn default_partners() -> Vec<Partner> {
    let partner = |name: &str, role: &str| Partner {
        name: name.to_string(),
        role: role.to_string(),
    };
    vec![
        partner("Ana Ribeiro", "Architect"),
        partner("Marina Costa", "Interior designer"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_every_section() {
        let content = PageContent::default();
        assert_eq!(content.slides.len(), 6);
        assert!(!content.faq.is_empty());
        assert!(!content.services.is_empty());
        assert!(!content.partners.is_empty());
    }

    #[test]
    fn partial_document_keeps_default_sections() {
        let content = PageContent::from_json(
            r#"{ "slides": [ { "image": "/a.jpg", "title": "A" }, { "title": "B", "description": "text" } ] }"#,
        )
        .unwrap();

        assert_eq!(content.slides.len(), 2);
        assert_eq!(content.slides[0].image.as_deref(), Some("/a.jpg"));
        assert_eq!(content.slides[0].description, None);
        assert_eq!(content.slides[1].image, None);
        assert_eq!(content.faq, PageContent::default().faq);
    }

    #[test]
    fn empty_sections_are_respected() {
        let content = PageContent::from_json(r#"{ "faq": [], "partners": [] }"#).unwrap();
        assert!(content.faq.is_empty());
        assert!(content.partners.is_empty());
        assert_eq!(content.slides.len(), 6);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(PageContent::from_json("{ slides: ").is_err());
        assert!(PageContent::from_json(r#"{ "faq": [ { "question": "no answer" } ] }"#).is_err());
    }
}
