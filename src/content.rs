use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const PORTFOLIO_ASSET: &str = "portfolio.json";

pub static GLOBAL_CONTENT_CACHE: LazyLock<DashMap<String, Portfolio>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content asset not found: {0}")]
    NotFound(String),
    #[error("couldn't parse content asset {name}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
}

impl PersonalInfo {
    /// Logo letters: first letter of the first two words of the name.
    pub fn initials(&self) -> (String, String) {
        let mut words = self.name.split_whitespace();
        let first_letter = |w: Option<&str>| {
            w.and_then(|w| w.chars().next())
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default()
        };
        let first = first_letter(words.next());
        let second = first_letter(words.next());
        (first, second)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect::<String>();
        format!("tel:{digits}")
    }
}

/// A run of paragraph text; highlighted runs get the accent color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    Highlight { highlight: String },
    Text(String),
}

pub type Paragraph = Vec<Segment>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<Paragraph>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub location: String,
    pub role: String,
    pub period: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub personal: PersonalInfo,
    pub tagline: String,
    pub about: About,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<Education>,
    pub contact_intro: Paragraph,
}

impl Portfolio {
    pub fn from_json(name: &str, json: &str) -> Result<Self, ContentError> {
        serde_json::from_str(json).map_err(|source| ContentError::Parse {
            name: name.to_string(),
            source,
        })
    }
}

/// Parses an embedded content file, caching the result by asset name.
pub fn load(name: &str) -> Result<Portfolio, ContentError> {
    let cache = &*GLOBAL_CONTENT_CACHE;
    if let Some(p) = cache.get(name) {
        return Ok(p.clone());
    }
    let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    let json = String::from_utf8_lossy(&file.data);
    let portfolio = Portfolio::from_json(name, &json)?;
    log::debug!("loaded content from {name}");
    cache.insert(name.to_string(), portfolio.clone());
    Ok(portfolio)
}

pub fn portfolio() -> Result<Portfolio, ContentError> {
    load(PORTFOLIO_ASSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_portfolio_parses() {
        let p = portfolio().expect("embedded portfolio should parse");
        assert!(!p.personal.name.is_empty());
        assert!(!p.about.paragraphs.is_empty());
        assert!(!p.experience.is_empty());
        assert!(!p.projects.is_empty());
        assert!(!p.skills.is_empty());
        assert!(!p.education.is_empty());
        assert!(!p.contact_intro.is_empty());
        assert!(p.projects.iter().all(|proj| !proj.tech.is_empty()));
    }

    #[test]
    fn test_load_is_cached() {
        let first = load(PORTFOLIO_ASSET).unwrap();
        assert!(GLOBAL_CONTENT_CACHE.contains_key(PORTFOLIO_ASSET));
        let second = load(PORTFOLIO_ASSET).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_asset() {
        assert!(matches!(
            load("nope.json"),
            Err(ContentError::NotFound(name)) if name == "nope.json"
        ));
    }

    #[test]
    fn test_parse_error_names_asset() {
        let err = Portfolio::from_json("broken.json", "{\"personal\": 3}").unwrap_err();
        assert!(matches!(err, ContentError::Parse { ref name, .. } if name == "broken.json"));
        assert_eq!(err.to_string(), "couldn't parse content asset broken.json");
    }

    #[test]
    fn test_segments() {
        let para: Paragraph =
            serde_json::from_str(r#"["Hello! I'm ", {"highlight": "Ada"}, ", hi."]"#).unwrap();
        assert_eq!(
            para,
            vec![
                Segment::Text("Hello! I'm ".to_string()),
                Segment::Highlight {
                    highlight: "Ada".to_string()
                },
                Segment::Text(", hi.".to_string()),
            ]
        );
    }

    #[test]
    fn test_skill_order_preserved() {
        let p = portfolio().unwrap();
        let categories = p
            .skills
            .iter()
            .map(|c| c.category.as_str())
            .collect::<Vec<_>>();
        assert_eq!(categories, vec!["Frontend", "Backend", "Tools", "Concepts"]);
    }

    fn person(name: &str) -> PersonalInfo {
        PersonalInfo {
            name: name.to_string(),
            title: String::new(),
            email: "ada@example.com".to_string(),
            phone: "+91-7906 370605".to_string(),
            location: String::new(),
            linkedin: String::new(),
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(
            person("juvaid ahmad").initials(),
            ("J".to_string(), "A".to_string())
        );
        assert_eq!(person("Cher").initials(), ("C".to_string(), String::new()));
        assert_eq!(person("  ").initials(), (String::new(), String::new()));
    }

    #[test]
    fn test_links() {
        let p = person("Ada Lovelace");
        assert_eq!(p.mailto(), "mailto:ada@example.com");
        assert_eq!(p.tel(), "tel:+917906370605");
    }
}
