use rust_embed::Embed;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use thiserror::Error;

use crate::portfolio::{Catalog, Experience, Technology};

pub const TECHNOLOGIES_FILE: &str = "technologies.json";
pub const EXPERIENCES_FILE: &str = "experiences.json";

static GLOBAL_CATALOG: LazyLock<Result<Catalog, ContentError>> = LazyLock::new(|| {
    let catalog = load_catalog();
    match &catalog {
        Ok(c) => log::debug!(
            "loaded {} technologies and {} experiences",
            c.technologies.len(),
            c.experiences.len()
        ),
        Err(e) => log::error!("couldn't load portfolio content: {e}"),
    }
    catalog
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(String),
    #[error("Couldn't parse {file}: {message}")]
    Parse { file: String, message: String },
    #[error("Content list is empty: {0}")]
    Empty(&'static str),
}

/// The shared, read-only portfolio content. Parsed on first use.
pub fn catalog() -> Result<&'static Catalog, ContentError> {
    GLOBAL_CATALOG.as_ref().map_err(Clone::clone)
}

pub fn load_catalog() -> Result<Catalog, ContentError> {
    let technologies: Vec<Technology> = load_json(TECHNOLOGIES_FILE)?;
    let experiences: Vec<Experience> = load_json(EXPERIENCES_FILE)?;
    if experiences.is_empty() {
        return Err(ContentError::Empty(EXPERIENCES_FILE));
    }
    Ok(Catalog {
        technologies,
        experiences,
    })
}

fn load_json<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
    parse_json(name, &file.data)
}

fn parse_json<T: DeserializeOwned>(name: &str, data: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::Parse {
        file: name.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_files_present() {
        let files = Assets::iter().collect::<Vec<_>>();
        assert!(files.iter().any(|f| f == TECHNOLOGIES_FILE));
        assert!(files.iter().any(|f| f == EXPERIENCES_FILE));
    }

    #[test]
    fn test_technologies_in_display_order() {
        let catalog = catalog().expect("embedded content should parse");
        let names = catalog
            .technologies
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "TypeScript",
                "Next.js",
                "Tailwind",
                "Jotai",
                "Framer Motion",
                "Python",
                "FastAPI",
                "Docker",
                "PostgreSQL",
                "Redis",
            ]
        );
        assert_eq!(catalog.technologies[0].icon, "/typescript.svg");
        assert_eq!(catalog.technologies[4].icon, "/framer-motion.svg");
    }

    #[test]
    fn test_experiences() {
        let catalog = catalog().expect("embedded content should parse");
        assert_eq!(catalog.experiences.len(), 2);

        let first = &catalog.experiences[0];
        assert_eq!(first.company, "CyberSec Solutions");
        assert_eq!(first.position, "Senior Web Developer & Security Analyst");
        assert_eq!(first.period.to_string(), "Jan 2023 - Present");

        let second = &catalog.experiences[1];
        assert_eq!(second.company, "WebTech Innovations");
        assert_eq!(second.position, "Full Stack Developer");
        assert_eq!(second.period.to_string(), "Mar 2021 - Dec 2022");
        assert_eq!(
            second.technologies,
            vec!["Vue.js", "Express.js", "MongoDB", "AWS", "Docker"]
        );
    }

    #[test]
    fn test_catalog_is_shared() {
        let a = catalog().unwrap();
        let b = catalog().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_json::<Vec<Technology>>("broken.json", b"[{\"name\": 1}]").unwrap_err();
        match err {
            ContentError::Parse { file, .. } => assert_eq!(file, "broken.json"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_json::<Vec<Technology>>("nope.json").unwrap_err();
        assert_eq!(err, ContentError::Missing("nope.json".to_string()));
    }
}
