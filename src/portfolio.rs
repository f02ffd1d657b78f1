use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    pub icon: String,
}

/// Employment span, rendered as `Mar 2021 - Dec 2022` or `Jan 2023 - Present`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ", self.start.format("%b %Y"))?;
        match self.end {
            Some(end) => write!(f, "{}", end.format("%b %Y")),
            None => write!(f, "Present"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub period: Period,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TechCategory {
    #[default]
    MostUsed,
    Languages,
    WebDev,
    AiData,
    DevOps,
}

impl TechCategory {
    pub const ALL: [TechCategory; 5] = [
        TechCategory::MostUsed,
        TechCategory::Languages,
        TechCategory::WebDev,
        TechCategory::AiData,
        TechCategory::DevOps,
    ];

    /// Stable tab identifier, used as the `value` of the tab trigger.
    pub fn value(self) -> &'static str {
        match self {
            TechCategory::MostUsed => "most-used",
            TechCategory::Languages => "languages",
            TechCategory::WebDev => "web-dev",
            TechCategory::AiData => "ai-data",
            TechCategory::DevOps => "devops",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TechCategory::MostUsed => "Most Used",
            TechCategory::Languages => "Languages",
            TechCategory::WebDev => "Web Dev",
            TechCategory::AiData => "AI & Data Science",
            TechCategory::DevOps => "DevOps & Tools",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub technologies: Vec<Technology>,
    pub experiences: Vec<Experience>,
}

impl Catalog {
    /// Only "Most Used" carries badges; the remaining tabs have no content yet.
    pub fn technologies_in(&self, category: TechCategory) -> &[Technology] {
        match category {
            TechCategory::MostUsed => &self.technologies,
            _ => &[],
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("experience {index} out of range (have {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Tracks which experience entry the detail pane shows.
#[derive(Debug, Clone, Copy)]
pub struct ExperienceSelector<'a> {
    experiences: &'a [Experience],
    selected: usize,
}

impl<'a> ExperienceSelector<'a> {
    pub fn new(experiences: &'a [Experience]) -> Self {
        Self {
            experiences,
            selected: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn current(&self) -> Option<&'a Experience> {
        self.experiences.get(self.selected)
    }

    /// Moves the selection and hands back the entry to render.
    /// An out-of-range index leaves the selection untouched.
    pub fn select(&mut self, index: usize) -> Result<&'a Experience, SelectionError> {
        let experience = self
            .experiences
            .get(index)
            .ok_or(SelectionError::OutOfRange {
                index,
                len: self.experiences.len(),
            })?;
        self.selected = index;
        Ok(experience)
    }
}
