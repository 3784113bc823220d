use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    content::{Project, SkillCategory},
    Result, ShowcaseError,
};

/// Which projects the gallery grid shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
    /// Case-insensitive substring match against any technology name.
    Technology(String),
}

impl ProjectFilter {
    /// Filter buttons offered by the gallery.
    pub const PRESETS: [&'static str; 5] = ["all", "featured", "frontend", "backend", "fullstack"];

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Featured => project.featured,
            Self::Technology(keyword) => {
                let keyword = keyword.to_lowercase();
                project
                    .technologies
                    .iter()
                    .any(|tech| tech.to_lowercase().contains(&keyword))
            }
        }
    }
}

impl FromStr for ProjectFilter {
    type Err = ShowcaseError;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ShowcaseError::msg("project filter cannot be empty"));
        }
        Ok(match value.to_lowercase().as_str() {
            "all" => Self::All,
            "featured" => Self::Featured,
            keyword => Self::Technology(keyword.to_string()),
        })
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Featured => f.write_str("featured"),
            Self::Technology(keyword) => f.write_str(keyword),
        }
    }
}

/// Project grid with an active filter and an optional detail view.
#[derive(Debug, Clone)]
pub struct ProjectGallery {
    projects: Vec<Project>,
    filter: ProjectFilter,
    selected: Option<usize>,
}

impl ProjectGallery {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            filter: ProjectFilter::All,
            selected: None,
        }
    }

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: ProjectFilter) {
        debug!(%filter, "project filter changed");
        self.filter = filter;
    }

    pub fn visible(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| self.filter.matches(project))
            .collect()
    }

    /// Opens the detail view for project `id`. The filter does not have to
    /// include it.
    pub fn open(&mut self, id: u32) -> Result<&Project> {
        let position = self
            .projects
            .iter()
            .position(|project| project.id == id)
            .ok_or_else(|| ShowcaseError::msg(format!("unknown project id {id}")))?;
        self.selected = Some(position);
        Ok(&self.projects[position])
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Project> {
        self.selected.map(|position| &self.projects[position])
    }
}

/// Skill categories with one active tab.
#[derive(Debug, Clone)]
pub struct SkillBoard {
    categories: Vec<SkillCategory>,
    active: usize,
}

impl SkillBoard {
    pub fn new(categories: Vec<SkillCategory>) -> Self {
        Self {
            categories,
            active: 0,
        }
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.categories.len() {
            return Err(ShowcaseError::IndexOutOfRange {
                index,
                len: self.categories.len(),
            });
        }
        self.active = index;
        Ok(())
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&SkillCategory> {
        self.categories.get(self.active)
    }
}

/// Text progress bar `width` cells wide, filled in proportion to `level`
/// percent (clamped to 100).
pub fn level_bar(level: u8, width: usize) -> String {
    let level = usize::from(level.min(100));
    let filled = (level * width + 50) / 100;
    let mut bar = "#".repeat(filled);
    bar.push_str(&"-".repeat(width - filled));
    bar
}
