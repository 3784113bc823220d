use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Result, ShowcaseError};

/// Quote shown by the testimonial carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub content: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
}

fn default_rating() -> u8 {
    5
}

impl Testimonial {
    /// First letter of every word in the author's name, e.g. `SJ`.
    pub fn initials(&self) -> String {
        first_letters(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub live: String,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Placeholder artwork text built from the title initials.
    pub fn monogram(&self) -> String {
        first_letters(&self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent.
    pub level: u8,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub technologies: Vec<Skill>,
}

/// Static content for every section of the showcase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub terminal_lines: Vec<String>,
}

impl SiteContent {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let content: Self = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.testimonials.is_empty() {
            return Err(ShowcaseError::invalid_config(
                "content must contain at least one testimonial",
            ));
        }

        for category in &self.skills {
            if let Some(skill) = category.technologies.iter().find(|s| s.level > 100) {
                return Err(ShowcaseError::invalid_config(format!(
                    "skill `{}` in `{}` has level {} above 100",
                    skill.name, category.category, skill.level
                )));
            }
        }
        Ok(())
    }

    /// Built-in content used when no content file is supplied.
    pub fn demo() -> Self {
        Self {
            testimonials: vec![
                testimonial(
                    1,
                    "Sarah Johnson",
                    "CTO at TechCorp",
                    "Alex is an exceptional developer who consistently delivers high-quality code. His attention to detail and problem-solving skills are outstanding.",
                ),
                testimonial(
                    2,
                    "Michael Chen",
                    "Senior Developer at StartupXYZ",
                    "Working with Alex was a game-changer for our project. His expertise in modern web technologies helped us build a scalable solution.",
                ),
                testimonial(
                    3,
                    "Emily Rodriguez",
                    "Product Manager at InnovateLab",
                    "Alex's technical leadership and communication skills made our complex project successful. He's a true professional.",
                ),
            ],
            projects: vec![
                project(
                    1,
                    "E-Commerce Platform",
                    "A full-stack e-commerce solution with real-time inventory, payment processing, and analytics dashboard.",
                    &["React", "Node.js", "PostgreSQL", "Stripe", "Redis"],
                    "ecommerce",
                    true,
                ),
                project(
                    2,
                    "AI-Powered Analytics Dashboard",
                    "Real-time data visualization platform with machine learning insights and predictive analytics.",
                    &["Next.js", "Python", "TensorFlow", "D3.js", "AWS"],
                    "analytics",
                    true,
                ),
                project(
                    3,
                    "Team Collaboration Tool",
                    "Real-time collaboration platform with video conferencing, file sharing, and project management.",
                    &["Vue.js", "Socket.io", "WebRTC", "MongoDB", "Docker"],
                    "collaboration",
                    false,
                ),
                project(
                    4,
                    "Mobile Banking App",
                    "Secure mobile banking application with biometric authentication and real-time transactions.",
                    &["React Native", "Node.js", "PostgreSQL", "JWT", "AWS"],
                    "banking",
                    false,
                ),
            ],
            skills: vec![
                category(
                    "Frontend",
                    &[("React", 95), ("TypeScript", 90), ("Next.js", 92), ("Tailwind CSS", 88), ("Vue.js", 85)],
                ),
                category(
                    "Backend",
                    &[("Node.js", 90), ("Python", 85), ("PostgreSQL", 88), ("Redis", 82), ("Docker", 85)],
                ),
                category(
                    "Cloud & DevOps",
                    &[("AWS", 88), ("Kubernetes", 80), ("Terraform", 75), ("CI/CD", 85), ("Monitoring", 82)],
                ),
            ],
            terminal_lines: [
                "const developer = {",
                "  name: 'Alex Chen',",
                "  role: 'Full-Stack Developer',",
                "  experience: '8+ years',",
                "  passion: 'Building amazing products',",
                "  skills: ['React', 'Node.js', 'Python', 'AWS'],",
                "  location: 'San Francisco, CA'",
                "};",
                "",
                "// Always learning, always building",
                "developer.learn();",
                "developer.build();",
                "developer.ship();",
            ]
            .iter()
            .map(|line| line.to_string())
            .collect(),
        }
    }
}

fn first_letters(text: &str) -> String {
    text.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

fn testimonial(id: u32, name: &str, role: &str, content: &str) -> Testimonial {
    Testimonial {
        id,
        name: name.to_string(),
        role: role.to_string(),
        content: content.to_string(),
        rating: 5,
    }
}

fn project(
    id: u32,
    title: &str,
    description: &str,
    technologies: &[&str],
    slug: &str,
    featured: bool,
) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        image: format!("/projects/{slug}.jpg"),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        github: format!("https://github.com/alexchen/{slug}"),
        live: format!("https://{slug}.alexchen.dev"),
        featured,
    }
}

fn category(name: &str, skills: &[(&str, u8)]) -> SkillCategory {
    SkillCategory {
        category: name.to_string(),
        technologies: skills
            .iter()
            .map(|(name, level)| Skill {
                name: name.to_string(),
                level: *level,
                icon: String::new(),
            })
            .collect(),
    }
}
