//! Plain-text renderers used by the terminal front end.

use std::fmt::Write as _;

use crate::{
    content::{Project, SkillCategory, Testimonial},
    gallery::level_bar,
    state::Direction,
};

const SKILL_BAR_WIDTH: usize = 20;

/// Indicator row with the active position filled, e.g. `○ ● ○`.
pub fn indicator_dots(index: usize, len: usize) -> String {
    (0..len)
        .map(|i| if i == index { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_testimonial(
    testimonial: &Testimonial,
    index: usize,
    len: usize,
    direction: Direction,
) -> String {
    let arrow = match direction {
        Direction::Forward => "→",
        Direction::Backward => "←",
    };
    let mut out = String::new();
    let _ = writeln!(out, "{arrow} \"{}\"", testimonial.content);
    let _ = writeln!(out, "  {}", "★".repeat(usize::from(testimonial.rating)));
    let _ = writeln!(
        out,
        "  [{}] {}, {}",
        testimonial.initials(),
        testimonial.name,
        testimonial.role
    );
    let _ = write!(out, "  {}", indicator_dots(index, len));
    out
}

pub fn render_project_card(project: &Project) -> String {
    let mut out = String::new();
    let badge = if project.featured { " (featured)" } else { "" };
    let _ = writeln!(out, "#{} [{}] {}{badge}", project.id, project.monogram(), project.title);
    let _ = writeln!(out, "    {}", project.description);

    let shown: Vec<&str> = project.technologies.iter().take(3).map(String::as_str).collect();
    let mut tags = shown.join(", ");
    if project.technologies.len() > 3 {
        let _ = write!(tags, " +{} more", project.technologies.len() - 3);
    }
    let _ = write!(out, "    {tags}");
    out
}

pub fn render_project_details(project: &Project) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", project.title);
    let _ = writeln!(out, "{}", "=".repeat(project.title.chars().count()));
    let _ = writeln!(out, "{}", project.description);
    let _ = writeln!(out, "Technologies: {}", project.technologies.join(", "));
    let _ = writeln!(out, "Live: {}", project.live);
    let _ = write!(out, "Code: {}", project.github);
    out
}

pub fn render_skill_category(category: &SkillCategory) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", category.category);
    let width = category
        .technologies
        .iter()
        .map(|skill| skill.name.chars().count())
        .max()
        .unwrap_or(0);
    for skill in &category.technologies {
        let _ = writeln!(
            out,
            "  {:<width$} {} {:>3}%",
            skill.name,
            level_bar(skill.level, SKILL_BAR_WIDTH),
            skill.level
        );
    }
    out
}
