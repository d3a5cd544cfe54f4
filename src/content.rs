//! Portfolio content records, embedded at build time.

use std::collections::HashSet;
use std::fmt::{self, Write};

use chrono::Datelike;
use serde::Deserialize;
use thiserror::Error;

const PORTFOLIO_JSON: &str = include_str!("../content/portfolio.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid portfolio data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("nav item '{label}' points at unknown section '{href}'")]
    UnknownAnchor { label: String, href: String },

    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },
}

/// Page sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "#hero",
            Section::About => "#about",
            Section::Projects => "#projects",
            Section::Experience => "#experience",
            Section::Contact => "#contact",
        }
    }

    pub fn from_anchor(href: &str) -> Option<Section> {
        Self::ALL.into_iter().find(|s| s.anchor() == href)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Category {
    Web,
    #[serde(rename = "AI")]
    Ai,
    Security,
    Mobile,
    Cloud,
    #[serde(rename = "IoT")]
    Iot,
    Data,
    Portfolio,
    Chatbot,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Web => "Web",
            Category::Ai => "AI",
            Category::Security => "Security",
            Category::Mobile => "Mobile",
            Category::Cloud => "Cloud",
            Category::Iot => "IoT",
            Category::Data => "Data",
            Category::Portfolio => "Portfolio",
            Category::Chatbot => "Chatbot",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub image_url: String,
    pub github_url: String,
    #[serde(default)]
    pub demo_url: Option<String>,
    pub category: Category,
    pub problem: String,
    pub solution: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub date: String,
    pub description: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    /// Icon name reference
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCard {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub name: String,
    pub tagline: String,
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub facts: Vec<Fact>,
    pub bio: Vec<String>,
    pub skills: Vec<SkillCard>,
}

/// All page content
#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub hero: Hero,
    pub nav: Vec<NavItem>,
    pub about: About,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub socials: Vec<SocialLink>,
}

impl Portfolio {
    /// Content compiled into the binary
    pub fn load() -> Result<Self, ContentError> {
        Self::parse(PORTFOLIO_JSON)
    }

    pub fn parse(json: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        portfolio.validate()?;
        log::debug!(
            "Loaded {} projects, {} experience entries",
            portfolio.projects.len(),
            portfolio.experience.len()
        );
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        for item in &self.nav {
            if Section::from_anchor(&item.href).is_none() {
                return Err(ContentError::UnknownAnchor {
                    label: item.label.clone(),
                    href: item.href.clone(),
                });
            }
        }

        unique_ids("project", self.projects.iter().map(|p| p.id.as_str()))?;
        unique_ids("experience", self.experience.iter().map(|e| e.id.as_str()))?;
        Ok(())
    }

    /// Plain-text page outline, section by section
    pub fn outline(&self) -> String {
        let mut out = String::new();

        let nav: Vec<&str> = self.nav.iter().map(|n| n.label.as_str()).collect();
        let _ = writeln!(out, "[{}]", nav.join(" | "));

        for section in Section::ALL {
            let _ = writeln!(out);
            match section {
                Section::Hero => {
                    let _ = writeln!(out, "{} {}", section.anchor(), self.hero.badge);
                    let _ = writeln!(out, "  {}", self.hero.name);
                    let _ = writeln!(out, "  {}", self.hero.tagline.trim());
                    let _ = writeln!(out, "  {}", self.hero.summary);
                }
                Section::About => {
                    let _ = writeln!(out, "{}", section.anchor());
                    for fact in &self.about.facts {
                        let _ = writeln!(out, "  {}: {}", fact.label, fact.value);
                    }
                    for line in &self.about.bio {
                        let _ = writeln!(out, "  > {}", line);
                    }
                    for skill in &self.about.skills {
                        let _ = writeln!(out, "  * {}: {}", skill.title, skill.description);
                    }
                }
                Section::Projects => {
                    let _ = writeln!(out, "{} // SELECTED_PROJECTS", section.anchor());
                    for project in &self.projects {
                        let _ = writeln!(out, "  [{}] {}", project.category, project.title);
                        let _ = writeln!(out, "    {}", project.description);
                        let _ = writeln!(out, "    TECH_STACK: {}", project.tech_stack.join(", "));
                        let _ = writeln!(out, "    Problem: {}", project.problem);
                        let _ = writeln!(out, "    Solution: {}", project.solution);
                        let _ = writeln!(out, "    REPO: {}", project.github_url);
                        if let Some(demo) = &project.demo_url {
                            let _ = writeln!(out, "    DEMO: {}", demo);
                        }
                    }
                }
                Section::Experience => {
                    let _ = writeln!(out, "{} ## CAREER_LOGS", section.anchor());
                    for exp in &self.experience {
                        let _ = writeln!(out, "  {} | {} @{}", exp.date, exp.role, exp.company);
                        let _ = writeln!(out, "    {}", exp.description);
                        let tags: Vec<String> = exp.skills.iter().map(|s| format!("#{}", s)).collect();
                        let _ = writeln!(out, "    {}", tags.join(" "));
                    }
                }
                Section::Contact => {
                    let _ = writeln!(out, "{}", section.anchor());
                    for link in &self.socials {
                        let _ = writeln!(out, "  {}: {}", link.platform, link.url);
                    }
                }
            }
        }

        out
    }
}

fn unique_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

pub fn footer(year: i32) -> String {
    format!("© {} CYBERNODE. All systems operational.", year)
}

/// Footer for the current local year
pub fn current_footer() -> String {
    footer(chrono::Local::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let portfolio = Portfolio::load().unwrap();

        assert_eq!(portfolio.nav.len(), 5);
        assert_eq!(portfolio.about.skills.len(), 4);
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.experience.is_empty());
        assert!(portfolio
            .socials
            .iter()
            .any(|s| s.url == "https://github.com/omsatote"));
    }

    #[test]
    fn test_nav_covers_every_section() {
        let portfolio = Portfolio::load().unwrap();
        for section in Section::ALL {
            assert!(portfolio.nav.iter().any(|n| n.href == section.anchor()));
        }
    }

    #[test]
    fn test_unknown_anchor_rejected() {
        let json = PORTFOLIO_JSON.replace("\"#about\"", "\"#blog\"");
        let err = Portfolio::parse(&json).unwrap_err();
        assert!(matches!(err, ContentError::UnknownAnchor { ref href, .. } if href == "#blog"));
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let json = PORTFOLIO_JSON.replace("\"support-bot\"", "\"cybernode\"");
        let err = Portfolio::parse(&json).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateId { kind: "project", .. }));
    }

    #[test]
    fn test_category_names() {
        let cat: Category = serde_json::from_str("\"AI\"").unwrap();
        assert_eq!(cat, Category::Ai);
        assert_eq!(cat.to_string(), "AI");
        assert!(serde_json::from_str::<Category>("\"Blockchain\"").is_err());
    }

    #[test]
    fn test_outline_order() {
        let outline = Portfolio::load().unwrap().outline();
        let positions: Vec<usize> = Section::ALL
            .iter()
            .map(|s| outline.find(s.anchor()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(outline.contains("TECH_STACK"));
    }

    #[test]
    fn test_footer() {
        assert_eq!(footer(2025), "© 2025 CYBERNODE. All systems operational.");
    }
}
