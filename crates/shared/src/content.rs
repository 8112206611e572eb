//! Page copy rendered into the five sections.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub owner_name: String,
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub contact: Vec<ContactChannel>,
}

impl PortfolioContent {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            owner_name: "Antonio Bravo".into(),
            tagline: "Full Stack Developer & Creative Problem Solver".into(),
            about: strings(&[
                "I'm a passionate developer who loves creating innovative solutions and bringing \
                 ideas to life through code. With a strong foundation in both frontend and backend \
                 development, I enjoy building user-friendly applications that solve real-world \
                 problems.",
                "When I'm not coding, you can find me exploring new technologies, contributing to \
                 open-source projects, or sharing knowledge with the developer community.",
            ]),
            projects: vec![
                Project {
                    title: "E-Commerce Platform".into(),
                    summary: "A full-stack e-commerce solution with React, Node.js, and MongoDB."
                        .into(),
                    tech: strings(&["React", "Node.js", "MongoDB"]),
                },
                Project {
                    title: "Task Management App".into(),
                    summary: "A collaborative task management application with real-time updates."
                        .into(),
                    tech: strings(&["Vue.js", "Firebase", "Tailwind"]),
                },
                Project {
                    title: "Portfolio Website".into(),
                    summary: "A responsive portfolio website built with modern web technologies."
                        .into(),
                    tech: strings(&["React", "CSS3", "JavaScript"]),
                },
            ],
            skills: vec![
                SkillCategory {
                    name: "Frontend".into(),
                    skills: strings(&[
                        "React",
                        "Vue.js",
                        "JavaScript",
                        "TypeScript",
                        "HTML5",
                        "CSS3",
                        "Tailwind CSS",
                    ]),
                },
                SkillCategory {
                    name: "Backend".into(),
                    skills: strings(&[
                        "Node.js",
                        "Express",
                        "Python",
                        "Django",
                        "PostgreSQL",
                        "MongoDB",
                    ]),
                },
                SkillCategory {
                    name: "Tools & Others".into(),
                    skills: strings(&["Git", "Docker", "AWS", "Figma", "Jest", "Webpack"]),
                },
            ],
            contact: vec![
                ContactChannel {
                    label: "Email".into(),
                    value: "antonio.bravo@example.com".into(),
                },
                ContactChannel {
                    label: "LinkedIn".into(),
                    value: "linkedin.com/in/antoniobravo".into(),
                },
                ContactChannel {
                    label: "GitHub".into(),
                    value: "github.com/antoniobravo".into(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PortfolioContent;

    #[test]
    fn parses_partial_content_file() {
        let content = PortfolioContent::from_toml_str(
            r#"
owner_name = "Jo Doe"
tagline = "Systems programmer"
about = ["Writes Rust."]

[[projects]]
title = "Tracker"
summary = "Follows the scroll."
tech = ["Rust", "egui"]
"#,
        )
        .expect("parse content");

        assert_eq!(content.owner_name, "Jo Doe");
        assert_eq!(content.projects.len(), 1);
        assert_eq!(content.projects[0].tech, vec!["Rust", "egui"]);
        assert!(content.skills.is_empty());
        assert!(content.contact.is_empty());
    }

    #[test]
    fn missing_required_fields_fail_to_parse() {
        assert!(PortfolioContent::from_toml_str("about = []").is_err());
    }

    #[test]
    fn default_content_has_three_projects_and_contacts() {
        let content = PortfolioContent::default();
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.skills.len(), 3);
        assert_eq!(content.contact[0].label, "Email");
    }
}
