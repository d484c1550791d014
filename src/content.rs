use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Failure to load a content file. The built-in content is used instead.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse content file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The "about" page: who this portfolio belongs to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: String,
    pub bio: String,
    /// Short label/URL pairs shown under "Quick Links"
    pub quick_links: Vec<Link>,
}

/// A labelled URL.
#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// A portfolio project. `demo` is the activation target; projects without
/// one are not activatable (Enter is a no-op on them).
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

/// An interest — a list item with no activation target.
#[derive(Debug, Clone, Deserialize)]
pub struct Interest {
    pub name: String,
    pub description: String,
}

/// A way to get in touch. Every contact link is activatable.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub value: String,
    pub href: String,
}

/// Everything the section views render. Built-in defaults carry the real
/// portfolio; a TOML file passed on the command line (or named in the config
/// file) replaces it wholesale.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub interests: Vec<Interest>,
    pub links: Vec<ContactLink>,
}

impl SiteContent {
    /// Load content from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Alex (Tianchang) Wang".into(),
            role: "Software Engineer, Student".into(),
            location: "Sunnyvale, CA".into(),
            bio: "Hello! I'm a passionate software engineer with expertise in \
                  building scalable web applications. I love working with \
                  TypeScript, React, and Node.js."
                .into(),
            quick_links: vec![
                Link {
                    label: "Website".into(),
                    href: "https://devtcwang.com".into(),
                },
                Link {
                    label: "Email".into(),
                    href: "mailto:wangtcalex@gmail.com".into(),
                },
            ],
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            projects: vec![
                Project {
                    name: "AI Video Enhancement (Backend)".into(),
                    description: "In a unicorn AI company".into(),
                    tech: vec!["Golang".into(), "Docker".into(), "gRPC".into(), "MySQL".into()],
                    demo: None,
                },
                Project {
                    name: "AI Image Dataset Annotation Tool".into(),
                    description: "In a unicorn AI company".into(),
                    tech: vec!["React".into(), "CanvasJS".into()],
                    demo: None,
                },
                Project {
                    name: "Yeah! A Dress-Up Game!".into(),
                    description: "A collab with Maria Cai, showcasing a series of illustration art"
                        .into(),
                    tech: vec![
                        "Next.js".into(),
                        "TypeScript".into(),
                        "TailwindCSS".into(),
                        "PostgreSQL".into(),
                        "Drizzle ORM".into(),
                    ],
                    demo: Some("https://yeah-dressup.vercel.app/".into()),
                },
                Project {
                    name: "Movie Blind Box".into(),
                    description: "A community-driven movie recommendation platform".into(),
                    tech: vec![
                        "Next.js".into(),
                        "TypeScript".into(),
                        "TailwindCSS".into(),
                        "PostgreSQL".into(),
                        "Prisma ORM".into(),
                    ],
                    demo: Some("https://movie-blindbox.us".into()),
                },
            ],
            interests: vec![
                Interest {
                    name: "Web-based Games".into(),
                    description: "Building interactive 3D experiences with Three.js".into(),
                },
                Interest {
                    name: "Frontend Tool Chain".into(),
                    description: "Exploring and optimizing modern frontend development tools"
                        .into(),
                },
                Interest {
                    name: "Terrarium".into(),
                    description: "Creating and maintaining miniature ecosystems".into(),
                },
                Interest {
                    name: "Boxing".into(),
                    description: "Training and practicing the sweet science".into(),
                },
                Interest {
                    name: "Glove 80 Ergo Keyboard".into(),
                    description: "Customizing and optimizing my ergonomic keyboard setup".into(),
                },
            ],
            links: vec![
                ContactLink {
                    label: "Email".into(),
                    value: "wangtcalex@gmail.com".into(),
                    href: "mailto:wangtcalex@gmail.com".into(),
                },
                ContactLink {
                    label: "GitHub".into(),
                    value: "@chang2000".into(),
                    href: "https://github.com/chang2000".into(),
                },
                ContactLink {
                    label: "LinkedIn".into(),
                    value: "in/tianchangwang".into(),
                    href: "https://www.linkedin.com/in/tianchangwang/".into(),
                },
                ContactLink {
                    label: "Website".into(),
                    value: "devtcwang.com".into(),
                    href: "https://devtcwang.com".into(),
                },
            ],
        }
    }
}
