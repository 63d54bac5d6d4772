//! Static portfolio content and its configuration file format.
//!
//! The biography, project list, skills, and contact block are data, not
//! behavior: they ship as a built-in default and can be overridden from a
//! YAML file. Missing fields in the file fall back to the defaults.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};


// ---------------------------------------------------------------------------
// Content records
// ---------------------------------------------------------------------------

/// A portfolio project. Ids are positive and unique within the set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub desc: String,
    pub url: String,
}

/// A named group of skills, rendered as one line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillCategory {
    pub name: String,
    pub items: String,
}

/// Contact details shown by the `contact` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub email: String,
    pub github_label: String,
    pub github_url: String,
    pub linkedin_label: String,
    pub linkedin_url: String,
}

/// The complete static content of a portfolio session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Portfolio {
    /// Welcome line printed when the session starts.
    pub banner: String,
    /// User@host part of the prompt.
    pub prompt_user: String,
    /// Working-directory part of the prompt.
    pub prompt_cwd: String,
    /// Biography paragraphs for `about`.
    pub about: Vec<String>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub contact: Contact,
    /// Path of the CV document opened or downloaded by `cv`.
    pub cv_path: PathBuf,
}

impl Default for Portfolio {
    fn default() -> Self {
        Portfolio {
            banner: "Welcome — type help to see commands.".to_string(),
            prompt_user: "jessim@dev".to_string(),
            prompt_cwd: "~".to_string(),
            about: vec![
                "I'm Jessim Skiba, a software engineering student @42 Paris.".to_string(),
                "Systems programming, networks, looking for a 6-month internship. \
                 I build scalable, reliable tools and products."
                    .to_string(),
            ],
            projects: vec![
                Project {
                    id: 1,
                    name: "ft_transcendence".to_string(),
                    desc: "Real-time Pong/Snake · WebSockets · Docker · SQLite · TS/Node"
                        .to_string(),
                    url: "https://github.com/mowhry/ft_transcendence".to_string(),
                },
                Project {
                    id: 2,
                    name: "ft_irc".to_string(),
                    desc: "RFC1459-compliant IRC server · C++ · network protocols · \
                           non-blocking I/O"
                        .to_string(),
                    url: "https://github.com/mowhry/ft_irc".to_string(),
                },
                Project {
                    id: 3,
                    name: "Cub3D".to_string(),
                    desc: "Raycasting engine · C · textures · sprites · collisions".to_string(),
                    url: "https://github.com/mowhry/cub3d".to_string(),
                },
                Project {
                    id: 4,
                    name: "Philosophers".to_string(),
                    desc: "POSIX threads · deadlock prevention · monitors".to_string(),
                    url: "https://github.com/mowhry/philosophers".to_string(),
                },
                Project {
                    id: 5,
                    name: "Inception".to_string(),
                    desc: "Docker Compose · Nginx · WordPress · MariaDB · TLS".to_string(),
                    url: "https://github.com/mowhry/inception".to_string(),
                },
            ],
            skills: vec![
                SkillCategory {
                    name: "Languages".to_string(),
                    items: "C/C++, Python, JavaScript/TypeScript, SQL, Bash".to_string(),
                },
                SkillCategory {
                    name: "Tools & Practices".to_string(),
                    items: "Git, CI/CD, Unit Testing, Nginx, REST APIs, Agile Development"
                        .to_string(),
                },
                SkillCategory {
                    name: "Systems".to_string(),
                    items: "Linux (Ubuntu, Arch), Docker, POSIX threads, TCP/IP, \
                            Memory Management, Shell Programming"
                        .to_string(),
                },
                SkillCategory {
                    name: "Core CS".to_string(),
                    items: "Data Structures, Algorithms, Time/Space Complexity Analysis, \
                            Concurrent Programming, Network Protocol"
                        .to_string(),
                },
                SkillCategory {
                    name: "Web Technologies".to_string(),
                    items: "Node.js, Fastify, SQLite, HTML5/CSS3, Tailwind, \
                            Real-time WebSockets"
                        .to_string(),
                },
            ],
            contact: Contact {
                email: "jskiba@student.42.fr".to_string(),
                github_label: "github.com/mowhry".to_string(),
                github_url: "https://github.com/mowhry".to_string(),
                linkedin_label: "linkedin.com/jessim-skiba".to_string(),
                linkedin_url: "https://linkedin.com/in/jessim-skiba".to_string(),
            },
            cv_path: PathBuf::from("CV_LaTeX_US.pdf"),
        }
    }
}

impl Portfolio {
    /// Shell-style prompt label, e.g. `jessim@dev:~$`.
    pub fn prompt(&self) -> String {
        format!("{}:{}$", self.prompt_user, self.prompt_cwd)
    }

    /// Look up a project by id.
    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// File name under which the CV is saved on download.
    pub fn cv_file_name(&self) -> String {
        self.cv_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "CV.pdf".to_string())
    }

    /// Load content from a YAML file and validate it.
    pub fn load(path: &Path) -> Result<Portfolio, ContentError> {
        let text = std::fs::read_to_string(path)?;
        let portfolio: Portfolio = serde_yaml::from_str(&text).map_err(ContentError::Parse)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Check that project ids are positive and unique.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.id == 0 {
                return Err(ContentError::InvalidProjectId(project.name.clone()));
            }
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProjectId(project.id));
            }
        }
        Ok(())
    }
}


// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure loading or validating portfolio content.
#[derive(Debug)]
pub enum ContentError {
    /// Filesystem I/O error.
    Io(std::io::Error),
    /// The YAML file could not be parsed.
    Parse(serde_yaml::Error),
    /// A project has id 0; ids start at 1.
    InvalidProjectId(String),
    /// Two projects share an id.
    DuplicateProjectId(u32),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io(e) => write!(f, "I/O error: {}", e),
            ContentError::Parse(e) => write!(f, "failed to parse content file: {}", e),
            ContentError::InvalidProjectId(name) => {
                write!(f, "project '{}' has id 0; ids start at 1", name)
            }
            ContentError::DuplicateProjectId(id) => {
                write!(f, "duplicate project id: {}", id)
            }
        }
    }
}

impl std::error::Error for ContentError {}

impl From<std::io::Error> for ContentError {
    fn from(e: std::io::Error) -> Self {
        ContentError::Io(e)
    }
}
