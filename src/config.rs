use crate::authors::{AuthorOptions, Collation, Roster, RosterEntry};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Could not determine config directory")]
    NoConfigDir,
    #[error("Configuration already exists at {}, use --force to overwrite", .0.display())]
    AlreadyExists(PathBuf),
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub status: u32,
    pub vrsta: u32,
}

/// Fields shared by every submitted publication.
#[derive(Debug, Clone, Deserialize)]
pub struct Publication {
    pub tip: u32,
    pub status: u32,
    pub suradnja_medjunarodna: String,
    pub recenzija: Review,
    pub url_vrsta: u32,
    pub institution_role: u32,
    pub project_role: u32,
    #[serde(default)]
    pub projects: Vec<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorInfo {
    pub name: String,
    pub croris_id: Option<u32>,
    pub institution: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JournalInfo {
    pub croris: String,
    #[serde(default)]
    pub issn: String,
    #[serde(default)]
    pub eissn: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub collaboration: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default = "default_keyword_limit")]
    pub keyword_limit: usize,
    #[serde(default = "default_true")]
    pub sort_authors: bool,
    #[serde(default)]
    pub full_author_list: bool,
    #[serde(default)]
    pub collation: Collation,
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    pub publication: Publication,
    #[serde(default)]
    pub institutions: IndexMap<String, String>,
    /// Declaration order is the match order.
    #[serde(default)]
    pub authors: IndexMap<String, AuthorInfo>,
    #[serde(default)]
    pub journals: IndexMap<String, JournalInfo>,
}

fn default_keyword_limit() -> usize {
    480
}

fn default_true() -> bool {
    true
}

fn default_concurrency() -> usize {
    4
}

impl Config {
    pub fn user_config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("croris-bib").join("config.toml"))
    }

    /// Loads `path`, else the user config file, else the bundled default.
    pub fn load(path: Option<&Path>) -> Result<(Self, String), ConfigError> {
        if let Some(path) = path {
            let path: PathBuf = shellexpand::tilde(&path.to_string_lossy())
                .into_owned()
                .into();
            if !path.exists() {
                return Err(ConfigError::NotFound(path));
            }
            let config = Self::from_toml(&fs::read_to_string(&path)?)?;
            return Ok((config, path.display().to_string()));
        }

        if let Ok(path) = Self::user_config_path() {
            if path.exists() {
                let config = Self::from_toml(&fs::read_to_string(&path)?)?;
                return Ok((config, path.display().to_string()));
            }
        }

        Ok((Self::bundled()?, "built-in defaults".to_string()))
    }

    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Writes the bundled configuration to the user config path.
    pub fn init(force: bool) -> Result<PathBuf, ConfigError> {
        let path = Self::user_config_path()?;
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists(path));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, DEFAULT_CONFIG)?;
        Ok(path)
    }

    pub fn roster(&self) -> Roster {
        Roster::new(
            self.authors
                .iter()
                .map(|(key, info)| RosterEntry {
                    match_key: key.clone(),
                    pretty_name: info.name.clone(),
                    external_id: info.croris_id,
                    institution_id: info.institution,
                })
                .collect(),
        )
    }

    pub fn author_options(&self) -> AuthorOptions {
        AuthorOptions {
            sort: self.sort_authors,
            full_list: self.full_author_list,
            collation: self.collation,
        }
    }

    pub fn journal(&self, name: &str) -> Option<&JournalInfo> {
        self.journals.get(name)
    }

    pub fn institution_name(&self, id: u32) -> Option<&str> {
        self.institutions.get(&id.to_string()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_config_parses() {
        let config = Config::bundled().unwrap();
        assert_eq!(config.collaboration.as_deref(), Some("CMS"));
        assert_eq!(config.keyword_limit, 480);
        assert!(config.sort_authors);
        assert_eq!(config.collation, Collation::Croatian);
        assert_eq!(config.publication.recenzija.vrsta, 903);
        assert_eq!(
            config.journal("JHEP").map(|j| j.eissn.as_str()),
            Some("1029-8479")
        );
        assert_eq!(
            config.institution_name(66),
            Some("Institut Ruđer Bošković / Ruđer Bošković Institute")
        );
    }

    #[test]
    fn roster_keeps_declaration_order() {
        let roster = Config::bundled().unwrap().roster();
        let keys: Vec<&str> = roster
            .entries()
            .iter()
            .take(3)
            .map(|e| e.match_key.as_str())
            .collect();
        assert_eq!(keys, vec!["Antunovic, Z", "Bargassa, P", "Brigljevic, V"]);

        let sudic = roster.find("Sudic, Lucija").unwrap();
        assert_eq!(sudic.external_id, None);
        assert_eq!(sudic.institution_id, Some(66));
    }

    #[test]
    fn defaults_apply_to_minimal_config() {
        let config = Config::from_toml(
            r#"
            [publication]
            tip = 1
            status = 2
            suradnja_medjunarodna = "N"
            url_vrsta = 3
            institution_role = 4
            project_role = 5

            [publication.recenzija]
            status = 6
            vrsta = 7

            [authors]
            "Zeta, A" = { name = "Zeta, Ana" }
            "Alpha, B" = { name = "Alpha, Bruno", croris_id = 9 }
            "#,
        )
        .unwrap();

        assert_eq!(config.collaboration, None);
        assert_eq!(config.keyword_limit, 480);
        assert_eq!(config.concurrency, 4);
        assert!(config.sort_authors);
        assert!(!config.full_author_list);
        assert!(config.publication.projects.is_empty());
        assert_eq!(config.roster().entries()[0].pretty_name, "Zeta, Ana");
    }

    #[test]
    fn unknown_collation_is_rejected() {
        let mut contents = DEFAULT_CONFIG.replace("collation = \"hr\"", "collation = \"fr\"");
        contents.push('\n');
        assert!(matches!(
            Config::from_toml(&contents),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/croris.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
