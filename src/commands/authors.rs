use crate::authors::{AuthorList, AuthorOptions};
use crate::config::Config;
use crate::ui::{blog, UI};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Runs the author string reconstruction on a plain list of names, one per line.
pub fn authors(config: &Config, names: &Path, options: AuthorOptions) -> Result<()> {
    let contents = fs::read_to_string(names)
        .with_context(|| format!("Could not read {}", names.display()))?;
    let names = read_names(&contents);

    let list = AuthorList::build(&names, &config.roster(), &options)?;
    blog!("Authors", "{}", list.citation);
    blog!(
        "CroRIS ids",
        "{}",
        list.external_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    blog!(
        "Institutions",
        "{}",
        list.institution_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    UI::author_notes(&list);
    Ok(())
}

fn read_names(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
