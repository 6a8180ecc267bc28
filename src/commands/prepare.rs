use crate::bibtex;
use crate::config::Config;
use crate::prepare::{self, Preparer};
use crate::sources::Sources;
use crate::ui::{blog, blog_done, blog_warning, blog_working};
use anyhow::{Context, Result};
use std::path::Path;

pub struct PrepareOptions<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub no_sort: bool,
    pub full_author_list: bool,
    pub concurrency: Option<usize>,
}

pub async fn prepare(config: &Config, options: PrepareOptions<'_>) -> Result<()> {
    let mut author_options = config.author_options();
    if options.no_sort {
        author_options.sort = false;
    }
    if options.full_author_list {
        author_options.full_list = true;
    }
    let concurrency = options.concurrency.unwrap_or(config.concurrency);

    blog_working!("Reading", "{}", options.input.display());
    let entries = bibtex::read_bibliography(options.input)
        .with_context(|| format!("Could not load {}", options.input.display()))?;
    blog!("Found", "{} BibTeX entries", entries.len());

    let preparer = Preparer::new(config, author_options);
    let sources = Sources::new()?;
    let report = prepare::run(entries, &preparer, &sources, concurrency).await;

    println!();
    prepare::write_records(options.output, &report.accepted)
        .with_context(|| format!("Could not write {}", options.output.display()))?;
    if !report.rejected.is_empty() {
        let error_path = prepare::error_path(options.output);
        prepare::write_records(&error_path, &report.rejected)
            .with_context(|| format!("Could not write {}", error_path.display()))?;
    }

    blog_done!("Prepared", "{} papers ready for upload", report.accepted.len());
    if !report.rejected.is_empty() {
        blog_warning!(
            "Rejected",
            "{} papers need attention, see {}",
            report.rejected.len(),
            prepare::error_path(options.output).display()
        );
    }
    if !report.skipped.is_empty() {
        blog_warning!("Skipped", "{} papers", report.skipped.len());
        for (n, err) in &report.skipped {
            blog_warning!("", "Paper {}: {}", n, err);
        }
    }

    Ok(())
}
