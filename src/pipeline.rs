// Per-category fetch -> extract -> write, strictly in catalog order
use crate::model::{Category, ParserError, ScraperError, StorageError};
use crate::parser::ProjectCardParser;
use crate::scraper::Scraper;
use crate::storage::{RunContext, save_html, write_ids};
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug)]
pub enum CategoryOutcome {
    Written { ids: usize, path: PathBuf },
    FetchFailed(ScraperError),
    SaveFailed(StorageError),
    ExtractFailed(ParserError),
    WriteFailed(StorageError),
}

impl CategoryOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, CategoryOutcome::Written { .. })
    }
}

impl fmt::Display for CategoryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryOutcome::Written { ids, path } => write!(f, "{} ids -> {}", ids, path.display()),
            CategoryOutcome::FetchFailed(e) => write!(f, "fetch failed: {}", e),
            CategoryOutcome::SaveFailed(e) => write!(f, "saving markup failed: {}", e),
            CategoryOutcome::ExtractFailed(e) => write!(f, "extraction failed: {}", e),
            CategoryOutcome::WriteFailed(e) => write!(f, "writing ids failed: {}", e),
        }
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<(Category, CategoryOutcome)>,
}

impl RunSummary {
    pub fn written(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_written()).count()
    }

    pub fn failed(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|(_, o)| !o.is_written())
            .map(|(c, _)| c.filename.as_str())
            .collect()
    }

    /// One `<file>: <outcome>` line per category, in run order.
    pub fn lines(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .map(|(c, o)| format!("{}: {}", c.filename, o))
            .collect()
    }

    /// Logs each category's outcome, then the totals.
    pub fn log(&self) {
        for ((_, outcome), line) in self.outcomes.iter().zip(self.lines()) {
            if outcome.is_written() {
                info!("{}", line);
            } else {
                warn!("{}", line);
            }
        }

        let failed = self.failed();
        if failed.is_empty() {
            info!("Run finished: {} of {} categories written", self.written(), self.outcomes.len());
        } else {
            warn!(
                "Run finished: {} of {} categories written, failed: {}",
                self.written(),
                self.outcomes.len(),
                failed.join(", ")
            );
        }
    }
}

/// Runs every category in order. A failure only ends its own category.
pub fn run<S: Scraper>(
    ctx: &RunContext,
    categories: &[Category],
    scraper: &S,
    parser: &ProjectCardParser,
) -> RunSummary {
    let mut summary = RunSummary::default();
    for category in categories {
        let outcome = process_category(ctx, category, scraper, parser);
        summary.outcomes.push((category.clone(), outcome));
    }
    summary
}

fn process_category<S: Scraper>(
    ctx: &RunContext,
    category: &Category,
    scraper: &S,
    parser: &ProjectCardParser,
) -> CategoryOutcome {
    info!("Fetching {} from {}", category.filename, category.url);
    let body = match scraper.fetch(&category.url) {
        Ok(body) => body,
        Err(e) => {
            warn!("Download of {} failed: {}", category.filename, e);
            return CategoryOutcome::FetchFailed(e);
        }
    };

    let html_path = ctx.html_path(category);
    if let Err(e) = save_html(&html_path, &body) {
        warn!("Saving {} failed: {}", category.filename, e);
        return CategoryOutcome::SaveFailed(e);
    }

    let ids = match parser.extract_ids(&html_path) {
        Ok(ids) => ids,
        Err(e) => {
            warn!("Extracting ids from {} failed: {}", category.filename, e);
            return CategoryOutcome::ExtractFailed(e);
        }
    };

    let ids_path = ctx.ids_path(category);
    if let Err(e) = write_ids(&ids, &ids_path) {
        warn!("Writing ids for {} failed: {}", category.filename, e);
        return CategoryOutcome::WriteFailed(e);
    }

    info!("{}: {} ids -> {}", category.filename, ids.len(), ids_path.display());
    CategoryOutcome::Written {
        ids: ids.len(),
        path: ids_path,
    }
}
