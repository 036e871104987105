// Listing-page parsing: ProjectCard elements -> project ids
use crate::model::{ParserError, ProjectId};
use scraper::{Html, Selector};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub const ID_PREFIX: &str = "ProjectListPc_ProjectCard_";
const CARD_CLASS: &str = "ProjectCard";

pub trait Parser {
    fn parse(&self, html: &str) -> Result<Vec<ProjectId>, ParserError>;
}

pub struct ProjectCardParser {
    card_selector: Selector,
}

impl ProjectCardParser {
    pub fn new() -> Result<Self, ParserError> {
        let css = format!(r#".{}[id^="{}"]"#, CARD_CLASS, ID_PREFIX);
        let card_selector =
            Selector::parse(&css).map_err(|e| ParserError::Selector(e.to_string()))?;

        Ok(Self { card_selector })
    }

    /// Reads a stored markup file and returns the ids of its project cards.
    /// An empty path is logged and yields no ids.
    pub fn extract_ids(&self, markup_path: &Path) -> Result<Vec<ProjectId>, ParserError> {
        if markup_path.as_os_str().is_empty() {
            warn!("Markup file name is empty, nothing to extract");
            return Ok(Vec::new());
        }

        let bytes = fs::read(markup_path).map_err(|source| ParserError::Io {
            path: markup_path.to_path_buf(),
            source,
        })?;
        let html = String::from_utf8_lossy(&bytes);

        if html.trim().is_empty() {
            warn!("{} has no markup", markup_path.display());
            return Ok(Vec::new());
        }

        self.parse(&html)
    }
}

impl Parser for ProjectCardParser {
    fn parse(&self, html: &str) -> Result<Vec<ProjectId>, ParserError> {
        let document = Html::parse_document(html);

        let ids: Vec<ProjectId> = document
            .select(&self.card_selector)
            .filter_map(|card| card.value().id())
            .filter_map(|id| id.strip_prefix(ID_PREFIX))
            .map(str::to_string)
            .collect();

        debug!("Matched {} project cards", ids.len());
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Vec<ProjectId> {
        ProjectCardParser::new().unwrap().parse(html).unwrap()
    }

    #[test]
    fn strips_prefix_from_matching_card() {
        let html = r#"<div class="ProjectCard" id="ProjectListPc_ProjectCard_12345"></div>"#;
        assert_eq!(parse(html), vec!["12345"]);
    }

    #[test]
    fn keeps_document_order_and_duplicates() {
        let html = r#"
            <ul>
              <li class="ProjectCard" id="ProjectListPc_ProjectCard_30"></li>
              <li><div class="ProjectCard" id="ProjectListPc_ProjectCard_10"></div></li>
              <li class="ProjectCard" id="ProjectListPc_ProjectCard_20"></li>
              <li class="ProjectCard" id="ProjectListPc_ProjectCard_30"></li>
            </ul>"#;
        assert_eq!(parse(html), vec!["30", "10", "20", "30"]);
    }

    #[test]
    fn class_token_may_appear_among_others() {
        let html = r#"<article class="card ProjectCard is-new" id="ProjectListPc_ProjectCard_77"></article>"#;
        assert_eq!(parse(html), vec!["77"]);
    }

    #[test]
    fn excludes_card_without_class_token() {
        let html = r#"
            <div class="Card" id="ProjectListPc_ProjectCard_9"></div>
            <div class="ProjectCardWide" id="ProjectListPc_ProjectCard_8"></div>
            <div id="ProjectListPc_ProjectCard_7"></div>"#;
        assert!(parse(html).is_empty());
    }

    #[test]
    fn excludes_card_with_unprefixed_id() {
        let html = r#"
            <div class="ProjectCard" id="ProjectListSp_ProjectCard_1"></div>
            <div class="ProjectCard" id="xProjectListPc_ProjectCard_2"></div>
            <div class="ProjectCard"></div>"#;
        assert!(parse(html).is_empty());
    }

    #[test]
    fn only_leading_prefix_is_removed() {
        let html = r#"<div class="ProjectCard" id="ProjectListPc_ProjectCard_a_ProjectListPc_ProjectCard_b"></div>"#;
        assert_eq!(parse(html), vec!["a_ProjectListPc_ProjectCard_b"]);
    }

    #[test]
    fn cards_inside_noscript_are_not_matched() {
        // html5ever parses with scripting on, so noscript content stays raw text.
        let html = r#"
            <div class="ProjectCard" id="ProjectListPc_ProjectCard_1"></div>
            <noscript><div class="ProjectCard" id="ProjectListPc_ProjectCard_3"></div></noscript>"#;
        assert_eq!(parse(html), vec!["1"]);
    }

    #[test]
    fn page_without_cards_yields_empty() {
        assert!(parse("<html><body><p>no listings</p></body></html>").is_empty());
    }

    #[test]
    fn extract_ids_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("java.html");
        fs::write(
            &path,
            r#"<div class="ProjectCard" id="ProjectListPc_ProjectCard_1"></div>
               <div class="ProjectCard" id="ProjectListPc_ProjectCard_2"></div>"#,
        )
        .unwrap();

        let ids = ProjectCardParser::new().unwrap().extract_ids(&path).unwrap();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn extract_ids_with_empty_path_is_noop() {
        let ids = ProjectCardParser::new().unwrap().extract_ids(Path::new("")).unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn extract_ids_on_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = ProjectCardParser::new()
            .unwrap()
            .extract_ids(&dir.path().join("absent.html"))
            .unwrap_err();
        assert!(matches!(err, ParserError::Io { .. }));
    }

    #[test]
    fn extract_ids_on_empty_file_yields_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("empty.html");
        fs::write(&path, "").unwrap();
        assert!(ProjectCardParser::new().unwrap().extract_ids(&path).unwrap().is_empty());
    }
}
