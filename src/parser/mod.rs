mod project_card_parser;

pub use project_card_parser::ProjectCardParser;
