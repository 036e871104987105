// Utility functions
use chrono::NaiveDate;

/// Formats a run date as the `YYYY-MM-DD` directory name.
pub fn date_dir_name(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Maps a markup file name to its id-list file name: `java.html` -> `project_ids_java.txt`.
pub fn ids_file_name(html_filename: &str) -> String {
    format!("project_ids_{}", html_filename.replace(".html", ".txt"))
}
