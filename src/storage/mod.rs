mod id_list;
mod run_context;

pub use id_list::{save_html, write_ids};
pub use run_context::RunContext;
