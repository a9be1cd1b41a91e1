mod display_document;
mod find_current_git_repo;
mod get_conventions_config;
mod get_conventions_dir;
mod write_document;

pub use display_document::display_document;
pub use find_current_git_repo::find_repo_root;
pub use get_conventions_config::{
    find_config_file, get_config_path, get_conventions_config, load_config,
};
pub use get_conventions_dir::get_conventions_dir;
pub use write_document::{DOCUMENT_OUTPUT_DIR, write_document};
