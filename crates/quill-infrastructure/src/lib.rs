pub mod config_service;
pub mod paths;
pub mod token_store;

pub use config_service::{load_client_config, load_client_config_from};
pub use paths::QuillPaths;
pub use token_store::FileTokenStore;
