//! JSON 저장소

mod store;

pub use store::{load_path, JsonStore, GLOBAL_DIR_NAME, PROJECT_DIR_NAME};
