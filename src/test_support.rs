use crate::config::Config;
use crate::context::RunContext;
use crate::schema::DocumentType;
use crate::schema::defaults::bundled;
use std::path::Path;
use tempfile::TempDir;

pub(crate) const TEST_ENV: &str = "EMAIL=me@example.com\nPHONE=555-0100\n";

/// A base directory holding the bundled schemas under `formats/` and a `.env`.
pub(crate) fn create_test_workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let formats = temp_dir.path().join("formats");
    std::fs::create_dir_all(&formats).unwrap();

    for doc_type in DocumentType::ALL {
        let path = formats.join(format!("{}.yaml", doc_type.resource_name()));
        std::fs::write(path, bundled(doc_type)).unwrap();
    }
    std::fs::write(temp_dir.path().join(".env"), TEST_ENV).unwrap();

    temp_dir
}

/// A run context over `dir` with the default configuration.
pub(crate) fn test_context(dir: &Path) -> RunContext {
    RunContext::with_config(
        dir.to_path_buf(),
        Config::default(),
        dir.join(crate::config::CONFIG_FILE_NAME),
    )
}
