use crate::api::HistPropApi;
use crate::config::{HistPropConfig, CONFIG_FILENAME, GLOBAL_CONFIG_FILENAME};
use crate::error::Result;
use crate::store::fs::{FileSource, DEFAULT_DATA_FILE};
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

pub struct HistPropContext {
    pub api: HistPropApi<FileSource>,
    pub config: HistPropConfig,
    pub data_path: PathBuf,
}

/// Find the project root by walking up from cwd looking for a directory that
/// holds either a `histprop.toml` or the default dataset file.
/// Returns None if nothing matches before reaching home or the filesystem root.
pub fn find_project_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(CONFIG_FILENAME).exists() || current.join(DEFAULT_DATA_FILE).exists() {
            return Some(current);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

pub fn global_config_file() -> Option<PathBuf> {
    ProjectDirs::from("org", "histprop", "histprop")
        .map(|dirs| dirs.config_dir().join(GLOBAL_CONFIG_FILENAME))
}

/// Relative dataset paths resolve against `base`.
pub fn resolve_data_path(data_file: &str, base: &Path) -> PathBuf {
    let path = PathBuf::from(data_file);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

pub fn initialize(cwd: &Path, data_override: Option<PathBuf>) -> Result<HistPropContext> {
    let root = find_project_root(cwd);
    let project_file = root.as_ref().map(|r| r.join(CONFIG_FILENAME));
    let global_file = global_config_file();

    let config = HistPropConfig::load(project_file.as_deref(), global_file.as_deref())?;

    let data_path = match data_override {
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path),
        None => resolve_data_path(&config.data_file, root.as_deref().unwrap_or(cwd)),
    };
    tracing::debug!(data = %data_path.display(), "resolved dataset path");

    let api = HistPropApi::new(FileSource::new(&data_path), config.clone());

    Ok(HistPropContext {
        api,
        config,
        data_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_project_root_with_config_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(find_project_root(root), Some(root.to_path_buf()));
    }

    #[test]
    fn test_find_project_root_with_default_dataset() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("json_data")).unwrap();
        fs::write(root.join(DEFAULT_DATA_FILE), "[]").unwrap();

        let nested = root.join("medford-historic-web").join("src");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(root.to_path_buf()));
    }

    #[test]
    fn test_find_project_root_nearest_wins() {
        let temp = TempDir::new().unwrap();
        let parent = temp.path();
        let child = parent.join("child");
        fs::create_dir_all(&child).unwrap();
        fs::write(parent.join(CONFIG_FILENAME), "").unwrap();
        fs::write(child.join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(find_project_root(&child), Some(child.clone()));
    }

    #[test]
    fn test_find_project_root_none() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("some").join("deep").join("path");
        fs::create_dir_all(&dir).unwrap();

        assert_eq!(find_project_root(&dir), None);
    }

    #[test]
    fn test_resolve_data_path() {
        let base = Path::new("/srv/survey");
        assert_eq!(
            resolve_data_path("json_data/all.json", base),
            PathBuf::from("/srv/survey/json_data/all.json")
        );
        assert_eq!(
            resolve_data_path("/data/all.json", base),
            PathBuf::from("/data/all.json")
        );
    }

    #[test]
    fn test_initialize_uses_project_config() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join(CONFIG_FILENAME), "data_file = \"survey.json\"\n").unwrap();
        fs::write(root.join("survey.json"), r#"[{"filename": "Elm_12"}]"#).unwrap();

        let ctx = initialize(root, None).unwrap();
        assert_eq!(ctx.data_path, root.join("survey.json"));
        assert_eq!(ctx.api.session().total(), 1);
    }

    #[test]
    fn test_initialize_override_wins() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("other.json"), "[]").unwrap();

        let ctx = initialize(root, Some(PathBuf::from("other.json"))).unwrap();
        assert_eq!(ctx.data_path, root.join("other.json"));
        assert!(ctx.api.session().is_ready());
    }
}
