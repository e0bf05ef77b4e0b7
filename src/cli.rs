use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Parser)]
#[command(name = "quill")]
#[command(version = "0.1.0")]
#[command(about = "A minimal terminal text editor")]
pub struct CliArgs {
    /// File to open, or directory to browse in the Open dialog
    pub file: Option<PathBuf>,

    /// Read settings from this TOML file instead of the default location
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

/// What the editor shows first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupTarget {
    Empty,
    File(PathBuf),
    Directory(PathBuf),
}

impl CliArgs {
    /// Classify the FILE argument. Symlinks are followed; anything that is
    /// not a directory, including a missing path, is treated as a file so
    /// opening it reports the real error.
    pub fn startup_target(&self) -> StartupTarget {
        match self.file.as_deref() {
            None => StartupTarget::Empty,
            Some(path) if is_dir(path) => StartupTarget::Directory(path.to_path_buf()),
            Some(path) => StartupTarget::File(path.to_path_buf()),
        }
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}

fn is_dir(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|m| m.is_dir())
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_no_args_starts_empty() {
        let args = CliArgs::parse_from(["quill"]);
        assert_eq!(args.startup_target(), StartupTarget::Empty);
        assert!(args.config_path().is_none());
    }

    #[test]
    fn test_parse_file_and_config() {
        let args = CliArgs::parse_from(["quill", "notes.txt", "-c", "q.toml"]);
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
        assert_eq!(args.config_path(), Some(Path::new("q.toml")));
    }

    #[test]
    fn test_startup_target_classification() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("draft.txt");
        fs::write(&file_path, "draft").unwrap();
        let missing = temp_dir.path().join("missing.txt");

        let target = |file: &Path| {
            CliArgs {
                file: Some(file.to_path_buf()),
                config: None,
            }
            .startup_target()
        };

        assert_eq!(target(&file_path), StartupTarget::File(file_path.clone()));
        assert_eq!(
            target(temp_dir.path()),
            StartupTarget::Directory(temp_dir.path().to_path_buf())
        );
        assert_eq!(target(&missing), StartupTarget::File(missing.clone()));
    }
}
