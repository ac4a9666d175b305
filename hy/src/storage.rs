//! Flat-file persistence for the task list
//!
//! One storage line per task. The whole file is rewritten on every save.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::{HyperionError, Result};
use crate::task::Task;
use crate::tasklist::TaskList;

/// Tasks read from the file, plus the error that stopped the read, if any
#[derive(Debug)]
pub struct LoadOutcome {
    pub tasks: Vec<Task>,
    pub error: Option<HyperionError>,
}

/// Reads and writes the task file
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Point storage at `path`, creating the parent directory and an empty
    /// file when they are missing
    ///
    /// Creation failures are logged, not returned; the next save will fail
    /// and report instead.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        if let Err(e) = Self::ensure_file(&path) {
            warn!("Failed to create task file: {}", e);
        }
        debug!("Opened task file {}", path.display());
        Self { path }
    }

    fn ensure_file(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| HyperionError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        if !path.exists() {
            fs::File::create(path).map_err(|source| HyperionError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every task, failing on the first corrupt line
    ///
    /// A missing file is an empty list.
    pub fn load(&self) -> Result<Vec<Task>> {
        let outcome = self.load_partial()?;
        match outcome.error {
            Some(err) => Err(err),
            None => Ok(outcome.tasks),
        }
    }

    /// Load tasks up to the first corrupt line and keep them
    ///
    /// Only an unreadable file is an `Err`; a corrupt line ends the read and
    /// is returned alongside the tasks parsed before it.
    pub fn load_partial(&self) -> Result<LoadOutcome> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Task file {} not found, starting empty", self.path.display());
                return Ok(LoadOutcome {
                    tasks: Vec::new(),
                    error: None,
                });
            }
            Err(source) => {
                return Err(HyperionError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let mut tasks = Vec::new();
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Task::from_storage_line(line, i + 1) {
                Ok(task) => tasks.push(task),
                Err(err) => {
                    warn!("Stopped loading {}: {}", self.path.display(), err);
                    return Ok(LoadOutcome {
                        tasks,
                        error: Some(err),
                    });
                }
            }
        }

        info!("Loaded {} tasks from {}", tasks.len(), self.path.display());
        Ok(LoadOutcome { tasks, error: None })
    }

    /// Overwrite the file with the current list
    pub fn save(&self, list: &TaskList) -> Result<()> {
        fs::write(&self.path, list.to_storage_string()).map_err(|source| HyperionError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!("Saved {} tasks to {}", list.len(), self.path.display());
        Ok(())
    }
}
