//! Filesystem infrastructure — implements the `Materializer` port.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::application::ports::Materializer;
use crate::domain::function::{BUILTIN_TEMPLATES, MANIFEST_FILENAME, is_known_runtime};
use crate::domain::{CreationDescriptor, CreationError, FunctionManifest, RUNTIMES};

/// Writes function projects to the local filesystem.
///
/// Builtin templates (`http`, `events`) contribute only `func.yaml`.
/// Templates named `repo/name` are copied from
/// `<repositories>/<repo>/<runtime>/<name>`.
pub struct FsMaterializer;

impl Materializer for FsMaterializer {
    fn create(&self, descriptor: &CreationDescriptor) -> Result<(), CreationError> {
        let template_dir = resolve_template(descriptor)?;
        prepare_project_dir(&descriptor.path)?;

        if let Some(dir) = &template_dir {
            tracing::debug!(from = %dir.display(), to = %descriptor.path.display(), "copying template");
            copy_tree(dir, &descriptor.path)?;
        }

        write_manifest(descriptor)
    }
}

/// Locate the template source directory, or `None` for builtin templates.
fn resolve_template(d: &CreationDescriptor) -> Result<Option<PathBuf>, CreationError> {
    if let Some((repo, name)) = d.template.split_once('/') {
        let dir = d.repositories.join(repo).join(&d.runtime).join(name);
        if !dir.is_dir() {
            return Err(CreationError::TemplateNotFound {
                template: d.template.clone(),
                runtime: d.runtime.clone(),
                searched: dir,
            });
        }
        return Ok(Some(dir));
    }

    if !is_known_runtime(&d.runtime) {
        return Err(CreationError::UnsupportedRuntime {
            runtime: d.runtime.clone(),
            available: RUNTIMES.join(", "),
        });
    }
    if !BUILTIN_TEMPLATES.contains(&d.template.as_str()) {
        return Err(CreationError::TemplateNotFound {
            template: d.template.clone(),
            runtime: d.runtime.clone(),
            searched: d.repositories.clone(),
        });
    }
    Ok(None)
}

/// Create `path` if missing; refuse it if it already holds visible files.
fn prepare_project_dir(path: &Path) -> Result<(), CreationError> {
    let io_err = |source| CreationError::Io {
        path: path.to_path_buf(),
        source,
    };

    if path.join(MANIFEST_FILENAME).exists() {
        return Err(CreationError::AlreadyInitialized {
            path: path.to_path_buf(),
        });
    }

    std::fs::create_dir_all(path).map_err(io_err)?;
    for entry in std::fs::read_dir(path).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        if !entry.file_name().to_string_lossy().starts_with('.') {
            return Err(CreationError::NotEmpty {
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

fn copy_tree(from: &Path, to: &Path) -> Result<(), CreationError> {
    let entries = std::fs::read_dir(from).map_err(|source| CreationError::Io {
        path: from.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| CreationError::Io {
            path: from.to_path_buf(),
            source,
        })?;
        let src = entry.path();
        let dest = to.join(entry.file_name());
        if src.is_dir() {
            std::fs::create_dir_all(&dest).map_err(|source| CreationError::Io {
                path: dest.clone(),
                source,
            })?;
            copy_tree(&src, &dest)?;
        } else {
            std::fs::copy(&src, &dest).map_err(|source| CreationError::Io {
                path: dest.clone(),
                source,
            })?;
        }
    }
    Ok(())
}

fn write_manifest(d: &CreationDescriptor) -> Result<(), CreationError> {
    let manifest = FunctionManifest::new(d, Utc::now());
    let content =
        serde_yaml::to_string(&manifest).map_err(|e| CreationError::Manifest(e.to_string()))?;
    let path = d.path.join(MANIFEST_FILENAME);
    std::fs::write(&path, content).map_err(|source| CreationError::Io { path, source })
}
