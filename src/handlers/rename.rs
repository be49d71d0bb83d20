//! Rename handler: derives the canonical filename for a manifest file and
//! reports, applies, or validates it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{NamerError, Result};
use crate::namer::{parse_manifest, target_path};

/// Options controlling how the derived filename is acted on.
///
/// Built once at startup and passed down explicitly; there is no global
/// configuration state.
#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// Path to the manifest file.
    pub path: PathBuf,
    /// Rename the file on disk instead of reporting.
    pub write: bool,
    /// Exit non-zero when the current filename is not canonical.
    pub validate: bool,
}

impl RenameOptions {
    /// Build options from parsed CLI arguments.
    ///
    /// Fails when no manifest path was supplied, so the usage error is
    /// raised before any file access is attempted. An empty `--path`
    /// value counts as missing.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let path = match &cli.path {
            Some(path) if !path.as_os_str().is_empty() => path.clone(),
            _ => return Err(NamerError::MissingPath),
        };

        Ok(Self {
            path,
            write: cli.write,
            validate: cli.validate,
        })
    }
}

/// What the handler did with the manifest file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Report mode: the canonical path was printed, nothing was touched.
    Reported { target: PathBuf },
    /// Write mode: the file was renamed to its canonical path.
    Renamed { from: PathBuf, to: PathBuf },
    /// Write or validate mode: the file already carries its canonical name.
    Canonical { path: PathBuf },
    /// Validate mode: the current name does not match the canonical one.
    Mismatch { path: PathBuf, target: PathBuf },
}

impl RenameOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Mismatch { .. } => 1,
            _ => 0,
        }
    }
}

/// Derive the canonical filename for the manifest at `options.path` and
/// act on it according to the selected mode.
///
/// Write mode takes priority over validate mode when both are requested;
/// report mode is the fallback when neither is.
pub fn handle_rename(options: &RenameOptions) -> Result<RenameOutcome> {
    log::debug!(
        "processing {} (write: {}, validate: {})",
        options.path.display(),
        options.write,
        options.validate
    );

    let source = normalize_path(&options.path)?;
    let content = fs::read_to_string(&source).map_err(|e| NamerError::ReadFile {
        path: source.clone(),
        source: e,
    })?;
    let descriptor = parse_manifest(&content)?;
    let target = target_path(&source, &descriptor);
    log::debug!(
        "canonical path for kind {:?} name {:?} is {}",
        descriptor.kind,
        descriptor.name,
        target.display()
    );

    if options.write {
        if source == target {
            log::debug!("{} is already canonical, nothing to do", source.display());
            return Ok(RenameOutcome::Canonical { path: source });
        }
        return rename_manifest(source, target);
    }

    if options.validate {
        if source == target {
            return Ok(RenameOutcome::Canonical { path: source });
        }
        eprintln!(
            "{} does not match canonical name {}",
            source.display(),
            target.display()
        );
        return Ok(RenameOutcome::Mismatch {
            path: source,
            target,
        });
    }

    println!("{}", target.display());
    Ok(RenameOutcome::Reported { target })
}

/// Resolve a user-supplied path to an absolute, symlink-free path.
fn normalize_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| NamerError::NormalizePath {
        path: path.to_path_buf(),
        source: e,
    })
}

fn rename_manifest(source: PathBuf, target: PathBuf) -> Result<RenameOutcome> {
    if target.exists() {
        // On case-insensitive filesystems the target may be the source
        // itself under a different spelling; only a distinct file is a
        // conflict.
        let existing = fs::canonicalize(&target).map_err(|e| NamerError::NormalizePath {
            path: target.clone(),
            source: e,
        })?;
        if existing != source {
            return Err(NamerError::TargetExists {
                from: source,
                to: target,
            });
        }
    }

    log::info!("renaming {} to {}", source.display(), target.display());
    fs::rename(&source, &target).map_err(|e| NamerError::Rename {
        from: source.clone(),
        to: target.clone(),
        source: e,
    })?;

    Ok(RenameOutcome::Renamed {
        from: source,
        to: target,
    })
}
