//! Install profile (manifest) data structures and loader
//!
//! The on-disk manifest comes in two schema generations. Legacy profiles
//! carry a numeric `spec` discriminant; v1 profiles have no discriminant at
//! all, so presence of the `spec` key is what selects the generation. The
//! loader never interprets one generation as the other.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{InstallerError, Result};

/// Well-known manifest file name, resolved against the working context
pub const MANIFEST_FILE: &str = "install_profile.json";

/// The one legacy schema revision this installer understands
pub const SUPPORTED_LEGACY_SPEC: u64 = 0;

/// Maven-style artifact coordinate (e.g. `net.example:client:1.12.2`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Artifact(String);

impl Artifact {
    /// Full coordinate string
    pub fn coordinate(&self) -> &str {
        &self.0
    }

    /// Final coordinate segment, used as the installed target name
    pub fn name(&self) -> &str {
        self.0.rsplit(':').next().unwrap_or(&self.0)
    }
}

/// Legacy (spec 0) install profile
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyManifest {
    /// Schema revision discriminant
    pub spec: u64,

    /// Coordinate of the target artifact being installed
    pub path: Artifact,

    /// Target version label, when the profile carries one
    #[serde(default)]
    pub version: Option<String>,
}

/// V1 install profile (no `spec` discriminant)
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestV1 {
    /// Profile name shown to the launcher
    pub profile: String,

    /// Version this profile installs
    pub version: String,

    /// Path to the version JSON inside the installer archive
    #[serde(default)]
    pub json: Option<String>,

    /// Coordinate of the target artifact, when present
    #[serde(default)]
    pub path: Option<Artifact>,

    /// Welcome text shown by graphical frontends; unused here
    #[serde(default)]
    pub welcome: Option<String>,
}

/// An install manifest in one of the supported schema generations
///
/// Exactly one generation is active per run; constructed once by
/// [`Manifest::load`] and immutable thereafter.
#[derive(Debug, Clone)]
pub enum Manifest {
    Legacy(LegacyManifest),
    V1(ManifestV1),
}

impl Manifest {
    /// Resolve the well-known manifest location within `dir`
    pub fn locate(dir: &Path) -> PathBuf {
        dir.join(MANIFEST_FILE)
    }

    /// Load and parse the manifest at `path`
    pub fn load(path: &Path) -> Result<Manifest> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                InstallerError::ManifestNotFound {
                    path: path.display().to_string(),
                }
            } else {
                InstallerError::IoError {
                    message: format!("{}: {}", path.display(), e),
                }
            }
        })?;
        Self::from_json(&data).map_err(|err| match err {
            InstallerError::ManifestParseFailed { reason, .. } => {
                InstallerError::ManifestParseFailed {
                    path: path.display().to_string(),
                    reason,
                }
            }
            other => other,
        })
    }

    /// Parse a manifest from JSON, selecting the schema generation by the
    /// presence of the `spec` key
    pub fn from_json(data: &str) -> Result<Manifest> {
        let value: serde_json::Value = serde_json::from_str(data)?;
        if value.get("spec").is_some() {
            Ok(Manifest::Legacy(serde_json::from_value(value)?))
        } else {
            Ok(Manifest::V1(serde_json::from_value(value)?))
        }
    }

    /// Reject manifests of a recognized format but unsupported revision
    ///
    /// Only the legacy generation carries a revision discriminant; v1
    /// manifests are always supported.
    pub fn ensure_supported(&self) -> Result<()> {
        match self {
            Manifest::Legacy(legacy) if legacy.spec != SUPPORTED_LEGACY_SPEC => {
                Err(InstallerError::UnsupportedSchema { spec: legacy.spec })
            }
            _ => Ok(()),
        }
    }
}
