//! Client install actions for both manifest generations
//!
//! These perform the local portion of a client install: validate the
//! manifest data, create the version directory under the target, and write
//! the launcher version entry. Network transfer and archive extraction are
//! owned by external tooling and never happen here.

use std::path::Path;

use crate::error::{InstallerError, Result};
use crate::manifest::{LegacyManifest, ManifestV1};
use crate::progress::ProgressReporter;

use super::{InstallAction, ShouldContinue};

/// File recording which profiles this installer has registered
const PROFILES_FILE: &str = "installed_profiles.json";

fn write_version_entry(
    target_dir: &Path,
    name: &str,
    entry: &serde_json::Value,
) -> Result<()> {
    let version_dir = target_dir.join("versions").join(name);
    std::fs::create_dir_all(&version_dir).map_err(|e| InstallerError::FileWriteFailed {
        path: version_dir.display().to_string(),
        reason: e.to_string(),
    })?;
    let entry_path = version_dir.join(format!("{name}.json"));
    let data = serde_json::to_string_pretty(entry)?;
    std::fs::write(&entry_path, data).map_err(|e| InstallerError::FileWriteFailed {
        path: entry_path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Append `name` to the profile registry, creating it when missing
fn register_profile(target_dir: &Path, name: &str) -> Result<()> {
    let path = target_dir.join(PROFILES_FILE);
    let mut profiles: Vec<String> = match std::fs::read_to_string(&path) {
        Ok(data) => serde_json::from_str(&data).map_err(|e| InstallerError::IoError {
            message: format!("{}: {}", path.display(), e),
        })?,
        Err(_) => Vec::new(),
    };
    if !profiles.iter().any(|p| p == name) {
        profiles.push(name.to_string());
    }
    let data = serde_json::to_string_pretty(&profiles)?;
    std::fs::write(&path, data).map_err(|e| InstallerError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Client install for legacy (spec 0) manifests
pub struct ClientInstall<'a> {
    manifest: &'a LegacyManifest,
    reporter: &'a ProgressReporter,
}

impl<'a> ClientInstall<'a> {
    pub fn new(manifest: &'a LegacyManifest, reporter: &'a ProgressReporter) -> Self {
        Self { manifest, reporter }
    }
}

impl InstallAction for ClientInstall<'_> {
    fn run(&self, target_dir: &Path, should_continue: ShouldContinue) -> Result<bool> {
        let name = self.manifest.path.name();
        if name.is_empty() {
            return Err(InstallerError::InvalidManifest {
                message: "empty path coordinate".to_string(),
            });
        }
        self.reporter
            .report(&format!("Installing client {}", self.manifest.path.coordinate()));

        if !target_dir.is_dir() {
            self.reporter.report(&format!(
                "Target directory {} does not exist",
                target_dir.display()
            ));
            return Ok(false);
        }

        let entry = serde_json::json!({
            "id": name,
            "type": "release",
            "version": self.manifest.version,
        });
        write_version_entry(target_dir, name, &entry)?;
        self.reporter.report(&format!("Wrote version entry for {name}"));

        // Profile registration is optional; skipping it is not a failure
        if should_continue(name) {
            register_profile(target_dir, name)?;
            self.reporter.report(&format!("Registered profile {name}"));
        } else {
            self.reporter.report(&format!("Skipped profile registration for {name}"));
        }

        Ok(true)
    }

    fn success_message(&self) -> String {
        format!(
            "Successfully installed client profile {}",
            self.manifest.path.name()
        )
    }
}

/// Client install for v1 manifests
///
/// Additionally holds the installer's own binary location so the written
/// entry can re-reference the installer archive.
pub struct ClientInstallV1<'a> {
    manifest: &'a ManifestV1,
    reporter: &'a ProgressReporter,
    installer: &'a Path,
}

impl<'a> ClientInstallV1<'a> {
    pub fn new(
        manifest: &'a ManifestV1,
        reporter: &'a ProgressReporter,
        installer: &'a Path,
    ) -> Self {
        Self {
            manifest,
            reporter,
            installer,
        }
    }
}

impl InstallAction for ClientInstallV1<'_> {
    fn run(&self, target_dir: &Path, should_continue: ShouldContinue) -> Result<bool> {
        if self.manifest.version.is_empty() {
            return Err(InstallerError::InvalidManifest {
                message: "empty version".to_string(),
            });
        }
        self.reporter.report(&format!(
            "Installing client {} ({})",
            self.manifest.profile, self.manifest.version
        ));

        if !target_dir.is_dir() {
            self.reporter.report(&format!(
                "Target directory {} does not exist",
                target_dir.display()
            ));
            return Ok(false);
        }

        let entry = serde_json::json!({
            "id": self.manifest.version,
            "profile": self.manifest.profile,
            "json": self.manifest.json,
            "installer": self.installer.display().to_string(),
        });
        write_version_entry(target_dir, &self.manifest.version, &entry)?;
        self.reporter
            .report(&format!("Wrote version entry for {}", self.manifest.version));

        if should_continue(&self.manifest.profile) {
            register_profile(target_dir, &self.manifest.profile)?;
            self.reporter
                .report(&format!("Registered profile {}", self.manifest.profile));
        } else {
            self.reporter.report(&format!(
                "Skipped profile registration for {}",
                self.manifest.profile
            ));
        }

        Ok(true)
    }

    fn success_message(&self) -> String {
        format!(
            "Successfully installed client profile {} for version {}",
            self.manifest.profile, self.manifest.version
        )
    }
}
