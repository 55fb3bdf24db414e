//! Common test utilities for clrdeploy integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch layout with a settings file, a local repository and a global cache
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.path.join("settings.yaml")
    }

    pub fn repository(&self) -> PathBuf {
        self.path.join("home").join(".clrdeploy").join("repository")
    }

    pub fn gac_root(&self) -> PathBuf {
        self.path.join("gac")
    }

    pub fn private_cache(&self) -> PathBuf {
        self.path
            .join("home")
            .join(".clrdeploy")
            .join("uac")
            .join("gac_msil")
    }

    /// Write a file relative to the workspace root
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        write(&file_path, content);
        file_path
    }

    /// Write a settings file with one Mono vendor whose toolchain lives in the workspace
    pub fn write_mono_settings(&self) -> PathBuf {
        let install_root = self.path.join("mono").join("2.0");
        let sdk_root = self.path.join("mono").join("bin");
        std::fs::create_dir_all(&install_root).expect("Failed to create install root");
        std::fs::create_dir_all(&sdk_root).expect("Failed to create sdk root");

        let settings = format!(
            "vendors:
  - name: MONO
    version: 1.1.18
    default: true
    frameworks:
      - version: 2.0.50727
        install_root: '{}'
        sdk_install_root: '{}'
  - name: Rotor
    version: '1.0'
    frameworks:
      - version: '1.0'
        install_root: /opt/rotor
default_setup:
  vendor: MONO
  vendor_version: 1.1.18
  framework_version: 2.0.50727
",
            install_root.display(),
            sdk_root.display()
        );
        write(&self.settings_path(), &settings);
        self.settings_path()
    }

    /// Place an artifact in the local repository the way the resolver expects it
    pub fn add_to_repository(&self, group: &str, id: &str, version: &str, ext: &str, content: &str) -> PathBuf {
        let mut dir = self.repository();
        for part in group.split('.') {
            dir.push(part);
        }
        let file = dir.join(id).join(version).join(format!("{id}-{version}.{ext}"));
        write(&file, content);
        file
    }

    /// Place an assembly in the global cache
    pub fn add_to_gac(&self, kind: &str, id: &str, version: &str, token: &str) -> PathBuf {
        let file = self
            .gac_root()
            .join(kind)
            .join(id)
            .join(format!("{version}__{token}"))
            .join(format!("{id}.dll"));
        write(&file, "global");
        file
    }

    /// The clrdeploy binary with every location pointed into this workspace
    pub fn cmd(&self) -> Command {
        let mut cmd = clrdeploy_cmd();
        cmd.arg("--settings")
            .arg(self.settings_path())
            .arg("--local-repository")
            .arg(self.repository())
            .arg("--gac-root")
            .arg(self.gac_root())
            .env_remove("CLRDEPLOY_SETTINGS")
            .env_remove("CLRDEPLOY_LOCAL_REPOSITORY")
            .env_remove("CLRDEPLOY_GAC_ROOT");
        cmd
    }
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

#[allow(deprecated)]
pub fn clrdeploy_cmd() -> Command {
    Command::cargo_bin("clrdeploy").expect("clrdeploy binary")
}
