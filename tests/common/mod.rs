//! Common test utilities for Firmkeep integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use git2::{Repository, Signature};
use tempfile::TempDir;

/// A test workspace for integration tests
///
/// Holds a fresh `docs/` tree next to a local git repository standing in for
/// the published site.
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
    /// Path to the repository serving the published branch
    pub remote: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("workspace");
        std::fs::create_dir_all(&path).expect("Failed to create workspace directory");
        let remote = temp.path().join("remote");
        Self { temp, path, remote }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        write_file(&self.path.join(path), content);
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Put the freshly built firmware `version` into `docs/firmware/`
    pub fn add_current_build(&self, version: &str) {
        self.write_file(
            &format!("docs/firmware/{version}/firmware.bin"),
            &format!("{version} (new build)"),
        );
    }

    /// Version directories of `docs/firmware/`, sorted
    pub fn firmware_versions(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path.join("docs/firmware"))
            .expect("Failed to read firmware directory")
            .map(|entry| entry.expect("Failed to read entry"))
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    /// Versions listed in `docs/manifest-index.json`, in file order
    pub fn manifest_versions(&self) -> Vec<String> {
        let content = self.read_file("docs/manifest-index.json");
        let json: serde_json::Value =
            serde_json::from_str(&content).expect("Failed to parse manifest");
        json["versions"]
            .as_array()
            .expect("versions is an array")
            .iter()
            .map(|v| v.as_str().expect("version is a string").to_string())
            .collect()
    }

    /// Publish `versions` on `branch` of the remote repository
    pub fn publish(&self, branch: &str, versions: &[&str]) {
        let repo = Repository::init(&self.remote).expect("Failed to init git repository");
        if versions.is_empty() {
            write_file(&self.remote.join("index.html"), "<html></html>");
        }
        for version in versions {
            write_file(
                &self.remote.join("firmware").join(version).join("firmware.bin"),
                &format!("{version} (published)"),
            );
        }

        let mut index = repo.index().expect("Failed to open index");
        index
            .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
            .expect("Failed to stage files");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = repo.find_tree(tree_id).expect("Failed to find tree");

        let sig = Signature::now("Test", "test@test.com").expect("Failed to create signature");
        let refname = format!("refs/heads/{branch}");
        repo.commit(Some(&refname), &sig, &sig, "Publish firmware", &tree, &[])
            .expect("Failed to commit");
        repo.set_head(&refname).expect("Failed to set HEAD");
    }

    /// `file://` URL of the remote repository
    pub fn remote_url(&self) -> String {
        format!("file://{}", self.remote.display())
    }

    /// Command running the real firmkeep binary inside this workspace
    pub fn cmd(&self) -> Command {
        let mut cmd = firmkeep_cmd();
        cmd.current_dir(&self.path)
            .env_remove("FIRMKEEP_WORKSPACE")
            .env_remove("FIRMKEEP_REPO_URL")
            .env_remove("FIRMKEEP_KEEP_DEV")
            .env_remove("FIRMKEEP_BRANCH");
        cmd
    }

    /// `firmkeep publish --version <version> --repo-url <remote>`
    pub fn publish_cmd(&self, version: &str) -> Command {
        let mut cmd = self.cmd();
        let url = self.remote_url();
        cmd.args(["publish", "--version", version, "--repo-url", url.as_str()]);
        cmd
    }
}

/// Command running the real firmkeep binary
#[allow(dead_code)]
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn firmkeep_cmd() -> Command {
    Command::cargo_bin("firmkeep").expect("firmkeep binary")
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
