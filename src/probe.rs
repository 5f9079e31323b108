//! Filesystem probes for the search-index storage directory.
//!
//! Every probe is a named step. A failing step is recorded in the [`ProbeReport`]
//! and the remaining steps still run; nothing here aborts the process.

use log::{info, warn};
use std::{
    fmt, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Name of the scratch file written by the write-access probe.
pub const PROBE_FILE_NAME: &str = ".write_probe";
const PROBE_FILE_CONTENT: &str = "index write probe\n";

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("could not determine the home directory")]
    NoHomeDir,
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} exists but is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("{} does not exist", .0.display())]
    Missing(PathBuf),
    #[error("{} still exists after removal", .0.display())]
    StillPresent(PathBuf),
    #[error("{} read back different content than was written", .0.display())]
    ContentMismatch(PathBuf),
}

impl ProbeError {
    fn io(action: &'static str, path: &Path) -> impl FnOnce(io::Error) -> ProbeError {
        let path = path.to_owned();
        move |source| ProbeError::Io { action, path, source }
    }
}

/// Where the bot keeps the index for one chat group:
/// `<home>/.local/share/<app_name>/Index_Data/<group_id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexLocation {
    pub home: PathBuf,
    pub app_name: String,
    pub group_id: i64,
}

impl IndexLocation {
    pub fn new(home: impl Into<PathBuf>, app_name: impl Into<String>, group_id: i64) -> Self {
        Self {
            home: home.into(),
            app_name: app_name.into(),
            group_id,
        }
    }

    /// Use the current user's home directory.
    pub fn for_current_user(app_name: impl Into<String>, group_id: i64) -> Result<Self, ProbeError> {
        let home = dirs::home_dir().ok_or(ProbeError::NoHomeDir)?;
        Ok(Self::new(home, app_name, group_id))
    }

    pub fn app_dir(&self) -> PathBuf {
        self.home.join(".local").join("share").join(&self.app_name)
    }

    pub fn index_dir(&self) -> PathBuf {
        self.app_dir().join("Index_Data").join(self.group_id.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    AlreadyExists,
}

impl fmt::Display for DirStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirStatus::Created => f.write_str("created"),
            DirStatus::AlreadyExists => f.write_str("already exists"),
        }
    }
}

/// What the filesystem says about a path's access rights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionInfo {
    pub is_dir: bool,
    pub readonly: bool,
    /// Unix only.
    pub mode: Option<u32>,
    pub uid: Option<u32>,
    pub gid: Option<u32>,
}

impl fmt::Display for PermissionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.is_dir { "directory" } else { "file" })?;
        if let Some(mode) = self.mode {
            write!(f, ", mode {:o}", mode & 0o7777)?;
        }
        if let (Some(uid), Some(gid)) = (self.uid, self.gid) {
            write!(f, ", owner uid {} gid {}", uid, gid)?;
        }
        if self.readonly {
            write!(f, ", read-only")?;
        }
        Ok(())
    }
}

pub fn check_exists(path: &Path) -> Result<bool, ProbeError> {
    path.try_exists().map_err(ProbeError::io("check", path))
}

/// Create the directory (and parents) unless it is already there.
pub fn ensure_dir(path: &Path) -> Result<DirStatus, ProbeError> {
    if check_exists(path)? {
        if path.is_dir() {
            return Ok(DirStatus::AlreadyExists);
        }
        return Err(ProbeError::NotADirectory(path.to_owned()));
    }
    fs::create_dir_all(path).map_err(ProbeError::io("create", path))?;
    Ok(DirStatus::Created)
}

/// Write the probe file into `dir` and read it back. Returns the file's path.
pub fn write_probe_file(dir: &Path) -> Result<PathBuf, ProbeError> {
    let path = dir.join(PROBE_FILE_NAME);
    fs::write(&path, PROBE_FILE_CONTENT).map_err(ProbeError::io("write", &path))?;
    verify_content(&path, PROBE_FILE_CONTENT)?;
    Ok(path)
}

/// Read `path` back and compare it with what should have been written.
pub fn verify_content(path: &Path, expected: &str) -> Result<(), ProbeError> {
    let read_back = fs::read_to_string(path).map_err(ProbeError::io("read", path))?;
    if read_back != expected {
        return Err(ProbeError::ContentMismatch(path.to_owned()));
    }
    Ok(())
}

pub fn remove_probe_file(path: &Path) -> Result<(), ProbeError> {
    fs::remove_file(path).map_err(ProbeError::io("remove", path))?;
    confirm_removed(path)
}

pub fn confirm_removed(path: &Path) -> Result<(), ProbeError> {
    if check_exists(path)? {
        return Err(ProbeError::StillPresent(path.to_owned()));
    }
    Ok(())
}

pub fn query_permissions(path: &Path) -> Result<PermissionInfo, ProbeError> {
    let metadata = fs::metadata(path).map_err(ProbeError::io("stat", path))?;
    let mut info = PermissionInfo {
        is_dir: metadata.is_dir(),
        readonly: metadata.permissions().readonly(),
        mode: None,
        uid: None,
        gid: None,
    };
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        info.mode = Some(metadata.mode());
        info.uid = Some(metadata.uid());
        info.gid = Some(metadata.gid());
    }
    Ok(info)
}

/// One named probe and how it went. `Ok` holds a short description of the result.
#[derive(Debug)]
pub struct ProbeStep {
    pub name: String,
    pub outcome: Result<String, ProbeError>,
}

/// Ordered record of probe steps against one target directory.
#[derive(Debug)]
pub struct ProbeReport {
    pub target: PathBuf,
    steps: Vec<ProbeStep>,
}

impl ProbeReport {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            steps: Vec::new(),
        }
    }

    /// Run one probe and record the outcome. Failures are kept, not returned.
    pub fn step<T: fmt::Display>(
        &mut self,
        name: impl Into<String>,
        probe: impl FnOnce() -> Result<T, ProbeError>,
    ) -> Option<T> {
        let name = name.into();
        let (outcome, value) = match probe() {
            Ok(value) => {
                info!("{}: {}", name, value);
                (Ok(value.to_string()), Some(value))
            }
            Err(error) => {
                warn!("{}: {}", name, error);
                (Err(error), None)
            }
        };
        self.steps.push(ProbeStep { name, outcome });
        value
    }

    pub fn steps(&self) -> &[ProbeStep] {
        &self.steps
    }

    pub fn failures(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_err()).count()
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Target: {}", self.target.display())?;
        for step in &self.steps {
            match &step.outcome {
                Ok(detail) => writeln!(out, "✅ {}: {}", step.name, detail)?,
                Err(error) => writeln!(out, "❌ {}: {}", step.name, error)?,
            }
        }
        writeln!(out, "{} of {} checks failed", self.failures(), self.steps.len())
    }
}

fn presence(exists: bool) -> &'static str {
    if exists {
        "exists"
    } else {
        "missing"
    }
}

/// Walk from the home directory down to the index directory, create it if needed and inspect it.
pub fn probe_index_dir(location: &IndexLocation) -> ProbeReport {
    let index_dir = location.index_dir();
    let mut report = ProbeReport::new(&index_dir);

    let mut chain: Vec<&Path> = index_dir.ancestors().take_while(|p| p.starts_with(&location.home)).collect();
    chain.reverse();
    for dir in chain {
        report.step(format!("check {}", dir.display()), || check_exists(dir).map(presence));
    }

    report.step("create index directory", || ensure_dir(&index_dir));
    report.step("verify index directory", || match check_exists(&index_dir)? {
        true => Ok("present"),
        false => Err(ProbeError::Missing(index_dir.clone())),
    });
    report.step("permissions", || query_permissions(&index_dir));
    report
}

/// Make sure the index directory exists, then write and remove a scratch file in it.
pub fn probe_write_access(location: &IndexLocation) -> ProbeReport {
    let index_dir = location.index_dir();
    let mut report = ProbeReport::new(&index_dir);

    report.step("create index directory", || ensure_dir(&index_dir));
    report.step("permissions", || query_permissions(&index_dir));
    report.step("write probe file", || write_probe_file(&index_dir).map(|p| p.display().to_string()));
    // A failed read-back can still leave the file behind, so clean up whatever is there
    let probe_file = index_dir.join(PROBE_FILE_NAME);
    if let Ok(true) = check_exists(&probe_file) {
        report.step("remove probe file", || remove_probe_file(&probe_file).map(|()| "removed"));
    }
    report
}
