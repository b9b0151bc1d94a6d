//! Locating and launching the TablePlus application.
//!
//! Everything except the final [`LaunchPlan::spawn`] is pure: the executable
//! probe is injected so path resolution can be tested without touching the
//! filesystem, and the launch plan carries the exact argument list before
//! anything is executed.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Standard install location of the TablePlus executable.
pub const TABLEPLUS_APP_PATH: &str = "/Applications/TablePlus.app/Contents/MacOS/TablePlus";
/// Setapp install location, preferred when present.
pub const SETAPP_APP_PATH: &str = "/Applications/Setapp/TablePlus.app/Contents/MacOS/TablePlus";

// Probed in order; the standard path doubles as the fallback when nothing
// exists (the `open` call reports the missing app itself)
const CANDIDATE_APP_PATHS: [&str; 2] = [SETAPP_APP_PATH, TABLEPLUS_APP_PATH];

/// The platform the command runs on. Launching TablePlus through `open` only
/// works on macOS.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Unsupported(String),
}

impl Platform {
    pub fn current() -> Platform {
        Platform::from(std::env::consts::OS)
    }
}

impl From<&str> for Platform {
    fn from(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOs,
            other => Platform::Unsupported(other.to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Launching TablePlus is not supported on '{0}'")]
    UnsupportedPlatform(String),
    #[error("Failed to launch TablePlus: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Resolves the TablePlus executable path: the first candidate the probe
/// reports existing wins, the standard install location is the fallback.
pub fn locate_tableplus<F>(exists: F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    CANDIDATE_APP_PATHS
        .iter()
        .map(Path::new)
        .find(|path| exists(path))
        .unwrap_or_else(|| Path::new(TABLEPLUS_APP_PATH))
        .to_path_buf()
}

/// The exact process invocation used to hand a connection URI to TablePlus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchPlan {
    /// Builds the launch plan for the given platform and connection URI.
    ///
    /// Fails with [`LaunchError::UnsupportedPlatform`] on anything but
    /// macOS; no launch is ever attempted there.
    pub fn resolve<F>(platform: &Platform, uri: &str, exists: F) -> Result<LaunchPlan, LaunchError>
    where
        F: Fn(&Path) -> bool,
    {
        if let Platform::Unsupported(os) = platform {
            return Err(LaunchError::UnsupportedPlatform(os.clone()));
        }

        let app_path = locate_tableplus(exists);

        Ok(LaunchPlan {
            program: "open".to_string(),
            args: vec![
                uri.to_string(),
                "-a".to_string(),
                app_path.display().to_string(),
            ],
        })
    }

    /// Spawns the plan detached. The GUI process is never waited on or
    /// observed; only the spawn itself can fail.
    pub fn spawn(&self) -> Result<(), LaunchError> {
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        Ok(())
    }
}

impl Display for LaunchPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.program, self.args.join(" "))
    }
}
