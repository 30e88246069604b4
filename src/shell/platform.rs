//! Platform-specific shell detection.

use std::path::PathBuf;

/// Probe shell on Unix.
const UNIX_SHELL: &str = "/bin/sh";

/// Information about the shell used to run probe commands.
#[derive(Debug, Clone)]
pub struct ShellInfo {
    /// Shell executable path.
    pub executable: PathBuf,

    /// Shell name (bash, zsh, fish, powershell, cmd).
    pub name: ShellType,
}

/// Known shell types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
    Sh,
    PowerShell,
    Cmd,
    Unknown,
}

impl ShellType {
    /// Parse shell type from executable name.
    pub fn from_executable(exe: &str) -> Self {
        let name = std::path::Path::new(exe)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match name.as_str() {
            "bash" => ShellType::Bash,
            "zsh" => ShellType::Zsh,
            "fish" => ShellType::Fish,
            "sh" | "dash" => ShellType::Sh,
            "powershell" | "pwsh" => ShellType::PowerShell,
            "cmd" => ShellType::Cmd,
            _ => ShellType::Unknown,
        }
    }

    /// Flag that makes the shell run a single command line and exit.
    ///
    /// Never a login flag: the caller's PATH (virtualenvs, version manager
    /// shims, CI tool setup) must reach the probed command unchanged.
    pub fn command_flag(&self) -> &'static str {
        match self {
            ShellType::Cmd => "/C",
            ShellType::PowerShell => "-Command",
            _ => "-c",
        }
    }

    /// Exit code the shell uses when the command itself cannot be found.
    ///
    /// PowerShell reports a missing command with the generic code 1, so no
    /// code is reserved for it there.
    pub fn not_found_exit_code(&self) -> Option<i32> {
        match self {
            ShellType::Cmd => Some(9009),
            ShellType::PowerShell => None,
            _ => Some(127),
        }
    }
}

/// Detect the shell used for probe commands.
///
/// Always `/bin/sh` on Unix. `$SHELL` is ignored since service accounts
/// often set it to `nologin` or `/bin/false`.
pub fn detect_shell() -> ShellInfo {
    let executable = get_shell_executable();
    let name = ShellType::from_executable(&executable.to_string_lossy());

    ShellInfo { executable, name }
}

fn get_shell_executable() -> PathBuf {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("cmd.exe"))
    } else {
        PathBuf::from(UNIX_SHELL)
    }
}

/// Check if running in a CI environment.
///
/// Used in `main()` to pick the plain, non-interactive UI.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
