//! Operating system identity.

use serde::Serialize;

/// Host OS facts, read in-process without spawning anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OsInfo {
    /// Kernel or OS family name (`Linux`, `Darwin`, `Windows`).
    pub system: String,
    /// Kernel release.
    pub release: String,
    /// Kernel build/version string.
    pub version: String,
    /// Machine architecture.
    pub machine: String,
}

impl OsInfo {
    /// Read the host platform identity. Never fails; unknown fields are empty.
    pub fn detect() -> Self {
        #[cfg(unix)]
        {
            if let Some(info) = uname() {
                return info;
            }
        }

        Self {
            system: system_name(std::env::consts::OS),
            release: String::new(),
            version: String::new(),
            machine: std::env::consts::ARCH.to_string(),
        }
    }
}

/// Map a Rust target OS name to the name the platform itself reports.
fn system_name(os: &str) -> String {
    match os {
        "linux" => "Linux".to_string(),
        "macos" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

#[cfg(unix)]
fn uname() -> Option<OsInfo> {
    // SAFETY: utsname is a plain C struct of char arrays; all-zero is a valid value.
    let mut buf: libc::utsname = unsafe { std::mem::zeroed() };
    // SAFETY: buf is a valid, writable utsname for the duration of the call.
    if unsafe { libc::uname(&mut buf) } != 0 {
        return None;
    }

    Some(OsInfo {
        system: c_field(&buf.sysname),
        release: c_field(&buf.release),
        version: c_field(&buf.version),
        machine: c_field(&buf.machine),
    })
}

#[cfg(unix)]
fn c_field(raw: &[libc::c_char]) -> String {
    let bytes: Vec<u8> = raw
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}
