use std::fmt::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::viewer::{ReportViewer, ViewerError};

/// Opens report pages with the desktop's default handler.
pub struct SystemBrowser;

impl SystemBrowser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SystemBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportViewer for SystemBrowser {
    fn open(&self, page: &Path) -> Result<(), ViewerError> {
        let absolute = page
            .canonicalize()
            .map_err(|_| ViewerError::NotFound(page.display().to_string()))?;
        let url = file_url(&absolute);
        let (program, args) = opener_command(&url);

        tracing::debug!("Opening {url} with {program}");
        // Detached from the terminal; the shell may own the screen.
        Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| ViewerError::LaunchFailed(format!("{program}: {e}")))
    }
}

/// `file://` URL for an absolute path, with spaces and other unsafe bytes escaped.
#[must_use]
pub fn file_url(path: &Path) -> String {
    let raw = path.to_string_lossy().replace('\\', "/");
    let mut url = String::from("file://");
    if !raw.starts_with('/') {
        url.push('/');
    }
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'/' | b'-' | b'_' | b'.' | b'~' | b':' => {
                url.push(char::from(byte));
            }
            _ => {
                let _ = write!(url, "%{byte:02X}");
            }
        }
    }
    url
}

fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "windows") {
        // The empty title argument stops `start` from treating the URL as one.
        (
            "cmd",
            vec!["/C".into(), "start".into(), String::new(), url.into()],
        )
    } else if cfg!(target_os = "macos") {
        ("open", vec![url.into()])
    } else {
        ("xdg-open", vec![url.into()])
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_page_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = SystemBrowser::new()
            .open(&dir.path().join("index.html"))
            .expect_err("missing page");
        assert!(matches!(err, ViewerError::NotFound(_)));
    }

    #[test]
    fn unix_paths_become_file_urls() {
        assert_eq!(
            file_url(Path::new("/var/log/check/index.html")),
            "file:///var/log/check/index.html"
        );
    }

    #[test]
    fn unsafe_bytes_are_percent_encoded() {
        assert_eq!(
            file_url(Path::new("/tmp/my logs/index.html")),
            "file:///tmp/my%20logs/index.html"
        );
        assert_eq!(file_url(Path::new("/巡检")), "file:///%E5%B7%A1%E6%A3%80");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_uses_xdg_open() {
        let (program, args) = opener_command("file:///tmp/index.html");
        assert_eq!(program, "xdg-open");
        assert_eq!(args, ["file:///tmp/index.html"]);
    }
}
