//! Opening URLs in the host environment

use async_trait::async_trait;

pub use crate::interpreter::OpenOutcome;

/// Candidate launcher binaries, tried in order
const LAUNCHERS: &[&str] = &["xdg-open", "open", "wslview", "explorer.exe"];

/// Host capability for opening a URL in a new context
#[async_trait]
pub trait UrlOpener: Send + Sync {
    /// Try to open the URL
    ///
    /// Never errors: failures are reported through the outcome so the caller can
    /// pick the right apology.
    async fn open(&self, url: &str) -> OpenOutcome;
}

/// Opens URLs with the desktop's launcher (`xdg-open`, `open`, ...)
#[derive(Debug, Clone, Default)]
pub struct SystemOpener;

impl SystemOpener {
    /// Locate the first available launcher binary
    #[must_use]
    pub fn launcher() -> Option<std::path::PathBuf> {
        LAUNCHERS.iter().find_map(|bin| which::which(bin).ok())
    }
}

#[async_trait]
impl UrlOpener for SystemOpener {
    async fn open(&self, url: &str) -> OpenOutcome {
        let Some(launcher) = Self::launcher() else {
            tracing::warn!(url, "no URL launcher available");
            return OpenOutcome::Blocked;
        };

        match tokio::process::Command::new(&launcher).arg(url).status().await {
            Ok(status) if status.success() => {
                tracing::info!(url, launcher = %launcher.display(), "opened URL");
                OpenOutcome::Opened
            }
            Ok(status) => {
                tracing::warn!(url, code = ?status.code(), "launcher exited with failure");
                OpenOutcome::Failed
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "failed to run launcher");
                OpenOutcome::Failed
            }
        }
    }
}

/// Prints URLs instead of opening them (headless hosts)
#[derive(Debug, Clone, Default)]
pub struct PrintOpener;

#[async_trait]
impl UrlOpener for PrintOpener {
    async fn open(&self, url: &str) -> OpenOutcome {
        println!("open: {url}");
        OpenOutcome::Opened
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_opener_reports_opened() {
        let outcome = tokio_test::block_on(PrintOpener.open("https://github.com/"));
        assert_eq!(outcome, OpenOutcome::Opened);
    }
}
