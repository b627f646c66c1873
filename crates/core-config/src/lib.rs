//! Editor configuration.
//!
//! Settings are compiled-in defaults; there is no configuration file. The
//! only runtime input is the terminal size, which is folded in once at startup
//! through [`ConfigContext`] to derive the text viewport. The viewport is not
//! re-queried during a session.

use std::time::Duration;

/// Version string shown in the welcome banner.
pub const EDITOR_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Ctrl-Q presses required to abandon unsaved changes.
    pub quit_confirmations: u32,
    /// How long a status message stays in the message bar.
    pub status_message_ttl: Duration,
    /// Screen rows not available for text (status bar + message bar).
    pub reserved_rows: u16,
    /// Banner centered on an empty document.
    pub welcome: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quit_confirmations: 3,
            status_message_ttl: Duration::from_secs(5),
            reserved_rows: 2,
            welcome: format!("Quill editor -- version {EDITOR_VERSION}"),
        }
    }
}

/// Terminal geometry captured at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigContext {
    pub terminal_columns: u16,
    pub terminal_rows: u16,
    pub reserved_rows: u16,
}

impl ConfigContext {
    pub fn from_terminal(config: &Config, terminal_columns: u16, terminal_rows: u16) -> Self {
        let ctx = Self {
            terminal_columns,
            terminal_rows,
            reserved_rows: config.reserved_rows,
        };
        tracing::debug!(
            target: "config",
            cols = terminal_columns,
            rows = terminal_rows,
            text_rows = ctx.text_rows(),
            "terminal_context"
        );
        ctx
    }

    /// Rows available for document text.
    pub fn text_rows(&self) -> usize {
        self.terminal_rows.saturating_sub(self.reserved_rows) as usize
    }

    /// Columns available for document text.
    pub fn text_columns(&self) -> usize {
        self.terminal_columns as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_editor_policy() {
        let cfg = Config::default();
        assert_eq!(cfg.quit_confirmations, 3);
        assert_eq!(cfg.status_message_ttl, Duration::from_secs(5));
        assert_eq!(cfg.reserved_rows, 2);
        assert!(cfg.welcome.contains(EDITOR_VERSION));
    }

    #[test]
    fn context_reserves_bar_rows() {
        let cfg = Config::default();
        let ctx = ConfigContext::from_terminal(&cfg, 80, 24);
        assert_eq!(ctx.text_rows(), 22);
        assert_eq!(ctx.text_columns(), 80);
    }

    #[test]
    fn tiny_terminal_saturates() {
        let cfg = Config::default();
        let ctx = ConfigContext::from_terminal(&cfg, 10, 1);
        assert_eq!(ctx.text_rows(), 0);
    }
}
