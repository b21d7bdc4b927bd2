use std::io::{self, IsTerminal, Stdout, Write};

pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// shows the cursor again when dropped, including while unwinding from a panic
pub struct CursorGuard<W: Write> {
    out: W,
    enabled: bool,
}

impl CursorGuard<Stdout> {
    /// only writes anything when stdout is a terminal
    pub fn stdout() -> Self {
        let out = io::stdout();
        let enabled = out.is_terminal();
        Self::new(out, enabled)
    }
}

impl<W: Write> CursorGuard<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }

    pub fn restore(&mut self) {
        if self.enabled {
            let _ = self.out.write_all(SHOW_CURSOR.as_bytes());
            let _ = self.out.flush();
        }
    }
}

impl<W: Write> Drop for CursorGuard<W> {
    fn drop(&mut self) {
        self.restore();
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use super::*;

    #[test]
    fn restores_on_drop() {
        let mut out = Vec::new();
        drop(CursorGuard::new(&mut out, true));
        assert_eq!(out, SHOW_CURSOR.as_bytes());
    }

    #[test]
    fn restores_while_unwinding() {
        let mut out = Vec::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = CursorGuard::new(&mut out, true);
            panic!("animation failed");
        }));
        assert!(result.is_err());
        assert_eq!(out, SHOW_CURSOR.as_bytes());
    }

    #[test]
    fn stays_quiet_off_terminal() {
        let mut out = Vec::new();
        drop(CursorGuard::new(&mut out, false));
        assert!(out.is_empty());
    }
}
