//! Terminal output
//!
//! Commands write through a `Box<dyn Write>`. Long listings (`log`, `show`)
//! go through the `minus` pager when stdout is an interactive terminal and
//! `NO_PAGER` is unset; everything else goes straight to stdout.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable that disables the pager
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Adapts the minus pager to `std::io::Write`
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where a command's output ends up
pub enum Output {
    Stdout,
    Paged(Pager),
}

impl Output {
    /// Page only when a human is looking at the terminal
    pub fn for_listing() -> Self {
        if std::env::var_os(NO_PAGER_ENV).is_none() && io::stdout().is_terminal() {
            Output::Paged(Pager::new())
        } else {
            Output::Stdout
        }
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            Output::Stdout => Box::new(io::stdout()),
            Output::Paged(pager) => Box::new(PagerWriter::new(pager.clone())),
        }
    }

    /// Show the collected pages; a no-op for stdout
    pub fn finish(self) -> anyhow::Result<()> {
        if let Output::Paged(pager) = self {
            minus::page_all(pager)?;
        }

        Ok(())
    }
}
