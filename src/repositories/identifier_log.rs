use crate::{Beverage, BeverageId, CafeError};
use std::fmt;
use std::io::Write;
use tracing::debug;

/// Label printed before the recorded identifiers.
pub const LOG_LABEL: &str = "Coffee ids:";

/// Append-only record of served beverage identifiers, in the order recorded.
///
/// Duplicates are kept. The log lives as long as its owner and is never
/// cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierLog {
    entries: Vec<BeverageId>,
}

impl IdentifierLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, beverage: &Beverage) {
        self.entries.push(beverage.id());
        debug!(id = %beverage.id(), position = self.entries.len(), "recorded beverage id");
    }

    pub fn entries(&self) -> &[BeverageId] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the label and every recorded identifier on one line.
    pub fn print_all<W: Write>(&self, out: &mut W) -> Result<(), CafeError> {
        writeln!(out, "{}", self)?;
        Ok(())
    }
}

impl fmt::Display for IdentifierLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(LOG_LABEL)?;
        for id in &self.entries {
            write!(f, " {}", id)?;
        }
        Ok(())
    }
}
