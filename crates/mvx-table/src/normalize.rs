//! Boolean-flag normalization for raw text cells.

use mvx_core::{ErrorInfo, MvxError};
use serde::{Deserialize, Serialize};

use crate::table::{Cell, Table};

fn default_truthy() -> Vec<String> {
    vec!["true".to_string()]
}

fn default_falsy() -> Vec<String> {
    vec!["false".to_string()]
}

/// Accepted spellings for boolean-like flag fields.
///
/// Matching trims surrounding whitespace and ignores ASCII case, so
/// `" True"` and `"TRUE"` both land on the truthy side of the default
/// lexicon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruthLexicon {
    /// Spellings rewritten to `1.0`.
    #[serde(default = "default_truthy")]
    pub truthy: Vec<String>,
    /// Spellings rewritten to `0.0`.
    #[serde(default = "default_falsy")]
    pub falsy: Vec<String>,
}

impl Default for TruthLexicon {
    fn default() -> Self {
        Self {
            truthy: default_truthy(),
            falsy: default_falsy(),
        }
    }
}

impl TruthLexicon {
    /// Checks that both spelling lists are usable: non-blank entries and
    /// no word claimed by both sides.
    pub fn validate(&self) -> Result<(), MvxError> {
        if self.truthy.is_empty() {
            return Err(lexicon_error("truth-lexicon-empty", "no truthy spellings configured"));
        }
        if self.falsy.is_empty() {
            return Err(lexicon_error("truth-lexicon-empty", "no falsy spellings configured"));
        }
        for word in self.truthy.iter().chain(self.falsy.iter()) {
            if word.trim().is_empty() {
                return Err(lexicon_error(
                    "truth-lexicon-blank",
                    "lexicon entries must not be blank",
                ));
            }
        }
        for truthy in &self.truthy {
            if self.falsy.iter().any(|falsy| falsy.eq_ignore_ascii_case(truthy)) {
                return Err(lexicon_error(
                    "truth-lexicon-overlap",
                    "a spelling appears in both truthy and falsy lists",
                )
                .with_context("word", truthy));
            }
        }
        Ok(())
    }

    fn classify(&self, raw: &str) -> Option<bool> {
        let trimmed = raw.trim();
        if self.truthy.iter().any(|word| word.eq_ignore_ascii_case(trimmed)) {
            return Some(true);
        }
        if self.falsy.iter().any(|word| word.eq_ignore_ascii_case(trimmed)) {
            return Some(false);
        }
        None
    }
}

impl Table {
    /// Rewrites every text cell that spells a boolean flag into `1.0` or
    /// `0.0`. Cells matching neither list stay untouched, and numbers and
    /// missing markers are never revisited, so running the pass twice
    /// leaves the table unchanged.
    pub fn normalize_truth(&mut self, lexicon: &TruthLexicon) {
        for column in &mut self.columns {
            for cell in &mut column.cells {
                let flag = match cell {
                    Cell::Text(raw) => lexicon.classify(raw),
                    _ => None,
                };
                if let Some(truthy) = flag {
                    *cell = Cell::Number(if truthy { 1.0 } else { 0.0 });
                }
            }
        }
    }
}

fn lexicon_error(code: &str, message: &str) -> MvxError {
    MvxError::Config(ErrorInfo::new(code, message))
}
