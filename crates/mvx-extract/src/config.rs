use mvx_core::{ErrorInfo, Logic, MvxError};
use mvx_table::TruthLexicon;
use serde::{Deserialize, Serialize};

fn config_error(code: &str, message: impl Into<String>) -> MvxError {
    MvxError::Config(ErrorInfo::new(code, message.into()))
}

fn default_formulas_dir() -> String {
    "generated".to_string()
}

fn default_asymptotic_dir() -> String {
    "asymptoticModelExperiment".to_string()
}

fn default_validated_dir() -> String {
    "validated-Peregrine".to_string()
}

fn default_selected_formulas_file() -> String {
    "SelectedFormulasRaw.txt".to_string()
}

fn default_selected_metadata_file() -> String {
    "SelectedFormulasMetaData.txt".to_string()
}

fn default_batches() -> Vec<u32> {
    (1..=10).collect()
}

fn default_depths() -> Vec<u32> {
    (6..=13).collect()
}

fn default_logics() -> Vec<Logic> {
    vec![Logic::GL, Logic::S4, Logic::K4]
}

fn default_node_counts() -> Vec<u32> {
    (0..6).map(|step| 40 + 8 * step).collect()
}

fn default_generated_rows() -> usize {
    100
}

fn default_selected_rows() -> usize {
    47
}

fn default_frame_saturation() -> f64 {
    500.0
}

fn default_model_saturation() -> f64 {
    5000.0
}

/// YAML-configurable description of an experiment tree and its grid.
///
/// Every field defaults to the reference experiment, so an empty
/// configuration reproduces the published dataset layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractConfig {
    /// Generator output directory, relative to the tree root.
    #[serde(default = "default_formulas_dir")]
    pub formulas_dir: String,
    /// Asymptotic validity directory, relative to the tree root.
    #[serde(default = "default_asymptotic_dir")]
    pub asymptotic_dir: String,
    /// Model-checker validation directory, relative to the tree root.
    #[serde(default = "default_validated_dir")]
    pub validated_dir: String,
    /// Hand-picked formulas file at the tree root.
    #[serde(default = "default_selected_formulas_file")]
    pub selected_formulas_file: String,
    /// Metadata file for the hand-picked formulas.
    #[serde(default = "default_selected_metadata_file")]
    pub selected_metadata_file: String,
    /// Generation batches, strictly ascending.
    #[serde(default = "default_batches")]
    pub batches: Vec<u32>,
    /// Formula nesting depths, strictly ascending.
    #[serde(default = "default_depths")]
    pub depths: Vec<u32>,
    /// Logics in dataset column order.
    #[serde(default = "default_logics")]
    pub logics: Vec<Logic>,
    /// Model sizes the validator ran on, strictly ascending.
    #[serde(default = "default_node_counts")]
    pub node_counts: Vec<u32>,
    /// Canonical height of every generated block.
    #[serde(default = "default_generated_rows")]
    pub generated_rows: usize,
    /// Canonical height of the hand-picked block.
    #[serde(default = "default_selected_rows")]
    pub selected_rows: usize,
    /// Frame count meaning "valid on every frame tried".
    #[serde(default = "default_frame_saturation")]
    pub frame_saturation: f64,
    /// Model count meaning "valid on every model tried".
    #[serde(default = "default_model_saturation")]
    pub model_saturation: f64,
    /// Accepted spellings for boolean flags.
    #[serde(default)]
    pub truth: TruthLexicon,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            formulas_dir: default_formulas_dir(),
            asymptotic_dir: default_asymptotic_dir(),
            validated_dir: default_validated_dir(),
            selected_formulas_file: default_selected_formulas_file(),
            selected_metadata_file: default_selected_metadata_file(),
            batches: default_batches(),
            depths: default_depths(),
            logics: default_logics(),
            node_counts: default_node_counts(),
            generated_rows: default_generated_rows(),
            selected_rows: default_selected_rows(),
            frame_saturation: default_frame_saturation(),
            model_saturation: default_model_saturation(),
            truth: TruthLexicon::default(),
        }
    }
}

impl ExtractConfig {
    /// Checks the configuration before a build. Grid axes must be
    /// non-empty and strictly ascending, block heights non-zero, and the
    /// truth lexicon usable.
    pub fn validate(&self) -> Result<(), MvxError> {
        for (field, value) in [
            ("formulas_dir", &self.formulas_dir),
            ("asymptotic_dir", &self.asymptotic_dir),
            ("validated_dir", &self.validated_dir),
            ("selected_formulas_file", &self.selected_formulas_file),
            ("selected_metadata_file", &self.selected_metadata_file),
        ] {
            if value.trim().is_empty() {
                return Err(config_error("config-path", "configured path is empty")
                    .with_context("field", field));
            }
        }
        ascending("batches", &self.batches)?;
        ascending("depths", &self.depths)?;
        ascending("node_counts", &self.node_counts)?;
        if self.logics.is_empty() {
            return Err(config_error("empty-axis", "no logics configured")
                .with_context("axis", "logics"));
        }
        for (idx, logic) in self.logics.iter().enumerate() {
            if self.logics[..idx].contains(logic) {
                return Err(config_error("duplicate-logic", "a logic is listed twice")
                    .with_context("logic", logic.to_string()));
            }
        }
        if self.node_counts.len() < 2 {
            return Err(config_error("short-axis", "trend fitting needs at least two model sizes")
                .with_context("axis", "node_counts"));
        }
        if self.generated_rows == 0 || self.selected_rows == 0 {
            return Err(config_error("zero-rows", "block heights must be at least one row"));
        }
        for (field, value) in [
            ("frame_saturation", self.frame_saturation),
            ("model_saturation", self.model_saturation),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(config_error("bad-saturation", "saturation counts must be finite and positive")
                    .with_context("field", field)
                    .with_context("value", value.to_string()));
            }
        }
        self.truth.validate()?;
        Ok(())
    }
}

fn ascending(axis: &str, values: &[u32]) -> Result<(), MvxError> {
    if values.is_empty() {
        return Err(config_error("empty-axis", "a grid axis has no entries").with_context("axis", axis));
    }
    if values.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(config_error("axis-order", "grid axes must be strictly ascending")
            .with_context("axis", axis));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_defaults_validate() {
        ExtractConfig::default().validate().expect("defaults are valid");
    }

    #[test]
    fn reference_grid_dimensions() {
        let cfg = ExtractConfig::default();
        assert_eq!(cfg.batches.len(), 10);
        assert_eq!(cfg.depths.len(), 8);
        assert_eq!(cfg.node_counts, vec![40, 48, 56, 64, 72, 80]);
        assert_eq!(cfg.generated_rows, 100);
        assert_eq!(cfg.selected_rows, 47);
    }

    #[test]
    fn rejects_unsorted_axes() {
        let mut cfg = ExtractConfig::default();
        cfg.depths = vec![6, 6, 7];
        let err = cfg.validate().expect_err("duplicate depth");
        assert_eq!(err.info().code, "axis-order");
    }

    #[test]
    fn rejects_single_node_count() {
        let mut cfg = ExtractConfig::default();
        cfg.node_counts = vec![40];
        let err = cfg.validate().expect_err("needs two sizes");
        assert_eq!(err.info().code, "short-axis");
    }

    #[test]
    fn rejects_duplicate_logics() {
        let mut cfg = ExtractConfig::default();
        cfg.logics = vec![Logic::GL, Logic::GL];
        let err = cfg.validate().expect_err("duplicate logic");
        assert_eq!(err.info().code, "duplicate-logic");
    }

    #[test]
    fn rejects_zero_block_heights() {
        let mut cfg = ExtractConfig::default();
        cfg.generated_rows = 0;
        let err = cfg.validate().expect_err("zero rows");
        assert_eq!(err.info().code, "zero-rows");
    }

    #[test]
    fn rejects_bad_saturation() {
        let mut cfg = ExtractConfig::default();
        cfg.model_saturation = 0.0;
        let err = cfg.validate().expect_err("zero saturation");
        assert_eq!(err.info().code, "bad-saturation");
    }
}
