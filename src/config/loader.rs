//! Rules loading functionality.
//!
//! This module provides the [`RulesLoader`] type for loading pay rules from
//! a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayRules;

/// Loads and provides access to pay rules.
///
/// # File Format
///
/// The rules file is a YAML document with three optional fields; omitted
/// fields fall back to the fixed production values:
///
/// ```text
/// tax_rate: "0.18"
/// standard_hours: "40"
/// overtime_multiplier: "1.5"
/// ```
///
/// # Example
///
/// ```no_run
/// use paycheck_engine::config::RulesLoader;
///
/// let loader = RulesLoader::load("./config/rules.yaml").unwrap();
/// println!("Tax rate: {}", loader.rules().tax_rate);
/// ```
#[derive(Debug, Clone)]
pub struct RulesLoader {
    rules: PayRules,
}

impl RulesLoader {
    /// Loads rules from the specified YAML file.
    ///
    /// Returns an error if the file is missing, contains invalid YAML, or
    /// contains rules outside the usable range (non-positive threshold or
    /// multiplier, tax rate outside [0, 1)).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;

        let rules: PayRules =
            serde_yaml::from_str(&contents).map_err(|err| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;

        Self::check(&rules, &path.display().to_string())?;

        Ok(Self { rules })
    }

    /// Builds a loader around the fixed production rules, no file involved.
    pub fn builtin() -> Self {
        Self {
            rules: PayRules::default(),
        }
    }

    /// Returns the loaded rules.
    pub fn rules(&self) -> &PayRules {
        &self.rules
    }

    fn check(rules: &PayRules, path: &str) -> EngineResult<()> {
        if rules.tax_rate < Decimal::ZERO || rules.tax_rate >= Decimal::ONE {
            return Err(EngineError::InvalidRules {
                path: path.to_string(),
                message: "tax_rate must be between 0 and 1".to_string(),
            });
        }
        if rules.standard_hours <= Decimal::ZERO {
            return Err(EngineError::InvalidRules {
                path: path.to_string(),
                message: "standard_hours must be positive".to_string(),
            });
        }
        if rules.overtime_multiplier < Decimal::ONE {
            return Err(EngineError::InvalidRules {
                path: path.to_string(),
                message: "overtime_multiplier must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
