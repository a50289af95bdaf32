use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{ConversionError, ConversionResult};

const OFX_DATE_FORMAT: &str = "%Y%m%d";

/// Fixed values substituted into the OFX header and footer.
///
/// The statement window and the ledger balance are configuration, not
/// derived from the transactions. Keys missing from a JSON file keep the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfxConfig {
    pub org: String,
    pub fid: String,
    pub language: String,
    pub bank_id: String,
    pub currency: String,
    pub account_type: String,
    pub account: String,
    pub start: String,
    pub end: String,
    pub balance: Decimal,
}

impl Default for OfxConfig {
    fn default() -> Self {
        OfxConfig {
            org: "Pagseguro".to_string(),
            fid: "001".to_string(),
            language: "POR".to_string(),
            bank_id: "001".to_string(),
            currency: "BRL".to_string(),
            account_type: "CHECKING".to_string(),
            account: "pagseguro@async.com.br".to_string(),
            start: "20100201".to_string(),
            end: "20100228".to_string(),
            balance: Decimal::ZERO,
        }
    }
}

impl OfxConfig {
    pub fn from_json(content: &str) -> ConversionResult<Self> {
        let config: OfxConfig =
            serde_json::from_str(content).map_err(|e| ConversionError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConversionResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConversionError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    pub fn validate(&self) -> ConversionResult<()> {
        if self.account.trim().is_empty() {
            return Err(ConversionError::Config("account must not be empty".to_string()));
        }

        let start = parse_ofx_date("start", &self.start)?;
        let end = parse_ofx_date("end", &self.end)?;
        if start > end {
            return Err(ConversionError::Config(format!(
                "start {} is after end {}",
                self.start, self.end
            )));
        }

        Ok(())
    }
}

fn parse_ofx_date(name: &str, value: &str) -> ConversionResult<NaiveDate> {
    if value.len() != 8 {
        return Err(ConversionError::Config(format!("{name} must be YYYYMMDD, got {value:?}")));
    }
    NaiveDate::parse_from_str(value, OFX_DATE_FORMAT)
        .map_err(|_| ConversionError::Config(format!("{name} must be YYYYMMDD, got {value:?}")))
}
