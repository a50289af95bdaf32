use std::io::{self, Write};

use super::template::{FOOTER, HEADER, STATEMENT, encode_cp1252, render};
use crate::config::OfxConfig;
use crate::errors::{ConversionError, ConversionResult};
use crate::types::Transaction;

const DATE_FORMAT: &str = "%Y%m%d";

/// Renders statement entries as an OFX 1.02 SGML bank statement.
pub struct OfxWriter<'a> {
    config: &'a OfxConfig,
}

impl<'a> OfxWriter<'a> {
    pub fn new(config: &'a OfxConfig) -> Self {
        Self { config }
    }

    fn header(&self) -> String {
        let c = self.config;
        render(
            HEADER,
            &[
                ("org", c.org.as_str()),
                ("fid", c.fid.as_str()),
                ("language", c.language.as_str()),
                ("start", c.start.as_str()),
                ("currency", c.currency.as_str()),
                ("bank_id", c.bank_id.as_str()),
                ("account", c.account.as_str()),
                ("account_type", c.account_type.as_str()),
            ],
        )
    }

    fn statement(transaction: &Transaction) -> String {
        render(
            STATEMENT,
            &[
                ("type", transaction.kind.as_str()),
                ("date", transaction.date.format(DATE_FORMAT).to_string().as_str()),
                ("value", transaction.value.to_string().as_str()),
                ("fitid", transaction.id.as_str()),
                ("checknum", transaction.id.as_str()),
                ("memo", transaction.description.as_str()),
            ],
        )
    }

    fn footer(&self) -> String {
        render(
            FOOTER,
            &[
                ("balance", self.config.balance.to_string().as_str()),
                ("end", self.config.end.as_str()),
            ],
        )
    }

    /// The complete document, Windows-1252 encoded.
    ///
    /// Fails on the first transaction whose text has no Windows-1252 form.
    pub fn render(&self, transactions: &[Transaction]) -> ConversionResult<Vec<u8>> {
        let config_error =
            || ConversionError::Config("values cannot be encoded as Windows-1252".to_string());

        let mut bytes = encode_cp1252(&self.header()).ok_or_else(config_error)?;
        for transaction in transactions {
            let statement = encode_cp1252(&Self::statement(transaction)).ok_or_else(|| {
                ConversionError::Unencodable {
                    id: transaction.id.clone(),
                    text: transaction.description.clone(),
                }
            })?;
            bytes.extend(statement);
        }
        bytes.extend(encode_cp1252(&self.footer()).ok_or_else(config_error)?);

        tracing::debug!(transactions = transactions.len(), bytes = bytes.len(), "rendered OFX");
        Ok(bytes)
    }

    pub fn write<W: Write>(&self, mut w: W, transactions: &[Transaction]) -> io::Result<()> {
        let bytes = self
            .render(transactions)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        w.write_all(&bytes)?;
        w.flush()
    }
}
