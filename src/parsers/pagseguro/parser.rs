use super::dto::{PagseguroExport, PagseguroRow};
use crate::errors::{ConversionError, ConversionResult};
use crate::parsers::traits::Parser;
use crate::types::Transaction;

/// Reads the PagSeguro "Table" export and normalizes it into statement entries.
pub struct PagseguroParser;

impl Parser for PagseguroParser {
    type Output = Transaction;

    fn parse(content: &[u8]) -> ConversionResult<Vec<Self::Output>> {
        // Table rows need not be adjacent: other elements may sit between them.
        let export: PagseguroExport = serde_xml_rs::SerdeXml::new()
            .overlapping_sequences(true)
            .from_reader(content)
            .map_err(|e| ConversionError::Xml(e.to_string()))?;

        let rows = export.rows.len();
        let mut transactions = Vec::with_capacity(rows);

        for (index, raw) in export.rows.into_iter().enumerate() {
            let position = index + 1;

            if !raw.is_approved() {
                tracing::debug!(
                    row = position,
                    status = raw.status.as_deref().unwrap_or_default(),
                    "skipping row that is not approved"
                );
                continue;
            }

            let row = PagseguroRow::from_raw(raw).map_err(|e| e.at_row(position))?;
            if row.has_fee() {
                tracing::debug!(row = position, id = %row.id, fee = ?row.fee_value, "splitting fee");
            }
            transactions.extend(row.into_transactions());
        }

        tracing::info!(rows, transactions = transactions.len(), "extracted transactions");
        Ok(transactions)
    }
}
