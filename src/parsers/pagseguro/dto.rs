use chrono::NaiveDateTime;
use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{BrDateTime, BrValue};
use crate::errors::ConversionError;
use crate::types::{Transaction, TransactionKind};

pub(super) const APPROVED_STATUS: &str = "Aprovada";
pub(super) const DEBIT_FLAG: &str = "Débito";

#[derive(Debug, Deserialize)]
pub(super) struct PagseguroExport {
    #[serde(rename = "Table", default)]
    pub(super) rows: Vec<PagseguroRowRaw>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct PagseguroRowRaw {
    #[serde(rename = "Status", default)]
    pub(super) status: Option<String>,
    #[serde(rename = "Data_Compensacao", default)]
    settlement_date: Option<BrDateTime>,
    #[serde(rename = "Valor_Bruto", default)]
    gross_value: Option<BrValue>,
    #[serde(rename = "Valor_Taxa", default)]
    fee_value: Option<BrValue>,
    #[serde(rename = "Cliente_Nome", default)]
    payer_name: Option<String>,
    #[serde(rename = "Cliente_Email", default)]
    payer_email: Option<String>,
    #[serde(rename = "Debito_Credito", default)]
    debit_credit: Option<String>,
    #[serde(rename = "Transacao_ID", default)]
    transaction_id: Option<String>,
}

impl PagseguroRowRaw {
    pub(super) fn is_approved(&self) -> bool {
        self.status.as_deref().map(str::trim) == Some(APPROVED_STATUS)
    }
}

fn required<T>(field: Option<T>, name: &'static str) -> Result<T, ConversionError> {
    field.ok_or(ConversionError::MissingField(name))
}

/// An approved export row with every field validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagseguroRow {
    pub id: String,
    pub settlement_date: NaiveDateTime,
    pub gross_value: Decimal,
    pub fee_value: Option<Decimal>,
    pub kind: TransactionKind,
    pub description: String,
}

impl PagseguroRow {
    pub(super) fn from_raw(raw: PagseguroRowRaw) -> Result<Self, ConversionError> {
        let settlement_date = required(raw.settlement_date, "Data_Compensacao")?.parse()?;
        let gross_value = required(raw.gross_value, "Valor_Bruto")?.parse()?;

        let kind = match required(raw.debit_credit, "Debito_Credito")?.trim() {
            DEBIT_FLAG => TransactionKind::Debit,
            _ => TransactionKind::Credit,
        };

        let description = format!(
            "{} ({})",
            required(raw.payer_name, "Cliente_Nome")?.trim(),
            required(raw.payer_email, "Cliente_Email")?.trim()
        );

        let raw_id = required(raw.transaction_id, "Transacao_ID")?;
        let id = raw_id
            .trim()
            .split('-')
            .next()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ConversionError::InvalidTransactionId(raw_id.clone()))?
            .to_string();

        let fee_value = raw
            .fee_value
            .filter(|fee| !fee.is_blank())
            .map(|fee| fee.parse())
            .transpose()?;

        Ok(PagseguroRow {
            id,
            settlement_date,
            gross_value,
            fee_value,
            kind,
            description,
        })
    }

    pub fn has_fee(&self) -> bool {
        self.fee_value.is_some_and(|fee| fee > Decimal::zero())
    }

    /// The principal entry, followed by the fee entry when a fee was charged.
    pub fn into_transactions(self) -> Vec<Transaction> {
        let fee = self.fee_value.filter(|_| self.has_fee());

        let mut transactions = vec![Transaction::principal(
            self.id.clone(),
            self.description,
            self.gross_value,
            self.settlement_date,
            self.kind,
        )];

        if let Some(fee) = fee {
            transactions.push(Transaction::fee(self.id, fee, self.settlement_date));
        }

        transactions
    }
}
