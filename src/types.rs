use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Memo used for the synthetic record carrying the processor's fee.
pub const FEE_DESCRIPTION: &str = "Pagseguro taxa 3.99% + R$0.40";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    /// OFX `TRNTYPE` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Credit => "CREDIT",
            TransactionKind::Debit => "DEBIT",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized statement entry, ready to be rendered as an OFX `STMTTRN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub value: Decimal,
    pub date: NaiveDateTime,
    pub kind: TransactionKind,
}

impl Transaction {
    /// Debit entries carry the gross amount negated, credits keep it as is.
    pub fn principal(
        id: String,
        description: String,
        gross: Decimal,
        date: NaiveDateTime,
        kind: TransactionKind,
    ) -> Self {
        let value = match kind {
            TransactionKind::Debit => -gross,
            TransactionKind::Credit => gross,
        };

        Transaction {
            id,
            description,
            value,
            date,
            kind,
        }
    }

    /// The fee record is always a CREDIT with a negative amount.
    pub fn fee(id: String, fee: Decimal, date: NaiveDateTime) -> Self {
        Transaction {
            id,
            description: FEE_DESCRIPTION.to_string(),
            value: -fee,
            date,
            kind: TransactionKind::Credit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;
    use std::str::FromStr;

    fn test_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2010, 2, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[rstest]
    #[case(TransactionKind::Credit, "100.00", "100.00")]
    #[case(TransactionKind::Debit, "100.00", "-100.00")]
    #[case(TransactionKind::Debit, "0.01", "-0.01")]
    fn test_principal_sign_follows_kind(
        #[case] kind: TransactionKind,
        #[case] gross: &str,
        #[case] expected: &str,
    ) {
        let txn = Transaction::principal(
            "555".to_string(),
            "Maria (maria@example.com)".to_string(),
            Decimal::from_str(gross).unwrap(),
            test_date(),
            kind,
        );

        assert_eq!(txn.kind, kind);
        assert_eq!(txn.value.to_string(), expected);
    }

    #[test]
    fn test_fee_is_negative_credit() {
        let txn = Transaction::fee("555".to_string(), Decimal::from_str("3.99").unwrap(), test_date());

        assert_eq!(txn.kind, TransactionKind::Credit);
        assert_eq!(txn.value, Decimal::from_str("-3.99").unwrap());
        assert_eq!(txn.description, FEE_DESCRIPTION);
        assert_eq!(txn.date, test_date());
    }

    #[test]
    fn test_transaction_kind_display() {
        assert_eq!(TransactionKind::Credit.to_string(), "CREDIT");
        assert_eq!(TransactionKind::Debit.to_string(), "DEBIT");
    }

    #[test]
    fn test_transaction_serialization() {
        let txn = Transaction::principal(
            "555".to_string(),
            "Maria (maria@example.com)".to_string(),
            Decimal::from_str("100.00").unwrap(),
            test_date(),
            TransactionKind::Debit,
        );

        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"DEBIT\""));
        assert!(json.contains("Maria"));

        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, txn);
    }
}
