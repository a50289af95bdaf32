use crate::errors::ConversionError;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

const BR_DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Valor monetário no formato brasileiro, como aparece no export do PagSeguro.
///
/// O ponto separa os milhares e a vírgula separa as casas decimais:
/// `"1.234,56"` vale `1234.56`. A conversão é feita sobre `Decimal`, nunca
/// sobre ponto flutuante, para não acumular erro de arredondamento.
#[derive(Debug, Clone, Serialize)]
pub struct BrValue(String);

impl<'de> Deserialize<'de> for BrValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(BrValue)
    }
}

impl BrValue {
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn parse(&self) -> Result<Decimal, ConversionError> {
        let s = self.0.trim();
        let invalid = || ConversionError::InvalidValue(self.0.clone());

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        // `.` groups thousands only before the single decimal `,`.
        let (integer, fraction) = match digits.split_once(',') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits, None),
        };
        if !integer.chars().all(|c| c.is_ascii_digit() || c == '.')
            || !fraction.unwrap_or_default().chars().all(|c| c.is_ascii_digit())
            || !digits.chars().any(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let integer = integer.replace('.', "");
        let normalized = match fraction {
            Some(fraction) => format!("{integer}.{fraction}"),
            None => integer,
        };
        let value = Decimal::from_str(&normalized).map_err(|_| invalid())?;
        Ok(if negative { -value } else { value })
    }
}

impl From<String> for BrValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for BrValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<BrValue> for Decimal {
    type Error = ConversionError;

    fn try_from(value: BrValue) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Data e hora no formato `DD/MM/YYYY HH:MM:SS`.
#[derive(Debug, Clone, Serialize)]
pub struct BrDateTime(String);

impl<'de> Deserialize<'de> for BrDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(BrDateTime)
    }
}

impl BrDateTime {
    pub fn parse(&self) -> Result<NaiveDateTime, ConversionError> {
        NaiveDateTime::parse_from_str(self.0.trim(), BR_DATE_TIME_FORMAT)
            .map_err(|_| ConversionError::InvalidDate(self.0.clone()))
    }
}

impl From<String> for BrDateTime {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for BrDateTime {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<BrDateTime> for NaiveDateTime {
    type Error = ConversionError;

    fn try_from(date: BrDateTime) -> Result<Self, Self::Error> {
        date.parse()
    }
}
