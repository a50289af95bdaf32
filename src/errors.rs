use std::path::PathBuf;

use thiserror::Error;

/// Erros possíveis durante a conversão do extrato PagSeguro para OFX
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Valor monetário fora do formato `1.234,56`
    #[error("Invalid monetary value: {0:?}")]
    InvalidValue(String),

    /// Data fora do formato `DD/MM/YYYY HH:MM:SS`
    #[error("Invalid date {0:?}, expected DD/MM/YYYY HH:MM:SS")]
    InvalidDate(String),

    /// Campo obrigatório ausente ou vazio em uma linha aprovada
    #[error("Missing required field <{0}>")]
    MissingField(&'static str),

    /// Identificador de transação sem o segmento antes do `-`
    #[error("Invalid transaction id: {0:?}")]
    InvalidTransactionId(String),

    /// Texto da transação sem representação em Windows-1252, o charset do OFX
    #[error("Transaction {id}: {text:?} cannot be encoded as Windows-1252")]
    Unencodable { id: String, text: String },

    /// Falha em uma linha específica do export (posição 1-based do `<Table>`)
    #[error("Row {row}: {source}")]
    Row {
        row: usize,
        source: Box<ConversionError>,
    },

    /// Documento XML malformado ou fora do formato esperado
    #[error("XML parse error: {0}")]
    Xml(String),

    /// Configuração do extrato OFX inválida
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Erro ao ler o arquivo de entrada (ou de configuração) do disco
    #[error("Failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Erro ao gravar o arquivo OFX de saída
    #[error("Failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// O builder foi chamado sem fornecer conteúdo nem caminho de arquivo
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,
}

/// Classe do erro: problema no conteúdo ou problema de E/S
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Io,
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::ReadInput { .. }
            | ConversionError::WriteOutput { .. }
            | ConversionError::MissingContentAndFilepath => ErrorKind::Io,
            ConversionError::Row { source, .. } => source.kind(),
            _ => ErrorKind::Parse,
        }
    }

    pub(crate) fn at_row(self, row: usize) -> Self {
        ConversionError::Row {
            row,
            source: Box::new(self),
        }
    }
}

/// Alias conveniente para Result com nosso tipo de erro principal
pub type ConversionResult<T> = Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ConversionError::InvalidValue("x".into()), ErrorKind::Parse)]
    #[case(ConversionError::InvalidDate("x".into()), ErrorKind::Parse)]
    #[case(ConversionError::MissingField("Status"), ErrorKind::Parse)]
    #[case(ConversionError::Xml("bad".into()), ErrorKind::Parse)]
    #[case(
        ConversionError::Unencodable {
            id: "7".into(),
            text: "😀".into(),
        },
        ErrorKind::Parse
    )]
    #[case(ConversionError::MissingContentAndFilepath, ErrorKind::Io)]
    #[case(
        ConversionError::WriteOutput {
            path: "out.ofx".into(),
            source: std::io::Error::other("denied"),
        },
        ErrorKind::Io
    )]
    fn test_error_kind(#[case] error: ConversionError, #[case] expected: ErrorKind) {
        assert_eq!(error.kind(), expected);
    }

    #[test]
    fn test_row_error_keeps_inner_kind_and_position() {
        let error = ConversionError::InvalidDate("31/02/2010".into()).at_row(3);
        assert_eq!(error.kind(), ErrorKind::Parse);

        let message = error.to_string();
        assert!(message.starts_with("Row 3:"));
        assert!(message.contains("31/02/2010"));
    }

    #[test]
    fn test_io_error_message_names_path() {
        let error = ConversionError::ReadInput {
            path: "missing.xml".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(error.to_string().contains("missing.xml"));
    }
}
