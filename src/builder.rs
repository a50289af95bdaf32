use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::{
    config::OfxConfig,
    errors::{ConversionError, ConversionResult},
    parsers::prelude::*,
    types::Transaction,
    writers::prelude::*,
};

/// Wires the PagSeguro export reader to the OFX writer.
#[derive(Default)]
pub struct ConverterBuilder {
    content: Option<Vec<u8>>,
    filepath: Option<PathBuf>,
    config: Option<OfxConfig>,
    account: Option<String>,
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl AsRef<[u8]>) -> Self {
        self.content = Some(content.as_ref().to_vec());
        self
    }

    pub fn filename(mut self, filename: impl AsRef<Path>) -> Self {
        self.filepath = Some(filename.as_ref().to_path_buf());
        self
    }

    pub fn config(mut self, config: OfxConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Overrides the account identifier of the configuration.
    pub fn account(mut self, account: &str) -> Self {
        self.account = Some(account.to_string());
        self
    }

    fn resolve_config(&mut self) -> ConversionResult<OfxConfig> {
        let mut config = self.config.take().unwrap_or_default();
        if let Some(account) = self.account.take() {
            config = config.with_account(account);
        }
        config.validate()?;
        Ok(config)
    }

    fn read_content(&mut self) -> ConversionResult<Vec<u8>> {
        if let Some(content) = self.content.take() {
            return Ok(content);
        }

        let path = self
            .filepath
            .take()
            .ok_or(ConversionError::MissingContentAndFilepath)?;
        fs::read(&path).map_err(|source| ConversionError::ReadInput { path, source })
    }

    pub fn transactions(mut self) -> ConversionResult<Vec<Transaction>> {
        let content = self.read_content()?;
        PagseguroParser::parse(&content)
    }

    /// Runs the whole conversion in memory and returns the OFX bytes.
    pub fn convert(mut self) -> ConversionResult<Vec<u8>> {
        let config = self.resolve_config()?;
        let transactions = self.transactions()?;
        OfxWriter::new(&config).render(&transactions)
    }

    /// Converts and replaces `output` atomically; on failure `output` is untouched.
    pub fn write_to(self, output: impl AsRef<Path>) -> ConversionResult<()> {
        let output = output.as_ref();
        let rendered = self.convert()?;

        let write_error = |source: std::io::Error| ConversionError::WriteOutput {
            path: output.to_path_buf(),
            source,
        };

        let dir = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = staging_file(dir).map_err(write_error)?;
        if let Ok(existing) = fs::metadata(output) {
            file.as_file()
                .set_permissions(existing.permissions())
                .map_err(write_error)?;
        }
        file.write_all(&rendered).map_err(write_error)?;
        file.as_file().sync_all().map_err(write_error)?;
        file.persist(output).map_err(|e| write_error(e.error))?;

        tracing::info!(output = %output.display(), bytes = rendered.len(), "wrote OFX statement");
        Ok(())
    }
}

/// Temp file in `dir` created with the mode a plain `File::create` would get.
fn staging_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Reads `input`, converts it with `config` and writes the statement to `output`.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: OfxConfig,
) -> ConversionResult<()> {
    ConverterBuilder::new()
        .filename(input)
        .config(config)
        .write_to(output)
}
