//! Error types for the chart pipeline.

use std::io;
use thiserror::Error;

/// Recoverable per-record failure while decoding a composite benchmark name.
///
/// These are caught at grouping time: the offending record is skipped with a
/// diagnostic so one malformed name never aborts the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("no `<` in benchmark name `{0}`")]
    MissingTemplateOpen(String),

    #[error("no `>` in benchmark name `{0}`")]
    MissingTemplateClose(String),

    #[error("no `/` size separator in benchmark name `{0}`")]
    MissingSizeSeparator(String),

    #[error("`>` precedes `<` in benchmark name `{0}`")]
    InvertedTemplateBrackets(String),

    #[error("unparseable size token `{0}`")]
    BadSizeToken(String),
}

/// Unrecoverable pipeline failure; propagates out of `main`.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid results file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rendering failed: {0}")]
    Render(String),
}
