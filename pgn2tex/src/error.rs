use thiserror::Error;

/// Failures while turning a PGN file into a TeX document. All of them are
/// terminal for the conversion; a malformed game cannot be partially
/// rendered.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot parse header: {line}")]
    HeaderSyntax { line: String },

    #[error("no progress tokenizing movetext at: {rest}")]
    MalformedMovetext { rest: String },

    #[error("unknown PGN element: {kind}")]
    UnknownElement { kind: &'static str },

    #[error("end of variation with no open variation")]
    UnbalancedVariation,

    #[error("missing header: {key}")]
    MissingHeader { key: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
