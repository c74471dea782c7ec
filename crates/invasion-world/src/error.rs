//! Error types for the `invasion-world` crate.
//!
//! Every fallible operation in this crate is a city-file parse and returns
//! [`WorldError`].

/// Errors that can occur while building the city graph.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A `direction=neighbor` token did not split into exactly two parts.
    #[error("wrong cities format on line {line}: {token}")]
    MalformedEdge {
        /// One-based line number in the city description.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// An edge used a label outside the direction vocabulary.
    #[error("wrong city direction format on line {line}: {label}")]
    UnknownDirection {
        /// One-based line number in the city description.
        line: usize,
        /// The offending label.
        label: String,
    },

    /// Failed to read a city file from disk.
    #[error("failed to read city file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
