/// Errors that can occur during HTML-to-plaintext conversion.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum HtmlToTextError {
    /// The document has no `<body>` and [`MissingBody::Error`](crate::MissingBody::Error)
    /// was requested.
    #[error("no <body> element found")]
    BodyNotFound,
    /// The input could not be read.
    #[error("failed to read HTML input: {0}")]
    Read(#[from] std::io::Error),
}
