use std::fmt;

#[derive(Debug)]
pub enum Error {
    InvalidPdf(String),
    Pdf(lopdf::Error),
    Extract(String),
    Docx(String),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPdf(reason) => write!(f, "not a valid PDF file: {reason}"),
            Error::Pdf(e) => write!(f, "PDF error: {e}"),
            Error::Extract(e) => write!(f, "text extraction error: {e}"),
            Error::Docx(e) => write!(f, "DOCX error: {e}"),
            Error::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<lopdf::Error> for Error {
    fn from(e: lopdf::Error) -> Self {
        Error::Pdf(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
