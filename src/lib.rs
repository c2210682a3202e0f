mod docx;
mod error;
mod model;
mod pdf;
mod session;

pub use error::Error;
pub use session::Session;

use std::path::Path;

/// Convert a PDF file to DOCX. The session is closed on both the success
/// and the failure path.
pub fn convert_pdf_to_docx(input: &Path, output: &Path) -> Result<(), Error> {
    let session = Session::open(input)?;
    let result = session.convert(output);
    session.close();
    result
}
