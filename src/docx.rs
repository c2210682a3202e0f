use std::io::Cursor;

use docx_rs::{BreakType, Docx, Run};

use crate::error::Error;
use crate::model::{Document, Paragraph, ParagraphKind};

// Run sizes are in half-points.
const BODY_SIZE: usize = 22;
const HEADING_SIZE: usize = 28;

/// Render the document model as DOCX bytes. Each source page maps onto a
/// page-break-separated section of the output body.
pub fn render(document: &Document) -> Result<Vec<u8>, Error> {
    let mut docx = Docx::new().default_size(BODY_SIZE);

    for (idx, page) in document.pages.iter().enumerate() {
        if idx > 0 {
            docx = docx.add_paragraph(
                docx_rs::Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            );
        }
        for paragraph in &page.paragraphs {
            docx = docx.add_paragraph(build_paragraph(paragraph));
        }
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| Error::Docx(e.to_string()))?;
    Ok(buffer.into_inner())
}

fn build_paragraph(paragraph: &Paragraph) -> docx_rs::Paragraph {
    let mut run = Run::new().add_text(paragraph.text.as_str());
    if paragraph.kind == ParagraphKind::Heading {
        run = run.size(HEADING_SIZE).bold();
    }
    docx_rs::Paragraph::new().add_run(run)
}
