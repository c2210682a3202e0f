use crate::error::Error;
use crate::model::{Document, Page, Paragraph, ParagraphKind};

/// Extract the text of every page and fold it into the document model.
/// Paragraph boundaries are blank lines in the extracted text; wrapped
/// lines within a block are rejoined with spaces.
pub fn extract(bytes: &[u8]) -> Result<Document, Error> {
    let page_texts = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| Error::Extract(e.to_string()))?;

    let pages = page_texts
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let paragraphs = segment(text);
            if paragraphs.is_empty() {
                log::debug!("page {} has no extractable text", idx + 1);
            }
            Page { paragraphs }
        })
        .collect();

    Ok(Document { pages })
}

fn segment(text: &str) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            flush_block(&mut block, &mut paragraphs);
        } else {
            block.push(line);
        }
    }
    flush_block(&mut block, &mut paragraphs);

    paragraphs
}

fn flush_block(block: &mut Vec<&str>, paragraphs: &mut Vec<Paragraph>) {
    if block.is_empty() {
        return;
    }
    let text = block.join(" ");
    let kind = if looks_like_heading(block, &text) {
        ParagraphKind::Heading
    } else {
        ParagraphKind::Body
    };
    paragraphs.push(Paragraph { text, kind });
    block.clear();
}

// Deliberately conservative: anything ambiguous stays a body paragraph.
fn looks_like_heading(lines: &[&str], text: &str) -> bool {
    lines.len() == 1
        && text.chars().count() < 72
        && !text.ends_with(['.', ',', ';', ':'])
        && text
            .chars()
            .next()
            .is_some_and(|c| c.is_uppercase() || c.is_ascii_digit())
}

/// Read a text entry from the document's Info dictionary, if present.
pub(crate) fn info_string(document: &lopdf::Document, key: &[u8]) -> Option<String> {
    let info = document.trailer.get(b"Info").ok()?;
    let dict = match info {
        lopdf::Object::Reference(id) => match document.get_object(*id).ok()? {
            lopdf::Object::Dictionary(d) => d,
            _ => return None,
        },
        lopdf::Object::Dictionary(d) => d,
        _ => return None,
    };
    let lopdf::Object::String(raw, _) = dict.get(key).ok()? else {
        return None;
    };
    let text = decode_text(raw);
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

// PDF text strings are either UTF-16BE with a BOM or single-byte encoded.
fn decode_text(raw: &[u8]) -> String {
    if let Some(utf16) = raw.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        String::from_utf8(raw.to_vec())
            .unwrap_or_else(|_| raw.iter().map(|&b| b as char).collect())
    }
}
