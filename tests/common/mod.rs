use std::fs;
use std::io::Read;
use std::path::Path;

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

/// Write a minimal PDF with one content stream per page. Each line is drawn
/// on its own baseline in 12pt Helvetica.
pub fn write_sample_pdf(path: &Path, pages: &[&[&str]]) {
    let mut pdf = Pdf::new();

    let catalog_id = Ref::new(1);
    let pages_id = Ref::new(2);
    let font_id = Ref::new(3);

    let mut next_id = 4;
    let mut page_ids = Vec::new();
    let mut content_ids = Vec::new();
    for _ in pages {
        page_ids.push(Ref::new(next_id));
        content_ids.push(Ref::new(next_id + 1));
        next_id += 2;
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(pages.len() as i32);
    pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

    for ((lines, &page_id), &content_id) in pages.iter().zip(&page_ids).zip(&content_ids) {
        let mut content = Content::new();
        let mut y = 720.0;
        for line in *lines {
            content
                .begin_text()
                .set_font(Name(b"F1"), 12.0)
                .next_line(72.0, y)
                .show(Str(line.as_bytes()))
                .end_text();
            y -= 16.0;
        }
        pdf.stream(content_id, &content.finish());
        pdf.page(page_id)
            .media_box(Rect::new(0.0, 0.0, 612.0, 792.0))
            .parent(pages_id)
            .contents(content_id)
            .resources()
            .fonts()
            .pair(Name(b"F1"), font_id);
    }

    fs::write(path, pdf.finish()).unwrap();
}

/// Concatenate the text runs of a DOCX body, one line per `w:t` element.
pub fn docx_text(path: &Path) -> String {
    let xml = docx_document_xml(path);
    let doc = roxmltree::Document::parse(&xml).unwrap();
    doc.descendants()
        .filter(|n| n.tag_name().name() == "t")
        .filter_map(|n| n.text())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn docx_document_xml(path: &Path) -> String {
    let file = fs::File::open(path).unwrap();
    let mut zip = zip::ZipArchive::new(file).unwrap();
    let mut xml = String::new();
    zip.by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}
