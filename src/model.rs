#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParagraphKind {
    Body,
    Heading,
}

pub struct Document {
    pub pages: Vec<Page>,
}

pub struct Page {
    pub paragraphs: Vec<Paragraph>,
}

pub struct Paragraph {
    pub text: String,
    pub kind: ParagraphKind,
}
