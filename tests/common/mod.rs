//! PDF fixtures.
#![allow(dead_code)]
use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

pub const PROSE: &str = "The delegates of the relief committee met again on Tuesday morning \
    to review the situation of the refugees who had reached the city during the winter. \
    The report presented by the secretary showed that the number of families living in \
    the camp had doubled since the last meeting and that the supply of food, blankets and \
    medicine was no longer sufficient. After a long discussion the members agreed to ask \
    the government for an additional grant and to send two representatives to the capital \
    in order to explain the urgency of the matter. It was also decided that the school \
    would remain open for the children and that the hospital would receive more beds.";

/// `nb` words of English prose.
pub fn english_words(nb: usize) -> Vec<&'static str> {
    PROSE.split_whitespace().cycle().take(nb).collect()
}

/// Build a PDF at `path`, one page per entry, each line of a page in its own text block.
pub fn write_pdf(path: &Path, pages: &[Vec<String>]) {
    build_pdf(path, pages, None)
}

/// Same as [write_pdf], with a WinAnsi encoded font so that Latin-1 letters (`é`, `ç`...) survive extraction.
pub fn write_latin1_pdf(path: &Path, pages: &[Vec<String>]) {
    build_pdf(path, pages, Some("WinAnsiEncoding"))
}

fn latin1(line: &str) -> Vec<u8> {
    line.chars()
        .map(|c| u8::try_from(u32::from(c)).expect("non Latin-1 character in fixture"))
        .collect()
}

fn build_pdf(path: &Path, pages: &[Vec<String>], encoding: Option<&str>) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut font = dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    };
    if let Some(encoding) = encoding {
        font.set("Encoding", Object::Name(encoding.as_bytes().to_vec()));
    }
    let font_id = doc.add_object(font);
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids = vec![];
    for lines in pages {
        let mut operations = vec![];
        for (idx, line) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 10.into()]));
            operations.push(Operation::new(
                "Td",
                vec![40.into(), (800 - 12 * idx as i64).into()],
            ));
            operations.push(Operation::new(
                "Tj",
                vec![match encoding {
                    Some(_) => Object::String(latin1(line), StringFormat::Literal),
                    None => Object::string_literal(line.as_str()),
                }],
            ));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

/// Lay `words` out in pages of 60 lines of 10 words.
pub fn paginate(words: &[&str]) -> Vec<Vec<String>> {
    words
        .chunks(600)
        .map(|page| page.chunks(10).map(|line| line.join(" ")).collect())
        .collect()
}
