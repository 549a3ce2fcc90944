use std::io::{Cursor, Read};

use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::Event;
use quick_xml::Reader;

const DOCUMENT_XML: &str = "word/document.xml";

/// Reads the paragraphs of `word/document.xml`, one line per non-empty paragraph.
/// Only `w:t` run text is kept; layout elements are skipped.
pub fn extract_docx_text(data: &[u8]) -> anyhow::Result<String> {
    let cursor = Cursor::new(data);
    let mut archive = zip::ZipArchive::new(cursor)?;

    let mut document_file = archive.by_name(DOCUMENT_XML)?;
    let mut xml = String::new();
    document_file.read_to_string(&mut xml)?;

    paragraphs_from_xml(&xml).map(|lines| lines.join("\n"))
}

/// Text boxes (`w:txbxContent`) nest whole paragraphs inside a run of the
/// enclosing paragraph, so open paragraphs are kept on a stack. An inner
/// paragraph is emitted when it closes; the outer one keeps its own text.
fn paragraphs_from_xml(xml: &str) -> anyhow::Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);

    let mut open: Vec<String> = Vec::new();
    let mut lines = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => open.push(String::new()),
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    if let Some(paragraph) = open.pop() {
                        if !paragraph.is_empty() {
                            lines.push(paragraph);
                        }
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Text(e) if in_text => {
                if let Some(paragraph) = open.last_mut() {
                    paragraph.push_str(&e.xml_content()?);
                }
            }
            Event::GeneralRef(e) if in_text => {
                if let (Some(paragraph), Some(resolved)) = (
                    open.last_mut(),
                    resolve_reference(&String::from_utf8_lossy(&e)),
                ) {
                    paragraph.push_str(&resolved);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(lines)
}

/// Resolves `amp`, `lt`, ... and numeric `#123` / `#x7B` references.
fn resolve_reference(name: &str) -> Option<String> {
    if let Some(code) = name.strip_prefix('#') {
        let value = match code.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => code.parse::<u32>().ok()?,
        };
        return char::from_u32(value).map(String::from);
    }
    resolve_xml_entity(name).map(str::to_string)
}
