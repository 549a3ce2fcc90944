/// Extracts the text of every page and tidies the layout whitespace
/// `pdf-extract` leaves behind.
pub fn extract_pdf_text(data: &[u8]) -> anyhow::Result<String> {
    let text = pdf_extract::extract_text_from_mem(data)?;
    Ok(normalize_pdf_text(&text))
}

/// Trims trailing whitespace per line and collapses runs of blank lines into one.
pub fn normalize_pdf_text(raw: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut previous_blank = true;

    for line in raw.lines() {
        let line = line.trim_end();
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        lines.push(if blank { "" } else { line });
        previous_blank = blank;
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}
