use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;

use super::errors::CoreError;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"https?://[^\s<>'"\)]+"#).unwrap());

pub fn extract_document_text(file_name: &str, data: &[u8]) -> Result<String, CoreError> {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|v| v.to_str())
        .map(|v| v.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => extract_pdf_text(data),
        "docx" => extract_docx_text(data),
        _ => Err(CoreError::UnsupportedFileType(file_name.to_string())),
    }
}

fn extract_pdf_text(data: &[u8]) -> Result<String, CoreError> {
    let mut text = pdf_extract::extract_text_from_mem(data)
        .map_err(|err| CoreError::DecodeFailed(err.to_string()))?;

    let links = extract_hyperlinks(data);
    if !links.is_empty() {
        text.push('\n');
        text.push_str(&links.join("\n"));
    }

    Ok(text)
}

fn extract_hyperlinks(data: &[u8]) -> Vec<String> {
    let raw = String::from_utf8_lossy(data);
    let mut links: Vec<String> = Vec::new();
    for m in URL_RE.find_iter(&raw) {
        let value = m.as_str().to_string();
        if !links
            .iter()
            .any(|existing: &String| existing.eq_ignore_ascii_case(&value))
        {
            links.push(value);
        }
    }

    links
}

fn extract_docx_text(data: &[u8]) -> Result<String, CoreError> {
    let cursor = Cursor::new(data);
    let mut archive =
        zip::ZipArchive::new(cursor).map_err(|err| CoreError::DecodeFailed(err.to_string()))?;

    let mut document_file = archive
        .by_name("word/document.xml")
        .map_err(|err| CoreError::DecodeFailed(err.to_string()))?;
    let mut xml = String::new();
    document_file
        .read_to_string(&mut xml)
        .map_err(|err| CoreError::DecodeFailed(err.to_string()))?;

    let mut reader = Reader::from_str(&xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut current = String::new();
    let mut lines = Vec::new();
    let mut in_paragraph = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"w:p" {
                    in_paragraph = true;
                    current.clear();
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"w:p" {
                    if !current.trim().is_empty() {
                        lines.push(current.trim().to_string());
                    }
                    current.clear();
                    in_paragraph = false;
                }
            }
            Ok(Event::Text(e)) => {
                if in_paragraph {
                    let value = e
                        .xml_content()
                        .map_err(|err| CoreError::DecodeFailed(err.to_string()))?
                        .into_owned();
                    current.push_str(&value);
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(CoreError::DecodeFailed(err.to_string())),
            _ => {}
        }

        buf.clear();
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_document_text_rejects_unknown_extensions() {
        let result = extract_document_text("resume.txt", b"plain text");
        assert!(matches!(result, Err(CoreError::UnsupportedFileType(_))));
    }

    #[test]
    fn extract_hyperlinks_deduplicates_case_insensitively() {
        let data = b"stream https://example.com/a https://EXAMPLE.com/a https://example.com/b";
        let links = extract_hyperlinks(data);
        assert_eq!(
            links,
            vec![
                "https://example.com/a".to_string(),
                "https://example.com/b".to_string()
            ]
        );
    }

    #[test]
    fn extract_docx_text_reads_paragraphs() {
        let mut buffer = Vec::new();
        {
            let cursor = Cursor::new(&mut buffer);
            let mut writer = zip::ZipWriter::new(cursor);
            writer
                .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
                .unwrap();
            std::io::Write::write_all(
                &mut writer,
                b"<w:document><w:body><w:p><w:r><w:t>Jane Public</w:t></w:r></w:p><w:p><w:r><w:t>jane@example.com</w:t></w:r></w:p></w:body></w:document>",
            )
            .unwrap();
            writer.finish().unwrap();
        }

        let text = extract_docx_text(&buffer).unwrap();
        assert_eq!(text, "Jane Public\njane@example.com");
    }
}
