//! Script import from PDF and DOCX files.
//!
//! Classification follows the declared MIME type first and the file name
//! second. PDF text comes from `pdf-extract`; DOCX text is read straight out
//! of `word/document.xml` inside the zip container.

use crate::i18n::Label;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("unsupported file type: {name}")]
    UnsupportedType { name: String },
    #[error("failed to read {name}: {reason}")]
    Read { name: String, reason: String },
    #[error("failed to extract text from {name}: {reason}")]
    Extract { name: String, reason: String },
    #[error("{name} contains no readable text")]
    Empty { name: String },
}

impl ImportError {
    /// The translated message shown in the status line for this error.
    pub fn user_label(&self) -> Label {
        match self {
            ImportError::UnsupportedType { .. } => Label::FileTypeError,
            _ => Label::FileError,
        }
    }
}

/// MIME type a file picker would declare for `path`, judged by extension.
pub fn declared_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some(PDF_MIME),
        "docx" => Some(DOCX_MIME),
        _ => None,
    }
}

pub fn classify(mime: Option<&str>, name: &str) -> Result<FileKind, ImportError> {
    match mime {
        Some(PDF_MIME) => Ok(FileKind::Pdf),
        Some(DOCX_MIME) => Ok(FileKind::Docx),
        _ if name.to_ascii_lowercase().ends_with(".docx") => Ok(FileKind::Docx),
        _ => Err(ImportError::UnsupportedType {
            name: name.to_string(),
        }),
    }
}

/// Classify, read and extract the script text of the file at `path`.
pub fn load_script(path: &Path) -> Result<String, ImportError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let kind = classify(declared_mime(path), &name)?;
    info!(path = %path.display(), ?kind, "Importing script file");

    let bytes = fs::read(path).map_err(|err| ImportError::Read {
        name: name.clone(),
        reason: err.to_string(),
    })?;
    extract_text(kind, &bytes, &name)
}

pub fn extract_text(kind: FileKind, bytes: &[u8], name: &str) -> Result<String, ImportError> {
    let extracted = match kind {
        FileKind::Pdf => extract_pdf(bytes),
        FileKind::Docx => extract_docx(bytes),
    }
    .map_err(|reason| ImportError::Extract {
        name: name.to_string(),
        reason,
    })?;

    let text = extracted.trim();
    if text.is_empty() {
        return Err(ImportError::Empty {
            name: name.to_string(),
        });
    }
    info!(name, ?kind, total_chars = text.len(), "Extracted script text");
    Ok(text.to_string())
}

fn extract_pdf(bytes: &[u8]) -> Result<String, String> {
    // pdf-extract panics on some malformed inputs instead of returning Err.
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(err)) => Err(err.to_string()),
        Err(_) => {
            warn!("PDF extractor panicked on malformed input");
            Err("malformed PDF".to_string())
        }
    }
}

fn extract_docx(bytes: &[u8]) -> Result<String, String> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|err| format!("not a zip: {err}"))?;
    let mut entry = archive
        .by_name("word/document.xml")
        .map_err(|err| format!("missing word/document.xml: {err}"))?;
    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|err| format!("unreadable word/document.xml: {err}"))?;
    debug!(xml_bytes = xml.len(), "Read DOCX body");
    Ok(docx_xml_to_text(&xml))
}

static DOCX_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
          <w:t(?:\s[^>]*)?>(?P<text>[^<]*)</w:t>
        | (?P<para></w:p>)
        | (?P<br><w:br(?:\s[^>]*)?/>)
        | (?P<tab><w:tab/>)
        ",
    )
    .expect("docx token regex is valid")
});

static XML_ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#x[0-9a-fA-F]+|#[0-9]+|amp|lt|gt|quot|apos);").expect("entity regex is valid")
});

/// Flatten WordprocessingML into plain text: runs are concatenated and each
/// paragraph is followed by a blank line.
pub(crate) fn docx_xml_to_text(xml: &str) -> String {
    let mut out = String::with_capacity(xml.len() / 4);
    for caps in DOCX_TOKEN_RE.captures_iter(xml) {
        if let Some(text) = caps.name("text") {
            out.push_str(&unescape_xml(text.as_str()));
        } else if caps.name("para").is_some() {
            out.push_str("\n\n");
        } else if caps.name("br").is_some() {
            out.push('\n');
        } else if caps.name("tab").is_some() {
            out.push('\t');
        }
    }
    out.truncate(out.trim_end().len());
    out
}

fn unescape_xml(raw: &str) -> Cow<'_, str> {
    XML_ENTITY_RE.replace_all(raw, |caps: &Captures<'_>| {
        let entity = &caps[1];
        match entity {
            "amp" => "&".to_string(),
            "lt" => "<".to_string(),
            "gt" => ">".to_string(),
            "quot" => "\"".to_string(),
            "apos" => "'".to_string(),
            _ => {
                let code = if let Some(hex) = entity.strip_prefix("#x") {
                    u32::from_str_radix(hex, 16).ok()
                } else {
                    entity[1..].parse::<u32>().ok()
                };
                code.and_then(char::from_u32)
                    .map(String::from)
                    .unwrap_or_else(|| caps[0].to_string())
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(
                "word/document.xml",
                zip::write::SimpleFileOptions::default(),
            )
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn classifies_by_mime_then_name() {
        assert_eq!(classify(Some(PDF_MIME), "a.bin"), Ok(FileKind::Pdf));
        assert_eq!(classify(Some(DOCX_MIME), "a.bin"), Ok(FileKind::Docx));
        assert_eq!(classify(None, "Speech.DOCX"), Ok(FileKind::Docx));
        assert_eq!(
            classify(Some("text/plain"), "notes.docx"),
            Ok(FileKind::Docx)
        );
    }

    #[test]
    fn rejects_other_types() {
        let err = classify(Some("text/plain"), "notes.txt").unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedType { .. }));
        assert_eq!(err.user_label(), Label::FileTypeError);
        // A PDF is only recognized through its declared MIME type.
        assert!(classify(None, "slides.pdf").is_err());
    }

    #[test]
    fn declared_mime_follows_extension() {
        assert_eq!(declared_mime(Path::new("/tmp/a.PDF")), Some(PDF_MIME));
        assert_eq!(declared_mime(Path::new("b.docx")), Some(DOCX_MIME));
        assert_eq!(declared_mime(Path::new("c.txt")), None);
        assert_eq!(declared_mime(Path::new("no-extension")), None);
    }

    #[test]
    fn unsupported_path_is_rejected_before_reading() {
        let err = load_script(&PathBuf::from("/definitely/missing/script.txt")).unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedType { .. }));
    }

    #[test]
    fn missing_supported_file_is_a_read_error() {
        let err = load_script(&PathBuf::from("/definitely/missing/script.docx")).unwrap_err();
        assert!(matches!(err, ImportError::Read { .. }));
        assert_eq!(err.user_label(), Label::FileError);
    }

    #[test]
    fn flattens_paragraphs_runs_and_entities() {
        let xml = r#"<w:document><w:body>
            <w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr>
              <w:r><w:t>Hello</w:t></w:r><w:r><w:t xml:space="preserve"> world &amp; co</w:t></w:r></w:p>
            <w:p><w:r><w:t>A</w:t><w:tab/><w:t>B</w:t><w:br/><w:t>&#2453;&#x41;</w:t></w:r></w:p>
            <w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
        </w:body></w:document>"#;
        assert_eq!(
            docx_xml_to_text(xml),
            "Hello world & co\n\nA\tB\nকA\n\ncell"
        );
    }

    #[test]
    fn extracts_text_from_docx_container() {
        let bytes = docx_bytes(
            "<w:document><w:body><w:p><w:r><w:t>Good evening.</w:t></w:r></w:p></w:body></w:document>",
        );
        let text = extract_text(FileKind::Docx, &bytes, "news.docx").unwrap();
        assert_eq!(text, "Good evening.");
    }

    #[test]
    fn docx_without_text_is_empty_error() {
        let bytes = docx_bytes("<w:document><w:body><w:p/></w:body></w:document>");
        let err = extract_text(FileKind::Docx, &bytes, "blank.docx").unwrap_err();
        assert!(matches!(err, ImportError::Empty { .. }));
    }

    #[test]
    fn garbage_bytes_fail_extraction() {
        let err = extract_text(FileKind::Docx, b"not a zip", "x.docx").unwrap_err();
        assert!(matches!(err, ImportError::Extract { .. }));
        let err = extract_text(FileKind::Pdf, b"%PDF-garbage", "x.pdf").unwrap_err();
        assert!(matches!(err, ImportError::Extract { .. }));
    }
}
