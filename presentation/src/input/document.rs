//! Document loading and question parsing for the CLI.
//!
//! Plain-text and PDF documents are accepted; anything else is rejected
//! before the analysis starts.

use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while reading the document
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Only .txt and .pdf files are supported: {0}")]
    UnsupportedFileType(PathBuf),

    #[error("Text cannot be empty")]
    EmptyDocument,

    #[error("PDF appears to be empty or contains no extractable text")]
    EmptyPdf,

    #[error("PDF extraction failed: {0}")]
    PdfExtraction(String),

    #[error("Document is not valid UTF-8")]
    InvalidEncoding,

    #[error("Could not read {source_name}: {error}")]
    Io {
        source_name: String,
        #[source]
        error: std::io::Error,
    },
}

/// Read the document from `path`, or from stdin when `None`.
pub fn read_document(path: Option<&Path>) -> Result<String, InputError> {
    match path {
        Some(path) => read_file(path),
        None => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .map_err(|error| InputError::Io {
                    source_name: "stdin".to_string(),
                    error,
                })?;
            decode(bytes)
        }
    }
}

/// Read a `.txt` or `.pdf` file, chosen by extension.
pub fn read_file(path: &Path) -> Result<String, InputError> {
    match extension(path).as_deref() {
        Some("txt") => read_text_file(path),
        Some("pdf") => read_pdf_file(path),
        _ => Err(InputError::UnsupportedFileType(path.to_path_buf())),
    }
}

/// Read a `.txt` file as UTF-8 text.
pub fn read_text_file(path: &Path) -> Result<String, InputError> {
    if extension(path).as_deref() != Some("txt") {
        return Err(InputError::UnsupportedFileType(path.to_path_buf()));
    }
    decode(read_bytes(path)?)
}

/// Extract the text of every page of a `.pdf` file.
pub fn read_pdf_file(path: &Path) -> Result<String, InputError> {
    if extension(path).as_deref() != Some("pdf") {
        return Err(InputError::UnsupportedFileType(path.to_path_buf()));
    }
    let bytes = read_bytes(path)?;
    debug!("PDF file size: {} bytes", bytes.len());
    extract_pdf_text(&bytes)
}

/// Extract text from in-memory PDF bytes.
///
/// Malformed fonts can make the extractor panic; that is reported as an
/// extraction failure.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, InputError> {
    let text = match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!("PDF extraction failed: {}", e);
            return Err(InputError::PdfExtraction(e.to_string()));
        }
        Err(_) => {
            warn!("PDF extraction panicked");
            return Err(InputError::PdfExtraction(
                "extractor panicked, the file likely contains malformed fonts".to_string(),
            ));
        }
    };

    if text.trim().is_empty() {
        return Err(InputError::EmptyPdf);
    }
    Ok(text)
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, InputError> {
    std::fs::read(path).map_err(|error| InputError::Io {
        source_name: path.display().to_string(),
        error,
    })
}

fn decode(bytes: Vec<u8>) -> Result<String, InputError> {
    let text = String::from_utf8(bytes).map_err(|_| InputError::InvalidEncoding)?;
    if text.trim().is_empty() {
        return Err(InputError::EmptyDocument);
    }
    Ok(text)
}

/// Merge repeated questions with a comma-separated list.
///
/// Each question is trimmed and blanks are dropped; order is kept.
pub fn parse_questions(repeated: &[String], list: Option<&str>) -> Vec<String> {
    repeated
        .iter()
        .map(String::as_str)
        .chain(list.into_iter().flat_map(|l| l.split(',')))
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_txt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "Some document text.\n").unwrap();

        assert_eq!(read_text_file(&path).unwrap(), "Some document text.\n");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DOC.TXT");
        std::fs::write(&path, "upper").unwrap();

        assert!(read_text_file(&path).is_ok());
    }

    #[test]
    fn test_rejects_other_extensions() {
        let err = read_file(Path::new("report.docx")).unwrap_err();
        assert!(matches!(err, InputError::UnsupportedFileType(_)));
        assert!(
            err.to_string()
                .starts_with("Only .txt and .pdf files are supported")
        );

        assert!(matches!(
            read_file(Path::new("README")),
            Err(InputError::UnsupportedFileType(_))
        ));
        assert!(matches!(
            read_text_file(Path::new("report.pdf")),
            Err(InputError::UnsupportedFileType(_))
        ));
    }

    /// Build a one-page PDF whose page content stream is `content`.
    fn single_page_pdf(content: &str) -> Vec<u8> {
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                content.len(),
                content
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
        }
        let xref = pdf.len();
        pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
        for offset in offsets {
            pdf.push_str(&format!("{:010} 00000 n \n", offset));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref
        ));
        pdf.into_bytes()
    }

    #[test]
    fn test_reads_pdf_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        std::fs::write(
            &path,
            single_page_pdf("BT /F1 12 Tf 72 712 Td (Quarterly report) Tj ET"),
        )
        .unwrap();

        let text = read_document(Some(&path)).unwrap();
        assert!(text.contains("Quarterly report"));
    }

    #[test]
    fn test_pdf_without_text_is_rejected() {
        let err = extract_pdf_text(&single_page_pdf("")).unwrap_err();
        assert!(matches!(err, InputError::EmptyPdf));
        assert_eq!(
            err.to_string(),
            "PDF appears to be empty or contains no extractable text"
        );
    }

    #[test]
    fn test_corrupt_pdf_is_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.PDF");
        std::fs::write(&path, b"definitely not a pdf").unwrap();

        assert!(matches!(
            read_file(&path),
            Err(InputError::PdfExtraction(_))
        ));
    }

    #[test]
    fn test_rejects_blank_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.txt");
        std::fs::write(&path, " \n\t\n").unwrap();

        let err = read_text_file(&path).unwrap_err();
        assert_eq!(err.to_string(), "Text cannot be empty");
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        assert!(matches!(
            read_text_file(&path),
            Err(InputError::InvalidEncoding)
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text_file(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }

    #[test]
    fn test_parse_questions() {
        let repeated = vec!["  What is AI? ".to_string(), "".to_string()];
        let questions = parse_questions(&repeated, Some("Who benefits?, ,Why now?"));
        assert_eq!(questions, vec!["What is AI?", "Who benefits?", "Why now?"]);
    }

    #[test]
    fn test_parse_no_questions() {
        assert!(parse_questions(&[], None).is_empty());
        assert!(parse_questions(&[], Some(" , ")).is_empty());
    }
}
