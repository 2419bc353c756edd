//! Text extraction for uploaded JD and resume files.
//!
//! Supported: `.pdf`, `.docx`, `.txt`. Unsupported extensions yield empty
//! text (callers treat empty content as a per-file failure); corrupt files
//! yield an extraction error.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("legacy .doc files are not supported; convert to .docx or .pdf")]
    LegacyDoc,
}

/// Extracts plain text from a file, dispatching on its extension.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    let text = match extension.as_str() {
        "pdf" => pdf_extract::extract_text(path).map_err(|e| ExtractError::Pdf(e.to_string()))?,
        "docx" => {
            let data = std::fs::read(path)?;
            extract_docx(&data)?
        }
        "txt" => std::fs::read_to_string(path)?,
        "doc" => return Err(ExtractError::LegacyDoc),
        _ => String::new(),
    };

    Ok(text.trim().to_string())
}

/// Stages uploaded bytes as a named temp file inside `upload_dir` (preserving
/// the original extension so dispatch works) and extracts its text. The temp
/// file is removed on every exit path when the guard drops.
pub fn extract_from_upload(
    upload_dir: &Path,
    filename: &str,
    data: &[u8],
) -> Result<String, ExtractError> {
    use std::io::Write;

    std::fs::create_dir_all(upload_dir)?;

    let suffix = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    let mut staged = tempfile::Builder::new()
        .suffix(&suffix)
        .tempfile_in(upload_dir)?;
    staged.write_all(data)?;

    extract_text(staged.path())
}

fn extract_docx(data: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(data).map_err(|e| ExtractError::Docx(e.to_string()))?;
    let mut text = String::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(p) = child {
            for para_child in p.children {
                if let docx_rs::ParagraphChild::Run(run) = para_child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_txt_file_returns_trimmed_content() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "  Senior Rust Engineer at Acme  ").unwrap();
        let text = extract_text(file.path()).unwrap();
        assert_eq!(text, "Senior Rust Engineer at Acme");
    }

    #[test]
    fn test_unsupported_extension_returns_empty_text() {
        let file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        let text = extract_text(file.path()).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_legacy_doc_is_an_extraction_error() {
        let file = tempfile::Builder::new().suffix(".doc").tempfile().unwrap();
        let result = extract_text(file.path());
        assert!(matches!(result, Err(ExtractError::LegacyDoc)));
    }

    #[test]
    fn test_extract_from_upload_removes_staged_file() {
        let dir = tempfile::tempdir().unwrap();
        let text = extract_from_upload(dir.path(), "jd.txt", b"hello world").unwrap();
        assert_eq!(text, "hello world");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_corrupt_pdf_is_an_extraction_error() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"not a real pdf").unwrap();
        let result = extract_text(file.path());
        assert!(matches!(result, Err(ExtractError::Pdf(_))));
    }
}
