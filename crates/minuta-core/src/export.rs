//! Word-processor export transform.
//!
//! Wraps the document's lines in paragraph markup inside the minimal
//! MS-Word-openable HTML envelope. Pure and stateless: no parsing of
//! structure beyond splitting on line breaks. The writer prepends a
//! UTF-8 BOM so word processors pick up the encoding.

/// Opening envelope of the exported document.
const HEADER: &str = "<html xmlns:o='urn:schemas-microsoft-com:office:office' \
xmlns:w='urn:schemas-microsoft-com:office:word' \
xmlns='http://www.w3.org/TR/REC-html40'>\
<head><meta charset='utf-8'><style>body { font-family: 'Times New Roman'; \
line-height: 1.5; padding: 2cm; }</style></head><body>";

const FOOTER: &str = "</body></html>";

/// Transform the document text into the word-processor HTML envelope.
///
/// Each non-blank line becomes a `<p>` paragraph; blank lines become
/// `<br>`. Line content is carried verbatim.
pub fn export_word(content: &str) -> String {
    let body: String = content
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                "<br>".to_string()
            } else {
                format!("<p>{line}</p>")
            }
        })
        .collect();

    format!("{HEADER}{body}{FOOTER}")
}

/// Derive a safe export filename from the contract title:
/// ASCII alphanumerics kept (lowercased), everything else replaced by
/// underscores, with the `.doc` extension appended.
pub fn export_filename(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}.doc")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_wraps_lines_in_paragraphs() {
        let doc = "# CONTRATO\n\n**Cláusula 1ª**: objeto.";
        let html = export_word(doc);
        assert!(html.contains("<p># CONTRATO</p>"));
        assert!(html.contains("<br>"));
        assert!(html.contains("<p>**Cláusula 1ª**: objeto.</p>"));
        assert!(html.starts_with("<html"));
        assert!(html.ends_with("</body></html>"));
    }

    #[test]
    fn test_export_whitespace_only_line_becomes_break() {
        let html = export_word("a\n   \nb");
        assert_eq!(html.matches("<br>").count(), 1);
        assert_eq!(html.matches("<p>").count(), 2);
    }

    #[test]
    fn test_export_empty_document() {
        let html = export_word("");
        assert!(html.contains("<br>"));
        assert!(!html.contains("<p>"));
    }

    #[test]
    fn test_export_filename_sanitizes() {
        assert_eq!(
            export_filename("Serviço de consultoria"),
            "servi_o_de_consultoria.doc"
        );
        assert_eq!(export_filename("ABC 123"), "abc_123.doc");
    }
}
