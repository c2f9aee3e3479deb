//! Log sanitization for patient-identifying text.
//!
//! Case details flow through log lines (submitted records, warnings), so
//! formatted output is scrubbed for common identifier shapes before it
//! reaches the sink. The primary protection is still to keep identifiers
//! out of logging calls; this runs behind that as a fallback.

use regex::Regex;
use std::sync::OnceLock;
use tracing_subscriber::fmt::MakeWriter;

/// Cap on bytes scanned per line; scanning pathological lines is not
/// worth the cost for a local tool.
const SANITIZE_MAX_BYTES: usize = 16 * 1024;

struct PiiPattern {
    regex: Regex,
    replacement: &'static str,
}

static PII_PATTERNS: OnceLock<Vec<PiiPattern>> = OnceLock::new();

fn patterns() -> &'static [PiiPattern] {
    PII_PATTERNS.get_or_init(|| {
        let rules: [(&str, &str); 4] = [
            // Case/report identifiers in UUID form
            (
                r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}",
                "[REDACTED-UUID]",
            ),
            // SSN-shaped numbers
            (r"\b\d{3}-\d{2}-\d{4}\b", "[REDACTED-SSN]"),
            // Medical record numbers
            (r"\bMRN[:\s]?\d{6,10}\b", "[REDACTED-MRN]"),
            // Email addresses
            (
                r"(?i)\b[a-z0-9](?:[a-z0-9._%+-]{0,62}[a-z0-9])?@(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,}\b",
                "[REDACTED-EMAIL]",
            ),
        ];
        rules
            .into_iter()
            .map(|(pattern, replacement)| PiiPattern {
                regex: Regex::new(pattern).expect("valid redaction regex"),
                replacement,
            })
            .collect()
    })
}

fn truncate_to_char_boundary(input: &str, max_bytes: usize) -> (&str, bool) {
    if input.len() <= max_bytes {
        return (input, false);
    }
    let mut end = max_bytes;
    while end > 0 && !input.is_char_boundary(end) {
        end -= 1;
    }
    (&input[..end], true)
}

/// Replace identifier-shaped substrings with redaction markers.
#[must_use]
pub fn sanitize(input: &str) -> String {
    let (prefix, truncated) = truncate_to_char_boundary(input, SANITIZE_MAX_BYTES);

    let mut result = prefix.to_string();
    for pattern in patterns() {
        if pattern.regex.is_match(&result) {
            result = pattern
                .regex
                .replace_all(&result, pattern.replacement)
                .to_string();
        }
    }

    if truncated {
        result.push_str(" [TRUNCATED]");
    }
    result
}

/// A `tracing_subscriber` writer wrapper that sanitizes each formatted
/// line before it reaches the underlying sink.
#[derive(Debug)]
pub struct SanitizingMakeWriter<M> {
    inner: M,
}

impl<M> SanitizingMakeWriter<M> {
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

pub struct SanitizingWriter<W> {
    inner: W,
    buffer: Vec<u8>,
}

impl<W> SanitizingWriter<W>
where
    W: std::io::Write,
{
    fn flush_lines(&mut self) -> std::io::Result<()> {
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line = self.buffer.drain(..=pos).collect::<Vec<u8>>();
            let line_str = String::from_utf8_lossy(&line);
            self.inner.write_all(sanitize(&line_str).as_bytes())?;
        }
        Ok(())
    }
}

impl<W> std::io::Write for SanitizingWriter<W>
where
    W: std::io::Write,
{
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        self.flush_lines()?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_lines()?;
        if !self.buffer.is_empty() {
            let rest = String::from_utf8_lossy(&self.buffer).to_string();
            self.inner.write_all(sanitize(&rest).as_bytes())?;
            self.buffer.clear();
        }
        self.inner.flush()
    }
}

impl<'a, M> MakeWriter<'a> for SanitizingMakeWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = SanitizingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        SanitizingWriter {
            inner: self.inner.make_writer(),
            buffer: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_uuid() {
        let out = sanitize("case 550e8400-e29b-41d4-a716-446655440000 submitted");
        assert!(out.contains("[REDACTED-UUID]"));
        assert!(!out.contains("550e8400"));
    }

    #[test]
    fn test_sanitize_mrn_and_ssn() {
        assert!(sanitize("MRN:12345678 seen").contains("[REDACTED-MRN]"));
        assert!(sanitize("ssn 123-45-6789").contains("[REDACTED-SSN]"));
    }

    #[test]
    fn test_sanitize_email() {
        let out = sanitize("reporter patient@hospital.org");
        assert!(out.contains("[REDACTED-EMAIL]"));
    }

    #[test]
    fn test_plain_text_untouched() {
        let input = "predicted outcome HO for 45 year old case";
        assert_eq!(sanitize(input), input);
    }
}
