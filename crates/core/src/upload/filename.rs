//! Client filename handling.

/// Name used when sanitizing leaves nothing.
pub const FALLBACK_FILENAME: &str = "upload.pdf";

/// Reduces a client-supplied filename to a safe single path component.
///
/// Non-ASCII characters are dropped, path separators become spaces, runs of
/// whitespace collapse to `_`, anything outside `[A-Za-z0-9_.-]` is removed
/// and leading or trailing `.`/`_` are trimmed.
#[must_use]
pub fn sanitize_filename(filename: &str) -> String {
    let ascii: String = filename
        .chars()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Whether `filename` ends in one of `allowed` extensions, case-insensitively.
#[must_use]
pub fn has_allowed_extension(filename: &str, allowed: &[String]) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(_, ext)| allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("report.pdf", "report.pdf")]
    #[case("Q4 results 2024.pdf", "Q4_results_2024.pdf")]
    #[case("../../etc/passwd", "etc_passwd")]
    #[case("C:\\Users\\me\\statement.pdf", "C_Users_me_statement.pdf")]
    #[case("résumé.pdf", "rsum.pdf")]
    #[case("  spaced   out  .pdf", "spaced_out_.pdf")]
    #[case("...", FALLBACK_FILENAME)]
    #[case("", FALLBACK_FILENAME)]
    #[case("bad<>:|?*name.pdf", "badname.pdf")]
    fn test_sanitize_filename(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_filename(input), expected);
    }

    #[rstest]
    #[case("a.pdf", true)]
    #[case("A.PDF", true)]
    #[case("archive.tar.pdf", true)]
    #[case("notes.txt", false)]
    #[case("pdf", false)]
    #[case("", false)]
    fn test_has_allowed_extension(#[case] filename: &str, #[case] expected: bool) {
        assert_eq!(has_allowed_extension(filename, &["pdf".to_string()]), expected);
    }
}
