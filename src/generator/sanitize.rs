/// Map a list name to a Terraform-safe identifier: ASCII alphanumerics and
/// underscores pass through, everything else becomes an underscore. Total
/// and length-preserving, but not injective; the orchestrator rejects
/// collisions between emitted lists.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Escape a string for use inside a quoted HCL literal. All interpolated
/// text flows through here so arbitrary operator-provided values (notes,
/// tags, item descriptions) cannot break the generated syntax.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            // ${ and %{ start HCL template sequences
            '$' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push_str("$${");
            }
            '%' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push_str("%%{");
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_special_characters() {
        assert_eq!(sanitize_name("My List!"), "My_List_");
        assert_eq!(sanitize_name("geo codes (emea)"), "geo_codes__emea_");
        assert_eq!(sanitize_name("a.b-c/d"), "a_b_c_d");
    }

    #[test]
    fn test_sanitize_passes_through_safe_names() {
        assert_eq!(sanitize_name("already_safe_123"), "already_safe_123");
        assert_eq!(sanitize_name(""), "");
    }

    #[test]
    fn test_sanitize_replaces_non_ascii() {
        assert_eq!(sanitize_name("café"), "caf_");
    }

    #[test]
    fn test_sanitize_preserves_length_and_positions() {
        for name in ["My List!", "weird\tname", "§±!@#", "plain", ""] {
            let sanitized = sanitize_name(name);
            assert_eq!(sanitized.chars().count(), name.chars().count());
            assert!(sanitized.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
            for (original, mapped) in name.chars().zip(sanitized.chars()) {
                if original.is_ascii_alphanumeric() || original == '_' {
                    assert_eq!(original, mapped);
                } else {
                    assert_eq!(mapped, '_');
                }
            }
        }
    }

    #[test]
    fn test_escape_passes_plain_strings_through() {
        assert_eq!(escape_string("updated via TF"), "updated via TF");
        assert_eq!(escape_string("1.2.3.4/32"), "1.2.3.4/32");
    }

    #[test]
    fn test_escape_quotes_and_backslashes() {
        assert_eq!(escape_string(r#"say "hello""#), r#"say \"hello\""#);
        assert_eq!(escape_string(r"C:\tmp"), r"C:\\tmp");
    }

    #[test]
    fn test_escape_template_sequences() {
        assert_eq!(escape_string("${oops}"), "$${oops}");
        assert_eq!(escape_string("%{ if }"), "%%{ if }");
        // a bare dollar or percent is left alone
        assert_eq!(escape_string("100% of $5"), "100% of $5");
    }

    #[test]
    fn test_escape_newlines() {
        assert_eq!(escape_string("line one\nline two"), "line one\\nline two");
    }
}
