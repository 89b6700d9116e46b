//! Datetime rendering with the `YYYY-MM-DD HH:mm:ss` token vocabulary.

use chrono::NaiveDateTime;

/// Template tokens and their strftime equivalents, longest first.
static DATETIME_TOKENS: [(&str, &str); 6] = [
    ("YYYY", "%Y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("HH", "%H"),
    ("mm", "%M"),
    ("ss", "%S"),
];

/// Render `at` using a template datetime format.
///
/// Tokens are case-sensitive and matched left to right without overlap;
/// everything else is copied through literally.
pub fn format_datetime(format: &str, at: NaiveDateTime) -> String {
    at.format(&to_strftime(format)).to_string()
}

fn to_strftime(format: &str) -> String {
    let mut out = String::with_capacity(format.len() * 2);
    let mut rest = format;

    'scan: while !rest.is_empty() {
        for (token, spec) in DATETIME_TOKENS.iter() {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(spec);
                rest = tail;
                continue 'scan;
            }
        }

        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            if ch == '%' {
                out.push_str("%%");
            } else {
                out.push(ch);
            }
        }
        rest = chars.as_str();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 7, 2)
            .unwrap()
    }

    #[test]
    fn formats_full_timestamp() {
        assert_eq!(
            format_datetime("YYYY-MM-DD HH:mm:ss", at()),
            "2024-03-05 09:07:02"
        );
    }

    #[test]
    fn tokens_are_case_sensitive() {
        assert_eq!(format_datetime("MM mm", at()), "03 07");
        assert_eq!(format_datetime("yyyy", at()), "yyyy");
    }

    #[test]
    fn literal_text_passes_through() {
        assert_eq!(format_datetime("DD/MM/YYYY", at()), "05/03/2024");
        assert_eq!(format_datetime("week of YYYY", at()), "week of 2024");
    }

    #[test]
    fn percent_signs_are_literal() {
        assert_eq!(format_datetime("100% YYYY %Y", at()), "100% 2024 %Y");
    }

    #[test]
    fn tokens_do_not_overlap() {
        assert_eq!(to_strftime("YYYYY"), "%YY");
        assert_eq!(to_strftime("MMM"), "%mM");
    }

    #[test]
    fn non_ascii_text_is_preserved() {
        assert_eq!(format_datetime("YYYY年MM月DD日", at()), "2024年03月05日");
    }
}
