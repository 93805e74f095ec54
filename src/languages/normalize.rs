use isolang::Language;

/// Codes the translation API reports that the ISO 639 tag database does not
/// know under the same spelling.
///
/// Left column is the API code, right column is the tag used for the lookup.
pub const SPECIAL_CASES: &[(&str, &str)] = &[
    ("zh-CN", "cmn"),
    ("zh-TW", "zh"),
    ("iw", "he"),
    ("jw", "jv"),
    ("in", "id"),
    ("ji", "yi"),
];

/// Map an API language code onto the tag used for the name lookup.
///
/// Codes outside [`SPECIAL_CASES`] are returned unchanged.
pub fn normalize_code(code: &str) -> &str {
    SPECIAL_CASES
        .iter()
        .find(|(api_code, _)| api_code.eq_ignore_ascii_case(code))
        .map(|(_, tag)| *tag)
        .unwrap_or(code)
}

/// Resolve an API language code to its English display name.
///
/// The code is normalized first, then any region subtag is dropped
/// (`pt-BR` looks up `pt`). Two-letter subtags are ISO 639-1, three-letter
/// subtags are ISO 639-3.
pub fn code_to_name(code: &str) -> Option<&'static str> {
    let tag = normalize_code(code.trim());
    let primary = tag.split(['-', '_']).next()?.to_ascii_lowercase();

    let language = match primary.len() {
        2 => Language::from_639_1(&primary),
        3 => Language::from_639_3(&primary),
        _ => None,
    }?;

    Some(language.to_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_cases_are_substituted() {
        for (api_code, tag) in SPECIAL_CASES {
            assert_eq!(normalize_code(api_code), *tag, "{}", api_code);
        }
        assert_eq!(normalize_code("zh-CN"), "cmn");
    }

    #[test]
    fn ordinary_codes_pass_through() {
        assert_eq!(normalize_code("en"), "en");
        assert_eq!(normalize_code("haw"), "haw");
        assert_eq!(normalize_code("pt-BR"), "pt-BR");
    }

    #[test]
    fn resolves_common_codes() {
        assert_eq!(code_to_name("en"), Some("English"));
        assert_eq!(code_to_name("de"), Some("German"));
        assert_eq!(code_to_name("EN"), Some("English"));
        assert_eq!(code_to_name(" fr "), Some("French"));
    }

    #[test]
    fn resolves_special_and_three_letter_codes() {
        assert_eq!(code_to_name("zh-CN"), Some("Mandarin Chinese"));
        assert_eq!(code_to_name("zh-TW"), Some("Chinese"));
        assert_eq!(code_to_name("iw"), Some("Hebrew"));
        assert_eq!(code_to_name("jw"), Some("Javanese"));
        assert_eq!(code_to_name("haw"), Some("Hawaiian"));
        assert_eq!(code_to_name("ceb"), Some("Cebuano"));
    }

    #[test]
    fn region_subtag_is_ignored() {
        assert_eq!(code_to_name("pt-BR"), code_to_name("pt"));
    }

    #[test]
    fn unknown_codes_have_no_name() {
        assert_eq!(code_to_name("xx"), None);
        assert_eq!(code_to_name(""), None);
        assert_eq!(code_to_name("toolong"), None);
    }
}
