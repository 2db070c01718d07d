/// Upper-cased symbol limited to 20 characters of `[A-Za-z0-9._-]`.
pub fn sanitize_symbol(symbol: &str) -> String {
    symbol
        .chars()
        .take(20)
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_symbol_pass_no_harm() {
        assert_eq!(sanitize_symbol("AAPL"), "AAPL");
    }

    #[test]
    fn sanitize_symbol_pass_delimiters() {
        assert_eq!(sanitize_symbol("BRK-B"), "BRK-B");
        assert_eq!(sanitize_symbol("0700.HK"), "0700.HK");
        assert_eq!(sanitize_symbol("ab_c"), "AB_C");
    }

    #[test]
    fn sanitize_symbol_pass_remove_other_chars() {
        assert_eq!(sanitize_symbol("msft*&(^(*&/../,"), "MSFT..");
        assert_eq!(sanitize_symbol("テスト"), "");
    }

    #[test]
    fn sanitize_symbol_pass_max_len() {
        assert_eq!(
            sanitize_symbol("abcdefghijabcdefghijabc"),
            "ABCDEFGHIJABCDEFGHIJ"
        );
    }

    #[test]
    fn sanitize_symbol_pass_to_uppercase() {
        assert_eq!(sanitize_symbol("tsla"), "TSLA");
        assert_ne!(sanitize_symbol("tsla"), "tsla");
    }
}
