/// Reduce a title to its comparison key: drop everything that is not an ASCII
/// letter or digit, then lowercase what remains.
pub fn normalize_title(title: &str) -> String {
    title
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_case() {
        assert_eq!(normalize_title("Earth: A History"), "earthahistory");
        assert_eq!(
            normalize_title("Neil Young: Waging Heavy Peace"),
            "neilyoungwagingheavypeace"
        );
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(normalize_title("Catch-22"), "catch22");
    }

    #[test]
    fn empty_and_symbol_only_inputs_yield_empty_key() {
        assert_eq!(normalize_title(""), "");
        assert_eq!(normalize_title("?!  ..."), "");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(normalize_title("Café Noir"), "cafnoir");
    }

    #[test]
    fn is_idempotent() {
        let once = normalize_title("Dog Breeds of the World");
        assert_eq!(normalize_title(&once), once);
    }
}
