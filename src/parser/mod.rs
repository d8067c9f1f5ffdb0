//! Turns a free-text ingredient list into tokens.

mod model;

pub use model::Token;

/// Characters that separate one ingredient from the next.
const SEPARATORS: [char; 3] = [',', ';', '\n'];

/// Splits `text` on commas, semicolons and newlines into trimmed tokens,
/// dropping empty segments and keeping input order.
///
/// An empty result means there is nothing to suggest from; it is not an error.
///
/// # Examples
///
/// ```
/// use recipe_suggest::parse_ingredients;
///
/// let tokens = parse_ingredients("Harina, leche;\n  Huevos ,,");
/// let names: Vec<_> = tokens.iter().map(|t| t.original()).collect();
/// assert_eq!(names, ["Harina", "leche", "Huevos"]);
/// assert_eq!(tokens[0].normalized(), "harina");
/// ```
pub fn parse_ingredients(text: &str) -> Vec<Token> {
    text.split(SEPARATORS).filter_map(Token::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn originals(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::original).collect()
    }

    #[test]
    fn test_split_on_all_separators() {
        let tokens = parse_ingredients("harina,leche;huevos\nazúcar");
        assert_eq!(originals(&tokens), vec!["harina", "leche", "huevos", "azúcar"]);
    }

    #[test]
    fn test_trim_and_drop_empty() {
        let tokens = parse_ingredients(" , ;  Harina  ,\n\n, Leche Entera ;");
        assert_eq!(originals(&tokens), vec!["Harina", "Leche Entera"]);
    }

    #[test]
    fn test_normalized_is_lowercase() {
        let tokens = parse_ingredients("Dragon Fruit");
        assert_eq!(tokens[0].original(), "Dragon Fruit");
        assert_eq!(tokens[0].normalized(), "dragon fruit");
    }

    #[test]
    fn test_crlf_input() {
        let tokens = parse_ingredients("kiwi\r\nmango\r\n");
        assert_eq!(originals(&tokens), vec!["kiwi", "mango"]);
    }

    #[test]
    fn test_multiline_input() {
        let text = indoc! {"
            500g harina
            2 huevos

            leche
        "};
        let tokens = parse_ingredients(text);
        assert_eq!(originals(&tokens), vec!["500g harina", "2 huevos", "leche"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_ingredients("").is_empty());
        assert!(parse_ingredients("   \n\t ").is_empty());
        assert!(parse_ingredients(",;,\n").is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let tokens = parse_ingredients("sal, Sal");
        assert_eq!(originals(&tokens), vec!["sal", "Sal"]);
    }

    #[test]
    fn test_deterministic() {
        let text = "tomate; cebolla, ajo";
        assert_eq!(parse_ingredients(text), parse_ingredients(text));
    }
}
