/// Splits multi-line text into trimmed, non-empty lines, keeping their order.
pub(crate) fn clean_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Lower-cases `text` and strips the Spanish diacritics used in category
/// labels, so "Acompañante" and "acompanante" compare equal.
pub(crate) fn fold(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_lines() {
        let lines = clean_lines("  500g harina \n\n\t200ml leche\r\n   \n2 huevos");
        assert_eq!(lines, vec!["500g harina", "200ml leche", "2 huevos"]);
        assert!(clean_lines("").is_empty());
        assert!(clean_lines("\n  \n").is_empty());
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("Acompañante"), "acompanante");
        assert_eq!(fold("PERNIL NAVIDEÑO"), "pernil navideno");
        assert_eq!(fold("Plato fuerte"), "plato fuerte");
    }
}
