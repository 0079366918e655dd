//! Country calling-code table and prefix extraction.

use std::collections::BTreeMap;

/// Immutable mapping from country calling code (a digit string of length
/// 1-3, e.g. "44") to a country/region display name.
///
/// Built once at startup and handed to whichever component needs it; the
/// table never changes for the lifetime of the process.
///
/// # Example
///
/// ```
/// use arcade_contacts::domain::CodeTable;
///
/// let table = CodeTable::default();
/// assert_eq!(table.extract_phone_code("+44 777 123 456"), "44");
/// assert_eq!(table.extract_phone_code("letters only"), "");
/// ```
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: BTreeMap<String, String>,
}

impl CodeTable {
    /// Build a table from explicit (code, country name) entries.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let codes = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { codes }
    }

    /// All (code, country name) entries, ordered by code.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.codes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Display name for a calling code, if the table knows it.
    pub fn country_name(&self, code: &str) -> Option<&str> {
        self.codes.get(code).map(String::as_str)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Extract the country calling code from a free-form phone number.
    ///
    /// Every non-digit character is stripped, then the leading 3, 2 and 1
    /// digits are tried against the table in that order, so the longest
    /// known code wins. Returns the empty string when nothing matches or
    /// the input has no digits.
    pub fn extract_phone_code<'a>(&'a self, phone_number: &str) -> &'a str {
        let normalized: String = phone_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        for length in (1..=3).rev() {
            if normalized.len() < length {
                continue;
            }
            if let Some((code, _)) = self.codes.get_key_value(&normalized[..length]) {
                return code.as_str();
            }
        }
        ""
    }
}

impl Default for CodeTable {
    /// The fixed table the application ships with.
    fn default() -> Self {
        Self::from_entries([
            ("1", "USA/Canada"),
            ("7", "Russia/Kazakhstan"),
            ("44", "United Kingdom"),
            ("49", "Germany"),
            ("81", "Japan"),
            ("86", "China"),
            ("91", "India"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_known_codes() {
        let table = CodeTable::default();
        assert_eq!(table.extract_phone_code("+44 777 123 456"), "44");
        assert_eq!(table.extract_phone_code("+1 123 456 789"), "1");
        assert_eq!(table.extract_phone_code("+7 (900) 123-45-67"), "7");
        assert_eq!(table.extract_phone_code("0049 1512 345"), "");
    }

    #[test]
    fn test_extract_total_over_odd_inputs() {
        let table = CodeTable::default();
        assert_eq!(table.extract_phone_code(""), "");
        assert_eq!(table.extract_phone_code("no digits here"), "");
        assert_eq!(table.extract_phone_code("+++---"), "");
        // Single digit that is itself a code
        assert_eq!(table.extract_phone_code("7"), "7");
        // Two digits where only the first is a code
        assert_eq!(table.extract_phone_code("12"), "1");
    }

    #[test]
    fn test_longest_match_wins() {
        // A table where a short code is a prefix of a longer one: the
        // longer match must be preferred even though "1" also matches.
        let table = CodeTable::from_entries([
            ("1", "USA/Canada"),
            ("12", "Hypothetical"),
            ("123", "Also hypothetical"),
        ]);
        assert_eq!(table.extract_phone_code("123456"), "123");
        assert_eq!(table.extract_phone_code("124567"), "12");
        assert_eq!(table.extract_phone_code("145678"), "1");
    }

    #[test]
    fn test_entries_ordered_by_code() {
        let table = CodeTable::default();
        let codes: Vec<&str> = table.entries().map(|(c, _)| c).collect();
        assert_eq!(codes, vec!["1", "44", "49", "7", "81", "86", "91"]);
        assert_eq!(table.country_name("44"), Some("United Kingdom"));
        assert_eq!(table.country_name("99"), None);
    }

    #[test]
    fn test_shorter_input_than_candidate_length() {
        let table = CodeTable::default();
        // Two digits available: the 3-digit probe is skipped, not an error.
        assert_eq!(table.extract_phone_code("+44"), "44");
    }
}
