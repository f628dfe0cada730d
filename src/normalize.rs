use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped inside a single URL path segment.
pub(crate) const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A cleaned-up state name as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateToken {
    name: String,
    encoded: String,
}

impl StateToken {
    /// Lowercases `raw` and collapses runs of whitespace. Returns `None` if
    /// nothing is left.
    pub fn new(raw: &str) -> Option<Self> {
        let name = raw
            .trim_matches(|c: char| c == ',' || c.is_whitespace())
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        if name.is_empty() {
            return None;
        }

        let encoded = utf8_percent_encode(&name, PATH_SEGMENT).to_string();
        Some(Self { name, encoded })
    }

    /// Plain name, e.g. `new york`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path-segment form, e.g. `new%20york`
    pub fn encoded(&self) -> &str {
        &self.encoded
    }
}

impl fmt::Display for StateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Turn command-line state arguments into tokens.
///
/// Accepts separate arguments (`"new york" texas`), a single comma-joined
/// argument (`"new york,texas"`), or a mix of both. Order is preserved and
/// repeated names are kept only once.
pub fn normalize_states<S: AsRef<str>>(args: &[S]) -> Vec<StateToken> {
    let mut tokens: Vec<StateToken> = Vec::new();

    for piece in args.iter().flat_map(|arg| arg.as_ref().split(',')) {
        if let Some(token) = StateToken::new(piece)
            && !tokens.contains(&token)
        {
            tokens.push(token);
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(args: &[&str]) -> Vec<String> {
        normalize_states(args)
            .iter()
            .map(|t| t.encoded().to_string())
            .collect()
    }

    #[test]
    fn test_comma_joined_argument() {
        assert_eq!(
            encoded(&["New York,Rhode Island"]),
            vec!["new%20york", "rhode%20island"]
        );
    }

    #[test]
    fn test_separate_arguments() {
        assert_eq!(
            encoded(&["Texas,", " Ohio ", "north  carolina"]),
            vec!["texas", "ohio", "north%20carolina"]
        );
    }

    #[test]
    fn test_multi_word_prefixes_encode_space() {
        let names = [
            "New Mexico",
            "North Dakota",
            "South Carolina",
            "West Virginia",
            "Rhode Island",
        ];
        for (name, token) in names.iter().zip(normalize_states(&names)) {
            let root = name.split(' ').next().unwrap().to_lowercase();
            assert!(
                token.encoded().starts_with(&format!("{}%20", root)),
                "{} encoded as {}",
                name,
                token.encoded()
            );
            assert_eq!(token.name(), name.to_lowercase());
        }
    }

    #[test]
    fn test_other_multi_word_names_also_encode() {
        assert_eq!(
            encoded(&["District of Columbia"]),
            vec!["district%20of%20columbia"]
        );
    }

    #[test]
    fn test_empty_and_duplicate_pieces_dropped() {
        assert_eq!(encoded(&[",, ,texas,,TEXAS, ohio"]), vec!["texas", "ohio"]);
        assert!(normalize_states::<&str>(&[]).is_empty());
        assert!(normalize_states(&[" , "]).is_empty());
    }

    #[test]
    fn test_path_separators_escaped() {
        let token = StateToken::new("a/b?c").unwrap();
        assert_eq!(token.encoded(), "a%2Fb%3Fc");
    }
}
