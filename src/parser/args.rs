use std::collections::HashMap;

pub const PREFIX_NAME: &str = "n/";
pub const PREFIX_PHONE: &str = "p/";
pub const PREFIX_EMAIL: &str = "e/";
pub const PREFIX_ADDRESS: &str = "a/";
pub const PREFIX_CURRENT_POSITION: &str = "cp/";
pub const PREFIX_COMPANY: &str = "c/";
pub const PREFIX_PROFILE_PICTURE: &str = "pp/";
pub const PREFIX_TAG: &str = "t/";
pub const PREFIX_JOB_TITLE: &str = "j/";
pub const PREFIX_LOCATION: &str = "l/";
pub const PREFIX_SKILL: &str = "s/";
pub const PREFIX_USERNAME: &str = "u/";
pub const PREFIX_PASSWORD: &str = "pw/";

/// Values collected per prefix, plus the text before the first prefix.
#[derive(Debug, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<&'static str, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: &str) -> Option<&str> {
        self.values
            .get(prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: &str) -> Vec<&str> {
        self.values
            .get(prefix)
            .map(|v| v.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn has(&self, prefix: &str) -> bool {
        self.values.contains_key(prefix)
    }
}

/// Splits `args` on the given prefixes. A prefix only counts when it starts
/// the string or follows whitespace, so `p/` never matches inside `pp/`.
pub fn tokenize(args: &str, prefixes: &[&'static str]) -> ArgumentMultimap {
    let padded = format!(" {}", args);

    let mut positions: Vec<(usize, &'static str)> = Vec::new();
    for &prefix in prefixes {
        let mut from = 0;
        while let Some(found) = padded[from..].find(prefix) {
            let at = from + found;
            let preceded_by_space = padded[..at]
                .chars()
                .next_back()
                .map(char::is_whitespace)
                .unwrap_or(false);
            if preceded_by_space {
                positions.push((at, prefix));
            }
            from = at + prefix.len();
        }
    }
    positions.sort_by_key(|(at, _)| *at);

    let preamble_end = positions.first().map(|(at, _)| *at).unwrap_or(padded.len());
    let mut map = ArgumentMultimap {
        preamble: padded[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (at, prefix)) in positions.iter().enumerate() {
        let start = at + prefix.len();
        let end = positions.get(i + 1).map(|(next, _)| *next).unwrap_or(padded.len());
        let value = padded[start..end].trim().to_string();
        map.values.entry(*prefix).or_default().push(value);
    }

    map
}
