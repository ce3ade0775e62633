//! Property name → type identifier.
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static SNAKE_CASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]+(_[a-z]+)*$").unwrap());
static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

pub fn is_snake_case(name: &str) -> bool {
    SNAKE_CASE.is_match(name)
}

/// Whether `name` can be written as a bare TypeScript property key.
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// PascalCase type name for a property key.
///
/// snake_case keys are split on `_` and each segment capitalised
/// (`user_name` → `UserName`). Anything else only gets its first character
/// upper-cased, leaving interior casing alone (`userName` → `UserName`).
pub fn derive_name(props_name: &str) -> String {
    if props_name.is_empty() {
        return String::new();
    }
    if is_snake_case(props_name) {
        return props_name.split('_').map(capitalize_word).collect();
    }
    capitalize_first(props_name)
}

/// [`derive_name`] made safe to use as a declaration name.
///
/// Characters that cannot appear in an identifier split the name and each
/// piece is capitalised (`x-trace` → `XTrace`); a leading digit gets a `_`
/// prefix (`2nd` → `_2nd`). Keys with nothing usable left become `_`.
pub fn type_name(props_name: &str) -> String {
    let mut name: String = derive_name(props_name)
        .split(|c: char| !is_identifier_char(c))
        .filter(|piece| !piece.is_empty())
        .map(capitalize_first)
        .collect();
    if name.is_empty() || name.starts_with(|c: char| c.is_numeric()) {
        name.insert(0, '_');
    }
    name
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Hands out hoisted type names for one inference call.
///
/// With `unique` off every request is returned verbatim, so two different
/// shapes bound to the same key end up sharing an identifier. With `unique`
/// on, repeats get a numeric suffix starting at 2.
#[derive(Debug, Default)]
pub struct NameTable {
    unique: bool,
    seen: HashMap<String, usize>,
}

impl NameTable {
    pub fn new(unique: bool) -> Self {
        Self { unique, seen: HashMap::new() }
    }

    /// Mark `name` as taken without handing it out.
    pub fn reserve(&mut self, name: &str) {
        if self.unique {
            *self.seen.entry(name.to_owned()).or_insert(0) += 1;
        }
    }

    pub fn claim(&mut self, name: String) -> String {
        if !self.unique {
            return name;
        }
        let mut candidate = name.clone();
        loop {
            let count = self.seen.entry(candidate.clone()).or_insert(0);
            *count += 1;
            if *count == 1 {
                return candidate;
            }
            // `User2` may itself already be taken by a literal `user2` key
            candidate = format!("{name}{}", *count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_name_examples() {
        assert_eq!(derive_name("user_name"), "UserName");
        assert_eq!(derive_name("userName"), "UserName");
        assert_eq!(derive_name("UserName"), "UserName");
        assert_eq!(derive_name("list"), "List");
        assert_eq!(derive_name(""), "");
        assert_eq!(derive_name("a_b_c"), "ABC");
    }

    #[test]
    fn non_snake_inputs_keep_interior_casing() {
        // uppercase letters or digits disqualify snake_case
        assert_eq!(derive_name("user_ID"), "User_ID");
        assert_eq!(derive_name("item_2"), "Item_2");
        assert_eq!(derive_name("_private"), "_private");
        assert_eq!(derive_name("éclair"), "Éclair");
    }

    #[test]
    fn type_names_are_valid_identifiers() {
        assert_eq!(type_name("user_name"), "UserName");
        assert_eq!(type_name("x-trace"), "XTrace");
        assert_eq!(type_name("content-type.v2"), "ContentTypeV2");
        assert_eq!(type_name("2nd"), "_2nd");
        assert_eq!(type_name("my key"), "MyKey");
        assert_eq!(type_name("$ref"), "$ref");
        assert_eq!(type_name("éclair"), "Éclair");
        assert_eq!(type_name("--"), "_");
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("userName"));
        assert!(is_identifier("$ref"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier("foo-bar"));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn name_table_passthrough_allows_duplicates() {
        let mut names = NameTable::new(false);
        assert_eq!(names.claim("User".into()), "User");
        assert_eq!(names.claim("User".into()), "User");
    }

    #[test]
    fn name_table_uniquifies_on_request() {
        let mut names = NameTable::new(true);
        assert_eq!(names.claim("User".into()), "User");
        assert_eq!(names.claim("User".into()), "User2");
        assert_eq!(names.claim("User2".into()), "User22");
        assert_eq!(names.claim("User".into()), "User3");
    }
}
