//! Canonical column naming.
//!
//! Raw dataset headers arrive in mixed case with spaces ("Average Cost for two",
//! "Restaurant ID"). Every header is rewritten the same way: each word is
//! title-cased, the words are joined without spaces, and the result is converted
//! to `snake_case`. The transform is idempotent, so already-canonical names pass
//! through unchanged.

use heck::ToSnakeCase;

pub fn normalize_header(name: &str) -> String {
    let joined = name
        .split_whitespace()
        .map(titleize_word)
        .collect::<String>();
    joined.to_snake_case()
}

pub fn normalize_headers(headers: &[String]) -> Vec<String> {
    headers.iter().map(|h| normalize_header(h)).collect()
}

fn titleize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
