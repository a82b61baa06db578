//! Eloquent naming conventions.

use heck::ToSnakeCase;

/// Converts a stored attribute name into the name of its accessor method.
///
/// The first character is lower-cased, every character following an `_` is
/// upper-cased, and the `_` separators are dropped: `pirate_name` becomes
/// `pirateName`.
pub fn camelize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut upper = false;

    for (i, ch) in input.chars().enumerate() {
        if ch == '_' {
            upper = true;
            continue;
        }

        if i == 0 {
            out.extend(ch.to_lowercase());
        } else if upper {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }

        upper = false;
    }

    out
}

/// `pirateName` → `pirate_name`, `UserRole` → `user_role`.
pub fn snake(input: &str) -> String {
    input.to_snake_case()
}

/// Snake-cases an accessor method name into its attribute name.
///
/// Every upper-case ASCII letter that follows another character gets a `_`
/// in front of it, so acronyms split per letter and `camelize` reverses the
/// conversion: `userID` → `user_i_d` → `userID`.
pub fn snake_attribute(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);

    for (i, ch) in input.chars().filter(|ch| !ch.is_whitespace()).enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            out.push('_');
        }
        out.extend(ch.to_lowercase());
    }

    out
}

/// Returns the last path segment of a qualified identifier. Both `\` and `::`
/// separate segments.
pub fn short_name(identifier: &str) -> &str {
    identifier
        .rsplit(['\\', ':'])
        .next()
        .unwrap_or(identifier)
}

/// Plural form of a single lower-case word.
pub fn plural(word: &str) -> String {
    pluralizer::pluralize(word, 2, false)
}

/// Pluralizes the last `_`-separated word: `post_tag` → `post_tags`.
pub fn plural_last_word(input: &str) -> String {
    match input.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", plural(last)),
        None => plural(input),
    }
}

/// Default table for a model: the snake-cased short name with its last word
/// pluralized (`UserRole` → `user_roles`).
pub fn table_name(short: &str) -> String {
    plural_last_word(&snake(short))
}
