//! Identifier normalization for generated code.
//!
//! Two rules are kept deliberately separate:
//!
//! | Rule | Function | Example |
//! |------|----------|---------|
//! | strong | [`to_pascal_case`] / [`normalize`] | `prop_string` → `PropString` |
//! | weak | [`capitalize`] | `rootClass_name` → `RootClass_name` |
//!
//! The strong rule is used for property names, prefixes and suffixes, and the
//! output file name. The weak rule only upper-cases the first character and is
//! used for root class names taken from a file name or supplied by the caller.

/// Convert an arbitrary JSON key into a PascalCase identifier.
///
/// Every run of characters that are not letters or digits acts as a word
/// separator; the first character of each word is upper-cased and the rest is
/// kept as-is, so existing camel humps survive.
///
/// # Examples
///
/// ```
/// use json2dto::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("prop_string"), "PropString");
/// assert_eq!(to_pascal_case("rootClassName"), "RootClassName");
/// assert_eq!(to_pascal_case("content-type"), "ContentType");
/// assert_eq!(to_pascal_case("2fa"), "_2fa");
/// ```
pub fn to_pascal_case(raw: &str) -> String {
    let mut result: String = raw
        .split(|c: char| !c.is_alphanumeric())
        .map(capitalize)
        .collect();

    if result.is_empty() {
        return "_".to_string();
    }

    // identifiers may not start with a digit
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }

    result
}

/// Apply the strong rule and report whether the identifier changed.
///
/// The flag drives emission of the serialization-name attribute: a property
/// whose key is already a valid identifier needs no attribute.
///
/// # Examples
///
/// ```
/// use json2dto::naming::normalize;
///
/// assert_eq!(normalize("Name"), ("Name".to_string(), false));
/// assert_eq!(normalize("snake_name"), ("SnakeName".to_string(), true));
/// ```
pub fn normalize(raw: &str) -> (String, bool) {
    let normalized = to_pascal_case(raw);
    let changed = normalized != raw;
    (normalized, changed)
}

/// Upper-case the first character and pass the remainder through unchanged.
///
/// # Examples
///
/// ```
/// use json2dto::naming::capitalize;
///
/// assert_eq!(capitalize("rootClass"), "RootClass");
/// assert_eq!(capitalize("a"), "A");
/// assert_eq!(capitalize("my_file"), "My_file");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
