//! Identifier case conversion.

/// Convert a C identifier to PascalCase.
///
/// Words are split on `_`, `-` and `.`. Empty words from leading, trailing or
/// doubled separators are dropped, so `__reserved` becomes `Reserved`. Each
/// word is capitalized. All-caps words are lowercased after their first letter,
/// while words that already contain lowercase keep their case.
///
/// # Examples
/// ```
/// use btfgen_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("rx_packets"), "RxPackets");
/// assert_eq!(to_pascal_case("MAX_ENTRIES"), "MaxEntries");
/// assert_eq!(to_pascal_case("rxPackets"), "RxPackets");
/// assert_eq!(to_pascal_case(".rodata"), "Rodata");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', '.'])
        .filter(|word| !word.is_empty())
        .map(capitalize_word)
        .collect()
}

fn capitalize_word(word: &str) -> String {
    let has_lowercase = word.chars().any(|c| c.is_ascii_lowercase());
    let mut chars = word.chars();
    let mut out = String::with_capacity(word.len());

    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
    }
    if has_lowercase {
        out.extend(chars);
    } else {
        out.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
    out
}
