/// Convert a Go method name into its export name.
///
/// A word boundary goes before every uppercase letter that follows a
/// letter or digit, so capital runs split letter by letter:
/// `SendMessage` -> `send_message`, `PDFLoad` -> `p_d_f_load`.
pub fn to_snake_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut previous: Option<char> = None;

    for ch in name.chars() {
        if ch.is_uppercase() {
            if let Some(prev) = previous {
                if prev.is_lowercase() || prev.is_numeric() || prev.is_uppercase() {
                    result.push('_');
                }
            }
        }
        result.extend(ch.to_lowercase());
        previous = Some(ch);
    }

    result
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
