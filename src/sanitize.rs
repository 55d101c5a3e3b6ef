/// Characters that are dropped outright from titles
const RESERVED_CHARS: [char; 7] = ['/', '*', '?', '"', '<', '>', '|'];

/// Make a title safe to use as a file name.
///
/// Colons become `" -"`, reserved characters are removed and the result is
/// trimmed. Applying it twice gives the same result as applying it once.
pub fn sanitize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());

    for c in title.chars() {
        match c {
            ':' => out.push_str(" -"),
            c if RESERVED_CHARS.contains(&c) => {}
            c => out.push(c),
        }
    }

    out.trim().to_string()
}
