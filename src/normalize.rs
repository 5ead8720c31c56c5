/// Strip formatting separators from a raw card number.
///
/// Removes every `-` and every space; all other characters pass through
/// unchanged, including non-digits (the validator rejects those later).
/// Idempotent, never fails, empty input comes back empty.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch != '-' && ch != ' ' {
            out.push(ch);
        }
    }
    out
}
