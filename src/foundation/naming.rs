//! Loose-casing aliases for component type names.

/// Kebab-case form of a PascalCase type name.
///
/// Splits before an uppercase letter that follows a lowercase letter or digit, and before the last
/// capital of an acronym that is followed by a lowercase letter (`InputOTPGroup` -> `input-otp-group`).
pub(crate) fn kebab_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();

    let mut pass1 = Vec::with_capacity(chars.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 {
            let prev = chars[i - 1];
            if (prev.is_ascii_lowercase() || prev.is_ascii_digit()) && c.is_ascii_uppercase() {
                pass1.push('-');
            }
        }
        pass1.push(c);
    }

    let mut out = String::with_capacity(pass1.len() + 4);
    let mut i = 0;
    while i < pass1.len() {
        let c = pass1[i];
        if c.is_ascii_uppercase()
            && i + 2 < pass1.len()
            && pass1[i + 1].is_ascii_uppercase()
            && pass1[i + 2].is_ascii_lowercase()
        {
            out.push(c);
            out.push('-');
            out.push(pass1[i + 1]);
            out.push(pass1[i + 2]);
            i += 3;
            continue;
        }
        out.push(c);
        i += 1;
    }

    out.to_lowercase()
}

/// Whether `name` can be written as an HTML attribute name.
///
/// Accepts `[A-Za-z_:][-A-Za-z0-9_:.]*`, minus inline event handlers (`on*`, any case).
pub(crate) fn is_attr_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == ':') {
        return false;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')) {
        return false;
    }
    !name.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("on"))
}

/// Aliases registered next to a generic renderer: lowercase, then kebab-case.
///
/// Forms equal to `name` itself or to an earlier alias are dropped.
pub fn derive_aliases(name: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(2);
    for alias in [name.to_lowercase(), kebab_case(name)] {
        if alias != name && !out.contains(&alias) {
            out.push(alias);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/naming.rs"]
mod tests;
