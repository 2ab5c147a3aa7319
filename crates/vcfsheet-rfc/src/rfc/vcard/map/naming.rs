//! Field names for dynamically named (extension and unknown) properties.

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
///
/// Non-alphabetic characters (spaces, digits, punctuation) start a new run.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}

/// Field name for a property name: hyphens become spaces, then title case.
///
/// `ANNIVERSARY` → `Anniversary`, `MS-IMADDRESS` → `Ms Imaddress`.
#[must_use]
pub fn dynamic_field_name(property: &str) -> String {
    title_case(&property.replace('-', " "))
}
