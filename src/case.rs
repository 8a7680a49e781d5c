use std::borrow::Cow;

/// Lowercases `value`, borrowing it untouched when nothing needs to change.
pub(crate) fn normalize_lower(value: &str) -> Cow<'_, str> {
    if value.is_ascii() {
        if value.bytes().any(|byte| byte.is_ascii_uppercase()) {
            Cow::Owned(value.to_ascii_lowercase())
        } else {
            Cow::Borrowed(value)
        }
    } else if value.chars().any(char::is_uppercase) {
        Cow::Owned(value.to_lowercase())
    } else {
        Cow::Borrowed(value)
    }
}

/// Uppercases `value`, borrowing it untouched when nothing needs to change.
pub(crate) fn normalize_upper(value: &str) -> Cow<'_, str> {
    if value.is_ascii() {
        if value.bytes().any(|byte| byte.is_ascii_lowercase()) {
            Cow::Owned(value.to_ascii_uppercase())
        } else {
            Cow::Borrowed(value)
        }
    } else if value.chars().any(char::is_lowercase) {
        Cow::Owned(value.to_uppercase())
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
#[path = "case_test.rs"]
mod case_test;
