//! Quote-aware splitting of list-valued CSV fields.

/// Splits a comma-separated field into trimmed items, keeping commas that
/// appear inside double quotes.
///
/// The scan toggles an in-quotes flag on every `"` seen — a deliberate
/// simplification over RFC 4180 (no doubled-quote escaping). A comma only
/// separates items while the flag is off, so a quoted item spanning the
/// whole remainder of the field is never split. Empty items are dropped
/// after trimming. Unbalanced quotes never fail: the flag just ends in
/// whatever state the input leaves it.
///
/// # Examples
///
/// ```
/// use blend_sheet::split_quoted;
///
/// assert_eq!(split_quoted(r#"cat,"mat, sat",pin"#), vec!["cat", r#""mat, sat""#, "pin"]);
/// ```
pub fn split_quoted(input: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in input.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            },
            ',' if !in_quotes => {
                push_trimmed(&mut items, &current);
                current.clear();
            },
            _ => current.push(ch),
        }
    }
    push_trimmed(&mut items, &current);
    items
}

fn push_trimmed(items: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        items.push(trimmed.to_string());
    }
}

/// Splits a `;`-separated list column into trimmed, non-empty items.
///
/// Inner lists (GPCs, HFWs, audio URLs) use semicolons precisely so that
/// they never collide with the sheet's top-level comma delimiter.
pub(crate) fn split_semicolons(input: &str) -> Vec<String> {
    input.split(';').map(str::trim).filter(|item| !item.is_empty()).map(str::to_string).collect()
}

/// Removes one surrounding quote pair, or a single stray leading or
/// trailing quote, from an item produced by [`split_quoted`].
pub(crate) fn strip_outer_quotes(item: &str) -> &str {
    let item = item.strip_prefix('"').unwrap_or(item);
    item.strip_suffix('"').unwrap_or(item)
}
