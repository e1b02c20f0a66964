use crate::utils::error::{Result, RowRosterError};

/// Contract text for [`find_first_names`], kept as data so tooling can
/// read it without parsing rustdoc.
pub const FIND_FIRST_NAMES_DOC: &str = "Returns the first names of the people in a roster.\n\
---\n\
names: list of full names ('firstname lastname ...')\n\
output: sorted list of capitalized first names";

/// First whitespace-separated token of `name`, if there is one.
pub fn first_token(name: &str) -> Option<&str> {
    name.split_whitespace().next()
}

/// Uppercases the first character and lowercases the rest.
///
/// Internal capitals are flattened: `"McDonald"` becomes `"Mcdonald"`.
pub fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Extracts, capitalizes and sorts the first name of every roster entry.
///
/// An entry with no token at all (empty or whitespace-only) is an error:
/// the whole call fails with [`RowRosterError::EmptyName`] carrying the
/// entry's index.
pub fn find_first_names<S: AsRef<str>>(names: &[S]) -> Result<Vec<String>> {
    let mut first_names = names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            first_token(name.as_ref())
                .map(capitalize)
                .ok_or(RowRosterError::EmptyName { index })
        })
        .collect::<Result<Vec<_>>>()?;

    first_names.sort();
    Ok(first_names)
}
