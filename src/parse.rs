//! Composite benchmark name decoding.
//!
//! The harness names each run `test<structure>/size`, where `structure` may
//! itself carry nested template arguments and `size` is the input-scale token
//! (e.g. `testAccess<std::vector<int>>/1024` or `testPushBack<std::list<int>>/4k`).

use crate::error::NameError;

/// The three components of a composite benchmark name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName<'a> {
    /// Test name: everything before the first `<`.
    pub test: &'a str,
    /// Structure name: everything between the outermost angle brackets.
    pub structure: &'a str,
    /// Size token: everything after the last `/`.
    pub size: &'a str,
}

/// Split a composite name on the first `<`, the last `>`, and the last `/`.
///
/// Nested templates are handled by taking the outermost bracket pair, so the
/// structure component keeps its own template arguments intact.
pub fn split_name(name: &str) -> Result<ParsedName<'_>, NameError> {
    let open = name
        .find('<')
        .ok_or_else(|| NameError::MissingTemplateOpen(name.to_string()))?;
    let close = name
        .rfind('>')
        .ok_or_else(|| NameError::MissingTemplateClose(name.to_string()))?;
    let slash = name
        .rfind('/')
        .ok_or_else(|| NameError::MissingSizeSeparator(name.to_string()))?;
    if close < open {
        return Err(NameError::InvertedTemplateBrackets(name.to_string()));
    }

    Ok(ParsedName {
        test: &name[..open],
        structure: &name[open + 1..close],
        size: &name[slash + 1..],
    })
}

/// Decode a size token: a trailing `k` multiplies by 1024, a trailing `M` by
/// 1024 * 1024, anything else must be a plain integer.
pub fn decode_size(token: &str) -> Result<u64, NameError> {
    let bad = || NameError::BadSizeToken(token.to_string());

    if let Some(digits) = token.strip_suffix('k') {
        let n: u64 = digits.parse().map_err(|_| bad())?;
        n.checked_mul(1024).ok_or_else(bad)
    } else if let Some(digits) = token.strip_suffix('M') {
        let n: u64 = digits.parse().map_err(|_| bad())?;
        n.checked_mul(1024 * 1024).ok_or_else(bad)
    } else {
        token.parse().map_err(|_| bad())
    }
}

/// The template parameter of a structure name: the content between its
/// outermost angle brackets (`std::vector<int>` -> `int`).
///
/// Callers only pass structure names that came out of [`split_name`], which
/// guarantees the brackets exist for names containing `<`.
pub fn template_parameter(structure: &str) -> &str {
    match (structure.find('<'), structure.rfind('>')) {
        (Some(open), Some(close)) if open < close => &structure[open + 1..close],
        _ => structure,
    }
}
