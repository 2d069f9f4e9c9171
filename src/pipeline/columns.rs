/// Resolve the effective ordered column list: a requested name survives
/// unless any non-empty exclusion term occurs in it as a case-sensitive
/// substring. Order follows the requested list. Whether a name actually
/// exists in the header is resolved later, during coercion.
pub fn select(requested: &[String], exclude_terms: &[String]) -> Vec<String> {
    requested
        .iter()
        .filter(|name| {
            !exclude_terms
                .iter()
                .any(|term| !term.is_empty() && name.contains(term.as_str()))
        })
        .cloned()
        .collect()
}
