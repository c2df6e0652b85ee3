//! Negative-keyword and negative-domain matching rules.
//!
//! Both predicates are case-insensitive plain-text matches, never regex.
//! They are shared by the keyword aggregator and the traffic aggregator.

/// True when none of the negative terms occur anywhere in the keyword
/// text. Substring match: a negative "google" removes
/// "best google alternatives".
pub fn is_keyword_clean(text: &str, negative_terms: &[String]) -> bool {
    let text = text.to_lowercase();
    !negative_terms
        .iter()
        .any(|neg| text.contains(&neg.to_lowercase()))
}

/// True when the domain equals a negative domain exactly or is one of its
/// subdomains (ends with `".{negative}"`).
///
/// Unlike the keyword filter this is never a bare substring match:
/// "notamazon.com" survives a negative "amazon.com", while
/// "shop.amazon.com" does not.
pub fn is_domain_excluded(domain: &str, negative_domains: &[String]) -> bool {
    let domain = domain.to_lowercase();
    negative_domains.iter().any(|neg| {
        let neg = neg.to_lowercase();
        domain == neg || domain.ends_with(&format!(".{}", neg))
    })
}
