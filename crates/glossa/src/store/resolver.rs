//! Phrase resolution with locale fallback.

use tracing::debug;

use crate::store::error::{ResolveError, compute_suggestions};
use crate::store::table::{PhraseEntry, PhraseTable};
use crate::types::{StaticNode, Variables};

/// The ordered list of locale codes consulted for `locale_code`.
///
/// Starts at the requested code, follows `default_fallback_code` links and
/// ends at the global default. Links are followed across several hops, but
/// never more hops than there are locales and never to a code already in
/// the chain, so a cyclic table still yields a finite chain. Links to
/// undeclared codes end the walk.
///
/// # Example
///
/// ```
/// use glossa::{LocaleInfo, PhraseTable, fallback_chain};
///
/// let table = PhraseTable::new(vec![
///     LocaleInfo::new("EN", "English").global_default(),
///     LocaleInfo::new("FR", "Français").falls_back_to("EN"),
/// ])
/// .unwrap();
///
/// assert_eq!(fallback_chain(&table, "FR"), vec!["FR", "EN"]);
/// assert_eq!(fallback_chain(&table, "EN"), vec!["EN"]);
/// ```
pub fn fallback_chain(table: &PhraseTable, locale_code: &str) -> Vec<String> {
    let mut chain = vec![locale_code.to_string()];
    let max_hops = table.locales().len();
    let mut current = table.locale(locale_code);

    while let Some(locale) = current {
        if chain.len() > max_hops {
            break;
        }
        let Some(next) = locale.default_fallback_code.as_deref() else {
            break;
        };
        if chain.iter().any(|code| code == next) {
            break;
        }
        current = table.locale(next);
        if current.is_none() {
            break;
        }
        chain.push(next.to_string());
    }

    let global_default = &table.global_default().locale_code;
    if !chain.contains(global_default) {
        chain.push(global_default.clone());
    }
    chain
}

/// Finds the entry for `key`, returning it with the locale code it came from.
pub fn find_entry<'t>(
    table: &'t PhraseTable,
    locale_code: &str,
    key: &str,
) -> Result<(&'t PhraseEntry, String), ResolveError> {
    let chain = fallback_chain(table, locale_code);
    for code in &chain {
        if let Some(entry) = table.entry(key, code) {
            if code != locale_code {
                debug!(key, requested = locale_code, resolved = %code, "phrase resolved via fallback");
            }
            return Ok((entry, code.clone()));
        }
    }

    let available: Vec<String> = table.phrase_keys().map(str::to_string).collect();
    Err(ResolveError::MissingPhraseKey {
        key: key.to_string(),
        suggestions: compute_suggestions(key, &available),
        tried: chain,
    })
}

/// Resolves `key` for `locale_code` and instantiates it with `variables`.
///
/// # Errors
///
/// [`ResolveError::MissingPhraseKey`] if no locale in the fallback chain has
/// the key, or an instantiation error from the entry.
pub fn resolve(
    table: &PhraseTable,
    locale_code: &str,
    key: &str,
    variables: &Variables,
) -> Result<Vec<StaticNode>, ResolveError> {
    let (entry, _) = find_entry(table, locale_code, key)?;
    entry.invoke(key, variables)
}
