//! The localized phrase table.

use std::collections::{BTreeMap, HashMap};
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::parser::ast::TemplateNode;
use crate::store::error::{LoadError, LoadWarning, ResolveError};
use crate::store::instantiate::instantiate;
use crate::types::{DebugInfo, LocaleInfo, StaticNode, Variables};

/// Signature of a code-authored phrase entry.
pub type EntryFn = Arc<dyn Fn(&Variables) -> Vec<StaticNode> + Send + Sync>;

/// One locale's content for one phrase key.
///
/// Entries behave as functions of the caller's variables. A template entry
/// comes from an authored document; a function entry is supplied in code.
/// Either way, every invocation builds a fresh tree.
#[derive(Clone)]
pub enum PhraseEntry {
    Template(Arc<[TemplateNode]>),
    Function(EntryFn),
}

impl PhraseEntry {
    /// Wraps a closure as an entry.
    pub fn from_fn(f: impl Fn(&Variables) -> Vec<StaticNode> + Send + Sync + 'static) -> Self {
        PhraseEntry::Function(Arc::new(f))
    }

    /// Wraps compiled template nodes as an entry.
    pub fn from_template(nodes: Vec<TemplateNode>) -> Self {
        PhraseEntry::Template(nodes.into())
    }

    /// Produces the node tree for one invocation.
    pub fn invoke(&self, key: &str, variables: &Variables) -> Result<Vec<StaticNode>, ResolveError> {
        match self {
            PhraseEntry::Template(nodes) => instantiate(key, nodes, variables),
            PhraseEntry::Function(f) => Ok(f(variables)),
        }
    }
}

impl Debug for PhraseEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PhraseEntry::Template(nodes) => f.debug_tuple("Template").field(nodes).finish(),
            PhraseEntry::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// Localized phrases for every declared locale, plus the debug-info index.
///
/// A table is immutable once it is handed to a
/// [`LocaleStore`](crate::LocaleStore); live updates replace the whole table.
///
/// # Example
///
/// ```
/// use glossa::{LocaleInfo, PhraseEntry, PhraseTable, StaticNode};
///
/// let mut table = PhraseTable::new(vec![
///     LocaleInfo::new("EN", "English").global_default(),
/// ])
/// .unwrap();
/// table.insert("hello", "EN", PhraseEntry::from_fn(|_| vec![StaticNode::text("Hello!")]));
///
/// assert!(table.entry("hello", "EN").is_some());
/// assert_eq!(table.global_default().locale_code, "EN");
/// ```
#[derive(Debug, Clone)]
pub struct PhraseTable {
    repository_id: Option<String>,
    version: Option<String>,
    locales: Vec<LocaleInfo>,
    global_default: usize,
    /// phrase key -> locale code -> entry
    phrases: BTreeMap<String, HashMap<String, PhraseEntry>>,
    debug_info: HashMap<String, DebugInfo>,
}

impl PhraseTable {
    /// Creates an empty table over `locales`.
    ///
    /// Fails unless exactly one locale is the global default and all codes
    /// are distinct.
    pub fn new(locales: Vec<LocaleInfo>) -> Result<Self, LoadError> {
        let mut seen = Vec::with_capacity(locales.len());
        for locale in &locales {
            if seen.contains(&locale.locale_code.as_str()) {
                return Err(LoadError::DuplicateLocale {
                    code: locale.locale_code.clone(),
                });
            }
            seen.push(locale.locale_code.as_str());
        }

        let defaults: Vec<usize> = locales
            .iter()
            .enumerate()
            .filter(|(_, locale)| locale.is_global_default)
            .map(|(index, _)| index)
            .collect();
        let global_default = match defaults.as_slice() {
            [] => return Err(LoadError::NoGlobalDefault),
            [index] => *index,
            _ => {
                return Err(LoadError::MultipleGlobalDefaults {
                    codes: defaults
                        .iter()
                        .map(|index| locales[*index].locale_code.clone())
                        .collect(),
                });
            }
        };

        Ok(Self {
            repository_id: None,
            version: None,
            locales,
            global_default,
            phrases: BTreeMap::new(),
            debug_info: HashMap::new(),
        })
    }

    /// Sets the repository identifier used to match live updates.
    pub fn with_repository_id(mut self, repository_id: impl Into<String>) -> Self {
        self.repository_id = Some(repository_id.into());
        self
    }

    /// Sets the content version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn repository_id(&self) -> Option<&str> {
        self.repository_id.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Declared locales in document order.
    pub fn locales(&self) -> &[LocaleInfo] {
        &self.locales
    }

    /// Declared locale codes in document order.
    pub fn locale_codes(&self) -> Vec<String> {
        self.locales
            .iter()
            .map(|locale| locale.locale_code.clone())
            .collect()
    }

    pub fn locale(&self, code: &str) -> Option<&LocaleInfo> {
        self.locales.iter().find(|locale| locale.locale_code == code)
    }

    pub fn has_locale(&self, code: &str) -> bool {
        self.locale(code).is_some()
    }

    /// The locale every resolution chain ends at.
    pub fn global_default(&self) -> &LocaleInfo {
        &self.locales[self.global_default]
    }

    /// Adds or replaces the entry for `key` in `locale_code`.
    pub fn insert(&mut self, key: impl Into<String>, locale_code: impl Into<String>, entry: PhraseEntry) {
        self.phrases
            .entry(key.into())
            .or_default()
            .insert(locale_code.into(), entry);
    }

    /// Adds or replaces debug info for a phrase key.
    pub fn insert_debug_info(&mut self, key: impl Into<String>, info: DebugInfo) {
        self.debug_info.insert(key.into(), info);
    }

    pub fn entry(&self, key: &str, locale_code: &str) -> Option<&PhraseEntry> {
        self.phrases
            .get(key)
            .and_then(|entries| entries.get(locale_code))
    }

    pub fn debug_info(&self, key: &str) -> Option<&DebugInfo> {
        self.debug_info.get(key)
    }

    /// All phrase keys, sorted.
    pub fn phrase_keys(&self) -> impl Iterator<Item = &str> {
        self.phrases.keys().map(String::as_str)
    }

    /// Phrase keys with an entry in `locale_code`, sorted.
    pub fn keys_for_locale<'a>(&'a self, locale_code: &'a str) -> impl Iterator<Item = &'a str> {
        self.phrases
            .iter()
            .filter(move |(_, entries)| entries.contains_key(locale_code))
            .map(|(key, _)| key.as_str())
    }

    /// Checks the table for authoring problems that do not prevent use.
    pub fn validate(&self) -> Vec<LoadWarning> {
        let mut warnings = Vec::new();

        for locale in &self.locales {
            let Some(fallback) = &locale.default_fallback_code else {
                continue;
            };
            if !self.has_locale(fallback) {
                warnings.push(LoadWarning::UnknownFallback {
                    locale_code: locale.locale_code.clone(),
                    fallback_code: fallback.clone(),
                });
            }
        }

        let global_default = &self.global_default().locale_code;
        for (key, entries) in &self.phrases {
            if !entries.contains_key(global_default) {
                warnings.push(LoadWarning::MissingInGlobalDefault {
                    phrase_key: key.clone(),
                    global_default: global_default.clone(),
                });
            }
            if !self.debug_info.contains_key(key) {
                warnings.push(LoadWarning::MissingDebugInfo {
                    phrase_key: key.clone(),
                });
            }
        }

        warnings
    }
}
