//! Process-wide locale selection and the published phrase table.
//!
//! The store owns the current [`PhraseTable`] as an immutable snapshot behind
//! an `Arc`. Readers clone the `Arc` and keep resolving against it even if a
//! live update swaps in a new table meanwhile; a swap replaces the reference
//! and never mutates a published table.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bon::bon;
use tracing::{debug, info, warn};

use crate::store::error::{LoadError, LoadWarning, ResolveError};
use crate::store::resolver::find_entry;
use crate::store::table::PhraseTable;
use crate::types::{DebugInfo, LocaleInfo, StaticNode, Variables};

/// Result of [`LocaleStore::get_locales`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSelection {
    pub locale_codes: Vec<String>,
    pub locales: Vec<LocaleInfo>,
    pub selected_locale_code: String,
}

/// Notifications delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A new table was published.
    TableReplaced { version: Option<String> },
    /// The active locale changed.
    LocaleSelected { locale_code: String },
}

/// What [`LocaleStore::accept_update`] did with a pushed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The table was swapped.
    Replaced { warnings: Vec<LoadWarning> },
    /// The document carries the version already published.
    Unchanged,
    /// The document belongs to another repository and was ignored.
    ForeignRepository {
        expected: String,
        received: Option<String>,
    },
}

/// A phrase resolved against one table snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// Freshly built tree for this invocation.
    pub nodes: Vec<StaticNode>,
    /// Locale whose entry produced `nodes`.
    pub locale_code: String,
    /// Provenance for the debug overlay. Phrases missing from the table's
    /// debug index get an empty group name and the invoked key.
    pub debug_info: DebugInfo,
}

type Listener = Arc<dyn Fn(&StoreEvent) + Send + Sync>;

struct State {
    table: Arc<PhraseTable>,
    selected: String,
    source_path: Option<PathBuf>,
}

/// Holds the phrase table and the active locale for a client session.
///
/// # Example
///
/// ```
/// use glossa::{LocaleInfo, LocaleStore, PhraseEntry, PhraseTable, StaticNode, vars};
///
/// let mut table = PhraseTable::new(vec![
///     LocaleInfo::new("EN", "English").global_default(),
///     LocaleInfo::new("FR", "Français").falls_back_to("EN"),
/// ])
/// .unwrap();
/// table.insert("hello", "EN", PhraseEntry::from_fn(|_| vec![StaticNode::text("Hello")]));
///
/// let store = LocaleStore::builder().table(table).preferred_locale("FR").build();
/// assert_eq!(store.selected_locale_code(), "FR");
///
/// let resolved = store.resolve("hello", &vars! {}).unwrap();
/// assert_eq!(resolved.locale_code, "EN");
/// ```
pub struct LocaleStore {
    state: RwLock<State>,
    listeners: RwLock<Vec<Listener>>,
}

#[bon]
impl LocaleStore {
    /// Creates a store over `table`.
    ///
    /// `preferred_locale` seeds the active locale when the table declares it;
    /// otherwise the table's global default does.
    #[builder]
    pub fn new(table: PhraseTable, #[builder(into)] preferred_locale: Option<String>) -> Self {
        let selected = match preferred_locale {
            Some(code) if table.has_locale(&code) => code,
            Some(code) => {
                debug!(requested = %code, "preferred locale not in table, using global default");
                table.global_default().locale_code.clone()
            }
            None => table.global_default().locale_code.clone(),
        };
        Self {
            state: RwLock::new(State {
                table: Arc::new(table),
                selected,
                source_path: None,
            }),
            listeners: RwLock::new(Vec::new()),
        }
    }
}

impl LocaleStore {
    /// Loads a document from disk and remembers its path for [`reload`](Self::reload).
    pub fn from_path(
        path: impl AsRef<Path>,
        preferred_locale: Option<String>,
    ) -> Result<(Self, Vec<LoadWarning>), LoadError> {
        let path = path.as_ref();
        let (table, warnings) = PhraseTable::from_json_file(path)?;
        let store = Self::builder()
            .table(table)
            .maybe_preferred_locale(preferred_locale)
            .build();
        store.write_state().source_path = Some(path.to_path_buf());
        Ok((store, warnings))
    }

    fn read_state(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // Locale Selection
    // =========================================================================

    /// The current table.
    ///
    /// The returned `Arc` stays valid and unchanged across later swaps.
    pub fn snapshot(&self) -> Arc<PhraseTable> {
        Arc::clone(&self.read_state().table)
    }

    pub fn selected_locale_code(&self) -> String {
        self.read_state().selected.clone()
    }

    /// Locale codes, locale records and the active code.
    pub fn get_locales(&self) -> LocaleSelection {
        let state = self.read_state();
        LocaleSelection {
            locale_codes: state.table.locale_codes(),
            locales: state.table.locales().to_vec(),
            selected_locale_code: state.selected.clone(),
        }
    }

    /// Makes `code` the active locale.
    ///
    /// An undeclared code selects the global default instead. Returns the
    /// code actually selected. Nothing is re-rendered; subscribers are told.
    pub fn select_locale(&self, code: &str) -> String {
        let selected = {
            let mut state = self.write_state();
            let selected = if state.table.has_locale(code) {
                code.to_string()
            } else {
                let fallback = state.table.global_default().locale_code.clone();
                debug!(requested = code, fallback = %fallback, "unknown locale, selecting global default");
                fallback
            };
            state.selected = selected.clone();
            selected
        };
        self.notify(&StoreEvent::LocaleSelected {
            locale_code: selected.clone(),
        });
        selected
    }

    /// Alias of [`select_locale`](Self::select_locale) matching the host API.
    pub fn set_selected_locale_code(&self, code: &str) -> String {
        self.select_locale(code)
    }

    // =========================================================================
    // Table Replacement
    // =========================================================================

    /// Publishes `table`, replacing the current one.
    ///
    /// Keeps the active locale if the new table declares it, otherwise moves
    /// to the new global default.
    pub fn replace_table(&self, table: PhraseTable) {
        let version = table.version().map(str::to_string);
        swap_table(&mut self.write_state(), table);
        self.published(version);
    }

    /// Accepts a document pushed over the live-update channel.
    ///
    /// The repository and version checks and the swap happen under one write
    /// lock, so concurrent pushes of the same version replace the table once.
    pub fn accept_update(&self, json: &str) -> Result<UpdateOutcome, LoadError> {
        let (table, warnings) = PhraseTable::from_json_str(json)?;
        let version = table.version().map(str::to_string);
        {
            let mut state = self.write_state();
            let current = &state.table;

            if let Some(expected) = current.repository_id() {
                if table.repository_id() != Some(expected) {
                    debug!(expected, received = ?table.repository_id(), "ignoring update for another repository");
                    return Ok(UpdateOutcome::ForeignRepository {
                        expected: expected.to_string(),
                        received: table.repository_id().map(str::to_string),
                    });
                }
            }
            if current.version().is_some() && current.version() == table.version() {
                return Ok(UpdateOutcome::Unchanged);
            }

            swap_table(&mut state, table);
        }

        self.published(version);
        Ok(UpdateOutcome::Replaced { warnings })
    }

    /// Re-reads the document this store was loaded from.
    pub fn reload(&self) -> Result<Vec<LoadWarning>, LoadError> {
        let path = self
            .read_state()
            .source_path
            .clone()
            .ok_or(LoadError::NoPathForReload)?;
        let (table, warnings) = PhraseTable::from_json_file(&path)?;
        self.replace_table(table);
        Ok(warnings)
    }

    // =========================================================================
    // Subscribers
    // =========================================================================

    /// Registers a callback for store events.
    ///
    /// Callbacks run on the thread that caused the event, after the store's
    /// lock is released.
    pub fn subscribe(&self, listener: impl Fn(&StoreEvent) + Send + Sync + 'static) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    fn published(&self, version: Option<String>) {
        info!(version = ?version, "phrase table replaced");
        self.notify(&StoreEvent::TableReplaced { version });
    }

    fn notify(&self, event: &StoreEvent) {
        let listeners: Vec<Listener> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in listeners {
            listener(event);
        }
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolves `key` in the active locale.
    pub fn resolve(&self, key: &str, variables: &Variables) -> Result<Resolved, ResolveError> {
        let (table, selected) = {
            let state = self.read_state();
            (Arc::clone(&state.table), state.selected.clone())
        };
        resolve_snapshot(&table, &selected, key, variables)
    }

    /// Resolves `key` in an explicit locale.
    pub fn resolve_in(
        &self,
        locale_code: &str,
        key: &str,
        variables: &Variables,
    ) -> Result<Resolved, ResolveError> {
        resolve_snapshot(&self.snapshot(), locale_code, key, variables)
    }
}

fn swap_table(state: &mut State, table: PhraseTable) {
    if !table.has_locale(&state.selected) {
        let fallback = table.global_default().locale_code.clone();
        warn!(
            selected = %state.selected,
            fallback = %fallback,
            "selected locale missing from new table"
        );
        state.selected = fallback;
    }
    state.table = Arc::new(table);
}

fn resolve_snapshot(
    table: &PhraseTable,
    locale_code: &str,
    key: &str,
    variables: &Variables,
) -> Result<Resolved, ResolveError> {
    let (entry, resolved_code) = find_entry(table, locale_code, key)?;
    Ok(Resolved {
        nodes: entry.invoke(key, variables)?,
        locale_code: resolved_code,
        debug_info: table.debug_info(key).cloned().unwrap_or_else(|| {
            debug!(key, "phrase has no debug info, using an ungrouped entry");
            DebugInfo::new("", key)
        }),
    })
}
