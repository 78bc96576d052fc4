//! Phrase storage, locale selection and resolution.

mod error;
mod instantiate;
mod locale_store;
mod resolver;
mod table;

pub use error::{LoadError, LoadWarning, ResolveError, compute_suggestions};
pub use locale_store::{LocaleSelection, LocaleStore, Resolved, StoreEvent, UpdateOutcome};
pub use resolver::{fallback_chain, find_entry, resolve};
pub use table::{EntryFn, PhraseEntry, PhraseTable};
