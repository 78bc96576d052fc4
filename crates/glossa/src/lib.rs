pub mod parser;
pub mod render;
pub mod store;
pub mod types;

pub use render::plain::renderers as plain_renderers;
pub use render::rich::{RenderContext, RichNode, renderers as rich_renderers};
pub use render::{DebugFlag, Renderers};
pub use store::{
    LoadError, LoadWarning, LocaleSelection, LocaleStore, PhraseEntry, PhraseTable, ResolveError,
    Resolved, StoreEvent, UpdateOutcome, compute_suggestions, fallback_chain, resolve,
};
pub use types::{
    DebugInfo, LinkNode, ListItemNode, ListNode, LocaleInfo, StaticNode, StyleFlags, StyleMark,
    TextNode, Value, Variables,
};

/// Creates a [`Variables`] map from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, strings and node
/// fragments can be passed directly.
///
/// # Example
///
/// ```
/// use glossa::{StaticNode, vars};
///
/// let v = vars! { "count" => 3, "name" => "Ada", "slot" => StaticNode::text("!") };
/// assert_eq!(v.len(), 3);
/// assert_eq!(v["count"].as_number(), Some(3));
/// assert_eq!(v["name"].as_text(), Some("Ada"));
/// ```
#[macro_export]
macro_rules! vars {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
