mod debug_info;
mod locale;
mod node;
mod style;
mod value;

pub use debug_info::DebugInfo;
pub use locale::LocaleInfo;
pub use node::{LinkNode, ListItemNode, ListNode, StaticNode, TextNode};
pub use style::{StyleFlags, StyleMark};
pub use value::{Value, Variables};
