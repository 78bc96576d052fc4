use serde::{Deserialize, Serialize};

/// One entry of the locale table.
///
/// Exactly one locale in a table is the global default; every resolution
/// chain ends there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub locale_code: String,
    pub name: String,
    #[serde(default)]
    pub default_fallback_code: Option<String>,
    #[serde(default)]
    pub is_global_default: bool,
}

impl LocaleInfo {
    /// A non-default locale with no fallback.
    pub fn new(locale_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            locale_code: locale_code.into(),
            name: name.into(),
            default_fallback_code: None,
            is_global_default: false,
        }
    }

    /// Marks this locale as the global default.
    pub fn global_default(mut self) -> Self {
        self.is_global_default = true;
        self
    }

    /// Sets the locale consulted when a phrase is missing here.
    pub fn falls_back_to(mut self, code: impl Into<String>) -> Self {
        self.default_fallback_code = Some(code.into());
        self
    }
}
