//! Loader for content documents produced by the authoring pipeline.
//!
//! A document is JSON:
//!
//! ```json
//! {
//!   "repositoryId": "site",
//!   "version": "42",
//!   "locales": [{ "localeCode": "EN", "name": "English", "isGlobalDefault": true }],
//!   "phrases": {
//!     "greeting": {
//!       "EN": [{ "type": "text", "content": "Hello, {$name}", "styles": { "isBold": true } }]
//!     }
//!   },
//!   "debugInfo": { "greeting": { "groupName": "main", "phraseKey": "greeting" } }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use super::ast::{LinkTemplate, Template, TemplateNode, TextTemplate};
use super::error::ParseError;
use super::template::parse_template;
use crate::store::{LoadError, LoadWarning, PhraseEntry, PhraseTable};
use crate::types::{DebugInfo, LocaleInfo, StyleFlags};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    #[serde(default)]
    repository_id: Option<String>,
    #[serde(default)]
    version: Option<String>,
    locales: Vec<LocaleInfo>,
    #[serde(default)]
    phrases: BTreeMap<String, BTreeMap<String, Vec<RawNode>>>,
    #[serde(default)]
    debug_info: BTreeMap<String, DebugInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum RawNode {
    #[serde(rename = "text")]
    Text {
        #[serde(default)]
        content: String,
        #[serde(default)]
        children: Vec<RawNode>,
        #[serde(default)]
        styles: StyleFlags,
    },
    #[serde(rename = "link")]
    Link {
        href: String,
        #[serde(default)]
        content: String,
        #[serde(default)]
        children: Vec<RawNode>,
        #[serde(default)]
        styles: StyleFlags,
        #[serde(default, rename = "linkName")]
        link_name: Option<String>,
    },
    #[serde(rename = "li")]
    ListItem {
        #[serde(default)]
        children: Vec<RawNode>,
    },
    #[serde(rename = "ul")]
    UnorderedList {
        #[serde(default)]
        children: Vec<RawNode>,
    },
    #[serde(rename = "ol")]
    OrderedList {
        #[serde(default)]
        children: Vec<RawNode>,
    },
    #[serde(other)]
    Unknown,
}

impl PhraseTable {
    /// Parses a content document.
    ///
    /// Returns the table together with every [`LoadWarning`] found; each
    /// warning is also logged.
    ///
    /// # Example
    ///
    /// ```
    /// use glossa::PhraseTable;
    ///
    /// let (table, warnings) = PhraseTable::from_json_str(r#"{
    ///     "locales": [{ "localeCode": "EN", "name": "English", "isGlobalDefault": true }],
    ///     "phrases": { "hello": { "EN": [{ "type": "text", "content": "Hello!" }] } },
    ///     "debugInfo": { "hello": { "groupName": "main", "phraseKey": "hello" } }
    /// }"#).unwrap();
    ///
    /// assert!(warnings.is_empty());
    /// assert!(table.entry("hello", "EN").is_some());
    /// ```
    pub fn from_json_str(json: &str) -> Result<(PhraseTable, Vec<LoadWarning>), LoadError> {
        let document: Document = serde_json::from_str(json).map_err(|e| LoadError::Json {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })?;
        compile_document(document)
    }

    /// Reads and parses a content document from disk.
    pub fn from_json_file(
        path: impl AsRef<Path>,
    ) -> Result<(PhraseTable, Vec<LoadWarning>), LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }
}

fn compile_document(document: Document) -> Result<(PhraseTable, Vec<LoadWarning>), LoadError> {
    let mut table = PhraseTable::new(document.locales)?;
    if let Some(repository_id) = document.repository_id {
        table = table.with_repository_id(repository_id);
    }
    if let Some(version) = document.version {
        table = table.with_version(version);
    }

    let mut warnings = Vec::new();
    for (key, entries) in document.phrases {
        for (locale_code, nodes) in entries {
            if !table.has_locale(&locale_code) {
                warnings.push(LoadWarning::UnknownEntryLocale {
                    phrase_key: key.clone(),
                    locale_code,
                });
                continue;
            }
            let mut compiler = Compiler {
                key: &key,
                locale_code: &locale_code,
                warnings: &mut warnings,
            };
            let compiled = compiler.nodes(nodes)?;
            table.insert(key.clone(), locale_code, PhraseEntry::from_template(compiled));
        }
    }
    for (key, info) in document.debug_info {
        table.insert_debug_info(key, info);
    }

    warnings.extend(table.validate());
    for warning in &warnings {
        warn!(%warning, "content document warning");
    }
    Ok((table, warnings))
}

/// Compiles raw nodes of one entry, collecting warnings.
struct Compiler<'a> {
    key: &'a str,
    locale_code: &'a str,
    warnings: &'a mut Vec<LoadWarning>,
}

impl Compiler<'_> {
    fn nodes(&mut self, raw: Vec<RawNode>) -> Result<Vec<TemplateNode>, LoadError> {
        let mut compiled = Vec::with_capacity(raw.len());
        for node in raw {
            if let Some(node) = self.node(node)? {
                compiled.push(node);
            }
        }
        Ok(compiled)
    }

    fn node(&mut self, raw: RawNode) -> Result<Option<TemplateNode>, LoadError> {
        Ok(Some(match raw {
            RawNode::Text {
                content,
                children,
                styles,
            } => TemplateNode::Text(TextTemplate {
                content: self.template(&content)?,
                children: self.nodes(children)?,
                styles,
            }),
            RawNode::Link {
                href,
                content,
                children,
                styles,
                link_name,
            } => TemplateNode::Link(LinkTemplate {
                href: self.template(&href)?,
                content: self.template(&content)?,
                children: self.nodes(children)?,
                styles,
                link_name,
            }),
            RawNode::ListItem { children } => TemplateNode::ListItem(self.nodes(children)?),
            RawNode::UnorderedList { children } => {
                TemplateNode::UnorderedList(self.list_items(children)?)
            }
            RawNode::OrderedList { children } => {
                TemplateNode::OrderedList(self.list_items(children)?)
            }
            RawNode::Unknown => {
                self.warnings.push(LoadWarning::UnknownNodeKind {
                    phrase_key: self.key.to_string(),
                    locale_code: self.locale_code.to_string(),
                });
                return Ok(None);
            }
        }))
    }

    fn list_items(&mut self, raw: Vec<RawNode>) -> Result<Vec<Vec<TemplateNode>>, LoadError> {
        let mut items = Vec::with_capacity(raw.len());
        for node in raw {
            match node {
                RawNode::ListItem { children } => items.push(self.nodes(children)?),
                other => {
                    let Some(compiled) = self.node(other)? else {
                        continue;
                    };
                    self.warnings.push(LoadWarning::NonItemInList {
                        phrase_key: self.key.to_string(),
                        locale_code: self.locale_code.to_string(),
                    });
                    items.push(vec![compiled]);
                }
            }
        }
        Ok(items)
    }

    fn template(&self, source: &str) -> Result<Template, LoadError> {
        parse_template(source).map_err(|e| match e {
            ParseError::Syntax {
                line,
                column,
                message,
            } => LoadError::Template {
                phrase_key: self.key.to_string(),
                locale_code: self.locale_code.to_string(),
                line,
                column,
                message,
            },
        })
    }
}
