//! Identifier vocabularies
//!
//! A vocabulary is the fixed set of reserved words and well-known type names of one language.
//! Only C# ships today; the lists match what the concept library's code samples use.

use super::tokens::TokenKind;
use once_cell::sync::Lazy;
use std::collections::HashSet;

const CSHARP_KEYWORDS: &[&str] = &[
    "public", "private", "protected", "internal", "static", "readonly", "const", "class",
    "interface", "struct", "enum", "namespace", "using", "if", "else", "switch", "case",
    "default", "for", "foreach", "while", "do", "try", "catch", "finally", "throw", "return",
    "break", "continue", "new", "this", "base", "null", "true", "false", "string", "int", "bool",
    "double", "float", "decimal", "char", "byte", "void", "var", "object", "dynamic", "async",
    "await", "Task", "get", "set", "value", "override", "virtual", "abstract", "sealed",
];

const CSHARP_TYPES: &[&str] = &[
    "String",
    "Int32",
    "Boolean",
    "Double",
    "Float",
    "Decimal",
    "Char",
    "Byte",
    "List",
    "Dictionary",
    "Array",
    "IEnumerable",
    "IQueryable",
    "Task",
    "HttpClient",
    "DbContext",
    "IEmailService",
    "User",
    "Order",
];

static CSHARP: Lazy<Vocabulary> =
    Lazy::new(|| Vocabulary::new("csharp", CSHARP_KEYWORDS, CSHARP_TYPES));

/// Reserved words and known type names for one language.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    name: &'static str,
    keywords: HashSet<&'static str>,
    types: HashSet<&'static str>,
}

impl Vocabulary {
    pub fn new(name: &'static str, keywords: &[&'static str], types: &[&'static str]) -> Self {
        Self {
            name,
            keywords: keywords.iter().copied().collect(),
            types: types.iter().copied().collect(),
        }
    }

    /// The built-in C# vocabulary, also the default.
    pub fn csharp() -> &'static Vocabulary {
        &CSHARP
    }

    /// Resolve a language name (`csharp`, `c#`, `cs`; case-insensitive).
    pub fn lookup(name: &str) -> Option<&'static Vocabulary> {
        match name.trim().to_ascii_lowercase().as_str() {
            "csharp" | "c#" | "cs" => Some(Self::csharp()),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn is_type(&self, word: &str) -> bool {
        self.types.contains(word)
    }

    /// Classify an identifier.
    ///
    /// Order: keyword, known type, method (`followed_by_call`), capitalized name as type,
    /// property. A word in both lists (`Task` in C#) is a keyword.
    pub fn classify(&self, word: &str, followed_by_call: bool) -> TokenKind {
        if self.is_keyword(word) {
            TokenKind::Keyword
        } else if self.is_type(word) {
            TokenKind::Type
        } else if followed_by_call {
            TokenKind::Method
        } else if word.starts_with(|c: char| c.is_ascii_uppercase()) {
            TokenKind::Type
        } else {
            TokenKind::Property
        }
    }
}
