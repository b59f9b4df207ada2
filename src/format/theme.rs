//! Styling: visual categories and the class names a theme gives them.
//!
//! **Categories (each can carry its own CSS class):**
//! - **Keyword** — the 25 Go reserved words
//! - **Identifier** — variable, type, function and package names
//! - **Literal** — integer, float, imaginary, rune and string literals
//! - **Operator** — operators and punctuation, including a literal `;`
//! - **Comment** — `//` line comments and `/* */` general comments
//!
//! Anything else (whitespace, illegal characters, separators the lexer
//! inserted at line breaks) has no category and is rendered bare.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Visual category of a segment. "No category" is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    Identifier,
    Literal,
    Operator,
    Comment,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Keyword,
        Category::Identifier,
        Category::Literal,
        Category::Operator,
        Category::Comment,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Identifier => "identifier",
            Category::Literal => "literal",
            Category::Operator => "operator",
            Category::Comment => "comment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keyword" => Ok(Category::Keyword),
            "identifier" | "ident" => Ok(Category::Identifier),
            "literal" => Ok(Category::Literal),
            "operator" => Ok(Category::Operator),
            "comment" => Ok(Category::Comment),
            _ => Err(Error::config(format!(
                "unknown category '{s}' (expected keyword, identifier, literal, operator or comment)"
            ))),
        }
    }
}

/// Class name per category. An empty class means "render unwrapped".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMap {
    keyword: String,
    identifier: String,
    literal: String,
    operator: String,
    comment: String,
}

impl Default for ClassMap {
    /// The class names litebrite has always emitted, plus `comment`.
    fn default() -> Self {
        Self {
            keyword: "keyword".into(),
            identifier: "ident".into(),
            literal: "literal".into(),
            operator: "operator".into(),
            comment: "comment".into(),
        }
    }
}

impl ClassMap {
    /// No classes at all: every segment renders as bare text.
    #[must_use]
    pub fn none() -> Self {
        Self {
            keyword: String::new(),
            identifier: String::new(),
            literal: String::new(),
            operator: String::new(),
            comment: String::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, category: Category, class: impl Into<String>) -> Self {
        *self.slot(category) = class.into();
        self
    }

    /// Apply `category=class` pairs on top of `self`. An empty class
    /// (`comment=`) switches the category off.
    pub fn apply_pairs<I, S>(mut self, pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pair in pairs {
            let pair = pair.as_ref();
            let Some((key, class)) = pair.split_once('=') else {
                return Err(Error::config(format!("expected CATEGORY=CLASS, got '{pair}'")));
            };
            let category: Category = key.trim().parse()?;
            *self.slot(category) = class.trim().to_string();
        }
        Ok(self)
    }

    #[must_use]
    pub fn class(&self, category: Category) -> &str {
        match category {
            Category::Keyword => self.keyword.as_str(),
            Category::Identifier => self.identifier.as_str(),
            Category::Literal => self.literal.as_str(),
            Category::Operator => self.operator.as_str(),
            Category::Comment => self.comment.as_str(),
        }
    }

    fn slot(&mut self, category: Category) -> &mut String {
        match category {
            Category::Keyword => &mut self.keyword,
            Category::Identifier => &mut self.identifier,
            Category::Literal => &mut self.literal,
            Category::Operator => &mut self.operator,
            Category::Comment => &mut self.comment,
        }
    }
}
