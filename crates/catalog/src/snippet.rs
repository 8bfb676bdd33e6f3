use anyhow::{Error, anyhow};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Component kind a snippet belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Patterns,
    Buttons,
    Cards,
    Inputs,
    Badges,
    Loaders,
    Avatars,
    Toggles,
    Dividers,
}

impl Category {
    /// Every category, in gallery order.
    pub const ALL: [Self; 9] = [
        Self::Patterns,
        Self::Buttons,
        Self::Cards,
        Self::Inputs,
        Self::Badges,
        Self::Loaders,
        Self::Avatars,
        Self::Toggles,
        Self::Dividers,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Patterns => "patterns",
            Self::Buttons => "buttons",
            Self::Cards => "cards",
            Self::Inputs => "inputs",
            Self::Badges => "badges",
            Self::Loaders => "loaders",
            Self::Avatars => "avatars",
            Self::Toggles => "toggles",
            Self::Dividers => "dividers",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Accepts the plural name or its singular (`button`), case-insensitively.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let wanted = input.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| {
                let name = category.as_str();
                name == wanted || name.strip_suffix('s') == Some(wanted.as_str())
            })
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|category| category.as_str()).collect();
                anyhow!(
                    "unknown category '{input}', expected one of: {}",
                    known.join(", ")
                )
            })
    }
}

/// One exported snippet record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// Unique across the catalog.
    pub id: String,
    pub name: String,
    pub category: Category,
    /// Flat CSS declarations, possibly with an embedded `@keyframes` block.
    pub css: String,
    /// Equivalent Tailwind utility classes.
    pub tailwind: String,
    #[serde(default)]
    pub is_new: bool,
    /// Text content for snippets that render a label (buttons, badges).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Placeholder text for input snippets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::error::Error as StdError;

    #[test]
    fn category_parses_plural_and_singular() {
        assert_eq!("buttons".parse::<Category>().ok(), Some(Category::Buttons));
        assert_eq!("Button".parse::<Category>().ok(), Some(Category::Buttons));
        assert_eq!(" PATTERNS ".parse::<Category>().ok(), Some(Category::Patterns));
    }

    #[test]
    fn unknown_category_lists_known_ones() {
        let message = "widgets"
            .parse::<Category>()
            .err()
            .map(|err| err.to_string())
            .unwrap_or_default();
        assert!(message.contains("'widgets'"));
        assert!(message.contains("dividers"));
    }

    #[test]
    fn record_reads_optional_fields() -> Result<(), Box<dyn StdError>> {
        let json = r##"{
            "id": "input-glow",
            "name": "Glow Input",
            "category": "inputs",
            "css": "border: 1px solid #6366f1;",
            "tailwind": "border border-indigo-500",
            "isNew": true,
            "placeholder": "Email"
        }"##;
        let snippet: Snippet = serde_json::from_str(json)?;
        assert!(snippet.is_new);
        assert_eq!(snippet.placeholder.as_deref(), Some("Email"));
        assert_eq!(snippet.label, None);
        Ok(())
    }

    #[test]
    fn is_new_defaults_to_false() -> Result<(), Box<dyn StdError>> {
        let json = r#"{"id":"a1","name":"A","category":"badges","css":"","tailwind":""}"#;
        let snippet: Snippet = serde_json::from_str(json)?;
        assert!(!snippet.is_new);
        Ok(())
    }
}
