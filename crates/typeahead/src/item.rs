//! The item capability trait and a ready-made string item.
//!
//! The control is generic over the caller's item type. An item only needs
//! two capabilities: a stable identifier (for equality and dedup) and a
//! display string (for matching and rendering). Items are immutable from
//! the control's perspective.

/// Capability trait for items offered by an [`AutocompleteField`].
///
/// Two items are considered the same entry iff their identifiers are equal
/// *and* the item type's own `PartialEq` agrees; the control therefore
/// bounds its item parameter as `Listable + PartialEq`.
///
/// [`AutocompleteField`]: crate::AutocompleteField
///
/// # Example
///
/// ```
/// use typeahead::Listable;
///
/// #[derive(Clone, PartialEq)]
/// struct Contact {
///     uuid: String,
///     name: String,
/// }
///
/// impl Listable for Contact {
///     fn identifier(&self) -> &str {
///         &self.uuid
///     }
///
///     fn display_text(&self) -> String {
///         self.name.clone()
///     }
/// }
/// ```
pub trait Listable {
    /// A stable identifier used for equality and dedup.
    fn identifier(&self) -> &str;

    /// The string used both for prefix matching and for rendering.
    fn display_text(&self) -> String;
}

/// Check whether two items are the same entry.
///
/// Identity is the identifier plus the item type's own equality.
pub(crate) fn same_item<T: Listable + PartialEq>(a: &T, b: &T) -> bool {
    a.identifier() == b.identifier() && a == b
}

/// A simple item backed by an id and a display string.
///
/// This is the most common item for plain string completion; callers with
/// richer types implement [`Listable`] themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextItem {
    id: String,
    text: String,
}

impl TextItem {
    /// Create a new item with the given identifier and display text.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Get the item's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the item's display text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Listable for TextItem {
    fn identifier(&self) -> &str {
        &self.id
    }

    fn display_text(&self) -> String {
        self.text.clone()
    }
}

impl From<(&str, &str)> for TextItem {
    fn from((id, text): (&str, &str)) -> Self {
        Self::new(id, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_item_accessors() {
        let item = TextItem::new("1", "Apple");
        assert_eq!(item.id(), "1");
        assert_eq!(item.text(), "Apple");
        assert_eq!(item.identifier(), "1");
        assert_eq!(item.display_text(), "Apple");
    }

    #[test]
    fn test_same_item_requires_identifier_and_equality() {
        let a = TextItem::new("1", "Apple");
        let b = TextItem::new("1", "Apple");
        let c = TextItem::new("2", "Apple");
        let d = TextItem::new("1", "Apricot");

        assert!(same_item(&a, &b));
        assert!(!same_item(&a, &c)); // different identifier
        assert!(!same_item(&a, &d)); // same identifier, unequal item
    }
}
