/// An ordered set of string tags for multi-select answers.
///
/// Backed by a `Vec` so that removing one tag never reorders the others,
/// while membership is still unique by construction. Presentation layers
/// toggle tags on and off as checkboxes; zero selected tags is a valid
/// state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    /// Create a new empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a tag: remove it if present, add it at the end otherwise.
    ///
    /// Toggling the same tag twice restores the original set.
    pub fn toggle(&mut self, tag: &str) {
        if let Some(index) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(index);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    /// Check whether a tag is in the set.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Get the number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if there are no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Get the tags in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    /// Iterate over the tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Remove all tags.
    pub fn clear(&mut self) {
        self.tags.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            let tag = tag.into();
            if !set.contains(&tag) {
                set.tags.push(tag);
            }
        }
        set
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
