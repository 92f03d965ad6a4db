//! Row action value types.

/// What a row action does, as far as this crate is concerned.
///
/// The host decides what actually happens when an action fires; the kind only
/// drives presentation (button color, the delete expand transition).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Delete,
    Save,
    Unsave,
    Share,
}

/// A single action revealed by swiping a row.
///
/// Immutable once constructed. Two actions are equal iff title, icon, and
/// kind all match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    title: String,
    icon: Option<String>,
    kind: ActionKind,
}

impl Action {
    pub fn new(title: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            title: title.into(),
            icon: None,
            kind,
        }
    }

    /// Attach an icon asset name.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }
}
