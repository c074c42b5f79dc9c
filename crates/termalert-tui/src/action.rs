//! Alert actions, tags, and the action registry

use std::fmt;

/// Opaque identifier for a registered action.
///
/// Tags come from a monotonically increasing counter owned by the registry,
/// so every registered action gets a distinct tag for the registry's whole
/// lifetime, including actions appended by later registration calls. Hosts
/// treat tags as routing keys only; there is no arithmetic on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionTag(u32);

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle passed to an action handler while it runs.
///
/// The handler borrows this for the duration of the call and can request
/// that the host stop showing the alert. Dismissal is the handler's call to
/// make; activating a button never dismisses on its own.
pub struct AlertController<'a> {
    dismissed: &'a mut bool,
}

impl<'a> AlertController<'a> {
    pub(crate) fn new(dismissed: &'a mut bool) -> Self {
        Self { dismissed }
    }

    /// Request that the host stop showing the alert.
    pub fn dismiss(&mut self) {
        *self.dismissed = true;
    }

    pub fn is_dismissed(&self) -> bool {
        *self.dismissed
    }
}

/// Boxed callback invoked when the action's button is activated.
pub type ActionHandler = Box<dyn FnMut(&mut AlertController) + Send>;

/// One alert option: a button label and the callback it triggers.
pub struct AlertAction {
    title: String,
    handler: ActionHandler,
}

impl AlertAction {
    pub fn new(
        title: impl Into<String>,
        handler: impl FnMut(&mut AlertController) + Send + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            handler: Box::new(handler),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Debug for AlertAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertAction")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

struct RegisteredAction {
    tag: ActionTag,
    title: String,
    handler: ActionHandler,
}

/// Ordered, append-only store of registered actions.
///
/// Activation resolves a tag back to its action with a linear first-match
/// search over registration order.
#[derive(Default)]
pub struct ActionRegistry {
    entries: Vec<RegisteredAction>,
    next_tag: u32,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one action, assigning it the next tag.
    pub fn add(&mut self, action: AlertAction) -> ActionTag {
        let tag = ActionTag(self.next_tag);
        self.next_tag += 1;
        self.entries.push(RegisteredAction {
            tag,
            title: action.title,
            handler: action.handler,
        });
        tag
    }

    /// Register actions in order; returns the tags assigned to them.
    pub fn register(&mut self, actions: Vec<AlertAction>) -> Vec<ActionTag> {
        actions.into_iter().map(|a| self.add(a)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Button labels in registration order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.title.as_str())
    }

    /// (tag, label) pairs in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (ActionTag, &str)> {
        self.entries.iter().map(|e| (e.tag, e.title.as_str()))
    }

    /// Tag of the action at a registration-order position.
    pub fn tag_at(&self, index: usize) -> Option<ActionTag> {
        self.entries.get(index).map(|e| e.tag)
    }

    /// First action carrying the tag, as (label, handler).
    pub(crate) fn resolve_mut(&mut self, tag: ActionTag) -> Option<(&str, &mut ActionHandler)> {
        self.entries
            .iter_mut()
            .find(|e| e.tag == tag)
            .map(|e| (e.title.as_str(), &mut e.handler))
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("len", &self.entries.len())
            .field("next_tag", &self.next_tag)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_action(title: &str) -> AlertAction {
        AlertAction::new(title, |_| {})
    }

    #[test]
    fn test_tags_are_assigned_in_order() {
        let mut registry = ActionRegistry::new();
        let tags = registry.register(vec![noop_action("a"), noop_action("b"), noop_action("c")]);

        assert_eq!(tags.len(), 3);
        assert!(tags[0] < tags[1] && tags[1] < tags[2]);
        assert_eq!(registry.tag_at(0), Some(tags[0]));
        assert_eq!(registry.tag_at(2), Some(tags[2]));
    }

    #[test]
    fn test_tags_stay_distinct_across_registrations() {
        let mut registry = ActionRegistry::new();
        let first = registry.register(vec![noop_action("a"), noop_action("b")]);
        let second = registry.register(vec![noop_action("c")]);

        assert_eq!(registry.len(), 3);
        let mut all: Vec<ActionTag> = first.into_iter().chain(second).collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 3, "appended actions must not reuse tags");
    }

    #[test]
    fn test_titles_keep_registration_order() {
        let mut registry = ActionRegistry::new();
        registry.register(vec![noop_action("Save"), noop_action("Discard")]);
        registry.register(vec![noop_action("Cancel")]);

        let titles: Vec<&str> = registry.titles().collect();
        assert_eq!(titles, vec!["Save", "Discard", "Cancel"]);
    }

    #[test]
    fn test_resolve_unknown_tag_is_none() {
        let mut registry = ActionRegistry::new();
        registry.register(vec![noop_action("only")]);

        let bogus = ActionTag(999);
        assert!(registry.resolve_mut(bogus).is_none());
    }

    #[test]
    fn test_resolve_finds_title_and_handler() {
        let mut registry = ActionRegistry::new();
        let tags = registry.register(vec![noop_action("first"), noop_action("second")]);

        let (title, _) = registry.resolve_mut(tags[1]).unwrap();
        assert_eq!(title, "second");
    }

    #[test]
    fn test_controller_dismissal_is_visible() {
        let mut dismissed = false;
        let mut controller = AlertController::new(&mut dismissed);
        assert!(!controller.is_dismissed());

        controller.dismiss();
        assert!(controller.is_dismissed());
        assert!(dismissed);
    }
}
