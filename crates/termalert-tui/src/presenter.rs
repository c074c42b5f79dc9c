//! Alert presenter: content, actions, entrance progress, dismissal

use std::time::Instant;

use ratatui::text::Text;
use termalert_core::display::{card_width, DisplayProfile, ScreenClass};
use termalert_core::motion::ScaleSequence;
use termalert_core::prelude::*;

use crate::action::{ActionRegistry, ActionTag, AlertAction, AlertController};
use crate::content::LabelContent;

/// State machine behind the alert overlay.
///
/// A host configures content and actions, presents against a display
/// profile, advances the entrance on every tick, and routes activation
/// events through [`AlertPresenter::tap`]. The presenter never removes
/// itself from the screen: handlers (or the host) request dismissal and the
/// host stops rendering once [`AlertPresenter::is_dismissed`] turns true.
pub struct AlertPresenter {
    // ─────────────────────────────────────────────
    // Content
    // ─────────────────────────────────────────────
    title: LabelContent,
    subtitle: LabelContent,

    // ─────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────
    registry: ActionRegistry,
    selected: usize,

    // ─────────────────────────────────────────────
    // Presentation
    // ─────────────────────────────────────────────
    presented: bool,
    dismissed: bool,
    entrance: Option<ScaleSequence>,
    card_width: u16,
    screen_class: ScreenClass,
}

impl AlertPresenter {
    pub fn new() -> Self {
        Self {
            title: LabelContent::default(),
            subtitle: LabelContent::default(),
            registry: ActionRegistry::new(),
            selected: 0,
            presented: false,
            dismissed: false,
            entrance: None,
            card_width: 0,
            screen_class: ScreenClass::Unknown,
        }
    }

    /// Set plain text for the given labels and register the actions in
    /// order. `None` leaves that label as it was; an empty action list
    /// registers nothing.
    pub fn configure(
        &mut self,
        title: Option<&str>,
        subtitle: Option<&str>,
        actions: Vec<AlertAction>,
    ) {
        if let Some(text) = title {
            self.title.set_plain(text);
        }
        if let Some(text) = subtitle {
            self.subtitle.set_plain(text);
        }
        self.register(actions);
    }

    /// Styled-slot variant of [`AlertPresenter::configure`]. Plain and
    /// styled slots are independent, so mixed calls compose; when both
    /// slots of one label end up set, the styled one is rendered.
    pub fn configure_styled(
        &mut self,
        title: Option<Text<'static>>,
        subtitle: Option<Text<'static>>,
        actions: Vec<AlertAction>,
    ) {
        if let Some(text) = title {
            self.title.set_styled(text);
        }
        if let Some(text) = subtitle {
            self.subtitle.set_styled(text);
        }
        self.register(actions);
    }

    fn register(&mut self, actions: Vec<AlertAction>) {
        if actions.is_empty() {
            return;
        }
        if self.presented {
            warn!(
                count = actions.len(),
                "actions registered after presentation; buttons appended"
            );
        }
        self.registry.register(actions);
    }

    /// Size the card for the display and start the entrance animation.
    ///
    /// Must be called before the widget renders anything. Presenting again
    /// restarts the entrance and clears a previous dismissal.
    pub fn present(&mut self, display: &dyn DisplayProfile, now: Instant) {
        self.card_width = card_width(display);
        self.screen_class = display.screen_class();
        self.entrance = Some(ScaleSequence::entrance(now));
        self.presented = true;
        self.dismissed = false;
        let idiom = display.idiom();
        info!(
            width = self.card_width,
            class = %self.screen_class,
            %idiom,
            "alert presented"
        );
    }

    /// Advance the entrance animation. Returns true on the tick where the
    /// entrance settles, the one-shot presentation-complete signal.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(entrance) = &mut self.entrance else {
            return false;
        };
        entrance.advance(now);
        if entrance.just_completed() {
            debug!("alert entrance settled");
            return true;
        }
        false
    }

    /// Resolve a tag to its action and invoke the handler.
    ///
    /// Unknown tags are ignored; stale activation events (a click raced
    /// with a registry change) are not an error.
    pub fn tap(&mut self, tag: ActionTag) {
        let Some((title, handler)) = self.registry.resolve_mut(tag) else {
            debug!(%tag, "ignoring tap for unknown action tag");
            return;
        };
        debug!(%tag, title, "alert action activated");
        let mut controller = AlertController::new(&mut self.dismissed);
        handler(&mut controller);
        if self.dismissed {
            info!(%tag, "alert dismissed by action handler");
        }
    }

    // ─────────────────────────────────────────────
    // Keyboard selection
    // ─────────────────────────────────────────────

    pub fn select_next(&mut self) {
        let count = self.registry.len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.registry.len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Activate the highlighted button, if any.
    pub fn activate_selected(&mut self) {
        if let Some(tag) = self.registry.tag_at(self.selected) {
            self.tap(tag);
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    // ─────────────────────────────────────────────
    // Observability
    // ─────────────────────────────────────────────

    /// Host-side dismissal (escape key, programmatic close).
    pub fn dismiss(&mut self) {
        if !self.dismissed {
            debug!("alert dismissed by host");
            self.dismissed = true;
        }
    }

    pub fn is_presented(&self) -> bool {
        self.presented
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// True while the host should draw the overlay.
    pub fn is_active(&self) -> bool {
        self.presented && !self.dismissed
    }

    /// Current entrance scale factor.
    pub fn scale(&self, now: Instant) -> f32 {
        self.entrance
            .as_ref()
            .map(|seq| seq.scale_at(now))
            .unwrap_or(1.0)
    }

    pub fn entrance_complete(&self) -> bool {
        self.entrance
            .as_ref()
            .map(|seq| seq.is_complete())
            .unwrap_or(false)
    }

    /// Card width chosen at presentation time, in cells.
    pub fn card_width(&self) -> u16 {
        self.card_width
    }

    /// Screen class of the display the alert was presented on.
    pub fn screen_class(&self) -> ScreenClass {
        self.screen_class
    }

    pub fn title_content(&self) -> &LabelContent {
        &self.title
    }

    pub fn subtitle_content(&self) -> &LabelContent {
        &self.subtitle
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }
}

impl Default for AlertPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use termalert_core::display::FixedDisplay;
    use termalert_core::motion::ENTRANCE_PHASE;

    fn counting_action(title: &str, hits: Arc<AtomicUsize>) -> AlertAction {
        AlertAction::new(title, move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_configure_sets_plain_labels() {
        let mut alert = AlertPresenter::new();
        alert.configure(Some("Delete?"), Some("This cannot be undone"), Vec::new());

        assert_eq!(alert.title_content().plain(), Some("Delete?"));
        assert_eq!(alert.subtitle_content().plain(), Some("This cannot be undone"));
        assert!(alert.registry().is_empty());
    }

    #[test]
    fn test_configure_none_leaves_label_untouched() {
        let mut alert = AlertPresenter::new();
        alert.configure(Some("Title"), None, Vec::new());

        assert!(alert.subtitle_content().is_empty());
    }

    #[test]
    fn test_mixed_plain_and_styled_slots() {
        let mut alert = AlertPresenter::new();
        alert.configure(Some("plain title"), None, Vec::new());
        alert.configure_styled(None, Some(Text::from("styled subtitle")), Vec::new());

        assert_eq!(alert.title_content().plain(), Some("plain title"));
        assert!(alert.subtitle_content().styled().is_some());
        assert!(alert.subtitle_content().plain().is_none());
    }

    #[test]
    fn test_present_selects_phone_width() {
        let mut alert = AlertPresenter::new();
        alert.present(&FixedDisplay::phone(100), Instant::now());
        assert_eq!(alert.card_width(), 80);
        assert!(alert.is_presented());
        assert!(alert.is_active());
    }

    #[test]
    fn test_present_selects_tablet_width() {
        let mut alert = AlertPresenter::new();
        alert.present(&FixedDisplay::tablet(60), Instant::now());
        assert_eq!(alert.card_width(), 350);
    }

    #[test]
    fn test_present_records_screen_class() {
        let mut alert = AlertPresenter::new();
        alert.present(
            &FixedDisplay::phone(80).with_native_height(2436),
            Instant::now(),
        );
        assert_eq!(alert.screen_class(), ScreenClass::XClassPhone);
    }

    #[test]
    fn test_tap_invokes_only_the_matching_handler() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let mut alert = AlertPresenter::new();
        alert.configure(
            Some("Pick"),
            None,
            vec![
                counting_action("first", Arc::clone(&first)),
                counting_action("second", Arc::clone(&second)),
            ],
        );

        let tag = alert.registry().tag_at(1).unwrap();
        alert.tap(tag);

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);

        alert.tap(tag);
        assert_eq!(second.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_tap_unknown_tag_is_silently_ignored() {
        let hits = Arc::new(AtomicUsize::new(0));

        let mut alert = AlertPresenter::new();
        alert.configure(None, None, vec![counting_action("only", Arc::clone(&hits))]);

        // Mint a tag this presenter never issued by over-filling another one.
        let mut other = AlertPresenter::new();
        other.configure(
            None,
            None,
            (0..5)
                .map(|i| counting_action(&format!("a{i}"), Arc::new(AtomicUsize::new(0))))
                .collect(),
        );
        let foreign = other.registry().tag_at(4).unwrap();

        alert.tap(foreign);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(!alert.is_dismissed());
    }

    #[test]
    fn test_handler_can_dismiss() {
        let mut alert = AlertPresenter::new();
        alert.configure(
            Some("Quit?"),
            None,
            vec![AlertAction::new("OK", |ctl: &mut AlertController| {
                ctl.dismiss();
            })],
        );
        alert.present(&FixedDisplay::phone(80), Instant::now());

        let tag = alert.registry().tag_at(0).unwrap();
        alert.tap(tag);

        assert!(alert.is_dismissed());
        assert!(!alert.is_active());
    }

    #[test]
    fn test_actions_append_across_configure_calls() {
        let mut alert = AlertPresenter::new();
        alert.configure(
            None,
            None,
            vec![AlertAction::new("a", |_| {}), AlertAction::new("b", |_| {})],
        );
        alert.configure(None, None, vec![AlertAction::new("c", |_| {})]);

        assert_eq!(alert.registry().len(), 3);
        let mut tags: Vec<ActionTag> = alert.registry().entries().map(|(tag, _)| tag).collect();
        tags.dedup();
        assert_eq!(tags.len(), 3);
        let titles: Vec<&str> = alert.registry().titles().collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_selection_wraps_both_directions() {
        let mut alert = AlertPresenter::new();
        alert.configure(
            None,
            None,
            vec![
                AlertAction::new("a", |_| {}),
                AlertAction::new("b", |_| {}),
                AlertAction::new("c", |_| {}),
            ],
        );

        assert_eq!(alert.selected(), 0);
        alert.select_previous();
        assert_eq!(alert.selected(), 2);
        alert.select_next();
        assert_eq!(alert.selected(), 0);
        alert.select_next();
        assert_eq!(alert.selected(), 1);
    }

    #[test]
    fn test_activate_selected_taps_highlighted_button() {
        let hits = Arc::new(AtomicUsize::new(0));

        let mut alert = AlertPresenter::new();
        alert.configure(
            None,
            None,
            vec![
                AlertAction::new("first", |_| {}),
                counting_action("second", Arc::clone(&hits)),
            ],
        );

        alert.select_next();
        alert.activate_selected();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_entrance_settles_with_single_completion_signal() {
        let t0 = Instant::now();
        let mut alert = AlertPresenter::new();
        alert.present(&FixedDisplay::phone(80), t0);

        assert!(!alert.entrance_complete());
        assert!(!alert.tick(t0 + ENTRANCE_PHASE));
        assert!(!alert.tick(t0 + ENTRANCE_PHASE * 2));
        assert!(alert.tick(t0 + ENTRANCE_PHASE * 3));
        assert!(!alert.tick(t0 + ENTRANCE_PHASE * 4));

        assert!(alert.entrance_complete());
        let settled = alert.scale(t0 + ENTRANCE_PHASE * 4);
        assert!((settled - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_scale_midway_through_shrink() {
        let t0 = Instant::now();
        let mut alert = AlertPresenter::new();
        alert.present(&FixedDisplay::phone(80), t0);

        let mid = alert.scale(t0 + Duration::from_millis(75));
        assert!((mid - 0.55).abs() < 1e-5);
    }

    #[test]
    fn test_not_active_before_present_or_after_dismiss() {
        let mut alert = AlertPresenter::new();
        assert!(!alert.is_active());
        assert!((alert.scale(Instant::now()) - 1.0).abs() < 1e-5);

        alert.present(&FixedDisplay::phone(80), Instant::now());
        assert!(alert.is_active());

        alert.dismiss();
        assert!(!alert.is_active());
        assert!(alert.is_dismissed());
    }

    #[test]
    fn test_represent_clears_dismissal_and_restarts() {
        let t0 = Instant::now();
        let mut alert = AlertPresenter::new();
        alert.present(&FixedDisplay::phone(80), t0);
        alert.dismiss();

        let t1 = t0 + Duration::from_secs(5);
        alert.present(&FixedDisplay::phone(80), t1);
        assert!(alert.is_active());
        assert!(!alert.entrance_complete());
        let fresh = alert.scale(t1);
        assert!((fresh - 1.0).abs() < 1e-5);
    }
}
