//! Title and subtitle content slots

use ratatui::text::Text;

/// Text content for one alert label.
///
/// Plain and styled content are independent slots: setting one never clears
/// the other, and a label may legitimately carry both. Rendering resolves
/// them with a fixed precedence: the styled slot wins when both are set.
#[derive(Debug, Clone, Default)]
pub struct LabelContent {
    plain: Option<String>,
    styled: Option<Text<'static>>,
}

impl LabelContent {
    pub fn set_plain(&mut self, text: impl Into<String>) {
        self.plain = Some(text.into());
    }

    pub fn set_styled(&mut self, text: Text<'static>) {
        self.styled = Some(text);
    }

    pub fn plain(&self) -> Option<&str> {
        self.plain.as_deref()
    }

    pub fn styled(&self) -> Option<&Text<'static>> {
        self.styled.as_ref()
    }

    /// True when neither slot has been set.
    pub fn is_empty(&self) -> bool {
        self.plain.is_none() && self.styled.is_none()
    }

    /// Resolve the slots to renderable text. Styled wins over plain.
    pub fn resolve(&self) -> Option<Text<'static>> {
        if let Some(styled) = &self.styled {
            return Some(styled.clone());
        }
        self.plain.as_ref().map(|s| Text::from(s.clone()))
    }

    /// Number of display lines the resolved content occupies.
    pub fn line_count(&self) -> usize {
        self.resolve().map(|t| t.lines.len()).unwrap_or(0)
    }
}
