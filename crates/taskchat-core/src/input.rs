use taskchat_types::DEFAULT_PLACEHOLDER;

/// Props for the input control: a text field plus a submit button.
///
/// The control keeps no state of its own. The owner passes the current
/// value in and receives change/submit callbacks back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputProps {
    pub value: String,
    pub placeholder: String,
    pub disabled: bool,
}

impl InputProps {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether the submit button is clickable
    pub fn submit_enabled(&self) -> bool {
        !self.value.trim().is_empty() && !self.disabled
    }
}

impl Default for InputProps {
    fn default() -> Self {
        Self::new("")
    }
}
