use console::{style, Style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, FuzzySelect, Input, Select};

use super::Prompt;
use crate::error::ZopError;

/// Look of the selection lists
#[derive(Debug, Clone)]
pub struct ListStyle {
    /// Rows visible at once before the list scrolls
    pub max_length: usize,
    /// 256-colour code of the highlighted row
    pub highlight: u8,
    pub filtering: bool,
}

impl Default for ListStyle {
    fn default() -> Self {
        Self {
            max_length: 14,
            highlight: 170,
            filtering: true,
        }
    }
}

/// [`Prompt`] backed by the terminal
pub struct TerminalPrompt {
    style: ListStyle,
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new(list_style: ListStyle) -> Self {
        let theme = ColorfulTheme {
            active_item_style: Style::new().color256(list_style.highlight),
            active_item_prefix: style("> ".to_string()).for_stderr().color256(list_style.highlight),
            ..ColorfulTheme::default()
        };
        Self { style: list_style, theme }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new(ListStyle::default())
    }
}

impl Prompt for TerminalPrompt {
    fn select(&self, title: &str, labels: &[String]) -> Result<Option<usize>, ZopError> {
        let result = if self.style.filtering {
            FuzzySelect::with_theme(&self.theme)
                .with_prompt(title)
                .items(labels)
                .default(0)
                .max_length(self.style.max_length)
                .interact_opt()
        } else {
            Select::with_theme(&self.theme)
                .with_prompt(title)
                .items(labels)
                .default(0)
                .max_length(self.style.max_length)
                .interact_opt()
        };
        result.map_err(|e| {
            tracing::error!(%e, "unable to render the list");
            ZopError::RenderList
        })
    }

    fn input(&self, message: &str) -> Result<String, ZopError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .interact_text()
            .map(|s| s.trim().to_string())
            .map_err(|e| {
                tracing::error!(%e, "unable to read input");
                ZopError::RenderList
            })
    }

    fn confirm(&self, message: &str) -> Result<bool, ZopError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| {
                tracing::error!(%e, "unable to read answer");
                ZopError::RenderList
            })
    }
}
