//! Interactive prompts using dialoguer

use console::Style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::questions::Choice;

/// Validator handed to free-text prompts; `Err` carries the reason to show
pub type InputValidator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Renders questions and captures answers.
///
/// Free-text prompts must keep asking until `validate` accepts the input.
pub trait Prompter {
    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validate: InputValidator<'_>,
    ) -> Result<String>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Returns the index of the selected choice
    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<usize>;
}

/// Prompt style: orange question marks and pointer, blue-grey answers
pub fn wizard_theme() -> ColorfulTheme {
    let orange = Style::new().color256(214).bold();
    let blue_grey = Style::new().color256(67);
    ColorfulTheme {
        prompt_prefix: orange.apply_to("?".to_string()),
        success_prefix: orange.apply_to("?".to_string()),
        active_item_prefix: orange.apply_to("❯".to_string()),
        active_item_style: blue_grey.clone(),
        values_style: blue_grey.bold(),
        hint_style: Style::new().color256(242),
        ..ColorfulTheme::default()
    }
}

/// Terminal prompter backed by dialoguer
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new(wizard_theme())
    }
}

impl DialoguerPrompter {
    pub fn new(theme: ColorfulTheme) -> Self {
        Self { theme }
    }
}

impl Prompter for DialoguerPrompter {
    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validate: InputValidator<'_>,
    ) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .validate_with(|value: &String| validate(value.as_str()));
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }

    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<usize> {
        let names: Vec<&str> = choices.iter().map(|c| c.name.as_str()).collect();
        let selected = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(&names)
            .default(0)
            .interact()?;
        Ok(selected)
    }
}
