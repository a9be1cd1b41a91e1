use anyhow::Result;
use thiserror::Error;

/// Error type for user cancellation (Ctrl+C or ESC)
#[derive(Debug, Error)]
#[error("")]
pub struct UserCancelled;

/// Dependency injection interface for interactive prompts.
///
/// Allows commands to accept `&dyn Prompter` for testability. Production code uses
/// `InquirePrompter`, tests use `MockPrompter` with predetermined responses.
pub trait Prompter: Send + Sync {
    /// # Errors
    /// Returns error if user cancels the input or interaction fails.
    fn text(&self, message: &str, default: &str) -> Result<String>;

    /// # Errors
    /// Returns error if user cancels the selection or interaction fails.
    fn select(&self, message: &str, options: &[&'static str]) -> Result<&'static str>;

    /// # Errors
    /// Returns error if user cancels the confirmation or interaction fails.
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// Helper function for handling inquire result errors
fn handle_inquire_result<T>(result: Result<T, inquire::InquireError>) -> Result<T> {
    match result {
        Ok(v) => Ok(v),
        Err(
            inquire::InquireError::OperationCanceled | inquire::InquireError::OperationInterrupted,
        ) => Err(UserCancelled.into()),
        Err(e) => Err(e.into()),
    }
}

/// Real implementation using inquire crate
#[derive(Default)]
pub struct InquirePrompter;

#[cfg(not(tarpaulin_include))]
impl Prompter for InquirePrompter {
    fn text(&self, message: &str, default: &str) -> Result<String> {
        handle_inquire_result(inquire::Text::new(message).with_default(default).prompt())
    }

    fn select(&self, message: &str, options: &[&'static str]) -> Result<&'static str> {
        handle_inquire_result(inquire::Select::new(message, options.to_vec()).prompt())
    }

    fn confirm(&self, message: &str) -> Result<bool> {
        handle_inquire_result(inquire::Confirm::new(message).prompt())
    }
}

/// Mock implementation that returns predefined values (for testing)
pub struct MockPrompter {
    /// Answer for every text prompt; `None` accepts the default
    pub text_value: Option<String>,
    /// Index picked from every select prompt
    pub select_index: usize,
    pub confirm_value: bool,
}

impl Default for MockPrompter {
    fn default() -> Self {
        Self {
            text_value: None,
            select_index: 0,
            confirm_value: true,
        }
    }
}

impl Prompter for MockPrompter {
    fn text(&self, _message: &str, default: &str) -> Result<String> {
        Ok(self
            .text_value
            .clone()
            .unwrap_or_else(|| default.to_string()))
    }

    fn select(&self, _message: &str, options: &[&'static str]) -> Result<&'static str> {
        options
            .get(self.select_index)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("no option at index {}", self.select_index))
    }

    fn confirm(&self, _message: &str) -> Result<bool> {
        Ok(self.confirm_value)
    }
}
