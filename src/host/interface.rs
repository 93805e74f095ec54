use async_trait::async_trait;

/// Editor capabilities the translate command needs.
///
/// Implementations bridge to whatever editor is driving the command. The
/// command never touches the document except through `replace_selection`.
#[async_trait]
pub trait EditorHost: Send + Sync {
    /// Text of the current selection, `None` when nothing is selected
    fn selected_text(&self) -> Option<String>;

    /// Show a single-choice list. `None` means the user dismissed it.
    async fn quick_pick(&self, title: &str, items: &[String]) -> Option<String>;

    /// Replace the current selection in place
    async fn replace_selection(&self, text: &str) -> Result<(), anyhow::Error>;

    /// Show a user-facing error notification
    async fn show_error(&self, message: &str);
}
