//! Application actions triggered by user input.

/// Application actions produced by the input handler and consumed by
/// [`crate::state::App::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Exit the application.
    Quit,
    /// Open the quit confirmation popup.
    OpenConfirmQuit,
    /// Close the current popup, discarding any draft it held.
    ClearPopup,

    /// Give keyboard focus to the inline search bar.
    FocusSearch,
    /// Return keyboard focus to the dashboard.
    UnfocusSearch,
    /// Append a character to the search text.
    SearchInput(char),
    /// Remove the last character of the search text.
    SearchBackspace,

    /// Cycle the time filter to its next value.
    CycleTimeFilter,

    /// Select the next category tab.
    NextCategory,
    /// Select the previous category tab.
    PrevCategory,
    /// Select the next widget in the current category.
    NextWidget,
    /// Select the previous widget in the current category.
    PrevWidget,

    /// Open the add-widget form for the selected category.
    OpenWidgetForm,
    /// Append a character to the form's active field.
    FormInput(char),
    /// Remove the last character of the form's active field.
    FormBackspace,
    /// Move form focus to the next field.
    FormFocusNext,
    /// Move form focus to the previous field.
    FormFocusPrev,
    /// Cycle the form's widget type forward.
    FormCycleTypeNext,
    /// Cycle the form's widget type backward.
    FormCycleTypePrev,
    /// Append an empty chart row to the form.
    FormAddRow,
    /// Validate the draft and commit it to the store.
    FormSubmit,

    /// Open the remove confirmation for the selected widget.
    OpenConfirmRemove,
    /// Remove the widget named in the open confirmation popup.
    ConfirmRemove,

    /// Copy the selected widget to the clipboard as JSON.
    CopyWidget,
    /// Toggle the help popup.
    ToggleHelp,
    /// Show a message popup.
    ShowMessage(String),
}
