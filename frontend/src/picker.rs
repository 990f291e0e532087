//! What the widget does with the file picker.
//!
//! The decisions live here, behind [`FilePicker`], so they do not need a
//! browser: the widget only wires them to its `<input type="file">`.

use web_sys::{File, HtmlInputElement};

use crate::VisualState;

/// The file input as seen by the widget.
pub trait FilePicker {
    type File;

    /// First selected file, `None` for an empty selection.
    fn first_file(&self) -> Option<Self::File>;

    /// Drop the selection so picking the same file fires `change` again.
    fn clear(&self);
}

impl FilePicker for HtmlInputElement {
    type File = File;

    fn first_file(&self) -> Option<File> {
        let files = self.files()?;
        if files.length() == 0 {
            return None;
        }
        files.get(0)
    }

    fn clear(&self) {
        self.set_value("");
    }
}

/// A selection arrived: the state to enter right away and the file to upload.
///
/// `None` leaves everything as it is: empty selection, or the monster
/// is not hungry.
pub fn take_selection<P: FilePicker>(state: VisualState, picker: &P) -> Option<(VisualState, P::File)> {
    let file = picker.first_file()?;
    let eating = state.feed()?;
    Some((eating, file))
}

/// "Feed again" was clicked: clears the picker and returns the next state.
pub fn reset_picker<P: FilePicker>(state: VisualState, picker: &P) -> Option<VisualState> {
    let hungry = state.feed_again()?;
    picker.clear();
    Some(hungry)
}
