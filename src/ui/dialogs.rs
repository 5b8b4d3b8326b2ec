//! Native dialogs
//! Modal notifications, alerts and confirmations backed by rfd

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::admin::{Notice, NoticeLevel, Prompter};
use crate::state::SelectedFile;

/// Image extensions offered in the file pickers
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Prompter that blocks on native message boxes
#[derive(Debug, Default, Clone, Copy)]
pub struct NativePrompter;

impl Prompter for NativePrompter {
    fn notify(&self, notice: Notice) {
        let level = match notice.level {
            NoticeLevel::Warning => MessageLevel::Warning,
            NoticeLevel::Success => MessageLevel::Info,
        };
        MessageDialog::new()
            .set_level(level)
            .set_title(notice.title)
            .set_description(notice.text)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn alert(&self, message: &str) {
        MessageDialog::new()
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn confirm(&self, question: &str) -> bool {
        let answer = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_description(question)
            .set_buttons(MessageButtons::YesNo)
            .show();
        matches!(answer, MessageDialogResult::Yes)
    }
}

/// Show the native picker for several images
pub fn pick_images(title: &str) -> Vec<SelectedFile> {
    FileDialog::new()
        .set_title(title)
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_files()
        .map(SelectedFile::from_paths)
        .unwrap_or_default()
}

/// Show the native picker for a single image
pub fn pick_image(title: &str) -> Option<SelectedFile> {
    FileDialog::new()
        .set_title(title)
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_file()
        .and_then(SelectedFile::from_path)
}
