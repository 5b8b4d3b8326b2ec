/// User interface module
///
/// - Native dialogs and file pickers (dialogs.rs)
/// - Form and list widgets (view.rs)

pub mod dialogs;
pub mod view;

pub use dialogs::NativePrompter;
