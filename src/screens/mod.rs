pub mod dialog;
pub mod journal;

pub use dialog::dialog_overlay;
pub use journal::journal_screen;
