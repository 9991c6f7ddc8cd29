use iced::Task;
use tracing::{debug, warn};
use crate::config::{load_config_from, save_config_to, theme_from_str, theme_to_str, Config};
use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Пока открыт диалог, окно реагирует только на его закрытие.
        if self.dialog.is_some() && !matches!(message, Message::DismissDialog) {
            debug!(?message, "ignored while dialog is open");
            return Task::none();
        }
        match message {
            Message::SurnameChanged(v) => self.surname = v,
            Message::SubjectChanged(v) => self.subject = v,
            Message::GradeChanged(v) => self.grade = v,
            Message::DateTextChanged(target, v) => self.date_field_mut(target).set_text(v),
            Message::SearchTextChanged(v) => self.search_text = v,
            Message::AddPressed => self.add_grade(),
            Message::DeletePressed => self.delete_grade(),
            Message::ClearPressed => self.clear_entries(),
            Message::SearchPressed => self.search_grades(),
            Message::DateRangeSearchPressed => self.search_by_date_range(),
            Message::RowSelected(id) => self.select_row(id),
            Message::ChooseDate(target) => {
                self.open_picker = Some(target);
            }
            Message::SubmitDate(target, date) => {
                self.date_field_mut(target).pick(date);
                self.open_picker = None;
            }
            Message::CancelDate => {
                self.open_picker = None;
            }
            Message::DismissDialog => {
                self.dialog = None;
            }
            Message::ThemeSelected(name) => {
                if let Some(theme) = theme_from_str(name) {
                    let config = Config {
                        theme_name: theme_to_str(&theme).to_string(),
                        db_path: self.store.path().to_string_lossy().into_owned(),
                        ..load_config_from(self.config_path())
                    };
                    if let Err(e) = save_config_to(self.config_path(), &config) {
                        warn!(path = %self.config_path().display(), error = %e, "failed to save config");
                    }
                    self.theme = theme;
                }
            }
        }
        Task::none()
    }
}
