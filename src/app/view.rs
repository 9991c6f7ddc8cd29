use iced::{Element, Length};
use iced::widget::{Container, Stack};
use crate::screens::{dialog_overlay, journal_screen};
use super::{App, Message};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let base_ui = Container::new(journal_screen(self))
            .width(Length::Fill)
            .height(Length::Fill);

        let mut ui_stack = Stack::new().push(base_ui);
        if let Some(dialog) = &self.dialog {
            ui_stack = ui_stack.push(dialog_overlay(self, dialog));
        }
        ui_stack.into()
    }
}
