use iced::{Alignment, Center, Element, Length, Theme};
use iced::widget::{button, column, horizontal_space, pick_list, row, text, text_input, Button, Column, Container, Row, Scrollable};
use iced::widget::container::bordered_box;
use iced_aw::date_picker;
use iced_font_awesome::fa_icon_solid;
use crate::app::{App, Message};
use crate::app::state::DateTarget;
use crate::config::theme_to_str;

const LABEL_WIDTH: f32 = 140.0;
const INPUT_WIDTH: f32 = 300.0;

fn icon_button_content<'a>(app: &'a App, icon: &'a str, label: &'a str) -> Row<'a, Message> {
    Row::new()
        .align_y(Alignment::Center)
        .spacing(5)
        .push(fa_icon_solid(icon).style(move |_| text::base(&app.theme)))
        .push(text(label))
}

fn labeled<'a>(label: &'a str, input: impl Into<Element<'a, Message>>) -> Row<'a, Message> {
    let input: Element<'a, Message> = input.into();
    row![
        text(label).size(14).width(Length::Fixed(LABEL_WIDTH)),
        input,
    ]
        .spacing(10)
        .align_y(Center)
}

fn field<'a>(placeholder: &'a str, value: &'a str, on_input: fn(String) -> Message) -> Element<'a, Message> {
    text_input(placeholder, value)
        .on_input(on_input)
        .padding(8)
        .size(14)
        .width(Length::Fixed(INPUT_WIDTH))
        .into()
}

// Текстовое поле даты и кнопка календаря рядом.
fn date_input(app: &App, target: DateTarget) -> Row<'_, Message> {
    let date_field = app.date_field(target);
    let but = Button::new(icon_button_content(app, "calendar", "Выбрать"))
        .on_press(Message::ChooseDate(target));
    row![
        text_input("дд.мм.гггг", &date_field.text)
            .on_input(move |v| Message::DateTextChanged(target, v))
            .padding(8)
            .size(14)
            .width(Length::Fixed(180.0)),
        date_picker(
            app.open_picker == Some(target),
            date_field.picked,
            but,
            Message::CancelDate,
            move |date| Message::SubmitDate(target, date),
        ),
    ]
        .spacing(10)
        .align_y(Center)
}

fn grade_list(app: &App) -> Container<'_, Message> {
    let rows = app.records.iter().fold(Column::new().spacing(2), |col, record| {
        let is_selected = app.selected_id() == Some(record.id);
        col.push(
            button(text(record.to_string()).size(14))
                .on_press(Message::RowSelected(record.id))
                .width(Length::Fill)
                .padding([4, 8])
                .style(if is_selected { button::primary } else { button::text }),
        )
    });

    Container::new(Scrollable::new(rows).width(Length::Fill).height(Length::Fill))
        .style(move |_| bordered_box(&app.theme))
        .padding(5)
        .width(Length::Fill)
        .height(Length::Fill)
}

pub fn journal_screen(app: &App) -> Container<'_, Message> {
    let current_name = theme_to_str(&app.theme);
    let theme_names: Vec<&'static str> = Theme::ALL.iter().map(theme_to_str).collect();

    let header = row![
        text("Журнал успеваемости").size(26),
        horizontal_space(),
        pick_list(theme_names, Some(current_name), Message::ThemeSelected)
            .placeholder("Выберите тему"),
    ]
        .align_y(Center)
        .width(Length::Fill);

    let form = column![
        labeled("Фамилия:", field("", &app.surname, Message::SurnameChanged)),
        labeled("Предмет:", field("", &app.subject, Message::SubjectChanged)),
        labeled("Оценка:", field("", &app.grade, Message::GradeChanged)),
        labeled("Дата:", date_input(app, DateTarget::Entry)),
    ]
        .spacing(10);

    let actions = row![
        button(icon_button_content(app, "plus", "Добавить оценку"))
            .on_press(Message::AddPressed),
        button(icon_button_content(app, "trash", "Удалить оценку"))
            .on_press(Message::DeletePressed)
            .style(button::danger),
        button(icon_button_content(app, "eraser", "Очистить поля"))
            .on_press(Message::ClearPressed)
            .style(button::secondary),
    ]
        .spacing(10);

    let search = column![
        row![
            labeled(
                "Поиск:",
                text_input("Фамилия или предмет", &app.search_text)
                    .on_input(Message::SearchTextChanged)
                    .on_submit(Message::SearchPressed)
                    .padding(8)
                    .size(14)
                    .width(Length::Fixed(INPUT_WIDTH)),
            ),
            button(icon_button_content(app, "magnifying-glass", "Поиск по имени/предмету"))
                .on_press(Message::SearchPressed),
        ]
            .spacing(10)
            .align_y(Center),
        labeled("Начальная дата:", date_input(app, DateTarget::RangeStart)),
        labeled("Конечная дата:", date_input(app, DateTarget::RangeEnd)),
        button(icon_button_content(app, "calendar-days", "Поиск по диапазону дат"))
            .on_press(Message::DateRangeSearchPressed),
    ]
        .spacing(10);

    let content = column![header, form, actions, search, grade_list(app)]
        .spacing(15)
        .padding(20)
        .width(Length::Fill);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
}
