use iced::{Alignment, Color, Element, Length};
use iced::widget::{button, horizontal_space, opaque, text, Column, Container, Row, Text};
use iced::widget::container::{background, bordered_box};
use iced_font_awesome::fa_icon_solid;
use crate::app::{App, Message};
use crate::app::state::{Dialog, DialogKind};

/// Модальное окно поверх журнала: заголовок, текст и кнопка OK.
pub fn dialog_overlay<'a>(app: &'a App, dialog: &'a Dialog) -> Element<'a, Message> {
    let icon = match dialog.kind {
        DialogKind::Warning => "triangle-exclamation",
        DialogKind::Info => "circle-info",
        DialogKind::Error => "circle-xmark",
    };

    let modal_content = Column::new()
        .spacing(15)
        .align_x(Alignment::Start)
        .push(
            Row::new()
                .spacing(10)
                .align_y(Alignment::Center)
                .push(fa_icon_solid(icon).style(move |_| text::base(&app.theme)))
                .push(Text::new(dialog.title.as_str()).size(22)),
        )
        .push(Text::new(dialog.body.as_str()).size(16))
        .push(
            Row::new()
                .push(horizontal_space())
                .push(button(Text::new("OK")).on_press(Message::DismissDialog).padding([6, 24])),
        );

    let modal_container = Container::new(modal_content)
        .style(move |_| bordered_box(&app.theme))
        .padding(20)
        .width(Length::Fixed(440.0));

    opaque(
        Container::new(Container::new(modal_container).center(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| background(Color { r: 0.0, g: 0.0, b: 0.0, a: 0.7 })),
    )
}
