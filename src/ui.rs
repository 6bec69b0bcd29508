use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{
    button, column, container, pick_list, radio, row, scrollable, stack, text, text_editor,
    text_input,
};
use iced::{Background, Border, Color, Element, Font, Length, Theme};
use std::fmt;

use crate::app::{App, Message};
use crate::form::{Edit, FieldDescriptor, FieldKind};

const BACKGROUND: Color = Color {
    r: 0.855,
    g: 0.902,
    b: 0.992,
    a: 1.0,
};
const ACCENT: Color = Color {
    r: 0.392,
    g: 0.498,
    b: 0.737,
    a: 1.0,
};
const DANGER: Color = Color {
    r: 0.863,
    g: 0.208,
    b: 0.271,
    a: 1.0,
};
const SUCCESS: Color = Color {
    r: 0.098,
    g: 0.529,
    b: 0.329,
    a: 1.0,
};

const CARD_WIDTH: f32 = 850.0;
const TOAST_WIDTH: f32 = 320.0;
const TEXTAREA_HEIGHT: f32 = 110.0;

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub fn view(app: &App) -> Element<Message> {
    let fields = app.form.schema().fields();

    // two fields per row
    let rows = fields.chunks(2).map(|pair| -> Element<Message> {
        row(pair.iter().map(|field| field_view(app, field)))
            .spacing(16)
            .into()
    });

    let submit = button(container(text("Submit").font(BOLD)).center_x(Length::Fill))
        .on_press(Message::Submit)
        .width(Length::Fill)
        .padding(10)
        .style(button::success);

    let card = container(
        column![
            container(text("Smart Dynamic Form").size(28).font(BOLD)).center_x(Length::Fill),
            column(rows).spacing(16),
            submit,
        ]
        .spacing(24),
    )
    .padding(24)
    .max_width(CARD_WIDTH)
    .style(|_| container::Style {
        text_color: Some(ACCENT),
        background: Some(Background::Color(Color::WHITE)),
        border: Border {
            radius: 12.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    });

    let page = container(scrollable(
        container(card).center_x(Length::Fill).padding([24, 16]),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(|_| container::Style {
        background: Some(Background::Color(BACKGROUND)),
        ..container::Style::default()
    });

    stack![page, toasts(app)].into()
}

fn field_view<'a>(app: &'a App, field: &'static FieldDescriptor) -> Element<'a, Message> {
    let error = app.form.errors().get(field.name);
    let invalid = error.is_some();

    let mut label = row![text(field.label).font(BOLD)].spacing(4);
    if field.required {
        label = label.push(text("*").color(DANGER));
    }

    let control = match field.kind {
        FieldKind::Textarea => textarea(app, field, invalid),
        FieldKind::Select => select(app, field, invalid),
        FieldKind::Radio => radios(app, field, invalid),
        _ => single_line(app, field, invalid),
    };

    let mut content = column![label, control].spacing(6);
    if let Some(message) = error {
        content = content.push(text(message).size(13).color(DANGER));
    }

    container(content).width(Length::FillPortion(1)).into()
}

fn single_line<'a>(
    app: &'a App,
    field: &'static FieldDescriptor,
    invalid: bool,
) -> Element<'a, Message> {
    let name = field.name;
    let kind = field.kind;
    let value = app.form.record().text(name);

    text_input(kind.placeholder(), &value)
        .on_input(move |raw| {
            let raw = if kind == FieldKind::Number {
                numeric_input(&raw)
            } else {
                raw
            };
            Message::FieldChanged(name, Edit::Value(raw))
        })
        .on_submit(Message::Submit)
        .secure(kind == FieldKind::Password)
        .padding(8)
        .style(move |theme: &Theme, status| {
            let mut style = text_input::default(theme, status);
            if invalid {
                style.border.color = DANGER;
            }
            style
        })
        .into()
}

fn textarea<'a>(
    app: &'a App,
    field: &'static FieldDescriptor,
    invalid: bool,
) -> Element<'a, Message> {
    let name = field.name;
    let Some(content) = app.editors.get(name) else {
        return text("").into();
    };

    text_editor(content)
        .on_action(move |action| Message::EditorAction(name, action))
        .height(TEXTAREA_HEIGHT)
        .padding(8)
        .style(move |theme: &Theme, status| {
            let mut style = text_editor::default(theme, status);
            if invalid {
                style.border.color = DANGER;
            }
            style
        })
        .into()
}

/// Entry of a select control; `Unset` is the placeholder row.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Choice {
    Unset(&'static FieldDescriptor),
    Pick(&'static str),
}

impl Choice {
    fn value(self) -> &'static str {
        match self {
            Choice::Unset(_) => "",
            Choice::Pick(option) => option,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Unset(field) => f.write_str(&field.select_placeholder()),
            Choice::Pick(option) => f.write_str(option),
        }
    }
}

/// The option equal to the stored value, if any.
fn selected_option(field: &'static FieldDescriptor, current: &str) -> Option<&'static str> {
    field.options.iter().copied().find(|option| *option == current)
}

/// Select entry for the stored value; anything that is not an option shows
/// the placeholder.
fn selected_choice(field: &'static FieldDescriptor, current: &str) -> Choice {
    selected_option(field, current).map_or(Choice::Unset(field), Choice::Pick)
}

fn select<'a>(
    app: &'a App,
    field: &'static FieldDescriptor,
    invalid: bool,
) -> Element<'a, Message> {
    let name = field.name;
    let current = app.form.record().text(name);

    let choices: Vec<Choice> = std::iter::once(Choice::Unset(field))
        .chain(field.options.iter().copied().map(Choice::Pick))
        .collect();
    let selected = selected_choice(field, &current);

    pick_list(choices, Some(selected), move |choice: Choice| {
        Message::FieldChanged(name, Edit::Value(choice.value().to_string()))
    })
    .width(Length::Fill)
    .padding(8)
    .style(move |theme: &Theme, status| {
        let mut style = pick_list::default(theme, status);
        if invalid {
            style.border.color = DANGER;
        }
        style
    })
    .into()
}

fn radios<'a>(
    app: &'a App,
    field: &'static FieldDescriptor,
    invalid: bool,
) -> Element<'a, Message> {
    let name = field.name;
    let current = app.form.record().text(name);
    let selected = selected_option(field, &current);

    row(field.options.iter().map(|option| -> Element<Message> {
        radio(*option, *option, selected, move |value: &'static str| {
            Message::FieldChanged(name, Edit::Value(value.to_string()))
        })
        .style(move |theme: &Theme, status| radio_style(theme, status, invalid))
        .into()
    }))
    .spacing(20)
    .padding([8, 0])
    .into()
}

fn radio_style(theme: &Theme, status: radio::Status, invalid: bool) -> radio::Style {
    let mut style = radio::default(theme, status);
    if invalid {
        style.border_color = DANGER;
    }
    style
}

fn toasts(app: &App) -> Element<Message> {
    let items = app.toasts.iter().map(|toast| -> Element<Message> {
        container(
            row![
                text(toast.text.as_str()).width(Length::Fill),
                button(text("×"))
                    .on_press(Message::DismissToast(toast.id))
                    .style(button::text),
            ]
            .spacing(12)
            .align_y(Vertical::Center),
        )
        .padding(12)
        .width(TOAST_WIDTH)
        .style(|_| container::Style {
            text_color: Some(Color::WHITE),
            background: Some(Background::Color(SUCCESS)),
            border: Border {
                radius: 6.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
    });

    container(column(items).spacing(8))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(16)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .into()
}

/// What a numeric control lets through: digits, a leading minus sign and a
/// single decimal point.
pub fn numeric_input(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_point = false;
    for c in raw.chars() {
        match c {
            '0'..='9' => out.push(c),
            '-' if out.is_empty() => out.push(c),
            '.' if !seen_point => {
                seen_point = true;
                out.push(c);
            }
            _ => {}
        }
    }
    out
}
