use std::collections::HashMap;
use std::time::Duration;

use iced::time::{self, Instant};
use iced::widget::text_editor;
use iced::{Element, Subscription, Task, Theme};

use crate::form::{Edit, FieldKind, Schema, SmartForm, Submission};
use crate::notify::Toasts;

pub const TITLE: &str = "Smart Dynamic Form";
pub const SUCCESS_TEXT: &str = "Form submitted successfully!";

/// Toast expiry check interval.
const TICK: Duration = Duration::from_millis(250);

pub struct App {
    pub form: SmartForm,
    // multi-line controls keep their own buffer; the record holds a copy of the text
    pub editors: HashMap<&'static str, text_editor::Content>,
    pub toasts: Toasts,
}

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(&'static str, Edit),
    EditorAction(&'static str, text_editor::Action),
    Submit,
    Tick(Instant),
    DismissToast(u64),
}

impl App {
    pub fn new(schema: Schema) -> Self {
        let editors = schema
            .fields()
            .iter()
            .filter(|f| f.kind == FieldKind::Textarea)
            .map(|f| (f.name, text_editor::Content::new()))
            .collect();

        Self {
            form: SmartForm::new(schema),
            editors,
            toasts: Toasts::new(),
        }
    }

    pub fn title(&self) -> String {
        String::from(TITLE)
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FieldChanged(name, edit) => {
                self.form.change(name, edit);
            }
            Message::EditorAction(name, action) => {
                if let Some(content) = self.editors.get_mut(name) {
                    let is_edit = action.is_edit();
                    content.perform(action);
                    if is_edit {
                        self.form.change(name, Edit::Value(editor_text(content)));
                    }
                }
            }
            Message::Submit => {
                let submission = self.form.submit();
                report_submission(&submission, &mut self.toasts, Instant::now());
            }
            Message::Tick(now) => {
                self.toasts.expire(now);
            }
            Message::DismissToast(id) => {
                self.toasts.dismiss(id);
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        crate::ui::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.toasts.is_empty() {
            Subscription::none()
        } else {
            time::every(TICK).map(Message::Tick)
        }
    }
}

/// Surfaces the outcome of a submit: one toast and one log entry carrying
/// the record when accepted, nothing visible when rejected.
pub fn report_submission(submission: &Submission, toasts: &mut Toasts, now: Instant) {
    match submission {
        Submission::Accepted(record) => {
            toasts.push(SUCCESS_TEXT, now);
            match record.to_json() {
                Ok(json) => tracing::info!(record = %json, "form submitted"),
                Err(e) => tracing::warn!(error = %e, "form submitted, record not serializable"),
            }
        }
        Submission::Rejected(count) => {
            tracing::debug!(fields = count, "submit rejected");
        }
    }
}

/// Editor text exactly as typed: lines joined by `\n`, so a trailing empty
/// line keeps its newline.
fn editor_text(content: &text_editor::Content) -> String {
    content
        .lines()
        .map(|line| String::from(&*line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormRecord;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn accepted_submission_pushes_one_toast() {
        let mut toasts = Toasts::new();
        let accepted = Submission::Accepted(FormRecord::new());

        report_submission(&accepted, &mut toasts, Instant::now());
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.iter().next().unwrap().text, SUCCESS_TEXT);

        report_submission(&accepted, &mut toasts, Instant::now());
        assert_eq!(toasts.len(), 2);
    }

    #[test]
    fn rejected_submission_is_silent() {
        let mut toasts = Toasts::new();
        report_submission(&Submission::Rejected(3), &mut toasts, Instant::now());
        assert!(toasts.is_empty());
    }

    /// Runs `f` under a subscriber that writes plain log lines into a buffer.
    fn captured_log(f: impl FnOnce()) -> String {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let sink = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || LogSink(sink.clone()))
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    struct LogSink(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn each_accepted_submission_logs_the_record_once() {
        let record = FormRecord::new().with("fullName", Edit::Value("Ada".into()));
        let accepted = Submission::Accepted(record);
        let mut toasts = Toasts::new();

        let log = captured_log(|| report_submission(&accepted, &mut toasts, Instant::now()));
        let entries: Vec<_> = log.lines().filter(|l| l.contains("form submitted")).collect();
        assert_eq!(entries.len(), 1, "{log}");
        assert!(entries[0].contains(r#"record={"fullName":"Ada"}"#), "{log}");

        let log = captured_log(|| {
            report_submission(&accepted, &mut toasts, Instant::now());
            report_submission(&accepted, &mut toasts, Instant::now());
        });
        assert_eq!(log.matches("form submitted").count(), 2, "{log}");
    }

    #[test]
    fn rejected_submission_logs_no_record() {
        let mut toasts = Toasts::new();
        let log = captured_log(|| {
            report_submission(&Submission::Rejected(2), &mut toasts, Instant::now())
        });
        assert!(!log.contains("form submitted"), "{log}");
        assert!(log.contains("submit rejected"), "{log}");
    }

    #[test]
    fn editor_text_keeps_a_typed_trailing_newline() {
        assert_eq!(editor_text(&text_editor::Content::with_text("abc")), "abc");
        assert_eq!(editor_text(&text_editor::Content::with_text("abc\n")), "abc\n");
        assert_eq!(editor_text(&text_editor::Content::with_text("a\nb")), "a\nb");
        assert_eq!(editor_text(&text_editor::Content::new()), "");
    }
}
