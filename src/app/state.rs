use std::fmt;
use std::path::{Path, PathBuf};
use iced::Theme;
use iced_aw::date_picker::Date;
use crate::config::CONFIG_FILE;
use crate::db::GradeStore;
use crate::error::StorageError;
use crate::validate::{format_date, parse_date};

pub struct App {
    pub store: GradeStore,
    pub theme: Theme,
    pub config_path: PathBuf,
    //
    pub surname: String,
    pub subject: String,
    pub grade: String,
    pub date: DateField,
    //
    pub search_text: String,
    pub start_date: DateField,
    pub end_date: DateField,
    pub open_picker: Option<DateTarget>,
    //
    pub records: Vec<GradeRecord>,
    pub selected: Option<i64>,
    pub dialog: Option<Dialog>,
}

impl App {
    pub fn new(store: GradeStore, theme: Theme) -> Self {
        Self {
            store,
            theme,
            config_path: PathBuf::from(CONFIG_FILE),
            surname: String::new(),
            subject: String::new(),
            grade: String::new(),
            date: DateField::today(),
            search_text: String::new(),
            start_date: DateField::today(),
            end_date: DateField::today(),
            open_picker: None,
            records: vec![],
            selected: None,
            dialog: None,
        }
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected
    }

    /// Поля формы в том виде, в каком они уходят в проверку:
    /// текстовые обрезаны по краям, дата как есть.
    pub fn form(&self) -> GradeForm<'_> {
        GradeForm {
            surname: self.surname.trim(),
            subject: self.subject.trim(),
            grade: self.grade.trim(),
            date: &self.date.text,
        }
    }

    pub fn date_range(&self) -> (&str, &str) {
        (self.start_date.text.trim(), self.end_date.text.trim())
    }

    pub fn date_field(&self, target: DateTarget) -> &DateField {
        match target {
            DateTarget::Entry => &self.date,
            DateTarget::RangeStart => &self.start_date,
            DateTarget::RangeEnd => &self.end_date,
        }
    }

    pub fn date_field_mut(&mut self, target: DateTarget) -> &mut DateField {
        match target {
            DateTarget::Entry => &mut self.date,
            DateTarget::RangeStart => &mut self.start_date,
            DateTarget::RangeEnd => &mut self.end_date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeForm<'a> {
    pub surname: &'a str,
    pub subject: &'a str,
    pub grade: &'a str,
    pub date: &'a str,
}

/// Какое из трёх полей даты редактирует открытый календарь.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTarget {
    Entry,
    RangeStart,
    RangeEnd,
}

/// Поле даты: текст можно править руками, календарь перезаписывает его целиком.
#[derive(Debug, Clone)]
pub struct DateField {
    pub text: String,
    pub picked: Date,
}

impl DateField {
    pub fn today() -> Self {
        let today = Date::today();
        Self {
            text: format_date(&today),
            picked: today,
        }
    }

    /// Календарь открывается на введённой дате, если она существует.
    pub fn set_text(&mut self, text: String) {
        if let Some(date) = parse_date(&text) {
            self.picked = date;
        }
        self.text = text;
    }

    pub fn pick(&mut self, date: Date) {
        self.picked = date;
        self.text = format_date(&date);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Warning,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub body: String,
}

impl Dialog {
    pub fn warning(body: impl Into<String>) -> Self {
        Self { kind: DialogKind::Warning, title: "Ошибка".to_string(), body: body.into() }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { kind: DialogKind::Info, title: title.into(), body: body.into() }
    }

    pub fn error(body: impl Into<String>) -> Self {
        Self { kind: DialogKind::Error, title: "Ошибка".to_string(), body: body.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeRecord {
    pub id: i64,
    pub student_name: String,
    pub subject: String,
    pub grade: i64,
    pub date: String,
}

// Строка списка: кортеж полей целиком, id первым.
impl fmt::Display for GradeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, '{}', '{}', {}, '{}')",
            self.id, self.student_name, self.subject, self.grade, self.date
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGrade {
    pub student_name: String,
    pub subject: String,
    pub grade: i64,
    pub date: String,
}

impl NewGrade {
    /// `grade` уже прошла проверку на цифры; здесь отсекается только переполнение i64.
    pub fn parse(student_name: &str, subject: &str, grade: &str, date: &str) -> Result<Self, StorageError> {
        let grade = grade
            .parse::<i64>()
            .map_err(|_| StorageError::GradeOutOfRange(grade.to_string()))?;
        Ok(Self {
            student_name: student_name.to_string(),
            subject: subject.to_string(),
            grade,
            date: date.to_string(),
        })
    }
}

/// Строка `PRAGMA table_info(grades)`.
#[derive(Debug, Clone)]
pub struct ColumnInfo {
    pub cid: i64,
    pub name: String,
    pub decl_type: String,
    pub not_null: bool,
    pub default_value: Option<String>,
    pub primary_key: bool,
}

impl fmt::Display for ColumnInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, '{}', '{}', {}, {}, {})",
            self.cid,
            self.name,
            self.decl_type,
            self.not_null as u8,
            self.default_value.as_deref().unwrap_or("None"),
            self.primary_key as u8
        )
    }
}
