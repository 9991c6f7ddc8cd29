use tracing::{debug, error, info, warn};
use crate::app::state::{App, Dialog, GradeRecord, NewGrade};
use crate::db;
use crate::validate::{is_integer, is_non_empty, is_valid_date};

pub const INVALID_FORM: &str =
    "Пожалуйста, заполните все поля корректно. Дата должна быть в формате дд.мм.гггг.";
pub const INVALID_RANGE: &str = "Пожалуйста, введите корректные даты в формате дд.мм.гггг.";
pub const NOTHING_SELECTED: &str = "Выберите запись для удаления.";
pub const ADD_SUCCESS_TITLE: &str = "Успех";
pub const ADD_SUCCESS: &str = "Запись успешно добавлена!";

// Обработчики кнопок. Каждый выполняется целиком в потоке интерфейса.
impl App {
    pub fn startup(&mut self) {
        if let Err(e) = self.store.ensure_schema() {
            error!(path = %self.store.path().display(), error = %e, "failed to create grades table");
            self.dialog = Some(Dialog::error(format!("Не удалось открыть базу данных: {e}")));
            return;
        }
        match self.store.table_info() {
            Ok(columns) => {
                for column in columns {
                    info!(%column, "grades column");
                }
            }
            Err(e) => warn!(error = %e, "failed to read grades table info"),
        }
        self.load_grades();
    }

    pub fn add_grade(&mut self) {
        let form = self.form();
        let (student_name, subject, grade, date) = (form.surname, form.subject, form.grade, form.date);

        if !is_non_empty(student_name) || !is_non_empty(subject) || !is_integer(grade) || !is_valid_date(date) {
            warn!(student_name, subject, grade, date, "grade form rejected");
            self.dialog = Some(Dialog::warning(INVALID_FORM));
            return;
        }

        let result = NewGrade::parse(student_name, subject, grade, date)
            .and_then(|new_grade| self.store.insert(&new_grade))
            .and_then(|_| self.store.list_all());

        match result {
            Ok(records) => {
                self.show_records(records);
                self.clear_entries();
                self.dialog = Some(Dialog::info(ADD_SUCCESS_TITLE, ADD_SUCCESS));
            }
            Err(e) => {
                error!(error = %e, "failed to add grade");
                self.dialog = Some(Dialog::error(format!("Не удалось добавить запись: {e}")));
            }
        }
    }

    pub fn delete_grade(&mut self) {
        let Some(id) = self.selected_id() else {
            self.dialog = Some(Dialog::warning(NOTHING_SELECTED));
            return;
        };
        let result = self.store.delete_by_id(id).and_then(|_| self.store.list_all());
        match result {
            Ok(records) => self.show_records(records),
            Err(e) => {
                error!(id, error = %e, "failed to delete grade");
                self.dialog = Some(Dialog::error(format!("Не удалось удалить запись: {e}")));
            }
        }
    }

    pub fn load_grades(&mut self) {
        self.show_records(Vec::new());
        match self.store.list_all() {
            Ok(records) => self.show_records(records),
            Err(e) => {
                error!(error = %e, "failed to load grades");
                self.dialog = Some(Dialog::error(format!("Не удалось загрузить записи: {e}")));
            }
        }
    }

    /// Пустая строка поиска совпадает со всеми записями.
    pub fn search_grades(&mut self) {
        let term = self.search_text.trim().to_string();
        let result = self.store.find_by_text(&term);
        self.show_search_result(result);
    }

    /// Проверяется только формат границ, не их порядок.
    pub fn search_by_date_range(&mut self) {
        let (start, end) = self.date_range();

        if !is_valid_date(start) || !is_valid_date(end) {
            warn!(start = %start, end = %end, "date range rejected");
            self.dialog = Some(Dialog::warning(INVALID_RANGE));
            return;
        }

        let result = self.store.find_by_date_range(start, end);
        self.show_search_result(result);
    }

    /// Поле даты не трогаем.
    pub fn clear_entries(&mut self) {
        self.surname.clear();
        self.subject.clear();
        self.grade.clear();
    }

    pub fn select_row(&mut self, id: i64) {
        self.selected = Some(id);
    }

    fn show_search_result(&mut self, result: db::Result<Vec<GradeRecord>>) {
        self.show_records(Vec::new());
        match result {
            Ok(records) => self.show_records(records),
            Err(e) => {
                error!(error = %e, "grade search failed");
                self.dialog = Some(Dialog::error(format!("Не удалось выполнить поиск: {e}")));
            }
        }
    }

    // Список перестраивается заново, поэтому выделение сбрасывается.
    fn show_records(&mut self, records: Vec<GradeRecord>) {
        debug!(rows = records.len(), "list refreshed");
        self.records = records;
        self.selected = None;
    }
}
