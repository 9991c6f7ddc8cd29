use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, Params, Row};
use tracing::debug;

use crate::app::state::{ColumnInfo, GradeRecord, NewGrade};
use crate::error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;

const SELECT_GRADES: &str = "SELECT id, student_name, subject, grade, date FROM grades";

/// Доступ к таблице `grades`. Хранит только путь к файлу:
/// каждая операция открывает своё соединение и закрывает его по выходу из метода.
#[derive(Debug, Clone)]
pub struct GradeStore {
    path: PathBuf,
}

impl GradeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    pub fn ensure_schema(&self) -> Result<()> {
        let conn = self.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS grades (
                id INTEGER PRIMARY KEY,
                student_name TEXT NOT NULL,
                subject TEXT NOT NULL,
                grade INTEGER NOT NULL,
                date TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    pub fn table_info(&self) -> Result<Vec<ColumnInfo>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("PRAGMA table_info(grades)")?;
        let columns = stmt
            .query_map([], |row| {
                Ok(ColumnInfo {
                    cid: row.get(0)?,
                    name: row.get(1)?,
                    decl_type: row.get(2)?,
                    not_null: row.get(3)?,
                    default_value: row.get(4)?,
                    primary_key: row.get(5)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(columns)
    }

    /// Возвращает id новой строки.
    pub fn insert(&self, grade: &NewGrade) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO grades (student_name, subject, grade, date) VALUES (?1, ?2, ?3, ?4)",
            params![grade.student_name, grade.subject, grade.grade, grade.date],
        )?;
        let id = conn.last_insert_rowid();
        debug!(id, "grade inserted");
        Ok(id)
    }

    /// Отсутствующий id не ошибка: просто ноль удалённых строк.
    pub fn delete_by_id(&self, id: i64) -> Result<usize> {
        let conn = self.connect()?;
        let deleted = conn.execute("DELETE FROM grades WHERE id = ?1", params![id])?;
        debug!(id, deleted, "grade delete");
        Ok(deleted)
    }

    pub fn list_all(&self) -> Result<Vec<GradeRecord>> {
        self.query(SELECT_GRADES, [])
    }

    /// Поиск подстроки в фамилии или предмете. Сравнение через `LIKE`,
    /// то есть без учёта регистра только для ASCII.
    pub fn find_by_text(&self, term: &str) -> Result<Vec<GradeRecord>> {
        let pattern = format!("%{}%", escape_like(term));
        self.query(
            &format!(
                "{SELECT_GRADES} WHERE student_name LIKE ?1 ESCAPE '\\' OR subject LIKE ?1 ESCAPE '\\'"
            ),
            params![pattern],
        )
    }

    /// Даты хранятся строкой `дд.мм.гггг`, поэтому диапазон строковый, а не календарный:
    /// "01.06.2024" попадает в ["01.01.2023", "31.12.2023"].
    pub fn find_by_date_range(&self, start: &str, end: &str) -> Result<Vec<GradeRecord>> {
        self.query(
            &format!("{SELECT_GRADES} WHERE date BETWEEN ?1 AND ?2"),
            params![start, end],
        )
    }

    fn query<P: Params>(&self, sql: &str, params: P) -> Result<Vec<GradeRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(sql)?;
        let records = stmt
            .query_map(params, GradeRecord::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(rows = records.len(), "grades fetched");
        Ok(records)
    }
}

impl GradeRecord {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(GradeRecord {
            id: row.get(0)?,
            student_name: row.get(1)?,
            subject: row.get(2)?,
            grade: row.get(3)?,
            date: row.get(4)?,
        })
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, GradeStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = GradeStore::new(dir.path().join("grades.db"));
        store.ensure_schema().unwrap();
        (dir, store)
    }

    fn grade(name: &str, subject: &str, grade: i64, date: &str) -> NewGrade {
        NewGrade {
            student_name: name.to_string(),
            subject: subject.to_string(),
            grade,
            date: date.to_string(),
        }
    }

    #[test]
    fn ensure_schema_is_idempotent() {
        let (_dir, store) = store();
        store.insert(&grade("Ivanov", "Math", 5, "01.09.2024")).unwrap();
        store.ensure_schema().unwrap();
        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn table_info_describes_grades_columns() {
        let (_dir, store) = store();
        let columns = store.table_info().unwrap();
        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["id", "student_name", "subject", "grade", "date"]);
        assert!(columns[0].primary_key);
        assert!(columns[1..].iter().all(|c| c.not_null));
        assert_eq!(columns[3].decl_type, "INTEGER");
    }

    #[test]
    fn insert_then_list_returns_fields_with_fresh_id() {
        let (_dir, store) = store();
        let first = store.insert(&grade("Ivanov", "Math", 5, "01.09.2024")).unwrap();
        let second = store.insert(&grade("Petrova", "Physics", -3, "02.09.2024")).unwrap();
        assert_ne!(first, second);

        let records = store.list_all().unwrap();
        assert_eq!(
            records,
            vec![
                GradeRecord {
                    id: first,
                    student_name: "Ivanov".into(),
                    subject: "Math".into(),
                    grade: 5,
                    date: "01.09.2024".into(),
                },
                GradeRecord {
                    id: second,
                    student_name: "Petrova".into(),
                    subject: "Physics".into(),
                    grade: -3,
                    date: "02.09.2024".into(),
                },
            ]
        );
    }

    #[test]
    fn delete_twice_is_silent_and_idempotent() {
        let (_dir, store) = store();
        let keep = store.insert(&grade("Ivanov", "Math", 5, "01.09.2024")).unwrap();
        let gone = store.insert(&grade("Sidorov", "Art", 4, "03.09.2024")).unwrap();

        assert_eq!(store.delete_by_id(gone).unwrap(), 1);
        let after_first = store.list_all().unwrap();
        assert_eq!(store.delete_by_id(gone).unwrap(), 0);
        assert_eq!(store.list_all().unwrap(), after_first);
        assert_eq!(after_first.len(), 1);
        assert_eq!(after_first[0].id, keep);
    }

    #[test]
    fn text_search_matches_name_or_subject() {
        let (_dir, store) = store();
        store.insert(&grade("Ivanov", "Math", 5, "01.09.2024")).unwrap();
        store.insert(&grade("Petrova", "History", 4, "01.09.2024")).unwrap();
        store.insert(&grade("Smith", "Mathematics", 3, "01.09.2024")).unwrap();

        assert_eq!(store.find_by_text("").unwrap().len(), 3);

        let math: Vec<String> = store
            .find_by_text("Math")
            .unwrap()
            .into_iter()
            .map(|r| r.student_name)
            .collect();
        assert_eq!(math, ["Ivanov", "Smith"]);

        let ivan = store.find_by_text("ivan").unwrap();
        assert_eq!(ivan.len(), 1);
        assert_eq!(ivan[0].student_name, "Ivanov");

        assert!(store.find_by_text("Chemistry").unwrap().is_empty());
    }

    #[test]
    fn text_search_treats_wildcards_literally() {
        let (_dir, store) = store();
        store.insert(&grade("Ivanov", "Math", 5, "01.09.2024")).unwrap();
        store.insert(&grade("O_Neil", "100% Art", 5, "01.09.2024")).unwrap();

        let percent = store.find_by_text("%").unwrap();
        assert_eq!(percent.len(), 1);
        assert_eq!(percent[0].subject, "100% Art");
        assert_eq!(store.find_by_text("_").unwrap().len(), 1);
        assert!(store.find_by_text("I_anov").unwrap().is_empty());

        store.insert(&grade("Back\\slash", "Art", 4, "01.09.2024")).unwrap();
        let slash = store.find_by_text("k\\s").unwrap();
        assert_eq!(slash.len(), 1);
        assert_eq!(slash[0].student_name, "Back\\slash");
        assert!(store.find_by_text("\\%").unwrap().is_empty());
    }

    #[test]
    fn date_range_is_lexicographic_not_calendar() {
        let (_dir, store) = store();
        store.insert(&grade("Ivanov", "Math", 5, "28.12.2023")).unwrap();
        store.insert(&grade("Ivanov", "Math", 4, "03.01.2024")).unwrap();
        store.insert(&grade("Petrova", "Art", 3, "01.06.2024")).unwrap();

        // Календарно 28.12.2023 и 03.01.2024 внутри, но строка начала больше строки конца.
        assert!(store.find_by_date_range("25.12.2023", "05.01.2024").unwrap().is_empty());

        let in_2023: Vec<String> = store
            .find_by_date_range("01.01.2023", "31.12.2023")
            .unwrap()
            .into_iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(in_2023, ["28.12.2023", "03.01.2024", "01.06.2024"]);

        let exact = store.find_by_date_range("03.01.2024", "03.01.2024").unwrap();
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].grade, 4);
    }

    #[test]
    fn missing_database_directory_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = GradeStore::new(dir.path().join("missing").join("grades.db"));
        assert!(matches!(store.list_all(), Err(StorageError::Sqlite(_))));
    }
}
