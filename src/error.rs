use thiserror::Error as ThisError;

/// Ошибка хранилища: всё, что может случиться между открытием файла БД и чтением строк.
#[derive(Debug, ThisError)]
pub enum StorageError {
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("число {0} слишком велико для столбца INTEGER")]
    GradeOutOfRange(String),
}
