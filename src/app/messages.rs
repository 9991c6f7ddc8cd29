use iced_aw::date_picker::Date;
use crate::app::state::DateTarget;

#[derive(Debug, Clone)]
pub enum Message {
    SurnameChanged(String),
    SubjectChanged(String),
    GradeChanged(String),
    DateTextChanged(DateTarget, String),
    SearchTextChanged(String),
    //
    AddPressed,
    DeletePressed,
    ClearPressed,
    SearchPressed,
    DateRangeSearchPressed,
    RowSelected(i64),
    //
    ChooseDate(DateTarget),
    SubmitDate(DateTarget, Date),
    CancelDate,
    //
    DismissDialog,
    ThemeSelected(&'static str),
}
