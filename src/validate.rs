use iced_aw::date_picker::Date;

pub fn is_non_empty(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Только цифры 0-9, без знака: отрицательную оценку через форму не ввести.
pub fn is_integer(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// Формат `дд.мм.гггг`: три целых части через точку, месяц 1..=12, день 1..=31.
/// Количество дней в месяце не проверяется, "31.02.2024" считается корректной датой.
pub fn is_valid_date(text: &str) -> bool {
    let parts: Vec<&str> = text.split('.').collect();
    let [day, month, year] = parts.as_slice() else {
        return false;
    };
    if !is_int_literal(year) {
        return false;
    }
    match (parse_part(day), parse_part(month)) {
        (Some(day), Some(month)) => (1..=12).contains(&month) && (1..=31).contains(&day),
        _ => false,
    }
}

/// Дата для календаря. Строже `is_valid_date`: "31.02.2024" здесь None,
/// потому что такой день в календаре не выбрать.
pub fn parse_date(text: &str) -> Option<Date> {
    if !is_valid_date(text) {
        return None;
    }
    let mut parts = text.split('.').map(str::trim);
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;
    if !(1..=9999).contains(&year) || day > days_in_month(year, month) {
        return None;
    }
    Some(Date::from_ymd(year, month, day))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn format_date(date: &Date) -> String {
    format!("{:02}.{:02}.{:04}", date.day, date.month, date.year)
}

// Целое с необязательным знаком и пробелами по краям, как " +07".
fn is_int_literal(part: &str) -> bool {
    let part = part.trim();
    let digits = part.strip_prefix(['+', '-']).unwrap_or(part);
    is_integer(digits)
}

// Слишком длинные числа всё равно вне диапазона дня и месяца, поэтому None.
fn parse_part(part: &str) -> Option<i64> {
    if !is_int_literal(part) {
        return None;
    }
    part.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_requires_a_visible_character() {
        assert!(is_non_empty("Ivanov"));
        assert!(is_non_empty("  x "));
        assert!(!is_non_empty(""));
        assert!(!is_non_empty("   "));
        assert!(!is_non_empty("\t\n"));
    }

    #[test]
    fn integer_is_digits_only() {
        assert!(is_integer("5"));
        assert!(is_integer("007"));
        assert!(is_integer("99999999999999999999999"));
        assert!(!is_integer(""));
        assert!(!is_integer("-5"));
        assert!(!is_integer("+5"));
        assert!(!is_integer("4.5"));
        assert!(!is_integer(" 5"));
        assert!(!is_integer("five"));
    }

    #[test]
    fn date_accepts_any_day_up_to_31() {
        assert!(is_valid_date("01.09.2024"));
        assert!(is_valid_date("31.02.2024"));
        assert!(is_valid_date("31.12.1999"));
        assert!(is_valid_date("1.1.1"));
        assert!(is_valid_date(" 5.+3.2024"));
    }

    #[test]
    fn date_rejects_out_of_range_parts() {
        assert!(!is_valid_date("00.01.2024"));
        assert!(!is_valid_date("32.01.2024"));
        assert!(!is_valid_date("10.13.2024"));
        assert!(!is_valid_date("10.0.2024"));
        assert!(!is_valid_date("-1.01.2024"));
        assert!(!is_valid_date("99999999999999999999.01.2024"));
    }

    #[test]
    fn date_rejects_malformed_text() {
        assert!(!is_valid_date(""));
        assert!(!is_valid_date("01/09/2024"));
        assert!(!is_valid_date("2024-09-01"));
        assert!(!is_valid_date("01.09"));
        assert!(!is_valid_date("01.09.2024.1"));
        assert!(!is_valid_date("aa.09.2024"));
        assert!(!is_valid_date("01.09.20x4"));
        assert!(!is_valid_date("01..2024"));
    }

    #[test]
    fn parse_date_only_accepts_real_calendar_days() {
        let parsed = |text: &str| parse_date(text).map(|d| (d.year, d.month, d.day));
        assert_eq!(parsed("07.03.2024"), Some((2024, 3, 7)));
        assert_eq!(parsed(" 7.+3.2024"), Some((2024, 3, 7)));
        assert_eq!(parsed("29.02.2024"), Some((2024, 2, 29)));
        assert_eq!(parsed("29.02.2023"), None);
        assert_eq!(parsed("31.02.2024"), None);
        assert_eq!(parsed("31.04.2024"), None);
        assert_eq!(parsed("01.01.0"), None);
        assert_eq!(parsed("01/01/2024"), None);
    }

    #[test]
    fn format_date_pads_day_and_month() {
        let date = Date::from_ymd(2024, 9, 1);
        assert_eq!(format_date(&date), "01.09.2024");
        assert!(is_valid_date(&format_date(&date)));
    }
}
