use crate::model::{AppointmentStatus, PaymentMethod, TimeSlot};
use chrono::{Datelike, NaiveDate};
use itertools::Itertools;
use std::str::FromStr;

const WEEKDAYS: [&str; 7] = [
    "domingo",
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
];

const WEEKDAYS_SHORT: [&str; 7] = ["dom.", "seg.", "ter.", "qua.", "qui.", "sex.", "sáb."];

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const MONTHS_SHORT: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

/// `R$ 1.234,56`
pub fn format_currency(value: f64) -> String {
    format_brl(value, 2)
}

/// `R$ 1.235`, for dashboard figures.
pub fn format_currency_whole(value: f64) -> String {
    format_brl(value, 0)
}

fn format_brl(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let (integer, fraction) = round_half_away(value.abs(), decimals);

    let grouped = integer
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().map(|b| *b as char).collect::<String>())
        .join(".");

    let is_zero = integer.chars().chain(fraction.chars()).all(|c| c == '0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if fraction.is_empty() {
        format!("{sign}R$\u{a0}{grouped}")
    } else {
        format!("{sign}R$\u{a0}{grouped},{fraction}")
    }
}

/// Rounds the shortest decimal form of `value` (non-negative) to `decimals`
/// places, halves away from zero. Returns the integer and fraction digits.
fn round_half_away(value: f64, decimals: usize) -> (String, String) {
    let shortest = value.to_string();
    let (integer, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits = integer.as_bytes().to_vec();
    digits.extend(fraction.bytes().chain(std::iter::repeat(b'0')).take(decimals));

    if fraction.as_bytes().get(decimals).is_some_and(|next| *next >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }

        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - decimals;
    let fraction = digits.split_off(split);

    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&fraction).into_owned(),
    )
}

/// `HH:MM` from an `HH:MM[:SS]` time string.
pub fn format_time(time: Option<&str>) -> String {
    match time {
        Some(time) if !time.is_empty() => time.chars().take(5).collect(),
        _ => "N/A".to_owned(),
    }
}

/// `09:00 - 10:00`
pub fn format_time_range(slot: &TimeSlot) -> String {
    format!(
        "{} - {}",
        format_time(slot.start_time.as_deref()),
        format_time(slot.end_time.as_deref())
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateStyle {
    /// quarta-feira, 15 de maio
    Long,
    /// qua., 15 de mai.
    Compact,
    /// 15/05/2024
    Numeric,
    /// 15 de mai.
    DayMonth,
}

impl DateStyle {
    fn fallback(&self) -> &'static str {
        match self {
            DateStyle::Long => "Data não disponível",
            DateStyle::Compact => "Data inválida",
            DateStyle::Numeric => "N/A",
            DateStyle::DayMonth => "-",
        }
    }
}

/// Parses the date part of `YYYY-MM-DD` or an ISO date-time.
pub fn parse_day(date: &str) -> Option<NaiveDate> {
    let day = date.split('T').next()?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

pub fn format_date(date: Option<&str>, style: DateStyle) -> String {
    let Some(day) = date.and_then(parse_day) else {
        return style.fallback().to_owned();
    };

    let weekday = day.weekday().num_days_from_sunday() as usize;
    let month = day.month0() as usize;

    match style {
        DateStyle::Long => format!("{}, {:02} de {}", WEEKDAYS[weekday], day.day(), MONTHS[month]),
        DateStyle::Compact => format!(
            "{}, {:02} de {}",
            WEEKDAYS_SHORT[weekday],
            day.day(),
            MONTHS_SHORT[month]
        ),
        DateStyle::Numeric => format!("{:02}/{:02}/{}", day.day(), day.month(), day.year()),
        DateStyle::DayMonth => format!("{:02} de {}", day.day(), MONTHS_SHORT[month]),
    }
}

pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Phone mask applied while typing: eleven digits become `(48) 99816-4811`,
/// shorter input is reduced to its digits and longer input is left alone.
pub fn format_phone(value: &str) -> String {
    let digits = digits_only(value);
    match digits.len() {
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        0..=10 => digits,
        _ => value.to_owned(),
    }
}

/// Digits only, at most four of them.
pub fn sanitize_pin(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).take(4).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct SlotGroup {
    /// `YYYY-MM-DD`, empty for slots without a date.
    pub day: String,
    pub slots: Vec<TimeSlot>,
}

/// Groups slots by day, days ascending, keeping the order of slots inside a day.
pub fn group_slots_by_date(slots: &[TimeSlot]) -> Vec<SlotGroup> {
    slots
        .iter()
        .cloned()
        .into_group_map_by(|slot| slot.day().unwrap_or_default().to_owned())
        .into_iter()
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(day, slots)| SlotGroup { day, slots })
        .collect()
}

pub fn status_label(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Pending => "Pendente",
        AppointmentStatus::Confirmed => "Confirmado",
        AppointmentStatus::Cancelled => "Cancelado",
        AppointmentStatus::Completed => "Concluído",
        AppointmentStatus::Unknown => "Desconhecido",
    }
}

/// Bulma tag flavor for a status badge.
pub fn status_class(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Confirmed => "tag is-info",
        AppointmentStatus::Cancelled => "tag is-danger",
        AppointmentStatus::Completed => "tag is-success",
        AppointmentStatus::Pending | AppointmentStatus::Unknown => "tag is-warning",
    }
}

pub fn payment_method_name(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Pix => "PIX",
        PaymentMethod::Dinheiro => "Dinheiro",
        PaymentMethod::Credito => "Crédito",
        PaymentMethod::Debito => "Débito",
    }
}

/// Label for a payment method as stored on an appointment.
pub fn payment_method_label(method: Option<&str>) -> String {
    match method {
        None | Some("") => "-".to_owned(),
        Some(raw) => match PaymentMethod::from_str(raw) {
            Ok(method) => payment_method_name(method).to_owned(),
            Err(_) => raw.to_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, "R$\u{a0}0,00"; "zero")]
    #[test_case(45.5, "R$\u{a0}45,50"; "cents")]
    #[test_case(1234.56, "R$\u{a0}1.234,56"; "thousands")]
    #[test_case(1234567.0, "R$\u{a0}1.234.567,00"; "millions")]
    #[test_case(-5.0, "-R$\u{a0}5,00"; "negative")]
    #[test_case(2.675, "R$\u{a0}2,68"; "half cent rounds away from zero")]
    #[test_case(0.125, "R$\u{a0}0,13"; "half cent below one real")]
    #[test_case(9.995, "R$\u{a0}10,00"; "cent carry into integer")]
    #[test_case(0.1 + 0.2, "R$\u{a0}0,30"; "binary noise")]
    #[test_case(f64::NAN, "R$\u{a0}0,00"; "not a number")]
    fn currency(value: f64, expected: &str) {
        assert_eq!(format_currency(value), expected);
    }

    #[test_case(1234.56, "R$\u{a0}1.235"; "rounds up")]
    #[test_case(152.5, "R$\u{a0}153"; "half on even integer rounds up")]
    #[test_case(0.5, "R$\u{a0}1"; "half below one")]
    #[test_case(999.5, "R$\u{a0}1.000"; "carry adds a group")]
    #[test_case(-0.4, "R$\u{a0}0"; "negative rounding to zero has no sign")]
    #[test_case(999.4, "R$\u{a0}999"; "rounds down")]
    fn currency_whole(value: f64, expected: &str) {
        assert_eq!(format_currency_whole(value), expected);
    }

    #[test_case(Some("09:30:00"), "09:30"; "with seconds")]
    #[test_case(Some("14:00"), "14:00"; "without seconds")]
    #[test_case(Some(""), "N/A"; "empty")]
    #[test_case(None, "N/A"; "missing")]
    fn time(value: Option<&str>, expected: &str) {
        assert_eq!(format_time(value), expected);
    }

    #[test_case(DateStyle::Long, "quarta-feira, 15 de maio"; "long")]
    #[test_case(DateStyle::Compact, "qua., 15 de mai."; "compact")]
    #[test_case(DateStyle::Numeric, "15/05/2024"; "numeric")]
    #[test_case(DateStyle::DayMonth, "15 de mai."; "day month")]
    fn date_styles(style: DateStyle, expected: &str) {
        assert_eq!(format_date(Some("2024-05-15T00:00:00.000Z"), style), expected);
    }

    #[test_case(None, DateStyle::Long, "Data não disponível"; "missing long")]
    #[test_case(Some("not a date"), DateStyle::Compact, "Data inválida"; "garbage compact")]
    #[test_case(Some("2024-13-40"), DateStyle::Numeric, "N/A"; "out of range numeric")]
    #[test_case(None, DateStyle::DayMonth, "-"; "missing day month")]
    fn date_fallbacks(value: Option<&str>, style: DateStyle, expected: &str) {
        assert_eq!(format_date(value, style), expected);
    }

    #[test_case("48998164811", "(48) 99816-4811"; "eleven digits")]
    #[test_case("(48) 99816-4811", "(48) 99816-4811"; "already formatted")]
    #[test_case("4899816", "4899816"; "partial")]
    #[test_case("48a9", "489"; "strips letters")]
    #[test_case("489981648112", "489981648112"; "too long is untouched")]
    fn phone(value: &str, expected: &str) {
        assert_eq!(format_phone(value), expected);
    }

    #[test_case("12a34", "1234"; "strips letters")]
    #[test_case("123456", "1234"; "truncates")]
    #[test_case("", ""; "empty")]
    fn pin(value: &str, expected: &str) {
        assert_eq!(sanitize_pin(value), expected);
    }

    #[test]
    fn groups_slots_by_day() {
        let slot = |id: &str, date: &str, start: &str| TimeSlot {
            id: id.into(),
            date: Some(date.to_owned()),
            start_time: Some(start.to_owned()),
            ..Default::default()
        };

        let groups = group_slots_by_date(&[
            slot("b1", "2024-05-16", "10:00"),
            slot("a1", "2024-05-15T00:00:00.000Z", "09:00"),
            slot("b2", "2024-05-16", "08:00"),
            slot("a2", "2024-05-15", "13:00"),
        ]);

        let summary = groups
            .iter()
            .map(|group| {
                (
                    group.day.as_str(),
                    group
                        .slots
                        .iter()
                        .map(|slot| slot.id.as_str())
                        .collect::<Vec<_>>(),
                )
            })
            .collect::<Vec<_>>();

        assert_eq!(
            summary,
            vec![("2024-05-15", vec!["a1", "a2"]), ("2024-05-16", vec!["b1", "b2"])]
        );
    }

    #[test_case(Some("pix"), "PIX"; "pix")]
    #[test_case(Some("credito"), "Crédito"; "credit")]
    #[test_case(Some("boleto"), "boleto"; "unknown is shown raw")]
    #[test_case(None, "-"; "missing")]
    fn payment_labels(method: Option<&str>, expected: &str) {
        assert_eq!(payment_method_label(method), expected);
    }
}
