//! Утилиты форматирования чисел для отчётов
//!
//! Округление везде как у `Number.prototype.toFixed`: по точному десятичному
//! значению f64, половина округляется от нуля (1.125 -> "1.13").

/// Столько знаков дробной части хватает для точной записи любого f64
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Фиксированное число знаков после запятой, половина от нуля.
///
/// ```ignore
/// assert_eq!(to_fixed(1.125, 2), "1.13");
/// assert_eq!(to_fixed(1.005, 2), "1.00"); // 1.005 в f64 чуть меньше 1.005
/// ```
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Rust печатает точное десятичное значение, без двоичного округления
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().take(decimals))
        .collect();
    let round_up = fraction
        .as_bytes()
        .get(decimals)
        .is_some_and(|digit| *digit >= b'5');

    if round_up {
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

    let integer_len = digits.len() - decimals;
    let mut result = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        result.push('-');
    }
    result.extend(digits[..integer_len].iter().map(|d| char::from(*d)));
    if decimals > 0 {
        result.push('.');
        result.extend(digits[integer_len..].iter().map(|d| char::from(*d)));
    }
    result
}

/// Денежное значение: знак доллара и ровно 2 знака после запятой, без разделителя тысяч
///
/// # Примеры
///
/// ```ignore
/// assert_eq!(format_currency(12.5), "$12.50");
/// assert_eq!(format_currency(-3.0), "$-3.00");
/// ```
pub fn format_currency(value: f64) -> String {
    format!("${}", to_fixed(value, 2))
}

/// Процент с 2 знаками после запятой
///
/// ```ignore
/// assert_eq!(format_percent(36.6665), "36.67%");
/// ```
pub fn format_percent(value: f64) -> String {
    format!("{}%", to_fixed(value, 2))
}

/// Процент в том виде, в каком его прислал сервер: `7.5%`, `40%`
pub fn format_raw_percent(value: f64) -> String {
    format!("{}%", value)
}

/// Модуль изменения с одним знаком после запятой: `12.3%`
pub fn format_change(value: f64) -> String {
    format!("{}%", to_fixed(value.abs(), 1))
}

/// Число с разделителем тысяч (запятая) и не более чем 3 знаками дробной части.
/// Нули в конце дробной части отбрасываются.
///
/// ```ignore
/// assert_eq!(format_grouped(1234567.5), "1,234,567.5");
/// assert_eq!(format_grouped(1000.0), "1,000");
/// ```
pub fn format_grouped(value: f64) -> String {
    let fixed = to_fixed(value, 3);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    let (integer_part, decimal_part) = match trimmed.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (trimmed, None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer_part),
    };

    // Вставляем запятые каждые 3 цифры с конца целой части
    let mut reversed = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(c);
    }
    let grouped: String = reversed.chars().rev().collect();

    let sign = if grouped == "0" && decimal_part.is_none() {
        ""
    } else {
        sign
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}
