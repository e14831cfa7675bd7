//! Russian-locale number formatting used across the site.

/// Group digits by thousands with a no-break space, as `toLocaleString('ru-RU')` does.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(ch);
    }
    out
}

/// Decimal with a comma separator and trailing zeros dropped (`5.5` -> `5,5`, `3.0` -> `3`).
pub fn decimal(value: f32) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded).replace('.', ",")
    }
}

/// "Найдено 1 автомобиль", "Найдено 3 автомобиля", "Найдено 6 автомобилей".
pub fn cars_found(count: usize) -> String {
    let noun = match (count % 10, count % 100) {
        (1, n) if n != 11 => "автомобиль",
        (2..=4, n) if !(12..=14).contains(&n) => "автомобиля",
        _ => "автомобилей",
    };
    format!("Найдено {} {}", count, noun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_from_the_right() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(15_060), "15\u{a0}060");
        assert_eq!(group_thousands(12_500_000), "12\u{a0}500\u{a0}000");
    }

    #[test]
    fn decimals_use_comma() {
        assert_eq!(decimal(5.5), "5,5");
        assert_eq!(decimal(0.0), "0");
        assert_eq!(decimal(2.1), "2,1");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(cars_found(1), "Найдено 1 автомобиль");
        assert_eq!(cars_found(3), "Найдено 3 автомобиля");
        assert_eq!(cars_found(6), "Найдено 6 автомобилей");
        assert_eq!(cars_found(11), "Найдено 11 автомобилей");
        assert_eq!(cars_found(0), "Найдено 0 автомобилей");
    }
}
