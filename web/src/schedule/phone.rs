/// Formats a raw phone string as `(AA) BBBBB-CCCC`, degrading gracefully when
/// fewer digits are present: the grouping applied depends on how many digits
/// survive the strip, and short inputs are left partially formatted rather
/// than rejected. Because formatting starts from the stripped digits, feeding
/// an already formatted number back in reproduces it.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        0..=2 => digits,
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        // Mobile numbers carry a ninth digit; anything beyond eleven is noise.
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..11]),
    }
}

#[cfg(test)]
mod tests {
    use super::format_phone;

    #[test]
    fn formats_eleven_digit_mobile_number() {
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn formats_ten_digit_landline_number() {
        assert_eq!(format_phone("1132654321"), "(11) 3265-4321");
    }

    #[test]
    fn strips_symbols_before_grouping() {
        assert_eq!(format_phone("+55 (11) 98765-4321"), "(55) 11987-6543");
        assert_eq!(format_phone("11 9 8765 4321"), "(11) 98765-4321");
    }

    #[test]
    fn reformatting_formatted_input_is_stable() {
        let formatted = format_phone("11987654321");
        assert_eq!(format_phone(&formatted), formatted);
    }

    #[test]
    fn short_inputs_format_partially() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "1");
        assert_eq!(format_phone("11"), "11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("113265"), "(11) 3265");
        assert_eq!(format_phone("1132654"), "(11) 3265-4");
    }

    #[test]
    fn extra_digits_are_dropped() {
        assert_eq!(format_phone("119876543210000"), "(11) 98765-4321");
    }

    #[test]
    fn non_digit_input_formats_to_empty() {
        assert_eq!(format_phone("no phone"), "");
    }
}
