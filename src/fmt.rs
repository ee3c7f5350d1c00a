/// Format a count with thousands separators: 1,234
pub fn number(val: usize) -> String {
    let digits = val.to_string();
    let mut with_commas = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    with_commas.chars().rev().collect()
}

/// One decimal place with a percent sign: 12.5%
pub fn percent(val: f64) -> String {
    format!("{val:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_formatting() {
        assert_eq!(number(0), "0");
        assert_eq!(number(999), "999");
        assert_eq!(number(1000), "1,000");
        assert_eq!(number(9465), "9,465");
        assert_eq!(number(1234567), "1,234,567");
    }

    #[test]
    fn test_percent_formatting() {
        assert_eq!(percent(50.0), "50.0%");
        assert_eq!(percent(33.333), "33.3%");
    }
}
