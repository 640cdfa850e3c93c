pub struct FormattingUtils;

impl FormattingUtils {
    /// 12500000 -> "€12.5M", 750000 -> "€750K"
    pub fn format_money(amount: i64) -> String {
        let sign = if amount < 0 { "-" } else { "" };
        let abs = amount.unsigned_abs() as f64;

        if abs >= 1_000_000.0 {
            format!("{}€{}M", sign, Self::trim(abs / 1_000_000.0))
        } else if abs >= 1_000.0 {
            format!("{}€{}K", sign, Self::trim(abs / 1_000.0))
        } else {
            format!("{}€{}", sign, abs)
        }
    }

    fn trim(value: f64) -> String {
        let formatted = format!("{:.1}", value);

        formatted
            .strip_suffix(".0")
            .map(String::from)
            .unwrap_or(formatted)
    }
}
