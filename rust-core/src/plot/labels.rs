//! LaTeX captions for decomposition plots

/// "n - i" for i >= 0, "n + |i|" otherwise
fn shifted_argument(i: i64) -> String {
    if i >= 0 {
        format!("n - {}", i)
    } else {
        format!("n + {}", i.unsigned_abs())
    }
}

/// Caption for one scaled impulse, e.g. `x(2)\,\delta(n - 2)`
pub fn impulse_label(signal: &str, i: i64) -> String {
    format!("{}({})\\,\\delta({})", signal, i, shifted_argument(i))
}

/// Caption for one shifted response, e.g. `x(-1)\,h(n + 1)`
pub fn shifted_label(signal: &str, kernel: &str, i: i64) -> String {
    format!("{}({})\\,{}({})", signal, i, kernel, shifted_argument(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impulse_label() {
        assert_eq!(impulse_label("x", 2), r"x(2)\,\delta(n - 2)");
        assert_eq!(impulse_label("x", 0), r"x(0)\,\delta(n - 0)");
        assert_eq!(impulse_label("x", -3), r"x(-3)\,\delta(n + 3)");
    }

    #[test]
    fn test_shifted_label() {
        assert_eq!(shifted_label("x", "h", 1), r"x(1)\,h(n - 1)");
        assert_eq!(shifted_label("x", "h", -1), r"x(-1)\,h(n + 1)");
        assert_eq!(shifted_label("x", "h", i64::MIN), format!(r"x({})\,h(n + 9223372036854775808)", i64::MIN));
    }
}
