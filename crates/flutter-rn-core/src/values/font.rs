/// `FontWeight.*` → `fontWeight`. Numeric weights keep their digits.
pub fn weight(text: &str) -> &'static str {
    match text.trim() {
        "FontWeight.w100" => "100",
        "FontWeight.w200" => "200",
        "FontWeight.w300" => "300",
        "FontWeight.w400" => "400",
        "FontWeight.w500" => "500",
        "FontWeight.w600" => "600",
        "FontWeight.w700" => "700",
        "FontWeight.w800" => "800",
        "FontWeight.w900" => "900",
        "FontWeight.bold" => "bold",
        _ => "normal",
    }
}

/// `FontStyle.*` → `fontStyle`.
pub fn style(text: &str) -> &'static str {
    if text.trim() == "FontStyle.italic" { "italic" } else { "normal" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights() {
        assert_eq!(weight("FontWeight.bold"), "bold");
        assert_eq!(weight("FontWeight.w700"), "700");
        assert_eq!(weight("FontWeight.w100"), "100");
        assert_eq!(weight("FontWeight.normal"), "normal");
        assert_eq!(weight("FontWeight.heavy"), "normal");
    }

    #[test]
    fn styles() {
        assert_eq!(style("FontStyle.italic"), "italic");
        assert_eq!(style("FontStyle.normal"), "normal");
        assert_eq!(style("oblique"), "normal");
    }
}
