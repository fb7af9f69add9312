/// `MainAxisAlignment.*` → `justifyContent`. Defaults to `flex-start`.
pub fn main_axis(text: &str) -> &'static str {
    match text.trim() {
        "MainAxisAlignment.start" => "flex-start",
        "MainAxisAlignment.end" => "flex-end",
        "MainAxisAlignment.center" => "center",
        "MainAxisAlignment.spaceBetween" => "space-between",
        "MainAxisAlignment.spaceAround" => "space-around",
        "MainAxisAlignment.spaceEvenly" => "space-evenly",
        _ => "flex-start",
    }
}

/// `CrossAxisAlignment.*` → `alignItems`. Defaults to `stretch`.
pub fn cross_axis(text: &str) -> &'static str {
    match text.trim() {
        "CrossAxisAlignment.start" => "flex-start",
        "CrossAxisAlignment.end" => "flex-end",
        "CrossAxisAlignment.center" => "center",
        "CrossAxisAlignment.stretch" => "stretch",
        "CrossAxisAlignment.baseline" => "baseline",
        _ => "stretch",
    }
}

/// `TextAlign.*` → `textAlign`. `start`/`end` resolve left-to-right.
pub fn text_align(text: &str) -> &'static str {
    match text.trim() {
        "TextAlign.left" | "TextAlign.start" => "left",
        "TextAlign.right" | "TextAlign.end" => "right",
        "TextAlign.center" => "center",
        "TextAlign.justify" => "justify",
        _ => "left",
    }
}

/// `Alignment.*` → `(justifyContent, alignItems)` for a column-direction view.
pub fn alignment(text: &str) -> Option<(&'static str, &'static str)> {
    let (vertical, horizontal) = match text.trim().strip_prefix("Alignment.")? {
        "topLeft" => ("flex-start", "flex-start"),
        "topCenter" => ("flex-start", "center"),
        "topRight" => ("flex-start", "flex-end"),
        "centerLeft" => ("center", "flex-start"),
        "center" => ("center", "center"),
        "centerRight" => ("center", "flex-end"),
        "bottomLeft" => ("flex-end", "flex-start"),
        "bottomCenter" => ("flex-end", "center"),
        "bottomRight" => ("flex-end", "flex-end"),
        _ => return None,
    };
    Some((vertical, horizontal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_axis_values() {
        assert_eq!(main_axis("MainAxisAlignment.start"), "flex-start");
        assert_eq!(main_axis("MainAxisAlignment.center"), "center");
        assert_eq!(main_axis("MainAxisAlignment.spaceBetween"), "space-between");
        assert_eq!(main_axis("MainAxisAlignment.spaceEvenly"), "space-evenly");
        assert_eq!(main_axis("MainAxisAlignment.bogus"), "flex-start");
    }

    #[test]
    fn cross_axis_values() {
        assert_eq!(cross_axis("CrossAxisAlignment.start"), "flex-start");
        assert_eq!(cross_axis("CrossAxisAlignment.center"), "center");
        assert_eq!(cross_axis("CrossAxisAlignment.stretch"), "stretch");
        assert_eq!(cross_axis("CrossAxisAlignment.baseline"), "baseline");
        assert_eq!(cross_axis(""), "stretch");
    }

    #[test]
    fn text_align_values() {
        assert_eq!(text_align("TextAlign.start"), "left");
        assert_eq!(text_align("TextAlign.end"), "right");
        assert_eq!(text_align("TextAlign.justify"), "justify");
        assert_eq!(text_align("center"), "left");
    }

    #[test]
    fn alignment_values() {
        assert_eq!(alignment("Alignment.center"), Some(("center", "center")));
        assert_eq!(alignment("Alignment.bottomRight"), Some(("flex-end", "flex-end")));
        assert_eq!(alignment("Alignment(0.5, 0.5)"), None);
    }
}
