/// Indent width the generator emits.
pub const DEFAULT_INDENT: usize = 2;

/// Re-render generated code with `indent_size` spaces per level.
///
/// Each indented line becomes `(leading / 2) * indent_size` spaces followed by
/// the trimmed line. Unindented lines are kept as they are.
pub fn reformat(code: &str, indent_size: usize) -> String {
    if indent_size == DEFAULT_INDENT {
        return code.to_string();
    }
    code.split('\n')
        .map(|line| {
            let leading = line.len() - line.trim_start().len();
            if leading == 0 {
                return line.to_string();
            }
            let level = leading / DEFAULT_INDENT;
            format!("{}{}", " ".repeat(level * indent_size), line.trim())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
