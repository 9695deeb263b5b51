//! 建表语句的括号扫描

/// 列定义右括号在文本中的字节位置
///
/// 跳过引号（单引号、双引号、反引号）内的内容，引号内支持 `\` 转义。
/// 第一个左括号之前出现右括号，或括号不配对时返回 `None`。
pub(crate) fn column_list_close(ddl: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escape_next = false;

    for (idx, ch) in ddl.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match (quote, ch) {
            (Some(_), '\\') => escape_next = true,
            (Some(open), c) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"' | '`') => quote = Some(ch),
            (None, '(') => depth += 1,
            (None, ')') => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }

    None
}
