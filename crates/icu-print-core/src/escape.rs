use alloc::string::String;

const BRACES: [char; 2] = ['{', '}'];

pub fn escape_literal(text: &str, inside_plural: bool) -> String {
    let quoted = quote_braces(text);
    if inside_plural {
        quoted.replace('#', "'#'")
    } else {
        quoted
    }
}

fn quote_braces(text: &str) -> String {
    let (Some(start), Some(last)) = (text.find(BRACES), text.rfind(BRACES)) else {
        return String::from(text);
    };
    // braces are ASCII, so `last + 1` is a char boundary
    let end = last + 1;
    let mut out = String::with_capacity(text.len() + 2);
    out.push_str(&text[..start]);
    out.push('\'');
    out.push_str(&text[start..end]);
    out.push('\'');
    out.push_str(&text[end..]);
    out
}
