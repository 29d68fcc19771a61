use crate::constants::MAX_QUERY_CHARS;

// SPARQLの文字列リテラルを壊す文字
const FORBIDDEN_CHARS: [char; 4] = ['"', '\'', '\\', '*'];

// クォート・エスケープ文字を取り除き、最大文字数で切り詰める
pub fn escape_query(text: &str) -> String {
    text.chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(c))
        .take(MAX_QUERY_CHARS)
        .collect()
}

// 文字か数字が一つでも含まれているかどうか
pub fn has_letter(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}

// 各単語の先頭を大文字にする (例: "tour eiffel" -> "Tour Eiffel")
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start && c.is_alphabetic() {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    result
}
