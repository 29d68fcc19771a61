// 要約の上限値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLimits {
    // 切り詰める最大文字数
    pub max_chars: usize,
    // 最大の文の数
    pub max_sentences: usize,
    // この文字数を超えたら次の文を追加しない
    pub warning_chars: usize,
}

// 長いabstractを文の区切りを保ったまま短くする
// 空文字を返すことがあるので、呼び出し側で扱うこと
pub fn limit_text(text: &str, limits: &SummaryLimits) -> String {
    let truncated: String = text.chars().take(limits.max_chars).collect();
    // 末尾の"."で空の文ができないようにする
    let truncated = truncated.strip_suffix('.').unwrap_or(&truncated);
    if truncated.is_empty() {
        return String::new();
    }

    let mut reduced = String::new();
    let mut reduced_chars = 0;
    for sentence in truncated.split('.').take(limits.max_sentences) {
        if reduced_chars >= limits.warning_chars {
            break;
        }
        reduced.push_str(sentence);
        reduced.push('.');
        reduced_chars += sentence.chars().count() + 1;
    }
    reduced
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: SummaryLimits = SummaryLimits {
        max_chars: 1000,
        max_sentences: 3,
        warning_chars: 300,
    };

    #[test]
    fn test_limit_sentences() {
        let text = "Un. Deux. Trois. Quatre. Cinq.";
        assert_eq!(limit_text(text, &LIMITS), "Un. Deux. Trois.");
    }

    #[test]
    fn test_limit_chars() {
        let limits = SummaryLimits {
            max_chars: 12,
            ..LIMITS
        };
        // "Paris est la" で切れて、最後の断片にも"."が付く
        assert_eq!(
            limit_text("Paris est la capitale. De la France.", &limits),
            "Paris est la."
        );
    }

    #[test]
    fn test_limit_warning_chars() {
        let limits = SummaryLimits {
            warning_chars: 10,
            ..LIMITS
        };
        let text = "Une phrase assez longue. Deux. Trois.";
        assert_eq!(limit_text(text, &limits), "Une phrase assez longue.");
    }

    #[test]
    fn test_limit_counts_chars_not_bytes() {
        let limits = SummaryLimits {
            max_chars: 5,
            ..LIMITS
        };
        assert_eq!(limit_text("éééééééé", &limits), "ééééé.");
    }

    #[test]
    fn test_no_content() {
        assert_eq!(limit_text("No content", &LIMITS), "No content.");
    }

    #[test]
    fn test_warning_chars_boundary() {
        // "Un." で3文字ちょうどになったら次の文は追加しない
        let limits = SummaryLimits {
            warning_chars: 3,
            ..LIMITS
        };
        assert_eq!(limit_text("Un. Deux. Trois.", &limits), "Un.");

        // 3文字はまだ上限未満なので次の文を追加する
        let limits = SummaryLimits {
            warning_chars: 4,
            ..LIMITS
        };
        assert_eq!(limit_text("Un. Deux. Trois.", &limits), "Un. Deux.");
    }

    #[test]
    fn test_zero_sentences() {
        let limits = SummaryLimits {
            max_sentences: 0,
            ..LIMITS
        };
        assert_eq!(limit_text("Un. Deux.", &limits), "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(limit_text("", &LIMITS), "");
        assert_eq!(limit_text(".", &LIMITS), "");
        let limits = SummaryLimits {
            max_chars: 0,
            ..LIMITS
        };
        assert_eq!(limit_text("Un. Deux.", &limits), "");
    }

    #[test]
    fn test_trailing_period() {
        assert_eq!(limit_text("Un. Deux.", &LIMITS), "Un. Deux.");
        assert_eq!(limit_text("Un. Deux", &LIMITS), "Un. Deux.");
    }
}
