//! 입력 정리: 원화 기호 보정, 태그 줄바꿈, 빈 줄 제거

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// 줄 맨 앞으로 끌어내는 태그들
static TAG_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(?:문제|보기|답|정답|해설|풀이)\]").expect("valid tag regex"));

const WON_GLYPHS: [char; 2] = ['₩', '￦'];
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// OCR이 역슬래시를 원화 기호로 읽는 경우를 되돌린다 (LaTeX 수식용)
pub fn replace_won_glyphs(text: &str) -> Cow<'_, str> {
    if text.contains(WON_GLYPHS) {
        Cow::Owned(text.replace(WON_GLYPHS, "\\"))
    } else {
        Cow::Borrowed(text)
    }
}

/// 원문을 정리된 줄 목록으로 바꾼다
///
/// 태그는 줄 중간에 있어도 새 줄로 시작하고, 각 줄은 공백과 BOM을 걷어 내며
/// 빈 줄은 버린다.
pub fn normalize_lines(text: &str) -> Vec<String> {
    let corrected = replace_won_glyphs(text);
    let split = TAG_BOUNDARY.replace_all(&corrected, "\n$0");

    split
        .split('\n')
        .map(trim_line)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}
