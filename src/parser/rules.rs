//! 줄 분류 규칙
//!
//! 규칙은 `RULES` 순서대로 시험하며 처음 맞는 규칙이 이긴다.
//! 각 규칙은 줄 하나만 보고 판단하므로 따로 떼어 테스트할 수 있다.

use once_cell::sync::Lazy;
use regex::Regex;

/// 원문자 보기 기호 → 칸 번호
pub static CIRCLED_SLOTS: phf::Map<char, usize> = phf::phf_map! {
    '①' => 0,
    '②' => 1,
    '③' => 2,
    '④' => 3,
};

static SUBJECT_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(제?[0-9]+과목)[:\s]+(.+)").expect("valid subject regex"));
static QUESTION_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[문제\]\s*(?:[0-9]+)?\.?\s*(.*)").expect("valid question regex"));
static NUMBERED_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.\s*").expect("valid numbered regex"));
static CHOICE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[보기\]\s*(.*)").expect("valid choice regex"));
static ANSWER_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(?:답|정답)\]\s*([0-9]+|[①②③④])").expect("valid answer regex")
});
static EXPLANATION_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(?:해설|풀이)\]\s*(.*)").expect("valid explanation regex"));

/// 분류된 줄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `제1과목: 과목명` — 과목명
    SubjectHeader(&'a str),
    /// `[문제]` 또는 `N.` 로 시작 — 번호를 뗀 본문
    QuestionStart(&'a str),
    /// `[보기]` — 같은 줄의 보기 내용
    Choices(&'a str),
    /// `[답]`/`[정답]` — 1~4로 해석되면 Some
    Answer(Option<u8>),
    /// `[해설]`/`[풀이]` — 나머지 내용
    Explanation(&'a str),
    /// 태그 없는 이어지는 줄
    Text(&'a str),
}

/// 분류 시점에 규칙이 참고하는 파서 상태
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// 번호 시작(`N.`) 대체 규칙을 쓸 수 있는지.
    /// 열린 문제가 없거나 모드가 NONE일 때만 참.
    pub allow_numbered_start: bool,
}

/// 이름 붙은 분류 규칙
pub struct Rule {
    pub name: &'static str,
    pub matcher: fn(&str, Context) -> Option<Line<'_>>,
}

pub static RULES: &[Rule] = &[
    Rule { name: "subject_header", matcher: subject_header },
    Rule { name: "question_tag", matcher: question_tag },
    Rule { name: "numbered_start", matcher: numbered_start },
    Rule { name: "choice_tag", matcher: choice_tag },
    Rule { name: "answer_tag", matcher: answer_tag },
    Rule { name: "explanation_tag", matcher: explanation_tag },
];

/// 규칙을 순서대로 적용한다. 아무것도 맞지 않으면 `Line::Text`.
pub fn classify(line: &str, ctx: Context) -> Line<'_> {
    RULES
        .iter()
        .find_map(|rule| (rule.matcher)(line, ctx))
        .unwrap_or(Line::Text(line))
}

fn capture<'a>(re: &Regex, line: &'a str, group: usize) -> Option<&'a str> {
    re.captures(line)
        .map(|caps| caps.get(group).map_or("", |m| m.as_str()))
}

pub fn subject_header(line: &str, _ctx: Context) -> Option<Line<'_>> {
    capture(&SUBJECT_HEADER, line, 2).map(|rest| Line::SubjectHeader(rest.trim()))
}

pub fn question_tag(line: &str, _ctx: Context) -> Option<Line<'_>> {
    capture(&QUESTION_TAG, line, 1).map(Line::QuestionStart)
}

pub fn numbered_start(line: &str, ctx: Context) -> Option<Line<'_>> {
    if !ctx.allow_numbered_start {
        return None;
    }
    NUMBERED_START
        .find(line)
        .map(|m| Line::QuestionStart(&line[m.end()..]))
}

pub fn choice_tag(line: &str, _ctx: Context) -> Option<Line<'_>> {
    capture(&CHOICE_TAG, line, 1).map(Line::Choices)
}

pub fn answer_tag(line: &str, _ctx: Context) -> Option<Line<'_>> {
    capture(&ANSWER_TAG, line, 1).map(|value| Line::Answer(answer_number(value)))
}

pub fn explanation_tag(line: &str, _ctx: Context) -> Option<Line<'_>> {
    capture(&EXPLANATION_TAG, line, 1).map(Line::Explanation)
}

/// `1`~`4` 또는 `①`~`④` 를 1~4로 바꾼다
pub fn answer_number(value: &str) -> Option<u8> {
    let mut chars = value.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };

    match c {
        '1'..='4' => c.to_digit(10).map(|d| d as u8),
        _ => CIRCLED_SLOTS.get(&c).map(|slot| *slot as u8 + 1),
    }
}

/// 원문자로 나뉜 보기 내용을 (칸, 내용) 목록으로 자른다
///
/// 칸은 등장 순서가 아니라 기호로 정해진다 (① → 0). 첫 기호 앞의 글자와
/// 비어 있는 내용은 버린다.
pub fn split_choices(content: &str) -> Vec<(usize, &str)> {
    let mut found = Vec::new();
    let mut current: Option<(usize, usize)> = None;

    for (pos, c) in content.char_indices() {
        if let Some(&slot) = CIRCLED_SLOTS.get(&c) {
            if let Some((prev_slot, start)) = current {
                push_choice(&mut found, prev_slot, &content[start..pos]);
            }
            current = Some((slot, pos + c.len_utf8()));
        }
    }
    if let Some((slot, start)) = current {
        push_choice(&mut found, slot, &content[start..]);
    }

    found
}

fn push_choice<'a>(found: &mut Vec<(usize, &'a str)>, slot: usize, text: &'a str) {
    let text = text.trim();
    if !text.is_empty() {
        found.push((slot, text));
    }
}

/// 줄 전체가 원문자 하나뿐이면 그 칸 번호
///
/// OCR 결과에서 기호와 보기 내용이 다른 줄로 갈라진 경우
pub fn lone_circled(line: &str) -> Option<usize> {
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => CIRCLED_SLOTS.get(&c).copied(),
        _ => None,
    }
}

/// 줄이 원문자 보기 기호로 시작하는지
pub fn starts_with_circled(line: &str) -> bool {
    line.chars()
        .next()
        .is_some_and(|c| CIRCLED_SLOTS.contains_key(&c))
}
