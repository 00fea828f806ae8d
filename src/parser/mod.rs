//! 일괄 등록 텍스트 파서
//!
//! 태그가 느슨하게 붙은 텍스트(붙여넣기, OCR, PDF 추출 결과)를 문제 목록으로 바꾼다.
//!
//! 처리 순서:
//! 1. `normalize` - 원화 기호 보정, 태그 줄바꿈, 빈 줄 제거
//! 2. `rules` - 줄 하나를 머리말/문제 시작/보기/정답/해설/이어지는 줄로 분류
//! 3. `Accumulator` - 열린 문제에 내용을 쌓고 경계에서 결과 목록으로 내보낸다

pub mod metadata;
pub mod normalize;
pub mod rules;

pub use metadata::{extract_metadata, MetadataHint};
pub use normalize::{normalize_lines, replace_won_glyphs};
pub use rules::{classify, Line};

use crate::models::question::QuestionRecord;
use rules::Context;
use tracing::debug;

/// 태그 없는 줄을 어디에 붙일지 정하는 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    None,
    Question,
    Choices,
    Explanation,
}

/// 한 번의 파싱 동안만 살아 있는 상태
struct Accumulator<'a> {
    workbook_title: &'a str,
    current_subject: String,
    current: Option<QuestionRecord>,
    mode: Mode,
    results: Vec<QuestionRecord>,
}

impl<'a> Accumulator<'a> {
    fn new(default_subject: &str, workbook_title: &'a str) -> Self {
        Self {
            workbook_title,
            current_subject: default_subject.trim().to_string(),
            current: None,
            mode: Mode::None,
            results: Vec::new(),
        }
    }

    fn context(&self) -> Context {
        Context {
            allow_numbered_start: self.current.is_none() || self.mode == Mode::None,
        }
    }

    /// 열린 문제를 결과로 내보낸다. 정답이 없으면 0으로 남는다.
    fn flush(&mut self) {
        if let Some(record) = self.current.take() {
            self.results.push(record);
        }
    }

    fn feed(&mut self, line: &str) {
        match classify(line, self.context()) {
            Line::SubjectHeader(subject) => {
                self.flush();
                self.current_subject = subject.to_string();
                self.mode = Mode::None;
            }
            Line::QuestionStart(body) => {
                self.flush();
                self.current = Some(QuestionRecord::new(
                    self.workbook_title,
                    &self.current_subject,
                    body,
                ));
                self.mode = Mode::Question;
            }
            other => self.feed_open(other),
        }
    }

    /// 열린 문제 안에서만 의미 있는 줄. 문제가 없으면 버린다.
    fn feed_open(&mut self, line: Line<'_>) {
        let Some(record) = self.current.as_mut() else {
            return;
        };

        match line {
            Line::Choices(content) => {
                self.mode = Mode::Choices;
                fill_choices(record, content);
            }
            Line::Answer(answer) => {
                if let Some(answer) = answer {
                    record.answer = answer;
                }
                self.mode = Mode::None;
            }
            Line::Explanation(rest) => {
                record.explanation = rest.to_string();
                self.mode = Mode::Explanation;
            }
            Line::Text(text) => match self.mode {
                Mode::Question => append(&mut record.question_text, text),
                Mode::Explanation => append(&mut record.explanation, text),
                Mode::Choices => {
                    if let Some(slot) = rules::lone_circled(text) {
                        // 빈 칸을 열어 두면 다음 줄이 이 칸에 붙는다
                        record.choices.set(slot, "");
                    } else if rules::starts_with_circled(text) {
                        fill_choices(record, text);
                    } else if !record.choices.append_to_last(text) {
                        debug!("보기 앞의 이어지는 줄을 버림: {}", text);
                    }
                }
                Mode::None => {}
            },
            // 문제 경계는 feed에서 처리한다
            Line::SubjectHeader(_) | Line::QuestionStart(_) => {}
        }
    }

    fn finish(mut self) -> Vec<QuestionRecord> {
        self.flush();
        self.results
    }
}

fn fill_choices(record: &mut QuestionRecord, content: &str) {
    for (slot, text) in rules::split_choices(content) {
        record.choices.set(slot, text);
    }
}

fn append(target: &mut String, line: &str) {
    target.push(' ');
    target.push_str(line);
}

/// 텍스트를 문제 목록으로 파싱한다
///
/// # 인자
/// - `text`: 원문 (OCR 결과 등)
/// - `default_subject`: 과목 머리말이 나오기 전까지 쓸 과목
/// - `default_workbook_title`: 모든 문제에 붙는 회차
///
/// # 반환
/// 문제 시작 순서대로 정렬된 목록. 실패하지 않으며 결과가 없으면 빈 목록이다.
pub fn parse_text(
    text: &str,
    default_subject: &str,
    default_workbook_title: &str,
) -> Vec<QuestionRecord> {
    let workbook_title = default_workbook_title.trim();
    let mut acc = Accumulator::new(default_subject, workbook_title);

    for line in normalize_lines(text) {
        acc.feed(&line);
    }

    let records = acc.finish();
    debug!("파싱 완료: {} 문제", records.len());
    records
}

/// 파싱 결과 요약 (로그용)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseSummary {
    pub questions: usize,
    pub missing_answer: usize,
    pub incomplete_choices: usize,
}

impl ParseSummary {
    pub fn of(records: &[QuestionRecord]) -> Self {
        Self {
            questions: records.len(),
            missing_answer: records.iter().filter(|r| !r.has_answer()).count(),
            incomplete_choices: records
                .iter()
                .filter(|r| r.choices.filled_count() < crate::models::question::CHOICE_SLOTS)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::{UNCLASSIFIED_SUBJECT, UNCLASSIFIED_WORKBOOK};

    fn choices(record: &QuestionRecord) -> Vec<Option<&str>> {
        record.choices.iter().collect()
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(parse_text("", "Math", "Round1").is_empty());
        assert!(parse_text("\n\n   \n", "Math", "Round1").is_empty());
    }

    #[test]
    fn test_basic_extraction() {
        let text = "[문제] 1. What is X?\n[보기] ① A ② B ③ C ④ D\n[답] 2\n[해설] Because B.";
        let records = parse_text(text, "Math", "Round1");

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert!(r.question_text.contains("What is X?"));
        assert_eq!(choices(r), vec![Some("A"), Some("B"), Some("C"), Some("D")]);
        assert_eq!(r.answer, 2);
        assert_eq!(r.explanation, "Because B.");
        assert_eq!(r.subject, "Math");
        assert_eq!(r.workbook_title, "Round1");
    }

    #[test]
    fn test_numbered_line_in_explanation_is_not_a_new_question() {
        let text = "[문제] 질문\n[보기] ① 가 ② 나 ③ 다 ④ 라\n[해설] 이유는 다음과 같다\n3. something";
        let records = parse_text(text, "", "");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].explanation, "이유는 다음과 같다 3. something");
    }

    #[test]
    fn test_numbered_line_in_question_body_is_continuation() {
        let records = parse_text("1. 다음 중 옳은 것은?\n2. 라는 문장이 있다", "", "");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question_text, "다음 중 옳은 것은? 2. 라는 문장이 있다");
    }

    #[test]
    fn test_subject_header_applies_to_following_questions() {
        let text = "제1과목: Physics\n[문제] 첫째\n[답] 1\n[문제] 둘째\n[답] 3";
        let records = parse_text(text, "Math", "R");

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.subject == "Physics"));
    }

    #[test]
    fn test_subject_header_flushes_open_question() {
        let text = "[문제] 하나\n제2과목: 냉동공학\n이어지지 않는 줄\n[문제] 둘";
        let records = parse_text(text, "공기조화", "");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].subject, "공기조화");
        assert_eq!(records[0].question_text, "하나");
        assert_eq!(records[1].subject, "냉동공학");
    }

    #[test]
    fn test_missing_answer_defaults_to_zero() {
        let records = parse_text("[문제] 질문\n[보기] ① 가 ② 나", "", "");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].answer, 0);
        assert_eq!(records[0].workbook_title, UNCLASSIFIED_WORKBOOK);
        assert_eq!(records[0].subject, UNCLASSIFIED_SUBJECT);
    }

    #[test]
    fn test_choice_continuation_appends_to_last_slot() {
        let text = "[문제] 질문\n[보기]\n① 첫째\n② 둘째 보기는\n길어서 두 줄이다\n③ 셋째\n④ 넷째\n[답] ②";
        let records = parse_text(text, "", "");

        assert_eq!(
            choices(&records[0]),
            vec![
                Some("첫째"),
                Some("둘째 보기는 길어서 두 줄이다"),
                Some("셋째"),
                Some("넷째")
            ]
        );
        assert_eq!(records[0].answer, 2);
    }

    #[test]
    fn test_lone_glyph_line_opens_its_slot() {
        let text = "[문제] 질문\n[보기]\n① A\n②\nB\n③ C\n④ D";
        let records = parse_text(text, "", "");
        assert_eq!(
            choices(&records[0]),
            vec![Some("A"), Some("B"), Some("C"), Some("D")]
        );
    }

    #[test]
    fn test_byte_order_mark_does_not_hide_first_line() {
        let records = parse_text("\u{FEFF}1. 첫 문제\n[답] 1\n2. 둘째\n[답] 2", "", "");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].question_text, "첫 문제");

        let records = parse_text("\u{FEFF}제1과목: 공기조화\n[문제] 질문", "기본", "");
        assert_eq!(records[0].subject, "공기조화");
    }

    #[test]
    fn test_choice_line_with_several_glyphs() {
        let text = "[문제] 질문\n[보기]\n① 가 ② 나\n③ 다 ④ 라";
        let records = parse_text(text, "", "");
        assert_eq!(
            choices(&records[0]),
            vec![Some("가"), Some("나"), Some("다"), Some("라")]
        );
    }

    #[test]
    fn test_choice_continuation_before_any_choice_is_dropped() {
        let text = "[문제] 질문\n[보기]\n설명 없는 줄\n① 가";
        let records = parse_text(text, "", "");
        assert_eq!(choices(&records[0]), vec![Some("가"), None, None, None]);
        assert_eq!(records[0].question_text, "질문");
    }

    #[test]
    fn test_duplicate_choice_glyph_overwrites() {
        let text = "[문제] 질문\n[보기] ① 처음 ② 둘\n① 나중";
        let records = parse_text(text, "", "");
        assert_eq!(records[0].choices.get(0), Some("나중"));
        assert_eq!(records[0].choices.get(1), Some("둘"));
    }

    #[test]
    fn test_won_glyph_normalized() {
        let text = "[문제] ₩frac{1}{2} 의 값은?\n[보기] ① 0.5 ② 1\n[정답] ①\n[풀이] ￦frac{1}{2}=0.5";
        let records = parse_text(text, "", "");
        assert!(records[0].question_text.contains("\\frac{1}{2}"));
        assert!(records[0].explanation.contains("\\frac{1}{2}"));
        assert!(!records[0].question_text.contains('₩'));
    }

    #[test]
    fn test_records_keep_input_order() {
        let text = "[문제] A\n[문제] B\n3. C\n[문제] D";
        let texts: Vec<_> = parse_text(text, "", "")
            .into_iter()
            .map(|r| r.question_text)
            .collect();
        // 3. C 는 QUESTION 모드 안에 있으므로 B에 이어진다
        assert_eq!(texts, vec!["A", "B 3. C", "D"]);
    }

    #[test]
    fn test_numbered_fallback_after_answer() {
        let text = "1. 첫 문제\n① 보기 아님\n[답] 1\n2. 둘째 문제\n[답] 4";
        let records = parse_text(text, "", "");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].question_text, "첫 문제 ① 보기 아님");
        assert_eq!(records[0].answer, 1);
        assert_eq!(records[1].question_text, "둘째 문제");
        assert_eq!(records[1].answer, 4);
    }

    #[test]
    fn test_lines_before_first_question_are_dropped() {
        let text = "표지\n[보기] ① 떠돌이\n[답] 3\n[해설] 고아\n[문제] 진짜";
        let records = parse_text(text, "", "");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question_text, "진짜");
        assert_eq!(records[0].answer, 0);
        assert!(records[0].explanation.is_empty());
    }

    #[test]
    fn test_explanation_tag_overwrites() {
        let text = "[문제] 질문\n[해설] 처음\n[풀이] 다시";
        let records = parse_text(text, "", "");
        assert_eq!(records[0].explanation, "다시");
    }

    #[test]
    fn test_unmapped_answer_keeps_previous_value_and_closes_region() {
        let text = "[문제] 질문\n[답] 3\n[답] 9\n뒤따르는 줄";
        let records = parse_text(text, "", "");
        assert_eq!(records[0].answer, 3);
        assert_eq!(records[0].question_text, "질문");
    }

    #[test]
    fn test_inline_tags_on_one_line() {
        let text = "[문제] 2. 질문 [보기] ① 가 ② 나 ③ 다 ④ 라 [정답] ③ [해설] 다가 맞다";
        let records = parse_text(text, "", "");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question_text, "질문");
        assert_eq!(records[0].choices.get(3), Some("라"));
        assert_eq!(records[0].answer, 3);
        assert_eq!(records[0].explanation, "다가 맞다");
    }

    #[test]
    fn test_summary_counts() {
        let text = "[문제] A\n[보기] ① 1 ② 2 ③ 3 ④ 4\n[답] 1\n[문제] B\n[보기] ① 1";
        let summary = ParseSummary::of(&parse_text(text, "", ""));
        assert_eq!(
            summary,
            ParseSummary {
                questions: 2,
                missing_answer: 1,
                incomplete_choices: 1,
            }
        );
    }
}
