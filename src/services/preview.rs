//! 미리보기 편집 - 저장 전 파싱 결과 손보기
//!
//! 파서가 넘겨준 목록을 소유하고, 저장 전에 문항 수정/이미지 첨부/삭제를 한다.

use crate::error::{AppError, AppResult, BusinessError};
use crate::models::question::{QuestionRecord, CHOICE_SLOTS};

/// 저장 전 미리보기 목록
#[derive(Debug, Clone, Default)]
pub struct PreviewList {
    records: Vec<QuestionRecord>,
}

impl PreviewList {
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<QuestionRecord> {
        self.records
    }

    fn record_mut(&mut self, index: usize) -> AppResult<&mut QuestionRecord> {
        let len = self.records.len();
        self.records
            .get_mut(index)
            .ok_or_else(|| AppError::index_out_of_range(index, len))
    }

    pub fn update_question_text(&mut self, index: usize, text: impl Into<String>) -> AppResult<()> {
        self.record_mut(index)?.question_text = text.into();
        Ok(())
    }

    /// 보기 한 칸을 바꾼다 (slot: 0~3)
    pub fn update_choice(
        &mut self,
        index: usize,
        slot: usize,
        text: impl Into<String>,
    ) -> AppResult<()> {
        if slot >= CHOICE_SLOTS {
            return Err(BusinessError::InvalidChoiceSlot { slot }.into());
        }
        self.record_mut(index)?.choices.set(slot, text);
        Ok(())
    }

    /// 정답을 바꾼다 (0 = 미정, 1~4)
    pub fn update_answer(&mut self, index: usize, answer: u8) -> AppResult<()> {
        if answer as usize > CHOICE_SLOTS {
            return Err(BusinessError::InvalidAnswer { answer }.into());
        }
        self.record_mut(index)?.answer = answer;
        Ok(())
    }

    pub fn update_explanation(&mut self, index: usize, text: impl Into<String>) -> AppResult<()> {
        self.record_mut(index)?.explanation = text.into();
        Ok(())
    }

    /// 문제와 보기 사이에 들어갈 이미지 (data URL 또는 경로)
    pub fn attach_image(&mut self, index: usize, image: impl Into<String>) -> AppResult<()> {
        self.record_mut(index)?.image = Some(image.into());
        Ok(())
    }

    pub fn remove_image(&mut self, index: usize) -> AppResult<Option<String>> {
        Ok(self.record_mut(index)?.image.take())
    }

    /// 문제를 목록에서 뺀다. 뒤의 문제들은 한 칸씩 당겨진다.
    pub fn remove(&mut self, index: usize) -> AppResult<QuestionRecord> {
        if index >= self.records.len() {
            return Err(AppError::index_out_of_range(index, self.records.len()));
        }
        Ok(self.records.remove(index))
    }
}

impl From<Vec<QuestionRecord>> for PreviewList {
    fn from(records: Vec<QuestionRecord>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_text;

    fn sample() -> PreviewList {
        parse_text(
            "[문제] 첫째\n[보기] ① 가 ② 나\n[답] 1\n[문제] 둘째\n[문제] 셋째",
            "공기조화",
            "2023년 1회",
        )
        .into()
    }

    #[test]
    fn test_edit_fields() {
        let mut list = sample();
        list.update_question_text(0, "고친 문제").unwrap();
        list.update_choice(0, 3, "라").unwrap();
        list.update_answer(1, 4).unwrap();
        list.update_explanation(2, "해설 추가").unwrap();

        let records = list.records();
        assert_eq!(records[0].question_text, "고친 문제");
        assert_eq!(records[0].choices.get(3), Some("라"));
        assert_eq!(records[0].choices.get(0), Some("가"));
        assert_eq!(records[1].answer, 4);
        assert_eq!(records[2].explanation, "해설 추가");
    }

    #[test]
    fn test_image_attach_and_remove() {
        let mut list = sample();
        list.attach_image(1, "data:image/png;base64,AAAA").unwrap();
        assert!(list.records()[1].image.is_some());

        let removed = list.remove_image(1).unwrap();
        assert_eq!(removed.as_deref(), Some("data:image/png;base64,AAAA"));
        assert!(list.records()[1].image.is_none());
    }

    #[test]
    fn test_remove_shifts_following_records() {
        let mut list = sample();
        let removed = list.remove(0).unwrap();
        assert_eq!(removed.question_text, "첫째");
        assert_eq!(list.len(), 2);
        assert_eq!(list.records()[0].question_text, "둘째");
    }

    #[test]
    fn test_invalid_edits_are_rejected() {
        let mut list = sample();
        assert!(matches!(
            list.update_question_text(3, "x"),
            Err(AppError::Business(BusinessError::IndexOutOfRange { index: 3, len: 3 }))
        ));
        assert!(matches!(
            list.update_choice(0, 4, "x"),
            Err(AppError::Business(BusinessError::InvalidChoiceSlot { slot: 4 }))
        ));
        assert!(matches!(
            list.update_answer(0, 5),
            Err(AppError::Business(BusinessError::InvalidAnswer { answer: 5 }))
        ));
        assert!(list.remove(10).is_err());
        assert_eq!(list.len(), 3);
    }
}
