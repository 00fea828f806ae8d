use serde::{Deserialize, Serialize};

/// 회차 정보가 없을 때 쓰는 기본값
pub const UNCLASSIFIED_WORKBOOK: &str = "미분류 회차";
/// 과목 정보가 없을 때 쓰는 기본값
pub const UNCLASSIFIED_SUBJECT: &str = "미분류 과목";

/// 보기 칸 수 (①~④)
pub const CHOICE_SLOTS: usize = 4;

/// 4칸 고정 보기 배열. 비어 있는 칸은 `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choices([Option<String>; CHOICE_SLOTS]);

impl Choices {
    pub fn get(&self, slot: usize) -> Option<&str> {
        self.0.get(slot).and_then(|c| c.as_deref())
    }

    /// 해당 칸을 덮어쓴다. 범위 밖이면 false.
    pub fn set(&mut self, slot: usize, text: impl Into<String>) -> bool {
        match self.0.get_mut(slot) {
            Some(cell) => {
                *cell = Some(text.into());
                true
            }
            None => false,
        }
    }

    /// 값이 들어 있는 가장 높은 칸 번호
    pub fn last_filled(&self) -> Option<usize> {
        self.0.iter().rposition(Option::is_some)
    }

    /// 마지막으로 채워진 칸에 이어 붙인다. 채워진 칸이 없으면 false.
    ///
    /// 비어 있는 채 열린 칸(`Some("")`)도 채워진 칸으로 본다.
    pub fn append_to_last(&mut self, line: &str) -> bool {
        match self.last_filled().and_then(|slot| self.0[slot].as_mut()) {
            Some(choice) => {
                if !choice.is_empty() {
                    choice.push(' ');
                }
                choice.push_str(line);
                true
            }
            None => false,
        }
    }

    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|c| c.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.0.iter().map(|c| c.as_deref())
    }
}

// 저장 포맷에서는 빈 문자열이 빈 칸을 뜻한다 (TOML 배열은 null을 담을 수 없음)
impl Serialize for Choices {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let flat: Vec<&str> = self.iter().map(|c| c.unwrap_or("")).collect();
        flat.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Choices {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let flat: Vec<String> = Vec::deserialize(deserializer)?;
        if flat.len() > CHOICE_SLOTS {
            return Err(serde::de::Error::invalid_length(
                flat.len(),
                &"at most 4 choices",
            ));
        }

        let mut choices = Choices::default();
        for (slot, text) in flat.into_iter().enumerate() {
            if !text.is_empty() {
                choices.set(slot, text);
            }
        }
        Ok(choices)
    }
}

/// 파싱된 문제 한 건
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: String,
    pub workbook_title: String,
    pub subject: String,
    pub question_text: String,
    #[serde(default)]
    pub choices: Choices,
    /// 0 = 정답 미검출, 1~4 = 보기 번호
    #[serde(default)]
    pub answer: u8,
    #[serde(default)]
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl QuestionRecord {
    /// 새 문제를 연다. 빈 과목/회차는 미분류 값으로 채운다.
    pub fn new(workbook_title: &str, subject: &str, question_text: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            workbook_title: or_sentinel(workbook_title, UNCLASSIFIED_WORKBOOK),
            subject: or_sentinel(subject, UNCLASSIFIED_SUBJECT),
            question_text: question_text.into(),
            choices: Choices::default(),
            answer: 0,
            explanation: String::new(),
            image: None,
        }
    }

    pub fn has_answer(&self) -> bool {
        self.answer != 0
    }
}

fn or_sentinel(value: &str, sentinel: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        sentinel.to_string()
    } else {
        value.to_string()
    }
}

fn generate_id() -> String {
    format!("new-{}", uuid::Uuid::new_v4().simple())
}

/// 소스 파일 하나에서 나온 문제 묶음 (일괄 저장 단위)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBatch {
    pub source: String,
    pub created_at: String,
    pub workbook_title: String,
    pub subject: String,
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

impl QuestionBatch {
    pub fn new(
        source: impl Into<String>,
        workbook_title: impl Into<String>,
        subject: impl Into<String>,
        questions: Vec<QuestionRecord>,
    ) -> Self {
        Self {
            source: source.into(),
            created_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            workbook_title: workbook_title.into(),
            subject: subject.into(),
            questions,
        }
    }
}
