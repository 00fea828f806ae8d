//! 회차/과목 추정
//!
//! 본문을 한 번 훑어 회차(`2024년 3회`)와 과목(`제1과목: ...`)을 찾는다.
//! 결과는 추천값일 뿐이며 사용자가 입력한 값이 항상 우선한다.

use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_ROUND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"20[0-9]{2}년\s*(?:제?[0-9]+회|[0-9]+월)").expect("valid year regex")
});
static SUBJECT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(제?[0-9]+과목)[:\s]+([^\n\r]+)").expect("valid subject regex")
});

/// 본문에서 찾은 메타데이터 추천값
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataHint {
    pub workbook_title: Option<String>,
    pub subject: Option<String>,
}

impl MetadataHint {
    /// 실제 파싱에 쓸 (과목, 회차)를 정한다
    ///
    /// 사용자가 입력한 값이 비어 있지 않으면 그 값을, 아니면 추천값을 쓴다.
    /// 둘 다 없으면 빈 문자열을 돌려주고 파서가 미분류 값을 채운다.
    pub fn resolve(&self, user_subject: &str, user_workbook_title: &str) -> (String, String) {
        let pick = |user: &str, hint: &Option<String>| {
            let user = user.trim();
            if user.is_empty() {
                hint.clone().unwrap_or_default()
            } else {
                user.to_string()
            }
        };

        (
            pick(user_subject, &self.subject),
            pick(user_workbook_title, &self.workbook_title),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.workbook_title.is_none() && self.subject.is_none()
    }
}

/// 본문에서 회차와 첫 과목 머리말을 찾는다
pub fn extract_metadata(text: &str) -> MetadataHint {
    let workbook_title = YEAR_ROUND.find(text).map(|m| m.as_str().to_string());

    let subject = SUBJECT_LINE
        .captures(text)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty());

    MetadataHint {
        workbook_title,
        subject,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_year_round_patterns() {
        let cases = [
            ("2024년 3회 기출", "2024년 3회"),
            ("공조냉동 2023년 제1회 필기", "2023년 제1회"),
            ("시행일 2022년 4월 24일", "2022년 4월"),
            ("2021년2회", "2021년2회"),
        ];
        for (text, expected) in cases {
            assert_eq!(
                extract_metadata(text).workbook_title.as_deref(),
                Some(expected),
                "input: {}",
                text
            );
        }
        assert_eq!(extract_metadata("1999년 3회").workbook_title, None);
    }

    #[test]
    fn test_extract_first_subject() {
        let hint = extract_metadata("머리말\n제1과목: 공기조화\n...\n제2과목: 냉동공학");
        assert_eq!(hint.subject.as_deref(), Some("공기조화"));

        let hint = extract_metadata("1과목 공기조화설비  \n본문");
        assert_eq!(hint.subject.as_deref(), Some("공기조화설비"));
    }

    #[test]
    fn test_nothing_found() {
        let hint = extract_metadata("[문제] 1. 질문");
        assert!(hint.is_empty());
    }

    #[test]
    fn test_resolve_prefers_user_values() {
        let hint = MetadataHint {
            workbook_title: Some("2024년 3회".to_string()),
            subject: Some("공기조화".to_string()),
        };
        assert_eq!(
            hint.resolve("냉동공학", ""),
            ("냉동공학".to_string(), "2024년 3회".to_string())
        );
        assert_eq!(
            hint.resolve("  ", " 2023년 1회 "),
            ("공기조화".to_string(), "2023년 1회".to_string())
        );
        assert_eq!(
            MetadataHint::default().resolve("", ""),
            (String::new(), String::new())
        );
    }
}
