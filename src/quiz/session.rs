//! 퀴즈 진행 상태 (현재 문제, 정답 표시 여부)

use rand::Rng;

use crate::core::converter::NumeralSystem;

use super::range::QuizRange;
use super::QuizError;

/// 퀴즈 세션
///
/// 변환 엔진은 상태가 없으므로 문제와 정답 표시 상태는 모두 여기서 관리합니다.
#[derive(Debug, Clone)]
pub struct Quiz {
    range: QuizRange,
    current: Option<u64>,
    revealed: bool,
}

impl Quiz {
    pub fn new(range: QuizRange) -> Self {
        Self {
            range,
            current: None,
            revealed: false,
        }
    }

    pub fn range(&self) -> QuizRange {
        self.range
    }

    pub fn system(&self) -> NumeralSystem {
        self.range.system()
    }

    /// 범위 안에서 새 문제를 뽑고 정답을 숨김
    pub fn next_question<R: Rng>(&mut self, rng: &mut R) -> u64 {
        let value = rng.random_range(self.range.min()..=self.range.max());
        log::debug!(
            "새 문제: {} ({}, {}..={})",
            value,
            self.range.system(),
            self.range.min(),
            self.range.max()
        );
        self.current = Some(value);
        self.revealed = false;
        value
    }

    /// 현재 문제 (숫자 문자열)
    pub fn question(&self) -> Option<String> {
        self.current.map(|v| v.to_string())
    }

    /// 현재 문제의 한국어 읽기
    pub fn answer(&self) -> Result<String, QuizError> {
        let value = self.current.ok_or(QuizError::NoQuestion)?;
        Ok(self.range.system().convert_value(value)?)
    }

    /// 정답 표시/숨김 전환, 전환 후 표시 여부 반환
    pub fn toggle_answer(&mut self) -> bool {
        self.revealed = !self.revealed;
        self.revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// 정답이 표시 중이면 정답 텍스트
    pub fn visible_answer(&self) -> Option<String> {
        if !self.revealed {
            return None;
        }
        self.answer().ok()
    }

    /// 수사 체계 변경
    /// 범위를 새 체계에 맞게 줄이고, 범위를 벗어난 현재 문제는 버림
    pub fn switch_system(&mut self, system: NumeralSystem) {
        self.range = self.range.with_system(system);
        self.revealed = false;
        if let Some(value) = self.current {
            if !self.range.contains(value) {
                self.current = None;
            }
        }
        log::debug!(
            "수사 체계 변경: {} ({}..={})",
            system,
            self.range.min(),
            self.range.max()
        );
    }
}
