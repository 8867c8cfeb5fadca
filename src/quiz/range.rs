//! 출제 범위 검증

use crate::config::QuizConfig;
use crate::core::converter::NumeralSystem;

use super::QuizError;

/// 검증된 출제 범위 (min <= max <= 수사 체계 최댓값)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizRange {
    min: u64,
    max: u64,
    system: NumeralSystem,
}

impl QuizRange {
    /// 범위 생성
    pub fn new(min: u64, max: u64, system: NumeralSystem) -> Result<Self, QuizError> {
        if min > max {
            return Err(QuizError::EmptyRange { min, max });
        }
        if max > system.max_value() {
            return Err(QuizError::AboveSystemLimit { system, max });
        }
        Ok(Self { min, max, system })
    }

    /// 설정값에서 범위 생성 (자릿수 제한 적용 후 검증)
    pub fn from_config(config: &QuizConfig) -> Result<Self, QuizError> {
        let min = limit_digits(config.min, config.digit_limit);
        let max = limit_digits(config.max, config.digit_limit);
        Self::new(min, max, config.system)
    }

    /// 다른 수사 체계로 옮긴 범위
    /// 최댓값이 새 체계의 한계를 넘으면 한계로 줄임
    pub fn with_system(&self, system: NumeralSystem) -> Self {
        let max = self.max.min(system.max_value());
        let min = self.min.min(max);
        Self { min, max, system }
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn system(&self) -> NumeralSystem {
        self.system
    }

    pub fn contains(&self, value: u64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// 입력된 수의 앞에서부터 `digit_limit` 자리만 남김
/// (12345, 3) -> 123
pub fn limit_digits(value: u64, digit_limit: usize) -> u64 {
    let text = value.to_string();
    if text.len() <= digit_limit {
        return value;
    }
    text[..digit_limit].parse().unwrap_or(0)
}
