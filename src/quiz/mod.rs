//! 숫자 읽기 퀴즈
//!
//! 변환 엔진(`core`) 바깥에서 출제 범위 검증, 무작위 출제, 정답 표시 상태를 담당합니다.
//!
//! ```
//! use korean_numbers::quiz::{Quiz, QuizRange};
//! use korean_numbers::NumeralSystem;
//!
//! let range = QuizRange::new(1, 99, NumeralSystem::Native).unwrap();
//! let mut quiz = Quiz::new(range);
//! let value = quiz.next_question(&mut rand::rng());
//! assert!((1..=99).contains(&value));
//! assert!(quiz.answer().is_ok());
//! ```

mod range;
mod session;

pub use range::{limit_digits, QuizRange};
pub use session::Quiz;

use crate::core::converter::NumeralSystem;
use crate::error::ConvertError;

/// 퀴즈 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// 최솟값이 최댓값보다 큼
    EmptyRange { min: u64, max: u64 },
    /// 최댓값이 수사 체계가 읽을 수 있는 범위를 넘음
    AboveSystemLimit { system: NumeralSystem, max: u64 },
    /// 아직 출제된 문제가 없음
    NoQuestion,
    /// 변환 실패
    Convert(ConvertError),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::EmptyRange { min, max } => {
                write!(f, "최솟값({})이 최댓값({})보다 큽니다", min, max)
            }
            QuizError::AboveSystemLimit { system, max } => write!(
                f,
                "{} 수는 {}까지만 읽을 수 있습니다 (입력: {})",
                system,
                system.max_value(),
                max
            ),
            QuizError::NoQuestion => write!(f, "출제된 문제가 없습니다"),
            QuizError::Convert(e) => write!(f, "변환 오류: {}", e),
        }
    }
}

impl std::error::Error for QuizError {}

impl From<ConvertError> for QuizError {
    fn from(e: ConvertError) -> Self {
        QuizError::Convert(e)
    }
}
