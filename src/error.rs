//! 변환 에러 정의

use crate::core::converter::NumeralSystem;

/// 숫자 변환 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// 숫자가 아닌 문자가 포함됨
    InvalidInput {
        input: String,
        /// 문자 단위 위치 (0부터)
        position: usize,
        found: char,
    },
    /// 해당 수사 체계로 읽을 수 없는 값
    OutOfDomain { system: NumeralSystem, input: String },
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::InvalidInput {
                input,
                position,
                found,
            } => write!(
                f,
                "숫자가 아닌 문자 '{}' (위치 {}): {:?}",
                found, position, input
            ),
            ConvertError::OutOfDomain { system, input } => write!(
                f,
                "{} 범위를 벗어난 수 (최대 {}): {}",
                system,
                system.max_value(),
                input
            ),
        }
    }
}

impl std::error::Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_input() {
        let e = ConvertError::InvalidInput {
            input: "1a".into(),
            position: 1,
            found: 'a',
        };
        let msg = e.to_string();
        assert!(msg.contains("'a'"));
        assert!(msg.contains("위치 1"));
    }

    #[test]
    fn test_display_out_of_domain() {
        let e = ConvertError::OutOfDomain {
            system: NumeralSystem::Native,
            input: "100".into(),
        };
        assert!(e.to_string().contains("최대 99"));
    }
}
