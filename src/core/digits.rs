//! 숫자 문자열 검증 및 자릿값 추출

use crate::error::ConvertError;

/// 숫자 문자열을 자릿값(0~9) 목록으로 변환
/// 앞자리 0은 제거하며, 빈 문자열이나 0만 있는 경우 빈 목록 반환
pub fn significant_digits(number: &str) -> Result<Vec<u8>, ConvertError> {
    let mut digits = Vec::with_capacity(number.len());

    for (position, c) in number.chars().enumerate() {
        let value = c.to_digit(10).ok_or_else(|| ConvertError::InvalidInput {
            input: number.to_string(),
            position,
            found: c,
        })?;
        // 앞자리 0 무시
        if digits.is_empty() && value == 0 {
            continue;
        }
        digits.push(value as u8);
    }

    Ok(digits)
}

/// 자릿값 목록을 정수로 (호출자가 자릿수를 제한한 경우에만 사용)
pub fn digits_value(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0u64, |acc, &d| acc.saturating_mul(10).saturating_add(d as u64))
}
