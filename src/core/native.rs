//! 고유어 수사 변환 (하나, 둘, 셋 ... 아흔아홉)

use crate::core::converter::NumeralSystem;
use crate::core::digits::{digits_value, significant_digits};
use crate::core::tables::{NATIVE_MAX_DIGITS, NATIVE_ONES, NATIVE_TENS, NATIVE_ZERO};
use crate::error::ConvertError;

/// 숫자 문자열을 고유어 수사로 변환 (0~99)
///
/// - 빈 문자열, 0은 "공"
/// - 100 이상은 `ConvertError::OutOfDomain`
///
/// # Examples
/// ```
/// use korean_numbers::convert_native;
/// assert_eq!(convert_native("43").unwrap(), "마흔셋");
/// assert_eq!(convert_native("07").unwrap(), "일곱");
/// assert!(convert_native("100").is_err());
/// ```
pub fn convert_native(number: &str) -> Result<String, ConvertError> {
    let digits = significant_digits(number)?;
    if digits.len() > NATIVE_MAX_DIGITS {
        return Err(ConvertError::OutOfDomain {
            system: NumeralSystem::Native,
            input: number.to_string(),
        });
    }

    let n = digits_value(&digits) as usize;
    let result = match n {
        0 => NATIVE_ZERO.to_string(),
        1..=9 => NATIVE_ONES[n].to_string(),
        _ => format!("{}{}", NATIVE_TENS[n / 10], NATIVE_ONES[n % 10]),
    };

    log::trace!("고유어 변환: {} -> {}", number, result);
    Ok(result)
}
