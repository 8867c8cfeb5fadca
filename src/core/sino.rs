//! 한자어 수사 변환 (일, 이, 삼 ... 십, 백, 천, 만, 억, 조)

use crate::core::converter::NumeralSystem;
use crate::core::digits::{digits_value, significant_digits};
use crate::core::tables::{
    GROUP_SIZE, SINO_DIGITS, SINO_GROUP_MULTIPLIERS, SINO_MAX_DIGITS, SINO_PLACE_VALUES,
    SINO_ZERO,
};
use crate::error::ConvertError;

/// 숫자 문자열을 한자어 수사로 변환
///
/// - 빈 문자열, 0만 있는 문자열은 "영"
/// - 앞자리 0은 무시 ("010" -> "십")
/// - 자리 이름 앞의 1은 읽지 않음 ("10" -> "십", "1000" -> "천")
/// - 값이 1인 만/억/조 그룹은 단위만 읽음 ("10000" -> "만")
/// - 그룹 사이는 공백 하나로 구분 ("43934" -> "사만 삼천구백삼십사")
///
/// # Examples
/// ```
/// use korean_numbers::convert_sino;
/// assert_eq!(convert_sino("4321").unwrap(), "사천삼백이십일");
/// assert_eq!(convert_sino("10000").unwrap(), "만");
/// ```
pub fn convert_sino(number: &str) -> Result<String, ConvertError> {
    let digits = significant_digits(number)?;

    match digits.len() {
        0 => return Ok(SINO_ZERO.to_string()),
        1 => return Ok(SINO_DIGITS[digits[0] as usize].to_string()),
        len if len > SINO_MAX_DIGITS => {
            return Err(ConvertError::OutOfDomain {
                system: NumeralSystem::Sino,
                input: number.to_string(),
            })
        }
        _ => {}
    }

    // 낮은 자리 그룹부터 읽은 뒤 순서를 뒤집어 높은 자리부터 출력
    let mut groups: Vec<String> = digits
        .rchunks(GROUP_SIZE)
        .enumerate()
        .filter_map(|(group_index, group)| read_group(group, group_index))
        .collect();
    groups.reverse();

    let result = groups.join(" ");
    log::trace!("한자어 변환: {} -> {}", number, result);
    Ok(result)
}

/// 네 자리 그룹 하나를 읽고 그룹 단위를 붙임
/// 그룹 값이 0이면 단위까지 생략 (None)
fn read_group(group: &[u8], group_index: usize) -> Option<String> {
    let value = digits_value(group);
    if value == 0 {
        return None;
    }

    let multiplier = SINO_GROUP_MULTIPLIERS[group_index];
    if group_index > 0 && value == 1 {
        return Some(multiplier.to_string());
    }

    // 일의 자리부터 조각을 모음
    let mut fragments: Vec<&str> = Vec::with_capacity(GROUP_SIZE * 2);
    for (position, &digit) in group.iter().rev().enumerate() {
        let place = SINO_PLACE_VALUES[position];
        match digit {
            0 => {}
            1 if position > 0 => fragments.push(place),
            _ => {
                fragments.push(place);
                fragments.push(SINO_DIGITS[digit as usize]);
            }
        }
    }
    fragments.reverse();

    let mut text = fragments.concat();
    text.push_str(multiplier);
    Some(text)
}
