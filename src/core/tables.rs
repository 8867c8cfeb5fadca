//! 숫자 읽기 테이블 (한자어 수사 / 고유어 수사)

/// 한자어 숫자 이름 (0은 빈 문자열: 여러 자리 수 안의 0은 읽지 않음)
pub const SINO_DIGITS: [&str; 10] = ["", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];

/// 그룹 내 자리 이름 (일, 십, 백, 천의 자리)
pub const SINO_PLACE_VALUES: [&str; 4] = ["", "십", "백", "천"];

/// 네 자리마다 붙는 그룹 단위 (없음, 만, 억, 조)
pub const SINO_GROUP_MULTIPLIERS: [&str; 4] = ["", "만", "억", "조"];

/// 한자어 0
pub const SINO_ZERO: &str = "영";

/// 한 그룹의 자리 수
pub const GROUP_SIZE: usize = 4;

/// 한자어로 읽을 수 있는 최대 유효 자릿수 (조 단위까지, 16자리)
pub const SINO_MAX_DIGITS: usize = GROUP_SIZE * SINO_GROUP_MULTIPLIERS.len();

/// 고유어 일의 자리 (0은 빈 문자열)
pub const NATIVE_ONES: [&str; 10] = [
    "", "하나", "둘", "셋", "넷", "다섯", "여섯", "일곱", "여덟", "아홉",
];

/// 고유어 십의 자리 (0은 빈 문자열)
pub const NATIVE_TENS: [&str; 10] = [
    "", "열", "스물", "서른", "마흔", "쉰", "예순", "일흔", "여든", "아흔",
];

/// 고유어에는 0이 없으므로 관용적으로 "공"을 사용
pub const NATIVE_ZERO: &str = "공";

/// 고유어로 읽을 수 있는 최대 유효 자릿수 (99까지)
pub const NATIVE_MAX_DIGITS: usize = 2;
