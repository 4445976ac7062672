use thiserror::Error;

/// 계산 엔진에서 발생 가능한 오류를 표현한다.
///
/// 실패 시 부분 결과는 만들지 않으며 기본값으로 대체하지도 않는다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// 범위를 벗어나거나 형식이 잘못된 입력
    #[error("잘못된 입력 `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// 비율 계산의 분모가 0
    #[error("0으로 나눌 수 없습니다: {quantity}")]
    DivisionByZero { quantity: &'static str },
    /// 국가별 배출계수 표에 없는 국가
    #[error("알 수 없는 국가: {0}")]
    UnknownCountry(String),
}

impl CalcError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        CalcError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// 유한한 0 이상의 값인지 확인한다.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::invalid(name, value, "유한한 숫자여야 합니다"));
    }
    if value < 0.0 {
        return Err(CalcError::invalid(name, value, "0 이상이어야 합니다"));
    }
    Ok(value)
}

/// 계산 결과가 유한한지 확인한다. 넘치면 원인이 된 입력을 오류에 담는다.
pub(crate) fn ensure_finite_result(
    result: f64,
    cause: &'static str,
    cause_value: f64,
) -> Result<f64, CalcError> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::invalid(
            cause,
            cause_value,
            "계산 결과가 f64 범위를 넘습니다",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nan_and_negative() {
        assert!(ensure_non_negative("x", f64::NAN).is_err());
        assert!(ensure_non_negative("x", f64::INFINITY).is_err());
        assert!(ensure_non_negative("x", -0.1).is_err());
        assert_eq!(ensure_non_negative("x", 0.0), Ok(0.0));
    }

    #[test]
    fn message_names_the_parameter() {
        let err = CalcError::invalid("electricity_rate_usd_per_kwh", -1.0, "0 이상이어야 합니다");
        assert!(err.to_string().contains("electricity_rate_usd_per_kwh"));
    }
}
