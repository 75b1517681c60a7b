use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ответ эндпоинта выдачи токена (`POST /api/auth/token`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Полезная нагрузка JWT, которую выдаёт бэкенд.
///
/// Подпись НЕ проверяется: клиент читает claims только для того,
/// чтобы показать имя пользователя и переключить видимость админских
/// разделов. Реальная авторизация выполняется бэкендом на каждом запросе.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Имя пользователя
    pub sub: String,
    pub user_id: i64,
    pub role: Option<String>,
    #[serde(default)]
    pub exp: i64,
}

#[derive(Debug, Error, PartialEq)]
pub enum ClaimsError {
    #[error("токен не похож на JWT: ожидается три сегмента")]
    InvalidFormat,
    #[error("полезная нагрузка токена не является base64url")]
    InvalidBase64,
    #[error("полезная нагрузка токена не разбирается как claims: {0}")]
    InvalidClaims(String),
}

/// Декодировать средний сегмент JWT как JSON-claims, без проверки подписи.
/// Любой дефект токена — ошибка, которая на фронтенде означает разлогин.
pub fn decode_claims(token: &str) -> Result<TokenClaims, ClaimsError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(ClaimsError::InvalidFormat);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| ClaimsError::InvalidBase64)?;

    serde_json::from_slice(&bytes).map_err(|e| ClaimsError::InvalidClaims(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload_json: &str) -> String {
        format!("header.{}.signature", URL_SAFE_NO_PAD.encode(payload_json))
    }

    #[test]
    fn decodes_valid_claims() {
        let token = make_token(
            r#"{"sub": "ivanov", "user_id": 3, "role": "admin", "exp": 1900000000}"#,
        );
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "ivanov");
        assert_eq!(claims.user_id, 3);
        assert_eq!(claims.role.as_deref(), Some("admin"));
    }

    #[test]
    fn role_may_be_absent() {
        let token = make_token(r#"{"sub": "petrov", "user_id": 5, "role": null}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role, None);
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert_eq!(decode_claims("abc"), Err(ClaimsError::InvalidFormat));
        assert_eq!(decode_claims("a.b"), Err(ClaimsError::InvalidFormat));
        assert_eq!(decode_claims("a.b.c.d"), Err(ClaimsError::InvalidFormat));
    }

    #[test]
    fn rejects_bad_base64() {
        assert_eq!(
            decode_claims("header.не-base64!.signature"),
            Err(ClaimsError::InvalidBase64)
        );
    }

    #[test]
    fn rejects_wrong_claims_shape() {
        let token = make_token(r#"{"something": "else"}"#);
        assert!(matches!(
            decode_claims(&token),
            Err(ClaimsError::InvalidClaims(_))
        ));

        let not_json = format!("header.{}.signature", URL_SAFE_NO_PAD.encode("plain text"));
        assert!(matches!(
            decode_claims(&not_json),
            Err(ClaimsError::InvalidClaims(_))
        ));
    }
}
