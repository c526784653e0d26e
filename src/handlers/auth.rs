//! Authentication HTTP Handlers
//!
//! 사용자 인증과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 이메일/비밀번호 로컬 인증과 JWT 토큰 기반의 상태 없는 인증을 구현합니다.
//!
//! # 엔드포인트
//!
//! - **로그인**: 이메일/비밀번호 인증 후 토큰 발급 (`POST /auth/login`)
//! - **토큰 검증**: JWT 토큰 유효성 확인 (`POST /auth/verify`)
//! - **내 정보**: 토큰 소유자의 계정 조회 (`GET /auth/me`)

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::auth::{LoginRequest, VerifyTokenRequest, VerifyTokenResponse};
use crate::domain::dto::users::response::LoginResponse;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::services::auth::TokenService;
use crate::services::users::user_service::UserService;

/// 로그인 핸들러
///
/// 이메일과 비밀번호를 검증하고 JWT 액세스 토큰을 발급합니다.
/// 계정이 없거나 비밀번호가 틀린 경우 동일한 401 응답을 반환하여
/// 계정 존재 여부를 노출하지 않습니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/auth/login`
///
/// # 요청 본문
///
/// ```json
/// { "email": "finance@acme.com", "password": "SecurePass123" }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "user": { "id": "...", "email": "finance@acme.com", "role": "company", ... },
///   "access_token": "eyJhbGciOi...",
///   "token_type": "Bearer",
///   "expires_in": 86400
/// }
/// ```
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user_service = UserService::instance();
    let token_service = TokenService::instance();

    // 사용자 인증
    let user = user_service
        .authenticate(&payload.email, &payload.password)
        .await?;

    log::info!("로그인 성공 - 사용자: {}", payload.email);

    // JWT 액세스 토큰 발급
    let access_token = token_service.generate_access_token(&user)?;
    let expires_in = token_service.expires_in_seconds();

    Ok(HttpResponse::Ok().json(LoginResponse::new(user, access_token, expires_in)))
}

/// 토큰 검증 핸들러
///
/// 전달된 JWT 토큰의 서명과 만료를 검증하고 클레임을 돌려줍니다.
/// 게이트웨이나 다른 서비스가 토큰 유효성을 확인할 때 사용합니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/auth/verify`
#[post("/verify")]
pub async fn verify_token(
    payload: web::Json<VerifyTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token_service = TokenService::instance();
    let claims = token_service.verify_token(&payload.token)?;

    Ok(HttpResponse::Ok().json(VerifyTokenResponse::from(claims)))
}

/// 내 정보 조회 핸들러
///
/// Authorization 헤더의 토큰 소유자 본인의 계정 정보를 반환합니다.
///
/// # 엔드포인트
///
/// `GET /api/v1/auth/me`
#[get("/me")]
pub async fn me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let profile = service.get_user_by_id(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}
