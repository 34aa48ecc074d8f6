// ============================================================================
// Admin Middleware - Role-Based Access Control
// ============================================================================
//
// Usage:
//   .layer(middleware::from_fn(admin_middleware))
//   .layer(middleware::from_fn_with_state(state, auth_middleware))
//
// The auth layer must run first so that `Claims` are in the extensions.
//
// ============================================================================

use axum::{extract::Request, middleware::Next, response::Response};

use crate::middleware::auth::Claims;
use crate::middleware::error_handling::AppError;
use crate::middleware::metrics::record_auth_failure;

/// Rejects requests whose verified claims do not carry the admin role.
///
/// Returns 401 when no claims are present and 403 for authenticated
/// non-admins. Nothing downstream runs in either case.
pub async fn admin_middleware(
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(claims) = request.extensions().get::<Claims>() else {
        record_auth_failure("missing_claims");
        return Err(AppError::Unauthorized);
    };

    if !claims.is_admin() {
        tracing::warn!(
            "Admin access denied for user {} with role {:?}",
            claims.sub,
            claims.role
        );
        record_auth_failure("not_admin");
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    tracing::debug!("Admin access granted to user {}", claims.sub);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;
    use axum::{body::Body, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;
    use uuid::Uuid;

    fn claims(role: UserRole) -> Claims {
        Claims {
            sub: Uuid::new_v4(),
            email: Some("test@example.com".to_string()),
            role,
            aud: "authenticated".to_string(),
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    fn app(claims: Option<Claims>) -> Router {
        let router = Router::new()
            .route("/", get(|| async { "OK" }))
            .layer(axum::middleware::from_fn(admin_middleware));

        match claims {
            Some(claims) => router.layer(axum::Extension(claims)),
            None => router,
        }
    }

    async fn status_for(claims: Option<Claims>) -> StatusCode {
        app(claims)
            .oneshot(axum::http::Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_admin_passes() {
        assert_eq!(status_for(Some(claims(UserRole::Admin))).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_plain_user_is_forbidden() {
        assert_eq!(status_for(Some(claims(UserRole::User))).await, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_missing_claims_is_unauthorized() {
        assert_eq!(status_for(None).await, StatusCode::UNAUTHORIZED);
    }
}
