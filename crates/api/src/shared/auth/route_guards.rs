use crate::error::EventhubError;
use actix_web::HttpRequest;
use eventhub_infra::EventhubContext;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims of the identity token given to the client by the identity provider
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub sub: String, // Subject (whom token refers to)
}

/// A user whose identity has been verified from the identity token.
/// The `user_id` is trusted from here on.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

fn parse_authtoken_header(token_header_value: &str) -> String {
    let token = token_header_value.trim();
    match token.get(..7) {
        Some(scheme) if scheme.eq_ignore_ascii_case("bearer ") => token[7..].trim().to_string(),
        _ => token.to_string(),
    }
}

fn decode_token(ctx: &EventhubContext, token: &str) -> anyhow::Result<Claims> {
    let decoding_key = DecodingKey::from_secret(ctx.config.identity_token_secret.as_bytes());
    let claims = decode::<Claims>(token, &decoding_key, &Validation::new(Algorithm::HS256))?.claims;

    Ok(claims)
}

/// Resolves the user making the request from the `authorization` header
pub async fn protect_route(
    req: &HttpRequest,
    ctx: &EventhubContext,
) -> Result<AuthenticatedUser, EventhubError> {
    let token = match req.headers().get("authorization") {
        Some(token) => match token.to_str() {
            Ok(token) => parse_authtoken_header(token),
            Err(_) => {
                return Err(EventhubError::Unauthorized(
                    "Malformed authorization header".into(),
                ))
            }
        },
        None => {
            return Err(EventhubError::Unauthorized(
                "Missing the authorization header".into(),
            ))
        }
    };

    match decode_token(ctx, &token) {
        Ok(claims) if !claims.sub.trim().is_empty() => Ok(AuthenticatedUser {
            user_id: claims.sub,
        }),
        Ok(_) => Err(EventhubError::Unauthorized(
            "The identity token does not name a user".into(),
        )),
        Err(e) => Err(EventhubError::Unauthorized(format!(
            "Unable to verify the identity token: {}",
            e
        ))),
    }
}

/// Only lets trusted back office clients through, identified by the `x-api-key` header
pub async fn protect_admin_route(
    req: &HttpRequest,
    ctx: &EventhubContext,
) -> Result<(), EventhubError> {
    match req.headers().get("x-api-key") {
        Some(api_key) => match api_key.to_str() {
            Ok(api_key) if api_key == ctx.config.admin_api_key => Ok(()),
            _ => Err(EventhubError::Unauthorized("Invalid api key provided".into())),
        },
        None => Err(EventhubError::Unauthorized(
            "Missing the x-api-key header".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use eventhub_infra::Config;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::Duration;

    fn setup_ctx() -> EventhubContext {
        EventhubContext::create_inmemory(Config {
            port: 0,
            database_url: None,
            admin_api_key: "admin_key".into(),
            identity_token_secret: "identity_secret".into(),
            store_timeout: Duration::from_secs(5),
            default_page_size: 20,
            max_page_size: 100,
        })
    }

    fn create_token(sub: &str, secret: &str, exp: usize) -> String {
        let claims = Claims {
            exp,
            sub: sub.into(),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("To create token")
    }

    // Year 2100
    const FUTURE_EXP: usize = 4_102_444_800;

    #[test]
    fn it_parses_bearer_scheme() {
        assert_eq!(parse_authtoken_header("Bearer abc"), "abc");
        assert_eq!(parse_authtoken_header("bearer   abc "), "abc");
        assert_eq!(parse_authtoken_header("abc"), "abc");
    }

    #[actix_web::test]
    async fn it_accepts_valid_token() {
        let ctx = setup_ctx();
        let token = create_token("user_1", "identity_secret", FUTURE_EXP);
        let req = TestRequest::default()
            .insert_header(("authorization", format!("Bearer {}", token)))
            .to_http_request();

        let user = protect_route(&req, &ctx).await.expect("To authenticate");
        assert_eq!(user.user_id, "user_1");
    }

    #[actix_web::test]
    async fn it_rejects_bad_tokens() {
        let ctx = setup_ctx();

        let req = TestRequest::default().to_http_request();
        assert!(protect_route(&req, &ctx).await.is_err());

        let wrong_secret = create_token("user_1", "other_secret", FUTURE_EXP);
        let expired = create_token("user_1", "identity_secret", 1);
        let no_subject = create_token("", "identity_secret", FUTURE_EXP);
        for token in vec![wrong_secret, expired, no_subject, "garbage".into()] {
            let req = TestRequest::default()
                .insert_header(("authorization", format!("Bearer {}", token)))
                .to_http_request();
            assert!(protect_route(&req, &ctx).await.is_err());
        }
    }

    #[actix_web::test]
    async fn it_checks_admin_api_key() {
        let ctx = setup_ctx();

        let req = TestRequest::default()
            .insert_header(("x-api-key", "admin_key"))
            .to_http_request();
        assert!(protect_admin_route(&req, &ctx).await.is_ok());

        let req = TestRequest::default()
            .insert_header(("x-api-key", "wrong"))
            .to_http_request();
        assert!(protect_admin_route(&req, &ctx).await.is_err());

        let req = TestRequest::default().to_http_request();
        assert!(protect_admin_route(&req, &ctx).await.is_err());
    }
}
