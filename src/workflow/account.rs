use crate::{
    api::{self, BookingApi},
    model::{AuthResponse, LoginRequest, RegisterRequest, User},
    session::{self, Session, SessionStore},
    validation::{LoginForm, RegisterForm, ValidationError},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Session(#[from] session::Error),

    #[error("{}", .0.message_or("Email ou senha inválidos"))]
    Login(#[source] api::Error),

    #[error("{}", .0.message_or("Erro ao criar conta. Tente novamente."))]
    Registration(#[source] api::Error),
}

pub async fn login<A: BookingApi, S: SessionStore>(
    api: &A,
    session: &Session<S>,
    form: &LoginForm,
) -> Result<Option<User>, Error> {
    form.validate()?;

    let response = api
        .login(LoginRequest {
            email: form.email.trim().to_owned(),
            password: form.password.clone(),
        })
        .await
        .map_err(Error::Login)?;

    Ok(session.begin(response)?)
}

pub async fn register<A: BookingApi, S: SessionStore>(
    api: &A,
    session: &Session<S>,
    form: &RegisterForm,
) -> Result<Option<User>, Error> {
    form.validate()?;

    let response = api
        .register(RegisterRequest {
            name: form.name.trim().to_owned(),
            email: form.email.trim().to_owned(),
            password: form.password.clone(),
        })
        .await
        .map_err(Error::Registration)?;

    Ok(session.begin(response)?)
}

/// Re-reads the signed in user from the API so profile edits made elsewhere
/// show up. The stored token is kept as is.
pub async fn refresh_user<A: BookingApi, S: SessionStore>(
    api: &A,
    session: &Session<S>,
) -> Result<User, api::Error> {
    let user = api.current_user().await?;

    if let Some(token) = session.token() {
        if let Err(e) = session.begin(AuthResponse {
            token: Some(token),
            user: Some(user.clone()),
        }) {
            tracing::warn!("unable to store refreshed user: {}", e);
        }
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::MockBookingApi,
        session::MemoryStore,
        test_helpers::{client_user, token_without_expiry},
    };
    use mockall::predicate::eq;
    use test_case::test_case;

    fn login_form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_owned(),
            password: password.to_owned(),
        }
    }

    enum LoginTest {
        Success,
        Rejected,
        Blank,
    }

    #[test_case(LoginTest::Success; "success")]
    #[test_case(LoginTest::Rejected; "rejected")]
    #[test_case(LoginTest::Blank; "blank")]
    #[tokio::test]
    async fn login_flow(test_name: LoginTest) {
        let session = Session::new(MemoryStore::default());
        let mut api = MockBookingApi::new();

        let form = match test_name {
            LoginTest::Blank => login_form(" ", ""),
            _ => login_form(" ana@example.com ", "1234"),
        };

        match test_name {
            LoginTest::Success => {
                let token = token_without_expiry();
                api.expect_login()
                    .with(eq(LoginRequest {
                        email: "ana@example.com".to_owned(),
                        password: "1234".to_owned(),
                    }))
                    .times(1)
                    .returning(move |_| {
                        let token = token.clone();
                        Box::pin(async move {
                            Ok(AuthResponse {
                                token: Some(token),
                                user: Some(client_user()),
                            })
                        })
                    });
            }
            LoginTest::Rejected => {
                api.expect_login().times(1).returning(|_| {
                    Box::pin(async {
                        Err(api::Error::from_response(401, r#"{"error": "Credenciais inválidas"}"#))
                    })
                });
            }
            LoginTest::Blank => {
                api.expect_login().never();
            }
        }

        let result = login(&api, &session, &form).await;

        match test_name {
            LoginTest::Success => {
                assert_eq!(result.unwrap(), Some(client_user()));
                assert!(session.is_authenticated());
            }
            LoginTest::Rejected => {
                assert_eq!(result.unwrap_err().to_string(), "Credenciais inválidas");
                assert!(!session.is_authenticated());
            }
            LoginTest::Blank => {
                assert!(matches!(
                    result,
                    Err(Error::Validation(ValidationError::MissingCredentials))
                ));
            }
        }
    }

    #[tokio::test]
    async fn register_rejects_mismatched_passwords_locally() {
        let session = Session::new(MemoryStore::default());
        let mut api = MockBookingApi::new();
        api.expect_register().never();

        let form = RegisterForm {
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            password: "12345".to_owned(),
            confirm_password: "54321".to_owned(),
        };

        let result = register(&api, &session, &form).await;
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::PasswordMismatch))
        ));
    }

    #[tokio::test]
    async fn register_without_token_in_response() {
        let session = Session::new(MemoryStore::default());
        let mut api = MockBookingApi::new();
        api.expect_register().times(1).returning(|_| {
            Box::pin(async {
                Ok(AuthResponse {
                    token: None,
                    user: Some(client_user()),
                })
            })
        });

        let form = RegisterForm {
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            password: "12345".to_owned(),
            confirm_password: "12345".to_owned(),
        };

        let result = register(&api, &session, &form).await;
        assert!(matches!(
            result,
            Err(Error::Session(session::Error::MissingToken))
        ));
    }

    #[tokio::test]
    async fn refresh_user_keeps_token() {
        let session = Session::new(MemoryStore::default());
        let token = token_without_expiry();
        session
            .begin(AuthResponse {
                token: Some(token.clone()),
                user: None,
            })
            .unwrap();

        let mut api = MockBookingApi::new();
        api.expect_current_user()
            .times(1)
            .returning(|| Box::pin(async { Ok(client_user()) }));

        let user = refresh_user(&api, &session).await.unwrap();

        assert_eq!(user, client_user());
        assert_eq!(session.user(), Some(client_user()));
        assert_eq!(session.token(), Some(token));
    }
}
