use thiserror::Error;

/// Displays as the message shown next to the form.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Preencha todos os campos")]
    MissingFields,

    #[error("Digite uma senha de 4 dígitos")]
    InvalidPin,

    #[error("Por favor, informe um e-mail válido")]
    InvalidEmail,

    #[error("Preencha email e senha")]
    MissingCredentials,

    #[error("A senha deve ter pelo menos {0} caracteres")]
    PasswordTooShort(usize),

    #[error("As senhas não coincidem")]
    PasswordMismatch,
}

pub const PIN_LENGTH: usize = 4;
pub const MIN_PASSWORD_LENGTH: usize = 4;

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Quick registration in the booking flow, the PIN doubles as the password.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuickRegisterForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub pin: String,
}

impl QuickRegisterForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if blank(&self.name) || blank(&self.phone) || blank(&self.email) {
            return Err(ValidationError::MissingFields);
        }

        if self.pin.len() != PIN_LENGTH || !self.pin.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPin);
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if blank(&self.email) || blank(&self.password) {
            return Err(ValidationError::MissingCredentials);
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if blank(&self.name) || blank(&self.email) || blank(&self.password) {
            return Err(ValidationError::MissingFields);
        }

        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
        }

        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(())
    }
}
