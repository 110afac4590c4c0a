use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub const SUCCESS_MESSAGE: &str = "Pesan Anda telah terkirim! Kami akan segera menghubungi Anda.";

/// Why a submission was refused. The display text is what the visitor sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Mohon lengkapi semua field yang wajib diisi.")]
    MissingRequiredField,
    #[error("Mohon masukkan alamat email yang valid.")]
    InvalidEmail,
}

/// Snapshot of the contact form taken when the visitor presses send.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl ContactForm {
    /// Phone is the only optional field.
    pub fn validate(&self) -> Result<(), ContactError> {
        let required = [&self.name, &self.email, &self.subject, &self.message];
        if required.iter().any(|field| field.is_empty()) {
            return Err(ContactError::MissingRequiredField);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// `mailto:` link that pre-fills the visitor's mail client with this
    /// message.
    pub fn mailto_link(&self, recipient: &str) -> String {
        let body = format!(
            "Nama: {}\nEmail: {}\nTelepon: {}\n\nPesan:\n{}",
            self.name, self.email, self.phone, self.message
        );
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&body)
        )
    }
}
