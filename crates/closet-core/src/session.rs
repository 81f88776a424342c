//! Session Gate
//!
//! Client-side email pattern check that flips an authenticated flag.
//! Cosmetic access control only: nothing is verified, nothing is stored.

use regex::Regex;
use serde::Serialize;

use crate::error::{ClosetError, Result};

/// Rejection message for the default student domain
pub const ACCESS_RESTRICTED: &str =
    "Access restricted. You must use a valid @edu.escp.eu student email.";

fn restriction_message(domain: &str) -> String {
    format!("Access restricted. You must use a valid @{} student email.", domain)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub authenticated: bool,
    pub email: Option<String>,
}

impl Session {
    /// Avatar initials from the email local part ("anna.smith@..." -> "AS")
    pub fn initials(&self) -> String {
        let Some(email) = &self.email else {
            return String::new();
        };
        let local = email.split('@').next().unwrap_or_default();
        let mut initials: String = local
            .split(['.', '_', '-'])
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect();
        if initials.is_empty() {
            initials.push('?');
        }
        initials.to_uppercase()
    }
}

#[derive(Debug, Clone)]
pub struct SessionGate {
    pattern: Regex,
    message: String,
    session: Session,
    error: Option<String>,
}

impl SessionGate {
    /// Gate accepting `localpart@<domain>`; the domain is matched literally
    pub fn new(domain: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"^[a-zA-Z0-9._%+-]+@{}$", regex::escape(domain)))?;
        Ok(Self {
            pattern,
            message: restriction_message(domain),
            session: Session::default(),
            error: None,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.authenticated
    }

    /// Validation message from the last rejected attempt
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Any edit to the email field clears the message
    pub fn email_edited(&mut self) {
        self.error = None;
    }

    pub fn accepts(&self, email: &str) -> bool {
        self.pattern.is_match(email)
    }

    pub fn authenticate(&mut self, email: &str) -> Result<&Session> {
        if !self.accepts(email) {
            log::info!("[SESSION] Rejected login for non-student email");
            self.error = Some(self.message.clone());
            return Err(ClosetError::AccessRestricted(self.message.clone()));
        }
        self.session = Session {
            authenticated: true,
            email: Some(email.to_string()),
        };
        self.error = None;
        log::info!("[SESSION] Authenticated {}", email);
        Ok(&self.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> SessionGate {
        SessionGate::new("edu.escp.eu").unwrap()
    }

    #[test]
    fn test_student_email_authenticates() {
        let mut gate = gate();
        let session = gate.authenticate("x@edu.escp.eu").unwrap();
        assert!(session.authenticated);
        assert_eq!(session.email.as_deref(), Some("x@edu.escp.eu"));
        assert!(gate.error().is_none());
    }

    #[test]
    fn test_other_domain_rejected() {
        let mut gate = gate();
        let err = gate.authenticate("x@gmail.com").unwrap_err();
        assert_eq!(err.to_string(), ACCESS_RESTRICTED);
        assert_eq!(gate.error(), Some(ACCESS_RESTRICTED));
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_domain_is_literal_and_case_sensitive() {
        let gate = gate();
        assert!(!gate.accepts("x@eduXescp.eu"));
        assert!(!gate.accepts("x@EDU.ESCP.EU"));
        assert!(!gate.accepts("x@edu.escp.eu.evil.com"));
        assert!(!gate.accepts("@edu.escp.eu"));
        assert!(gate.accepts("first.last+tag@edu.escp.eu"));
    }

    #[test]
    fn test_edit_clears_error() {
        let mut gate = gate();
        let _ = gate.authenticate("nope");
        assert!(gate.error().is_some());
        gate.email_edited();
        assert!(gate.error().is_none());
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_initials() {
        let mut gate = gate();
        gate.authenticate("anna.smith@edu.escp.eu").unwrap();
        assert_eq!(gate.session().initials(), "AS");
        assert_eq!(Session::default().initials(), "");
    }
}
