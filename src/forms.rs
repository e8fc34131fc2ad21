//! Form validation and the report page state machine

use crate::error::{AppError, Result};
use crate::types::{LoginForm, ScanForm, SignupForm, SymptomForm};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// A form with required fields. Whitespace-only values count as empty.
pub trait RequiredFields {
    /// Labels of required fields that are still empty
    fn missing_fields(&self) -> Vec<&'static str>;

    fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn collect_missing(fields: &[(&'static str, bool)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, missing)| *missing)
        .map(|(label, _)| *label)
        .collect()
}

impl RequiredFields for LoginForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[("Email", blank(&self.email)), ("Password", blank(&self.password))])
    }
}

impl RequiredFields for SignupForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[
            ("Full Name", blank(&self.full_name)),
            ("Email", blank(&self.email)),
            ("Password", blank(&self.password)),
            ("Confirm Password", blank(&self.confirm_password)),
        ])
    }
}

impl RequiredFields for SymptomForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[
            ("Age", blank(&self.age)),
            ("Symptoms", blank(&self.symptoms)),
            ("Medical History", blank(&self.medical_history)),
            ("Travel History", blank(&self.travel_history)),
            ("Allergies", blank(&self.allergies)),
        ])
    }
}

impl RequiredFields for ScanForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[
            ("Prescription Image", self.image.is_none()),
            ("Prescription Name", blank(&self.prescription_name)),
            ("Symptoms", blank(&self.symptoms)),
            ("Duration of Symptoms", blank(&self.duration)),
        ])
    }
}

impl SignupForm {
    /// Check the form before creating the account.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::InvalidInput(format!("missing {}", missing.join(", "))));
        }
        if self.password != self.confirm_password {
            return Err(AppError::InvalidInput(PASSWORD_MISMATCH.to_string()));
        }
        if !self.accept_terms {
            return Err(AppError::InvalidInput(
                "Terms & Conditions must be accepted".to_string(),
            ));
        }
        Ok(())
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}

/// Strength bucket shown under the signup password field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    None,
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn of(password: &str) -> Self {
        match password.chars().count() {
            0 => PasswordStrength::None,
            1..=5 => PasswordStrength::Weak,
            6..=9 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn percent(self) -> u8 {
        match self {
            PasswordStrength::None => 0,
            PasswordStrength::Weak => 33,
            PasswordStrength::Medium => 66,
            PasswordStrength::Strong => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::None => "",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }

    pub fn bar_class(self) -> &'static str {
        match self {
            PasswordStrength::Weak => "bg-red-500",
            PasswordStrength::Medium => "bg-yellow-500",
            _ => "bg-green-500",
        }
    }
}

/// Phase of a "fill in, then see a report" page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportPhase {
    /// Fields editable
    #[default]
    Collecting,
    /// Input frozen, simulated computation pending
    Loading,
    /// Canned report displayed
    Ready,
}

impl ReportPhase {
    /// Leave `Collecting` for `Loading`. Requires a complete form.
    pub fn submit(&mut self, form: &impl RequiredFields) -> Result<()> {
        if *self != ReportPhase::Collecting {
            return Err(AppError::InvalidInput("report already submitted".to_string()));
        }
        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::InvalidInput(format!("missing {}", missing.join(", "))));
        }
        *self = ReportPhase::Loading;
        Ok(())
    }

    /// The simulated computation finished. Only meaningful while `Loading`.
    pub fn finish(&mut self) -> bool {
        if *self == ReportPhase::Loading {
            *self = ReportPhase::Ready;
            true
        } else {
            false
        }
    }

    /// Back to `Collecting`. Form values are held separately and are untouched.
    pub fn edit(&mut self) {
        *self = ReportPhase::Collecting;
    }

    pub fn is_collecting(self) -> bool {
        self == ReportPhase::Collecting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageAttachment;

    fn symptom_form() -> SymptomForm {
        SymptomForm {
            age: "34".to_string(),
            symptoms: "Sore throat, mild fever".to_string(),
            medical_history: "None".to_string(),
            travel_history: "none".to_string(),
            allergies: "Penicillin".to_string(),
        }
    }

    fn scan_form() -> ScanForm {
        ScanForm {
            image: Some(ImageAttachment {
                file_name: "rx.png".to_string(),
                preview_url: "blob:rx".to_string(),
            }),
            prescription_name: "Amoxicillin".to_string(),
            symptoms: "Ear infection".to_string(),
            duration: "3 days".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_form_moves_to_loading_then_ready() {
        let mut phase = ReportPhase::default();
        phase.submit(&symptom_form()).expect("should submit");
        assert_eq!(phase, ReportPhase::Loading);

        assert!(phase.finish());
        assert_eq!(phase, ReportPhase::Ready);
    }

    #[test]
    fn test_incomplete_form_stays_collecting() {
        let mut form = symptom_form();
        form.allergies = "  ".to_string();
        let mut phase = ReportPhase::default();

        let err = phase.submit(&form).unwrap_err();

        assert!(err.to_string().contains("Allergies"));
        assert_eq!(phase, ReportPhase::Collecting);
    }

    #[test]
    fn test_finish_outside_loading_is_ignored() {
        let mut phase = ReportPhase::Collecting;
        assert!(!phase.finish());
        assert_eq!(phase, ReportPhase::Collecting);
    }

    #[test]
    fn test_edit_round_trip_reaches_same_state() {
        let form = scan_form();
        let mut phase = ReportPhase::default();
        phase.submit(&form).unwrap();
        phase.finish();

        phase.edit();
        assert!(phase.is_collecting());
        assert_eq!(form, scan_form());

        phase.submit(&form).unwrap();
        phase.finish();
        assert_eq!(phase, ReportPhase::Ready);
    }

    #[test]
    fn test_edit_while_loading_drops_pending_result() {
        let mut phase = ReportPhase::default();
        phase.submit(&symptom_form()).unwrap();
        phase.edit();

        assert!(!phase.finish());
        assert!(phase.is_collecting());
    }

    #[test]
    fn test_scan_requires_image_but_not_query() {
        let mut form = scan_form();
        assert!(form.is_complete());

        form.image = None;
        assert_eq!(form.missing_fields(), ["Prescription Image"]);
    }

    #[test]
    fn test_signup_password_mismatch() {
        let form = SignupForm {
            full_name: "Jane Roe".to_string(),
            email: "jane@example.com".to_string(),
            password: "abc".to_string(),
            confirm_password: "xyz".to_string(),
            accept_terms: true,
        };

        let err = form.validate().unwrap_err();
        assert_eq!(err.to_string(), format!("Invalid input: {}", PASSWORD_MISMATCH));
        assert!(!form.passwords_match());
    }

    #[test]
    fn test_signup_requires_terms() {
        let form = SignupForm {
            full_name: "Jane Roe".to_string(),
            email: "jane@example.com".to_string(),
            password: "abcdefgh".to_string(),
            confirm_password: "abcdefgh".to_string(),
            accept_terms: false,
        };
        assert!(form.validate().is_err());

        let form = SignupForm {
            accept_terms: true,
            ..form
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_password_strength_buckets() {
        assert_eq!(PasswordStrength::of(""), PasswordStrength::None);
        assert_eq!(PasswordStrength::of("abc").percent(), 33);
        assert_eq!(PasswordStrength::of("abcdef").label(), "Medium");
        assert_eq!(PasswordStrength::of("abcdefghij"), PasswordStrength::Strong);
    }
}
