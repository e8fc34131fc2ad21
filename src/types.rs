//! Page-local records
//!
//! Every record here is owned by exactly one page and lives only as long as
//! that page is mounted.

/// Message in the assistant transcript
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: chrono::DateTime<chrono::Local>,
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: chrono::Local::now(),
        }
    }

    /// Clock time shown under the bubble, e.g. "09:41 AM"
    pub fn time_label(&self) -> String {
        self.timestamp.format("%I:%M %p").to_string()
    }
}

pub const GREETING: &str =
    "Hello! I'm your AutoHealth AI assistant. How can I help you today?";

pub const CANNED_REPLY: &str = "Thank you for your message. As an AI health assistant, I can help you with \
symptom checking, medication information, and general health guidance. Please note that I'm not a \
replacement for professional medical advice.";

/// Assistant transcript, seeded with the greeting
#[derive(Debug, Clone)]
pub struct Transcript {
    pub messages: Vec<Message>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self {
            messages: vec![Message::assistant(GREETING)],
        }
    }
}

impl Transcript {
    /// Append a user message. Whitespace-only input is ignored and returns `false`.
    pub fn push_user(&mut self, input: &str) -> bool {
        if input.trim().is_empty() {
            return false;
        }
        self.messages.push(Message::user(input));
        true
    }

    pub fn push_reply(&mut self) {
        self.messages.push(Message::assistant(CANNED_REPLY));
    }
}

/// Login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

/// Symptom-check form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomForm {
    pub age: String,
    pub symptoms: String,
    pub medical_history: String,
    /// One of the `TRAVEL_HISTORY` values, empty until chosen
    pub travel_history: String,
    pub allergies: String,
}

pub const TRAVEL_HISTORY: [(&str, &str); 3] = [
    ("none", "No recent travel"),
    ("domestic", "Domestic travel (last 30 days)"),
    ("international", "International travel (last 30 days)"),
];

pub fn travel_history_label(value: &str) -> &str {
    TRAVEL_HISTORY
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

/// A prescription image chosen by the visitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    /// Object URL used for previews
    pub preview_url: String,
}

/// Prescription-scan form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanForm {
    pub image: Option<ImageAttachment>,
    pub prescription_name: String,
    pub symptoms: String,
    pub duration: String,
    pub custom_query: String,
    pub include_alternates: bool,
}

impl ScanForm {
    /// Attach `image`, returning the attachment it displaces so its preview
    /// can be released.
    pub fn replace_image(&mut self, image: ImageAttachment) -> Option<ImageAttachment> {
        self.image.replace(image)
    }

    /// Detach the current image, on Remove or when the page goes away.
    pub fn take_image(&mut self) -> Option<ImageAttachment> {
        self.image.take()
    }
}

/// Settings panel sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSection {
    Profile,
    Privacy,
    Notifications,
    Medical,
    Preferences,
    About,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 6] = [
        SettingsSection::Profile,
        SettingsSection::Privacy,
        SettingsSection::Notifications,
        SettingsSection::Medical,
        SettingsSection::Preferences,
        SettingsSection::About,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsSection::Profile => "Profile Settings",
            SettingsSection::Privacy => "Privacy & Security",
            SettingsSection::Notifications => "Notifications",
            SettingsSection::Medical => "Medical Information",
            SettingsSection::Preferences => "App Preferences",
            SettingsSection::About => "About & Support",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SettingsSection::Profile => "👤",
            SettingsSection::Privacy => "🛡️",
            SettingsSection::Notifications => "🔔",
            SettingsSection::Medical => "❤️",
            SettingsSection::Preferences => "⚙️",
            SettingsSection::About => "ℹ️",
        }
    }
}

pub const FONT_SIZE_MIN: u8 = 12;
pub const FONT_SIZE_MAX: u8 = 24;

pub const GENDERS: [(&str, &str); 4] = [
    ("male", "Male"),
    ("female", "Female"),
    ("other", "Other"),
    ("prefer-not", "Prefer not to say"),
];
pub const REMINDER_FREQUENCIES: [(&str, &str); 4] = [
    ("never", "Never"),
    ("daily", "Daily"),
    ("weekly", "Weekly"),
    ("monthly", "Monthly"),
];
pub const BLOOD_TYPES: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];
pub const LANGUAGES: [(&str, &str); 4] = [
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
];
pub const THEMES: [(&str, &str); 3] = [("light", "Light"), ("dark", "Dark"), ("system", "System")];
pub const UNITS: [(&str, &str); 2] = [("metric", "Metric"), ("imperial", "Imperial")];

/// Settings panel fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub full_name: String,
    pub email: String,
    pub date_of_birth: String,
    pub gender: String,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub reminder_frequency: String,
    pub two_factor: bool,
    pub data_sharing: bool,
    pub blood_type: String,
    pub physician_name: String,
    pub physician_phone: String,
    pub insurance_provider: String,
    pub policy_number: String,
    pub language: String,
    pub theme: String,
    pub font_size: u8,
    pub units: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            full_name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            date_of_birth: "1990-01-01".to_string(),
            gender: "male".to_string(),
            email_notifications: true,
            push_notifications: true,
            reminder_frequency: "daily".to_string(),
            two_factor: false,
            data_sharing: false,
            blood_type: "O+".to_string(),
            physician_name: String::new(),
            physician_phone: String::new(),
            insurance_provider: String::new(),
            policy_number: String::new(),
            language: "en".to_string(),
            theme: "light".to_string(),
            font_size: 16,
            units: "metric".to_string(),
        }
    }
}

impl Settings {
    /// Set the font size, clamped to the slider range.
    pub fn set_font_size(&mut self, size: i64) {
        self.font_size = size.clamp(FONT_SIZE_MIN as i64, FONT_SIZE_MAX as i64) as u8;
    }
}

/// Format a call duration as `mm:ss`.
pub fn format_session_time(elapsed_secs: u64) -> String {
    format!("{:02}:{:02}", elapsed_secs / 60, elapsed_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_starts_with_greeting() {
        let transcript = Transcript::default();
        assert_eq!(transcript.messages.len(), 1);
        assert_eq!(transcript.messages[0].role, MessageRole::Assistant);
        assert_eq!(transcript.messages[0].content, GREETING);
    }

    #[test]
    fn test_blank_input_is_not_sent() {
        let mut transcript = Transcript::default();
        assert!(!transcript.push_user("   \n"));
        assert!(transcript.push_user("I have a headache"));
        transcript.push_reply();

        let roles: Vec<_> = transcript.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, [MessageRole::Assistant, MessageRole::User, MessageRole::Assistant]);
    }

    #[test]
    fn test_time_label_format() {
        let label = Message::user("hi").time_label();
        assert_eq!(label.len(), 8);
        assert!(label.ends_with("AM") || label.ends_with("PM"));
    }

    #[test]
    fn test_font_size_is_clamped() {
        let mut settings = Settings::default();
        assert_eq!(settings.font_size, 16);

        settings.set_font_size(40);
        assert_eq!(settings.font_size, FONT_SIZE_MAX);
        settings.set_font_size(-3);
        assert_eq!(settings.font_size, FONT_SIZE_MIN);
    }

    #[test]
    fn test_session_time_format() {
        assert_eq!(format_session_time(0), "00:00");
        assert_eq!(format_session_time(75), "01:15");
        assert_eq!(format_session_time(3600), "60:00");
    }

    #[test]
    fn test_scan_image_handoff_returns_each_preview_once() {
        let attachment = |name: &str| ImageAttachment {
            file_name: name.to_string(),
            preview_url: format!("blob:{}", name),
        };
        let mut form = ScanForm::default();

        assert_eq!(form.replace_image(attachment("first.png")), None);
        let displaced = form.replace_image(attachment("second.png"));
        assert_eq!(displaced.map(|a| a.preview_url).as_deref(), Some("blob:first.png"));

        // Teardown releases whatever is still attached, exactly once.
        let live = form.take_image();
        assert_eq!(live.map(|a| a.preview_url).as_deref(), Some("blob:second.png"));
        assert_eq!(form.take_image(), None);
        assert!(form.image.is_none());
    }

    #[test]
    fn test_travel_history_label() {
        assert_eq!(travel_history_label("domestic"), "Domestic travel (last 30 days)");
        assert_eq!(travel_history_label("unknown"), "unknown");
    }
}
