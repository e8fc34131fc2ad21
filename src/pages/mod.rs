//! Page components

pub mod auto_chat;
pub mod auto_check;
pub mod auto_companion;
pub mod auto_scan;
pub mod login;
pub mod not_found;
pub mod settings;
pub mod signup;

pub use auto_chat::AutoChatPage;
pub use auto_check::AutoCheckPage;
pub use auto_companion::AutoCompanionPage;
pub use auto_scan::AutoScanPage;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use settings::SettingsPage;
pub use signup::SignupPage;
