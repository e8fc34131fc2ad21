//! Reusable UI components

pub mod chat_input;
pub mod chat_message;
pub mod header;
pub mod layout;
pub mod loading;
pub mod report;
pub mod sidebar;

pub use chat_input::ChatInput;
pub use chat_message::ChatMessage;
pub use header::Header;
pub use layout::Layout;
pub use loading::{LoadingDots, ReportSkeleton, Skeleton, TypingIndicator};
pub use report::{ReportCard, SummaryCard, SummaryHeader};
pub use sidebar::Sidebar;
