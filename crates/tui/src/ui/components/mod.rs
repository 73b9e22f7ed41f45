pub mod card;
pub mod forms;
pub mod money;
pub mod tabs;
pub mod toast;
