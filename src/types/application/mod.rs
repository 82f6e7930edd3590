pub mod command;
pub mod interaction;
pub mod locale;
