pub static ROOT_API: &'static str = "api";
pub static API_SMTP: &'static str = "smtp";

pub static HEADER_CREDENTIALS: &'static str = "Credentials";
pub static STORAGE_CREDENTIALS: &'static str = "credentials";

pub const RECIPIENT_SEPARATOR: char = ';';
