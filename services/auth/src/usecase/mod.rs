pub mod password;
pub mod register;
pub mod reset;
pub mod token;
