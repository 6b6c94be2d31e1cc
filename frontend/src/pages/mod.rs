pub mod contact;
pub mod home;

pub use contact::*;
pub use home::*;
