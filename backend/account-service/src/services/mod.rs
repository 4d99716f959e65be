/// Business logic services
pub mod account;

pub use account::AccountService;
