pub mod account;
pub mod question;

pub use account::PostgresAccountRepository;
pub use question::PostgresQuestionRepository;
