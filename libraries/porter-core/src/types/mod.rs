mod credential;
mod outcome;
mod record;

pub use credential::{
    validate_username, Credential, MAX_PASSWORD_LEN, MAX_USERNAME_LEN, MIN_PASSWORD_LEN,
};
pub use outcome::AuthOutcome;
pub use record::UserRecord;
