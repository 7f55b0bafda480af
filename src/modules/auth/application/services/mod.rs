pub mod password_digest;
