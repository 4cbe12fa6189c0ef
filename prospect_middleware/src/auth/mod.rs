pub mod attach_user;

pub use attach_user::AttachUserArgs;
