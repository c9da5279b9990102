pub mod assign_role;
pub mod delete_role;
pub mod login;
pub mod logout;
pub mod remove_role;
pub mod request_password_reset;
pub mod reset_password;

// Re-export for convenience
pub use assign_role::{AssignRoleError, AssignRoleUseCase};
pub use delete_role::{DeleteRoleError, DeleteRoleUseCase};
pub use login::{LoginError, LoginUseCase};
pub use logout::{LogoutError, LogoutUseCase};
pub use remove_role::{RemoveRoleError, RemoveRoleUseCase};
pub use request_password_reset::{RequestPasswordResetError, RequestPasswordResetUseCase};
pub use reset_password::{ResetPasswordError, ResetPasswordUseCase};
