pub mod role_guard;
pub mod token_validator;
pub mod use_cases;

// Re-export for convenience
pub use role_guard::{RoleGuardError, RoleInvariantGuard};
pub use token_validator::TokenValidator;
pub use use_cases::{
    AssignRoleError, AssignRoleUseCase, DeleteRoleError, DeleteRoleUseCase, LoginError,
    LoginUseCase, LogoutError, LogoutUseCase, RemoveRoleError, RemoveRoleUseCase,
    RequestPasswordResetError, RequestPasswordResetUseCase, ResetPasswordError,
    ResetPasswordUseCase,
};
