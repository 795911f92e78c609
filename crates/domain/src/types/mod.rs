//! Domain types and wire field mappings

pub mod auth;
pub mod card;
pub mod contact;
pub mod lead;
pub mod media;
pub mod wire;

pub use auth::{
    ChangePasswordRequest, LoginRequest, LoginResponse, PasswordStatus, RegisterRequest,
    RegisterResponse, ResetPasswordCompleteRequest, ResetPasswordRequest, SetPasswordRequest,
    VerifyRequest, VerifyResponse,
};
pub use card::{BusinessCard, CardAddress, CardEmail, CardPhone, CardWebsite};
pub use contact::{Contact, ContactCreateData};
pub use lead::Lead;
pub use media::{media_type, MediaUpload};
