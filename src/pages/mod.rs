//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (requests, form state) and
//! delegates shared rendering to `components`.

pub mod card_detail;
pub mod dashboard;
pub mod login;
pub mod register;
pub mod rewards;
