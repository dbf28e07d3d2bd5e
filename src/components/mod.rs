pub mod dashboard;
pub mod landing;
pub mod sign_in;
pub mod sign_up;
pub mod social;

pub use dashboard::DashboardScreen;
pub use landing::LandingScreen;
pub use sign_in::SignInScreen;
pub use sign_up::SignUpScreen;
