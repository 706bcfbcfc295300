pub mod continue_button;
pub mod gradient_background;
pub mod progress_dots;

pub use continue_button::ContinueButton;
pub use gradient_background::GradientBackground;
pub use progress_dots::ProgressDots;
