pub mod home_viewmodel;
pub mod description_viewmodel;
pub mod quiz_viewmodel;
pub mod results_viewmodel;
pub mod login_viewmodel;
pub mod attempts_viewmodel;
pub mod teacher_viewmodel;

pub use home_viewmodel::{visible_tiles, HomeViewModel, QuizTile};
pub use description_viewmodel::DescriptionViewModel;
pub use quiz_viewmodel::QuizViewModel;
pub use results_viewmodel::{AttemptReport, ResultsViewModel};
pub use login_viewmodel::{landing_page, LoginViewModel};
pub use attempts_viewmodel::{AttemptRow, AttemptsViewModel};
pub use teacher_viewmodel::{Dashboard, QuestionForm, QuizForm, TeacherViewModel};
