pub mod quiz;
pub mod question;
pub mod attempt;
pub mod answer;
pub mod user;
pub mod message;

pub use quiz::{Quiz, QuizDetail, QuizEnvelope, QuizInput, QuizzesResponse, VisibilityRequest};
pub use question::{CreatedQuestion, CurrentQuestion, NewQuestion, NextStep, Question, QuestionsResponse};
pub use attempt::{
    Attempt, AttemptDetails, AttemptKey, AttemptResult, AttemptsResponse, CreateAttemptRequest,
    CreateAttemptResponse, TimeTaken,
};
pub use answer::{AnswerRecord, AnswerResult, AnswerStatus, AnswersResponse, SubmitAnswerRequest};
pub use user::{Role, StudentsResponse, User};
pub use message::ApiMessage;
