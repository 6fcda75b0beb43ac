// Backend falso en memoria para los tests de view-models.
// Se comporta como el backend real: corrige en servidor, lleva la posición
// de cada intento, sigue devolviendo la última pregunta al terminar y
// responde 400 "No more questions" al pedir otra.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{ClientError, ClientResult};
use crate::models::*;
use crate::services::QuizApi;

pub const POINTS_PER_ANSWER: i64 = 100;

struct StoredAttempt {
    attempt: Attempt,
    position: usize,
}

#[derive(Default)]
pub struct FakeApi {
    quizzes: RefCell<Vec<Quiz>>,
    hidden: RefCell<Vec<String>>,
    questions: RefCell<HashMap<String, Vec<Question>>>,
    attempts: RefCell<Vec<StoredAttempt>>,
    answers: RefCell<Vec<(String, AnswerRecord)>>,
    users: Vec<User>,
    /// Nombres de las operaciones llamadas, en orden
    pub calls: RefCell<Vec<&'static str>>,
    /// Si está activo, toda llamada falla con un error de red
    pub offline: Cell<bool>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quiz(self, quiz_id: &str, title: &str, questions: Vec<Question>) -> Self {
        self.quizzes.borrow_mut().push(Quiz {
            quiz_id: quiz_id.to_string(),
            title: title.to_string(),
            description: format!("About {}", title),
        });
        self.questions
            .borrow_mut()
            .insert(quiz_id.to_string(), questions);
        self
    }

    pub fn with_user(mut self, user_id: &str, user_name: &str, role: Role) -> Self {
        self.users.push(User {
            user_id: user_id.to_string(),
            role,
            user_name: Some(user_name.to_string()),
            full_name: None,
            email: None,
        });
        self
    }

    pub fn question(id: &str, text: &str, options: [&str; 4], correct: &str) -> Question {
        Question {
            question_id: id.to_string(),
            question_text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct.to_string(),
        }
    }

    pub fn called(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == name).count()
    }

    pub fn score_of(&self, attempt_id: &str) -> Option<i64> {
        self.attempts
            .borrow()
            .iter()
            .find(|a| a.attempt.user_attempt_id == attempt_id)
            .map(|a| a.attempt.score)
    }

    pub fn is_hidden(&self, quiz_id: &str) -> bool {
        self.hidden.borrow().iter().any(|id| id == quiz_id)
    }

    fn track(&self, name: &'static str) -> ClientResult<()> {
        self.calls.borrow_mut().push(name);
        if self.offline.get() {
            return Err(ClientError::Network("offline".into()));
        }
        Ok(())
    }

    fn questions_of(&self, quiz_id: &str) -> ClientResult<Vec<Question>> {
        self.questions
            .borrow()
            .get(quiz_id)
            .cloned()
            .ok_or_else(|| ClientError::http(404, "Quiz not found"))
    }

    fn position_of(&self, key: &AttemptKey) -> ClientResult<usize> {
        self.attempts
            .borrow()
            .iter()
            .find(|a| a.attempt.user_attempt_id == key.attempt_id)
            .map(|a| a.position)
            .ok_or_else(|| ClientError::http(404, "Attempt not found"))
    }

    fn as_current(question: &Question) -> CurrentQuestion {
        CurrentQuestion {
            question_id: question.question_id.clone(),
            question_text: question.question_text.clone(),
            options: question.options.clone(),
        }
    }
}

#[async_trait(?Send)]
impl QuizApi for FakeApi {
    async fn list_quizzes(&self) -> ClientResult<Vec<Quiz>> {
        self.track("list_quizzes")?;
        let hidden = self.hidden.borrow();
        Ok(self
            .quizzes
            .borrow()
            .iter()
            .filter(|q| !hidden.contains(&q.quiz_id))
            .cloned()
            .collect())
    }

    async fn get_quiz(&self, quiz_id: &str) -> ClientResult<QuizDetail> {
        self.track("get_quiz")?;
        let quiz = self
            .quizzes
            .borrow()
            .iter()
            .find(|q| q.quiz_id == quiz_id)
            .cloned()
            .ok_or_else(|| ClientError::http(404, "Quiz not found"))?;
        let question_count = self.questions_of(quiz_id)?.len();
        Ok(QuizDetail {
            quiz,
            question_count: Some(question_count),
        })
    }

    async fn get_questions(&self, quiz_id: &str) -> ClientResult<Vec<Question>> {
        self.track("get_questions")?;
        self.questions_of(quiz_id)
    }

    async fn create_quiz(&self, input: &QuizInput) -> ClientResult<Quiz> {
        self.track("create_quiz")?;
        let quiz = Quiz {
            quiz_id: format!("q{}", self.quizzes.borrow().len() + 1),
            title: input.title.clone(),
            description: input.description.clone(),
        };
        self.quizzes.borrow_mut().push(quiz.clone());
        self.questions
            .borrow_mut()
            .insert(quiz.quiz_id.clone(), Vec::new());
        Ok(quiz)
    }

    async fn update_quiz(&self, quiz_id: &str, input: &QuizInput) -> ClientResult<Quiz> {
        self.track("update_quiz")?;
        let mut quizzes = self.quizzes.borrow_mut();
        let quiz = quizzes
            .iter_mut()
            .find(|q| q.quiz_id == quiz_id)
            .ok_or_else(|| ClientError::http(404, "Quiz not found"))?;
        quiz.title = input.title.clone();
        quiz.description = input.description.clone();
        Ok(quiz.clone())
    }

    async fn create_question(&self, quiz_id: &str, question: &NewQuestion) -> ClientResult<String> {
        self.track("create_question")?;
        let mut questions = self.questions.borrow_mut();
        let list = questions
            .get_mut(quiz_id)
            .ok_or_else(|| ClientError::http(404, "Quiz not found"))?;
        let question_id = format!("{}-x{}", quiz_id, list.len() + 1);
        list.push(Question {
            question_id: question_id.clone(),
            question_text: question.question_text.clone(),
            options: question.options.clone(),
            correct_answer: question.correct_answer.clone(),
        });
        Ok(question_id)
    }

    async fn set_quiz_visibility(&self, quiz_id: &str, visible: bool) -> ClientResult<()> {
        self.track("set_quiz_visibility")?;
        let mut hidden = self.hidden.borrow_mut();
        hidden.retain(|id| id != quiz_id);
        if !visible {
            hidden.push(quiz_id.to_string());
        }
        Ok(())
    }

    async fn create_attempt(&self, quiz_id: &str, user_id: &str) -> ClientResult<String> {
        self.track("create_attempt")?;
        self.questions_of(quiz_id)?;
        let attempt_id = format!("a{}", self.attempts.borrow().len() + 1);
        self.attempts.borrow_mut().push(StoredAttempt {
            attempt: Attempt {
                user_attempt_id: attempt_id.clone(),
                quiz_id: quiz_id.to_string(),
                user_id: user_id.to_string(),
                score: 0,
                time_taken: Some(TimeTaken {
                    minutes: 1,
                    seconds: 5,
                }),
                date_started: None,
            },
            position: 0,
        });
        Ok(attempt_id)
    }

    async fn list_attempts(&self, user_id: &str) -> ClientResult<Vec<Attempt>> {
        self.track("list_attempts")?;
        Ok(self
            .attempts
            .borrow()
            .iter()
            .filter(|a| a.attempt.user_id == user_id)
            .map(|a| a.attempt.clone())
            .collect())
    }

    async fn get_attempt_result(&self, key: &AttemptKey) -> ClientResult<AttemptResult> {
        self.track("get_attempt_result")?;
        let attempts = self.attempts.borrow();
        let stored = attempts
            .iter()
            .find(|a| a.attempt.user_attempt_id == key.attempt_id)
            .ok_or_else(|| ClientError::http(404, "Attempt not found"))?;
        Ok(AttemptResult {
            score: stored.attempt.score,
            time_taken: stored.attempt.time_taken,
            progress: Some(stored.position),
        })
    }

    async fn get_attempt_details(&self, attempt_id: &str) -> ClientResult<AttemptDetails> {
        self.track("get_attempt_details")?;
        self.attempts
            .borrow()
            .iter()
            .find(|a| a.attempt.user_attempt_id == attempt_id)
            .map(|a| AttemptDetails {
                user_attempt_id: Some(attempt_id.to_string()),
                quiz_id: a.attempt.quiz_id.clone(),
                user_id: a.attempt.user_id.clone(),
            })
            .ok_or_else(|| ClientError::http(404, "Attempt not found"))
    }

    async fn current_question(&self, key: &AttemptKey) -> ClientResult<CurrentQuestion> {
        self.track("current_question")?;
        let position = self.position_of(key)?;
        self.questions_of(&key.quiz_id)?
            .get(position)
            .map(Self::as_current)
            .ok_or_else(|| ClientError::http(404, "Current question not found"))
    }

    async fn next_question(&self, key: &AttemptKey) -> ClientResult<NextStep> {
        self.track("next_question")?;
        let questions = self.questions_of(&key.quiz_id)?;
        let mut attempts = self.attempts.borrow_mut();
        let stored = attempts
            .iter_mut()
            .find(|a| a.attempt.user_attempt_id == key.attempt_id)
            .ok_or_else(|| ClientError::http(404, "Attempt not found"))?;
        // Tras la última pregunta la posición no se mueve
        let Some(question) = questions.get(stored.position + 1) else {
            return NextStep::from_response(400, r#"{"message":"No more questions"}"#);
        };
        stored.position += 1;
        let body = serde_json::to_string(&Self::as_current(question))?;
        NextStep::from_response(200, &body)
    }

    async fn submit_answer(&self, request: &SubmitAnswerRequest) -> ClientResult<AnswerResult> {
        self.track("submit_answer")?;
        let question = self
            .questions_of(&request.quiz_id)?
            .into_iter()
            .find(|q| q.question_id == request.question_id)
            .ok_or_else(|| ClientError::http(404, "Question not found"))?;
        let passed = question.correct_answer == request.user_answer;
        let status = if passed {
            AnswerStatus::Pass
        } else {
            AnswerStatus::Fail
        };

        if let Some(stored) = self
            .attempts
            .borrow_mut()
            .iter_mut()
            .find(|a| a.attempt.user_attempt_id == request.attempt_id)
        {
            if passed {
                stored.attempt.score += POINTS_PER_ANSWER;
            }
        }
        self.answers.borrow_mut().push((
            request.attempt_id.clone(),
            AnswerRecord {
                question_id: Some(format!("QUESTION#{}", question.question_id)),
                question_text: Some(question.question_text.clone()),
                user_answer: request.user_answer.clone(),
                correct_answer: Some(question.correct_answer.clone()),
                status: Some(status),
            },
        ));

        Ok(AnswerResult {
            status: Some(status),
            correct_answers: question.correct_answer,
        })
    }

    async fn list_answers(&self, key: &AttemptKey) -> ClientResult<Vec<AnswerRecord>> {
        self.track("list_answers")?;
        Ok(self
            .answers
            .borrow()
            .iter()
            .filter(|(attempt_id, _)| *attempt_id == key.attempt_id)
            .map(|(_, record)| record.clone())
            .collect())
    }

    async fn find_user(&self, username: &str) -> ClientResult<User> {
        self.track("find_user")?;
        self.users
            .iter()
            .find(|u| u.user_name.as_deref() == Some(username))
            .cloned()
            .ok_or_else(|| ClientError::http(404, "User not found"))
    }

    async fn list_students(&self) -> ClientResult<Vec<User>> {
        self.track("list_students")?;
        Ok(self
            .users
            .iter()
            .filter(|u| u.role == Role::Student)
            .cloned()
            .collect())
    }
}
