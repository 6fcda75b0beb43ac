// ============================================================================
// SESSION STATE - Contexto de sesión tipado
// ============================================================================
// Se carga del SessionStore al arrancar cada página y se pasa a las vistas.
// Cada escritura va a la vez al contexto en memoria y a sessionStorage.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{ClientError, ClientResult};
use crate::models::{AttemptKey, Quiz, Role, User};
use crate::utils::constants::*;
use crate::utils::SessionStore;

/// Identificadores que sobreviven entre páginas de la misma pestaña
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct QuizSession {
    pub user_id: Option<String>,
    pub user_role: Role,
    pub selected_quiz_id: Option<String>,
    pub user_attempt_id: Option<String>,
    pub current_question_id: Option<String>,
    pub viewed_student_id: Option<String>,
}

impl QuizSession {
    /// Lee todas las claves; las ausentes quedan en su valor por defecto
    pub fn load(store: &SessionStore) -> Self {
        Self {
            user_id: store.get(KEY_USER_ID),
            user_role: store.get(KEY_USER_ROLE).unwrap_or_default(),
            selected_quiz_id: store.get(KEY_SELECTED_QUIZ_ID),
            user_attempt_id: store.get(KEY_USER_ATTEMPT_ID),
            current_question_id: store.get(KEY_CURRENT_QUESTION_ID),
            viewed_student_id: store.get(KEY_VIEWED_STUDENT_ID),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn is_teacher(&self) -> bool {
        self.is_logged_in() && self.user_role == Role::Teacher
    }

    pub fn require_user_id(&self) -> ClientResult<&str> {
        self.user_id
            .as_deref()
            .ok_or(ClientError::MissingSession(KEY_USER_ID))
    }

    pub fn require_quiz_id(&self) -> ClientResult<&str> {
        self.selected_quiz_id
            .as_deref()
            .ok_or(ClientError::MissingSession(KEY_SELECTED_QUIZ_ID))
    }

    pub fn require_attempt_id(&self) -> ClientResult<&str> {
        self.user_attempt_id
            .as_deref()
            .ok_or(ClientError::MissingSession(KEY_USER_ATTEMPT_ID))
    }

    /// (usuario, quiz, intento) del intento activo
    pub fn attempt_key(&self) -> ClientResult<AttemptKey> {
        Ok(AttemptKey {
            user_id: self.require_user_id()?.to_string(),
            quiz_id: self.require_quiz_id()?.to_string(),
            attempt_id: self.require_attempt_id()?.to_string(),
        })
    }
}

/// Estado de sesión compartido por las vistas
#[derive(Clone)]
pub struct SessionState {
    store: SessionStore,
    context: Rc<RefCell<QuizSession>>,
}

impl SessionState {
    pub fn new(store: SessionStore) -> Self {
        let context = QuizSession::load(&store);
        Self {
            store,
            context: Rc::new(RefCell::new(context)),
        }
    }

    /// Copia del contexto actual (nunca se presta a través de un await)
    pub fn snapshot(&self) -> QuizSession {
        self.context.borrow().clone()
    }

    pub fn login(&self, user: &User) -> ClientResult<()> {
        self.store.set(KEY_USER_ID, &user.user_id)?;
        self.store.set(KEY_USER_ROLE, &user.role)?;
        let mut ctx = self.context.borrow_mut();
        ctx.user_id = Some(user.user_id.clone());
        ctx.user_role = user.role;
        Ok(())
    }

    /// Olvida al usuario y su progreso; la caché de quizzes se conserva
    pub fn logout(&self) -> ClientResult<()> {
        for key in [
            KEY_USER_ID,
            KEY_USER_ROLE,
            KEY_SELECTED_QUIZ_ID,
            KEY_USER_ATTEMPT_ID,
            KEY_CURRENT_QUESTION_ID,
            KEY_VIEWED_STUDENT_ID,
        ] {
            self.store.remove(key)?;
        }
        *self.context.borrow_mut() = QuizSession::default();
        Ok(())
    }

    pub fn select_quiz(&self, quiz_id: &str) -> ClientResult<()> {
        self.store.set(KEY_SELECTED_QUIZ_ID, quiz_id)?;
        self.context.borrow_mut().selected_quiz_id = Some(quiz_id.to_string());
        Ok(())
    }

    pub fn start_attempt(&self, attempt_id: &str) -> ClientResult<()> {
        self.store.set(KEY_USER_ATTEMPT_ID, attempt_id)?;
        self.store.remove(KEY_CURRENT_QUESTION_ID)?;
        let mut ctx = self.context.borrow_mut();
        ctx.user_attempt_id = Some(attempt_id.to_string());
        ctx.current_question_id = None;
        Ok(())
    }

    /// Abre un intento existente (historial, vista del profesor)
    pub fn open_attempt(&self, quiz_id: &str, attempt_id: &str) -> ClientResult<()> {
        self.select_quiz(quiz_id)?;
        self.store.set(KEY_USER_ATTEMPT_ID, attempt_id)?;
        self.context.borrow_mut().user_attempt_id = Some(attempt_id.to_string());
        Ok(())
    }

    pub fn set_current_question(&self, question_id: &str) -> ClientResult<()> {
        self.store.set(KEY_CURRENT_QUESTION_ID, question_id)?;
        self.context.borrow_mut().current_question_id = Some(question_id.to_string());
        Ok(())
    }

    pub fn view_student(&self, student_id: Option<&str>) -> ClientResult<()> {
        match student_id {
            Some(id) => self.store.set(KEY_VIEWED_STUDENT_ID, id)?,
            None => self.store.remove(KEY_VIEWED_STUDENT_ID)?,
        }
        self.context.borrow_mut().viewed_student_id = student_id.map(str::to_string);
        Ok(())
    }

    pub fn cache_quizzes(&self, quizzes: &[Quiz]) -> ClientResult<()> {
        self.store.set(KEY_QUIZZES, quizzes)
    }

    pub fn cached_quizzes(&self) -> Option<Vec<Quiz>> {
        self.store.get(KEY_QUIZZES)
    }
}
