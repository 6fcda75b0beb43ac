// ============================================================================
// APP STATE - Estado global de la página
// ============================================================================
// Cada página HTML arranca su propio AppState. Lo que debe sobrevivir a la
// navegación vive en `session` (sessionStorage); el resto es estado de vista.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ClientError;
use crate::models::{Quiz, User};
use crate::services::ApiClient;
use crate::state::{QuizProgress, ReactiveState, SessionState};
use crate::utils::{Page, SessionStore};
use crate::viewmodels::{AttemptReport, AttemptRow, QuestionForm, QuizForm};

type Subscribers = Rc<RefCell<Vec<Rc<dyn Fn()>>>>;

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub page: Page,
    pub api: Rc<ApiClient>,
    pub session: SessionState,

    // Página de preguntas
    pub progress: ReactiveState<QuizProgress>,

    // UI State
    pub loading: Rc<RefCell<bool>>,
    pub message: Rc<RefCell<Option<String>>>, // error o aviso de datos ausentes
    pub notice: Rc<RefCell<Option<String>>>,  // confirmaciones del panel del profesor

    // Datos cargados por página
    pub quizzes: Rc<RefCell<Vec<Quiz>>>,
    pub quiz: Rc<RefCell<Option<Quiz>>>,
    pub report: Rc<RefCell<Option<AttemptReport>>>,
    pub attempts: Rc<RefCell<Vec<AttemptRow>>>,
    pub students: Rc<RefCell<Vec<User>>>,

    // Formularios
    pub username_input: Rc<RefCell<String>>,
    pub quiz_form: Rc<RefCell<QuizForm>>,
    pub question_form: Rc<RefCell<QuestionForm>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Subscribers,
}

impl AppState {
    pub fn new(page: Page, store: SessionStore, api: ApiClient) -> Self {
        let change_subscribers: Subscribers = Rc::new(RefCell::new(Vec::new()));
        let progress = ReactiveState::new(QuizProgress::new(0));

        // Cualquier cambio de la máquina de progresión re-renderiza la página
        {
            let subscribers = change_subscribers.clone();
            progress.subscribe(move || notify_all(&subscribers));
        }

        Self {
            page,
            api: Rc::new(api),
            session: SessionState::new(store),
            progress,
            loading: Rc::new(RefCell::new(false)),
            message: Rc::new(RefCell::new(None)),
            notice: Rc::new(RefCell::new(None)),
            quizzes: Rc::new(RefCell::new(Vec::new())),
            quiz: Rc::new(RefCell::new(None)),
            report: Rc::new(RefCell::new(None)),
            attempts: Rc::new(RefCell::new(Vec::new())),
            students: Rc::new(RefCell::new(Vec::new())),
            username_input: Rc::new(RefCell::new(String::new())),
            quiz_form: Rc::new(RefCell::new(QuizForm::default())),
            question_form: Rc::new(RefCell::new(QuestionForm::default())),
            change_subscribers,
        }
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self) {
        notify_all(&self.change_subscribers);
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
        self.notify_subscribers();
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Registra el fallo y deja el mensaje para el usuario en la página
    pub fn show_error(&self, context: &str, error: &ClientError) {
        log::error!("❌ [{}] {}", context, error);
        *self.loading.borrow_mut() = false;
        *self.message.borrow_mut() = Some(error.user_message());
        self.notify_subscribers();
    }

    pub fn clear_message(&self) {
        *self.message.borrow_mut() = None;
        *self.notice.borrow_mut() = None;
    }

    pub fn set_notice(&self, notice: impl Into<String>) {
        *self.message.borrow_mut() = None;
        *self.notice.borrow_mut() = Some(notice.into());
        self.notify_subscribers();
    }
}

fn notify_all(subscribers: &Subscribers) {
    let callbacks: Vec<Rc<dyn Fn()>> = subscribers.borrow().clone();
    for callback in callbacks {
        callback();
    }
}
