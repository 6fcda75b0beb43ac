// ============================================================================
// LOGIN VIEWMODEL - Identificación por nombre de usuario
// ============================================================================

use std::rc::Rc;

use crate::error::{ClientError, ClientResult};
use crate::models::{Role, User};
use crate::services::QuizApi;
use crate::state::SessionState;
use crate::utils::Page;

/// Página de inicio de cada rol
pub fn landing_page(role: Role) -> Page {
    match role {
        Role::Student => Page::Home,
        Role::Teacher => Page::Teacher,
    }
}

pub struct LoginViewModel<A: QuizApi> {
    api: Rc<A>,
    session: SessionState,
}

impl<A: QuizApi> LoginViewModel<A> {
    pub fn new(api: Rc<A>, session: SessionState) -> Self {
        Self { api, session }
    }

    /// Busca el usuario, guarda `userId`/`userRole` y devuelve su página
    pub async fn login(&self, username: &str) -> ClientResult<(User, Page)> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ClientError::validation("Please enter your username."));
        }

        let user = match self.api.find_user(username).await {
            Ok(user) => user,
            Err(e) if e.is_not_found() => {
                return Err(ClientError::validation(format!(
                    "No user named '{}'.",
                    username
                )))
            }
            Err(e) => return Err(e),
        };

        self.session.login(&user)?;
        log::info!("🔐 [LOGIN] {} ({}) identificado", user.display_name(), user.role);
        let page = landing_page(user.role);
        Ok((user, page))
    }

    pub fn logout(&self) -> ClientResult<Page> {
        self.session.logout()?;
        log::info!("👋 [LOGIN] Sesión cerrada");
        Ok(Page::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake_api::FakeApi;
    use crate::utils::SessionStore;

    fn setup() -> (SessionState, LoginViewModel<FakeApi>) {
        let api = Rc::new(
            FakeApi::new()
                .with_user("u1", "ada", Role::Student)
                .with_user("t1", "grace", Role::Teacher),
        );
        let session = SessionState::new(SessionStore::in_memory());
        (session.clone(), LoginViewModel::new(api, session))
    }

    #[tokio::test]
    async fn student_lands_on_home_page() {
        let (session, vm) = setup();
        let (user, page) = vm.login("  ada ").await.unwrap();
        assert_eq!(user.user_id, "u1");
        assert_eq!(page, Page::Home);
        assert_eq!(session.snapshot().user_id.as_deref(), Some("u1"));
    }

    #[tokio::test]
    async fn teacher_lands_on_dashboard() {
        let (session, vm) = setup();
        let (_, page) = vm.login("grace").await.unwrap();
        assert_eq!(page, Page::Teacher);
        assert!(session.snapshot().is_teacher());
    }

    #[tokio::test]
    async fn empty_username_is_rejected() {
        let (session, vm) = setup();
        assert!(matches!(vm.login("   ").await, Err(ClientError::Validation(_))));
        assert!(!session.snapshot().is_logged_in());
    }

    #[tokio::test]
    async fn unknown_user_is_a_validation_error() {
        let (_, vm) = setup();
        let err = vm.login("nobody").await.unwrap_err();
        assert_eq!(err.user_message(), "No user named 'nobody'.");
    }

    #[tokio::test]
    async fn logout_clears_session() {
        let (session, vm) = setup();
        vm.login("ada").await.unwrap();
        assert_eq!(vm.logout().unwrap(), Page::Login);
        assert!(!session.snapshot().is_logged_in());
    }
}
