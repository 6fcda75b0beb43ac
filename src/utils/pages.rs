// ============================================================================
// PAGES - Una página HTML estática por vista
// ============================================================================

use url::Url;

/// Página actual, detectada por el nombre del fichero en la URL
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Home,
    Description,
    Question,
    Results,
    Attempts,
    Teacher,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Login,
        Page::Home,
        Page::Description,
        Page::Question,
        Page::Results,
        Page::Attempts,
        Page::Teacher,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Page::Login => "index.html",
            Page::Home => "homepage.html",
            Page::Description => "description.html",
            Page::Question => "question.html",
            Page::Results => "results.html",
            Page::Attempts => "attempts.html",
            Page::Teacher => "teacher.html",
        }
    }

    /// `/quiz/question.html` → `Question`. La raíz del sitio es el login.
    pub fn from_path(pathname: &str) -> Option<Page> {
        let file = pathname.rsplit('/').next().unwrap_or_default();
        if file.is_empty() {
            return Some(Page::Login);
        }
        Self::ALL.into_iter().find(|page| page.file_name() == file)
    }

    /// Páginas que exigen `userId` en sesión
    pub fn requires_login(&self) -> bool {
        !matches!(self, Page::Login)
    }
}

/// Valor de un parámetro de la query de `href`, si no está vacío
pub fn query_param(href: &str, name: &str) -> Option<String> {
    Url::parse(href)
        .ok()?
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
