// ============================================================================
// SESSION STORE - sessionStorage del navegador (por pestaña)
// ============================================================================
// Los valores se guardan como JSON. Una clave ausente o ilegible se lee como
// `None`: es un estado normal (primera visita, enlace viejo), nunca un error.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

use crate::error::{ClientError, ClientResult};

/// Almacenamiento clave/valor de texto
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> ClientResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> ClientResult<()>;
    fn remove_item(&self, key: &str) -> ClientResult<()>;
}

/// `window.sessionStorage`
pub struct BrowserSessionStorage {
    storage: Storage,
}

impl BrowserSessionStorage {
    pub fn new() -> Option<Self> {
        let storage = window()?.session_storage().ok()??;
        Some(Self { storage })
    }
}

impl StorageBackend for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> ClientResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|_| ClientError::Storage(format!("Error leyendo sessionStorage[{}]", key)))
    }

    fn set_item(&self, key: &str, value: &str) -> ClientResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|_| ClientError::Storage(format!("Error guardando sessionStorage[{}]", key)))
    }

    fn remove_item(&self, key: &str) -> ClientResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|_| ClientError::Storage(format!("Error eliminando sessionStorage[{}]", key)))
    }
}

/// Respaldo en memoria (sessionStorage bloqueado, tests)
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> ClientResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> ClientResult<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> ClientResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Store tipado sobre un backend; clonar comparte el mismo almacenamiento
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// sessionStorage del navegador, o memoria si no está disponible
    pub fn browser() -> Self {
        match BrowserSessionStorage::new() {
            Some(storage) => Self::new(Rc::new(storage)),
            None => {
                log::warn!("⚠️ [STORAGE] sessionStorage no disponible, usando memoria");
                Self::in_memory()
            }
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> ClientResult<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| ClientError::Serialization(format!("{}: {}", key, e)))?;
        self.backend.set_item(key, &json)
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("⚠️ [STORAGE] {}", e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("⚠️ [STORAGE] Valor ilegible en '{}': {}", key, e);
                None
            }
        }
    }

    pub fn remove(&self, key: &str) -> ClientResult<()> {
        self.backend.remove_item(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Quiz;

    #[test]
    fn values_round_trip_verbatim() {
        let store = SessionStore::in_memory();
        store.set("selectedQuizId", "q1").unwrap();
        store.set("score", &300_i64).unwrap();

        assert_eq!(store.get::<String>("selectedQuizId").as_deref(), Some("q1"));
        assert_eq!(store.get::<i64>("score"), Some(300));
    }

    #[test]
    fn second_store_on_same_backend_sees_writes() {
        // Simula una nueva carga de página en la misma pestaña
        let backend: Rc<dyn StorageBackend> = Rc::new(MemoryStorage::new());
        let first_page = SessionStore::new(backend.clone());
        let quizzes = vec![Quiz {
            quiz_id: "q1".into(),
            title: "A".into(),
            description: "About A".into(),
        }];
        first_page.set("quizzes", &quizzes).unwrap();

        let second_page = SessionStore::new(backend);
        assert_eq!(second_page.get::<Vec<Quiz>>("quizzes"), Some(quizzes));
    }

    #[test]
    fn absent_key_reads_as_none() {
        let store = SessionStore::in_memory();
        assert_eq!(store.get::<String>("userAttemptId"), None);
    }

    #[test]
    fn malformed_value_reads_as_none() {
        let backend = Rc::new(MemoryStorage::new());
        backend.set_item("userId", "not json").unwrap();
        let store = SessionStore::new(backend);
        assert_eq!(store.get::<String>("userId"), None);
    }

    #[test]
    fn remove_clears_key() {
        let store = SessionStore::in_memory();
        store.set("userId", "u1").unwrap();
        store.remove("userId").unwrap();
        assert_eq!(store.get::<String>("userId"), None);
    }
}
