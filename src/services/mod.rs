pub mod quiz_api;
pub mod api_client;
#[cfg(test)]
pub mod fake_api;

pub use quiz_api::QuizApi;
pub use api_client::ApiClient;
