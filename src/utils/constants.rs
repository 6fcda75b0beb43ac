// Claves de sessionStorage (nombres compartidos con las páginas HTML)
pub const KEY_USER_ID: &str = "userId";
pub const KEY_USER_ROLE: &str = "userRole";
pub const KEY_SELECTED_QUIZ_ID: &str = "selectedQuizId";
pub const KEY_USER_ATTEMPT_ID: &str = "userAttemptId";
pub const KEY_CURRENT_QUESTION_ID: &str = "currentQuestionId";
pub const KEY_QUIZZES: &str = "quizzes";
/// Alumno cuyos intentos está revisando un profesor
pub const KEY_VIEWED_STUDENT_ID: &str = "viewedStudentId";

/// Parámetro de los enlaces de la portada a description.html
pub const QUIZ_ID_PARAM: &str = "quizId";

/// Raíz donde se monta la aplicación
pub const APP_ROOT_ID: &str = "app";

/// Ilustraciones de las tarjetas de la portada, se reparten en ciclo
pub const QUIZ_TILE_IMAGES: &[(&str, &str)] = &[
    ("images/c++.png", "C++"),
    ("images/python.png", "Python"),
    ("images/java.png", "Java"),
];
