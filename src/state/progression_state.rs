// ============================================================================
// PROGRESSION STATE - Máquina de estados de un intento
// ============================================================================
// Loading → AwaitingAnswer → ShowingEvaluation → AwaitingAnswer → … → Finished
//
// Estado puro: no hace red ni DOM. El QuizViewModel pide al backend y
// aplica aquí el resultado solo si la petición tuvo éxito, así un fallo
// nunca deja la máquina a medio avanzar.
// ============================================================================

use crate::error::{ClientError, ClientResult, SELECT_AN_ANSWER};
use crate::models::{AnswerRecord, AnswerResult, CurrentQuestion, NextStep};

/// Modo del botón de acción
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionMode {
    Submit,
    Next,
    ViewResults,
}

impl ActionMode {
    pub fn label(&self) -> &'static str {
        match self {
            ActionMode::Submit => "Submit",
            ActionMode::Next => "Next",
            ActionMode::ViewResults => "View Results",
        }
    }
}

/// Marca visual de cada opción
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Idle,
    Selected,
    Correct,
    Incorrect,
}

impl OptionMark {
    pub fn css_class(&self) -> &'static str {
        match self {
            OptionMark::Idle => "option",
            OptionMark::Selected => "option selected",
            OptionMark::Correct => "option correct",
            OptionMark::Incorrect => "option incorrect",
        }
    }
}

/// Corrección de la pregunta actual
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// `None` si la respuesta guardada ya no coincide con ninguna opción
    pub chosen_index: Option<usize>,
    /// `None` si la respuesta correcta no coincide con ninguna opción mostrada
    pub correct_index: Option<usize>,
    pub passed: bool,
}

/// Respuesta lista para enviar al backend
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub question_id: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    AwaitingAnswer {
        question: CurrentQuestion,
        selected: Option<usize>,
    },
    ShowingEvaluation {
        question: CurrentQuestion,
        evaluation: Evaluation,
    },
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizProgress {
    phase: Phase,
    /// Posición 0-based de la pregunta actual
    position: usize,
    /// Número de preguntas del quiz (0 = desconocido)
    total: usize,
    busy: bool,
}

impl QuizProgress {
    pub fn new(total: usize) -> Self {
        Self {
            phase: Phase::Loading,
            position: 0,
            total,
            busy: false,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    pub fn question(&self) -> Option<&CurrentQuestion> {
        match &self.phase {
            Phase::AwaitingAnswer { question, .. } | Phase::ShowingEvaluation { question, .. } => {
                Some(question)
            }
            _ => None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        match &self.phase {
            Phase::AwaitingAnswer { selected, .. } => *selected,
            Phase::ShowingEvaluation { evaluation, .. } => evaluation.chosen_index,
            _ => None,
        }
    }

    pub fn evaluation(&self) -> Option<&Evaluation> {
        match &self.phase {
            Phase::ShowingEvaluation { evaluation, .. } => Some(evaluation),
            _ => None,
        }
    }

    /// Última pregunta según el total conocido
    pub fn is_last_question(&self) -> bool {
        self.total > 0 && self.position + 1 >= self.total
    }

    /// Contador "actual/total" en base 1
    pub fn counter(&self) -> String {
        let current = self.position + 1;
        if self.total == 0 {
            current.to_string()
        } else {
            format!("{}/{}", current.min(self.total), self.total)
        }
    }

    pub fn action_mode(&self) -> ActionMode {
        match &self.phase {
            Phase::Loading | Phase::AwaitingAnswer { .. } => ActionMode::Submit,
            Phase::ShowingEvaluation { .. } if self.is_last_question() => ActionMode::ViewResults,
            Phase::ShowingEvaluation { .. } => ActionMode::Next,
            Phase::Finished => ActionMode::ViewResults,
        }
    }

    /// Marcas de cada opción para la vista
    pub fn option_marks(&self) -> Vec<OptionMark> {
        match &self.phase {
            Phase::AwaitingAnswer { question, selected } => (0..question.options.len())
                .map(|i| {
                    if Some(i) == *selected {
                        OptionMark::Selected
                    } else {
                        OptionMark::Idle
                    }
                })
                .collect(),
            Phase::ShowingEvaluation {
                question,
                evaluation,
            } => (0..question.options.len())
                .map(|i| {
                    if Some(i) == evaluation.correct_index {
                        OptionMark::Correct
                    } else if Some(i) == evaluation.chosen_index {
                        OptionMark::Incorrect
                    } else {
                        OptionMark::Idle
                    }
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// Primera pregunta del intento (o la pregunta en curso al recargar)
    pub fn present(&mut self, question: CurrentQuestion, position: usize) {
        self.position = position;
        self.phase = Phase::AwaitingAnswer {
            question,
            selected: None,
        };
    }

    /// Selección exclusiva: elegir otra opción reemplaza la anterior,
    /// volver a pulsar la seleccionada la deselecciona
    pub fn select(&mut self, index: usize) -> ClientResult<()> {
        if self.busy {
            return Err(ClientError::InvalidTransition("waiting for the server"));
        }
        match &mut self.phase {
            Phase::AwaitingAnswer { question, selected } => {
                if index >= question.options.len() {
                    return Err(ClientError::validation(format!(
                        "Option {} does not exist",
                        index + 1
                    )));
                }
                *selected = if *selected == Some(index) {
                    None
                } else {
                    Some(index)
                };
                Ok(())
            }
            Phase::ShowingEvaluation { .. } => Err(ClientError::InvalidTransition(
                "showing the evaluation",
            )),
            Phase::Loading => Err(ClientError::InvalidTransition("loading")),
            Phase::Finished => Err(ClientError::InvalidTransition("finished")),
        }
    }

    /// Respuesta a enviar; sin selección no hay envío
    pub fn submission(&self) -> ClientResult<Submission> {
        if self.busy {
            return Err(ClientError::InvalidTransition("waiting for the server"));
        }
        match &self.phase {
            Phase::AwaitingAnswer {
                question,
                selected: Some(index),
            } => Ok(Submission {
                question_id: question.question_id.clone(),
                answer: question.options[*index].clone(),
            }),
            Phase::AwaitingAnswer { selected: None, .. } => {
                Err(ClientError::validation(SELECT_AN_ANSWER))
            }
            Phase::Loading => Err(ClientError::InvalidTransition("loading")),
            Phase::ShowingEvaluation { .. } => Err(ClientError::InvalidTransition(
                "showing the evaluation",
            )),
            Phase::Finished => Err(ClientError::InvalidTransition("finished")),
        }
    }

    /// AwaitingAnswer → ShowingEvaluation con la corrección del backend
    pub fn apply_grade(&mut self, result: &AnswerResult) -> ClientResult<Evaluation> {
        let (question, chosen_index) = match &self.phase {
            Phase::AwaitingAnswer {
                question,
                selected: Some(index),
            } => (question.clone(), *index),
            _ => return Err(ClientError::InvalidTransition("not awaiting an answer")),
        };

        let chosen = &question.options[chosen_index];
        let evaluation = Evaluation {
            chosen_index: Some(chosen_index),
            correct_index: question.option_index(&result.correct_answers),
            passed: result.is_pass(chosen),
        };
        self.phase = Phase::ShowingEvaluation {
            question,
            evaluation: evaluation.clone(),
        };
        Ok(evaluation)
    }

    /// ShowingEvaluation → AwaitingAnswer (siguiente) o Finished
    pub fn advance(&mut self, step: NextStep) -> ClientResult<()> {
        if !matches!(self.phase, Phase::ShowingEvaluation { .. }) {
            return Err(ClientError::InvalidTransition("not showing an evaluation"));
        }
        match step {
            NextStep::Question(question) => {
                self.position += 1;
                self.phase = Phase::AwaitingAnswer {
                    question,
                    selected: None,
                };
            }
            NextStep::Finished => self.phase = Phase::Finished,
        }
        Ok(())
    }

    /// "View Results" tras la última corrección
    pub fn finish(&mut self) -> ClientResult<()> {
        match self.action_mode() {
            ActionMode::ViewResults => {
                self.phase = Phase::Finished;
                Ok(())
            }
            _ => Err(ClientError::InvalidTransition("questions remain")),
        }
    }

    /// Pregunta ya respondida al recargar: se muestra su corrección guardada
    /// en vez de volver a pedir respuesta
    pub fn restore(
        &mut self,
        question: CurrentQuestion,
        position: usize,
        record: &AnswerRecord,
    ) -> Evaluation {
        let evaluation = Evaluation {
            chosen_index: question.option_index(&record.user_answer),
            correct_index: record
                .correct_answer
                .as_deref()
                .and_then(|correct| question.option_index(correct)),
            passed: record.is_pass(),
        };
        self.position = position;
        self.phase = Phase::ShowingEvaluation {
            question,
            evaluation: evaluation.clone(),
        };
        evaluation
    }
}
