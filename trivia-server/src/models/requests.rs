//! Request body shapes
//!
//! Bodies arrive as loose JSON and are validated here into typed requests
//! before dispatch. Only presence and JSON type are checked.

use serde_json::{Map, Value};

use super::{NewQuestion, ValidationError};

/// Body of `POST /questions`: a search or a new question.
///
/// The presence of `search_term` selects `Search`, whatever else the
/// body contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionsRequest {
    Search { search_term: String },
    Create(NewQuestion),
}

impl QuestionsRequest {
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let Value::Object(body) = value else {
            return Err(ValidationError::NotAnObject);
        };

        if let Some(term) = body.get("search_term") {
            let search_term = term
                .as_str()
                .ok_or(ValidationError::InvalidType {
                    field: "search_term",
                    expected: "a string",
                })?
                .to_owned();
            return Ok(Self::Search { search_term });
        }

        Ok(Self::Create(NewQuestion {
            question: string_field(&body, "question")?,
            answer: string_field(&body, "answer")?,
            category: int_field(&body, "category")?,
            difficulty: int_field(&body, "difficulty")?,
        }))
    }
}

/// Body of `POST /quiz`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub category: i32,
    pub previous_questions: Vec<i32>,
}

impl QuizRequest {
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let Value::Object(body) = value else {
            return Err(ValidationError::NotAnObject);
        };

        let category = int_field(&body, "category")?;

        let previous_questions = match body.get("previous_questions") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(ids)) => ids
                .iter()
                .map(|id| {
                    as_i32(id).ok_or(ValidationError::InvalidType {
                        field: "previous_questions",
                        expected: "an array of integers",
                    })
                })
                .collect::<Result<_, _>>()?,
            Some(_) => {
                return Err(ValidationError::InvalidType {
                    field: "previous_questions",
                    expected: "an array of integers",
                })
            }
        };

        Ok(Self {
            category,
            previous_questions,
        })
    }
}

fn string_field(body: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    match body.get(field) {
        None => Err(ValidationError::MissingField { field }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::InvalidType {
            field,
            expected: "a string",
        }),
    }
}

fn int_field(body: &Map<String, Value>, field: &'static str) -> Result<i32, ValidationError> {
    let value = body.get(field).ok_or(ValidationError::MissingField { field })?;
    as_i32(value).ok_or(ValidationError::InvalidType {
        field,
        expected: "an integer",
    })
}

fn as_i32(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|n| i32::try_from(n).ok())
}
