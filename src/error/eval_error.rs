use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// A literal's text is neither `true` nor `false`.
    InvalidBoolean {
        /// The literal text.
        text:     String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// The tree has a shape the parser never produces, such as an assignment
    /// whose left side is not a variable.
    UnknownExpression {
        /// Byte offset of the node.
        position: usize,
    },
    /// Input ended while waiting for a variable's value.
    InputClosed {
        /// The variable being resolved.
        name: String,
    },
    /// Reading input or writing output failed.
    Io {
        /// Description of the underlying failure.
        details: String,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoolean { text, position } => {
                write!(f, "Значение '{text}' не является логическим в позиции {position}")
            },
            Self::UnknownExpression { position } => {
                write!(f, "Неизвестное выражение в позиции {position}")
            },
            Self::InputClosed { name } => {
                write!(f, "Ввод завершён до получения значения {name}")
            },
            Self::Io { details } => write!(f, "Ошибка ввода-вывода: {details}"),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<std::io::Error> for EvalError {
    fn from(error: std::io::Error) -> Self {
        Self::Io { details: error.to_string() }
    }
}
