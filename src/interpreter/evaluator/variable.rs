use std::io::{BufRead, Write};

use crate::{
    error::EvalError,
    interpreter::evaluator::{
        core::{Context, EvalResult},
        utils::lenient_bool,
    },
};

impl<R: BufRead, W: Write> Context<R, W> {
    /// Returns the value of a variable, asking for it on first use.
    ///
    /// A known variable is answered from the environment. An unknown one is
    /// prompted for with `Введите значение <name>:`, one line is read from the
    /// input, and the answer is stored and returned. Only `true` (in any ASCII
    /// case) reads as true; every other answer is false.
    ///
    /// # Errors
    /// - [`EvalError::InputClosed`] if the input has no more lines.
    /// - [`EvalError::Io`] if writing the prompt or reading the answer fails.
    pub(in crate::interpreter::evaluator) fn eval_variable(&mut self,
                                                           name: &str)
                                                           -> EvalResult<bool> {
        if let Some(&value) = self.variables.get(name) {
            return Ok(value);
        }

        let value = self.prompt_for(name)?;
        tracing::debug!(name, value, "read variable from input");
        self.variables.insert(name.to_string(), value);

        Ok(value)
    }

    fn prompt_for(&mut self, name: &str) -> EvalResult<bool> {
        writeln!(self.output, "Введите значение {name}:")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EvalError::InputClosed { name: name.to_string() });
        }

        Ok(lenient_bool(line.trim_end_matches(['\r', '\n'])))
    }
}
