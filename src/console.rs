use std::io::{BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("input stream closed")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// Обертка над потоками ввода/вывода; контроллеры работают через нее,
// поэтому в тестах их можно гонять на буферах в памяти
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    /// Читает строки, пока одна из них не распарсится как целое число.
    /// Отрицательные числа проходят: их отсеивает уже доменная проверка.
    pub fn read_int(&mut self) -> Result<i64, ConsoleError> {
        self.read_parsed()
    }

    pub fn prompt_int(&mut self, prompt: &str) -> Result<i64, ConsoleError> {
        self.write_line(prompt)?;
        self.read_int()
    }

    /// Как prompt_int, но принимает только неотрицательные значения
    /// (размеры зала)
    pub fn prompt_usize(&mut self, prompt: &str) -> Result<usize, ConsoleError> {
        self.write_line(prompt)?;
        self.read_parsed()
    }

    fn read_parsed<T: FromStr>(&mut self) -> Result<T, ConsoleError> {
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ConsoleError::InputClosed);
            }

            match line.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => self.write_line("Please enter a number!")?,
            }
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
