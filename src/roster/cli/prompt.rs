use roster::error::Result;
use std::io::{BufRead, Write};

/// Line-oriented prompting over any reader/writer pair.
///
/// Every read returns `Ok(None)` once input is exhausted so callers can wind the
/// session down instead of spinning on EOF.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` (no newline) and read one line, without its line ending.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Read a number in `min..=max`, re-prompting until one is given.
    pub fn read_choice(&mut self, prompt: &str, min: u32, max: u32) -> Result<Option<u32>> {
        let mut prompt = prompt.to_string();
        loop {
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<u32>() {
                Ok(choice) if (min..=max).contains(&choice) => return Ok(Some(choice)),
                Ok(_) => prompt = format!("Please enter a number between {}-{}: ", min, max),
                Err(_) => prompt = "Please enter a valid number: ".to_string(),
            }
        }
    }

    /// Ask a yes/no question. Anything but `y`/`yes` (any case) is a no.
    pub fn confirm(&mut self, prompt: &str) -> Result<Option<bool>> {
        let answer = self.read_line(prompt)?;
        Ok(answer.map(|a| matches!(a.trim().to_lowercase().as_str(), "y" | "yes")))
    }
}
