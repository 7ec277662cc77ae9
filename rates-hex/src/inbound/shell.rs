//! Interactive terminal shell.
//!
//! Two currency selectors and a convert action. Each round asks for the
//! source code, the target code and then an amount. Blank selector input
//! keeps the previous choice.

use std::io::{self, BufRead, Write};

use rates_types::{ConversionRequest, CurrencyCode};

use crate::service::{ConversionService, parse_amount};

const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

/// Prompt loop over any line reader and writer.
pub struct Shell<'a, R: BufRead, W: Write> {
    service: &'a ConversionService,
    input: R,
    output: W,
    from: Option<CurrencyCode>,
    to: Option<CurrencyCode>,
}

/// What one line of input means to the shell.
enum Line {
    Text(String),
    Quit,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(service: &'a ConversionService, input: R, output: W) -> Self {
        let (from, to) = service.default_pair();
        Self {
            service,
            input,
            output,
            from,
            to,
        }
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_header()?;

        loop {
            let label = selector_prompt("From", self.from.as_ref());
            let Line::Text(from) = self.prompt(&label)? else {
                break;
            };
            let label = selector_prompt("To", self.to.as_ref());
            let Line::Text(to) = self.prompt(&label)? else {
                break;
            };

            let Some(from) = pick(from, self.from.as_ref()) else {
                writeln!(self.output, "Error: please select a source currency")?;
                continue;
            };
            let Some(to) = pick(to, self.to.as_ref()) else {
                writeln!(self.output, "Error: please select a target currency")?;
                continue;
            };

            let (from, to) = match self.service.select_pair(&from, &to) {
                Ok(pair) => pair,
                Err(e) => {
                    writeln!(self.output, "Error: {}", e)?;
                    continue;
                }
            };
            self.from = Some(from.clone());
            self.to = Some(to.clone());

            let Line::Text(amount) = self.prompt("Enter amount: ")? else {
                break;
            };
            let amount = match parse_amount(&amount) {
                Ok(amount) => amount,
                Err(e) => {
                    writeln!(self.output, "Error: {}", e)?;
                    continue;
                }
            };

            match self.service.convert(ConversionRequest { from, to, amount }) {
                Ok(conversion) => writeln!(self.output, "{}", conversion)?,
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }

        writeln!(self.output)?;
        self.output.flush()
    }

    fn print_header(&mut self) -> io::Result<()> {
        let service = self.service;
        let codes: Vec<&str> = service.table().codes().map(|c| c.as_str()).collect();
        writeln!(self.output, "Currency Converter")?;
        writeln!(self.output, "Currencies: {}", codes.join(", "))?;
        writeln!(self.output, "Type 'quit' to exit.")
    }

    fn prompt(&mut self, label: &str) -> io::Result<Line> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD and fail validation downstream.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(Line::Quit);
        }
        let decoded = String::from_utf8_lossy(&buf);
        let text = decoded.trim();
        if QUIT_WORDS.iter().any(|w| text.eq_ignore_ascii_case(w)) {
            return Ok(Line::Quit);
        }
        Ok(Line::Text(text.to_string()))
    }
}

fn selector_prompt(label: &str, current: Option<&CurrencyCode>) -> String {
    match current {
        Some(code) => format!("{} [{}]: ", label, code),
        None => format!("{}: ", label),
    }
}

/// Blank input falls back to the current selection.
fn pick(text: String, current: Option<&CurrencyCode>) -> Option<String> {
    if text.is_empty() {
        current.map(|c| c.to_string())
    } else {
        Some(text)
    }
}
