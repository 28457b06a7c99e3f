use crate::error::Result;
use crate::interfaces::form::FormState;
use std::io::{BufRead, Write};

/// Drives the calculator form over a line-based console session.
///
/// Commands: `amount <value>`, `rate <value>`, `term <value>` set a field,
/// `calc` submits, `lang` toggles the language, `quit` ends the session.
/// Generic over reader and writer so tests can script a session.
pub fn run_form<R: BufRead, W: Write>(input: R, mut output: W) -> Result<()> {
    let mut form = FormState::new();
    render(&form, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        let (command, value) = match line.split_once(char::is_whitespace) {
            Some((c, v)) => (c, v.trim()),
            None => (line, ""),
        };

        match command {
            "amount" => form.set_amount(value),
            "rate" => form.set_interest_rate(value),
            "term" => form.set_term(value),
            "lang" => form.toggle_language(),
            "calc" => form.submit()?,
            "quit" | "exit" => break,
            "" => continue,
            other => {
                writeln!(output, "? unknown command: {other}")?;
                continue;
            }
        }
        render(&form, &mut output)?;
    }
    Ok(())
}

fn render<W: Write>(form: &FormState, output: &mut W) -> Result<()> {
    let labels = form.labels();
    writeln!(output, "== {} ==", labels.title)?;
    writeln!(output, "{} {}", labels.amount, form.amount)?;
    writeln!(output, "{} {}", labels.interest_rate, form.interest_rate)?;
    writeln!(output, "{} {}", labels.term, form.term)?;
    for (_, message) in form.error_messages() {
        writeln!(output, "! {message}")?;
    }
    if let Some(payment) = &form.monthly_payment {
        writeln!(output, "{}{}", labels.monthly_payment, payment)?;
    }
    writeln!(output, "[{}] ({})", labels.calculate, labels.toggle)?;
    Ok(())
}
