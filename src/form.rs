//! Interactive prompts for the inputs not given on the command line.

use std::io::{self, BufRead, Write};

use skysense_predict::ConfidenceLevel;

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

/// Ask for a city until a non-blank answer is given.
pub fn prompt_city<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    loop {
        write!(output, "Enter city name: ")?;
        output.flush()?;
        let city = read_line(input)?;
        if !city.is_empty() {
            return Ok(city);
        }
    }
}

/// Ask for a confidence level by menu number or label.
pub fn prompt_confidence<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<ConfidenceLevel> {
    writeln!(output, "How confident are you that it will rain today?")?;
    for (i, level) in ConfidenceLevel::ALL.iter().enumerate() {
        writeln!(output, "  {}. {}", i + 1, level)?;
    }

    loop {
        write!(output, "Select your confidence [1-{}]: ", ConfidenceLevel::ALL.len())?;
        output.flush()?;
        let answer = read_line(input)?;

        if let Some(level) = parse_choice(&answer) {
            return Ok(level);
        }
        writeln!(output, "Please pick a number from the list.")?;
    }
}

fn parse_choice(answer: &str) -> Option<ConfidenceLevel> {
    match answer.parse::<usize>() {
        Ok(n) if (1..=ConfidenceLevel::ALL.len()).contains(&n) => Some(ConfidenceLevel::ALL[n - 1]),
        Ok(_) => None,
        Err(_) => answer.parse().ok(),
    }
}
