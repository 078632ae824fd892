use anyhow::{anyhow, bail, Context, Result};
use std::io::{BufRead, Write};

/// Prompts for the number of rows and columns and reads them from `input`.
/// The values are not validated here, [crate::grid::dimensions::Dimensions::new] does that.
pub fn read_dimensions(input: &mut impl BufRead, output: &mut impl Write) -> Result<(i64, i64)> {
    let rows = prompt_integer(input, output, "Enter number of rows: ")?;
    let columns = prompt_integer(input, output, "Enter number of columns: ")?;
    Ok((rows, columns))
}

fn prompt_integer(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<i64> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_context(|| anyhow!("Unable to read answer to `{}`", prompt.trim()))?;
    if read == 0 {
        bail!("Input ended before answering `{}`", prompt.trim());
    }

    let answer = line.trim();
    answer
        .parse()
        .with_context(|| anyhow!("`{}` is not a whole number", answer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_then_columns() {
        let mut input = "3\n 5 \n".as_bytes();
        let mut output = Vec::new();
        assert_eq!(read_dimensions(&mut input, &mut output).unwrap(), (3, 5));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Enter number of rows: Enter number of columns: "
        );
    }

    #[test]
    fn passes_negative_numbers_through() {
        let mut input = "-2\n4\n".as_bytes();
        assert_eq!(read_dimensions(&mut input, &mut Vec::new()).unwrap(), (-2, 4));
    }

    #[test]
    fn rejects_garbage_and_eof() {
        assert!(read_dimensions(&mut "three\n4\n".as_bytes(), &mut Vec::new()).is_err());
        assert!(read_dimensions(&mut "3\n".as_bytes(), &mut Vec::new()).is_err());
    }
}
