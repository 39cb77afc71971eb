use std::io::{self, BufRead, Read, Write};

use clap::Parser;
use zeroize::Zeroizing;

use crate::params::RawParameters;

// Option values stay raw text; `params::resolve` interprets them so every
// failure gets its specific message.
#[derive(Parser, Debug)]
#[command(name = "seedtool", version)]
#[command(about = "Converts cryptographic seeds between various forms.")]
pub struct Cli {
    /// The input format (default: random)
    #[arg(
        short,
        long = "in",
        value_name = "random|hex|bc32|bits|cards|dice|base6|base10|ints|bip39|slip39|ur"
    )]
    pub input: Option<String>,

    /// The output format (default: hex)
    #[arg(
        short,
        long = "out",
        value_name = "hex|bc32|bits|cards|dice|base6|base10|ints|bip39|slip39"
    )]
    pub output: Option<String>,

    /// The number of output units (default: 16)
    #[arg(short, long, value_name = "1-64", allow_negative_numbers = true)]
    pub count: Option<String>,

    /// Encode output as a Uniform Resource (UR). If necessary the payload is
    /// split into fragments of at most MAX_PART_LENGTH bytes (default: 2500),
    /// one UR part each
    #[arg(
        short,
        long,
        value_name = "MAX_PART_LENGTH",
        num_args = 0..=1,
        require_equals = true
    )]
    pub ur: Option<Option<String>>,

    /// The lowest int returned (default: 1)
    #[arg(
        short = 'l',
        long,
        value_name = "0-254",
        allow_negative_numbers = true,
        help_heading = "ints Input and Output Options"
    )]
    pub low: Option<String>,

    /// The highest int returned (default: 9). Requires low < high
    #[arg(
        long,
        value_name = "1-255",
        allow_negative_numbers = true,
        help_heading = "ints Input and Output Options"
    )]
    pub high: Option<String>,

    /// The number of groups that must meet their threshold (default: 1).
    /// Must be <= the number of group specifications
    #[arg(
        short = 't',
        long,
        value_name = "1-16",
        allow_negative_numbers = true,
        help_heading = "SLIP39 Output Options"
    )]
    pub group_threshold: Option<String>,

    /// The group specification (default: 1-of-1). May appear more than once
    #[arg(
        short,
        long = "group",
        value_name = "M-of-N",
        help_heading = "SLIP39 Output Options"
    )]
    pub groups: Vec<String>,

    /// Use a deterministic random number generator with the given seed
    #[arg(
        short,
        long,
        value_name = "SEED",
        help_heading = "Deterministic Random Numbers"
    )]
    pub deterministic: Option<String>,

    /// The input; read from stdin, one record per line, when omitted
    #[arg(value_name = "INPUT")]
    pub args: Vec<String>,
}

impl From<Cli> for RawParameters {
    fn from(cli: Cli) -> Self {
        Self {
            count: cli.count,
            input_format: cli.input,
            output_format: cli.output,
            ints_low: cli.low,
            ints_high: cli.high,
            groups: cli.groups,
            groups_threshold: cli.group_threshold,
            deterministic: cli.deterministic.map(Zeroizing::new),
            ur_output: cli.ur.is_some(),
            max_part_length: cli.ur.flatten(),
            args: cli.args,
        }
    }
}

/// Stdin wrapper that writes a prompt just before the first read
///
/// Validation that fails before input is needed never shows the prompt.
pub struct PromptOnRead<R, W> {
    inner: R,
    prompt: Option<(W, &'static str)>,
}

impl<R: BufRead, W: Write> PromptOnRead<R, W> {
    /// Wraps `inner`; `message` is written to `out` once, if given
    pub fn new(inner: R, out: W, message: Option<&'static str>) -> Self {
        Self {
            inner,
            prompt: message.map(|message| (out, message)),
        }
    }

    fn show_prompt(&mut self) -> io::Result<()> {
        if let Some((mut out, message)) = self.prompt.take() {
            writeln!(out, "{message}")?;
            out.flush()?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Read for PromptOnRead<R, W> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.show_prompt()?;
        self.inner.read(buf)
    }
}

impl<R: BufRead, W: Write> BufRead for PromptOnRead<R, W> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.show_prompt()?;
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt);
    }
}
