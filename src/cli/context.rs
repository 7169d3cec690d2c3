//! CLI context - bundles settings and flags.

use std::io::{self, Write};

use super::{CliFlags, Command, help, quiet};
use crate::error::{Error, Result};
use crate::pass::charset::{self, CharClass};
use crate::pass::{self, output::Format, range::RangePolicy};
use crate::settings::Settings;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self> {
        let flags = super::parse(args)?;
        Ok(Self {
            settings: Settings::default(),
            flags,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        quiet::set(self.flags.quiet);

        if self.handle_info_flags()? {
            return Ok(());
        }

        match self.flags.command.clone().unwrap_or_default() {
            Command::Gen => {
                self.apply_flags();
                self.generate_output()
            }
            Command::Charset => Ok(help::print_charsets(&mut io::stdout().lock())?),
            Command::Help(topic) => help::print_topic(&mut io::stdout().lock(), topic.as_deref()),
        }
    }

    /// Returns true when an info flag was handled and nothing else should run.
    fn handle_info_flags(&self) -> Result<bool> {
        let mut out = io::stdout().lock();
        if self.flags.help {
            let topic = match &self.flags.command {
                None => None,
                Some(Command::Gen) => Some("gen"),
                Some(Command::Charset) => Some("charset"),
                Some(Command::Help(_)) => Some("help"),
            };
            help::print_topic(&mut out, topic)?;
            return Ok(true);
        }
        if self.flags.version {
            writeln!(out, "passgen {}", env!("CARGO_PKG_VERSION"))?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        let flags = &self.flags;
        let settings = &mut self.settings;

        if let Some(len) = flags.length {
            settings.pass_length = len;
        }
        if let Some(num) = flags.number {
            settings.number_of_passwords = num;
        }

        let toggles = [
            (CharClass::Lower, flags.lower),
            (CharClass::Upper, flags.upper),
            (CharClass::Digit, flags.digits),
            (CharClass::Symbol, flags.symbols),
        ];
        for (class, on) in toggles {
            if on {
                settings.select(class);
            }
        }
        settings.all = flags.all;
        settings.no_similar = flags.no_similar;
        settings.custom_range = flags.custom.clone();

        if flags.strict {
            settings.range_policy = RangePolicy::Strict;
        }
        if flags.json {
            settings.format = Format::Json;
        }
    }

    /// Build the alphabet, then stream passwords to stdout.
    pub fn generate_output(&self) -> Result<()> {
        let alphabet = charset::build(&self.settings)?;
        if alphabet.is_empty() {
            return Err(Error::EmptyCharset);
        }

        pass::generate_batch(&self.settings, &alphabet, io::stdout().lock())
    }
}
