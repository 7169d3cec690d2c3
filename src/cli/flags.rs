/// Subcommand selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    #[default]
    Gen,
    Charset,
    Help(Option<String>),
}

impl Command {
    pub const NAMES: [&'static str; 3] = ["gen", "charset", "help"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "gen" => Some(Command::Gen),
            "charset" => Some(Command::Charset),
            "help" => Some(Command::Help(None)),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct CliFlags {
    /// `None` when no subcommand was named; generation is implied.
    pub command: Option<Command>,
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
    pub all: bool,
    pub no_similar: bool,
    pub json: bool,
    pub strict: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub custom: Option<String>,
}
