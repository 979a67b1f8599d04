use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Styled terminal output
    #[default]
    Term,
    /// Structured JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "histprop",
    bin_name = "histprop",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Browse and filter a historic property survey", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dataset to load (overrides configuration)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data: Option<String>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Term, help_heading = "Options")]
    pub output: OutputMode,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Browse,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Browse => "Browse Commands:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "search" | "view" => Some(CommandGroup::Browse),
            "options" | "stats" | "doctor" => Some(CommandGroup::Data),
            "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Browse, CommandGroup::Data, CommandGroup::Misc]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("histprop {version}\n"));
    output.push_str("Browse and filter a historic property survey\n");
    output.push('\n');
    output.push_str("Usage: histprop [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --data <PATH>      Dataset to load (overrides configuration)\n");
    output.push_str("  -v, --verbose          Raise log verbosity (repeatable)\n");
    output.push_str("      --output <MODE>    Output format [term, json]\n");
    output.push_str("      --no-color         Disable colored output\n");
    output.push_str("  -h, --help             Print help\n");
    output.push_str("  -V, --version          Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a specific subcommand using clap's built-in rendering
pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::Browse(c)) => match c {
            BrowseCommands::List { .. } => "list",
            BrowseCommands::Search { .. } => "search",
            BrowseCommands::View { .. } => "view",
        },
        Some(Commands::Data(c)) => match c {
            DataCommands::Options { .. } => "options",
            DataCommands::Stats => "stats",
            DataCommands::Doctor => "doctor",
        },
        Some(Commands::Misc(c)) => match c {
            MiscCommands::Config { .. } => "config",
            MiscCommands::Help { .. } => "help",
        },
        None => {
            print_grouped_help();
            return;
        }
    };

    print_help_for_command(name);
}

/// Prints help for a command by name
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Browse(BrowseCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum BrowseCommands {
    /// List properties, optionally filtered
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Free text matched against address, historic name, style,
        /// architect/builder and the descriptions
        #[arg(short, long)]
        search: Option<String>,

        /// Street name contained in the address
        #[arg(long)]
        street: Option<String>,

        /// Architectural style
        #[arg(long)]
        style: Option<String>,

        /// Condition (e.g. good, fair)
        #[arg(long)]
        condition: Option<String>,

        /// Construction date fragment (case-sensitive)
        #[arg(long, value_name = "DATE")]
        built: Option<String>,

        /// Show the expanded detail view for every match
        #[arg(long)]
        details: bool,
    },

    /// Free-text search
    #[command(display_order = 2)]
    Search {
        /// Search words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// Show full details of one or more properties
    #[command(alias = "v", display_order = 3)]
    View {
        /// Filenames of the properties (e.g. Main_St_123)
        #[arg(required = true, num_args = 1..)]
        filenames: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Show the values available to each filter
    #[command(display_order = 10)]
    Options {
        /// A single field (street, style, condition, date, or any property field)
        field: Option<String>,
    },

    /// Show dataset statistics
    #[command(display_order = 11)]
    Stats,

    /// Check the dataset for inconsistencies
    #[command(display_order = 12)]
    Doctor,
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Show the effective configuration
    #[command(display_order = 20)]
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,
    },

    /// Print help for histprop or a subcommand
    #[command(display_order = 21)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
