use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use ccswap::{
    commands,
    paths::Paths,
    providers::Provider,
    ui::{ColorMode, Ui},
};

#[derive(Parser)]
#[command(name = "ccswap")]
#[command(about = "Claude Code settings profile manager - swap the live settings.json between named profiles")]
#[command(version)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// When to use colors: always, auto, never
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all available profiles
    List,

    /// Show the active profile and live settings status
    Current,

    /// Create a new profile from the live settings
    Create {
        /// Name of the profile to create
        name: String,

        /// Rewrite the settings for a provider and switch to the new
        /// profile (anthropic, deepseek, kimi, zhipu)
        #[arg(long, value_name = "PROVIDER")]
        template: Option<Provider>,

        /// Auth token injected by the template (requires --template)
        #[arg(long, value_name = "TOKEN")]
        secret: Option<String>,
    },

    /// Switch to a profile (activate it)
    Use {
        /// Name of the profile to activate
        name: String,
    },

    /// Delete a profile
    Delete {
        /// Name of the profile to delete
        name: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Rename a profile
    Rename {
        /// Current profile name
        old: String,

        /// New profile name
        new: String,
    },

    /// Run diagnostics on the ccswap setup
    Doctor,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ui = Ui::new(cli.color, cli.no_color);

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "ccswap", &mut std::io::stdout());
        return Ok(());
    }

    let paths = Paths::new()?;

    match cli.command {
        Commands::List => commands::list(&paths, &ui),
        Commands::Current => commands::current(&paths, &ui),
        Commands::Create {
            name,
            template,
            secret,
        } => commands::create(&paths, &name, template, secret, &ui),
        Commands::Use { name } => commands::use_profile(&paths, &name, &ui),
        Commands::Delete { name, force } => commands::delete(&paths, &name, force, &ui),
        Commands::Rename { old, new } => commands::rename(&paths, &old, &new, &ui),
        Commands::Doctor => commands::doctor(&paths, &ui),
        Commands::Completions { .. } => unreachable!("handled above"),
    }
}
