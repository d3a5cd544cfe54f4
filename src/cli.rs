//! Command-line argument parsing.

use clap::{Parser, Subcommand};

use crate::params::RenderConfig;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "cybernode")]
#[command(about = "Animated cyber portfolio background with ambient drone", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the background window (default). M toggles the drone, Esc quits
    Run(RunArgs),

    /// Print the page outline
    Sections,

    /// Send a message through the contact form
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    /// Window width (logical pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = RenderConfig::default().window_width)]
    pub width: u32,

    /// Window height (logical pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = RenderConfig::default().window_height)]
    pub height: u32,

    /// Seed for the particle layouts (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for RunArgs {
    fn default() -> Self {
        let config = RenderConfig::default();
        Self {
            width: config.window_width,
            height: config.window_height,
            seed: None,
        }
    }
}

impl Args {
    /// Subcommand to run; bare invocation opens the window
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Run(RunArgs::default()))
    }
}

impl RunArgs {
    /// Render configuration with the requested window size
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width.max(1),
            window_height: self.height.max(1),
            ..RenderConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_runs_window() {
        let args = Args::try_parse_from(["cybernode"]).unwrap();
        assert_eq!(args.command(), Command::Run(RunArgs::default()));
    }

    #[test]
    fn test_run_options() {
        let args = Args::try_parse_from([
            "cybernode", "run", "--width", "800", "--height", "600", "--seed", "42",
        ])
        .unwrap();

        let Command::Run(run) = args.command() else {
            panic!("expected run");
        };
        assert_eq!(run.seed, Some(42));
        let config = run.render_config();
        assert_eq!((config.window_width, config.window_height), (800, 600));
    }

    #[test]
    fn test_contact_requires_all_fields() {
        assert!(Args::try_parse_from(["cybernode", "contact", "--name", "Ada"]).is_err());

        let args = Args::try_parse_from([
            "cybernode", "contact", "--name", "Ada", "--email", "ada@example.com", "--message",
            "Hi",
        ])
        .unwrap();
        assert!(matches!(args.command(), Command::Contact { ref name, .. } if name == "Ada"));
    }

    #[test]
    fn test_sections() {
        let args = Args::try_parse_from(["cybernode", "sections"]).unwrap();
        assert_eq!(args.command(), Command::Sections);
    }
}
