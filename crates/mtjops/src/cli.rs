//! Clap derive structures for the `mtjops` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// mtjops -- operations CLI for MTJ Foundation staff
#[derive(Debug, Parser)]
#[command(
    name = "mtjops",
    version,
    about = "Manage MTJ Foundation events, passes, and donations from the command line",
    long_about = "Operations CLI for MTJ Foundation staff.\n\n\
        Covers event administration, pass generation and gate check-in,\n\
        donor records, and donation-box placement.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "MTJOPS_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend URL (overrides profile)
    #[arg(long, short = 's', env = "MTJOPS_SERVER", global = true)]
    pub server: Option<String>,

    /// API token
    #[arg(long, env = "MTJOPS_TOKEN", global = true, hide_env = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "MTJOPS_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "MTJOPS_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "MTJOPS_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage foundation events
    #[command(alias = "ev", alias = "e")]
    Events(EventsArgs),

    /// Manage event passes
    #[command(alias = "pa")]
    Passes(PassesArgs),

    /// Run the check-in gate
    #[command(alias = "g")]
    Gate(GateArgs),

    /// Manage donor records
    #[command(alias = "don")]
    Donors(DonorsArgs),

    /// Manage donation boxes
    #[command(alias = "b")]
    Boxes(BoxesArgs),

    /// Browse the region/city/route cascade
    Geo(GeoArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  EVENTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct EventsArgs {
    #[command(subcommand)]
    pub command: EventsCommand,
}

#[derive(Debug, Subcommand)]
pub enum EventsCommand {
    /// List events
    #[command(alias = "ls")]
    List {
        /// Filter by status (draft|upcoming|ongoing|completed|cancelled|archived)
        #[arg(long)]
        status: Option<String>,
    },

    /// Get event details
    Get {
        /// Event ID
        id: String,
    },

    /// Create a new event
    Add {
        /// Event title
        #[arg(long, required = true)]
        title: String,

        /// Start time (RFC 3339, e.g. 2026-03-01T18:00:00Z)
        #[arg(long)]
        starts: Option<String>,

        /// End time (RFC 3339)
        #[arg(long)]
        ends: Option<String>,

        /// Venue / location
        #[arg(long)]
        location: Option<String>,

        /// Allowed attendees (check-in capacity)
        #[arg(long, required = true)]
        capacity: u32,

        /// List the event publicly
        #[arg(long)]
        public: bool,
    },

    /// Update an event
    Update {
        /// Event ID
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// Start time (RFC 3339)
        #[arg(long)]
        starts: Option<String>,

        /// End time (RFC 3339)
        #[arg(long)]
        ends: Option<String>,

        #[arg(long)]
        location: Option<String>,

        /// Allowed attendees (check-in capacity)
        #[arg(long)]
        capacity: Option<u32>,

        /// Set public listing on/off
        #[arg(long)]
        public: Option<bool>,
    },

    /// Show check-in stats for an event
    Stats {
        /// Event ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PASSES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PassesArgs {
    #[command(subcommand)]
    pub command: PassesCommand,
}

#[derive(Debug, Subcommand)]
pub enum PassesCommand {
    /// Batch-generate unused passes for an event
    #[command(alias = "gen")]
    Generate {
        /// Event ID
        event: String,

        /// Number of passes to generate (1-1000)
        #[arg(long, default_value = "1")]
        count: u32,
    },

    /// List passes for an event
    #[command(alias = "ls")]
    List {
        /// Event ID
        event: String,

        /// Filter by status (unused|used|revoked|expired)
        #[arg(long)]
        status: Option<String>,
    },

    /// Revoke an unused pass
    Revoke {
        /// Event ID
        event: String,

        /// Pass ID
        pass: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  GATE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct GateArgs {
    #[command(subcommand)]
    pub command: GateCommand,
}

#[derive(Debug, Subcommand)]
pub enum GateCommand {
    /// Scan a single pass code
    Scan {
        /// Event ID
        event: String,

        /// Pass code (from the QR scanner)
        code: String,
    },

    /// Interactive scanning loop (reads codes from stdin)
    Run {
        /// Event ID
        event: String,

        /// Resolve scans against a local copy of the roster instead of
        /// the backend -- for drills; no passes are consumed
        #[arg(long)]
        rehearse: bool,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DONORS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DonorsArgs {
    #[command(subcommand)]
    pub command: DonorsCommand,
}

#[derive(Debug, Subcommand)]
pub enum DonorsCommand {
    /// List donors
    #[command(alias = "ls")]
    List,

    /// Get donor details
    Get {
        /// Donor ID
        id: String,
    },

    /// Register a donor
    Add {
        #[arg(long, required = true)]
        name: String,

        #[arg(long)]
        phone: Option<String>,

        /// National ID (CNIC)
        #[arg(long)]
        cnic: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        city: Option<String>,
    },

    /// Update a donor record
    Update {
        /// Donor ID
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// National ID (CNIC)
        #[arg(long)]
        cnic: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        city: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DONATION BOXES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct BoxesArgs {
    #[command(subcommand)]
    pub command: BoxesCommand,
}

#[derive(Debug, Subcommand)]
pub enum BoxesCommand {
    /// List donation boxes
    #[command(alias = "ls")]
    List,

    /// Get donation box details
    Get {
        /// Box ID
        id: String,
    },

    /// Place a donation box on a collection route
    Add {
        /// Box number (as printed on the box)
        #[arg(long, required = true)]
        number: String,

        /// Name of the box holder (shopkeeper, etc.)
        #[arg(long, required = true)]
        holder: String,

        /// Region ID
        #[arg(long, required = true)]
        region: String,

        /// City ID (must belong to the region)
        #[arg(long, required = true)]
        city: String,

        /// Route ID (must belong to the city)
        #[arg(long, required = true)]
        route: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  GEOGRAPHY
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct GeoArgs {
    #[command(subcommand)]
    pub command: GeoCommand,
}

#[derive(Debug, Subcommand)]
pub enum GeoCommand {
    /// List regions
    Regions,

    /// List cities in a region
    Cities {
        /// Region ID
        region: String,
    },

    /// List collection routes in a city
    Routes {
        /// City ID
        city: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or update a profile
    Init {
        /// Profile name
        #[arg(long, default_value = "default")]
        profile: String,

        /// Backend base URL
        #[arg(long, required = true)]
        server: String,

        /// Make this the default profile
        #[arg(long)]
        default: bool,
    },

    /// Show the resolved configuration (tokens redacted)
    Show,

    /// Print the config file path
    Path,

    /// Store an API token in the system keyring
    SetToken {
        /// Profile name
        #[arg(long, default_value = "default")]
        profile: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
