//! CLI command definitions and argument parsing.

use civigraph_domain::{CreatedVia, EntityType, ReviewStatus};
use clap::{Parser, Subcommand};

/// Civigraph CLI - Manage the cross-entity relation graph.
#[derive(Debug, Parser)]
#[command(name = "civigraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Relation database path
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Entity catalog snapshot path
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available matchers
    Matchers,

    /// Run a matcher and queue pending relations
    Match(MatchArgs),

    /// List relations
    List(ListArgs),

    /// Show one relation
    Show(ShowArgs),

    /// Apply a review decision to a relation
    Review(ReviewArgs),

    /// Delete a relation
    Delete(DeleteArgs),

    /// Show all relations visible on an entity
    For(ForArgs),
}

/// Arguments for the match command.
#[derive(Debug, Parser)]
pub struct MatchArgs {
    /// Matcher id (see `civigraph matchers`)
    pub matcher: String,

    /// Override the matcher's acceptance threshold (0-100)
    #[arg(short, long)]
    pub threshold: Option<u8>,

    /// Suppress the progress display
    #[arg(long)]
    pub no_progress: bool,
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Filter by related entity type
    #[arg(short = 'T', long = "type", value_enum)]
    pub entity_type: Option<TypeArg>,

    /// Filter by review status
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,

    /// Filter by creation source
    #[arg(short, long, value_enum)]
    pub via: Option<ViaArg>,

    /// Filter by anchor entity id
    #[arg(short, long)]
    pub anchor: Option<String>,

    /// Substring filter on entity ids and notes
    #[arg(long)]
    pub text: Option<String>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Relation id
    pub id: String,
}

/// Arguments for the review command.
#[derive(Debug, Parser)]
pub struct ReviewArgs {
    /// Relation id
    pub id: String,

    /// Decision to apply
    #[arg(short, long, value_enum)]
    pub decision: DecisionArg,

    /// Name recorded as the reviewer
    #[arg(long)]
    pub by: Option<String>,
}

/// Arguments for the delete command.
#[derive(Debug, Parser)]
pub struct DeleteArgs {
    /// Relation id
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the for command.
#[derive(Debug, Parser)]
pub struct ForArgs {
    /// Entity id (e.g. challenge#12)
    pub entity_id: String,
}

/// Entity type argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TypeArg {
    /// Civic challenge
    Challenge,
    /// Proposed solution
    Solution,
    /// Pilot project
    Pilot,
    /// R&D project
    RdProject,
    /// Program
    Program,
    /// Policy instrument
    Policy,
    /// R&D funding call
    RdCall,
}

/// Review status argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StatusArg {
    /// Awaiting review
    Pending,
    /// Approved by a reviewer
    Approved,
    /// Rejected by a reviewer
    Rejected,
}

/// Creation source argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ViaArg {
    /// Created by hand
    Manual,
    /// Created by a matching run
    Ai,
}

/// Review decision argument (terminal states only).
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum DecisionArg {
    /// Accept the relation
    Approved,
    /// Reject the relation
    Rejected,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<TypeArg> for EntityType {
    fn from(value: TypeArg) -> Self {
        match value {
            TypeArg::Challenge => EntityType::Challenge,
            TypeArg::Solution => EntityType::Solution,
            TypeArg::Pilot => EntityType::Pilot,
            TypeArg::RdProject => EntityType::RdProject,
            TypeArg::Program => EntityType::Program,
            TypeArg::Policy => EntityType::Policy,
            TypeArg::RdCall => EntityType::RdCall,
        }
    }
}

impl From<StatusArg> for ReviewStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Pending => ReviewStatus::Pending,
            StatusArg::Approved => ReviewStatus::Approved,
            StatusArg::Rejected => ReviewStatus::Rejected,
        }
    }
}

impl From<ViaArg> for CreatedVia {
    fn from(value: ViaArg) -> Self {
        match value {
            ViaArg::Manual => CreatedVia::Manual,
            ViaArg::Ai => CreatedVia::Ai,
        }
    }
}

impl From<DecisionArg> for ReviewStatus {
    fn from(value: DecisionArg) -> Self {
        match value {
            DecisionArg::Approved => ReviewStatus::Approved,
            DecisionArg::Rejected => ReviewStatus::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_command_parsing() {
        let cli = Cli::parse_from(["civigraph", "match", "challenge-solution", "--threshold", "80"]);
        match cli.command {
            Command::Match(args) => {
                assert_eq!(args.matcher, "challenge-solution");
                assert_eq!(args.threshold, Some(80));
            }
            _ => panic!("Expected Match command"),
        }
    }

    #[test]
    fn test_list_filters() {
        let cli = Cli::parse_from([
            "civigraph", "list", "--type", "solution", "--status", "pending", "--limit", "5",
        ]);
        match cli.command {
            Command::List(args) => {
                assert!(matches!(args.entity_type, Some(TypeArg::Solution)));
                assert!(matches!(args.status, Some(StatusArg::Pending)));
                assert_eq!(args.limit, Some(5));
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_review_requires_decision() {
        let result = Cli::try_parse_from(["civigraph", "review", "some-id"]);
        assert!(result.is_err(), "--decision is mandatory");
    }

    #[test]
    fn test_decision_conversion() {
        let status: ReviewStatus = DecisionArg::Approved.into();
        assert_eq!(status, ReviewStatus::Approved);
        let status: ReviewStatus = DecisionArg::Rejected.into();
        assert_eq!(status, ReviewStatus::Rejected);
    }

    #[test]
    fn test_type_conversion_covers_all_variants() {
        let types = [
            TypeArg::Challenge,
            TypeArg::Solution,
            TypeArg::Pilot,
            TypeArg::RdProject,
            TypeArg::Program,
            TypeArg::Policy,
            TypeArg::RdCall,
        ];
        for arg in types {
            let _: EntityType = arg.into();
        }
    }
}
