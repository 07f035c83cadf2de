use clap::{Args, Parser, Subcommand};
use dirhubapp::filter::SortKey;
use dirhubapp::model::{CategoryId, DirectoryId, DirectoryStatus, ItemId};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.4.0"
/// Format for dev builds: "v0.4.0\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "dirhub",
    bin_name = "dirhub",
    version = get_version(),
    disable_help_subcommand = true,
    after_help = "Environment:\n  DIRHUB_SIMULATE_LATENCY  DIRHUB_LATENCY_SCALE  DIRHUB_WRITE_MODE  DIRHUB_FIXTURES_DIR\n  DIRHUB_LOG (log filter)  DIRHUB_LOG_FORMAT (compact|json)"
)]
#[command(about = "Browse and manage directories of listings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Read settings from this file instead of the default location
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all directories with dashboard totals
    #[command(alias = "ls")]
    List {
        /// Only directories whose name or description contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Browse public directories
    Browse(BrowseArgs),

    /// Show a public directory page
    Show {
        slug: String,

        /// Only items whose title or description contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List the items of a directory
    Items {
        directory_id: DirectoryId,

        /// Only items whose title or description contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Only items in this category id
        #[arg(short, long)]
        category: Option<CategoryId>,
    },

    /// Show one item of a directory
    Item { slug: String, item_id: ItemId },

    /// Dashboard totals, or the stats of one directory
    Stats { directory_id: Option<DirectoryId> },

    /// Create a new draft directory
    Create(CreateArgs),

    /// Update fields of a directory
    Update(UpdateArgs),

    /// Delete a directory
    #[command(alias = "rm")]
    Delete { id: DirectoryId },

    /// Show the pricing plans
    Pricing {
        /// Plan to select (free, pro, business)
        #[arg(long, value_name = "TIER")]
        select: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct BrowseArgs {
    /// Only directories whose name or description contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Topic key such as "restaurant" ("all" for every topic)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Directory status ("all" for every status)
    #[arg(long)]
    pub status: Option<String>,

    /// newest, oldest, popular or alphabetical
    #[arg(long, default_value_t = SortKey::Newest)]
    pub sort: SortKey,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// URL slug; derived from the name when omitted
    #[arg(long)]
    pub slug: Option<String>,

    /// Topic key such as "business"
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    pub id: DirectoryId,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub slug: Option<String>,

    #[arg(long)]
    pub status: Option<DirectoryStatus>,

    #[arg(long)]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_browse() {
        let cli = Cli::try_parse_from([
            "dirhub", "browse", "--category", "restaurant", "--sort", "popular", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Browse(args) => {
                assert_eq!(args.category.as_deref(), Some("restaurant"));
                assert_eq!(args.sort, SortKey::Popular);
            }
            other => panic!("Expected browse, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_update_status() {
        let cli = Cli::try_parse_from(["dirhub", "update", "3", "--status", "active"]).unwrap();
        match cli.command {
            Commands::Update(args) => {
                assert_eq!(args.id, 3);
                assert_eq!(args.status, Some(DirectoryStatus::Active));
                assert!(args.name.is_none());
            }
            other => panic!("Expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_sort_rejected() {
        assert!(Cli::try_parse_from(["dirhub", "browse", "--sort", "random"]).is_err());
    }
}
