//! CLI argument definitions and parsing.

use clap::{Args, Parser, Subcommand};

/// Arguments shared by every subcommand.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Backend base URL (or set `STATS_BACKEND_URL` env var).
    #[clap(long, short)]
    pub backend_url: Option<String>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "stats-tracker", about = "Sports stats tracking CLI")]
pub struct App {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every sport known to the backend.
    Sports {
        #[clap(flatten)]
        common: CommonArgs,
    },

    /// List the teams of one sport.
    Teams {
        #[clap(flatten)]
        common: CommonArgs,

        /// Sport ID.
        #[clap(long, short)]
        sport: String,
    },

    /// List the stats the backend can report for a team.
    AvailableStats {
        #[clap(flatten)]
        common: CommonArgs,

        /// Team name.
        #[clap(long, short)]
        team: String,

        /// Sport ID.
        #[clap(long, short)]
        sport: String,
    },

    /// Fetch a team's key stat values.
    TeamStats {
        #[clap(flatten)]
        common: CommonArgs,

        /// Team name.
        #[clap(long, short)]
        team: String,

        /// Sport ID.
        #[clap(long, short)]
        sport: String,

        /// Restrict the report to specific stats - repeatable.
        #[clap(long = "stat")]
        stats: Vec<String>,
    },

    /// Look up a team's name and sport by ID.
    TeamDetails {
        #[clap(flatten)]
        common: CommonArgs,

        /// Team ID.
        #[clap(long)]
        team_id: String,
    },

    /// Show the stats a user tracks for a sport, creating the sport's
    /// defaults on first access.
    Tracked {
        #[clap(flatten)]
        common: CommonArgs,

        /// Username.
        #[clap(long, short)]
        user: String,

        /// Sport ID.
        #[clap(long, short)]
        sport: String,
    },

    /// Track one stat for a user.
    Track {
        #[clap(flatten)]
        common: CommonArgs,

        /// Username.
        #[clap(long, short)]
        user: String,

        /// Sport ID.
        #[clap(long, short)]
        sport: String,

        /// Stat name, with or without the `stat:` prefix.
        #[clap(long)]
        stat: String,
    },

    /// Untrack one stat for a user. The last remaining stat cannot be
    /// removed.
    Untrack {
        #[clap(flatten)]
        common: CommonArgs,

        /// Username.
        #[clap(long, short)]
        user: String,

        /// Sport ID.
        #[clap(long, short)]
        sport: String,

        /// Stat name, with or without the `stat:` prefix.
        #[clap(long)]
        stat: String,
    },

    /// Remove every stat a user tracks for a sport.
    Reset {
        #[clap(flatten)]
        common: CommonArgs,

        /// Username.
        #[clap(long, short)]
        user: String,

        /// Sport ID.
        #[clap(long, short)]
        sport: String,
    },

    /// Remove every collection item a user holds, across sports.
    Cleanup {
        #[clap(flatten)]
        common: CommonArgs,

        /// Username.
        #[clap(long, short)]
        user: String,
    },

    /// Add a stat to a sport's catalog.
    AddKeyStat {
        #[clap(flatten)]
        common: CommonArgs,

        /// Sport name.
        #[clap(long, short)]
        sport: String,

        /// Stat name.
        #[clap(long)]
        stat: String,
    },

    /// Remove a stat from a sport's catalog.
    RemoveKeyStat {
        #[clap(flatten)]
        common: CommonArgs,

        /// Sport name.
        #[clap(long, short)]
        sport: String,

        /// Stat name.
        #[clap(long)]
        stat: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_tracked_command() {
        let app = App::try_parse_from([
            "stats-tracker",
            "tracked",
            "--backend-url",
            "http://localhost:3000/api",
            "--user",
            "alice",
            "--sport",
            "nba",
        ])
        .unwrap();

        match app.command {
            Commands::Tracked { common, user, sport } => {
                assert_eq!(common.backend_url.as_deref(), Some("http://localhost:3000/api"));
                assert!(!common.json);
                assert_eq!(user, "alice");
                assert_eq!(sport, "nba");
            }
            other => panic!("expected Tracked, got {other:?}"),
        }
    }

    #[test]
    fn team_stats_accepts_repeated_stat_filters() {
        let app = App::try_parse_from([
            "stats-tracker",
            "team-stats",
            "--team",
            "Hawks",
            "--sport",
            "nba",
            "--stat",
            "points",
            "--stat",
            "rebounds",
            "--json",
        ])
        .unwrap();

        match app.command {
            Commands::TeamStats { common, stats, .. } => {
                assert!(common.json);
                assert_eq!(stats, vec!["points", "rebounds"]);
            }
            other => panic!("expected TeamStats, got {other:?}"),
        }
    }
}
